//! Risk model for near-Earth objects.
//!
//! The score accumulates weighted threshold bonuses and is capped at 100:
//!
//! ```text
//! hazardous flag                 +60
//! miss distance < 10,000,000 km  +20
//! miss distance <  5,000,000 km  +15   (stacks with the line above)
//! velocity      > 20 km/s        +5
//! ```
//!
//! The level is read off the same score: `HIGH` from 60 (only reachable with
//! the hazard flag), `MEDIUM` from 35 (only reachable inside 5,000,000 km),
//! `LOW` otherwise. That is the same classification as "hazardous → HIGH,
//! closer than 5,000,000 km → MEDIUM, else LOW", computed in one place so
//! `risk_level` and `risk_score` can never disagree.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::RiskLevel;

pub const HAZARD_BONUS: u8 = 60;
pub const NEAR_DISTANCE_KM: f64 = 10_000_000.0;
pub const NEAR_BONUS: u8 = 20;
pub const CLOSE_DISTANCE_KM: f64 = 5_000_000.0;
pub const CLOSE_BONUS: u8 = 15;
pub const FAST_VELOCITY_KM_S: f64 = 20.0;
pub const FAST_BONUS: u8 = 5;
pub const MAX_SCORE: u8 = 100;

/// Score at or above which an object is `HIGH`.
pub const HIGH_SCORE_THRESHOLD: u8 = HAZARD_BONUS;
/// Score at or above which an object is at least `MEDIUM`.
pub const MEDIUM_SCORE_THRESHOLD: u8 = NEAR_BONUS + CLOSE_BONUS;

/// Derived risk of a single object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    /// Always in `0..=100`.
    pub score: u8,
}

/// Assess an object from its hazard flag, miss distance and velocity.
///
/// Pure: same inputs, same output. Non-finite distances or velocities never
/// satisfy a threshold, so they contribute nothing.
#[must_use]
pub fn assess(hazardous: bool, miss_distance_km: f64, velocity_km_s: f64) -> RiskAssessment {
    let score = risk_score(hazardous, miss_distance_km, velocity_km_s);
    RiskAssessment {
        level: level_for_score(score),
        score,
    }
}

/// Weighted threshold score, capped at [`MAX_SCORE`].
#[must_use]
pub fn risk_score(hazardous: bool, miss_distance_km: f64, velocity_km_s: f64) -> u8 {
    let mut score: u8 = 0;
    if hazardous {
        score += HAZARD_BONUS;
    }
    if miss_distance_km < NEAR_DISTANCE_KM {
        score += NEAR_BONUS;
    }
    if miss_distance_km < CLOSE_DISTANCE_KM {
        score += CLOSE_BONUS;
    }
    if velocity_km_s > FAST_VELOCITY_KM_S {
        score += FAST_BONUS;
    }
    score.min(MAX_SCORE)
}

/// Classification for a given score.
#[must_use]
pub const fn level_for_score(score: u8) -> RiskLevel {
    if score >= HIGH_SCORE_THRESHOLD {
        RiskLevel::High
    } else if score >= MEDIUM_SCORE_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Level computed straight from the raw fields.
#[must_use]
pub fn risk_level(hazardous: bool, miss_distance_km: f64, velocity_km_s: f64) -> RiskLevel {
    assess(hazardous, miss_distance_km, velocity_km_s).level
}
