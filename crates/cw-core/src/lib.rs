//! # cw-core
//!
//! Core types, risk model, and error types for Cosmic Watch.
//!
//! This crate provides the foundational types shared across all Cosmic Watch crates:
//! - Near-Earth object records and their watchlist projection
//! - Risk levels, filters, and the pure risk scoring model
//! - The built-in fallback sample feed
//! - Close-approach window helpers and dashboard counters
//! - Cross-cutting error types

pub mod approach;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod risk;
pub mod sample;
pub mod stats;

pub use entities::{NearEarthObject, ObjectDetail, WatchlistEntry};
pub use enums::{RiskFilter, RiskLevel};
pub use errors::CoreError;
pub use risk::RiskAssessment;
