use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::RiskLevel;
use crate::risk::{self, RiskAssessment};

/// A near-Earth object with its derived risk.
///
/// The hazard flag, miss distance and velocity are only settable through
/// [`NearEarthObject::new`], which derives `risk_level` and `risk_score`
/// from them in one step. Deserialization goes through the same path and
/// ignores any risk fields present in the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(from = "ObjectRepr")]
pub struct NearEarthObject {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_limited: Option<String>,
    pub diameter_km: f64,
    velocity_km_s: f64,
    miss_distance_km: f64,
    pub date: NaiveDate,
    hazardous: bool,
    risk_level: RiskLevel,
    risk_score: u8,
}

impl NearEarthObject {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        diameter_km: f64,
        velocity_km_s: f64,
        miss_distance_km: f64,
        date: NaiveDate,
        hazardous: bool,
    ) -> Self {
        let RiskAssessment { level, score } =
            risk::assess(hazardous, miss_distance_km, velocity_km_s);
        Self {
            id: id.into(),
            name: name.into(),
            name_limited: None,
            diameter_km,
            velocity_km_s,
            miss_distance_km,
            date,
            hazardous,
            risk_level: level,
            risk_score: score,
        }
    }

    #[must_use]
    pub fn with_name_limited(mut self, name_limited: impl Into<String>) -> Self {
        self.name_limited = Some(name_limited.into());
        self
    }

    /// Short name when the feed provides one, full name otherwise.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name_limited.as_deref().unwrap_or(&self.name)
    }

    #[must_use]
    pub const fn velocity_km_s(&self) -> f64 {
        self.velocity_km_s
    }

    #[must_use]
    pub const fn miss_distance_km(&self) -> f64 {
        self.miss_distance_km
    }

    #[must_use]
    pub const fn hazardous(&self) -> bool {
        self.hazardous
    }

    #[must_use]
    pub const fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    #[must_use]
    pub const fn risk_score(&self) -> u8 {
        self.risk_score
    }

    #[must_use]
    pub const fn risk(&self) -> RiskAssessment {
        RiskAssessment {
            level: self.risk_level,
            score: self.risk_score,
        }
    }
}

/// Serialized shape of [`NearEarthObject`]. Unknown fields, including any
/// `risk_level`/`risk_score`, are ignored and the risk is re-derived.
#[derive(Deserialize, JsonSchema)]
struct ObjectRepr {
    id: String,
    name: String,
    #[serde(default)]
    name_limited: Option<String>,
    diameter_km: f64,
    velocity_km_s: f64,
    miss_distance_km: f64,
    date: NaiveDate,
    hazardous: bool,
}

impl From<ObjectRepr> for NearEarthObject {
    fn from(repr: ObjectRepr) -> Self {
        let object = Self::new(
            repr.id,
            repr.name,
            repr.diameter_km,
            repr.velocity_km_s,
            repr.miss_distance_km,
            repr.date,
            repr.hazardous,
        );
        match repr.name_limited {
            Some(short) => object.with_name_limited(short),
            None => object,
        }
    }
}

/// A bookmarked object, reduced to what the watchlist needs to render offline.
///
/// `date` stays a free-form string: entries persisted by older builds or
/// edited by hand may carry anything, and approach checks treat unparseable
/// values as "not approaching".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WatchlistEntry {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_limited: Option<String>,
    pub hazardous: bool,
    #[serde(default)]
    pub date: Option<String>,
    pub risk_level: RiskLevel,
    pub added_at: DateTime<Utc>,
}

impl WatchlistEntry {
    #[must_use]
    pub fn from_object(object: &NearEarthObject, added_at: DateTime<Utc>) -> Self {
        Self {
            id: object.id.clone(),
            name: object.name.clone(),
            name_limited: object.name_limited.clone(),
            hazardous: object.hazardous(),
            date: Some(object.date.format("%Y-%m-%d").to_string()),
            risk_level: object.risk_level(),
            added_at,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name_limited.as_deref().unwrap_or(&self.name)
    }
}

/// Result of looking an id up across the live feed and the watchlist.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", content = "object", rename_all = "snake_case")]
pub enum ObjectDetail {
    /// Full record from the current feed.
    Live(NearEarthObject),
    /// Only the bookmarked projection is known; the feed no longer carries it.
    Bookmarked(WatchlistEntry),
}

impl ObjectDetail {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Live(object) => &object.id,
            Self::Bookmarked(entry) => &entry.id,
        }
    }

    #[must_use]
    pub const fn risk_level(&self) -> RiskLevel {
        match self {
            Self::Live(object) => object.risk_level(),
            Self::Bookmarked(entry) => entry.risk_level,
        }
    }

    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }
}
