//! Dashboard counters over a feed snapshot.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::approach::date_is_approaching;
use crate::entities::NearEarthObject;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FeedStats {
    pub total: usize,
    pub hazardous: usize,
    /// Objects whose approach date is within seven days of the reference time.
    pub approaching: usize,
}

impl FeedStats {
    #[must_use]
    pub fn compute(objects: &[NearEarthObject], reference: DateTime<Utc>) -> Self {
        Self {
            total: objects.len(),
            hazardous: objects.iter().filter(|o| o.hazardous()).count(),
            approaching: objects
                .iter()
                .filter(|o| date_is_approaching(o.date, reference))
                .count(),
        }
    }
}
