use cw_core::risk::assess;
use cw_core::{CoreError, RiskLevel};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RiskArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RiskResponse {
    hazardous: bool,
    miss_distance_km: f64,
    velocity_km_s: f64,
    risk_level: RiskLevel,
    risk_score: u8,
}

pub fn handle(args: &RiskArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&evaluate(args)?, flags.format)
}

fn evaluate(args: &RiskArgs) -> Result<RiskResponse, CoreError> {
    for (field, value) in [
        ("--miss-distance-km", args.miss_distance_km),
        ("--velocity-km-s", args.velocity_km_s),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(CoreError::Validation(format!(
                "{field} must be a non-negative number, got {value}"
            )));
        }
    }

    let assessment = assess(args.hazardous, args.miss_distance_km, args.velocity_km_s);
    Ok(RiskResponse {
        hazardous: args.hazardous,
        miss_distance_km: args.miss_distance_km,
        velocity_km_s: args.velocity_km_s,
        risk_level: assessment.level,
        risk_score: assessment.score,
    })
}
