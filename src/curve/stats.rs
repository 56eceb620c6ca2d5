use serde::Serialize;

use super::engine::{CurveParameters, StudentResult};

/// Aggregate statistics for one curve run — the nine fields shown in the
/// summary block. Averages are plain arithmetic means; rounding is left to
/// the display layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveSummary {
    pub count: usize,
    pub raw_average: f64,
    pub scaled_average: f64,
    pub target_mean: f64,
    pub max_scaled_score: f64,
    pub raw_max: f64,
    pub raw_min: f64,
    pub scaled_max: f64,
    pub scaled_min: f64,
}

pub fn summarize(results: &[StudentResult], params: &CurveParameters) -> CurveSummary {
    let count = results.len();
    let n = count as f64;

    let raw_sum: f64 = results.iter().map(|r| r.raw_score).sum();
    let scaled_sum: f64 = results.iter().map(|r| r.scaled_score).sum();

    let raw = |r: &StudentResult| r.raw_score;
    let scaled = |r: &StudentResult| r.scaled_score;

    CurveSummary {
        count,
        raw_average: raw_sum / n,
        scaled_average: scaled_sum / n,
        target_mean: params.target_mean,
        max_scaled_score: params.max_scaled_score,
        raw_max: results.iter().map(raw).fold(f64::NEG_INFINITY, f64::max),
        raw_min: results.iter().map(raw).fold(f64::INFINITY, f64::min),
        scaled_max: results.iter().map(scaled).fold(f64::NEG_INFINITY, f64::max),
        scaled_min: results.iter().map(scaled).fold(f64::INFINITY, f64::min),
    }
}
