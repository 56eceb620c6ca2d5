use serde::{Deserialize, Serialize};

/// Optional defaults file for the curve tool.
///
/// Example YAML:
/// ```yaml
/// defaults:
///   target_mean: 75
///   max_scaled_score: 100
/// output:
///   color: true
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub defaults: Option<CurveDefaults>,

    #[serde(default)]
    pub output: Option<OutputConfig>,
}

/// Curve parameters applied when the CLI flags are not given.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CurveDefaults {
    /// Target class mean, reported in the summary (default: 75.0)
    #[serde(default)]
    pub target_mean: Option<f64>,

    /// Score the top raw score is curved to (default: 100.0)
    #[serde(default)]
    pub max_scaled_score: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Force colors on or off; unset means auto-detect from the terminal.
    #[serde(default)]
    pub color: Option<bool>,
}

impl Config {
    pub fn target_mean(&self) -> Option<f64> {
        self.defaults.as_ref().and_then(|d| d.target_mean)
    }

    pub fn max_scaled_score(&self) -> Option<f64> {
        self.defaults.as_ref().and_then(|d| d.max_scaled_score)
    }

    pub fn color(&self) -> Option<bool> {
        self.output.as_ref().and_then(|o| o.color)
    }
}
