use serde::Serialize;
use std::fmt;

/// Letter grade on the standard plus/minus scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D+")]
    DPlus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D-")]
    DMinus,
    #[serde(rename = "F")]
    F,
}

/// Threshold table checked highest-first; first match wins.
const THRESHOLDS: [(f64, Grade); 12] = [
    (97.0, Grade::APlus),
    (93.0, Grade::A),
    (90.0, Grade::AMinus),
    (87.0, Grade::BPlus),
    (83.0, Grade::B),
    (80.0, Grade::BMinus),
    (77.0, Grade::CPlus),
    (73.0, Grade::C),
    (70.0, Grade::CMinus),
    (67.0, Grade::DPlus),
    (63.0, Grade::D),
    (60.0, Grade::DMinus),
];

impl Grade {
    /// Map a scaled score to a letter grade.
    pub fn from_scaled(score: f64) -> Self {
        for (threshold, grade) in THRESHOLDS {
            if score >= threshold {
                return grade;
            }
        }
        Grade::F
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::DPlus => "D+",
            Grade::D => "D",
            Grade::DMinus => "D-",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_exact() {
        assert_eq!(Grade::from_scaled(97.0), Grade::APlus);
        assert_eq!(Grade::from_scaled(96.9), Grade::A);
        assert_eq!(Grade::from_scaled(60.0), Grade::DMinus);
        assert_eq!(Grade::from_scaled(59.9), Grade::F);
    }

    #[test]
    fn test_every_band() {
        let cases = [
            (100.0, "A+"),
            (95.0, "A"),
            (91.5, "A-"),
            (88.0, "B+"),
            (85.0, "B"),
            (81.0, "B-"),
            (78.0, "C+"),
            (74.0, "C"),
            (70.0, "C-"),
            (68.0, "D+"),
            (64.0, "D"),
            (61.0, "D-"),
            (10.0, "F"),
        ];
        for (score, expected) in cases {
            assert_eq!(Grade::from_scaled(score).as_str(), expected, "score {score}");
        }
    }

    #[test]
    fn test_serializes_as_symbol() {
        assert_eq!(serde_json::to_string(&Grade::APlus).unwrap(), "\"A+\"");
        assert_eq!(serde_json::to_string(&Grade::F).unwrap(), "\"F\"");
    }
}
