use serde::Serialize;

use super::grade::Grade;

/// One roster row as entered by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentInput {
    pub name: String,
    pub raw_score: f64,
}

/// Parameters for one curve run.
///
/// `target_mean` is carried for reporting only; the transform anchors on the
/// highest raw score and the 10-point floor, not on the requested mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParameters {
    pub target_mean: f64,
    pub max_scaled_score: f64,
}

/// A curved row. `original_index` is the position in entry order so output
/// can be re-sorted into the order the roster was typed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentResult {
    pub name: String,
    pub raw_score: f64,
    pub scaled_score: f64,
    pub grade: Grade,
    pub original_index: usize,
}

/// The floor every curved score is lifted to.
pub const SCALED_FLOOR: f64 = 10.0;

/// Apply the Kennedy Curve: `scaled = k * raw + 10` with
/// `k = (max_scaled_score - 10) / highest_raw_score`, capped at 100 and
/// rounded to one decimal. The student with the highest raw score lands on
/// `max_scaled_score`.
///
/// Expects validated input (see `validation`): non-empty roster, scores in
/// [0,100], `max_scaled_score` in [0,100] and at least the highest raw
/// score. If every raw score is 0 the slope is undefined, so everyone is
/// mapped to the floor instead.
pub fn apply_kennedy_curve(
    students: &[StudentInput],
    params: &CurveParameters,
) -> Vec<StudentResult> {
    let highest = highest_raw_score(students);

    let scaling_factor = if highest > 0.0 {
        (params.max_scaled_score - SCALED_FLOOR) / highest
    } else {
        0.0
    };

    students
        .iter()
        .enumerate()
        .map(|(index, student)| {
            let mut scaled = scaling_factor * student.raw_score + SCALED_FLOOR;
            if scaled > 100.0 {
                scaled = 100.0;
            }
            let scaled = round1(scaled);

            StudentResult {
                name: student.name.clone(),
                raw_score: student.raw_score,
                scaled_score: scaled,
                grade: Grade::from_scaled(scaled),
                original_index: index,
            }
        })
        .collect()
}

/// Highest raw score in the roster, 0.0 for an empty one.
pub fn highest_raw_score(students: &[StudentInput]) -> f64 {
    students.iter().fold(0.0, |acc, s| acc.max(s.raw_score))
}

/// Round to one decimal, half away from zero.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
