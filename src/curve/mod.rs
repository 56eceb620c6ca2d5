pub mod engine;
pub mod grade;
pub mod stats;
pub mod validation;

pub use engine::{apply_kennedy_curve, CurveParameters, StudentInput, StudentResult};
pub use grade::Grade;
pub use stats::{summarize, CurveSummary};
pub use validation::validate;
