use super::engine::{highest_raw_score, CurveParameters, StudentInput};

/// Validate roster and parameters before curving.
/// Returns all validation errors at once (not just the first), in a fixed
/// order: per-row checks in row order, then roster-level and parameter
/// checks. Rows are reported 1-based, by name once one is known.
pub fn validate(students: &[StudentInput], params: &CurveParameters) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (i, student) in students.iter().enumerate() {
        let row = i + 1;
        if student.name.trim().is_empty() {
            errors.push(format!("row {}: student name is empty", row));
        }
        if !student.raw_score.is_finite() {
            errors.push(format!(
                "row {} ({}): raw score is not a number",
                row,
                label(student)
            ));
        } else if student.raw_score < 0.0 || student.raw_score > 100.0 {
            errors.push(format!(
                "row {} ({}): raw score {} is outside 0-100",
                row,
                label(student),
                student.raw_score
            ));
        }
    }

    if students.is_empty() {
        errors.push("no students provided".to_string());
    }

    if !params.target_mean.is_finite() || params.target_mean < 0.0 || params.target_mean > 100.0 {
        errors.push(format!(
            "target mean {} is outside 0-100",
            params.target_mean
        ));
    }

    if !params.max_scaled_score.is_finite()
        || params.max_scaled_score < 0.0
        || params.max_scaled_score > 100.0
    {
        errors.push(format!(
            "max scaled score {} is outside 0-100",
            params.max_scaled_score
        ));
    } else if !students.is_empty() {
        let highest = highest_raw_score(students);
        if params.max_scaled_score < highest {
            errors.push(format!(
                "max scaled score {} must be at least the highest raw score ({})",
                params.max_scaled_score, highest
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn label(student: &StudentInput) -> &str {
    let trimmed = student.name.trim();
    if trimmed.is_empty() {
        "unnamed"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str, raw: f64) -> StudentInput {
        StudentInput {
            name: name.to_string(),
            raw_score: raw,
        }
    }

    fn params(mean: f64, max: f64) -> CurveParameters {
        CurveParameters {
            target_mean: mean,
            max_scaled_score: max,
        }
    }

    #[test]
    fn test_valid_roster() {
        let students = vec![student("Alice", 80.0), student("Bob", 95.0)];
        assert!(validate(&students, &params(75.0, 100.0)).is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let students = vec![student("   ", 80.0)];
        let errors = validate(&students, &params(75.0, 100.0)).unwrap_err();
        assert!(errors[0].contains("row 1"));
        assert!(errors[0].contains("name is empty"));
    }

    #[test]
    fn test_out_of_range_score_rejected() {
        let students = vec![student("Alice", 105.0)];
        let errors = validate(&students, &params(75.0, 100.0)).unwrap_err();
        assert!(errors[0].contains("Alice"));
        assert!(errors[0].contains("105"));
    }

    #[test]
    fn test_nan_score_rejected() {
        let students = vec![student("Alice", f64::NAN)];
        let errors = validate(&students, &params(75.0, 100.0)).unwrap_err();
        assert!(errors[0].contains("not a number"));
    }

    #[test]
    fn test_empty_roster_rejected() {
        let errors = validate(&[], &params(75.0, 100.0)).unwrap_err();
        assert_eq!(errors, vec!["no students provided".to_string()]);
    }

    #[test]
    fn test_target_mean_out_of_range() {
        let students = vec![student("Alice", 80.0)];
        let errors = validate(&students, &params(120.0, 100.0)).unwrap_err();
        assert!(errors[0].contains("target mean"));
    }

    #[test]
    fn test_max_below_highest_raw_rejected() {
        let students = vec![student("Alice", 85.0)];
        let errors = validate(&students, &params(75.0, 70.0)).unwrap_err();
        assert!(errors[0].contains("at least the highest raw score"));
        assert!(errors[0].contains("85"));
    }

    #[test]
    fn test_max_equal_to_highest_raw_accepted() {
        let students = vec![student("Alice", 85.0)];
        assert!(validate(&students, &params(75.0, 85.0)).is_ok());
    }

    #[test]
    fn test_collects_all_errors_in_row_order() {
        let students = vec![student("", 150.0), student("Bob", -1.0)];
        let errors = validate(&students, &params(75.0, 100.0)).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("row 1") && errors[0].contains("name"));
        assert!(errors[1].contains("row 1") && errors[1].contains("150"));
        assert!(errors[2].contains("row 2") && errors[2].contains("Bob"));
    }
}
