use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::Path;

use crate::curve::StudentResult;
use crate::output::formatter::format_number;

/// Default export filename.
pub const DEFAULT_CSV_FILENAME: &str = "kennedy_curve_results.csv";

const CSV_HEADER: &str = "Student Name,Raw Score,Scaled Score,Grade";

/// Build the export CSV: header line, then one row per student in the order
/// given (original entry order). Names and grades are quoted; embedded
/// quotes are doubled.
pub fn build_csv(results: &[StudentResult]) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');
    for result in results {
        csv.push_str(&format!(
            "\"{}\",{},{},\"{}\"\n",
            escape_quotes(&result.name),
            format_number(result.raw_score),
            format_number(result.scaled_score),
            result.grade
        ));
    }
    csv
}

/// Write the export CSV atomically so a failed run never leaves a truncated
/// file behind.
pub fn write_csv(path: &Path, results: &[StudentResult]) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    file.write_all(build_csv(results).as_bytes())
        .with_context(|| format!("Failed to write results to {}", path.display()))?;

    file.commit()
        .with_context(|| format!("Failed to save results to {}", path.display()))?;

    Ok(())
}

fn escape_quotes(name: &str) -> String {
    name.replace('"', "\"\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{apply_kennedy_curve, CurveParameters, StudentInput};

    fn results() -> Vec<StudentResult> {
        let students = vec![
            StudentInput {
                name: "Alice".to_string(),
                raw_score: 80.0,
            },
            StudentInput {
                name: "Bob".to_string(),
                raw_score: 95.0,
            },
        ];
        apply_kennedy_curve(
            &students,
            &CurveParameters {
                target_mean: 75.0,
                max_scaled_score: 100.0,
            },
        )
    }

    // Minimal reader for round-trip checks: quoted name, raw, scaled,
    // quoted grade.
    fn parse_csv(csv: &str) -> Vec<(String, f64, f64, String)> {
        csv.lines()
            .skip(1)
            .map(|line| {
                let rest = line.strip_prefix('"').unwrap();
                let (name, rest) = rest.split_once("\",").unwrap();
                let mut fields = rest.splitn(3, ',');
                let raw: f64 = fields.next().unwrap().parse().unwrap();
                let scaled: f64 = fields.next().unwrap().parse().unwrap();
                let grade = fields.next().unwrap().trim_matches('"').to_string();
                (name.replace("\"\"", "\""), raw, scaled, grade)
            })
            .collect()
    }

    #[test]
    fn test_header_and_row_format() {
        let csv = build_csv(&results());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Student Name,Raw Score,Scaled Score,Grade");
        assert_eq!(lines[1], "\"Alice\",80,85.8,\"B\"");
        assert_eq!(lines[2], "\"Bob\",95,100,\"A+\"");
    }

    #[test]
    fn test_round_trip_recovers_displayed_tuples() {
        let results = results();
        let rows = parse_csv(&build_csv(&results));
        assert_eq!(rows.len(), results.len());
        for (row, result) in rows.iter().zip(&results) {
            assert_eq!(row.0, result.name);
            assert_eq!(row.1, result.raw_score);
            assert_eq!(row.2, result.scaled_score);
            assert_eq!(row.3, result.grade.as_str());
        }
    }

    #[test]
    fn test_quote_in_name_is_doubled() {
        let mut rows = results();
        rows[0].name = "Jimmy \"The Greek\" Smith".to_string();
        let csv = build_csv(&rows);
        assert!(csv.contains("\"Jimmy \"\"The Greek\"\" Smith\""));
        let parsed = parse_csv(&csv);
        assert_eq!(parsed[0].0, "Jimmy \"The Greek\" Smith");
    }

    #[test]
    fn test_write_and_read_back() {
        let path = std::env::temp_dir().join("kennedy_curve_test_export.csv");
        let _ = std::fs::remove_file(&path);

        let results = results();
        write_csv(&path, &results).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, build_csv(&results));

        let _ = std::fs::remove_file(&path);
    }
}
