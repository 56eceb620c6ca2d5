use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::curve::{CurveSummary, Grade, StudentResult};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Render a number the way the entry form showed it: no forced decimals.
/// f64's shortest display already does this ("80", "72.25", "85.8").
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

/// Render an average or scaled extremum with one fixed decimal.
pub fn format_one_decimal(value: f64) -> String {
    format!("{:.1}", value)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format the nine-field summary block, one labeled line per statistic.
pub fn format_summary(summary: &CurveSummary, use_colors: bool) -> String {
    let rows = [
        ("Total Students", summary.count.to_string()),
        ("Raw Score Average", format_one_decimal(summary.raw_average)),
        (
            "Scaled Score Average",
            format_one_decimal(summary.scaled_average),
        ),
        ("Target Mean", format_number(summary.target_mean)),
        ("Max Scaled Score", format_number(summary.max_scaled_score)),
        ("Highest Raw Score", format_number(summary.raw_max)),
        ("Lowest Raw Score", format_number(summary.raw_min)),
        ("Highest Scaled Score", format_one_decimal(summary.scaled_max)),
        ("Lowest Scaled Score", format_one_decimal(summary.scaled_min)),
    ];

    rows.iter()
        .map(|(label, value)| {
            if use_colors {
                format!("{:<21} {}", label.dimmed(), value.bold())
            } else {
                format!("{:<21} {}", label, value)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format curved results as a table: Name, Raw, Scaled, Grade.
/// Rows are emitted in the order given, which the caller keeps in original
/// entry order. Name column shrinks to fit narrow terminals.
pub fn format_results_table(results: &[StudentResult], use_colors: bool) -> String {
    if results.is_empty() {
        return "No students to display.".to_string();
    }

    // Raw 7 + scaled 7 + grade 5 + separators
    let numeric_width = 7 + 2 + 7 + 2 + 5;
    let name_width = results
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);
    let name_width = match get_terminal_width() {
        Some(w) if w > numeric_width + 10 => name_width.min(w - numeric_width - 1),
        Some(_) => name_width.min(20),
        None => name_width,
    };

    let mut lines = Vec::with_capacity(results.len() + 1);
    let header = format!(
        "{:<name_width$}  {:>7}  {:>7}  {:<5}",
        "Name", "Raw", "Scaled", "Grade"
    );
    if use_colors {
        lines.push(header.dimmed().to_string());
    } else {
        lines.push(header);
    }

    for result in results {
        let name = truncate_name(&result.name, name_width);
        let raw = format_number(result.raw_score);
        let scaled = format_number(result.scaled_score);
        if use_colors {
            // Pad before coloring so ANSI codes don't break alignment.
            let scaled_padded = format!("{:>7}", scaled);
            lines.push(format!(
                "{:<name_width$}  {:>7}  {}  {}",
                name,
                raw,
                scaled_padded.cyan(),
                colored_grade(result.grade)
            ));
        } else {
            lines.push(format!(
                "{:<name_width$}  {:>7}  {:>7}  {}",
                name, raw, scaled, result.grade
            ));
        }
    }

    lines.join("\n")
}

fn colored_grade(grade: Grade) -> String {
    match grade.as_str().chars().next() {
        Some('A') => grade.to_string().green().bold().to_string(),
        Some('B') => grade.to_string().cyan().bold().to_string(),
        Some('C') => grade.to_string().yellow().bold().to_string(),
        Some('D') => grade.to_string().magenta().bold().to_string(),
        _ => grade.to_string().red().bold().to_string(),
    }
}

/// Format results as tab-separated values for scripting
/// Columns: name, raw, scaled, grade (no headers, no colors)
pub fn format_tsv(results: &[StudentResult]) -> String {
    results
        .iter()
        .map(|r| {
            format!(
                "{}\t{}\t{}\t{}",
                r.name,
                format_number(r.raw_score),
                format_number(r.scaled_score),
                r.grade
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format summary plus results as pretty JSON with stable field names.
pub fn format_json(summary: &CurveSummary, results: &[StudentResult]) -> String {
    let doc = serde_json::json!({
        "summary": summary,
        "results": results,
    });
    serde_json::to_string_pretty(&doc).expect("curve results serialize")
}
