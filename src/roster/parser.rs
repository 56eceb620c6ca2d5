use crate::curve::StudentInput;

/// Parse roster text into students.
///
/// Blank lines and `#` comments are skipped. A leading header line
/// (`Name,Score` or the export header) is skipped so an exported CSV can be
/// fed back in; extra columns after the score are ignored for the same
/// reason. Quoted names are unquoted, with doubled quotes collapsed.
///
/// Returns all parse errors at once, identified by 1-based data row.
pub fn parse_roster(content: &str) -> Result<Vec<StudentInput>, Vec<String>> {
    let mut students = Vec::new();
    let mut errors = Vec::new();
    let mut row = 0usize;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if row == 0 && looks_like_header(line) {
            continue;
        }
        row += 1;

        let (name, score_field) = match split_row(line) {
            Some(parts) => parts,
            None => {
                errors.push(format!(
                    "row {}: expected \"name,score\", got {:?}",
                    row, line
                ));
                continue;
            }
        };

        let raw_score = match score_field.trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                errors.push(format!(
                    "row {} ({}): raw score {:?} is not a number",
                    row,
                    name,
                    score_field.trim()
                ));
                continue;
            }
        };

        students.push(StudentInput { name, raw_score });
    }

    if errors.is_empty() {
        Ok(students)
    } else {
        Err(errors)
    }
}

/// Split one data line into (name, score field), honoring a quoted name.
fn split_row(line: &str) -> Option<(String, &str)> {
    if let Some(rest) = line.strip_prefix('"') {
        // Quoted name; doubled quotes inside are literal quotes.
        let mut name = String::new();
        let mut chars = rest.char_indices();
        while let Some((_, c)) = chars.next() {
            if c != '"' {
                name.push(c);
                continue;
            }
            match chars.next() {
                Some((_, '"')) => name.push('"'),
                Some((j, ',')) => {
                    let after = &rest[j + 1..];
                    let score = after.split(',').next().unwrap_or(after);
                    return Some((name, score));
                }
                _ => return None,
            }
        }
        None
    } else {
        let (name, rest) = line.split_once(',')?;
        let name = name.trim().to_string();
        let score = rest.split(',').next().unwrap_or(rest);
        Some((name, score))
    }
}

/// A first line like `Name,Score` or the export header, rather than data.
fn looks_like_header(line: &str) -> bool {
    let Some((name_col, rest)) = line.split_once(',') else {
        return false;
    };
    let score_col = rest.split(',').next().unwrap_or(rest).trim();
    if score_col.parse::<f64>().is_ok() {
        return false;
    }
    let name_col = name_col.trim().trim_matches('"').to_ascii_lowercase();
    let score_col = score_col.trim_matches('"').to_ascii_lowercase();
    (name_col.contains("name") || name_col == "student") && score_col.contains("score")
}
