use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::curve::StudentInput;

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Collect a roster row by row at the terminal. An empty name ends entry.
///
/// Only numeric parsing is retried here; range checks and the rest of the
/// rules run in `curve::validation` afterwards, same as for file input.
pub fn prompt_roster() -> Result<Vec<StudentInput>> {
    println!("Enter students one per line; leave the name blank when done.");

    let mut students = Vec::new();
    loop {
        let name = prompt(&format!("Student {} name: ", students.len() + 1))?;
        if name.is_empty() {
            break;
        }

        let raw_score = loop {
            let field = prompt(&format!("Raw score for {} (0-100): ", name))?;
            match field.parse::<f64>() {
                Ok(v) => break v,
                Err(_) => println!("  '{}' is not a number, try again.", field),
            }
        };

        students.push(StudentInput { name, raw_score });
    }
    Ok(students)
}
