pub mod csv;
pub mod formatter;

pub use csv::{build_csv, write_csv, DEFAULT_CSV_FILENAME};
pub use formatter::{
    format_json, format_number, format_one_decimal, format_results_table, format_summary,
    format_tsv, should_use_colors,
};
