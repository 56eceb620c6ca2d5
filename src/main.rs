use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use kennedy_curve::config;
use kennedy_curve::curve::{apply_kennedy_curve, summarize, validate, CurveParameters};
use kennedy_curve::output;
use kennedy_curve::roster;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_IO: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Curve a roster of raw scores (default if no subcommand)
    Curve(CurveArgs),
    /// Create a config file with your preferred defaults
    Init,
}

#[derive(Args, Debug, Default)]
struct CurveArgs {
    /// Roster file with one "name,score" per line; reads stdin when piped,
    /// prompts row by row otherwise
    roster: Option<PathBuf>,

    /// Target class mean, reported in the summary (default 75)
    #[arg(long)]
    target_mean: Option<f64>,

    /// Score the highest raw score is curved to (default 100)
    #[arg(long = "max")]
    max_scaled_score: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Also export results as CSV, optionally to a given path
    #[arg(long, value_name = "PATH", num_args = 0..=1,
          default_missing_value = output::DEFAULT_CSV_FILENAME)]
    csv: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
enum OutputFormat {
    #[default]
    Table,
    Tsv,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "kennedy-curve")]
#[command(about = "Grade-curving CLI: rescale raw scores and assign letter grades", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/kennedy-curve/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Curve(CurveArgs::default()));

    let config_path = cli.config.map(PathBuf::from);
    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let code = match command {
        Commands::Init => match config::run_init_wizard(None) {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                eprintln!("Init error: {}", e);
                EXIT_IO
            }
        },
        Commands::Curve(args) => run_curve(args, &config, cli.verbose),
    };
    std::process::exit(code);
}

fn run_curve(args: CurveArgs, config: &config::Config, verbose: bool) -> i32 {
    let students = match collect_students(&args) {
        Ok(s) => s,
        Err(code) => return code,
    };

    if verbose {
        eprintln!("Loaded {} students", students.len());
    }

    // CLI beats config file beats built-in defaults.
    let params = CurveParameters {
        target_mean: args
            .target_mean
            .or(config.target_mean())
            .unwrap_or(75.0),
        max_scaled_score: args
            .max_scaled_score
            .or(config.max_scaled_score())
            .unwrap_or(100.0),
    };

    if verbose {
        eprintln!(
            "Curving with target mean {} and max scaled score {}",
            params.target_mean, params.max_scaled_score
        );
    }

    if let Err(errors) = validate(&students, &params) {
        eprintln!("Input errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return EXIT_INPUT;
    }

    let mut results = apply_kennedy_curve(&students, &params);
    // Entry order is the display contract, whatever order curving used.
    results.sort_by_key(|r| r.original_index);
    let summary = summarize(&results, &params);

    let use_colors = !args.no_color
        && args.format == OutputFormat::Table
        && config.color().unwrap_or_else(output::should_use_colors);

    match args.format {
        OutputFormat::Table => {
            println!("{}", output::format_summary(&summary, use_colors));
            println!();
            println!("{}", output::format_results_table(&results, use_colors));
        }
        OutputFormat::Tsv => {
            let tsv = output::format_tsv(&results);
            if !tsv.is_empty() {
                println!("{}", tsv);
            }
        }
        OutputFormat::Json => {
            println!("{}", output::format_json(&summary, &results));
        }
    }

    if let Some(path) = args.csv {
        if let Err(e) = output::write_csv(&path, &results) {
            eprintln!("Export error: {}", e);
            return EXIT_IO;
        }
        eprintln!("Results exported to {}", path.display());
    }

    EXIT_SUCCESS
}

/// Pull the roster from the file, a pipe, or the terminal.
fn collect_students(
    args: &CurveArgs,
) -> Result<Vec<kennedy_curve::curve::StudentInput>, i32> {
    let content = if let Some(path) = &args.roster {
        match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to read roster file at {}: {}", path.display(), e);
                return Err(EXIT_IO);
            }
        }
    } else if !std::io::stdin().is_terminal() {
        let mut buf = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
            eprintln!("Failed to read roster from stdin: {}", e);
            return Err(EXIT_IO);
        }
        buf
    } else {
        return match roster::prompt_roster() {
            Ok(s) => Ok(s),
            Err(e) => {
                eprintln!("Entry error: {}", e);
                Err(EXIT_IO)
            }
        };
    };

    roster::parse_roster(&content).map_err(|errors| {
        eprintln!("Roster errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        EXIT_INPUT
    })
}
