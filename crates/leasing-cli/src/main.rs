mod commands;
mod input;
mod logging;
mod output;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::lease::LeaseArgs;
use commands::text::{FormatArgs, ParseArgs};

/// Equipment-leasing net cost simulator
#[derive(Parser)]
#[command(
    name = "leasing",
    version,
    about = "Equipment-leasing net cost simulator",
    long_about = "Estimates the monthly rent of an equipment lease (annuity payment) and \
                  its net cost after PIS/COFINS credit and income tax reduction. Field \
                  values are free text and are normalized the same way a form would."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate rent installment and net investment
    Calculate(LeaseArgs),
    /// Render the results panel with formatted values
    Report(LeaseArgs),
    /// Normalize free text into a number
    Parse(ParseArgs),
    /// Format a number as Brazilian reais
    Format(FormatArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Calculate(args) => commands::lease::run_calculate(args),
        Commands::Report(args) => commands::lease::run_report(args),
        Commands::Parse(args) => commands::text::run_parse(args),
        Commands::Format(args) => commands::text::run_format(args),
        Commands::Version => {
            println!("leasing {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
