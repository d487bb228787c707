//! Command-line entry point: runs payroll over a roster and prints the total.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use payroll_visitor::calculation::{SalaryCalculator, default_roster, run_payroll};
use payroll_visitor::config::RosterLoader;
use payroll_visitor::error::{PayrollError, PayrollResult};

#[derive(Debug, Parser)]
#[command(version, about = "Compute total salaries for a roster of employees")]
struct Cli {
    /// YAML roster file; defaults to 10 engineers, 20 truck drivers, 1 executive
    #[arg(long, value_name = "PATH")]
    roster: Option<PathBuf>,

    /// Print the full summary as JSON instead of just the total
    #[arg(long)]
    json: bool,

    /// Log filter for stderr (overrides RUST_LOG)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn init_logger(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: &Cli) -> PayrollResult<String> {
    let employees = match &cli.roster {
        Some(path) => RosterLoader::load(path)?.employees(),
        None => default_roster(),
    };

    let mut calculator = SalaryCalculator::new();
    let summary = run_payroll(&employees, &mut calculator);

    if cli.json {
        serde_json::to_string_pretty(&summary).map_err(|e| PayrollError::OutputError {
            message: e.to_string(),
        })
    } else {
        Ok(summary.total.to_string())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.log_level.as_deref());

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
