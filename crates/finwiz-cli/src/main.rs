mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::borrow::{AmortizeArgs, QuoteArgs};
use commands::invest::ProjectArgs;

/// Loan and savings calculators behind the FinWiz dashboard
#[derive(Parser)]
#[command(
    name = "finwiz",
    version,
    about = "Loan amortisation and contribution projection calculators",
    long_about = "Computes level-payment amortisation schedules, prices the built-in \
                  loan offers and projects recurring monthly contributions, with \
                  decimal precision."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log computation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a loan amortisation schedule
    Amortize(AmortizeArgs),
    /// List the available loan offers
    Offers,
    /// Quote one of the loan offers
    Quote(QuoteArgs),
    /// Project recurring monthly contributions
    Project(ProjectArgs),
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

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Amortize(args) => commands::borrow::run_amortize(args),
        Commands::Offers => commands::borrow::run_offers(),
        Commands::Quote(args) => commands::borrow::run_quote(args),
        Commands::Project(args) => commands::invest::run_project(args),
        Commands::Version => {
            println!("finwiz {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            log::debug!("command failed: {e:?}");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
