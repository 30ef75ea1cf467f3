//! CLI Adapter.

mod form;
mod generate;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "tmay")]
#[command(version)]
#[command(
    about = "Draft a personalized 'Tell Me About Yourself' introduction",
    long_about = None
)]
struct Cli {
    /// Enable debug logging (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an introduction with the hosted model
    #[clap(visible_alias = "g")]
    Generate(generate::GenerateArgs),
    /// Print the prompt without calling the model
    #[clap(visible_alias = "p")]
    Prompt(form::ProfileArgs),
    /// List available tones
    Tones,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate(args) => generate::run_generate(args),
        Commands::Prompt(args) => generate::run_prompt(args),
        Commands::Tones => {
            for tone in crate::app::api::tones() {
                println!("{}", tone);
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
