//! Generate and prompt command implementations.

use std::path::PathBuf;

use clap::Args;

use super::form::{ProfileArgs, resolve_profile};
use crate::app::api::{self, GenerateRequest, OutputTarget};
use crate::domain::AppError;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,
    /// Hosted model identifier (overrides config)
    #[arg(short, long)]
    pub model: Option<String>,
    /// Produce a simulated introduction without calling the model
    #[arg(long)]
    pub offline: bool,
    /// Print the prompt sent to the model
    #[arg(long)]
    pub show_prompt: bool,
    /// Save the introduction to this file
    #[arg(short, long, value_name = "FILE", conflicts_with = "save")]
    pub output: Option<PathBuf>,
    /// Save the introduction to the configured output directory
    #[arg(short, long)]
    pub save: bool,
    /// Overwrite an existing output file
    #[arg(short, long)]
    pub force: bool,
    /// Configuration file (defaults to ./tmay.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let Some(profile) = resolve_profile(args.profile)? else {
        return Ok(());
    };

    // Shown before any configuration or network work so it survives a failed call.
    if args.show_prompt {
        println!("## Detailed Prompt\n");
        println!("{}\n", api::preview_prompt(&profile)?);
    }

    let output = match (args.output, args.save) {
        (Some(path), _) => OutputTarget::Path(path),
        (None, true) => OutputTarget::Default,
        (None, false) => OutputTarget::None,
    };

    let outcome = api::generate(GenerateRequest {
        profile,
        config_path: args.config,
        model: args.model,
        offline: args.offline,
        output,
        overwrite: args.force,
    })?;

    println!("## Generated Introduction\n");
    println!("{}", outcome.introduction.text);

    if let Some(path) = &outcome.saved_to {
        println!();
        println!("✅ Saved introduction to {}", path.display());
    }
    Ok(())
}

pub fn run_prompt(args: ProfileArgs) -> Result<(), AppError> {
    let Some(profile) = resolve_profile(args)? else {
        return Ok(());
    };

    println!("{}", api::preview_prompt(&profile)?);
    Ok(())
}
