//! pcmwave CLI - PCM WAVE Tools
//!
//! Command-line interface for inspecting and transforming WAV files.

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

use pcmwave::cli::{commands, Cli, Commands};
use pcmwave::DecodeOptions;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    info!("pcmwave v{}", env!("CARGO_PKG_VERSION"));

    let options = DecodeOptions { strict: cli.strict };

    match cli.command {
        Some(cmd) => handle_command(cmd, options),
        None => {
            println!("pcmwave v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands, options: DecodeOptions) -> anyhow::Result<()> {
    match cmd {
        Commands::Info { input, json } => commands::info(&input, json, options)
            .with_context(|| format!("info failed for {}", input.display())),
        Commands::Split { input, out_dir } => commands::split(&input, &out_dir, options)
            .map(|_| ())
            .with_context(|| format!("split failed for {}", input.display())),
        Commands::Mono { input, output } => commands::mono(&input, &output, options)
            .with_context(|| format!("downmix failed for {}", input.display())),
        Commands::Extract {
            input,
            output,
            start_ms,
            length_ms,
        } => commands::extract(&input, &output, start_ms, length_ms, options)
            .with_context(|| format!("extract failed for {}", input.display())),
        Commands::Convert {
            input,
            output,
            bits,
        } => commands::convert(&input, &output, bits, options)
            .with_context(|| format!("convert failed for {}", input.display())),
    }
}
