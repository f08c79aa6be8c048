//! mixdown-cli - splice, mix and concatenate audio into 16-bit WAV files.

use clap::Parser;
use env_logger::Env;
use log::info;

use mixdown::cli::{commands, Cli, Commands};
use mixdown::engine::Mixdown;
use mixdown::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    info!("mixdown v{}", env!("CARGO_PKG_VERSION"));

    let session = Mixdown::new(cli.sample_rate);

    match cli.command {
        Some(cmd) => handle_command(&session, cmd).await,
        None => {
            println!("mixdown v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

async fn handle_command(session: &Mixdown, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Merge {
            inputs,
            output,
            duration,
        } => commands::merge(session, &inputs, &output, duration).await,
        Commands::Concat {
            inputs,
            output,
            duration,
        } => commands::concat(session, &inputs, &output, duration).await,
        Commands::Slice {
            input,
            output,
            start,
            end,
            duration,
        } => commands::slice(session, &input, &output, start, end, duration).await,
    }
}
