mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "galley", about = "Render Dockerfiles for Steam dedicated game servers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter steamapp.toml into the current directory
    Init,
    /// Load a steamapp descriptor and check its invariants
    Check {
        /// Path to a .json or .toml steamapp descriptor
        file: PathBuf,
    },
    /// Render the Dockerfile for a steamapp descriptor
    Render {
        /// Path to a .json or .toml steamapp descriptor
        file: PathBuf,
        /// Write the Dockerfile here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init()?,
        Commands::Check { file } => commands::check(&file)?,
        Commands::Render { file, output } => commands::render(&file, output.as_deref())?,
    }

    Ok(())
}
