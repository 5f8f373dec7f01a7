//! Pagelift CLI - multi-page site companion for bundler projects.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "pagelift")]
#[command(about = "Multi-page site companion: dev server, entry points, output flattening")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to pagelift.toml config file
    #[arg(short, long, default_value = "pagelift.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a multi-page site in the current project
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Start the development server
    Dev {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Pages directory relative to the project root
        #[arg(long)]
        pages: Option<String>,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },

    /// Print the bundler entry point map as JSON
    Entries {
        /// Pages directory relative to the project root
        #[arg(long)]
        pages: Option<String>,

        /// Index file relative to the project root
        #[arg(long)]
        index: Option<String>,
    },

    /// Move built page HTML to the output root
    Flatten {
        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pages directory relative to the output root
        #[arg(long)]
        pages: Option<String>,
    },

    /// Preview built output
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// Directory to serve
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(yes).await?;
        }
        Commands::Dev {
            port,
            pages,
            no_open,
        } => {
            commands::dev::run(&cli.config, port, pages, !no_open).await?;
        }
        Commands::Entries { pages, index } => {
            commands::entries::run(&cli.config, pages, index)?;
        }
        Commands::Flatten { output, pages } => {
            commands::flatten::run(&cli.config, output, pages)?;
        }
        Commands::Serve { port, dir } => {
            commands::serve::run(&cli.config, port, dir).await?;
        }
    }

    Ok(())
}
