use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "foodscan")]
#[command(about = "Scan a product barcode and get a dietary-safety verdict")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.foodscan/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a single barcode
    Lookup {
        /// The barcode payload (e.g. an EAN-13 number)
        barcode: String,

        /// Diet to check against (repeatable, replaces the stored profile)
        #[arg(short, long = "diet")]
        diets: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive scanning session reading barcodes from stdin
    Scan {
        /// Diet to check against (repeatable, replaces the stored profile)
        #[arg(short, long = "diet")]
        diets: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Analyze a product photo (not available yet)
    AnalyzeImage {
        /// Location of the image
        uri: String,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Lookup {
            barcode,
            diets,
            json,
        } => {
            cli::lookup::lookup_command(config_path, &barcode, &diets, json).await?;
        }
        Commands::Scan { diets, json } => {
            cli::scan::scan_command(config_path, &diets, json).await?;
        }
        Commands::AnalyzeImage { uri } => {
            cli::analyze::analyze_image_command(&uri).await?;
        }
        Commands::Init { force } => {
            cli::init::init_command(config_path, force)?;
        }
    }

    Ok(())
}
