//! Assetfix CLI - Normalize a multi-chain asset registry checkout

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{checksum, dimensions, explorer, fix};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "assetfix")]
#[command(about = "Reconcile registry metadata with the rules derived from it", long_about = None)]
#[command(version)]
struct Cli {
    /// Log every rename, resize and rewrite
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every normalizer over a registry checkout
    Fix {
        /// Registry root (the directory containing `blockchains/`)
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Only process these chain handles (repeatable)
        #[arg(long = "chain")]
        chains: Vec<String>,

        /// Override the maximum logo width/height in pixels
        #[arg(long)]
        max_edge: Option<u32>,

        /// Override the maximum logo file size in bytes
        #[arg(long)]
        max_bytes: Option<u64>,
    },

    /// Print the checksum form of an EVM address
    Checksum {
        /// Address with 0x prefix
        address: String,
    },

    /// Print the dimensions a logo would be resized to
    Dimensions {
        width: u32,
        height: u32,

        /// Maximum edge length (defaults to the logo limit)
        #[arg(long)]
        max_edge: Option<u32>,
    },

    /// Print the block explorer URL for an asset
    Explorer {
        /// Chain handle (e.g. "ethereum")
        chain: String,

        /// Asset identifier as it appears in the registry
        asset: String,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Fix {
            root,
            chains,
            max_edge,
            max_bytes,
        } => fix::run(fix::FixArgs {
            root,
            chains,
            max_edge,
            max_bytes,
        }),
        Commands::Checksum { address } => checksum::run(&address),
        Commands::Dimensions {
            width,
            height,
            max_edge,
        } => dimensions::run(width, height, max_edge),
        Commands::Explorer { chain, asset } => explorer::run(&chain, &asset),
    }
}
