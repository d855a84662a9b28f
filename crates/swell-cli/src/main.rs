//! Swell CLI - Command-line interface for rendering drone sound effects
//!
//! This binary provides commands for rendering drones to WAV files and for
//! checking params files before a render.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use swell_engine::SampleEncoding;
use tracing_subscriber::EnvFilter;

use swell_cli::commands;

/// Swell - Deterministic drone sound effect renderer
#[derive(Parser)]
#[command(name = "swell")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a drone to a WAV file
    Render {
        /// Output WAV file path
        #[arg(short, long)]
        out: String,

        /// Path to a params JSON file (defaults are used when omitted)
        #[arg(short, long)]
        params: Option<String>,

        /// RNG seed (a random seed is drawn and reported when omitted)
        #[arg(long)]
        seed: Option<u32>,

        /// Sample encoding of the output file (pcm16, float32)
        #[arg(long, default_value = "pcm16")]
        encoding: SampleEncoding,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a params file without rendering
    Validate {
        /// Path to the params JSON file
        #[arg(short, long)]
        params: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the default params as JSON
    Template {
        /// Write the template to this file instead of stdout
        #[arg(short, long)]
        out: Option<String>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let result = match cli.command {
        Commands::Render {
            out,
            params,
            seed,
            encoding,
            json,
        } => commands::render::run(&out, params.as_deref(), seed, encoding, json),
        Commands::Validate { params, json } => commands::validate::run(&params, json),
        Commands::Template { out } => commands::template::run(out.as_deref()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
