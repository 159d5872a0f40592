//! Blueprint metadata consumption CLI
//!
//! # Usage
//!
//! ```bash
//! # Generate <id>.textproto and <id>.soy for the blueprint in the current dir
//! bpconsume jump-start-solutions
//!
//! # Explicit blueprint, template and output locations
//! bpconsume jss -p ./terraform-google-bigquery -t templates/soy_template.soy -o out/
//! ```
//!
//! `RUST_LOG` controls log verbosity (default `info`).

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;

use bpconsume::config::{DEFAULT_DISPLAY_FILE, DEFAULT_METADATA_FILE, DEFAULT_TEMPLATE_FILE};
use bpconsume::{consume_metadata, ConsumeConfig, DirectorySink};

#[derive(Parser)]
#[command(name = "bpconsume")]
#[command(version)]
#[command(about = "Consumes blueprint metadata and generates downstream artifacts")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generates blueprint metadata for jump start solutions
    #[command(alias = "jss")]
    JumpStartSolutions(JumpStartArgs),
}

#[derive(clap::Args)]
struct JumpStartArgs {
    /// Path to blueprint for metadata consumption
    #[arg(short, long, env = "BPCONSUME_PATH", default_value = ".")]
    path: PathBuf,

    /// Soy template to render
    #[arg(short, long, env = "BPCONSUME_TEMPLATE", default_value = DEFAULT_TEMPLATE_FILE)]
    template: PathBuf,

    /// Directory for generated files (default: working directory)
    #[arg(short, long, env = "BPCONSUME_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_METADATA_FILE)]
    metadata_file: String,

    #[arg(long, default_value = DEFAULT_DISPLAY_FILE)]
    display_file: String,
}

// =============================================================================
// MAIN
// =============================================================================

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::JumpStartSolutions(args) => cmd_jump_start_solutions(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

fn cmd_jump_start_solutions(args: JumpStartArgs) -> anyhow::Result<()> {
    let config = ConsumeConfig {
        blueprint_path: args.path,
        metadata_file: args.metadata_file,
        display_file: args.display_file,
        template_path: args.template,
        output_dir: args.output_dir,
    }
    .resolved()
    .context("failed to resolve paths against the working directory")?;

    let mut sink = DirectorySink::new(config.output_dir());
    let report = consume_metadata(&config, &mut sink).with_context(|| {
        format!(
            "failed to consume blueprint metadata at {}",
            config.blueprint_path.display()
        )
    })?;

    println!(
        "{} Generated {} ({} schema)",
        "OK".green(),
        report.id.as_str().bold(),
        report.revision
    );
    for path in sink.written() {
        println!("  wrote {}", path.display());
    }

    if !report.pending_fields.is_empty() {
        println!(
            "{} {} field(s) hold placeholder values and need manual completion:",
            "NOTE".yellow(),
            report.pending_fields.len()
        );
        for field in &report.pending_fields {
            println!("  - {}", field);
        }
    }

    Ok(())
}
