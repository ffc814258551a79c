use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shorthand_index::definitions::Definitions;
use shorthand_index::index::{Index, IndexBuilder};
use shorthand_index::output;
use shorthand_index::utils::AppConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shorthand-index")]
#[command(about = "Inspect CSS abbreviation indexes built from definition bundles")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Index bundles even if they contain empty or duplicate shorthands
    #[arg(long, global = true)]
    no_validate: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log builder progress (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show index statistics for a definitions bundle
    Stats {
        /// JSON definitions bundle
        definitions: PathBuf,
    },
    /// Show how abbreviations resolve
    Lookup {
        /// JSON definitions bundle
        definitions: PathBuf,

        /// Abbreviations to resolve
        #[arg(required = true)]
        keys: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check a definitions bundle for empty or duplicate shorthands
    Validate {
        /// JSON definitions bundle
        definitions: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    if cli.no_validate {
        config.index.validate = false;
    }
    if cli.no_color {
        config.color = false;
    }
    debug!(?config, "loaded config");

    match cli.command {
        Commands::Stats { definitions } => {
            let index = build(&definitions, &config)?;
            output::print_stats(&index.stats(), config.color)?;
        }
        Commands::Lookup {
            definitions,
            keys,
            json,
        } => {
            let index = build(&definitions, &config)?;
            let reports = output::lookup_reports(&index, &keys);

            if json {
                let content =
                    serde_json::to_string_pretty(&reports).context("Failed to serialize results")?;
                println!("{}", content);
            } else {
                output::print_lookups(&reports, config.color)?;
            }
        }
        Commands::Validate { definitions } => {
            let defs = Definitions::load(&definitions)?;
            defs.validate()
                .with_context(|| format!("Invalid definitions in {}", definitions.display()))?;
            println!(
                "{}: {} properties, {} statements, ok",
                definitions.display(),
                defs.properties.len(),
                defs.statements.len()
            );
        }
    }

    Ok(())
}

fn build(path: &Path, config: &AppConfig) -> Result<Index> {
    let defs = Definitions::load(path)?;
    info!(path = %path.display(), definitions = defs.len(), "building index");

    IndexBuilder::new(config.index.clone())
        .build(defs)
        .with_context(|| format!("Invalid definitions in {}", path.display()))
}
