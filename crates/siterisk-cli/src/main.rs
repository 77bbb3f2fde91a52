//! `siterisk`: synthesise a site-risk decision package from a signal file.

mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use siterisk_analysis::reporters::{available_formats, create_reporter};
use siterisk_analysis::{AnalysisRequest, SynthesisEngine};
use siterisk_core::config::{CliOverrides, SiteRiskConfig};
use siterisk_core::errors::{ReportError, SiteRiskErrorCode};
use siterisk_core::types::SignalDocument;

use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "siterisk")]
#[command(about = "Turn site-risk signals into cost drivers, actions, contingency and a Monte Carlo estimate")]
#[command(version)]
struct Cli {
    /// Project root searched for `siterisk.toml`.
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Rulebook file (TOML, or JSON by `.json` extension). Defaults to the built-in rulebook.
    #[arg(long, global = true)]
    rulebook: Option<String>,

    /// Monte Carlo trial count.
    #[arg(long, global = true)]
    sample_size: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyse one signal document.
    Analyze {
        /// Signal document (JSON with `signals` and optional `warnings`).
        #[arg(long)]
        signals: PathBuf,

        /// Reproducibility key for the simulation, typically the site address.
        #[arg(long)]
        seed_key: String,

        /// Baseline construction cost; enables dollar-denominated estimates.
        #[arg(long)]
        baseline_cost_usd: Option<f64>,

        /// Output format: json | csv
        #[arg(long, default_value = "json")]
        format: String,

        /// Write the report here instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Validate the resolved rulebook and print the effective settings.
    Check,
}

fn main() -> ExitCode {
    siterisk_core::tracing::init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.error_code(), error = %e, "siterisk failed");
            eprintln!("{}", e.tagged_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let overrides = CliOverrides {
        sample_size: cli.sample_size,
        rulebook_path: cli.rulebook,
    };
    let config = SiteRiskConfig::load(&cli.root, Some(&overrides))?;
    let rulebook = config.load_rulebook(&cli.root)?;

    match cli.command {
        Commands::Analyze {
            signals,
            seed_key,
            baseline_cost_usd,
            format,
            output,
        } => {
            let reporter =
                create_reporter(&format).ok_or_else(|| ReportError::UnknownFormat(format.clone()))?;
            let document = SignalDocument::from_path(&signals)?;

            let mut request = AnalysisRequest::from_document(document, seed_key)
                .with_sample_size(config.simulation.effective_sample_size());
            request.baseline_cost_usd = baseline_cost_usd;

            let analysis = SynthesisEngine::new(&rulebook).analyze(&request);
            let rendered = reporter.generate(&analysis)?;
            emit(&rendered, output.as_deref())
        }
        Commands::Check => {
            tracing::info!(
                cost_rules = rulebook.cost_rules().len(),
                bands = rulebook.contingency_bands().len(),
                formats = ?available_formats(),
                "rulebook valid"
            );
            emit(&config.to_toml()?, None)
        }
    }
}

fn emit(content: &str, output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(path) => std::fs::write(path, content).map_err(|e| CliError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        }),
        None => {
            print!("{content}");
            if !content.ends_with('\n') {
                println!();
            }
            Ok(())
        }
    }
}
