//! intakeflow binary entry point
//!
//! Dispatches the CLI subcommands: run an interview session (the default),
//! generate reference text, list models, or print the configuration.

use anyhow::Result;
use clap::Parser;
use colored::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use intakeflow::cli::{Args, Commands, Config};
use intakeflow::export::{default_file_name, export_json};
use intakeflow::flow::FlowController;
use intakeflow::reference::{ReferenceClient, ReferenceTopic};
use intakeflow::runner::InterviewRunner;

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = Args::parse();

    // RUST_LOG can override the verbosity flags
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.verbosity().filter_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(args.config.clone())?;
    if !config.display.color_output {
        colored::control::set_override(false);
    }

    match args.command.take() {
        None => run_interview(&args, &config, None).await,
        Some(Commands::Start { export }) => run_interview(&args, &config, export).await,
        Some(Commands::Reference { subject, aftercare }) => {
            run_reference(&config, &subject, aftercare).await
        }
        Some(Commands::Models) => list_models(&config).await,
        Some(Commands::Config) => show_config(&config),
    }
}

/// Run one interview session and optionally export the record
async fn run_interview(
    args: &Args,
    config: &Config,
    export: Option<std::path::PathBuf>,
) -> Result<()> {
    let mut runner = InterviewRunner::new()?;
    if config.display.show_banner && !args.quiet {
        runner.show_banner(env!("CARGO_PKG_VERSION"));
    }

    let record = runner.run(FlowController::new())?;

    let export_path = export.or_else(|| {
        config
            .export
            .auto_export
            .then(|| config.export_dir().join(default_file_name(&record)))
    });

    if let Some(path) = export_path {
        export_json(&record, &path)?;
        if !args.quiet {
            println!("Record exported to {}", path.display().to_string().green());
        }
    } else {
        info!(session_id = %record.session_id, "session ended without export");
    }

    Ok(())
}

/// Generate reference text over the configured Ollama endpoint
async fn run_reference(config: &Config, subject: &str, aftercare: bool) -> Result<()> {
    let client = ReferenceClient::with_config(&config.ollama_url(), &config.ollama.model)?;

    if !client.health_check().await? {
        anyhow::bail!(
            "Ollama is not reachable at {}. Is it running?",
            config.ollama_url()
        );
    }

    let topic = if aftercare {
        ReferenceTopic::Aftercare
    } else {
        ReferenceTopic::Medication
    };

    client.generate(topic, subject).await?;
    Ok(())
}

/// List models on the configured endpoint
async fn list_models(config: &Config) -> Result<()> {
    let client = ReferenceClient::with_config(&config.ollama_url(), &config.ollama.model)?;
    let models = client.list_models().await?;

    if models.is_empty() {
        println!("No models found at {}", config.ollama_url());
    } else {
        println!("Models at {}:", config.ollama_url());
        for model in models {
            println!("  {}", model);
        }
    }
    Ok(())
}

/// Print the active configuration as TOML
fn show_config(config: &Config) -> Result<()> {
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
