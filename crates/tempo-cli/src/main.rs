use anyhow::Context;
use clap::Parser;
use tempo_core::dates::resolve_target_date;
use tempo_engine::ClassificationEngine;
use tempo_llm::ChatClient;
use tempo_store::RecordStoreClient;

mod bootstrap;
mod check;
mod cli;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("tempo error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = bootstrap::load_config()?;

    if cli.check {
        return check::handle(&config, cli.format).await;
    }

    let date = resolve_target_date(cli.date.as_deref()).context("invalid --date")?;
    config.validate().context("configuration error")?;

    let store =
        RecordStoreClient::new(&config.notion).context("failed to build record store client")?;
    let classifier = ChatClient::new(&config.llm).context("failed to build classifier client")?;
    let engine = ClassificationEngine::new(store, classifier);

    let summary = engine
        .process(date)
        .await
        .context("classification run aborted")?;
    output::print_summary(&summary, cli.format)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TEMPO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // stdout is reserved for the summary.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
