use clap::{Parser, ValueEnum};

/// How the run summary and check report are printed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Top-level CLI parser for the `tempo` binary.
#[derive(Debug, Parser)]
#[command(
    name = "tempo",
    version,
    about = "Tempo - classify a day's time records with an LLM"
)]
pub struct Cli {
    /// Target date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Show configuration and test both connections, then exit
    #[arg(long)]
    pub check: bool,

    /// Output format: text, json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}
