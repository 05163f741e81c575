use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "dass", version, about = "Depression, Anxiety and Stress self-assessment")]
pub struct Cli {
    /// Config file to use instead of the per-user default.
    #[arg(long, global = true, env = "DASS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Answer the questionnaire and get your results (default).
    Take(TakeArgs),

    /// List the questions and response options.
    Questions(InstrumentArgs),

    /// Inspect or create the config file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective config as JSON.
    Show,
    /// Write a default config file if none exists.
    Init,
}

#[derive(Debug, Clone, Default, Args)]
pub struct InstrumentArgs {
    /// JSON instrument definition replacing the built-in questions.
    #[arg(long, env = "DASS_INSTRUMENT")]
    pub instrument_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct TakeArgs {
    #[command(flatten)]
    pub instrument: InstrumentArgs,

    /// Answers in question order, as option numbers or labels
    /// (e.g. `0,1,3` or `Never,Often`). Skips the interactive prompt.
    #[arg(long, value_delimiter = ',', conflicts_with = "answers_file")]
    pub answers: Option<Vec<String>>,

    /// JSON array of answers in question order (numbers or labels).
    #[arg(long)]
    pub answers_file: Option<PathBuf>,

    /// Directory for the CSV, PNG and report files.
    #[arg(long, env = "DASS_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print results only; write no files.
    #[arg(long)]
    pub no_export: bool,

    /// Also write a Markdown report.
    #[arg(long)]
    pub report: bool,

    /// Save the result to this directory, overriding the configured store.
    #[arg(long, conflicts_with = "no_store")]
    pub store_dir: Option<PathBuf>,

    /// Do not save the result anywhere, even if a store is configured.
    #[arg(long)]
    pub no_store: bool,
}
