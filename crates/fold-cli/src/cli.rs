use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "hpfold - greedy folding of 2-D HP-model lattice proteins.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fold a chain by greedy descent on its unfavorable-contact count.
    Fold(FoldArgs),
    /// Score the unfavorable-contact count of a single conformation.
    Score(ScoreArgs),
}

/// Arguments for the `fold` subcommand.
#[derive(Args, Debug)]
pub struct FoldArgs {
    /// Residue sequence, e.g. "HPPHHP".
    #[arg(short, long, value_name = "SEQ")]
    pub sequence: Option<String>,

    /// Initial conformation as a direction string (N/E/S/W, one per bond).
    /// Defaults to a straight strand along +x.
    #[arg(short, long, value_name = "DIRS")]
    pub path: Option<String>,

    /// Path to a run file in TOML format; command-line flags take precedence
    /// over its values.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of valid-candidate evaluations to run.
    #[arg(long, value_name = "INT")]
    pub steps: Option<u64>,

    /// RNG seed for a reproducible run.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Maximum proposal attempts per step before stopping early.
    #[arg(long, value_name = "INT")]
    pub retry_limit: Option<usize>,

    /// Write the committed energy after every step as CSV (step,energy).
    #[arg(short, long, value_name = "PATH")]
    pub trace: Option<PathBuf>,
}

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Residue sequence, e.g. "HPPHHP".
    #[arg(short, long, required = true, value_name = "SEQ")]
    pub sequence: String,

    /// Conformation as a direction string (N/E/S/W, one per bond).
    /// Defaults to a straight strand along +x.
    #[arg(short, long, value_name = "DIRS")]
    pub path: Option<String>,
}
