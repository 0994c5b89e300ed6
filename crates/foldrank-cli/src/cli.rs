use clap::{Args, Parser};
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
    about = "foldrank - Order a list of names by the mean pLDDT of their predicted protein structures.",
    long_about = "Order a list of names by the mean pLDDT of their predicted protein structures.\n\n\
        Each name is reduced to the 20 canonical amino-acid letters, repeated a fixed number \
        of times, folded by an ESMFold-compatible service, and scored by the mean confidence \
        of the predicted structure. Predictions are cached by sequence, so reruns are \
        reproducible and offline.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    #[command(flatten)]
    pub order: OrderArgs,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output and the progress bar; errors are still printed
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Arguments for ordering a name list.
#[derive(Args, Debug, Clone)]
pub struct OrderArgs {
    // --- Core Arguments ---
    /// Path to the unordered name list, one name per line.
    #[arg(long, default_value = "authors.txt", value_name = "PATH")]
    pub input: PathBuf,

    /// Base path for the ordered output; `.txt` and `.tsv` are appended.
    #[arg(long, default_value = "ordered_authors", value_name = "BASEPATH")]
    pub output: PathBuf,

    /// Path to the TOML configuration file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Pipeline Overrides ---
    /// Directory used to cache predicted structures.
    #[arg(long = "pdb_dir", alias = "pdb-dir", value_name = "PATH")]
    pub pdb_dir: Option<PathBuf>,

    /// Number of times each filtered name is repeated before folding.
    #[arg(long, value_name = "INT")]
    pub copies: Option<usize>,

    // --- Service Overrides ---
    /// Structure prediction endpoint that accepts a raw sequence as the POST body.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Request timeout for the prediction service, in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Only use cached structures; fail instead of contacting the prediction service.
    #[arg(long)]
    pub offline: bool,
}
