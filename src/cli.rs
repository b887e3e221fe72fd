use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::scalability::MeasurementKind;

#[derive(Parser, Debug)]
#[command(
    name = "sirbench",
    version,
    about = "Fault-localization evaluation over benchmark programs with seeded defects"
)]
pub struct Cli {
    /// Root of the working data directory
    #[arg(long, global = true, default_value = "data")]
    pub data_dir: PathBuf,

    /// Subdirectory of the data directory, so concurrent runs do not collide
    #[arg(long, global = true, env = "DATA_DIR_ID")]
    pub data_dir_id: Option<String>,

    /// Write the command payload to this file instead of stdout
    #[arg(long, global = true, env = "RESULTS_FILE")]
    pub results_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Label the defect regions of one version and print its diff
    Label(LabelArgs),
    /// Label every version directory against the healthy source
    LabelAll(LabelAllArgs),
    /// Print the unified diff between a buggy and a healthy source
    Diff(DiffArgs),
    /// Parse hand-entered line ranges such as `3,7-9`
    ParseRanges(ParseRangesArgs),
    /// Generate the C test runner from a test universe file
    Harness(HarnessArgs),
    /// Byte-compare a golden output with a candidate output
    Compare(CompareArgs),
    /// Summarize the PASS/FAIL output of a test runner
    TestResults(TestResultsArgs),
    /// Score a diagnostic report against the labeled defect regions
    Evaluate(EvaluateArgs),
    /// Score every version under a results root and average per plugin
    EvaluateAll(EvaluateAllArgs),
    /// Average repeated scalability measurements into CSV
    Scalability(ScalabilityArgs),
}

#[derive(Args, Debug, Clone)]
pub struct LabelArgs {
    #[arg(long)]
    pub healthy: PathBuf,

    #[arg(long)]
    pub buggy: PathBuf,

    #[arg(long)]
    pub version: String,

    #[arg(long)]
    pub labels_file: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone)]
pub struct LabelAllArgs {
    #[arg(long)]
    pub healthy: PathBuf,

    #[arg(long)]
    pub versions_dir: PathBuf,

    #[arg(long)]
    pub labels_file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct DiffArgs {
    #[arg(long)]
    pub healthy: PathBuf,

    #[arg(long)]
    pub buggy: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct ParseRangesArgs {
    #[arg(long)]
    pub input: String,
}

#[derive(Args, Debug, Clone)]
pub struct HarnessArgs {
    #[arg(long)]
    pub universe: PathBuf,

    /// Zero-based index of the last emitted test
    #[arg(long)]
    pub limit: Option<usize>,

    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value = "./buggy")]
    pub candidate_binary: String,

    #[arg(long, default_value = "aardwolf_write_external")]
    pub marker_function: String,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[arg(long)]
    pub golden: PathBuf,

    #[arg(long)]
    pub candidate: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct TestResultsArgs {
    #[arg(long)]
    pub input: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    #[arg(long)]
    pub report: PathBuf,

    #[arg(long)]
    pub labels: Option<PathBuf>,

    #[arg(long)]
    pub version: String,

    #[arg(long)]
    pub manifest_path: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct EvaluateAllArgs {
    /// Directory holding `<version>/results.json` reports
    #[arg(long)]
    pub results_root: PathBuf,

    #[arg(long)]
    pub labels: Option<PathBuf>,

    #[arg(long = "exclude")]
    pub excluded_versions: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ScalabilityArgs {
    #[arg(value_enum)]
    pub kind: MeasurementKind,

    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}
