use std::path::PathBuf;

use anyhow::Result;

use crate::cli::Cli;
use crate::util::{RunClock, emit_payload, resolve_work_dir};

pub mod compare;
pub mod diff;
pub mod evaluate;
pub mod evaluate_all;
pub mod harness;
pub mod label;
pub mod label_all;
pub mod parse_ranges;
pub mod scalability;
pub mod test_results;

const LABELS_FILE_NAME: &str = "labels.json";
const HARNESS_FILE_NAME: &str = "test_runner.c";

/// Settings shared by every command, resolved once from the CLI.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub clock: RunClock,
    pub work_dir: PathBuf,
    pub results_file: Option<PathBuf>,
}

impl CommandContext {
    pub fn new(cli: &Cli, clock: RunClock) -> Self {
        Self {
            clock,
            work_dir: resolve_work_dir(&cli.data_dir, cli.data_dir_id.as_deref()),
            results_file: cli.results_file.clone(),
        }
    }

    pub fn labels_path(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit.unwrap_or_else(|| self.work_dir.join(LABELS_FILE_NAME))
    }

    pub fn harness_path(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit.unwrap_or_else(|| self.work_dir.join(HARNESS_FILE_NAME))
    }

    pub fn elapsed(&self) -> String {
        self.clock.elapsed_label()
    }

    pub fn emit(&self, content: &str) -> Result<()> {
        emit_payload(self.results_file.as_deref(), content)
    }
}
