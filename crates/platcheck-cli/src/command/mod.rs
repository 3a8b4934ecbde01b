use std::path::PathBuf;

use clap::{Parser, Subcommand};
use platcheck_engine::SimConfig;
use platcheck_evaluator::{BatchSession, DEFAULT_BATCH_SIZE, DEFAULT_SEED, PlayabilityReport};

use crate::data::{self, ChunkGroup};

mod run;
mod watch;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Evaluate a chunk group headlessly and print its playability
    Run(#[clap(flatten)] run::RunArg),
    /// Watch the agent traverse the chunks in a real-time view
    Watch(#[clap(flatten)] watch::WatchArg),
}

/// Arguments shared by every evaluation mode.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct EvalArg {
    /// Chunk group to evaluate: org, vae, gmm-optim, or gmm-<N>
    group: ChunkGroup,
    /// Directory containing the chunk data files
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
    /// Number of chunks evaluated from the shuffled group
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    how_many: usize,
    /// Shuffle seed
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
    /// Episode time budget in simulated seconds
    #[arg(long, default_value_t = SimConfig::default().time_budget_secs)]
    time_budget: f64,
}

impl EvalArg {
    pub(crate) fn group(&self) -> ChunkGroup {
        self.group
    }

    pub(crate) fn session(&self) -> anyhow::Result<BatchSession> {
        let chunks = data::load_chunks(&self.data_dir, self.group)?;
        let config = SimConfig {
            time_budget_secs: self.time_budget,
            ..SimConfig::default()
        };
        Ok(BatchSession::new(chunks, self.how_many, self.seed, config))
    }
}

pub(crate) fn print_report(group: ChunkGroup, report: &PlayabilityReport) {
    println!("=============================================");
    println!("Playability proportion ({group}): {report}");
    println!("=============================================");
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Run(arg) => run::run(&arg)?,
        Mode::Watch(arg) => watch::run(&arg)?,
    }
    Ok(())
}
