//! classic — the luck-gate run from the command line.
//!
//! Ten agents of normally distributed talent bounce around a walled arena.
//! Five fixed nodes are each guarded by a barrier that faster agents pass
//! more often.  After the budget runs out, agents are ranked by how many
//! nodes they managed to touch.
//!
//! ```text
//! RUST_LOG=classic=debug cargo run --release -p classic -- --seed 7 --ticks 20000
//! cargo run -p classic -- --config demos/classic/classic.toml --full --csv out/
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use lg_agent::{AgentStore, NodeSet};
use lg_core::{RunBudget, SimConfig, SimRng, Tick};
use lg_output::{CsvWriter, FinalReport, OutputWriter, ReportLayout, TextReporter};
use lg_sim::{SimBuilder, SimObserver, TickSummary};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML config file; built-in classic defaults when absent
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed (entropy when neither flag nor config sets one)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of agents
    #[arg(short, long)]
    agents: Option<usize>,

    /// Stop after this many ticks
    #[arg(long, conflicts_with = "seconds")]
    ticks: Option<u64>,

    /// Stop after this many wall-clock seconds
    #[arg(long)]
    seconds: Option<f64>,

    /// Agents listed in the top section
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Agents listed in the bottom section
    #[arg(long, default_value_t = 10)]
    bottom: usize,

    /// List every agent instead of top/bottom sections
    #[arg(long)]
    full: bool,

    /// Also write standings.csv into this directory
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Log progress every this many ticks
    #[arg(long, default_value_t = 1_000)]
    progress_every: u64,
}

impl Args {
    fn layout(&self) -> ReportLayout {
        if self.full {
            ReportLayout::Full
        } else {
            ReportLayout::TopBottom { top: self.top, bottom: self.bottom }
        }
    }

    fn load_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                toml::from_str::<SimConfig>(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => SimConfig::default(),
        };

        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(n) = self.agents {
            config.agent_count = n;
        }
        if let Some(n) = self.ticks {
            config.budget = RunBudget::Ticks(n);
        }
        if let Some(s) = self.seconds {
            config.budget = RunBudget::WallClockSecs(s);
        }
        Ok(config)
    }
}

// ── Progress observer ─────────────────────────────────────────────────────────

/// Running totals, logged at `debug` every `every` ticks.
#[derive(Default)]
struct Progress {
    every:      u64,
    passes:     u64,
    rejections: u64,
    contacts:   u64,
}

impl SimObserver for Progress {
    fn on_sim_start(&mut self, agents: &AgentStore, nodes: &NodeSet) {
        debug!(agents = agents.count, nodes = nodes.len(), "world built");
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.passes += u64::from(summary.passes);
        self.rejections += u64::from(summary.rejections);
        self.contacts += u64::from(summary.contacts);

        if self.every > 0 && summary.tick.0.is_multiple_of(self.every) {
            debug!(
                tick = summary.tick.0,
                passes = self.passes,
                rejections = self.rejections,
                contacts = self.contacts,
                "progress",
            );
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        info!(
            %final_tick,
            passes = self.passes,
            rejections = self.rejections,
            contacts = self.contacts,
            "barrier totals",
        );
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = args.load_config()?;
    let rng = SimRng::from_seed_option(config.seed);

    let mut sim = SimBuilder::new(config, rng).build().context("building simulation")?;
    let mut progress = Progress { every: args.progress_every, ..Progress::default() };
    let stats = sim.run(&mut progress)?;

    let report = FinalReport::new(stats.ticks, &sim.agents);
    TextReporter::new(args.layout()).write_to(&report, io::stdout().lock())?;

    if let Some(dir) = &args.csv {
        let mut writer = CsvWriter::new(dir)?;
        writer.write_report(&report)?;
        writer.finish()?;
        info!(dir = %dir.display(), "standings written");
    }

    Ok(())
}
