use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use crossfire_app::config::{self, Overrides};
use crossfire_app::input::{InputSource, ScriptedInput};
use crossfire_app::logging;
use crossfire_app::session::{RunLimits, Session};
use crossfire_core::enums::FireMode;
use crossfire_sim::SimulationEngine;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FireModeArg {
    Edge,
    Level,
}

impl From<FireModeArg> for FireMode {
    fn from(arg: FireModeArg) -> Self {
        match arg {
            FireModeArg::Edge => FireMode::Edge,
            FireModeArg::Level => FireMode::Level,
        }
    }
}

/// Headless first-person combat session
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Session config (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scripted input samples (JSON). Defaults to tapping the trigger.
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Stop after this many ticks
    #[arg(short, long, default_value_t = 600)]
    ticks: u64,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Extra enemies spawned on a ring around the player
    #[arg(long)]
    enemies: Option<usize>,

    /// Trigger behaviour
    #[arg(long, value_enum)]
    fire_mode: Option<FireModeArg>,

    /// End the session once every enemy is dead
    #[arg(long)]
    until_cleared: bool,

    /// Pace ticks to wall-clock time
    #[arg(long)]
    realtime: bool,

    /// Print every snapshot as a JSON line on stdout
    #[arg(long)]
    snapshots: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let overrides = Overrides {
        seed: args.seed,
        random_enemies: args.enemies,
        fire_mode: args.fire_mode.map(FireMode::from),
        end_when_cleared: args.until_cleared,
    };
    let sim_config = config::resolve(args.config.as_deref(), &overrides)?;
    let engine = SimulationEngine::new(sim_config).context("setting up session")?;

    let input = match &args.script {
        Some(path) => ScriptedInput::from_json_file(path)?,
        None => ScriptedInput::trigger_taps(20),
    };

    let limits = RunLimits {
        max_ticks: Some(args.ticks),
        stop_when_cleared: args.until_cleared,
        realtime: args.realtime,
    };
    run(engine, input, limits, args.snapshots)
}

fn run<I: InputSource>(
    engine: SimulationEngine,
    input: I,
    limits: RunLimits,
    print_snapshots: bool,
) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut write_error = None;

    let mut session = Session::new(engine, input);
    let summary = session
        .run(limits, |snapshot| {
            if !print_snapshots || write_error.is_some() {
                return;
            }
            let line = serde_json::to_string(snapshot).map_err(anyhow::Error::from);
            if let Err(err) = line.and_then(|line| writeln!(out, "{line}").map_err(Into::into)) {
                write_error = Some(err);
            }
        })
        .context("session aborted")?;

    if let Some(err) = write_error {
        return Err(err.context("writing snapshots"));
    }

    let summary = serde_json::to_string_pretty(&summary)?;
    writeln!(out, "{summary}")?;
    Ok(())
}
