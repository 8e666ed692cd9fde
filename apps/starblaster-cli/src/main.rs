mod driver;
mod script;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use starblaster_common::GameConfig;
use starblaster_kernel::{GameLoop, ManualClock, StdRandom};
use starblaster_render::RenderView;
use starblaster_tools::WorldInspector;
use tracing_subscriber::EnvFilter;

use crate::driver::HeadlessDriver;
use crate::script::InputScript;

#[derive(Parser)]
#[command(name = "starblaster", about = "Headless host for the starblaster simulation")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Run the simulation headless on a manual clock
    Run {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "600")]
        frames: u64,
        /// Simulated milliseconds per frame
        #[arg(long, default_value = "16")]
        frame_ms: u64,
        /// RNG seed; omit for a random run
        #[arg(short, long)]
        seed: Option<u64>,
        /// JSON or YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Input timeline, e.g. "0:KeyD,Space;30:-KeyD"
        #[arg(long, default_value = "")]
        script: String,
        /// Print the debug render every N frames (0 disables)
        #[arg(long, default_value = "0")]
        print_every: u64,
        /// Write the world event log as JSON
        #[arg(long)]
        dump_events: Option<PathBuf>,
    },
    /// Print the effective configuration as YAML
    Config {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn load_config(path: Option<&Path>) -> anyhow::Result<GameConfig> {
    match path {
        Some(path) => GameConfig::from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(GameConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("starblaster v{}", env!("CARGO_PKG_VERSION"));
            let config = GameConfig::default();
            let bounds = config.ship_bounds();
            println!(
                "kernel: ship bounds=±{:.2} x ±{:.2}",
                bounds.half_width, bounds.half_height
            );
            println!("render: {}", starblaster_render::crate_info());
            println!("tools: {}", starblaster_tools::crate_info());
        }
        Commands::Run {
            frames,
            frame_ms,
            seed,
            config,
            script,
            print_every,
            dump_events,
        } => {
            let config = load_config(config.as_deref())?;
            let script = InputScript::parse(&script).context("invalid input script")?;
            let rng = match seed {
                Some(seed) => StdRandom::seeded(seed),
                None => StdRandom::from_entropy(),
            };
            tracing::info!(frames, frame_ms, ?seed, "starting headless run");

            let view = RenderView::from_config(&config);
            let mut game = GameLoop::new(config, ManualClock::new(0), rng);
            let mut driver = HeadlessDriver::new(frames, frame_ms, script, view, print_every);
            if dump_events.is_some() {
                driver = driver.record_events();
            }
            let ran = game.run(&mut driver);

            println!("frames run: {ran}");
            println!("{}", WorldInspector::summary(game.world()));

            if let Some(path) = dump_events {
                let json = serde_json::to_string_pretty(driver.recorded_events())?;
                std::fs::write(&path, json)
                    .with_context(|| format!("failed to write events to {}", path.display()))?;
                println!("events written to {}", path.display());
            }
        }
        Commands::Config { config } => {
            let config = load_config(config.as_deref())?;
            print!("{}", config.to_yaml()?);
        }
    }

    Ok(())
}
