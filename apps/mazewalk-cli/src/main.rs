use clap::{Parser, Subcommand};
use mazewalk_input::{InputSnapshot, MoveKeys};
use mazewalk_render::{DebugTextRenderer, RenderView, Renderer};
use mazewalk_scene::{Scene, maze};
use mazewalk_sim::Simulation;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mazewalk-cli", about = "Headless driver for the mazewalk core")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate versions
    Info,
    /// Run a scripted walk through the demo maze without a window
    Walk {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "120")]
        frames: u64,
        /// Fixed per-frame delta time in seconds
        #[arg(short, long, default_value = "0.016")]
        dt: f64,
        /// Hold the forward key
        #[arg(long)]
        forward: bool,
        /// Hold the backward key
        #[arg(long)]
        back: bool,
        /// Hold the left key
        #[arg(long)]
        left: bool,
        /// Hold the right key
        #[arg(long)]
        right: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("mazewalk-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", mazewalk_common::crate_info());
            println!("scene:  {}", mazewalk_scene::crate_info());
            println!("input:  {}", mazewalk_input::crate_info());
            println!("sim:    {}", mazewalk_sim::crate_info());
            println!("render: {}", mazewalk_render::crate_info());
        }
        Commands::Walk {
            frames,
            dt,
            forward,
            back,
            left,
            right,
        } => {
            let scene = Scene::try_from(maze())?;
            let input = InputSnapshot {
                keys: MoveKeys {
                    forward,
                    back,
                    left,
                    right,
                },
                ..InputSnapshot::default()
            };

            let frames = frames.max(1);
            println!("Scripted walk: {frames} frames at dt={dt}");

            let last = run_walk(&scene, &input, frames, dt)?;
            let check = run_walk(&scene, &input, frames, dt)?;

            let view = RenderView::from_frame(&last);
            print!("{}", DebugTextRenderer::new().render(&scene, &last, &view));
            println!(
                "Deterministic: {}",
                if last.position == check.position {
                    "OK"
                } else {
                    "MISMATCH"
                }
            );
        }
    }

    Ok(())
}

/// Step a fresh simulation through `frames` identical input frames.
fn run_walk(
    scene: &Scene,
    input: &InputSnapshot,
    frames: u64,
    dt: f64,
) -> anyhow::Result<mazewalk_sim::Frame> {
    let mut sim = Simulation::new(scene)?;
    sim.start_clock(0.0);
    let mut last = sim.step(scene, input, dt);
    for i in 2..=frames {
        last = sim.step(scene, input, i as f64 * dt);
    }
    Ok(last)
}
