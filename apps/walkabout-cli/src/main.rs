use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use walkabout_controller::{ControllerConfig, PlayerController};
use walkabout_input::InputSample;
use walkabout_level::LevelData;
use walkabout_render::{DebugTextRenderer, Renderer};

#[derive(Parser)]
#[command(name = "walkabout-cli", about = "CLI tool for walkabout level operations")]
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
    /// Load and validate a level file, printing its contents
    Validate {
        /// Level file to check
        level: String,
    },
    /// Run a headless deterministic walk through a level
    Walk {
        /// Level file (omit for the built-in level)
        #[arg(short, long)]
        level: Option<String>,
        /// Number of frames to simulate
        #[arg(short, long, default_value = "120")]
        steps: u32,
        /// Fixed frame time in seconds
        #[arg(short, long, default_value = "0.016")]
        dt: f32,
        /// Initial yaw in degrees applied before walking (positive turns
        /// counterclockwise seen from above)
        #[arg(short = 'y', long, default_value = "0")]
        yaw_degrees: f32,
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
            println!("walkabout-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("controller: {}", walkabout_controller::crate_info());
            println!("level: {}", walkabout_level::crate_info());
            println!("render: {}", walkabout_render::crate_info());
            println!("input: {}", walkabout_input::crate_info());
        }
        Commands::Validate { level } => {
            let data = LevelData::load(&level)?;
            let world = data.collision_world();
            println!("{level}: OK");
            println!(
                "{}",
                DebugTextRenderer::new().render(&data, &data.spawn.pose())
            );
            println!("Collision volumes: {}", world.len());
        }
        Commands::Walk {
            level,
            steps,
            dt,
            yaw_degrees,
        } => {
            let data = match level {
                Some(path) => LevelData::load(&path)?,
                None => LevelData::fallback(),
            };
            let world = data.collision_world();
            let mut controller =
                PlayerController::new(data.spawn, ControllerConfig::default());

            println!(
                "Walking {steps} frames at dt={dt} ({} collision volumes)",
                world.len()
            );

            // Turn first, then hold the forward key for the whole run.
            // Sensitivity converts the requested yaw into a mouse delta.
            if yaw_degrees != 0.0 {
                let dx = yaw_degrees.to_radians()
                    / controller.config().mouse_sensitivity;
                let look = InputSample {
                    mouse_dx: dx,
                    dt,
                    ..InputSample::default()
                };
                controller.step(&look, &world);
            }

            let start = controller.pose();
            println!(
                "Start: pos=({:.3}, {:.3}, {:.3}) fwd=({:.3}, {:.3}, {:.3})",
                start.position.x,
                start.position.y,
                start.position.z,
                start.forward.x,
                start.forward.y,
                start.forward.z
            );

            let walk = InputSample {
                move_forward: true,
                dt,
                ..InputSample::default()
            };
            let mut blocked_frames = 0u32;
            for _ in 0..steps {
                let before = controller.pose().position;
                controller.step(&walk, &world);
                if controller.pose().position == before {
                    blocked_frames += 1;
                }
            }

            let end = controller.pose();
            println!(
                "End:   pos=({:.3}, {:.3}, {:.3}) after {steps} frames, {blocked_frames} blocked",
                end.position.x, end.position.y, end.position.z
            );
            let travelled = (end.position - start.position).length();
            println!(
                "Travelled {travelled:.3} units (unobstructed would be {:.3})",
                controller.config().move_speed * dt * steps as f32
            );
        }
    }

    Ok(())
}
