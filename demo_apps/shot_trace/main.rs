//! Shot Trace
//!
//! Plays one shot on a headless [`CourtScene`] and prints the ball (and,
//! during a reset, camera) position every frame.
//!
//! ```text
//! shot_trace [--shot forehand|backhand] [--no-shot] [--style straight|boast]
//!            [--fps N] [--settings court.json] [--reset] [--realtime]
//! shot_trace --layout [--labels]      # dump the court descriptors as JSON
//! ```
//!
//! Set `RUST_LOG=debug` to see trajectory lifecycle logs.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use squash_court::{CourtScene, CourtSettings, Handedness, ShotStyle, Timer};

/// Extra frames printed after the longest shot finishes.
const TAIL_MS: f64 = 250.0;
const LONGEST_SHOT_MS: f64 = 3000.0;

#[derive(Parser, Debug)]
#[command(name = "shot_trace", about = "Headless trace of squash shot trajectories")]
struct Cli {
    /// Hitting hand
    #[arg(long, value_enum, default_value = "forehand")]
    shot: Handedness,

    /// Play without a hand selected (the shot command is a no-op)
    #[arg(long)]
    no_shot: bool,

    #[arg(long, value_enum, default_value = "straight")]
    style: ShotStyle,

    /// Simulated frame rate
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
    fps: u32,

    /// Court settings JSON file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Dump the court layout as JSON and exit
    #[arg(long)]
    layout: bool,

    /// Include text labels in the layout
    #[arg(long)]
    labels: bool,

    /// Play a camera reset instead of a shot
    #[arg(long)]
    reset: bool,

    /// Sleep between frames and stamp them with wall-clock time
    #[arg(long)]
    realtime: bool,
}

fn load_settings(cli: &Cli) -> Result<CourtSettings> {
    let mut settings = match &cli.settings {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            CourtSettings::from_json(&json).with_context(|| format!("parsing {}", path.display()))?
        }
        None => CourtSettings::default(),
    };
    settings.show_labels |= cli.labels;
    Ok(settings)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut scene = CourtScene::new(load_settings(&cli)?)?;

    if cli.layout {
        println!("{}", serde_json::to_string_pretty(scene.layout())?);
        return Ok(());
    }

    let handedness = (!cli.no_shot).then_some(cli.shot);

    // Start from a user-orbited pose so a reset has somewhere to travel from
    scene.set_camera_position(glam::Vec3::new(8.0, 6.0, 12.0));
    if cli.reset {
        scene.reset_camera();
    } else {
        scene.start_shot(handedness, cli.style);
    }
    log::info!("{handedness:?} {:?} at {} fps", cli.style, cli.fps);

    let frame_ms = 1000.0 / f64::from(cli.fps);
    let timer = Timer::new();
    let mut now_ms = 0.0;
    while now_ms <= LONGEST_SHOT_MS + TAIL_MS {
        scene.update(now_ms);

        let ball = scene.ball_position();
        match scene.camera_override() {
            Some(camera) => println!(
                "{now_ms:8.1} ms  ball ({:7.3}, {:9.3}, {:7.3})  camera ({:6.2}, {:6.2}, {:6.2})",
                ball.x, ball.y, ball.z, camera.x, camera.y, camera.z
            ),
            None => println!("{now_ms:8.1} ms  ball ({:7.3}, {:9.3}, {:7.3})", ball.x, ball.y, ball.z),
        }

        if cli.realtime {
            std::thread::sleep(Duration::from_secs_f64(frame_ms / 1000.0));
            now_ms = timer.now_ms();
        } else {
            now_ms += frame_ms;
        }
    }

    Ok(())
}
