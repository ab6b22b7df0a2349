//! dcamfx command line entry point.
//!
//! Prints the flip-book page timing for a configuration and can run the
//! camera rig headless for a while:
//!
//! 1. Load `config.ini` (or `--config PATH`); command line values override it
//! 2. Compute and print the page timing (text or `--json`)
//! 3. With `--simulate SECONDS`, build the ECS world, spawn the camera rig and
//!    step it at `--fps`, then report captured/retired pages and the last
//!    posterized frame
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --duration 2.0 --ease-out-power 3 --simulate 5
//! ```

use clap::Parser;
use log::{error, info, warn};
use serde::Serialize;
use std::path::PathBuf;

use dcamfx::components::camera::Camera;
use dcamfx::game;
use dcamfx::pagetiming::PageTiming;
use dcamfx::resources::appconfig::AppConfig;
use dcamfx::resources::remoteinput::RemoteInput;
use dcamfx::resources::rendergraph::RecordingGraph;
use dcamfx::resources::sessionstats::SessionStats;

/// Flip-book timing calculator and headless camera rig.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Seconds between two pages.
    #[arg(long, value_name = "SECONDS")]
    sample_interval: Option<f64>,

    /// Requested sequence duration in seconds.
    #[arg(long, value_name = "SECONDS")]
    duration: Option<f64>,

    /// Ease-out exponent of the last page.
    #[arg(long, value_name = "POWER")]
    ease_out_power: Option<f64>,

    /// Print the timing as JSON.
    #[arg(long)]
    json: bool,

    /// Run the camera rig headless for this many seconds.
    #[arg(long, value_name = "SECONDS")]
    simulate: Option<f32>,

    /// Frame rate of the headless run.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Hold this remote button during the headless run.
    #[arg(long, value_name = "INDEX")]
    hold_button: Option<usize>,
}

#[derive(Serialize)]
struct TimingReport<'a> {
    prompt: &'a str,
    strength: f32,
    guidance: f32,
    #[serde(flatten)]
    timing: PageTiming,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = AppConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(v) = cli.sample_interval {
        config.flipbook.sample_interval = v;
    }
    if let Some(v) = cli.duration {
        config.flipbook.sequence_duration = v;
    }
    if let Some(v) = cli.ease_out_power {
        config.flipbook.ease_out_power = v;
    }

    let timing = match config.flipbook.timing() {
        Ok(timing) => timing,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if cli.json {
        let report = TimingReport {
            prompt: &config.flipbook.prompt,
            strength: config.flipbook.strength,
            guidance: config.flipbook.guidance,
            timing,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                error!("Failed to serialize timing: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", timing);
    }

    if let Some(seconds) = cli.simulate {
        let fps = cli.fps.max(1);
        let frames = match frame_count(seconds, fps) {
            Ok(frames) => frames,
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        };
        simulate(config, frames, fps, cli.hold_button);
    }
}

/// Number of frames of a headless run lasting `seconds` at `fps`.
fn frame_count(seconds: f32, fps: u32) -> Result<u64, String> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(format!(
            "Invalid simulation length: {} (must be finite and non-negative)",
            seconds
        ));
    }
    Ok((seconds as f64 * fps as f64).round() as u64)
}

fn simulate(config: AppConfig, frames: u64, fps: u32, hold_button: Option<usize>) {
    let dt = 1.0 / fps as f32;

    let mut world = game::setup_world(config);
    let camera = game::spawn_camera_rig(&mut world);
    game::spawn_remote_buttons(&mut world, &[(0, 0), (1, 1), (2, 2), (3, 3)]);
    if let Some(button) = hold_button {
        world.resource_mut::<RemoteInput>().press(button);
    }

    let mut update = game::build_update_schedule();
    info!("Simulating {} frame(s) at {} fps", frames, fps);
    for _ in 0..frames {
        game::step(&mut world, &mut update, dt);
    }

    let stats = world.resource::<SessionStats>().clone();
    println!(
        "pages captured: {}, retired: {}",
        stats.pages_captured, stats.pages_retired
    );
    if let Some(value) = stats.last_int_value {
        println!("last remote value: {}", value);
    }
    let output = world.get::<Camera>(camera).and_then(|c| c.output);
    let graph = world.resource::<RecordingGraph>();
    println!(
        "last frame: {} blit pass(es), camera output {:?}",
        graph.blits().len(),
        output
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_count_rounds_to_whole_frames() {
        assert_eq!(frame_count(5.0, 60), Ok(300));
        assert_eq!(frame_count(0.0, 60), Ok(0));
        assert_eq!(frame_count(0.5, 30), Ok(15));
    }

    #[test]
    fn frame_count_rejects_non_finite_and_negative_lengths() {
        assert!(frame_count(f32::INFINITY, 60).is_err());
        assert!(frame_count(f32::NAN, 60).is_err());
        assert!(frame_count(-1.0, 60).is_err());
    }

    #[test]
    fn cli_parses_simulation_options() {
        let cli = Cli::parse_from(["dcamfx", "--simulate", "2.5", "--fps", "30"]);
        assert_eq!(cli.simulate, Some(2.5));
        assert_eq!(cli.fps, 30);
        assert!(!cli.json);
    }
}
