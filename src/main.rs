//! Ocean Runner headless entry point
//!
//! Runs the simulation in demo mode for a fixed number of frames, feeding
//! events to a logging audio sink and recording finished runs. Pass the frame
//! count as the first argument (default: one minute at 60 fps).

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use ocean_runner::audio::{AudioManager, LogAudio};
use ocean_runner::sim::{GameEvent, GameState, TickInput, tick};
use ocean_runner::snapshot::FrameSnapshot;
use ocean_runner::{HighScores, Settings};

const DEFAULT_FRAMES: u64 = 60 * 60;

fn main() {
    env_logger::init();
    log::info!("Ocean Runner (headless) starting...");

    let frames = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let settings = Settings::load_from(Path::new(Settings::FILE_NAME));
    let seed = settings.seed.unwrap_or_else(seed_from_time);
    let mut high_scores = HighScores::load_from(Path::new(HighScores::FILE_NAME));
    let mut audio = AudioManager::new(LogAudio, &settings);
    log::info!("Music {}", if audio.music_enabled() { "on" } else { "off" });

    let mut state = GameState::new(seed);
    log::info!("Game initialized with seed: {}", seed);

    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };
    let mut runs = 0u32;

    'frames: for _ in 0..frames {
        tick(&mut state, &input);

        for event in state.drain_events() {
            audio.handle(&event);
            match event {
                GameEvent::GameOver { score } => {
                    runs += 1;
                    log::info!("Run {} lasted {} frames", runs, state.time_ticks);
                    if let Some(rank) = high_scores.add_score(score, state.scroll_x) {
                        log::info!("New high score #{}: {}", rank, score);
                    }
                }
                GameEvent::QuitRequested => break 'frames,
                _ => {}
            }
        }
    }

    if let Err(e) = high_scores.save_to(Path::new(HighScores::FILE_NAME)) {
        log::warn!("Could not save high scores: {}", e);
    }

    let snapshot = FrameSnapshot::capture(&state);
    log::info!(
        "Finished {} runs; best score {}",
        runs,
        high_scores.top_score().unwrap_or(0)
    );
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to encode final frame: {}", e),
    }
}

/// Seed from wall-clock time when none is configured
fn seed_from_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
