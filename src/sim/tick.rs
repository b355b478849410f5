//! Per-frame simulation tick
//!
//! Drives the Menu / Playing / GameOver state machine and, while playing,
//! runs the subsystems in their fixed order: player, scroll, platforms,
//! enemies. Later stages read positions written by earlier ones.

use super::enemies::update_enemies;
use super::physics::update_player;
use super::platforms::update_platforms;
use super::scroll::{update_background, update_scroll};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move left (held)
    pub left: bool,
    /// Move right (held)
    pub right: bool,
    /// Jump key held
    pub jump: bool,
    /// Jump key went down since the last frame
    pub jump_pressed: bool,
    /// Start button on the main menu
    pub start: bool,
    /// Any key on the game over screen
    pub restart: bool,
    /// In-game menu button
    pub menu: bool,
    /// Music button on the main menu
    pub toggle_music: bool,
    /// Quit button on the main menu
    pub quit: bool,
    /// Idle/demo mode - the game plays itself
    pub idle_mode: bool,
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    let input = if input.idle_mode {
        autopilot(state)
    } else {
        input.clone()
    };

    match state.phase {
        GamePhase::Menu => {
            if input.toggle_music {
                state.events.push(GameEvent::MusicToggled);
            }
            if input.quit {
                state.events.push(GameEvent::QuitRequested);
            } else if input.start {
                state.reset();
            }
        }
        GamePhase::Playing => {
            if input.menu {
                state.phase = GamePhase::Menu;
                state.events.push(GameEvent::ReturnedToMenu);
                log::info!("Returned to menu");
            }
        }
        GamePhase::GameOver => {
            if input.restart {
                state.reset();
            }
        }
    }

    update_background(state);

    // Simulation is frozen outside of play
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    update_player(state, &input);
    update_scroll(state);
    update_platforms(state);
    update_enemies(state);

    if state.player.top() > SCREEN_HEIGHT {
        state.enter_game_over();
    }
}

/// How far ahead (camera space) the autopilot looks for ground and enemies
const AUTOPILOT_LOOKAHEAD: f32 = 40.0;
const AUTOPILOT_ENEMY_RANGE: f32 = 140.0;

/// Build input for demo mode: start, run right, hop gaps and enemies, restart
fn autopilot(state: &GameState) -> TickInput {
    match state.phase {
        GamePhase::Menu => TickInput {
            start: true,
            ..Default::default()
        },
        GamePhase::GameOver => TickInput {
            restart: true,
            ..Default::default()
        },
        GamePhase::Playing => {
            let player = &state.player;
            let probe_x = player.pos.x + AUTOPILOT_LOOKAHEAD;
            let ground_ahead = state
                .platforms
                .iter()
                .any(|p| p.rect.to_camera(state.scroll_x).spans_x_exclusive(probe_x));
            let enemy_ahead = state.enemies.iter().any(|e| {
                let dx = e.pos.x - state.scroll_x - player.pos.x;
                dx > 0.0 && dx < AUTOPILOT_ENEMY_RANGE
            });

            TickInput {
                right: true,
                jump: !ground_ahead || enemy_ahead,
                ..Default::default()
            }
        }
    }
}
