//! Horizontal camera scrolling

use super::state::{GamePhase, GameState};
use crate::consts::SCROLL_THRESHOLD;

/// Pin the player at the scroll threshold and move the camera by the overflow
pub fn update_scroll(state: &mut GameState) {
    let overflow = state.player.pos.x - SCROLL_THRESHOLD;
    if overflow > 0.0 {
        state.scroll_x += overflow;
        state.player.pos.x = SCROLL_THRESHOLD;
    }
}

/// Advance the cosmetic background offset
///
/// The menu drifts on its own; during play the background follows the camera.
pub fn update_background(state: &mut GameState) {
    match state.phase {
        GamePhase::Menu => state.bg_scroll += 1.0,
        GamePhase::Playing => state.bg_scroll = state.scroll_x,
        GamePhase::GameOver => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_scroll_before_threshold() {
        let mut state = GameState::new(1);
        state.player.pos.x = 399.0;
        update_scroll(&mut state);
        assert_eq!(state.scroll_x, 0.0);
        assert_eq!(state.player.pos.x, 399.0);
    }

    #[test]
    fn test_scroll_by_overflow() {
        let mut state = GameState::new(1);
        state.scroll_x = 120.0;
        state.player.pos.x = 405.0;
        update_scroll(&mut state);
        assert_eq!(state.scroll_x, 125.0);
        assert_eq!(state.player.pos.x, SCROLL_THRESHOLD);
    }

    #[test]
    fn test_never_scrolls_left() {
        let mut state = GameState::new(1);
        state.scroll_x = 50.0;
        state.player.pos.x = -30.0;
        update_scroll(&mut state);
        assert_eq!(state.scroll_x, 50.0);
    }

    #[test]
    fn test_background_by_phase() {
        let mut state = GameState::new(1);
        update_background(&mut state);
        update_background(&mut state);
        assert_eq!(state.bg_scroll, 2.0);

        state.reset();
        state.scroll_x = 333.0;
        update_background(&mut state);
        assert_eq!(state.bg_scroll, 333.0);

        state.phase = GamePhase::GameOver;
        state.scroll_x = 999.0;
        update_background(&mut state);
        assert_eq!(state.bg_scroll, 333.0);
    }
}
