//! Procedural platform stream
//!
//! Platforms are generated lazily just ahead of the camera and pruned once
//! they have scrolled completely off the left edge. The deque stays sorted by
//! x, so only the tail decides extension and only the head decides pruning.

use rand::Rng;

use super::state::{GameState, Platform};
use crate::consts::*;

/// Extend the stream ahead of the camera and prune behind it
pub fn update_platforms(state: &mut GameState) {
    extend_stream(state);
    prune_stream(state);
}

fn extend_stream(state: &mut GameState) {
    let Some(tail) = state.platforms.back().copied() else {
        return;
    };
    if tail.rect.x - state.scroll_x >= SCREEN_WIDTH {
        return;
    }

    let mut gap = state.rng.random_range(PLATFORM_GAP_MIN..=PLATFORM_GAP_MAX) as f32;
    let y = PLATFORM_HEIGHTS[state.rng.random_range(0..PLATFORM_HEIGHTS.len())];
    // Big height changes get the shortest gap so the jump stays makeable
    if (y - tail.rect.y).abs() > PLATFORM_MAX_STEP {
        gap = PLATFORM_GAP_MIN as f32;
    }

    let platform = Platform::new(tail.rect.x + gap, y, PLATFORM_WIDTH, PLATFORM_HEIGHT);
    log::trace!("Platform appended at ({}, {})", platform.rect.x, platform.rect.y);
    state.platforms.push_back(platform);
}

fn prune_stream(state: &mut GameState) {
    if state.platforms.len() <= MIN_LIVE_PLATFORMS {
        return;
    }
    let behind_camera = state
        .platforms
        .front()
        .is_some_and(|head| head.rect.right() - state.scroll_x <= 0.0);
    if behind_camera {
        state.platforms.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::starting_platforms;
    use proptest::prelude::*;

    fn is_sorted(state: &GameState) -> bool {
        state
            .platforms
            .iter()
            .zip(state.platforms.iter().skip(1))
            .all(|(a, b)| a.rect.x <= b.rect.x)
    }

    #[test]
    fn test_extends_when_tail_on_screen() {
        let mut state = GameState::new(3);
        // Tail at x=850 is off screen at scroll 0
        update_platforms(&mut state);
        assert_eq!(state.platforms.len(), 5);

        state.scroll_x = 100.0;
        update_platforms(&mut state);
        assert_eq!(state.platforms.len(), 6);

        let new = state.platforms.back().copied().unwrap();
        assert!(new.rect.x >= 850.0 + 200.0 && new.rect.x <= 850.0 + 300.0);
        assert!(PLATFORM_HEIGHTS.contains(&new.rect.y));
        assert_eq!(new.rect.width, PLATFORM_WIDTH);
        assert_eq!(new.rect.height, PLATFORM_HEIGHT);
    }

    #[test]
    fn test_large_step_forces_min_gap() {
        let mut state = GameState::new(3);
        // A deep tail makes every allowed height a step of more than 100
        state.platforms = [Platform::new(0.0, 600.0, 200.0, 20.0)].into();
        for _ in 0..10 {
            state.platforms.truncate(1);
            update_platforms(&mut state);
            let new = state.platforms.back().copied().unwrap();
            assert_eq!(new.rect.x, 200.0);
        }
    }

    #[test]
    fn test_prunes_head_behind_camera() {
        let mut state = GameState::new(3);
        state.platforms.push_back(Platform::new(1100.0, 400.0, 200.0, 20.0));
        // Floor spans 0..800; right edge exactly at the camera
        state.scroll_x = 800.0;
        prune_stream(&mut state);
        assert_eq!(state.platforms.len(), 5);
        assert_eq!(state.platforms.front().unwrap().rect.x, 250.0);
    }

    #[test]
    fn test_never_prunes_at_minimum() {
        let mut state = GameState::new(3);
        assert_eq!(state.platforms, starting_platforms());
        state.scroll_x = 5000.0;
        prune_stream(&mut state);
        assert_eq!(state.platforms.len(), MIN_LIVE_PLATFORMS);
    }

    #[test]
    fn test_long_run_stays_bounded() {
        let mut state = GameState::new(11);
        for _ in 0..2000 {
            state.scroll_x += 5.0;
            update_platforms(&mut state);
            assert!(is_sorted(&state));
        }
        // Roughly a screen and a half of platforms at most
        assert!(state.platforms.len() <= 12, "{}", state.platforms.len());
        assert!(state.platforms.len() >= MIN_LIVE_PLATFORMS);
    }

    proptest! {
        #[test]
        fn prop_stream_sorted_and_floor_respected(
            seed in any::<u64>(),
            steps in prop::collection::vec(0.0f32..40.0, 1..200),
        ) {
            let mut state = GameState::new(seed);
            for step in steps {
                let before = state.platforms.len();
                state.scroll_x += step;
                update_platforms(&mut state);
                prop_assert!(is_sorted(&state));
                if before <= MIN_LIVE_PLATFORMS {
                    prop_assert!(state.platforms.len() >= before);
                }
            }
        }
    }
}
