//! Ocean Runner - A side-scrolling platformer over the deep sea
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, scrolling, platforms, enemies)
//! - `snapshot`: Read-only view of a frame for renderers
//! - `sprites`: Animation state to asset key tables
//! - `audio`: Sound collaborator contract and event dispatch
//! - `settings`: Persisted user preferences
//! - `highscores`: Top-10 leaderboard of finished runs

pub mod audio;
pub mod highscores;
pub mod settings;
pub mod sim;
pub mod snapshot;
pub mod sprites;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Visible screen size (pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Downward acceleration per frame
    pub const GRAVITY: f32 = 0.6;
    /// Vertical velocity applied on jump (negative = up)
    pub const JUMP_STRENGTH: f32 = -12.0;
    /// Horizontal step per frame while a direction is held
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Camera-space x the player is pinned to once scrolling starts
    pub const SCROLL_THRESHOLD: f32 = 400.0;

    /// Player hitbox
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    /// Player spawn position (centre anchor)
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 400.0;

    /// Enemy defaults
    pub const ENEMY_SPEED: f32 = 2.5;
    pub const ENEMY_WIDTH: f32 = 40.0;
    pub const ENEMY_HEIGHT: f32 = 60.0;
    /// Frames between spawn attempts
    pub const ENEMY_SPAWN_INTERVAL: u32 = 90;
    /// Chance that a due spawn attempt succeeds
    pub const ENEMY_SPAWN_CHANCE: f64 = 0.7;
    /// Distance beyond the right screen edge where enemies appear
    pub const ENEMY_SPAWN_MARGIN: f32 = 50.0;
    /// Distance behind the camera after which enemies are dropped
    pub const ENEMY_DESPAWN_MARGIN: f32 = 50.0;
    /// Stomp window below the enemy's centre
    pub const STOMP_TOLERANCE: f32 = 20.0;
    /// Centre y used when no platform is under the spawn point
    pub const ENEMY_FALLBACK_Y: f32 = SCREEN_HEIGHT - 100.0;

    /// Generated platform shape
    pub const PLATFORM_WIDTH: f32 = 200.0;
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    /// Horizontal gap range between consecutive platform origins
    pub const PLATFORM_GAP_MIN: i32 = 200;
    pub const PLATFORM_GAP_MAX: i32 = 300;
    /// Allowed platform tops for generated platforms
    pub const PLATFORM_HEIGHTS: [f32; 3] = [350.0, 400.0, 450.0];
    /// Height change above which the gap is forced to the minimum
    pub const PLATFORM_MAX_STEP: f32 = 100.0;
    /// Live platforms kept before pruning is allowed
    pub const MIN_LIVE_PLATFORMS: usize = 5;
    /// Platforms at least this wide use the floor sprite
    pub const FLOOR_MIN_WIDTH: f32 = 800.0;

    /// Width of one ocean background tile
    pub const BACKGROUND_WIDTH: f32 = 768.0;
    /// Volume used for the one-shot game over sound
    pub const GAME_OVER_VOLUME: f32 = 0.5;
}

/// Wrap a background offset into a single tile width
#[inline]
pub fn wrap_background(offset: f32) -> f32 {
    offset.rem_euclid(consts::BACKGROUND_WIDTH)
}
