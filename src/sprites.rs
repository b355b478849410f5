//! Asset keys for animation states
//!
//! The simulation only tracks enumerated animation states; this table maps
//! them onto sprite names so renderers never build paths by hand.

use crate::sim::{EnemyKind, Facing, Platform, PlayerAnim};

pub const BACKGROUND: &str = "background/ocean";
pub const PLAYER_STAND: &str = "player/stand";

const PLAYER_JUMP_RIGHT: &str = "player/jump";
const PLAYER_JUMP_LEFT: &str = "player/jump_left";

const PLAYER_WALK_RIGHT: [&str; 10] = [
    "player/walk1",
    "player/walk2",
    "player/walk3",
    "player/walk4",
    "player/walk5",
    "player/walk6",
    "player/walk7",
    "player/walk8",
    "player/walk9",
    "player/walk10",
];

const PLAYER_WALK_LEFT: [&str; 10] = [
    "player/walk1_left",
    "player/walk2_left",
    "player/walk3_left",
    "player/walk4_left",
    "player/walk5_left",
    "player/walk6_left",
    "player/walk7_left",
    "player/walk8_left",
    "player/walk9_left",
    "player/walk10_left",
];

/// Indexed by `EnemyKind::index()`, then walk frame
const ENEMY_WALK: [[&str; 3]; 5] = [
    ["enemy1/enemy_walk1", "enemy1/enemy_walk2", "enemy1/enemy_walk3"],
    ["enemy2/enemy_walk1", "enemy2/enemy_walk2", "enemy2/enemy_walk3"],
    ["enemy3/enemy_walk1", "enemy3/enemy_walk2", "enemy3/enemy_walk3"],
    ["enemy4/enemy_walk1", "enemy4/enemy_walk2", "enemy4/enemy_walk3"],
    ["enemy5/enemy_walk1", "enemy5/enemy_walk2", "enemy5/enemy_walk3"],
];

/// Platform visual style
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum PlatformStyle {
    /// Sea floor
    Floor,
    /// Floating ledge
    Top,
}

impl PlatformStyle {
    pub fn of(platform: &Platform) -> Self {
        if platform.is_floor() {
            PlatformStyle::Floor
        } else {
            PlatformStyle::Top
        }
    }
}

pub fn player_sprite(anim: PlayerAnim, facing: Facing) -> &'static str {
    match (anim, facing) {
        (PlayerAnim::Stand, _) => PLAYER_STAND,
        (PlayerAnim::Jump, Facing::Right) => PLAYER_JUMP_RIGHT,
        (PlayerAnim::Jump, Facing::Left) => PLAYER_JUMP_LEFT,
        (PlayerAnim::Walk(frame), Facing::Right) => PLAYER_WALK_RIGHT[frame_index(frame, 10)],
        (PlayerAnim::Walk(frame), Facing::Left) => PLAYER_WALK_LEFT[frame_index(frame, 10)],
    }
}

pub fn enemy_sprite(kind: EnemyKind, frame: u8) -> &'static str {
    ENEMY_WALK[kind.index()][frame_index(frame, 3)]
}

pub fn platform_sprite(style: PlatformStyle) -> &'static str {
    match style {
        PlatformStyle::Floor => "floor/bottom",
        PlatformStyle::Top => "floor/top",
    }
}

/// 1-based frame to table index, clamped into range
#[inline]
fn frame_index(frame: u8, len: usize) -> usize {
    (frame.max(1) as usize - 1).min(len - 1)
}
