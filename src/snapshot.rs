//! Read-only frame snapshot for renderers
//!
//! Everything is already in camera space and carries its resolved sprite key,
//! so a renderer only has to blit.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{EnemyKind, Facing, GamePhase, GameState, Rect};
use crate::sprites::{self, PlatformStyle};
use crate::wrap_background;

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    /// Hitbox centre
    pub pos: Vec2,
    pub facing: Facing,
    /// -1 facing left, +1 facing right
    pub direction: i8,
    pub sprite: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlatformView {
    pub rect: Rect,
    pub style: PlatformStyle,
    pub sprite: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnemyView {
    pub id: u32,
    /// Hitbox centre
    pub pos: Vec2,
    pub kind: EnemyKind,
    pub sprite: &'static str,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub scroll_x: f32,
    pub background: &'static str,
    /// Background tile offset, already wrapped
    pub background_offset: f32,
    pub player: PlayerView,
    pub platforms: Vec<PlatformView>,
    pub enemies: Vec<EnemyView>,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let player = &state.player;
        Self {
            phase: state.phase,
            score: state.score,
            scroll_x: state.scroll_x,
            background: sprites::BACKGROUND,
            background_offset: wrap_background(state.bg_scroll),
            player: PlayerView {
                pos: player.pos,
                facing: player.facing,
                direction: player.facing.sign(),
                sprite: sprites::player_sprite(player.anim, player.facing),
            },
            platforms: state
                .platforms
                .iter()
                .map(|p| {
                    let style = PlatformStyle::of(p);
                    PlatformView {
                        rect: p.rect.to_camera(state.scroll_x),
                        style,
                        sprite: sprites::platform_sprite(style),
                    }
                })
                .collect(),
            enemies: state
                .enemies
                .iter()
                .map(|e| EnemyView {
                    id: e.id,
                    pos: Vec2::new(e.pos.x - state.scroll_x, e.pos.y),
                    kind: e.kind,
                    sprite: sprites::enemy_sprite(e.kind, e.anim_frame()),
                })
                .collect(),
        }
    }
}
