//! Enemy spawning, movement, stomps and despawn
//!
//! Enemies live in world space; the player lives in camera space. Every
//! comparison between the two shifts the enemy by `scroll_x` first.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, EnemyKind, GameEvent, GameState, Player};
use crate::consts::*;

/// Walk animation advance per frame
const ENEMY_ANIM_STEP: f32 = 0.2;

/// Outcome of the player touching an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Player came down on top: enemy dies, player bounces
    Stomp,
    /// Anything else: player dies
    Fatal,
}

/// Classify a contact between the player and an overlapping enemy
pub fn classify_contact(player: &Player, enemy: &Enemy) -> Contact {
    if player.vy > 0.0 && player.bottom() < enemy.pos.y + STOMP_TOLERANCE {
        Contact::Stomp
    } else {
        Contact::Fatal
    }
}

/// Advance all enemies one frame, then roll for a new spawn
pub fn update_enemies(state: &mut GameState) {
    advance_enemies(state);

    state.enemy_spawn_timer += 1;
    if state.enemy_spawn_timer >= ENEMY_SPAWN_INTERVAL
        && state.rng.random_bool(ENEMY_SPAWN_CHANCE)
    {
        spawn_enemy(state);
        state.enemy_spawn_timer = 0;
    }
}

/// Move, collide and despawn in one pass; removals are applied afterwards
///
/// Every enemy is evaluated even after a fatal contact, so a stomp later in
/// the list still scores on the frame the player dies.
fn advance_enemies(state: &mut GameState) {
    let scroll_x = state.scroll_x;
    let mut keep = Vec::with_capacity(state.enemies.len());
    let mut player_died = false;

    for enemy in &mut state.enemies {
        enemy.pos.x -= enemy.speed;
        enemy.walk_frame += ENEMY_ANIM_STEP;

        let mut alive = true;
        let on_screen = enemy.hitbox().to_camera(scroll_x);
        if state.player.hitbox().overlaps(&on_screen) {
            match classify_contact(&state.player, enemy) {
                Contact::Stomp => {
                    alive = false;
                    state.player.vy = JUMP_STRENGTH / 2.0;
                    state.score += 1;
                    state.events.push(GameEvent::EnemyStomped { score: state.score });
                    log::debug!("Enemy {} stomped, score {}", enemy.id, state.score);
                }
                Contact::Fatal => {
                    player_died = true;
                    log::debug!("Player hit by enemy {}", enemy.id);
                }
            }
        }

        if enemy.pos.x < scroll_x - ENEMY_DESPAWN_MARGIN {
            alive = false;
            log::trace!("Enemy {} left the screen", enemy.id);
        }

        keep.push(alive);
    }

    let mut keep = keep.into_iter();
    state.enemies.retain(|_| keep.next().unwrap_or(true));

    if player_died {
        state.enter_game_over();
    }
}

/// Spawn one enemy just past the right edge, standing on the platform below
fn spawn_enemy(state: &mut GameState) {
    let spawn_x = state.scroll_x + SCREEN_WIDTH + ENEMY_SPAWN_MARGIN;
    let spawn_y = state
        .platforms
        .iter()
        .find(|p| p.rect.spans_x_inclusive(spawn_x))
        .map(|p| p.rect.top() - ENEMY_HEIGHT / 2.0)
        .unwrap_or(ENEMY_FALLBACK_Y);

    let kind = EnemyKind::ALL[state.rng.random_range(0..EnemyKind::ALL.len())];
    let id = state.spawn_enemy(kind, Vec2::new(spawn_x, spawn_y));
    log::debug!("Spawned {:?} (id {}) at ({}, {})", kind, id, spawn_x, spawn_y);
}
