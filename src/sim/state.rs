//! Game state and core simulation types
//!
//! The session owns every entity. Nothing here depends on rendering or audio;
//! side effects leave the simulation as `GameEvent`s.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Main menu, simulation frozen, background drifts
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart
    GameOver,
}

/// Horizontal facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1 for left, +1 for right
    pub fn sign(self) -> i8 {
        match self {
            Facing::Left => -1,
            Facing::Right => 1,
        }
    }
}

/// Player animation state, resolved once per frame by the physics step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerAnim {
    /// Initial pose before any movement
    #[default]
    Stand,
    /// Walk cycle frame (1-based)
    Walk(u8),
    /// In the air
    Jump,
}

/// The player character
///
/// `pos` is the centre of the hitbox in camera space: the camera scrolls the
/// world under the player rather than moving the player through it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Vertical velocity (positive = falling)
    pub vy: f32,
    pub facing: Facing,
    pub on_ground: bool,
    pub width: f32,
    pub height: f32,
    /// Fractional walk animation counter
    pub walk_frame: f32,
    pub anim: PlayerAnim,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            vy: 0.0,
            facing: Facing::Right,
            on_ground: true,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            walk_frame: 0.0,
            anim: PlayerAnim::Stand,
        }
    }
}

impl Player {
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.height / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }

    /// Move vertically so the hitbox bottom sits at `y`
    #[inline]
    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.height / 2.0;
    }

    pub fn hitbox(&self) -> Rect {
        Rect::from_center(self.pos, self.width, self.height)
    }
}

/// A solid platform in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
        }
    }

    /// Wide platforms are drawn as sea floor
    pub fn is_floor(&self) -> bool {
        self.rect.width >= FLOOR_MIN_WIDTH
    }
}

/// Enemy visual variants (behaviour is identical)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Crab,
    Jellyfish,
    Pufferfish,
    Urchin,
    Eel,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 5] = [
        EnemyKind::Crab,
        EnemyKind::Jellyfish,
        EnemyKind::Pufferfish,
        EnemyKind::Urchin,
        EnemyKind::Eel,
    ];

    pub fn index(self) -> usize {
        match self {
            EnemyKind::Crab => 0,
            EnemyKind::Jellyfish => 1,
            EnemyKind::Pufferfish => 2,
            EnemyKind::Urchin => 3,
            EnemyKind::Eel => 4,
        }
    }
}

/// A walking enemy in world space
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    /// Hitbox centre (world space)
    pub pos: Vec2,
    /// Leftward speed per frame
    pub speed: f32,
    pub width: f32,
    pub height: f32,
    /// Fractional walk animation counter
    pub walk_frame: f32,
}

impl Enemy {
    pub fn new(id: u32, kind: EnemyKind, pos: Vec2) -> Self {
        Self {
            id,
            kind,
            pos,
            speed: ENEMY_SPEED,
            width: ENEMY_WIDTH,
            height: ENEMY_HEIGHT,
            walk_frame: 0.0,
        }
    }

    /// World-space hitbox
    pub fn hitbox(&self) -> Rect {
        Rect::from_center(self.pos, self.width, self.height)
    }

    /// Current walk frame (1-based, three-frame cycle)
    pub fn anim_frame(&self) -> u8 {
        (self.walk_frame as u32 % 3 + 1) as u8
    }
}

/// Side effects produced by the simulation, drained by the frame driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A run started or restarted (background music cue)
    RunStarted,
    /// Player left the ground on a jump
    Jumped,
    /// Enemy defeated by a stomp
    EnemyStomped { score: u32 },
    /// Player died or fell off the world
    GameOver { score: u32 },
    /// Player left a run for the main menu
    ReturnedToMenu,
    /// Music preference flipped from the menu
    MusicToggled,
    /// Quit chosen from the menu
    QuitRequested,
}

/// The canonical opening layout: sea floor plus four stepping stones
pub fn starting_platforms() -> VecDeque<Platform> {
    VecDeque::from([
        Platform::new(0.0, 550.0, 800.0, 50.0),
        Platform::new(250.0, 450.0, 200.0, 20.0),
        Platform::new(450.0, 350.0, 200.0, 20.0),
        Platform::new(650.0, 450.0, 200.0, 20.0),
        Platform::new(850.0, 350.0, 200.0, 20.0),
    ])
}

/// The game session (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// World-to-camera horizontal offset (never decreases during a run)
    pub scroll_x: f32,
    /// Cosmetic background offset
    pub bg_scroll: f32,
    /// Enemies stomped this run
    pub score: u32,
    /// Frames since the last enemy spawn
    pub enemy_spawn_timer: u32,
    /// Frames simulated in the current run
    pub time_ticks: u64,
    pub player: Player,
    /// Ordered by x; append at the back, prune from the front
    pub platforms: VecDeque<Platform>,
    /// Live enemies, unordered
    pub enemies: Vec<Enemy>,
    /// Pending side effects
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new session sitting in the main menu
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            scroll_x: 0.0,
            bg_scroll: 0.0,
            score: 0,
            enemy_spawn_timer: 0,
            time_ticks: 0,
            player: Player::default(),
            platforms: starting_platforms(),
            enemies: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        };

        // Menu music starts with the session
        state.events.push(GameEvent::RunStarted);
        state
    }

    /// Start a fresh run: entities back to the opening layout, phase to Playing
    pub fn reset(&mut self) {
        self.score = 0;
        self.scroll_x = 0.0;
        self.enemy_spawn_timer = 0;
        self.time_ticks = 0;
        self.player = Player::default();
        self.platforms = starting_platforms();
        self.enemies.clear();
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::RunStarted);
        log::info!("Run started (seed {})", self.seed);
    }

    /// End the current run; no-op unless playing
    pub fn enter_game_over(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver { score: self.score });
        log::info!(
            "Game over: score {}, distance {:.0}",
            self.score,
            self.scroll_x
        );
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an enemy at a world-space centre position
    pub fn spawn_enemy(&mut self, kind: EnemyKind, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.enemies.push(Enemy::new(id, kind, pos));
        id
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_in_menu() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.platforms.len(), 5);
        assert!(state.enemies.is_empty());
        assert_eq!(state.events, vec![GameEvent::RunStarted]);
    }

    #[test]
    fn test_player_edges() {
        let player = Player::default();
        assert_eq!(player.top(), 375.0);
        assert_eq!(player.bottom(), 425.0);

        let mut player = player;
        player.set_bottom(550.0);
        assert_eq!(player.pos.y, 525.0);
    }

    #[test]
    fn test_starting_platforms_sorted() {
        let platforms = starting_platforms();
        assert!(platforms[0].is_floor());
        assert!(platforms.iter().skip(1).all(|p| !p.is_floor()));
        assert!(
            platforms
                .iter()
                .zip(platforms.iter().skip(1))
                .all(|(a, b)| a.rect.x <= b.rect.x)
        );
    }

    #[test]
    fn test_reset_restores_opening_layout() {
        let mut state = GameState::new(1);
        state.score = 4;
        state.scroll_x = 900.0;
        state.enemy_spawn_timer = 33;
        state.player.pos = Vec2::new(400.0, 700.0);
        state.platforms.clear();
        state.spawn_enemy(EnemyKind::Eel, Vec2::new(1000.0, 400.0));
        state.phase = GamePhase::GameOver;

        state.reset();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.scroll_x, 0.0);
        assert_eq!(state.enemy_spawn_timer, 0);
        assert_eq!(state.player.pos, Vec2::new(100.0, 400.0));
        assert_eq!(state.platforms, starting_platforms());
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_enter_game_over_only_once() {
        let mut state = GameState::new(1);
        state.reset();
        state.drain_events();

        state.enter_game_over();
        state.enter_game_over();

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.drain_events(), vec![GameEvent::GameOver { score: 0 }]);
    }

    #[test]
    fn test_enemy_anim_frame_cycles() {
        let mut enemy = Enemy::new(1, EnemyKind::Crab, Vec2::ZERO);
        assert_eq!(enemy.anim_frame(), 1);
        enemy.walk_frame = 2.2;
        assert_eq!(enemy.anim_frame(), 3);
        enemy.walk_frame = 3.0;
        assert_eq!(enemy.anim_frame(), 1);
    }
}
