//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per rendered frame
//! - Seeded RNG only
//! - Fixed subsystem order within a frame
//! - No rendering or audio dependencies (side effects are `GameEvent`s)

pub mod enemies;
pub mod physics;
pub mod platforms;
pub mod rect;
pub mod scroll;
pub mod state;
pub mod tick;

pub use enemies::{Contact, classify_contact};
pub use rect::Rect;
pub use state::{
    Enemy, EnemyKind, Facing, GameEvent, GamePhase, GameState, Platform, Player, PlayerAnim,
    starting_platforms,
};
pub use tick::{TickInput, tick};
