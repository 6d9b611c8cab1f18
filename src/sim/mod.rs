//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no wall-clock time
//! - Stable iteration order (row-major grid scan)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Axis, BrickHit, resolve_brick_collision};
pub use state::{Ball, Cell, GameEvent, GamePhase, GameState, Grid, Paddle};
pub use tick::{TickInput, TickOutcome, tick};
