//! Breakout - a single-screen brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: Read-only views of the simulation (text frames)
//! - `platform`: Host-side input plumbing
//! - `settings`: Data-driven layout and tuning

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Grid dimensions (cells)
    pub const COLS: usize = 20;
    pub const ROWS: usize = 20;

    /// Default canvas size (pixels)
    pub const CANVAS_WIDTH: f32 = 400.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Bottom-row columns left open so the ball can reach the bricks
    pub const GAP_COLUMNS: [usize; 2] = [9, 10];

    /// Paddle width in bricks
    pub const PADDLE_WIDTH_BRICKS: f32 = 4.0;
    /// Gap between paddle bottom and canvas bottom (pixels)
    pub const PADDLE_BOTTOM_OFFSET: f32 = 10.0;
    /// Paddle travel per tick (pixels)
    pub const PADDLE_STEP: f32 = 8.0;

    /// Maximum paddle bounce angle from vertical (60 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_3;
}
