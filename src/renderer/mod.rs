//! Rendering module
//!
//! Renderers only read `GameState` between ticks. The text renderer draws the
//! canvas at brick resolution for headless runs and debugging.

pub mod ascii;

pub use ascii::AsciiRenderer;

use crate::sim::GameState;

/// Something that draws a frame from simulation state
pub trait Renderer {
    fn render(&mut self, state: &GameState);
}
