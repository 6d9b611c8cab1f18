//! Game settings and layout
//!
//! Canvas size, grid shape and paddle tuning. Everything the simulation treats
//! as fixed configuration lives here; geometry such as brick size and ball
//! radius is derived from it.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Canvas ===
    /// Canvas width in pixels
    pub canvas_width: f32,
    /// Canvas height in pixels
    pub canvas_height: f32,

    // === Grid ===
    /// Number of brick columns (brick size is canvas_width / cols)
    pub cols: usize,
    /// Number of brick rows
    pub rows: usize,
    /// Bottom-row columns that start breakable instead of unbreakable
    pub gap_columns: Vec<usize>,

    // === Paddle ===
    /// Paddle width, in bricks
    pub paddle_width_bricks: f32,
    /// Distance from the paddle's bottom edge to the canvas bottom
    pub paddle_bottom_offset: f32,
    /// Pixels moved per tick while a move flag is held
    pub paddle_step: f32,

    // === Physics ===
    /// Clamp the paddle hit offset to [-1, 1] before mapping it to a bounce angle
    pub clamp_bounce_angle: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            cols: COLS,
            rows: ROWS,
            gap_columns: GAP_COLUMNS.to_vec(),

            paddle_width_bricks: PADDLE_WIDTH_BRICKS,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,
            paddle_step: PADDLE_STEP,

            clamp_bounce_angle: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check that the derived geometry is usable
    pub fn validate(&self) -> Result<(), SettingsError> {
        let fields = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("paddle_width_bricks", self.paddle_width_bricks),
            ("paddle_bottom_offset", self.paddle_bottom_offset),
            ("paddle_step", self.paddle_step),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SettingsError::Invalid(format!(
                "{name} must be finite, got {value}"
            )));
        }
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "canvas must have positive size, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if self.cols == 0 || self.rows == 0 {
            return Err(SettingsError::Invalid(format!(
                "grid must have at least one cell, got {}x{}",
                self.cols, self.rows
            )));
        }
        if let Some(&col) = self.gap_columns.iter().find(|&&c| c >= self.cols) {
            return Err(SettingsError::Invalid(format!(
                "gap column {col} is outside a grid of {} columns",
                self.cols
            )));
        }
        if self.ball_radius() <= 0.0 {
            return Err(SettingsError::Invalid(format!(
                "brick size {} is too small for a ball",
                self.brick_size()
            )));
        }
        if !(self.paddle_width() > 0.0 && self.paddle_width() <= self.canvas_width) {
            return Err(SettingsError::Invalid(format!(
                "paddle width {} does not fit a canvas {} wide",
                self.paddle_width(),
                self.canvas_width
            )));
        }
        if !(self.paddle_step > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "paddle step must be positive, got {}",
                self.paddle_step
            )));
        }
        Ok(())
    }

    /// Square brick edge length
    #[inline]
    pub fn brick_size(&self) -> f32 {
        self.canvas_width / self.cols as f32
    }

    #[inline]
    pub fn ball_radius(&self) -> f32 {
        self.brick_size() / 2.0 - 2.0
    }

    /// Velocity the ball launches with
    #[inline]
    pub fn ball_start_velocity(&self) -> (f32, f32) {
        let v = self.brick_size() / 4.0;
        (v, -v)
    }

    #[inline]
    pub fn paddle_width(&self) -> f32 {
        self.brick_size() * self.paddle_width_bricks
    }

    #[inline]
    pub fn paddle_height(&self) -> f32 {
        self.brick_size()
    }

    /// Y coordinate of the paddle's top edge
    #[inline]
    pub fn paddle_top(&self) -> f32 {
        self.canvas_height - self.paddle_height() - self.paddle_bottom_offset
    }

    /// Largest legal paddle left edge
    #[inline]
    pub fn paddle_max_x(&self) -> f32 {
        self.canvas_width - self.paddle_width()
    }
}
