//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in `GameState`. Renderers read it
//! between ticks, never during one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball resting on paddle, waiting for launch input
    Serve,
    /// Active gameplay
    Playing,
    /// Ball fell past the paddle; waiting for the host to reset
    Lost,
}

/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    /// Destroyed on first contact
    Breakable,
    /// Never destroyed
    Unbreakable,
}

/// Something that happened during a tick (for renderers/audio)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Launched,
    BrickDestroyed { row: usize, col: usize },
    /// Ball bounced off an unbreakable cell
    BrickHit { row: usize, col: usize },
    WallBounce,
    /// Paddle bounce with the resulting angle from vertical (radians)
    PaddleBounce { angle: f32 },
    BallLost,
}

/// Fixed ROWS x COLS grid of square bricks, stored row-major
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    brick_size: f32,
    cells: Vec<Cell>,
}

impl Grid {
    /// A grid with every cell empty
    pub fn empty(rows: usize, cols: usize, brick_size: f32) -> Self {
        Self {
            rows,
            cols,
            brick_size,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Startup layout: all breakable, bottom row unbreakable except the gap columns
    pub fn from_settings(settings: &Settings) -> Self {
        let mut grid = Self::empty(settings.rows, settings.cols, settings.brick_size());
        grid.cells.fill(Cell::Breakable);

        if let Some(bottom) = grid.rows.checked_sub(1) {
            for col in 0..grid.cols {
                grid.set(bottom, col, Cell::Unbreakable);
            }
            for &col in &settings.gap_columns {
                grid.set(bottom, col, Cell::Breakable);
            }
        }
        grid
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn brick_size(&self) -> f32 {
        self.brick_size
    }

    /// Cell at (row, col); out-of-range coordinates read as empty
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col]
        } else {
            Cell::Empty
        }
    }

    /// Overwrite a cell; out-of-range writes are ignored
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = cell;
        }
    }

    /// All cells in scan order (row 0 first, column 0 first within a row)
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (i / self.cols, i % self.cols, cell))
    }

    /// Top-left and bottom-right corners of a cell
    pub fn cell_bounds(&self, row: usize, col: usize) -> (Vec2, Vec2) {
        let min = Vec2::new(col as f32 * self.brick_size, row as f32 * self.brick_size);
        (min, min + Vec2::splat(self.brick_size))
    }

    /// Number of bricks left that can still be destroyed
    pub fn breakable_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Breakable).count()
    }

    pub fn is_cleared(&self) -> bool {
        self.breakable_count() == 0
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(radius: f32, vel: Vec2) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel,
            radius,
        }
    }

    /// Current speed (pixels per tick)
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Where the ball will be after this tick's integration
    #[inline]
    pub fn next_pos(&self) -> Vec2 {
        self.pos + self.vel
    }

    /// Rest the ball on top of the paddle, centered
    pub fn rest_on(&mut self, paddle: &Paddle) {
        self.pos = Vec2::new(paddle.center_x(), paddle.top - self.radius);
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge (fixed)
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Centered paddle for the given settings
    pub fn from_settings(settings: &Settings) -> Self {
        let width = settings.paddle_width();
        Self {
            x: (settings.canvas_width - width) / 2.0,
            top: settings.paddle_top(),
            width,
            height: settings.paddle_height(),
        }
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Step the paddle by held move flags, then clamp to [0, max_x]
    ///
    /// Both boundary checks look at the position before this tick's move.
    pub fn step(&mut self, move_right: bool, move_left: bool, step: f32, max_x: f32) {
        let start = self.x;
        if move_right && start < max_x {
            self.x += step;
        }
        if move_left && start > 0.0 {
            self.x -= step;
        }
        self.x = self.x.clamp(0.0, max_x);
    }
}

/// Complete game state (serialized for debug dumps only)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Layout and tuning this state was built from
    pub settings: Settings,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub grid: Grid,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl GameState {
    /// Create a fresh game from settings
    pub fn new(settings: Settings) -> Self {
        let (vx, vy) = settings.ball_start_velocity();
        let paddle = Paddle::from_settings(&settings);
        let mut ball = Ball::new(settings.ball_radius(), Vec2::new(vx, vy));
        ball.rest_on(&paddle);

        Self {
            grid: Grid::from_settings(&settings),
            ball,
            paddle,
            phase: GamePhase::Serve,
            time_ticks: 0,
            events: Vec::new(),
            settings,
        }
    }

    /// Return to the startup state in place (grid, ball, paddle, phase)
    pub fn reset(&mut self) {
        let settings = std::mem::take(&mut self.settings);
        *self = Self::new(settings);
        log::info!("Game reset");
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}
