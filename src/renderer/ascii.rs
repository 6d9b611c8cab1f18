//! Text frames at one character per brick

use super::Renderer;
use crate::sim::{Cell, GameState};

const EMPTY: char = ' ';
const BREAKABLE: char = '#';
const UNBREAKABLE: char = '@';
const PADDLE: char = '=';
const BALL: char = 'o';

/// Renders the canvas as rows of characters, one per brick-sized cell
#[derive(Debug, Default)]
pub struct AsciiRenderer {
    frame: String,
}

impl AsciiRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last rendered frame
    pub fn frame(&self) -> &str {
        &self.frame
    }

    /// Build a frame without keeping it
    pub fn draw(state: &GameState) -> String {
        let size = state.grid.brick_size();
        let cols = state.grid.cols();
        let rows = (state.settings.canvas_height / size).ceil() as usize;

        let mut canvas = vec![vec![EMPTY; cols]; rows];

        for (row, col, cell) in state.grid.iter() {
            if row >= rows {
                break;
            }
            canvas[row][col] = match cell {
                Cell::Empty => EMPTY,
                Cell::Breakable => BREAKABLE,
                Cell::Unbreakable => UNBREAKABLE,
            };
        }

        // Paddle row is the one holding its vertical center
        let paddle = &state.paddle;
        if let Some(line) = cell_index(paddle.top + paddle.height / 2.0, size, rows)
            .and_then(|row| canvas.get_mut(row))
        {
            let first = (paddle.x / size).floor().max(0.0) as usize;
            let last = ((paddle.right() / size).ceil() as usize).min(cols);
            for c in line.iter_mut().take(last).skip(first) {
                *c = PADDLE;
            }
        }

        let ball = state.ball.pos;
        if let (Some(row), Some(col)) = (cell_index(ball.y, size, rows), cell_index(ball.x, size, cols))
        {
            canvas[row][col] = BALL;
        }

        canvas
            .into_iter()
            .map(|line| line.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Renderer for AsciiRenderer {
    fn render(&mut self, state: &GameState) {
        self.frame = Self::draw(state);
    }
}

/// Cell index for a coordinate, if it lands on the canvas
fn cell_index(coord: f32, size: f32, count: usize) -> Option<usize> {
    if coord < 0.0 {
        return None;
    }
    let index = (coord / size) as usize;
    (index < count).then_some(index)
}
