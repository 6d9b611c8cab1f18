//! Collision detection and response
//!
//! Circle vs axis-aligned brick, canvas walls and the paddle. Brick and wall
//! responses only flip one velocity component, so speed is preserved; the
//! paddle redirects the ball by hit offset at the same speed.

use glam::Vec2;

use super::state::{Ball, Cell, Grid, Paddle};
use crate::consts::MAX_BOUNCE_ANGLE;

/// Velocity axis flipped by a brick bounce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Result of a brick scan that found an overlap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickHit {
    pub row: usize,
    pub col: usize,
    /// Cell state before the hit
    pub cell: Cell,
    /// Component of the velocity that was flipped
    pub axis: Axis,
}

impl BrickHit {
    /// Whether the hit consumed the brick
    pub fn destroyed(&self) -> bool {
        self.cell == Cell::Breakable
    }
}

/// Closest point on an axis-aligned rectangle to `point`
#[inline]
pub fn closest_point_on_rect(point: Vec2, min: Vec2, max: Vec2) -> Vec2 {
    point.clamp(min, max)
}

/// Vector from the closest rectangle point to the circle center, if the circle
/// overlaps the rectangle
pub fn circle_rect_overlap(center: Vec2, radius: f32, min: Vec2, max: Vec2) -> Option<Vec2> {
    let diff = center - closest_point_on_rect(center, min, max);
    (diff.length_squared() < radius * radius).then_some(diff)
}

/// Axis to reflect for a given separation vector
///
/// Horizontal only when the ball is strictly more to the side than above or
/// below; a center inside the brick (zero separation) flips vertically.
#[inline]
pub fn reflection_axis(diff: Vec2) -> Axis {
    if diff.x.abs() > diff.y.abs() {
        Axis::X
    } else {
        Axis::Y
    }
}

/// Scan the grid and resolve the first brick the ball overlaps
///
/// Cells are visited row 0 first, column 0 first within a row; the first
/// overlap wins and scanning stops, so at most one cell changes per call.
/// Breakable cells become empty. Unbreakable cells only deflect.
pub fn resolve_brick_collision(grid: &mut Grid, ball: &mut Ball) -> Option<BrickHit> {
    let (row, col, cell, diff) = grid.iter().find_map(|(row, col, cell)| {
        if cell == Cell::Empty {
            return None;
        }
        let (min, max) = grid.cell_bounds(row, col);
        circle_rect_overlap(ball.pos, ball.radius, min, max).map(|diff| (row, col, cell, diff))
    })?;

    if cell == Cell::Breakable {
        grid.set(row, col, Cell::Empty);
    }

    let axis = reflection_axis(diff);
    match axis {
        Axis::X => ball.vel.x = -ball.vel.x,
        Axis::Y => ball.vel.y = -ball.vel.y,
    }

    Some(BrickHit {
        row,
        col,
        cell,
        axis,
    })
}

/// Would the next position cross the left or right wall
#[inline]
pub fn hits_side_wall(ball: &Ball, canvas_width: f32) -> bool {
    let next_x = ball.pos.x + ball.vel.x;
    next_x > canvas_width - ball.radius || next_x < ball.radius
}

/// Would the next position cross the top wall
#[inline]
pub fn hits_top_wall(ball: &Ball) -> bool {
    ball.pos.y + ball.vel.y < ball.radius
}

/// Does the ball at `next` overlap the paddle band on both axes
pub fn ball_paddle_overlap(next: Vec2, radius: f32, paddle: &Paddle) -> bool {
    next.y + radius >= paddle.top
        && next.y - radius <= paddle.bottom()
        && next.x + radius > paddle.x
        && next.x - radius < paddle.right()
}

/// Bounce angle from vertical for a hit at `hit_x`
///
/// The offset from paddle center is normalized by half the paddle width and
/// scaled to at most 60 degrees. Without `clamp` the offset can exceed +-1 when
/// the ball overlaps the paddle past its edge.
pub fn paddle_bounce_angle(hit_x: f32, paddle: &Paddle, clamp: bool) -> f32 {
    let rel = hit_x - paddle.center_x();
    let mut norm = rel / (paddle.width / 2.0);
    if clamp {
        norm = norm.clamp(-1.0, 1.0);
    }
    norm * MAX_BOUNCE_ANGLE
}

/// Upward velocity at the given angle from vertical, keeping `speed`
#[inline]
pub fn bounce_velocity(speed: f32, angle: f32) -> Vec2 {
    Vec2::new(speed * angle.sin(), -speed * angle.cos())
}

/// Has the ball at `next_y` left through the bottom of the canvas
#[inline]
pub fn below_canvas(next_y: f32, canvas_height: f32) -> bool {
    next_y > canvas_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use std::f32::consts::FRAC_PI_3;

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            radius: 8.0,
        }
    }

    fn paddle_at(x: f32) -> Paddle {
        let mut paddle = Paddle::from_settings(&Settings::default());
        paddle.x = x;
        paddle
    }

    #[test]
    fn test_closest_point_inside_and_outside() {
        let min = Vec2::new(0.0, 0.0);
        let max = Vec2::new(20.0, 20.0);
        assert_eq!(
            closest_point_on_rect(Vec2::new(5.0, 5.0), min, max),
            Vec2::new(5.0, 5.0)
        );
        assert_eq!(
            closest_point_on_rect(Vec2::new(-5.0, 30.0), min, max),
            Vec2::new(0.0, 20.0)
        );
    }

    #[test]
    fn test_circle_rect_overlap_is_strict() {
        let min = Vec2::ZERO;
        let max = Vec2::splat(20.0);
        // Exactly touching (distance == radius) is not a hit
        assert!(circle_rect_overlap(Vec2::new(28.0, 10.0), 8.0, min, max).is_none());
        let diff = circle_rect_overlap(Vec2::new(27.0, 10.0), 8.0, min, max).unwrap();
        assert_eq!(diff, Vec2::new(7.0, 0.0));
    }

    #[test]
    fn test_reflection_axis_tie_flips_y() {
        assert_eq!(reflection_axis(Vec2::new(3.0, 3.0)), Axis::Y);
        assert_eq!(reflection_axis(Vec2::ZERO), Axis::Y);
        assert_eq!(reflection_axis(Vec2::new(-4.0, 3.0)), Axis::X);
    }

    #[test]
    fn test_brick_hit_from_above() {
        let mut grid = Grid::from_settings(&Settings::default());
        // Ball just above cell (0, 0), moving down and a little right
        let mut ball = ball_at(10.0, -5.0, 2.0, 5.0);

        let hit = resolve_brick_collision(&mut grid, &mut ball).unwrap();
        assert_eq!((hit.row, hit.col), (0, 0));
        assert_eq!(hit.axis, Axis::Y);
        assert!(hit.destroyed());
        assert_eq!(grid.get(0, 0), Cell::Empty);
        assert_eq!(ball.vel, Vec2::new(2.0, -5.0));
    }

    #[test]
    fn test_brick_hit_from_side() {
        let mut grid = Grid::empty(20, 20, 20.0);
        grid.set(5, 5, Cell::Breakable);
        // Left of cell (5, 5) which spans x 100..120, y 100..120
        let mut ball = ball_at(94.0, 110.0, 4.0, 1.0);

        let hit = resolve_brick_collision(&mut grid, &mut ball).unwrap();
        assert_eq!(hit.axis, Axis::X);
        assert_eq!(ball.vel, Vec2::new(-4.0, 1.0));
        assert_eq!(grid.get(5, 5), Cell::Empty);
    }

    #[test]
    fn test_unbreakable_survives() {
        let mut grid = Grid::empty(20, 20, 20.0);
        grid.set(19, 0, Cell::Unbreakable);
        let mut ball = ball_at(10.0, 405.0, 0.0, -5.0);

        let hit = resolve_brick_collision(&mut grid, &mut ball).unwrap();
        assert!(!hit.destroyed());
        assert_eq!(grid.get(19, 0), Cell::Unbreakable);
        assert_eq!(ball.vel, Vec2::new(0.0, 5.0));
    }

    #[test]
    fn test_first_match_in_scan_order_wins() {
        let mut grid = Grid::from_settings(&Settings::default());
        // Touches both gap cells (19, 9) and (19, 10) from below
        let mut ball = ball_at(200.0, 406.0, 0.0, -5.0);
        let before = grid.breakable_count();

        let hit = resolve_brick_collision(&mut grid, &mut ball).unwrap();
        assert_eq!((hit.row, hit.col), (19, 9));
        assert_eq!(grid.get(19, 9), Cell::Empty);
        assert_eq!(grid.get(19, 10), Cell::Breakable);
        assert_eq!(grid.breakable_count(), before - 1);
    }

    #[test]
    fn test_no_hit_in_open_space() {
        let mut grid = Grid::from_settings(&Settings::default());
        let mut ball = ball_at(200.0, 500.0, 3.0, 4.0);
        assert!(resolve_brick_collision(&mut grid, &mut ball).is_none());
        assert_eq!(ball.vel, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_walls() {
        assert!(hits_side_wall(&ball_at(390.0, 300.0, 5.0, 0.0), 400.0));
        assert!(hits_side_wall(&ball_at(10.0, 300.0, -5.0, 0.0), 400.0));
        assert!(!hits_side_wall(&ball_at(200.0, 300.0, 5.0, 0.0), 400.0));
        assert!(hits_top_wall(&ball_at(200.0, 10.0, 0.0, -5.0)));
        assert!(!hits_top_wall(&ball_at(200.0, 20.0, 0.0, -5.0)));
    }

    #[test]
    fn test_paddle_overlap() {
        let paddle = paddle_at(160.0); // x 160..240, y 570..590
        assert!(ball_paddle_overlap(Vec2::new(200.0, 565.0), 8.0, &paddle));
        assert!(!ball_paddle_overlap(Vec2::new(200.0, 560.0), 8.0, &paddle));
        assert!(!ball_paddle_overlap(Vec2::new(152.0, 575.0), 8.0, &paddle));
        assert!(ball_paddle_overlap(Vec2::new(153.0, 575.0), 8.0, &paddle));
    }

    #[test]
    fn test_bounce_angle_center_is_vertical() {
        let paddle = paddle_at(160.0);
        let angle = paddle_bounce_angle(200.0, &paddle, true);
        assert_eq!(angle, 0.0);
        assert_eq!(bounce_velocity(5.0, angle), Vec2::new(0.0, -5.0));
    }

    #[test]
    fn test_bounce_angle_edges() {
        let paddle = paddle_at(160.0);
        assert!((paddle_bounce_angle(240.0, &paddle, true) - FRAC_PI_3).abs() < 1e-6);
        assert!((paddle_bounce_angle(160.0, &paddle, true) + FRAC_PI_3).abs() < 1e-6);
    }

    #[test]
    fn test_bounce_angle_clamp() {
        let paddle = paddle_at(160.0);
        // 47px right of center is past the edge (half width 40)
        let clamped = paddle_bounce_angle(247.0, &paddle, true);
        let raw = paddle_bounce_angle(247.0, &paddle, false);
        assert!((clamped - FRAC_PI_3).abs() < 1e-6);
        assert!(raw > FRAC_PI_3);
    }

    #[test]
    fn test_bounce_velocity_preserves_speed() {
        for angle in [-1.0_f32, -0.3, 0.0, 0.5, 1.04] {
            let v = bounce_velocity(7.0, angle);
            assert!((v.length() - 7.0).abs() < 1e-4);
            assert!(v.y < 0.0);
        }
    }
}
