//! Per-frame simulation tick
//!
//! Advances the game by exactly one display frame. Physics runs in a fixed
//! order: bricks, walls, paddle or loss, integration, then paddle movement.

use super::collision::{
    ball_paddle_overlap, below_canvas, bounce_velocity, hits_side_wall, hits_top_wall,
    paddle_bounce_angle, resolve_brick_collision,
};
use super::state::{GameEvent, GamePhase, GameState};

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move paddle right (held)
    pub move_right: bool,
    /// Move paddle left (held)
    pub move_left: bool,
    /// Launch ball (edge-triggered; ignored once playing)
    pub launch: bool,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

/// What the host should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// Ball left through the bottom; the host should call `GameState::reset`
    Lost,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutcome {
    state.events.clear();

    if state.phase == GamePhase::Lost {
        return TickOutcome::Lost;
    }

    state.time_ticks += 1;

    let input = if input.idle_mode {
        autopilot(state, input)
    } else {
        *input
    };

    if state.phase == GamePhase::Playing && step_ball(state) == TickOutcome::Lost {
        state.phase = GamePhase::Lost;
        state.events.push(GameEvent::BallLost);
        log::info!(
            "Ball lost at tick {} ({} bricks left)",
            state.time_ticks,
            state.grid.breakable_count()
        );
        return TickOutcome::Lost;
    }

    let max_x = state.settings.paddle_max_x();
    state.paddle.step(
        input.move_right,
        input.move_left,
        state.settings.paddle_step,
        max_x,
    );

    if state.phase == GamePhase::Serve {
        // Ball tracks the paddle until launched; physics starts next tick
        state.ball.rest_on(&state.paddle);
        if input.launch {
            state.phase = GamePhase::Playing;
            state.events.push(GameEvent::Launched);
            log::debug!("Ball launched at tick {}", state.time_ticks);
        }
    }

    TickOutcome::Continue
}

/// Bricks, walls, paddle/loss, then integrate
fn step_ball(state: &mut GameState) -> TickOutcome {
    if let Some(hit) = resolve_brick_collision(&mut state.grid, &mut state.ball) {
        if hit.destroyed() {
            log::debug!("Brick destroyed at ({}, {})", hit.row, hit.col);
            state.events.push(GameEvent::BrickDestroyed {
                row: hit.row,
                col: hit.col,
            });
        } else {
            state.events.push(GameEvent::BrickHit {
                row: hit.row,
                col: hit.col,
            });
        }
    }

    let ball = &mut state.ball;

    if hits_side_wall(ball, state.settings.canvas_width) {
        ball.vel.x = -ball.vel.x;
        state.events.push(GameEvent::WallBounce);
    }

    if hits_top_wall(ball) {
        ball.vel.y = -ball.vel.y;
        state.events.push(GameEvent::WallBounce);
    } else {
        let next = ball.next_pos();
        if ball_paddle_overlap(next, ball.radius, &state.paddle) {
            let angle =
                paddle_bounce_angle(next.x, &state.paddle, state.settings.clamp_bounce_angle);
            ball.vel = bounce_velocity(ball.speed(), angle);
            state.events.push(GameEvent::PaddleBounce { angle });
        } else if below_canvas(next.y, state.settings.canvas_height) {
            return TickOutcome::Lost;
        }
    }

    ball.pos += ball.vel;
    TickOutcome::Continue
}

/// Synthesize move/launch flags that keep the paddle under the ball
fn autopilot(state: &GameState, input: &TickInput) -> TickInput {
    let mut input = *input;
    if state.phase == GamePhase::Serve {
        input.launch = true;
    }

    // Aim a little off-center so the ball doesn't loop straight up forever
    let offset = (state.time_ticks as f32 * 0.01).sin() * state.paddle.width * 0.25;
    let target = state.ball.pos.x + offset;
    let center = state.paddle.center_x();
    let dead_zone = state.settings.paddle_step / 2.0;

    input.move_right = center < target - dead_zone;
    input.move_left = center > target + dead_zone;
    input
}
