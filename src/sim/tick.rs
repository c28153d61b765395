//! Fixed timestep simulation tick
//!
//! Advances the ball one step, resolves walls, the bottom edge, and at most
//! one collider, and reports what happened.

use super::collision::{Collider, colliding_object, resolve_paddle_hit};
use super::state::GameState;

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Session not active; nothing moved
    Halted,
    /// Ball moved without touching a paddle or brick
    Moved,
    PaddleBounce,
    BrickCleared { points: u32 },
    /// Ball lost with lives to spare; session is idle again
    LifeLost { lives: u32 },
    GameOver,
    Won,
}

impl TickOutcome {
    /// Whether the tick loop must stop after this outcome
    pub fn halts(&self) -> bool {
        matches!(
            self,
            TickOutcome::Halted | TickOutcome::LifeLost { .. } | TickOutcome::GameOver | TickOutcome::Won
        )
    }
}

/// Advance the game by one step of `dt` milliseconds
///
/// Ball velocity is expressed per `config.time_step_ms`; the driver always
/// passes exactly that interval.
pub fn tick(state: &mut GameState, dt: f64) -> TickOutcome {
    if !state.is_running() {
        return TickOutcome::Halted;
    }
    state.time_ticks += 1;

    let window = state.layout.window;
    let steps = dt / state.config.time_step_ms;
    let ball = &mut state.ball;
    let right_limit = window.x - ball.size;

    ball.pos += ball.vel * steps;

    // Side and top walls
    if ball.pos.x <= 0.0 || ball.pos.x >= right_limit {
        ball.vel.x = -ball.vel.x;
    }
    if ball.pos.y <= 0.0 {
        ball.vel.y = -ball.vel.y;
    }

    // No bottom wall: crossing it costs a life
    if ball.pos.y >= window.y - ball.size {
        return state.on_life_lost();
    }

    // Anti-stick: force the ball away from a wall it is still touching
    if ball.pos.x <= 0.0 {
        ball.vel.x = ball.vel.x.abs();
        ball.pos.x = 1.0;
    } else if ball.pos.x >= right_limit {
        ball.vel.x = -ball.vel.x.abs();
        ball.pos.x = right_limit - 1.0;
    }

    match colliding_object(&state.scene, &state.ball) {
        Collider::Paddle => {
            let paddle = state.paddle_rect();
            resolve_paddle_hit(
                &mut state.ball,
                &paddle,
                state.config.max_x_velocity,
                state.config.min_paddle_x_velocity,
            );
            TickOutcome::PaddleBounce
        }
        Collider::Brick(id) => {
            state.ball.vel.y = -state.ball.vel.y;
            state.on_brick_cleared(id)
        }
        Collider::Label | Collider::None => TickOutcome::Moved,
    }
}
