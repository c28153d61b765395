//! Demo mode - the paddle plays itself
//!
//! Tracks the ball with a small, slowly oscillating offset so rallies vary
//! instead of settling into a fixed loop.

use super::runner::{PointerEvent, Runner};
use super::state::{GamePhase, GameState};

/// Pointer x the autopilot would move to this frame
pub fn target_pointer_x(state: &GameState) -> f64 {
    let half_paddle = state.paddle_rect().width() / 2.0;
    let time_factor = state.time_ticks as f64 * 0.01;
    let offset = (time_factor.sin() * 0.3 + (time_factor * 0.7).sin() * 0.15) * half_paddle;

    // Lead the ball slightly when it is heading down toward the paddle
    let lead = if state.ball.vel.y > 0.0 {
        state.ball.vel.x * 2.0
    } else {
        0.0
    };

    state.ball.center().x + lead + offset
}

/// Feed the runner one frame of autopilot input
pub fn drive(runner: &mut Runner) {
    let x = target_pointer_x(&runner.state);
    let y = runner.state.layout.paddle_y;
    runner.handle_input(PointerEvent::Move { x, y });

    if runner.state.phase == GamePhase::Idle {
        runner.handle_input(PointerEvent::Click { x, y });
    }
}
