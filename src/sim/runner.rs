//! Session driver
//!
//! Owns the game state and the tick timer. Pointer input is applied
//! synchronously between ticks, and the timer runs only while a session is
//! active: it is armed by the click that starts a session and disarmed by the
//! tick that ends it.

use super::state::GameState;
use super::tick::{TickOutcome, tick};
use crate::consts::MAX_SUBSTEPS;

/// Pointer input delivered by the platform layer, in world coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Click { x: f64, y: f64 },
    Move { x: f64, y: f64 },
}

/// Fixed-interval timer with an accumulator
#[derive(Debug, Clone)]
pub struct TickTimer {
    interval_ms: f64,
    accumulator: f64,
    armed: bool,
}

impl TickTimer {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            accumulator: 0.0,
            armed: false,
        }
    }

    pub fn start(&mut self) {
        self.accumulator = 0.0;
        self.armed = true;
    }

    /// Stop firing and drop any banked time
    pub fn stop(&mut self) {
        self.accumulator = 0.0;
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }
}

/// Game state plus the timer driving it
#[derive(Debug, Clone)]
pub struct Runner {
    pub state: GameState,
    timer: TickTimer,
}

impl Runner {
    pub fn new(state: GameState) -> Self {
        let timer = TickTimer::new(state.config.time_step_ms);
        Self { state, timer }
    }

    pub fn timer(&self) -> &TickTimer {
        &self.timer
    }

    /// Dispatch one pointer event to its handler
    pub fn handle_input(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Click { .. } => {
                self.start();
            }
            PointerEvent::Move { x, .. } => self.state.on_paddle_input(x),
        }
    }

    /// Start a session if the state allows it, arming the timer
    pub fn start(&mut self) -> bool {
        if self.state.start_session() {
            self.timer.start();
            true
        } else {
            false
        }
    }

    /// Run every tick that fits in `elapsed_ms`, up to [`MAX_SUBSTEPS`]
    pub fn advance(&mut self, elapsed_ms: f64) -> Vec<TickOutcome> {
        let mut outcomes = Vec::new();
        if !self.timer.armed {
            return outcomes;
        }

        self.timer.accumulator += elapsed_ms;
        let interval = self.timer.interval_ms;
        let mut substeps = 0;
        while self.timer.accumulator >= interval && substeps < MAX_SUBSTEPS {
            self.timer.accumulator -= interval;
            substeps += 1;

            let outcome = tick(&mut self.state, interval);
            outcomes.push(outcome);
            if outcome.halts() {
                self.timer.stop();
                break;
            }
        }

        // Falling behind: drop the backlog rather than spiral
        if self.timer.accumulator >= interval {
            log::debug!(
                "Dropping {:.1}ms of simulation backlog",
                self.timer.accumulator
            );
            self.timer.accumulator %= interval;
        }

        outcomes
    }
}
