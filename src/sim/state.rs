//! Game state and session transitions
//!
//! Everything the tick reads or writes lives in [`GameState`]; nothing is
//! global, so a whole session can be driven from a test without a terminal.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::layout::Layout;
use super::rect::Rect;
use super::scene::{Color, Scene, ShapeId, ShapeKind};
use super::tick::TickOutcome;
use crate::config::GameConfig;
use crate::hud::{Banner, Hud};

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a start click; the tick timer is stopped
    Idle,
    /// Tick loop running
    Active,
    /// Every brick cleared (terminal)
    Won,
    /// Out of lives (terminal)
    GameOver,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::GameOver)
    }
}

/// The ball; `pos` is the top-left corner of its bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: DVec2,
    /// Pixels per tick
    pub vel: DVec2,
    /// Diameter
    pub size: f64,
}

impl Ball {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: DVec2::splat(self.size),
        }
    }

    pub fn center(&self) -> DVec2 {
        self.pos + DVec2::splat(self.size / 2.0)
    }
}

/// Fresh serve velocity: random horizontal speed and side, fixed downward speed
pub fn serve_velocity(rng: &mut impl Rng, config: &GameConfig) -> DVec2 {
    let mut vx = rng.random_range(config.min_x_velocity..=config.max_x_velocity);
    if rng.random_bool(0.5) {
        vx = -vx;
    }
    DVec2::new(vx, config.initial_y_velocity)
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub layout: Layout,
    /// Bricks, paddle and HUD labels
    pub scene: Scene,
    pub hud: Hud,
    pub paddle: ShapeId,
    pub ball: Ball,
    pub lives: u32,
    pub points: u32,
    pub phase: GamePhase,
    /// Ticks simulated so far
    pub time_ticks: u64,
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
}

impl GameState {
    /// Lay out a fresh board and serve the first ball
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let layout = Layout::new(&config);
        let mut scene = Scene::new();

        for slot in &layout.bricks {
            scene.add(ShapeKind::Brick, slot.rect, slot.color);
        }
        let paddle = scene.add(ShapeKind::Paddle, layout.initial_paddle(), Color::White);
        let hud = Hud::install(&mut scene, layout.window, config.lives, 0);

        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball {
            pos: layout.ball_home(),
            vel: serve_velocity(&mut rng, &config),
            size: layout.ball_size,
        };

        log::debug!(
            "New board (seed {}): {} bricks, ball {:.2}px, paddle {:.2}x{:.2}",
            seed,
            layout.bricks.len(),
            layout.ball_size,
            layout.paddle_size.x,
            layout.paddle_size.y
        );

        Self {
            lives: config.lives,
            points: 0,
            phase: GamePhase::Idle,
            time_ticks: 0,
            seed,
            config,
            layout,
            scene,
            hud,
            paddle,
            ball,
            rng,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Active
    }

    /// Bricks needed to win
    pub fn total_bricks(&self) -> u32 {
        self.config.brick_count()
    }

    pub fn paddle_rect(&self) -> Rect {
        self.scene
            .get(self.paddle)
            .map(|shape| shape.rect)
            .unwrap_or_else(|| self.layout.initial_paddle())
    }

    /// Start the tick loop. No-op unless idle with lives remaining.
    pub fn start_session(&mut self) -> bool {
        if self.phase != GamePhase::Idle || self.lives == 0 {
            return false;
        }
        self.phase = GamePhase::Active;
        log::info!("Session started ({} lives, {} pts)", self.lives, self.points);
        true
    }

    /// Ball went past the bottom edge
    pub fn on_life_lost(&mut self) -> TickOutcome {
        self.lives = self.lives.saturating_sub(1);
        self.hud.set_lives(&mut self.scene, self.lives);

        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            self.hud.show_banner(&mut self.scene, Banner::GameOver);
            log::info!("Game over with {} pts", self.points);
            TickOutcome::GameOver
        } else {
            self.reset_ball();
            self.phase = GamePhase::Idle;
            log::info!("Ball lost, {} lives left", self.lives);
            TickOutcome::LifeLost { lives: self.lives }
        }
    }

    /// Ball hit a brick: remove it and score
    pub fn on_brick_cleared(&mut self, brick: ShapeId) -> TickOutcome {
        if self.scene.remove(brick).is_none() {
            return TickOutcome::Moved;
        }
        self.points += 1;
        self.hud.set_points(&mut self.scene, self.points);

        if self.points == self.total_bricks() {
            self.phase = GamePhase::Won;
            self.hud.show_banner(&mut self.scene, Banner::Victory);
            log::info!("All {} bricks cleared", self.points);
            TickOutcome::Won
        } else {
            TickOutcome::BrickCleared {
                points: self.points,
            }
        }
    }

    /// Center the paddle under the pointer, kept inside the window
    pub fn on_paddle_input(&mut self, pointer_x: f64) {
        let width = self.paddle_rect().width();
        let mut x = pointer_x - width / 2.0;
        if x < 0.0 {
            x = 0.0;
        }
        if x > self.layout.window.x - width {
            x = self.layout.window.x - width;
        }
        self.scene
            .set_location(self.paddle, DVec2::new(x, self.layout.paddle_y));
    }

    /// Recenter the ball with a fresh serve; the paddle stays put
    pub fn reset_ball(&mut self) {
        self.ball.pos = self.layout.ball_home();
        self.ball.vel = serve_velocity(&mut self.rng, &self.config);
    }
}
