//! Breakout - the classic brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (layout, physics, collisions, session state)
//! - `config`: Tunable game constants, loadable from JSON
//! - `hud`: Score/lives label text and end-of-game banners
//! - `renderer`: Terminal rasterizer for the scene
//! - `platform`: Terminal input pump and coordinate mapping

pub mod config;
pub mod hud;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};

/// Game configuration constants
///
/// These are the defaults for [`GameConfig`]; every size in the layout is
/// derived from them through ratios.
pub mod consts {
    /// Window dimensions
    pub const WINDOW_WIDTH: f64 = 600.0;
    pub const WINDOW_HEIGHT: f64 = 700.0;

    /// Brick grid
    pub const N_ROWS: u32 = 10;
    pub const N_COLS: u32 = 10;
    /// Largest brick grid a config may ask for
    pub const MAX_BRICKS: u32 = 10_000;
    /// Rows sharing one color band
    pub const ROWS_PER_COLOR: u32 = 2;
    pub const BRICK_ASPECT_RATIO: f64 = 4.0;
    pub const BRICK_TO_BALL_RATIO: f64 = 3.0;
    pub const BRICK_TO_PADDLE_RATIO: f64 = 2.0 / 3.0;
    pub const BRICK_SEP: f64 = 4.0;
    pub const TOP_FRACTION: f64 = 0.1;
    pub const BOTTOM_FRACTION: f64 = 0.05;

    /// Paddle is a little wider and a little flatter than the ratio alone gives
    pub const PADDLE_WIDTH_BONUS: f64 = 10.0;
    pub const PADDLE_HEIGHT_TRIM: f64 = 5.0;

    /// Balls per game
    pub const N_BALLS: u32 = 3;

    /// Fixed simulation timestep (milliseconds)
    pub const TIME_STEP_MS: f64 = 10.0;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Ball velocities, in pixels per tick
    pub const INITIAL_Y_VELOCITY: f64 = 3.0;
    pub const MIN_X_VELOCITY: f64 = 5.0;
    pub const MAX_X_VELOCITY: f64 = 8.0;
    /// Floor on horizontal speed after a paddle bounce
    pub const MIN_PADDLE_X_VELOCITY: f64 = 6.0;
}
