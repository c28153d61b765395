//! Game configuration
//!
//! Every constant the layout and physics read lives here. Defaults reproduce
//! the classic 600x700 board; a JSON file can override any subset of fields.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable game constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Window ===
    pub window_width: f64,
    pub window_height: f64,

    // === Brick grid ===
    pub rows: u32,
    pub cols: u32,
    /// Consecutive rows sharing one color
    pub rows_per_color: u32,
    /// Brick width / brick height
    pub brick_aspect_ratio: f64,
    /// Brick width / ball size
    pub brick_to_ball_ratio: f64,
    /// Brick size / paddle size (applies to both axes)
    pub brick_to_paddle_ratio: f64,
    /// Gap between bricks and between the grid and the side walls
    pub brick_sep: f64,
    /// Fraction of the window height above the first brick row
    pub top_fraction: f64,
    /// Fraction of the window height below the paddle
    pub bottom_fraction: f64,

    // === Paddle ===
    pub paddle_width_bonus: f64,
    pub paddle_height_trim: f64,

    // === Session ===
    pub lives: u32,

    // === Physics ===
    /// Tick interval in milliseconds; velocities are expressed per tick
    pub time_step_ms: f64,
    pub initial_y_velocity: f64,
    /// Serve speed range (horizontal)
    pub min_x_velocity: f64,
    pub max_x_velocity: f64,
    /// Minimum horizontal speed after a paddle bounce
    pub min_paddle_x_velocity: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,

            rows: N_ROWS,
            cols: N_COLS,
            rows_per_color: ROWS_PER_COLOR,
            brick_aspect_ratio: BRICK_ASPECT_RATIO,
            brick_to_ball_ratio: BRICK_TO_BALL_RATIO,
            brick_to_paddle_ratio: BRICK_TO_PADDLE_RATIO,
            brick_sep: BRICK_SEP,
            top_fraction: TOP_FRACTION,
            bottom_fraction: BOTTOM_FRACTION,

            paddle_width_bonus: PADDLE_WIDTH_BONUS,
            paddle_height_trim: PADDLE_HEIGHT_TRIM,

            lives: N_BALLS,

            time_step_ms: TIME_STEP_MS,
            initial_y_velocity: INITIAL_Y_VELOCITY,
            min_x_velocity: MIN_X_VELOCITY,
            max_x_velocity: MAX_X_VELOCITY,
            min_paddle_x_velocity: MIN_PADDLE_X_VELOCITY,
        }
    }
}

impl GameConfig {
    /// Total number of bricks on a fresh board
    pub fn brick_count(&self) -> u32 {
        self.rows * self.cols
    }

    /// Parse a (possibly partial) JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Reject values that would make the board meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.window_width > 0.0) {
            return Err(ConfigError::invalid("window_width", "must be positive"));
        }
        if !(self.window_height > 0.0) {
            return Err(ConfigError::invalid("window_height", "must be positive"));
        }
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::invalid("rows/cols", "brick grid cannot be empty"));
        }
        match self.rows.checked_mul(self.cols) {
            Some(bricks) if bricks <= MAX_BRICKS => {}
            _ => return Err(ConfigError::invalid("rows/cols", "brick grid is too large")),
        }
        if self.lives == 0 {
            return Err(ConfigError::invalid("lives", "must be at least 1"));
        }
        if self.rows_per_color == 0 {
            return Err(ConfigError::invalid("rows_per_color", "must be at least 1"));
        }
        if !(self.time_step_ms > 0.0) {
            return Err(ConfigError::invalid("time_step_ms", "must be positive"));
        }
        if self.min_x_velocity > self.max_x_velocity {
            return Err(ConfigError::invalid(
                "min_x_velocity",
                "must not exceed max_x_velocity",
            ));
        }
        Ok(())
    }
}

/// Failure to obtain a usable [`GameConfig`]
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::Invalid { field, reason }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(err) => write!(f, "failed to parse config: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid config field `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}
