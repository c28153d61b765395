//! Board layout
//!
//! Pure arithmetic over [`GameConfig`]: brick grid, paddle and ball geometry.
//! Only ratios drive the dependent sizes, so any window size yields a
//! consistent board.

use glam::DVec2;

use super::rect::Rect;
use super::scene::Color;
use crate::config::GameConfig;

/// One brick slot in the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickSlot {
    pub row: u32,
    pub col: u32,
    pub rect: Rect,
    pub color: Color,
}

/// Derived geometry for a board
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub window: DVec2,
    pub brick_size: DVec2,
    pub paddle_size: DVec2,
    /// Fixed top edge of the paddle
    pub paddle_y: f64,
    pub ball_size: f64,
    /// x of the first brick column
    pub grid_left: f64,
    /// y of the first brick row
    pub grid_top: f64,
    pub bricks: Vec<BrickSlot>,
}

impl Layout {
    pub fn new(config: &GameConfig) -> Self {
        let cols = config.cols as f64;
        let sep = config.brick_sep;
        let window = DVec2::new(config.window_width, config.window_height);

        // cols bricks plus cols + 1 gaps span the window exactly
        let brick_width = (window.x - (cols + 1.0) * sep) / cols;
        let brick_height = brick_width / config.brick_aspect_ratio;

        let paddle_width = brick_width / config.brick_to_paddle_ratio + config.paddle_width_bonus;
        let paddle_height = brick_height / config.brick_to_paddle_ratio - config.paddle_height_trim;
        let paddle_y = (1.0 - config.bottom_fraction) * window.y - paddle_height;

        let ball_size = brick_width / config.brick_to_ball_ratio;

        let grid_left = (window.x - (cols * brick_width + (cols - 1.0) * sep)) / 2.0;
        let grid_top = config.top_fraction * window.y;

        let mut bricks = Vec::with_capacity(config.brick_count() as usize);
        for row in 0..config.rows {
            let band = (row / config.rows_per_color) as usize % Color::BANDS.len();
            let y = grid_top + row as f64 * (brick_height + sep);
            for col in 0..config.cols {
                let x = grid_left + col as f64 * (brick_width + sep);
                bricks.push(BrickSlot {
                    row,
                    col,
                    rect: Rect::new(x, y, brick_width, brick_height),
                    color: Color::BANDS[band],
                });
            }
        }

        Self {
            window,
            brick_size: DVec2::new(brick_width, brick_height),
            paddle_size: DVec2::new(paddle_width, paddle_height),
            paddle_y,
            ball_size,
            grid_left,
            grid_top,
            bricks,
        }
    }

    /// Paddle rectangle centered horizontally
    pub fn initial_paddle(&self) -> Rect {
        Rect::new(
            (self.window.x - self.paddle_size.x) / 2.0,
            self.paddle_y,
            self.paddle_size.x,
            self.paddle_size.y,
        )
    }

    /// Ball top-left corner when centered in the window
    pub fn ball_home(&self) -> DVec2 {
        (self.window - DVec2::splat(self.ball_size)) / 2.0
    }
}
