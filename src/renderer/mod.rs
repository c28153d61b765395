//! Terminal rendering module
//!
//! The scene is rasterized to a character grid, then written with crossterm.

pub mod canvas;
pub mod terminal;

pub use canvas::{Canvas, Cell, rasterize};
pub use terminal::TerminalRenderer;
