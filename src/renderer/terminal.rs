//! Terminal output - all crossterm drawing lives here.

use std::io::Write;

use crossterm::{
    QueueableCommand, cursor,
    style::{self, Print},
    terminal,
};

use super::canvas::Canvas;
use crate::sim::scene::Color;

fn terminal_color(color: Color) -> style::Color {
    match color {
        Color::Red => style::Color::Red,
        Color::Orange => style::Color::DarkYellow,
        Color::Green => style::Color::Green,
        Color::Cyan => style::Color::Cyan,
        Color::Blue => style::Color::Blue,
        Color::White => style::Color::White,
    }
}

/// Draws canvases, skipping rows that did not change since the last frame
#[derive(Debug, Default)]
pub struct TerminalRenderer {
    last: Option<Canvas>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame (after a resize)
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn draw<W: Write>(&mut self, out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
        let full_redraw = match &self.last {
            Some(last) => last.cols != canvas.cols || last.rows != canvas.rows,
            None => true,
        };
        if full_redraw {
            out.queue(terminal::Clear(terminal::ClearType::All))?;
        }

        for row in 0..canvas.rows {
            if !full_redraw && self.row_unchanged(canvas, row) {
                continue;
            }
            out.queue(cursor::MoveTo(0, row))?;
            let mut current: Option<Color> = None;
            for col in 0..canvas.cols {
                match canvas.get(col, row) {
                    Some(cell) => {
                        if current != Some(cell.color) {
                            out.queue(style::SetForegroundColor(terminal_color(cell.color)))?;
                            current = Some(cell.color);
                        }
                        out.queue(Print(cell.glyph))?;
                    }
                    None => {
                        out.queue(Print(' '))?;
                    }
                }
            }
        }

        out.queue(style::ResetColor)?;
        out.queue(cursor::MoveTo(0, canvas.rows.saturating_sub(1)))?;
        out.flush()?;

        self.last = Some(canvas.clone());
        Ok(())
    }

    fn row_unchanged(&self, canvas: &Canvas, row: u16) -> bool {
        self.last
            .as_ref()
            .map(|last| (0..canvas.cols).all(|col| last.get(col, row) == canvas.get(col, row)))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::canvas::Cell;

    fn canvas_with(glyph: char) -> Canvas {
        let mut canvas = Canvas::new(8, 3);
        canvas.put(
            2,
            1,
            Cell {
                glyph,
                color: Color::Cyan,
            },
        );
        canvas
    }

    #[test]
    fn test_draw_emits_glyphs() {
        let mut renderer = TerminalRenderer::new();
        let mut out = Vec::new();
        renderer.draw(&mut out, &canvas_with('#')).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('#'));
    }

    #[test]
    fn test_unchanged_frame_writes_less() {
        let mut renderer = TerminalRenderer::new();
        let mut first = Vec::new();
        renderer.draw(&mut first, &canvas_with('#')).unwrap();
        let mut second = Vec::new();
        renderer.draw(&mut second, &canvas_with('#')).unwrap();
        assert!(second.len() < first.len());
        assert!(!String::from_utf8_lossy(&second).contains('#'));

        let mut third = Vec::new();
        renderer.draw(&mut third, &canvas_with('@')).unwrap();
        assert!(String::from_utf8_lossy(&third).contains('@'));
    }
}
