//! Scene rasterization onto a character grid

use crate::platform::Viewport;
use crate::sim::rect::Rect;
use crate::sim::scene::{Color, ShapeKind};
use crate::sim::state::GameState;

pub const BLOCK_GLYPH: char = '█';
pub const PADDLE_GLYPH: char = '▀';
pub const BALL_GLYPH: char = '●';

/// One terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub color: Color,
}

/// A frame worth of cells, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pub cols: u16,
    pub rows: u16,
    cells: Vec<Option<Cell>>,
}

impl Canvas {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![None; cols as usize * rows as usize],
        }
    }

    pub fn get(&self, col: u16, row: u16) -> Option<Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells[row as usize * self.cols as usize + col as usize]
    }

    /// Write a cell; coordinates off the grid are ignored
    pub fn put(&mut self, col: i64, row: i64, cell: Cell) {
        if col < 0 || row < 0 || col >= self.cols as i64 || row >= self.rows as i64 {
            return;
        }
        self.cells[row as usize * self.cols as usize + col as usize] = Some(cell);
    }

    /// Fill every cell the rectangle overlaps (at least one)
    pub fn fill_rect(&mut self, viewport: &Viewport, rect: &Rect, cell: Cell) {
        let cell_size = viewport.cell_size();
        let col0 = (rect.left() / cell_size.x).floor() as i64;
        let row0 = (rect.top() / cell_size.y).floor() as i64;
        let col1 = ((rect.right() / cell_size.x).ceil() as i64 - 1).max(col0);
        let row1 = ((rect.bottom() / cell_size.y).ceil() as i64 - 1).max(row0);
        for row in row0..=row1 {
            for col in col0..=col1 {
                self.put(col, row, cell);
            }
        }
    }

    /// Write text left to right starting at a cell
    pub fn print(&mut self, col: i64, row: i64, text: &str, color: Color) {
        for (i, glyph) in text.chars().enumerate() {
            self.put(col + i as i64, row, Cell { glyph, color });
        }
    }

    /// Row as a plain string, blanks for empty cells
    pub fn row_text(&self, row: u16) -> String {
        (0..self.cols)
            .map(|col| self.get(col, row).map(|c| c.glyph).unwrap_or(' '))
            .collect()
    }
}

/// Draw bricks and paddle, then the ball, then HUD text on top
pub fn rasterize(state: &GameState, viewport: &Viewport) -> Canvas {
    let mut canvas = Canvas::new(viewport.cols, viewport.rows);

    for shape in state.scene.shapes() {
        let glyph = match shape.kind {
            ShapeKind::Brick => BLOCK_GLYPH,
            ShapeKind::Paddle => PADDLE_GLYPH,
            ShapeKind::Label { .. } => continue,
        };
        canvas.fill_rect(
            viewport,
            &shape.rect,
            Cell {
                glyph,
                color: shape.color,
            },
        );
    }

    let (col, row) = viewport.world_to_cell(state.ball.center());
    canvas.put(
        col,
        row,
        Cell {
            glyph: BALL_GLYPH,
            color: Color::White,
        },
    );

    for shape in state.scene.shapes() {
        if let ShapeKind::Label { text, .. } = &shape.kind {
            let (col, _) = viewport.world_to_cell(shape.rect.pos);
            let (_, row) = viewport.world_to_cell(shape.rect.center());
            canvas.print(col.max(0), row.max(0), text, shape.color);
        }
    }

    canvas
}
