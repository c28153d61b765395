//! Flat scene graph
//!
//! Holds every obstacle the ball can touch (bricks, the paddle) plus the HUD
//! labels, in z-order. The ball itself is not a scene shape: its bounding-box
//! corners are what gets hit-tested.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Label glyph advance as a fraction of the font size
const LABEL_CHAR_WIDTH: f64 = 0.6;
/// Portion of the font size drawn above the baseline
const LABEL_ASCENT: f64 = 0.8;

/// Stable handle to a shape in the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(pub u32);

/// Fill colors used by the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Red,
    Orange,
    Green,
    Cyan,
    Blue,
    White,
}

impl Color {
    /// Brick color bands, top to bottom
    pub const BANDS: [Color; 5] = [
        Color::Red,
        Color::Orange,
        Color::Green,
        Color::Cyan,
        Color::Blue,
    ];
}

/// What a shape is, as far as collisions care
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeKind {
    Brick,
    Paddle,
    /// Text overlay; never affects physics
    Label { text: String, font_size: f64 },
}

/// A drawable shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub rect: Rect,
    pub color: Color,
}

impl Shape {
    pub fn is_label(&self) -> bool {
        matches!(self.kind, ShapeKind::Label { .. })
    }

    /// Label baseline (bottom-left of the text, excluding descenders)
    pub fn baseline(&self) -> DVec2 {
        match &self.kind {
            ShapeKind::Label { font_size, .. } => {
                DVec2::new(self.rect.left(), self.rect.top() + font_size * LABEL_ASCENT)
            }
            _ => DVec2::new(self.rect.left(), self.rect.bottom()),
        }
    }
}

/// Bounding box of a text label whose baseline starts at `baseline`
pub fn label_bounds(text: &str, baseline: DVec2, font_size: f64) -> Rect {
    let width = text.chars().count() as f64 * font_size * LABEL_CHAR_WIDTH;
    Rect::new(
        baseline.x,
        baseline.y - font_size * LABEL_ASCENT,
        width,
        font_size,
    )
}

/// All shapes on screen, bottom-most first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    shapes: Vec<Shape>,
    next_id: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape on top of everything already in the scene
    pub fn add(&mut self, kind: ShapeKind, rect: Rect, color: Color) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.shapes.push(Shape {
            id,
            kind,
            rect,
            color,
        });
        id
    }

    /// Add a text label with its baseline at `baseline`
    pub fn add_label(
        &mut self,
        text: impl Into<String>,
        baseline: DVec2,
        font_size: f64,
        color: Color,
    ) -> ShapeId {
        let text = text.into();
        let rect = label_bounds(&text, baseline, font_size);
        self.add(ShapeKind::Label { text, font_size }, rect, color)
    }

    /// Remove a shape, returning it if it was present
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.id == id)?;
        Some(self.shapes.remove(index))
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.get(id).is_some()
    }

    /// Move a shape's top-left corner; returns false for unknown ids
    pub fn set_location(&mut self, id: ShapeId, pos: DVec2) -> bool {
        match self.shapes.iter_mut().find(|s| s.id == id) {
            Some(shape) => {
                shape.rect.pos = pos;
                true
            }
            None => false,
        }
    }

    /// Resize a shape in place, keeping its top-left corner
    pub fn set_size(&mut self, id: ShapeId, size: DVec2) -> bool {
        match self.shapes.iter_mut().find(|s| s.id == id) {
            Some(shape) => {
                shape.rect.size = size;
                true
            }
            None => false,
        }
    }

    /// Replace a label's text, keeping its baseline
    pub fn set_label(&mut self, id: ShapeId, new_text: impl Into<String>) -> bool {
        let Some(shape) = self.shapes.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        let baseline = shape.baseline();
        if let ShapeKind::Label { text, font_size } = &mut shape.kind {
            *text = new_text.into();
            shape.rect = label_bounds(text, baseline, *font_size);
            true
        } else {
            false
        }
    }

    /// Topmost shape covering `point`, if any
    pub fn hit_test(&self, point: DVec2) -> Option<&Shape> {
        self.shapes
            .iter()
            .rev()
            .find(|s| s.rect.contains_point(point))
    }

    /// Shapes in draw order (bottom-most first)
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn bricks(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(|s| s.kind == ShapeKind::Brick)
    }

    pub fn brick_count(&self) -> usize {
        self.bricks().count()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
