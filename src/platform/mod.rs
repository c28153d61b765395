//! Platform layer
//!
//! Handles the terminal side of input:
//! - Mapping between terminal cells and world coordinates
//! - A reader thread turning crossterm events into game commands

use std::sync::mpsc;
use std::thread;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use glam::DVec2;

use crate::sim::PointerEvent;

/// Terminal grid stretched over the world rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub world: DVec2,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, world: DVec2) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
            world,
        }
    }

    /// World size of one cell
    pub fn cell_size(&self) -> DVec2 {
        self.world / DVec2::new(self.cols as f64, self.rows as f64)
    }

    /// Cell containing a world point (may lie outside the grid)
    pub fn world_to_cell(&self, point: DVec2) -> (i64, i64) {
        let cell = (point / self.cell_size()).floor();
        (cell.x as i64, cell.y as i64)
    }

    /// World coordinates of a cell's center
    pub fn cell_center(&self, col: u16, row: u16) -> DVec2 {
        (DVec2::new(col as f64, row as f64) + DVec2::splat(0.5)) * self.cell_size()
    }
}

/// What the main loop should do with a terminal event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Pointer(PointerEvent),
    Resize { cols: u16, rows: u16 },
    Quit,
}

/// Translate a terminal event into a command, if it means anything to the game
pub fn translate(event: &Event, viewport: &Viewport) -> Option<Command> {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) => {
            if *kind == KeyEventKind::Release {
                return None;
            }
            match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Command::Quit)
                }
                _ => None,
            }
        }
        Event::Mouse(MouseEvent {
            kind, column, row, ..
        }) => {
            let at = viewport.cell_center(*column, *row);
            match kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    Some(Command::Pointer(PointerEvent::Click { x: at.x, y: at.y }))
                }
                MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                    Some(Command::Pointer(PointerEvent::Move { x: at.x, y: at.y }))
                }
                _ => None,
            }
        }
        Event::Resize(cols, rows) => Some(Command::Resize {
            cols: *cols,
            rows: *rows,
        }),
        _ => None,
    }
}

/// Read terminal events on a dedicated thread so the game loop never blocks
pub fn spawn_event_reader() -> mpsc::Receiver<Event> {
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped, game is exiting
                    }
                }
                Err(err) => {
                    log::warn!("Terminal event reader stopped: {err}");
                    break;
                }
            }
        }
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(60, 35, DVec2::new(600.0, 700.0))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_cell_mapping_round_trip() {
        let vp = viewport();
        assert_eq!(vp.cell_size(), DVec2::new(10.0, 20.0));
        assert_eq!(vp.cell_center(0, 0), DVec2::new(5.0, 10.0));
        assert_eq!(vp.world_to_cell(vp.cell_center(12, 7)), (12, 7));
        assert_eq!(vp.world_to_cell(DVec2::new(-1.0, 0.0)), (-1, 0));
    }

    #[test]
    fn test_degenerate_terminal_size() {
        let vp = Viewport::new(0, 0, DVec2::new(600.0, 700.0));
        assert_eq!(vp.cols, 1);
        assert_eq!(vp.rows, 1);
    }

    #[test]
    fn test_mouse_events_become_pointer_commands() {
        let vp = viewport();
        assert_eq!(
            translate(&mouse(MouseEventKind::Moved, 30, 10), &vp),
            Some(Command::Pointer(PointerEvent::Move { x: 305.0, y: 210.0 }))
        );
        assert_eq!(
            translate(&mouse(MouseEventKind::Down(MouseButton::Left), 0, 0), &vp),
            Some(Command::Pointer(PointerEvent::Click { x: 5.0, y: 10.0 }))
        );
        assert_eq!(
            translate(&mouse(MouseEventKind::Down(MouseButton::Right), 0, 0), &vp),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        let vp = viewport();
        let q = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        let c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));
        assert_eq!(translate(&q, &vp), Some(Command::Quit));
        assert_eq!(translate(&ctrl_c, &vp), Some(Command::Quit));
        assert_eq!(translate(&c, &vp), None);
    }

    #[test]
    fn test_resize() {
        assert_eq!(
            translate(&Event::Resize(80, 24), &viewport()),
            Some(Command::Resize { cols: 80, rows: 24 })
        );
    }
}
