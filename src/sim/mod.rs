//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable scene order (z-order = insertion order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod layout;
pub mod rect;
pub mod runner;
pub mod scene;
pub mod state;
pub mod tick;

pub use collision::{Collider, colliding_object, paddle_bounce_vx};
pub use layout::{BrickSlot, Layout};
pub use rect::Rect;
pub use runner::{PointerEvent, Runner, TickTimer};
pub use scene::{Color, Scene, Shape, ShapeId, ShapeKind};
pub use state::{Ball, GamePhase, GameState};
pub use tick::{TickOutcome, tick};
