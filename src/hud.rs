//! Heads-up display
//!
//! Lives and points counters plus the end-of-game banners. All of them are
//! label shapes in the scene, so the ball can pass over them without effect.

use glam::DVec2;

use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::sim::scene::{Color, Scene, ShapeId};

pub const HUD_FONT_SIZE: f64 = 20.0;
pub const BANNER_FONT_SIZE: f64 = 24.0;

/// Anchors on the classic 600x700 board, rescaled for other window sizes
const LIVES_ANCHOR: DVec2 = DVec2::new(20.0, 30.0);
const POINTS_ANCHOR: DVec2 = DVec2::new(525.0, 30.0);
const VICTORY_ANCHOR: DVec2 = DVec2::new(150.0, 300.0);
const GAME_OVER_ANCHOR: DVec2 = DVec2::new(50.0, 350.0);

pub const VICTORY_TEXT: &str = "Congratulations! You Win!";
pub const GAME_OVER_TEXT: &str = "Game Over! Restart the game to try again";

/// End-of-game banner kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Victory,
    GameOver,
}

impl Banner {
    pub fn text(&self) -> &'static str {
        match self {
            Banner::Victory => VICTORY_TEXT,
            Banner::GameOver => GAME_OVER_TEXT,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Banner::Victory => Color::Green,
            Banner::GameOver => Color::Red,
        }
    }

    fn anchor(&self) -> DVec2 {
        match self {
            Banner::Victory => VICTORY_ANCHOR,
            Banner::GameOver => GAME_OVER_ANCHOR,
        }
    }
}

pub fn lives_text(lives: u32) -> String {
    if lives == 1 {
        format!("{lives} life left")
    } else {
        format!("{lives} lives left")
    }
}

pub fn points_text(points: u32) -> String {
    format!("{points} pts")
}

fn scaled(anchor: DVec2, window: DVec2) -> DVec2 {
    anchor * window / DVec2::new(WINDOW_WIDTH, WINDOW_HEIGHT)
}

/// Scene handles for the HUD labels
#[derive(Debug, Clone)]
pub struct Hud {
    pub lives_label: ShapeId,
    pub points_label: ShapeId,
    pub banner: Option<(Banner, ShapeId)>,
    window: DVec2,
}

impl Hud {
    /// Add the lives and points labels on top of the scene
    pub fn install(scene: &mut Scene, window: DVec2, lives: u32, points: u32) -> Self {
        let lives_label = scene.add_label(
            lives_text(lives),
            scaled(LIVES_ANCHOR, window),
            HUD_FONT_SIZE,
            Color::White,
        );
        let points_label = scene.add_label(
            points_text(points),
            scaled(POINTS_ANCHOR, window),
            HUD_FONT_SIZE,
            Color::White,
        );
        Self {
            lives_label,
            points_label,
            banner: None,
            window,
        }
    }

    pub fn set_lives(&self, scene: &mut Scene, lives: u32) {
        scene.set_label(self.lives_label, lives_text(lives));
    }

    pub fn set_points(&self, scene: &mut Scene, points: u32) {
        scene.set_label(self.points_label, points_text(points));
    }

    /// Show an end-of-game banner; only the first one sticks
    pub fn show_banner(&mut self, scene: &mut Scene, banner: Banner) {
        if self.banner.is_some() {
            return;
        }
        let id = scene.add_label(
            banner.text(),
            scaled(banner.anchor(), self.window),
            BANNER_FONT_SIZE,
            banner.color(),
        );
        self.banner = Some((banner, id));
    }

    pub fn banner(&self) -> Option<Banner> {
        self.banner.map(|(banner, _)| banner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::scene::ShapeKind;

    fn label_text(scene: &Scene, id: ShapeId) -> String {
        match &scene.get(id).unwrap().kind {
            ShapeKind::Label { text, .. } => text.clone(),
            other => panic!("not a label: {other:?}"),
        }
    }

    #[test]
    fn test_lives_text_singular() {
        assert_eq!(lives_text(3), "3 lives left");
        assert_eq!(lives_text(1), "1 life left");
        assert_eq!(lives_text(0), "0 lives left");
        assert_eq!(points_text(42), "42 pts");
    }

    #[test]
    fn test_install_and_update() {
        let mut scene = Scene::new();
        let hud = Hud::install(&mut scene, DVec2::new(600.0, 700.0), 3, 0);
        assert_eq!(label_text(&scene, hud.lives_label), "3 lives left");
        assert_eq!(label_text(&scene, hud.points_label), "0 pts");

        hud.set_lives(&mut scene, 1);
        hud.set_points(&mut scene, 7);
        assert_eq!(label_text(&scene, hud.lives_label), "1 life left");
        assert_eq!(label_text(&scene, hud.points_label), "7 pts");
    }

    #[test]
    fn test_banner_shown_once() {
        let mut scene = Scene::new();
        let mut hud = Hud::install(&mut scene, DVec2::new(600.0, 700.0), 3, 0);
        hud.show_banner(&mut scene, Banner::Victory);
        hud.show_banner(&mut scene, Banner::GameOver);

        assert_eq!(hud.banner(), Some(Banner::Victory));
        assert_eq!(scene.len(), 3);
    }

    #[test]
    fn test_anchors_scale_with_window() {
        let mut scene = Scene::new();
        let hud = Hud::install(&mut scene, DVec2::new(1200.0, 1400.0), 3, 0);
        let baseline = scene.get(hud.points_label).unwrap().baseline();
        assert!((baseline.x - 1050.0).abs() < 1e-9);
        assert!((baseline.y - 60.0).abs() < 1e-9);
    }
}
