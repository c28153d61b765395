//! Collision detection and response
//!
//! The ball is hit-tested by sampling the four corners of its bounding box
//! against the scene. This is cheap and matches the classic feel, but a fast
//! ball can slip through a thin overlap that none of the corners lands in.

use glam::DVec2;

use super::rect::Rect;
use super::scene::{Scene, ShapeId, ShapeKind};
use super::state::Ball;

/// What the ball touched this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collider {
    Paddle,
    Brick(ShapeId),
    /// Only HUD text was touched
    Label,
    None,
}

/// Resolve the collider for a ball
///
/// Corners are tried in order top-left, top-right, bottom-left, bottom-right;
/// the first corner landing on a brick or the paddle wins. Labels never block
/// a corner.
pub fn colliding_object(scene: &Scene, ball: &Ball) -> Collider {
    let mut touched_label = false;

    for corner in ball.rect().corners() {
        let Some(shape) = scene.hit_test(corner) else {
            continue;
        };
        match shape.kind {
            ShapeKind::Paddle => return Collider::Paddle,
            ShapeKind::Brick => return Collider::Brick(shape.id),
            ShapeKind::Label { .. } => {
                // The label may be covering a brick at this point
                if let Some(below) = scene
                    .shapes()
                    .filter(|s| !s.is_label() && s.rect.contains_point(corner))
                    .last()
                {
                    return match below.kind {
                        ShapeKind::Paddle => Collider::Paddle,
                        _ => Collider::Brick(below.id),
                    };
                }
                touched_label = true;
            }
        }
    }

    if touched_label {
        Collider::Label
    } else {
        Collider::None
    }
}

/// Where along the paddle the ball struck: 0 at the center, ±1 at the edges
///
/// Not clamped; a ball overlapping past an edge gives a magnitude above 1.
pub fn hit_offset(ball_center_x: f64, paddle: &Rect) -> f64 {
    let half_width = paddle.width() / 2.0;
    (ball_center_x - paddle.center().x) / half_width
}

/// Horizontal velocity after a paddle bounce
///
/// Center hits go near-vertical, edge hits near-horizontal. The result never
/// drops below `min_vx` in magnitude so the ball cannot stall vertically.
pub fn paddle_bounce_vx(ball_center_x: f64, paddle: &Rect, max_vx: f64, min_vx: f64) -> f64 {
    let vx = hit_offset(ball_center_x, paddle) * max_vx;
    if vx.abs() < min_vx {
        if vx < 0.0 { -min_vx } else { min_vx }
    } else {
        vx
    }
}

/// Bounce the ball off the paddle and lift it onto the paddle's top edge
pub fn resolve_paddle_hit(ball: &mut Ball, paddle: &Rect, max_vx: f64, min_vx: f64) {
    ball.vel.y = -ball.vel.y;
    ball.vel.x = paddle_bounce_vx(ball.center().x, paddle, max_vx, min_vx);
    ball.pos = DVec2::new(ball.pos.x, paddle.top() - ball.size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::scene::Color;

    fn ball_at(x: f64, y: f64) -> Ball {
        Ball {
            pos: DVec2::new(x, y),
            vel: DVec2::new(0.0, 3.0),
            size: 10.0,
        }
    }

    #[test]
    fn test_no_collider_in_empty_space() {
        let scene = Scene::new();
        assert_eq!(colliding_object(&scene, &ball_at(50.0, 50.0)), Collider::None);
    }

    #[test]
    fn test_first_corner_wins() {
        let mut scene = Scene::new();
        // Top-left corner lands in `left`, top-right in `right`
        let left = scene.add(ShapeKind::Brick, Rect::new(0.0, 0.0, 15.0, 15.0), Color::Red);
        let _right = scene.add(ShapeKind::Brick, Rect::new(16.0, 0.0, 15.0, 15.0), Color::Red);

        assert_eq!(
            colliding_object(&scene, &ball_at(10.0, 5.0)),
            Collider::Brick(left)
        );
    }

    #[test]
    fn test_bottom_corners_find_paddle() {
        let mut scene = Scene::new();
        scene.add(ShapeKind::Paddle, Rect::new(0.0, 100.0, 60.0, 10.0), Color::White);
        assert_eq!(colliding_object(&scene, &ball_at(20.0, 92.0)), Collider::Paddle);
    }

    #[test]
    fn test_label_alone_is_reported_but_inert() {
        let mut scene = Scene::new();
        scene.add_label("3 lives left", DVec2::new(20.0, 30.0), 20.0, Color::White);
        assert_eq!(colliding_object(&scene, &ball_at(25.0, 20.0)), Collider::Label);
    }

    #[test]
    fn test_label_does_not_hide_brick() {
        let mut scene = Scene::new();
        let brick = scene.add(ShapeKind::Brick, Rect::new(0.0, 0.0, 100.0, 40.0), Color::Red);
        scene.add_label("0 pts", DVec2::new(0.0, 30.0), 20.0, Color::White);
        assert_eq!(
            colliding_object(&scene, &ball_at(5.0, 15.0)),
            Collider::Brick(brick)
        );
    }

    #[test]
    fn test_later_corner_skips_label() {
        let mut scene = Scene::new();
        scene.add_label("x", DVec2::new(0.0, 10.0), 20.0, Color::White);
        let brick = scene.add(ShapeKind::Brick, Rect::new(0.0, 20.0, 100.0, 10.0), Color::Red);
        // Label covers the top corners' area at x in [0, 12]; bottom-left lands on the brick
        assert_eq!(
            colliding_object(&scene, &ball_at(2.0, 12.0)),
            Collider::Brick(brick)
        );
    }

    #[test]
    fn test_hit_offset_range() {
        let paddle = Rect::new(240.0, 600.0, 60.0, 10.0);
        assert_eq!(hit_offset(270.0, &paddle), 0.0);
        assert_eq!(hit_offset(300.0, &paddle), 1.0);
        assert_eq!(hit_offset(240.0, &paddle), -1.0);
        assert!(hit_offset(310.0, &paddle) > 1.0);
    }

    #[test]
    fn test_bounce_velocity_law() {
        let paddle = Rect::new(240.0, 600.0, 60.0, 10.0);
        // Center: raw 0 lifted to the floor
        assert_eq!(paddle_bounce_vx(270.0, &paddle, 8.0, 6.0), 6.0);
        // Slightly left of center keeps its sign
        assert_eq!(paddle_bounce_vx(265.0, &paddle, 8.0, 6.0), -6.0);
        // Extreme edges reach full speed
        assert!((paddle_bounce_vx(300.0, &paddle, 8.0, 6.0) - 8.0).abs() < 1e-12);
        assert!((paddle_bounce_vx(240.0, &paddle, 8.0, 6.0) + 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_resolve_paddle_hit_lifts_ball() {
        let paddle = Rect::new(240.0, 600.0, 60.0, 10.0);
        let mut ball = ball_at(265.0, 595.0);
        resolve_paddle_hit(&mut ball, &paddle, 8.0, 6.0);
        assert_eq!(ball.vel.y, -3.0);
        assert_eq!(ball.vel.x, 6.0);
        assert_eq!(ball.pos.y, 590.0);
        assert_eq!(ball.pos.x, 265.0);
    }
}
