use breakout::GameConfig;
use breakout::sim::{GamePhase, GameState, TickOutcome, paddle_bounce_vx, tick};
use breakout::sim::rect::Rect;

use proptest::prelude::*;

const DT: f64 = breakout::consts::TIME_STEP_MS;
const TICKS: usize = 3_000;
const TICKS_PER_POINTER: usize = 40;

/// Play a session with a scripted pointer, restarting after every lost ball
fn play(seed: u64, pointer: &[f64], mut check: impl FnMut(&GameState, &GameState, TickOutcome)) {
    let mut state = GameState::new(GameConfig::default(), seed);
    state.start_session();

    for i in 0..TICKS {
        if !pointer.is_empty() {
            state.on_paddle_input(pointer[(i / TICKS_PER_POINTER) % pointer.len()]);
        }
        let before = state.clone();
        let outcome = tick(&mut state, DT);
        check(&before, &state, outcome);

        match outcome {
            TickOutcome::LifeLost { .. } => {
                state.start_session();
            }
            TickOutcome::Won | TickOutcome::GameOver => break,
            _ => {}
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn ball_stays_between_side_walls(
        seed in any::<u64>(),
        pointer in prop::collection::vec(0.0f64..600.0, 1..30),
    ) {
        play(seed, &pointer, |_, after, outcome| {
            if matches!(outcome, TickOutcome::LifeLost { .. } | TickOutcome::GameOver) {
                return;
            }
            let limit = after.layout.window.x - after.ball.size;
            assert!(after.ball.pos.x >= 0.0, "x = {}", after.ball.pos.x);
            assert!(after.ball.pos.x <= limit, "x = {}", after.ball.pos.x);
        });
    }

    #[test]
    fn score_and_lives_are_monotonic(
        seed in any::<u64>(),
        pointer in prop::collection::vec(0.0f64..600.0, 1..30),
    ) {
        let mut wins = 0;
        let mut game_overs = 0;
        play(seed, &pointer, |before, after, outcome| {
            assert!(after.points >= before.points);
            assert!(after.points - before.points <= 1);
            assert!(after.points <= after.total_bricks());
            assert_eq!(
                after.points as usize,
                after.total_bricks() as usize - after.scene.brick_count()
            );

            assert!(after.lives <= before.lives);
            assert!(before.lives - after.lives <= 1);

            match outcome {
                TickOutcome::Won => {
                    wins += 1;
                    assert_eq!(after.phase, GamePhase::Won);
                }
                TickOutcome::GameOver => {
                    game_overs += 1;
                    assert_eq!(after.lives, 0);
                }
                _ => {}
            }
        });
        prop_assert!(wins <= 1);
        prop_assert!(game_overs <= 1);
        prop_assert!(wins + game_overs <= 1);
    }

    #[test]
    fn paddle_never_leaves_window(pointer_x in -10_000.0f64..10_000.0) {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.on_paddle_input(pointer_x);
        let paddle = state.paddle_rect();
        prop_assert!(paddle.left() >= 0.0);
        prop_assert!(paddle.right() <= state.layout.window.x + 1e-9);
    }

    #[test]
    fn paddle_bounce_has_minimum_speed(
        offset in -1.5f64..1.5,
        width in 20.0f64..200.0,
    ) {
        let paddle = Rect::new(100.0, 600.0, width, 10.0);
        let ball_center_x = paddle.center().x + offset * width / 2.0;
        let vx = paddle_bounce_vx(ball_center_x, &paddle, 8.0, 6.0);
        prop_assert!(vx.abs() >= 6.0);
        if offset.abs() > 0.8 {
            prop_assert!((vx.abs() - offset.abs() * 8.0).abs() < 1e-9);
        }
    }

    #[test]
    fn serve_is_in_range(seed in any::<u64>()) {
        let state = GameState::new(GameConfig::default(), seed);
        let vx = state.ball.vel.x.abs();
        prop_assert!((5.0..=8.0).contains(&vx));
        prop_assert_eq!(state.ball.vel.y, 3.0);
    }
}

#[test]
fn idle_session_ignores_ticks() {
    let mut state = GameState::new(GameConfig::default(), 7);
    for _ in 0..10 {
        assert_eq!(tick(&mut state, DT), TickOutcome::Halted);
    }
    assert_eq!(state.points, 0);
}
