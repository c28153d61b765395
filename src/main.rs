//! Breakout entry point
//!
//! Sets up the terminal, then runs the frame loop: drain pointer input,
//! advance the tick timer, draw.

use std::io::{BufWriter, Write, stdout};
use std::sync::mpsc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    ExecutableCommand, cursor,
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    terminal,
};

use breakout::GameConfig;
use breakout::platform::{self, Command, Viewport};
use breakout::renderer::{TerminalRenderer, rasterize};
use breakout::sim::{GameState, Runner, TickOutcome, autopilot};

const FRAME: Duration = Duration::from_millis(16);

/// Process options, read from the environment
struct Options {
    config: GameConfig,
    seed: u64,
    demo: bool,
}

impl Options {
    fn from_env() -> Self {
        let config = match std::env::var("BREAKOUT_CONFIG") {
            Ok(path) => GameConfig::load(&path).unwrap_or_else(|err| {
                log::warn!("{err}; using default config");
                GameConfig::default()
            }),
            Err(_) => GameConfig::default(),
        };

        let seed = std::env::var("BREAKOUT_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(|| {
                SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_nanos() as u64)
                    .unwrap_or(0)
            });

        let demo = std::env::var("BREAKOUT_DEMO")
            .map(|v| matches!(v.trim(), "1" | "true"))
            .unwrap_or(false);

        Self { config, seed, demo }
    }
}

fn main() -> std::io::Result<()> {
    env_logger::init();
    let options = Options::from_env();
    log::info!(
        "Breakout starting (seed {}, demo {})",
        options.seed,
        options.demo
    );

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(EnableMouseCapture)?;
    out.execute(cursor::Hide)?;

    let rx = platform::spawn_event_reader();
    let result = run(&mut out, &rx, options);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>, options: Options) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let state = GameState::new(options.config, options.seed);
    let mut viewport = Viewport::new(cols, rows, state.layout.window);
    let mut runner = Runner::new(state);
    let mut renderer = TerminalRenderer::new();
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();

        while let Ok(event) = rx.try_recv() {
            match platform::translate(&event, &viewport) {
                Some(Command::Quit) => return Ok(()),
                Some(Command::Resize { cols, rows }) => {
                    viewport = Viewport::new(cols, rows, runner.state.layout.window);
                    renderer.invalidate();
                }
                Some(Command::Pointer(pointer)) if !options.demo => runner.handle_input(pointer),
                _ => {}
            }
        }

        if options.demo {
            autopilot::drive(&mut runner);
        }

        let elapsed_ms = last.elapsed().as_secs_f64() * 1000.0;
        last = Instant::now();
        for outcome in runner.advance(elapsed_ms) {
            match outcome {
                TickOutcome::BrickCleared { points } => log::debug!("Brick cleared ({points} pts)"),
                TickOutcome::Won | TickOutcome::GameOver => {
                    log::info!("Session over: {outcome:?}")
                }
                _ => {}
            }
        }

        renderer.draw(out, &rasterize(&runner.state, &viewport))?;

        let spent = frame_start.elapsed();
        if spent < FRAME {
            std::thread::sleep(FRAME - spent);
        }
    }
}
