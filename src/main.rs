//! Terminal darts scorer (default binary).
//!
//! Keys go through the keypad accumulator into the session; every frame is
//! rendered from the engine snapshot into a framebuffer and diffed to the
//! terminal.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_darts::core::{DartsEngine, GameConfig};
use tui_darts::input::{handle_key_event, should_quit};
use tui_darts::term::{DartsView, FrameBuffer, Scene, TerminalRenderer, Viewport};
use tui_darts::types::{DEFAULT_MAX_ROUNDS, DEFAULT_START_SCORE};
use tui_darts::Session;

const POLL_MS: u64 = 250;

#[derive(Debug, Parser)]
#[command(name = "tui-darts")]
#[command(about = "Terminal darts scorer for 01 and Cricket", long_about = None)]
struct Args {
    /// Game type: 01 or cricket
    #[arg(short, long, default_value = "01")]
    game: String,

    /// 01 start score (301, 501, 701, 901, 1101 or 1501)
    #[arg(short, long, default_value_t = DEFAULT_START_SCORE)]
    start_score: u32,

    /// Round limit
    #[arg(short, long, default_value_t = DEFAULT_MAX_ROUNDS)]
    max_rounds: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = GameConfig::parse(&args.game, args.start_score, args.max_rounds)?;
    let mut session = Session::from_env(config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();

    for notice in session.take_notices() {
        eprintln!("{}", notice);
    }
    for summary in session.history() {
        eprintln!(
            "[Session] {}: {} ({} rounds, avg {:.1}, {})",
            summary.game,
            summary.score,
            summary.rounds,
            summary.average,
            summary.status.as_str()
        );
    }
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = DartsView::new();
    let title = session.engine().config().title();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let snapshot = session.snapshot();
        let prompt = session.pad().prompt();
        let scene = Scene {
            title: &title,
            snapshot: &snapshot,
            round_log: session.engine().round_log(),
            prompt: Some(&prompt),
        };
        view.render_into(&scene, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        if !event::poll(Duration::from_millis(POLL_MS))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(pad_key) = handle_key_event(key) {
                    session.press(pad_key);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
