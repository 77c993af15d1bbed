//! Terminal Boggle runner (default binary).
//!
//! Loads the lexicon, shakes a board and hands every click or key press to
//! the game session until the player exits. Rendering goes through the
//! framebuffer renderer in the term crate.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::info;

use tui_boggle::cli::Cli;
use tui_boggle::core::{GameConfig, GameSession, GameSnapshot, Lexicon, SimpleRng};
use tui_boggle::input::{map_key, map_mouse, Command, Cursor};
use tui_boggle::logging::{init_logging, LogConfig};
use tui_boggle::term::{hit_test, FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_boggle::types::Selection;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_verbosity(cli.verbose).with_log_file(cli.log_file.clone()))?;

    let lexicon = Lexicon::load(&cli.lexicon)
        .with_context(|| format!("loading lexicon {}", cli.lexicon.display()))?;
    let seed = cli.seed();
    info!(seed, "starting game");
    let session = GameSession::new(lexicon, GameConfig::default(), SimpleRng::new(seed))
        .context("creating game session")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session);

    // Always try to restore terminal state.
    let _ = term.exit();

    let status = result?;
    println!("{status}");
    Ok(())
}

/// Event loop. Returns the final status line.
fn run(term: &mut TerminalRenderer, mut session: GameSession) -> Result<String> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut cursor = Cursor::new(session.grid().rows(), session.grid().cols());

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        let layout = view.render_into(&snap, Viewport::new(w, h), Some(cursor.position()), &mut fb);
        term.draw_swap(&mut fb)?;

        let selection = match event::read()? {
            Event::Key(key) => match map_key(key) {
                Some(Command::Exit) => Selection::Exit,
                Some(Command::Reset) => Selection::Reset,
                Some(Command::Pick) => Selection::GridPick(cursor.position()),
                Some(Command::Move(dir)) => {
                    cursor.move_by(dir);
                    continue;
                }
                None => continue,
            },
            Event::Mouse(mouse) => {
                let Some((x, y)) = map_mouse(mouse) else {
                    continue;
                };
                let selection = hit_test(&layout, x, y);
                if let Selection::GridPick(pos) = selection {
                    cursor.set(pos);
                }
                selection
            }
            Event::Resize(..) => {
                term.invalidate();
                continue;
            }
            _ => continue,
        };

        let transition = session.handle_selection(selection)?;
        if !transition.continue_playing {
            return Ok(session.status_line());
        }
    }
}
