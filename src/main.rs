use std::io::{stdout, BufWriter, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};
use log::info;

use platformer::compute::{init_game, restart, start_game, tick};
use platformer::config::Config;
use platformer::display::{self, Viewport};
use platformer::entities::GameState;
use platformer::input::{command_for, release_reporting, Command, HeldKeys};

const TITLE: &str = "2D Platformer";

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until Quit/Close. Each tick: drain pending events in arrival order,
/// advance the simulation once if playing, redraw, sleep to the next tick.
fn game_loop<W: Write>(out: &mut W, cfg: &Config) -> Result<()> {
    let frame_time = cfg.frame_duration();
    let mut game = init_game(cfg);
    let mut keys = HeldKeys::default();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            keys.record(&key, frame);
            match command_for(&key) {
                Some(Command::Quit) | Some(Command::Close) => {
                    info!("quit requested");
                    return Ok(());
                }
                Some(Command::Confirm) => game = start_game(&game),
                Some(Command::Restart) => game = restart(&game, cfg),
                None => {}
            }
        }

        if game.state == GameState::Playing {
            game = tick(&game, &keys.tick_input(frame), cfg);
        }

        let (cols, rows) = terminal::size()?;
        display::render(out, &game, Viewport::new(cols, rows), cfg)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            std::thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    info!("{} starting", TITLE);

    let cfg = Config::default();
    let mut out = BufWriter::new(stdout());

    let result = enter_terminal(&mut out).and_then(|keyboard_enhanced| {
        let result = game_loop(&mut out, &cfg);
        if keyboard_enhanced {
            let _ = out.execute(PopKeyboardEnhancementFlags);
        }
        result
    });

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("{} exiting", TITLE);
    result
}

/// Take over the terminal. Returns whether key-release reporting was granted.
fn enter_terminal<W: Write>(out: &mut W) -> Result<bool> {
    terminal::enable_raw_mode().context("failed to enable raw terminal mode")?;
    out.execute(terminal::EnterAlternateScreen)
        .context("failed to enter the alternate screen")?;
    out.execute(cursor::Hide).context("failed to hide the cursor")?;
    out.execute(terminal::SetTitle(TITLE))
        .context("failed to set the terminal title")?;

    // Request key-release (and key-repeat) events from terminals that answer
    // the capability query; others fall back to HOLD_WINDOW.
    let flags = release_reporting(terminal::supports_keyboard_enhancement());
    let keyboard_enhanced = flags.is_some();
    if let Some(flags) = flags {
        out.execute(PushKeyboardEnhancementFlags(flags))
            .context("failed to enable key release reporting")?;
    }
    info!("keyboard enhancement: {}", keyboard_enhanced);

    Ok(keyboard_enhanced)
}
