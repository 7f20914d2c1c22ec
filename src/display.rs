//! Rendering layer: all terminal output lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game. No game logic is performed; this module only scales the 960×540
//! world onto the terminal grid and translates it into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal::{self, ClearType},
    QueueableCommand,
};

use crate::config::Config;
use crate::entities::{Game, GameState, Level, Player, Rect, Rgb};

// ── Colour palette ────────────────────────────────────────────────────────────

pub const C_BACKGROUND: Rgb = Rgb(30, 34, 48);
pub const C_ENEMY: Rgb = Rgb(220, 70, 70);
pub const C_GOAL: Rgb = Rgb(255, 215, 0);
pub const C_PLAYER: Rgb = Rgb(80, 180, 255);
pub const C_PLAYER_FLASH: Rgb = Rgb(140, 220, 255);
pub const C_TEXT: Rgb = Rgb(255, 255, 255);
pub const C_SUBTITLE: Rgb = Rgb(220, 220, 220);

/// Below this size the scene is unreadable; show a notice instead.
pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 12;

const BLOCK: &str = "█";

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}

/// The player flickers while invincible: five ticks in each colour.
pub fn player_color(invincibility: u32) -> Rgb {
    if invincibility % 10 < 5 {
        C_PLAYER
    } else {
        C_PLAYER_FLASH
    }
}

// ── World → terminal mapping ──────────────────────────────────────────────────

/// Terminal size in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

/// A block of terminal cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub col: u16,
    pub row: u16,
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    pub fn is_too_small(&self) -> bool {
        self.cols < MIN_COLS || self.rows < MIN_ROWS
    }

    /// Cells covered by `rect`, clipped to the screen. Anything that touches
    /// the world gets at least one cell; anything fully outside gets `None`.
    pub fn cell_rect(&self, rect: &Rect, cfg: &Config) -> Option<CellRect> {
        let sx = self.cols as f32 / cfg.screen_width;
        let sy = self.rows as f32 / cfg.screen_height;

        let c0 = (rect.left() * sx).floor().max(0.0);
        let c1 = (rect.right() * sx).ceil().min(self.cols as f32);
        let r0 = (rect.top() * sy).floor().max(0.0);
        let r1 = (rect.bottom() * sy).ceil().min(self.rows as f32);

        if c1 <= c0 || r1 <= r0 {
            return None;
        }
        Some(CellRect {
            col: c0 as u16,
            row: r0 as u16,
            width: (c1 - c0) as u16,
            height: (r1 - r0) as u16,
        })
    }

    /// Cell containing the world point (x, y), clamped to the screen.
    pub fn cell_at(&self, x: f32, y: f32, cfg: &Config) -> (u16, u16) {
        let col = (x * self.cols as f32 / cfg.screen_width).floor().max(0.0) as u16;
        let row = (y * self.rows as f32 / cfg.screen_height).floor().max(0.0) as u16;
        (
            col.min(self.cols.saturating_sub(1)),
            row.min(self.rows.saturating_sub(1)),
        )
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    game: &Game,
    viewport: Viewport,
    cfg: &Config,
) -> std::io::Result<()> {
    out.queue(terminal::BeginSynchronizedUpdate)?;
    out.queue(style::SetBackgroundColor(color(C_BACKGROUND)))?;
    out.queue(terminal::Clear(ClearType::All))?;

    if viewport.is_too_small() {
        draw_too_small(out, viewport)?;
    } else {
        match game.state {
            GameState::Menu => {
                draw_center_text(out, viewport, cfg, "2D Platformer", "Press ENTER to start")?;
            }
            GameState::Playing => {
                draw_level(out, &game.level, viewport, cfg)?;
                draw_player(out, &game.player, viewport, cfg)?;
                draw_hud(out, &game.player, viewport, cfg)?;
            }
            GameState::GameOver => {
                draw_center_text(
                    out,
                    viewport,
                    cfg,
                    "Game Over",
                    "Press R to retry | ESC to quit",
                )?;
            }
            GameState::Win => {
                let subtitle = format!("Score: {} | Press R to play again", game.player.score);
                draw_center_text(out, viewport, cfg, "You Win!", &subtitle)?;
            }
        }
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, viewport.rows.saturating_sub(1)))?;
    out.queue(terminal::EndSynchronizedUpdate)?;
    out.flush()?;
    Ok(())
}

// ── Shapes ────────────────────────────────────────────────────────────────────

fn fill_rect<W: Write>(
    out: &mut W,
    rect: &Rect,
    fill: Rgb,
    viewport: Viewport,
    cfg: &Config,
) -> std::io::Result<()> {
    let Some(cells) = viewport.cell_rect(rect, cfg) else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(color(fill)))?;
    let line = BLOCK.repeat(cells.width as usize);
    for row in cells.row..cells.row + cells.height {
        out.queue(cursor::MoveTo(cells.col, row))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

fn draw_level<W: Write>(
    out: &mut W,
    level: &Level,
    viewport: Viewport,
    cfg: &Config,
) -> std::io::Result<()> {
    for platform in &level.platforms {
        fill_rect(out, &platform.rect, platform.color, viewport, cfg)?;
    }
    for enemy in &level.enemies {
        fill_rect(out, &enemy.body.rect, C_ENEMY, viewport, cfg)?;
    }
    fill_rect(out, &level.goal, C_GOAL, viewport, cfg)
}

fn draw_player<W: Write>(
    out: &mut W,
    player: &Player,
    viewport: Viewport,
    cfg: &Config,
) -> std::io::Result<()> {
    fill_rect(
        out,
        &player.body.rect,
        player_color(player.invincibility),
        viewport,
        cfg,
    )
}

// ── Text ──────────────────────────────────────────────────────────────────────

/// Print `text` at a cell, cut to fit the remaining width.
fn draw_text<W: Write>(
    out: &mut W,
    text: &str,
    col: u16,
    row: u16,
    fg: Rgb,
    viewport: Viewport,
) -> std::io::Result<()> {
    let room = viewport.cols.saturating_sub(col) as usize;
    let clipped: String = text.chars().take(room).collect();
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color(fg)))?;
    out.queue(Print(clipped))?;
    Ok(())
}

fn draw_centered<W: Write>(
    out: &mut W,
    text: &str,
    row: u16,
    fg: Rgb,
    viewport: Viewport,
) -> std::io::Result<()> {
    let width = text.chars().count() as u16;
    let col = (viewport.cols / 2).saturating_sub(width / 2);
    draw_text(out, text, col, row, fg, viewport)
}

/// Health and score in the top-left corner.
fn draw_hud<W: Write>(
    out: &mut W,
    player: &Player,
    viewport: Viewport,
    cfg: &Config,
) -> std::io::Result<()> {
    let (col, health_row) = viewport.cell_at(20.0, 16.0, cfg);
    let (_, score_row) = viewport.cell_at(20.0, 42.0, cfg);
    let score_row = score_row.max(health_row + 1);

    draw_text(
        out,
        &format!("Health: {}", player.health),
        col,
        health_row,
        C_TEXT,
        viewport,
    )?;
    draw_text(
        out,
        &format!("Score: {}", player.score),
        col,
        score_row,
        C_TEXT,
        viewport,
    )
}

/// Title just above the middle of the screen, subtitle just below.
fn draw_center_text<W: Write>(
    out: &mut W,
    viewport: Viewport,
    cfg: &Config,
    title: &str,
    subtitle: &str,
) -> std::io::Result<()> {
    let mid = cfg.screen_height / 2.0;
    let (_, title_row) = viewport.cell_at(0.0, mid - 30.0, cfg);
    let (_, sub_row) = viewport.cell_at(0.0, mid + 20.0, cfg);
    let sub_row = sub_row.max(title_row + 1);

    draw_centered(out, title, title_row, C_TEXT, viewport)?;
    draw_centered(out, subtitle, sub_row, C_SUBTITLE, viewport)
}

fn draw_too_small<W: Write>(out: &mut W, viewport: Viewport) -> std::io::Result<()> {
    let msg = format!("Terminal too small (need {}x{})", MIN_COLS, MIN_ROWS);
    draw_centered(out, &msg, viewport.rows / 2, C_TEXT, viewport)
}
