//! Key bindings and held-key tracking.
//!
//! Terminals report key presses, not key state. Instead of acting on each
//! event, `HeldKeys` records the tick of the last press/repeat event for
//! every key; a key stays "held" while that tick is fresh. This works on two
//! classes of terminal:
//!
//! * **Keyboard-enhancement capable** (kitty protocol etc.): proper
//!   `Press` / `Repeat` / `Release` events, so keys drop on release.
//! * **Classic terminals**: only `Press` events (OS key-repeat shows up as
//!   repeated presses). Keys expire after `HOLD_WINDOW` ticks of silence.

use std::collections::HashMap;
use std::io;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags};

/// A key counts as held if it was last seen within this many ticks.
/// 8 ticks @ 60 FPS ≈ 133 ms, longer than the OS repeat interval.
pub const HOLD_WINDOW: u64 = 8;

const LEFT_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const RIGHT_KEYS: [KeyCode; 3] = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];
const JUMP_KEYS: [KeyCode; 4] = [
    KeyCode::Char(' '),
    KeyCode::Up,
    KeyCode::Char('w'),
    KeyCode::Char('W'),
];

/// Flags to push given the terminal's answer to the enhancement query.
/// A failed query counts as unsupported.
pub fn release_reporting(supported: io::Result<bool>) -> Option<KeyboardEnhancementFlags> {
    match supported {
        Ok(true) => Some(KeyboardEnhancementFlags::REPORT_EVENT_TYPES),
        Ok(false) | Err(_) => None,
    }
}

/// Held-key state sampled once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// One-shot actions, applied as their events arrive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Leave the menu.
    Confirm,
    /// Play again from a finished game.
    Restart,
    Quit,
    /// Ctrl+C, the terminal's window-close request.
    Close,
}

/// Map a key press to its one-shot command, if it has one.
pub fn command_for(event: &KeyEvent) -> Option<Command> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    match event.code {
        KeyCode::Char('c') | KeyCode::Char('C')
            if event.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(Command::Close)
        }
        KeyCode::Enter => Some(Command::Confirm),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

#[derive(Debug, Default)]
pub struct HeldKeys {
    // key → tick it was last seen (press or repeat)
    key_frame: HashMap<KeyCode, u64>,
}

impl HeldKeys {
    /// Feed one key event received during `frame`.
    pub fn record(&mut self, event: &KeyEvent, frame: u64) {
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.key_frame.insert(event.code, frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&event.code);
            }
        }
    }

    pub fn is_held(&self, key: &KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    fn any_held(&self, keys: &[KeyCode], frame: u64) -> bool {
        keys.iter().any(|k| self.is_held(k, frame))
    }

    /// Snapshot of the movement keys for this tick.
    pub fn tick_input(&self, frame: u64) -> TickInput {
        TickInput {
            left: self.any_held(&LEFT_KEYS, frame),
            right: self.any_held(&RIGHT_KEYS, frame),
            jump: self.any_held(&JUMP_KEYS, frame),
        }
    }
}
