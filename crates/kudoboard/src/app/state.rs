//! Application state types and core data structures.
//!
//! Defines the App struct which holds all mutable application state:
//! the board, the single active interaction, scroll position and timers.

use std::path::PathBuf;
use std::time::Instant;

use crossterm::event::MouseButton;
use ratatui::layout::Rect;

use crate::board::{Board, Grid};
use crate::config::Config;
use crate::interaction::{ClickTracker, CursorBlink, Interaction, KeyRepeat};
use crate::keymap::{parse_key_chord, KeyChord};
use crate::store;
use crate::ui::split_screen;

/// Board keys resolved from config. `None` leaves the action unbound.
#[derive(Debug, Clone)]
pub struct BoardKeys {
    pub create: Option<KeyChord>,
    pub scroll_up: Option<KeyChord>,
    pub scroll_down: Option<KeyChord>,
}

/// Main application state container.
///
/// Holds all mutable state for the TUI application. Methods are
/// split across input (event handling) and render (UI drawing).
pub struct App {
    pub board: Board,
    pub interaction: Interaction,
    pub data_path: PathBuf,
    pub grid: Grid,
    pub scroll: i32,
    pub scroll_step: i32,
    pub keys: BoardKeys,
    pub output: Option<String>,
    pub should_quit: bool,
    pub key_repeat: KeyRepeat,
    /// True when the terminal reports key releases, so Backspace/Delete
    /// repeat is timed here instead of by the terminal.
    pub synthetic_repeat: bool,
    pub blink: CursorBlink,
    pub clicks: ClickTracker,
    pub mouse_position: Option<(u16, u16)>,
    pub mouse_pressed: Option<MouseButton>,
    /// Last left press since the previous frame, kept even if already released.
    pub pending_left_press: Option<(u16, u16)>,
    /// A drag or resize changed geometry that hasn't been saved yet.
    pub gesture_dirty: bool,
    pub screen_area: Rect,
    pub board_area: Rect,
}

impl App {
    pub fn new(config: &Config, board: Board, data_path: PathBuf, now: Instant) -> Self {
        Self {
            board,
            interaction: Interaction::Idle,
            data_path,
            grid: config.grid(),
            scroll: 0,
            scroll_step: i32::from(config.board.scroll_step),
            keys: BoardKeys {
                create: resolve_chord("create", &config.keymap.create),
                scroll_up: resolve_chord("scroll_up", &config.keymap.scroll_up),
                scroll_down: resolve_chord("scroll_down", &config.keymap.scroll_down),
            },
            output: None,
            should_quit: false,
            key_repeat: KeyRepeat::default(),
            synthetic_repeat: false,
            blink: CursorBlink::new(now),
            clicks: ClickTracker::default(),
            mouse_position: None,
            mouse_pressed: None,
            pending_left_press: None,
            gesture_dirty: false,
            screen_area: Rect::default(),
            board_area: Rect::default(),
        }
    }

    /// Record the terminal size and derive the board area from it.
    pub fn set_screen(&mut self, area: Rect) {
        self.screen_area = area;
        self.board_area = split_screen(area).0;
    }

    /// Visible board height in board units.
    pub fn viewport_height(&self) -> i32 {
        self.grid.viewport_height(self.board_area.height)
    }

    /// Set the message shown in the status bar.
    pub fn set_output(&mut self, message: String) {
        let trimmed = message.trim().to_string();
        if trimmed.is_empty() {
            self.output = None;
        } else {
            self.output = Some(trimmed);
        }
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.scroll = self.scroll.saturating_add(delta).max(0);
    }

    /// Write the whole board to disk. Failures go to the status bar and log.
    pub fn save_board(&mut self) -> bool {
        match store::save(&self.data_path, self.board.posts()) {
            Ok(()) => {
                log::debug!(
                    "event=board_saved posts={} path={}",
                    self.board.len(),
                    self.data_path.display()
                );
                true
            }
            Err(err) => {
                log::error!("event=board_save_failed error={err}");
                self.set_output(format!("Save failed: {err}"));
                false
            }
        }
    }
}

fn resolve_chord(action: &str, value: &str) -> Option<KeyChord> {
    let chord = parse_key_chord(value);
    if chord.is_none() {
        log::warn!("event=keymap_invalid action={action} value={value:?}");
    }
    chord
}
