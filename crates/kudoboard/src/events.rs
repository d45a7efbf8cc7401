//! Application event types.
//!
//! The input thread forwards terminal events over an mpsc channel; the
//! main loop drains them once per frame.

use crossterm::event::{KeyEvent, MouseEvent};

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}
