//! UI layout and widget helpers.
//!
//! Pure functions shared by rendering and input handling, so a button is
//! clicked exactly where it is drawn.
//!
//! Submodules:
//! - layout: screen split, dialog and input box placement
//! - widgets: text lines with a blinking cursor

mod layout;
mod widgets;

pub use layout::{confirm_dialog, new_post_box, split_screen};
pub use widgets::entry_line;
