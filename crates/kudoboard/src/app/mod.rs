//! Application orchestration and main event loop.
//!
//! This module owns the core application lifecycle:
//! - Initialization (config and board loading, terminal setup)
//! - Frame loop (input drain, timers, redraw at 60 Hz)
//! - Interaction state and board mutation
//! - UI rendering delegation
//!
//! The app is structured around a single `App` struct that holds
//! all state. Events are processed sequentially on the main thread.
//!
//! Submodules:
//! - state: App struct and persistence helpers
//! - runner: main loop and terminal setup
//! - input: keyboard and mouse event handling, per-frame timers
//! - render: UI rendering methods

mod input;
mod render;
mod runner;
mod state;

pub use runner::run;
