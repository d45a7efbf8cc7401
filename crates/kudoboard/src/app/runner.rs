//! Application runner and event loop.
//!
//! Handles terminal setup/teardown and the main frame loop. Events are read
//! from an mpsc channel fed by an input thread; each frame drains whatever
//! arrived, advances timers and redraws.

use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use thiserror::Error;

use crate::board::Board;
use crate::config::load_config;
use crate::events::AppEvent;
use crate::store::{self, StoreError};

use super::input::{handle_event, tick};
use super::render::render;
use super::state::App;

const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Entry point: load the board, set up the terminal and run the frame loop.
///
/// The board is loaded before the terminal is touched so a malformed data
/// file is reported on a normal screen.
pub fn run() -> Result<(), AppError> {
    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd);
    let data_path = config.data_path(&cwd);
    let posts = store::load(&data_path)?;
    log::info!(
        "event=board_loaded posts={} path={}",
        posts.len(),
        data_path.display()
    );
    let mut app = App::new(&config, Board::new(posts), data_path, Instant::now());

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    // Release events are only reported with the enhancement flags on.
    let enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                | KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }
    app.synthetic_repeat = enhanced;
    log::debug!("event=terminal_ready keyboard_enhancement={enhanced}");
    install_panic_hook(enhanced);

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app);

    restore_terminal(enhanced)?;
    terminal.show_cursor()?;
    log::info!("event=app_exit posts={}", app.board.len());

    result
}

/// Main frame loop: process events until quit.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), AppError> {
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    spawn_input_thread(event_tx);

    terminal.clear()?;
    let mut next_frame = Instant::now();
    while !app.should_quit {
        tick(app, Instant::now());
        terminal.draw(|frame| render(app, frame))?;

        next_frame = (next_frame + FRAME_INTERVAL).max(Instant::now());
        if !drain_events(app, &event_rx, next_frame) {
            break;
        }
    }
    Ok(())
}

/// Handle events until `deadline`. Returns false once the input thread is gone.
fn drain_events(app: &mut App, events: &Receiver<AppEvent>, deadline: Instant) -> bool {
    while !app.should_quit {
        let wait = deadline.saturating_duration_since(Instant::now());
        match events.recv_timeout(wait) {
            Ok(event) => handle_event(app, event, Instant::now()),
            Err(RecvTimeoutError::Timeout) => return true,
            Err(RecvTimeoutError::Disconnected) => {
                log::warn!("event=input_closed");
                return false;
            }
        }
    }
    true
}

/// Spawn a thread to read terminal input events.
fn spawn_input_thread(sender: Sender<AppEvent>) {
    std::thread::spawn(move || loop {
        let event = match event::read() {
            Ok(Event::Key(key)) => AppEvent::Key(key),
            Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
            Ok(Event::Resize(columns, rows)) => AppEvent::Resize(columns, rows),
            Ok(_) => continue,
            Err(err) => {
                log::error!("event=input_read_failed error={err}");
                break;
            }
        };
        if sender.send(event).is_err() {
            break;
        }
    });
}

fn restore_terminal(enhanced: bool) -> io::Result<()> {
    let mut stdout = io::stdout();
    disable_raw_mode()?;
    stdout.execute(DisableMouseCapture)?;
    if enhanced {
        stdout.execute(PopKeyboardEnhancementFlags)?;
    }
    stdout.execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Put the terminal back before the panic message is printed.
fn install_panic_hook(enhanced: bool) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal(enhanced);
        default_hook(info);
    }));
}
