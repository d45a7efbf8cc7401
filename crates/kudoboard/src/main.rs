mod app;
mod board;
mod config;
mod events;
mod interaction;
mod keymap;
mod logging;
mod store;
mod ui;

use std::process::ExitCode;

fn main() -> ExitCode {
    // Held until exit so buffered records are flushed.
    let _logger = logging::default_log_dir().and_then(|dir| match logging::init_logging(&dir) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("kudoboard: logging disabled: {err}");
            None
        }
    });

    match app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=app_failed error={err}");
            eprintln!("kudoboard: {err}");
            ExitCode::FAILURE
        }
    }
}
