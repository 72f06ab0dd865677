//! main.rs
//! Entry point for rang

use rang_tui::app::AppState;
use rang_tui::config::{Config, General, LoadReport};
use rang_tui::core::{LocalFs, terminal};
use rang_tui::utils::cli::{CliAction, handle_args};

use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, OpenOptions};

fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = crossterm::execute!(
            stdout,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );

        log::error!("panic: {}", info);
        eprintln!("\n[rang] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    if let CliAction::Exit = handle_args() {
        return Ok(());
    }

    let (config, report) = Config::load();
    init_logging(config.general());

    match report {
        LoadReport::Loaded(path) => log::info!("Loaded config from {}", path.display()),
        LoadReport::Missing(path) => {
            log::info!("No config at {}, using defaults", path.display())
        }
        LoadReport::Invalid(path, err) => {
            log::warn!("Ignoring invalid config {}: {}", path.display(), err)
        }
    }

    let fs = LocalFs::new(config.general().move_to_trash());
    let mut state = AppState::new()?;
    log::info!(
        "rang starting in {} (move_to_trash: {})",
        state.current_dir().display(),
        fs.move_to_trash()
    );

    terminal::run_terminal(&config, &fs, &mut state)
}

/// Sets up the file logger. The browser runs without logging if this fails.
fn init_logging(general: &General) {
    let path = general.log_file();
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = OpenOptions::new().create(true).append(true).open(&path) {
        let _ = WriteLogger::init(general.log_level(), log_config, log_file);
    }
}
