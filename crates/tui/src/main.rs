mod app;
mod catalog;
mod cli;
mod clipboard;
mod config;
mod headless;
mod logging;
mod selection;

use anyhow::Context;
use clap::Parser;
use crossterm::cursor::Show;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::time::Duration;

use crate::app::handlers::{handle_key, handle_mouse};
use crate::app::view::ui::draw_ui;
use crate::app::AppState;
use crate::catalog::{Catalog, RandomUuids, SequentialUuids};
use crate::cli::{Cli, Mode};
use crate::clipboard::SystemClipboard;
use crate::logging::{init_logging, LogTarget};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

struct TerminalRestoreGuard;

impl Drop for TerminalRestoreGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = stdout.execute(DisableMouseCapture);
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    }
}

fn build_catalog(fixed_ids: bool) -> Catalog {
    if fixed_ids {
        Catalog::build(&mut SequentialUuids::new())
    } else {
        Catalog::build(&mut RandomUuids)
    }
}

fn run_interactive(catalog: Catalog) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    let _restore_guard = TerminalRestoreGuard;
    enable_raw_mode().context("failed to enable raw mode")?;
    stdout.execute(EnterAlternateScreen)?;
    let mouse_capture_enabled = stdout.execute(EnableMouseCapture).is_ok();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppState::new(catalog);
    app.mouse_capture_enabled = mouse_capture_enabled;
    let mut clipboard = SystemClipboard::new();
    tracing::info!(entries = app.catalog.len(), "session config tester started");

    let mut needs_redraw = true;
    loop {
        if needs_redraw {
            terminal.draw(|f| draw_ui(f, &mut app))?;
            needs_redraw = false;
        }
        if app.should_quit {
            break;
        }
        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        match event::read()? {
            // Windows reports releases too.
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                needs_redraw |= handle_key(&mut app, key, &mut clipboard);
            }
            Event::Mouse(mouse) if app.mouse_capture_enabled => {
                needs_redraw |= handle_mouse(&mut app, mouse, &mut clipboard);
            }
            Event::Resize(_, _) => needs_redraw = true,
            _ => {}
        }
    }

    terminal.show_cursor()?;
    tracing::info!("session config tester exiting");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mode = cli.mode();
    let log_target = match (&cli.log_file, &mode) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, Mode::Interactive) => LogTarget::Disabled,
        (None, _) => LogTarget::Stderr,
    };
    init_logging(&log_target)?;

    let catalog = build_catalog(cli.fixed_ids);
    match mode {
        Mode::Interactive => run_interactive(catalog),
        Mode::List => headless::list(&catalog, &mut std::io::stdout().lock()),
        Mode::Print(name) => headless::print(&catalog, &name, &mut std::io::stdout().lock()),
        Mode::Copy(name) => {
            let (name, bytes) = headless::copy(
                &catalog,
                &name,
                &mut SystemClipboard::waiting_for_handover(),
            )?;
            println!("Copied {name} to clipboard ({bytes} bytes)");
            Ok(())
        }
    }
}
