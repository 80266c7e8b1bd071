//! Application controller.
//!
//! This module orchestrates the main application loop:
//! - Terminal initialization and cleanup
//! - Event waiting and decoding
//! - State updates and rendering
//!
//! The loop is strictly sequential: wait for one event, apply it, redraw.

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use crate::event::{apply_action, handle_event, next_event, Action};
use crate::model::AppState;
use crate::ui::render;

/// The main application controller.
pub struct App {
    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state
    state: AppState,
}

impl App {
    /// Creates a new application with the given state.
    pub fn new(state: AppState) -> Result<Self> {
        // Setup terminal
        enable_raw_mode()?;
        let terminal = restore_on_error(Self::enter_screen(), || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        })?;

        Ok(Self { terminal, state })
    }

    fn enter_screen() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Ok(Terminal::new(backend)?)
    }

    /// Runs the main application loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        // The terminal does not report its initial size as an event
        let size = self.terminal.size()?;
        apply_action(&mut self.state, Action::Resize(size.width, size.height));
        self.draw()?;

        loop {
            let action = handle_event(next_event()?);
            if action == Action::None {
                continue;
            }

            if !apply_action(&mut self.state, action) {
                break;
            }
            self.draw()?;
        }

        info!(cursor = self.state.view.cursor, "session ended");
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        self.terminal.draw(|frame| render(frame, &self.state))?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Runs `restore` when `result` is an error, then passes the result on.
///
/// `Drop` only restores the terminal once `App` exists, so setup failures
/// after raw mode is enabled have to undo it here.
fn restore_on_error<T>(result: Result<T>, restore: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        restore();
    }
    result
}

/// Convenience function to run the viewer on a loaded state.
pub fn run_app(state: AppState) -> Result<()> {
    let mut app = App::new(state)?;
    app.run()
}
