//! Application state and core logic

use crate::clipboard::ClipboardProvider;
use crate::config::CalcConfig;
use crate::format::result_summary;
use crate::state::{AppState, FormButton, BUTTONS_ROW};
use crate::ui::form_layout;
use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration loaded at startup
    pub config: CalcConfig,
    /// Clipboard used by the copy shortcut
    clipboard: Box<dyn ClipboardProvider>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: CalcConfig, clipboard: Box<dyn ClipboardProvider>) -> Self {
        Self {
            state: AppState::default(),
            config,
            clipboard,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Release/repeat events are reported on some platforms; act on presses only
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.clear_status();

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        // AltGr arrives as Ctrl+Alt on Windows
        let alt_gr = ctrl && key.modifiers.contains(KeyModifiers::ALT);
        let on_buttons = self.state.form.is_buttons_row_active();
        tracing::debug!(?key, "key event");

        match key.code {
            KeyCode::Char('q') if ctrl => self.quit = true,
            KeyCode::Char('l') if ctrl => self.clear(),
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_result();
            }
            KeyCode::Esc => self.clear(),
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            // Left/Right for button navigation
            KeyCode::Left if on_buttons => self.state.form.prev_button(),
            KeyCode::Right if on_buttons => self.state.form.next_button(),
            // Enter on the buttons row triggers the selected button
            KeyCode::Enter | KeyCode::Char(' ') if on_buttons => {
                self.press_button(self.state.form.selected_button);
            }
            // Enter in any field submits, like a form
            KeyCode::Enter => self.submit(),
            KeyCode::Char(c) if (!ctrl || alt_gr) && !on_buttons => {
                self.state.form.input_char(c);
            }
            KeyCode::Backspace => {
                self.state.form.backspace();
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle a mouse event: clicks focus fields and press buttons
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return Ok(());
        };

        let (height, width) = self.state.terminal_size.unwrap_or((24, 80));
        let layout = form_layout(Rect::new(0, 0, width, height));

        if let Some(index) = layout.field_at(mouse.column, mouse.row) {
            self.state.form.set_active_field(index);
        } else if let Some(button) = layout.button_at(mouse.column, mouse.row) {
            self.state.form.set_active_field(BUTTONS_ROW);
            self.state.form.selected_button = button;
            self.press_button(button);
        }
        Ok(())
    }

    fn press_button(&mut self, button: FormButton) {
        match button {
            FormButton::Calculate => self.submit(),
            FormButton::Clear => self.clear(),
        }
    }

    /// Validate the form and show the result or error
    fn submit(&mut self) {
        self.state.form.submit();
    }

    /// Reset the form to its empty state
    fn clear(&mut self) {
        tracing::debug!(phase = ?self.state.form.phase(), "clearing form");
        self.state.form.clear();
    }

    /// Copy a summary of the current result to the clipboard
    fn copy_result(&mut self) {
        let Some(result) = self.state.form.result() else {
            self.state.set_status("Nothing to copy yet");
            return;
        };

        let summary = result_summary(result, self.config.thousands_separator());
        match self.clipboard.set_text(&summary) {
            Ok(()) => self.state.set_status("Copied result to clipboard"),
            Err(err) => {
                tracing::warn!("Clipboard write failed: {err:#}");
                self.state.set_status(format!("Copy failed: {err}"));
            }
        }
    }
}
