//! Application state definitions

use super::forms::CalculatorForm;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Form
    pub form: CalculatorForm,

    // UI state
    /// Transient message shown in the status bar until the next key press
    pub status_message: Option<String>,
    /// Terminal size (height, width), refreshed every frame
    pub terminal_size: Option<(u16, u16)>,
}

impl AppState {
    /// Set a status bar message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear any status bar message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormPhase;

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.form.phase(), FormPhase::Empty);
        assert!(state.status_message.is_none());
        assert!(state.terminal_size.is_none());
    }

    #[test]
    fn test_status_message() {
        let mut state = AppState::default();
        state.set_status("Copied");
        assert_eq!(state.status_message.as_deref(), Some("Copied"));
        state.clear_status();
        assert!(state.status_message.is_none());
    }
}
