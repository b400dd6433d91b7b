//! System clipboard access

use anyhow::Result;

/// Trait for clipboard writes, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardProvider {
    /// Replace the clipboard contents with `text`
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Clipboard backed by the OS via arboard
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
