//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod result_panel;

pub use layout::form_layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = form_layout(frame.area());

    layout::draw_header(frame, layout.header);
    forms::draw_calculator_form(frame, &layout, app);
    result_panel::draw(frame, layout.output, app);

    // Draw status bar
    layout::draw_status_bar(frame, layout.status_bar, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MockClipboardProvider;
    use crate::config::CalcConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app_with(config: CalcConfig) -> App {
        App::new(config, Box::new(MockClipboardProvider::new()))
    }

    fn fill(app: &mut App, name: &str, units: &str, per_package: &str) {
        let form = &mut app.state.form;
        for (index, text) in [name, units, per_package].into_iter().enumerate() {
            form.set_active_field(index);
            for c in text.chars() {
                form.input_char(c);
            }
        }
        form.set_active_field(0);
    }

    #[test]
    fn test_empty_form_shows_labels_and_placeholders() {
        let app = app_with(CalcConfig::default());
        let screen = render(&app, 80, 30);

        assert!(screen.contains("Unit Calculator"));
        assert!(screen.contains("Product name"));
        assert!(screen.contains("Total units wanted"));
        assert!(screen.contains("Units per package/box"));
        assert!(screen.contains("Ex: 100"));
        assert!(screen.contains("Calculate"));
        assert!(screen.contains("Clear"));
        assert!(!screen.contains("Calculation Result"));
    }

    #[test]
    fn test_placeholders_can_be_disabled() {
        let app = app_with(CalcConfig {
            show_placeholders: Some(false),
            ..Default::default()
        });
        let screen = render(&app, 80, 30);
        assert!(!screen.contains("Ex: 100"));
        assert!(screen.contains("(empty)"));
    }

    #[test]
    fn test_result_block_uses_thousands_separator() {
        let mut app = app_with(CalcConfig::default());
        fill(&mut app, "Coca-Cola 2L", "120000", "6");
        app.state.form.submit();

        let screen = render(&app, 80, 30);
        assert!(screen.contains("Calculation Result"));
        assert!(screen.contains("Coca-Cola 2L"));
        assert!(screen.contains("120.000"));
        assert!(screen.contains("20.000"));
    }

    #[test]
    fn test_result_title_marks_edits_after_submit() {
        let mut app = app_with(CalcConfig::default());
        fill(&mut app, "Cola", "100", "6");
        app.state.form.submit();
        assert!(!render(&app, 80, 30).contains("(edited)"));

        app.state.form.input_char('x');
        let screen = render(&app, 80, 30);
        assert!(screen.contains("Calculation Result (edited)"));
        assert!(screen.contains("17"));

        app.state.form.submit();
        assert!(!render(&app, 80, 30).contains("(edited)"));
    }

    #[test]
    fn test_result_block_with_configured_separator() {
        let mut app = app_with(CalcConfig {
            thousands_separator: Some(",".to_string()),
            ..Default::default()
        });
        fill(&mut app, "Cola", "1000", "6");
        app.state.form.submit();

        let screen = render(&app, 80, 30);
        assert!(screen.contains("1,000"));
        assert!(screen.contains("167"));
    }

    #[test]
    fn test_error_block() {
        let mut app = app_with(CalcConfig::default());
        fill(&mut app, "", "100", "6");
        app.state.form.submit();

        let screen = render(&app, 80, 30);
        assert!(screen.contains("All fields are required."));
        assert!(!screen.contains("Calculation Result"));
    }

    #[test]
    fn test_status_message_is_rendered() {
        let mut app = app_with(CalcConfig::default());
        app.state.set_status("Copied result");
        let screen = render(&app, 100, 30);
        assert!(screen.contains("Copied result"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = app_with(CalcConfig::default());
        fill(&mut app, "Cola", "100", "6");
        app.state.form.submit();
        render(&app, 10, 4);
    }
}
