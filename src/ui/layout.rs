//! Layout components (header, form column, status bar)

use super::components::BUTTON_HEIGHT;
use crate::app::App;
use crate::platform::{CLEAR_SHORTCUT, COPY_SHORTCUT};
use crate::state::{FormButton, BUTTON_COUNT, FIELD_COUNT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form column grows on large terminals
pub const MAX_FORM_WIDTH: u16 = 64;
/// Field height in rows (top border + content + bottom border)
pub const FIELD_HEIGHT: u16 = 3;
const HEADER_HEIGHT: u16 = 3;

/// Screen regions of the calculator, shared by drawing and mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub header: Rect,
    pub fields: [Rect; FIELD_COUNT],
    /// Button areas, in `FormButton::ALL` order
    pub buttons: [Rect; BUTTON_COUNT],
    /// Result or error block
    pub output: Rect,
    pub status_bar: Rect,
}

impl FormLayout {
    /// Index of the field under the given screen position
    pub fn field_at(&self, column: u16, row: u16) -> Option<usize> {
        self.fields
            .iter()
            .position(|r| rect_contains(*r, column, row))
    }

    /// Button under the given screen position
    pub fn button_at(&self, column: u16, row: u16) -> Option<FormButton> {
        self.buttons
            .iter()
            .position(|r| rect_contains(*r, column, row))
            .map(|i| FormButton::ALL[i])
    }
}

fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Split the terminal into the centered form column and the status bar
pub fn form_layout(area: Rect) -> FormLayout {
    // Reserve bottom line for status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = outer[0];
    let width = content.width.min(MAX_FORM_WIDTH);
    let column = Rect {
        x: content.x + (content.width - width) / 2,
        y: content.y,
        width,
        height: content.height,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Title
            Constraint::Length(FIELD_HEIGHT),  // Product name
            Constraint::Length(FIELD_HEIGHT),  // Total units
            Constraint::Length(FIELD_HEIGHT),  // Units per package
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Min(0),                // Result / error
        ])
        .split(column);

    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[4]);

    FormLayout {
        header: chunks[0],
        fields: [chunks[1], chunks[2], chunks[3]],
        buttons: [button_chunks[0], button_chunks[1]],
        output: chunks[5],
        status_bar: outer[1],
    }
}

/// Draw the title block
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Unit Calculator",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "How many packages for the units you need",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(
            " Tab:next  Enter:calculate  {CLEAR_SHORTCUT}/Esc:clear  {COPY_SHORTCUT}:copy  ^Q:quit"
        ),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
