//! Result and error blocks shown under the form

use crate::app::App;
use crate::calculator::{CalculationResult, ValidationError};
use crate::format::group_thousands;
use crate::state::FormPhase;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Width reserved for the labels column
const LABEL_WIDTH: usize = 24;

/// Draw whichever outcome the last submission left behind (if any)
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    if let Some(error) = form.error() {
        draw_error(frame, area, error);
    } else if let Some(result) = form.result() {
        let stale = form.phase() == FormPhase::Editing;
        draw_result(frame, area, result, app.config.thousands_separator(), stale);
    }
}

fn draw_error(frame: &mut Frame, area: Rect, error: ValidationError) {
    let area = Rect {
        height: area.height.min(3),
        ..area
    };
    let message = Paragraph::new(Span::styled(
        error.to_string(),
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(Color::Red)),
    );

    frame.render_widget(message, area);
}

fn draw_result(
    frame: &mut Frame,
    area: Rect,
    result: &CalculationResult,
    separator: &str,
    stale: bool,
) {
    let row = |label: &str, value: String, value_style: Style| {
        Line::from(vec![
            Span::styled(
                format!("{label:<LABEL_WIDTH$}"),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(value, value_style),
        ])
    };

    let lines = vec![
        row(
            "Product name:",
            result.product_name.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        row(
            "Units wanted:",
            group_thousands(result.total_units, separator),
            Style::default(),
        ),
        row(
            "Units per package:",
            group_thousands(result.units_per_package, separator),
            Style::default(),
        ),
        Line::from(Span::styled(
            "─".repeat(LABEL_WIDTH + 12),
            Style::default().fg(Color::DarkGray),
        )),
        row(
            "Packages needed:",
            group_thousands(result.packages_needed, separator),
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    // Fields changed after this result was computed
    let title = if stale {
        " Calculation Result (edited) "
    } else {
        " Calculation Result "
    };
    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let area = Rect {
        height: area.height.min(lines.len() as u16 + 2),
        ..area
    };
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
