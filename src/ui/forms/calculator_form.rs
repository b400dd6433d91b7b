//! Calculator form rendering (input fields and action buttons)

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::FormButton;
use crate::ui::components::render_button;
use crate::ui::layout::FormLayout;
use ratatui::{style::Color, Frame};

/// Draw the three input fields and the button row
pub fn draw_calculator_form(frame: &mut Frame, layout: &FormLayout, app: &App) {
    let form = &app.state.form;
    let show_placeholders = app.config.show_placeholders();

    for (index, (field, area)) in form.fields().into_iter().zip(layout.fields).enumerate() {
        draw_field(
            frame,
            area,
            field,
            form.active_field_index == index,
            show_placeholders,
        );
    }

    let on_buttons = form.is_buttons_row_active();
    for (button, area) in FormButton::ALL.into_iter().zip(layout.buttons) {
        let accent = match button {
            FormButton::Calculate => Color::Red,
            FormButton::Clear => Color::Gray,
        };
        render_button(
            frame,
            area,
            button.label(),
            on_buttons && form.selected_button == button,
            Some(accent),
        );
    }
}
