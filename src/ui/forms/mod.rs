//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `calculator_form`: The unit-to-package form

mod calculator_form;
mod field_renderer;

pub use calculator_form::draw_calculator_form;
