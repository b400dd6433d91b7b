//! Form domain layer
//!
//! Field value objects and the calculator form state machine.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{
    CalculatorForm, FormButton, FormPhase, BUTTONS_ROW, BUTTON_COUNT, FIELD_COUNT,
};
