//! Form domain layer
//!
//! Schema-driven form state: values and errors, the validation rules,
//! and the controller that ties submit and reset together.

mod controller;
mod field;
mod form_state;
mod validator;

pub use controller::{FormController, FormMode};
pub use field::{ChangeEvent, FieldValue};
pub use form_state::{Form, FormButton, FormFocus};
