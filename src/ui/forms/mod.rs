//! Form rendering module
//!
//! This module contains UI components for rendering schema-driven forms:
//! - `field_renderer`: The widget contract and per-type dispatch
//! - `text_input`, `checkbox`, `select`: One widget per field type
//! - `dynamic_form`: Whole-form layout with buttons and submitted data

mod checkbox;
mod dynamic_form;
mod field_renderer;
mod select;
mod text_input;

pub use dynamic_form::draw;
pub use field_renderer::{widget_for, WidgetProps};
