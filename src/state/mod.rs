//! Application state module

mod forms;
mod schema;

pub use forms::*;
pub use schema::*;
