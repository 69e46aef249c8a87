//! Meal-specific domain logic: validation, owner-gated edits and the
//! availability toggle.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
