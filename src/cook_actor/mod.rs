//! Cook profiles: owner-only upsert that never touches the rating aggregates.

pub mod entity;
pub mod error;

pub use entity::*;
pub use error::*;
