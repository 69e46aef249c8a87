//! Reviews and the gate that decides whether one may be written.

pub mod entity;
pub mod error;
pub mod gate;

pub use error::*;
pub use gate::*;
