//! Order lifecycle: the stored entity, the transition engine, derived
//! eligibility flags and the role-specific partitions.

pub mod entity;
pub mod error;
pub mod eligibility;
pub mod partition;
pub mod transition;

pub use eligibility::*;
pub use entity::*;
pub use error::*;
pub use partition::*;
pub use transition::*;
