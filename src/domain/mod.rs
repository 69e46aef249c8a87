pub mod ids;
pub mod identity;
pub mod order;
pub mod meal;
pub mod cook;
pub mod review;

pub use ids::*;
pub use identity::*;
pub use order::*;
pub use meal::*;
pub use cook::*;
pub use review::*;
