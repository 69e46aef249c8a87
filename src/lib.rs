//! Order lifecycle for a home-cook marketplace: customers order meals from
//! cooks, cooks drive each order through a fixed status graph, and customers
//! review completed orders.
//!
//! Every collection lives in its own [`actor_framework::ResourceActor`]; the
//! [`clients`] wrap those handles with role checks, pricing and the transition
//! engine. [`app_system::MarketSystem`] starts and wires everything.

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod cook_actor;
pub mod discovery;
pub mod domain;
pub mod geo;
pub mod meal_actor;
pub mod order_actor;
pub mod pricing;
pub mod review_actor;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod test_support;
