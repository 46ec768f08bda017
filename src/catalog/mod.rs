//! Static catalogs: components, customers and order scenarios.
//!
//! ## Key Types
//!
//! - `ComponentRecord`: one placeable infrastructure piece
//! - `Customer`: who places the order (patience, tip multiplier)
//! - `Scenario`: a template an order is drawn from
//! - `ComponentCatalog`, `CustomerRoster`, `ScenarioBook`: lookups
//!
//! `builtin` holds the shipped data set.

pub mod builtin;
pub mod component;
pub mod customer;
pub mod registry;
pub mod scenario;

pub use component::{ComponentCategory, ComponentRecord};
pub use customer::Customer;
pub use registry::{ComponentCatalog, CustomerRoster, ScenarioBook};
pub use scenario::{Requirement, Requirements, Scenario, ScenarioTier};
