//! Core engine types: RNG, configuration, ids and errors.
//!
//! Everything here is shared by the generators, the scorer and the session.

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;

pub use config::{EngineConfig, OrderTiming, RoundRules, ScoringRules, TicketRules};
pub use error::{EngineError, Result, ShopError};
pub use ids::IdCounter;
pub use rng::{GameRng, GameRngState};
