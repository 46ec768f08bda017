//! Game session: phase machine, economy and snapshots.
//!
//! A [`Session`] ties the order generator, scorer, shop and cluster
//! together behind a small set of player-facing operations. Each one checks
//! the current [`GamePhase`] first and fails with
//! [`EngineError::InvalidTransition`](crate::core::EngineError) rather than
//! silently doing nothing.

pub mod context;
pub mod phase;
pub mod snapshot;

pub use context::Session;
pub use phase::{GamePhase, PhaseEvent, RoundRating, RoundSummary};
pub use snapshot::SessionSnapshot;
