//! Engine error types.
//!
//! Gameplay misses (wrong components, wrong replica count, timeouts) are
//! ordinary results and never show up here. These variants are failures
//! of a call: the caller asked for something the engine cannot do.

use crate::session::GamePhase;

/// Errors returned by generators, catalogs, the shop and the session.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Generation was attempted with nothing eligible to pick from.
    #[error("nothing eligible to generate from: {pool} is empty")]
    EmptyCatalog {
        /// Which pool was empty ("customers", "scenarios", "pods", ...).
        pool: &'static str,
    },

    /// A submitted component key has no catalog entry.
    #[error("component type not in catalog: {0}")]
    UnresolvableComponent(String),

    /// Scoring was requested with no order in play.
    #[error("no active order")]
    MissingActiveOrder,

    /// An action was applied with no ticket in play.
    #[error("no active ticket")]
    MissingActiveTicket,

    /// The session phase does not allow the requested operation.
    #[error("cannot {action} while in {from} phase")]
    InvalidTransition {
        /// Phase the session was in.
        from: GamePhase,
        /// Operation that was attempted.
        action: &'static str,
    },

    /// A catalog entry was registered twice.
    #[error("duplicate {kind} entry: {key}")]
    DuplicateEntry {
        /// Catalog kind ("component", "customer", "scenario").
        kind: &'static str,
        /// Offending key.
        key: String,
    },

    /// A catalog entry can never be used (a scenario with no descriptions,
    /// no requirements, or a zero quantity).
    #[error("unplayable {kind} entry: {key}")]
    InvalidEntry {
        /// Catalog kind.
        kind: &'static str,
        /// Offending key.
        key: String,
    },

    /// A purchase was rejected.
    #[error(transparent)]
    Shop(#[from] ShopError),

    /// Configuration failed to parse or validate.
    #[error("configuration error: {0}")]
    Config(String),

    /// A session snapshot failed to encode or decode.
    #[error("snapshot error: {0}")]
    Snapshot(String),
}

/// Reasons a shop purchase is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShopError {
    /// The upgrade is already at its maximum level.
    #[error("{upgrade} is already at max level {level}")]
    MaxLevel {
        /// Upgrade display name.
        upgrade: &'static str,
        /// Current (maximum) level.
        level: u8,
    },

    /// Not enough cash for the next level.
    #[error("upgrade costs ${cost} but only ${cash} available")]
    InsufficientFunds {
        /// Price of the next level.
        cost: u64,
        /// Cash on hand.
        cash: u64,
    },
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, EngineError>;

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        Self::Snapshot(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = EngineError::EmptyCatalog { pool: "pods" };
        assert_eq!(err.to_string(), "nothing eligible to generate from: pods is empty");

        let err = EngineError::InvalidTransition {
            from: GamePhase::Menu,
            action: "submit",
        };
        assert_eq!(err.to_string(), "cannot submit while in menu phase");

        let err: EngineError = ShopError::InsufficientFunds { cost: 300, cash: 120 }.into();
        assert_eq!(err.to_string(), "upgrade costs $300 but only $120 available");
    }
}
