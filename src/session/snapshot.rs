//! Whole-session snapshots.
//!
//! A snapshot captures both RNG stream positions and both id counters, so
//! a restored session deals exactly the orders and tickets the original
//! would have dealt next. Components pre-placed by auto-complete are not
//! stored; they are rebuilt from the current order on restore.

use serde::{Deserialize, Serialize};

use super::phase::GamePhase;
use crate::cluster::{ClusterState, Ticket};
use crate::core::{GameRngState, IdCounter, Result};
use crate::orders::{Order, OrderResult};
use crate::shop::ShopState;

/// Serializable session state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Order stream position.
    pub rng: GameRngState,
    /// Cluster stream position.
    pub cluster_rng: GameRngState,
    /// Order id counter.
    pub order_ids: IdCounter,
    /// Ticket id counter.
    pub ticket_ids: IdCounter,
    /// Live cluster.
    pub cluster: ClusterState,
    /// Upgrade levels.
    pub shop: ShopState,
    /// Phase at capture time.
    pub phase: GamePhase,
    /// Cash on hand.
    pub cash: u64,
    /// Round number.
    pub round: u32,
    /// Orders played this round.
    pub orders_completed: u32,
    /// Perfect orders this round.
    pub perfect_orders: u32,
    /// Ticket points.
    pub ticket_points: u64,
    /// Order on the clock.
    pub current_order: Option<Order>,
    /// Most recent order result.
    pub last_result: Option<OrderResult>,
    /// Ticket in play.
    pub current_ticket: Option<Ticket>,
}

impl SessionSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by [`SessionSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EngineConfig, EngineError};
    use crate::session::Session;

    #[test]
    fn test_restore_replays_the_same_orders() {
        let mut session = Session::new(9, EngineConfig::default()).unwrap();
        session.start_game().unwrap();
        session.timeout().unwrap();

        let bytes = session.snapshot().to_bytes().unwrap();

        session.advance().unwrap();
        let expected = session.current_order().unwrap().clone();
        let ticket = session.next_ticket().unwrap().clone();

        let mut other = Session::new(1234, EngineConfig::default()).unwrap();
        other.restore(SessionSnapshot::from_bytes(&bytes).unwrap());
        assert_eq!(other.phase(), GamePhase::Feedback);

        other.advance().unwrap();
        assert_eq!(other.current_order(), Some(&expected));
        assert_eq!(other.next_ticket().unwrap(), &ticket);
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        let err = SessionSnapshot::from_bytes(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, EngineError::Snapshot(_)));
    }
}
