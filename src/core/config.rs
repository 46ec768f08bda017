//! Engine configuration.
//!
//! Every tunable constant of the order generator, the scorer, the ticket
//! variant and the round structure lives here. Defaults reproduce the
//! shipped game; callers override individual values with the `with_*`
//! setters or load a partial JSON document (missing keys keep defaults).

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

/// Time-limit and selection parameters for order generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderTiming {
    /// Starting time limit before patience and complexity adjustments.
    pub base_time_sec: u32,

    /// Minimum playable time limit.
    pub floor_sec: u32,

    /// Patience value that yields no bonus or penalty.
    pub neutral_patience: u8,

    /// Seconds gained (or lost) per patience point away from neutral.
    pub patience_step_sec: u32,

    /// Seconds lost per requirement entry on the order.
    pub complexity_penalty_sec: u32,

    /// Chance of drawing from the premium pool once premium is unlocked.
    pub premium_chance: f64,

    /// Id prefix for generated orders.
    pub id_prefix: String,
}

impl Default for OrderTiming {
    fn default() -> Self {
        Self {
            base_time_sec: 60,
            floor_sec: 30,
            neutral_patience: 3,
            patience_step_sec: 10,
            complexity_penalty_sec: 2,
            premium_chance: 0.3,
            id_prefix: "order".to_string(),
        }
    }
}

/// Reward tier parameters for the scorer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    /// Share of the base reward paid for finishing with the full timer left.
    pub time_bonus_fraction: f64,

    /// Reward reduction per surplus component.
    pub over_provision_penalty: f64,

    /// Minimum accuracy (percent) that still earns partial payment.
    pub partial_threshold: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            time_bonus_fraction: 0.25,
            over_provision_penalty: 0.05,
            partial_threshold: 50,
        }
    }
}

/// Parameters for the cluster ticket variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketRules {
    /// Fixed time limit for every ticket.
    pub time_limit_sec: u32,

    /// Points for a correct action before the time bonus.
    pub base_points: u32,

    /// Points per second left on the timer.
    pub points_per_second: u32,

    /// Replica counts a scale ticket may ask for.
    pub replica_options: Vec<u32>,

    /// Chance a ticket is a scale ticket rather than a pod restart.
    pub scale_chance: f64,

    /// Id prefix for generated tickets.
    pub id_prefix: String,

    /// Namespace reported in cluster snapshots.
    pub namespace: String,
}

impl Default for TicketRules {
    fn default() -> Self {
        Self {
            time_limit_sec: 30,
            base_points: 100,
            points_per_second: 2,
            replica_options: vec![1, 2, 3, 4, 5],
            scale_chance: 0.5,
            id_prefix: "t".to_string(),
            namespace: "kuberia".to_string(),
        }
    }
}

/// Round structure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundRules {
    /// Orders played before the round ends.
    pub orders_per_round: u32,
}

impl Default for RoundRules {
    fn default() -> Self {
        Self { orders_per_round: 5 }
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Order generation.
    pub timing: OrderTiming,
    /// Order scoring.
    pub scoring: ScoringRules,
    /// Cluster tickets.
    pub tickets: TicketRules,
    /// Rounds.
    pub rounds: RoundRules,
}

impl EngineConfig {
    /// Parse a (possibly partial) JSON document and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        let probability = |name: &str, p: f64| {
            if (0.0..=1.0).contains(&p) {
                Ok(())
            } else {
                Err(EngineError::Config(format!("{name} must be within [0, 1], got {p}")))
            }
        };

        probability("timing.premium_chance", self.timing.premium_chance)?;
        probability("tickets.scale_chance", self.tickets.scale_chance)?;
        probability("scoring.time_bonus_fraction", self.scoring.time_bonus_fraction)?;
        probability("scoring.over_provision_penalty", self.scoring.over_provision_penalty)?;

        if self.timing.floor_sec == 0 {
            return Err(EngineError::Config("timing.floor_sec must be positive".into()));
        }
        if !(1..=100).contains(&self.scoring.partial_threshold) {
            return Err(EngineError::Config(
                "scoring.partial_threshold must be within [1, 100]".into(),
            ));
        }
        let mut distinct = self.tickets.replica_options.clone();
        distinct.sort_unstable();
        distinct.dedup();
        if distinct.len() < 2 {
            return Err(EngineError::Config(
                "tickets.replica_options needs at least two distinct counts".into(),
            ));
        }
        if self.tickets.replica_options.contains(&0) {
            return Err(EngineError::Config(
                "tickets.replica_options must be positive".into(),
            ));
        }
        if self.rounds.orders_per_round == 0 {
            return Err(EngineError::Config("rounds.orders_per_round must be positive".into()));
        }
        Ok(())
    }

    /// Set the premium draw chance.
    #[must_use]
    pub fn with_premium_chance(mut self, chance: f64) -> Self {
        self.timing.premium_chance = chance;
        self
    }

    /// Set the minimum order time limit.
    #[must_use]
    pub fn with_floor_sec(mut self, floor: u32) -> Self {
        self.timing.floor_sec = floor;
        self
    }

    /// Set the scale-vs-restart chance for tickets.
    #[must_use]
    pub fn with_scale_chance(mut self, chance: f64) -> Self {
        self.tickets.scale_chance = chance;
        self
    }

    /// Set the number of orders per round.
    #[must_use]
    pub fn with_orders_per_round(mut self, orders: u32) -> Self {
        self.rounds.orders_per_round = orders;
        self
    }
}
