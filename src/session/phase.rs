//! Session phase machine.
//!
//! ```text
//! menu ──start──▶ playing ──submit/timeout──▶ feedback ──advance──▶ playing
//!                                                 │
//!                                                 └──advance (round over)──▶ round_end
//! round_end ──open_shop──▶ shop ──next_round──▶ playing
//! round_end ──next_round──▶ playing
//! round_end ──back_to_menu──▶ menu
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Result};

/// Where the session is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen; no order in play.
    #[default]
    Menu,
    /// An order is on the clock.
    Playing,
    /// Showing the last result.
    Feedback,
    /// Round finished; summary on screen.
    RoundEnd,
    /// Buying upgrades between rounds.
    Shop,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Menu => "menu",
            Self::Playing => "playing",
            Self::Feedback => "feedback",
            Self::RoundEnd => "round end",
            Self::Shop => "shop",
        };
        f.write_str(name)
    }
}

/// Something that may move the session to another phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseEvent {
    /// Begin a fresh game.
    StartGame,
    /// Player submitted a build.
    Submit,
    /// Timer hit zero.
    Timeout,
    /// Leave feedback.
    Advance {
        /// The round's order quota has been reached.
        round_over: bool,
    },
    /// Enter the shop.
    OpenShop,
    /// Buy an upgrade.
    Purchase,
    /// Start the next round.
    NextRound,
    /// Return to the title screen.
    BackToMenu,
}

impl PhaseEvent {
    /// Verb used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::StartGame => "start a game",
            Self::Submit => "submit",
            Self::Timeout => "time out",
            Self::Advance { .. } => "advance",
            Self::OpenShop => "open the shop",
            Self::Purchase => "purchase",
            Self::NextRound => "start the next round",
            Self::BackToMenu => "return to menu",
        }
    }
}

impl GamePhase {
    /// Phase after `event`, or `InvalidTransition` if `event` is not
    /// allowed here.
    pub fn next(self, event: PhaseEvent) -> Result<Self> {
        use GamePhase::*;
        use PhaseEvent as E;

        let next = match (self, event) {
            (Menu | RoundEnd, E::StartGame) => Playing,
            (Playing, E::Submit | E::Timeout) => Feedback,
            (Feedback, E::Advance { round_over: false }) => Playing,
            (Feedback, E::Advance { round_over: true }) => RoundEnd,
            (RoundEnd, E::OpenShop) => Shop,
            (Shop, E::Purchase) => Shop,
            (RoundEnd | Shop, E::NextRound) => Playing,
            (RoundEnd, E::BackToMenu) => Menu,
            (from, event) => {
                return Err(EngineError::InvalidTransition {
                    from,
                    action: event.name(),
                })
            }
        };
        Ok(next)
    }
}

/// End-of-round rating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundRating {
    /// Four or more perfect orders.
    Elite,
    /// Two or three perfect orders.
    Pro,
    /// Fewer than two.
    Rookie,
}

impl RoundRating {
    /// Rating for a number of perfect orders.
    #[must_use]
    pub const fn for_perfect_orders(perfect: u32) -> Self {
        if perfect >= 4 {
            Self::Elite
        } else if perfect >= 2 {
            Self::Pro
        } else {
            Self::Rookie
        }
    }

    /// Headline shown on the round summary.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Elite => "Storm Chaser Elite!",
            Self::Pro => "Rain Maker Pro!",
            Self::Rookie => "Keep Brewing!",
        }
    }
}

/// Numbers shown at the end of a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Round number, from 1.
    pub round: u32,
    /// Orders played this round.
    pub orders_completed: u32,
    /// Orders this round with 100% accuracy.
    pub perfect_orders: u32,
    /// Cash on hand.
    pub cash: u64,
    /// Rating derived from `perfect_orders`.
    pub rating: RoundRating,
}
