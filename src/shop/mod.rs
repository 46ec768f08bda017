//! Between-round upgrade shop.
//!
//! `UpgradeKind` defines prices and caps; `ShopState` tracks what the
//! player owns and turns it into generator flags, extra order time, a tip
//! bonus for the scorer and pre-placed components.

pub mod state;
pub mod upgrade;

pub use state::{ShopState, TIME_BONUS_STEP_SEC, TIP_BONUS_STEP};
pub use upgrade::UpgradeKind;
