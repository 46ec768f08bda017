//! Purchased upgrade levels and their effects.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::upgrade::UpgradeKind;
use crate::catalog::ComponentCatalog;
use crate::core::ShopError;
use crate::orders::{Order, PlacedComponent, UnlockFlags};

/// Seconds added to each order per time-bonus level.
pub const TIME_BONUS_STEP_SEC: u32 = 10;

/// Tip multiplier added per tip level.
pub const TIP_BONUS_STEP: f64 = 0.2;

/// Upgrade levels for one game. Reset when a new game starts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopState {
    /// 0..=3
    pub time_bonus_level: u8,
    /// 0..=3
    pub tip_multiplier_level: u8,
    /// 0..=2
    pub auto_complete_level: u8,
    /// Premium pool unlocked.
    pub premium_orders_unlocked: bool,
}

impl ShopState {
    /// Levels owned for an upgrade.
    #[must_use]
    pub fn level(&self, kind: UpgradeKind) -> u8 {
        match kind {
            UpgradeKind::TimeBonus => self.time_bonus_level,
            UpgradeKind::TipMultiplier => self.tip_multiplier_level,
            UpgradeKind::AutoComplete => self.auto_complete_level,
            UpgradeKind::PremiumOrders => u8::from(self.premium_orders_unlocked),
        }
    }

    /// Price of the next level, or `None` when maxed.
    #[must_use]
    pub fn next_cost(&self, kind: UpgradeKind) -> Option<u64> {
        let level = self.level(kind);
        (level < kind.max_level()).then(|| kind.cost_at(level))
    }

    /// Buy the next level of `kind`, debiting `cash`.
    ///
    /// Returns the price paid. Nothing changes on failure.
    pub fn purchase(&mut self, kind: UpgradeKind, cash: &mut u64) -> Result<u64, ShopError> {
        let level = self.level(kind);
        let cost = self.next_cost(kind).ok_or(ShopError::MaxLevel {
            upgrade: kind.name(),
            level,
        })?;
        if *cash < cost {
            return Err(ShopError::InsufficientFunds { cost, cash: *cash });
        }

        *cash -= cost;
        match kind {
            UpgradeKind::TimeBonus => self.time_bonus_level += 1,
            UpgradeKind::TipMultiplier => self.tip_multiplier_level += 1,
            UpgradeKind::AutoComplete => self.auto_complete_level += 1,
            UpgradeKind::PremiumOrders => self.premium_orders_unlocked = true,
        }
        info!(upgrade = kind.name(), level = self.level(kind), cost, "purchased upgrade");
        Ok(cost)
    }

    /// Seconds added to every generated order.
    #[must_use]
    pub fn time_bonus_sec(&self) -> u32 {
        u32::from(self.time_bonus_level) * TIME_BONUS_STEP_SEC
    }

    /// Bonus passed to the scorer's tip computation.
    #[must_use]
    pub fn tip_bonus(&self) -> f64 {
        f64::from(self.tip_multiplier_level) * TIP_BONUS_STEP
    }

    /// Generator flags implied by purchases.
    #[must_use]
    pub fn unlock_flags(&self) -> UnlockFlags {
        UnlockFlags {
            premium_orders: self.premium_orders_unlocked,
        }
    }

    /// Components pre-placed on a fresh order.
    ///
    /// Fills every required unit of the first `auto_complete_level`
    /// distinct required types. Types missing from the catalog are skipped.
    #[must_use]
    pub fn auto_complete(&self, order: &Order, catalog: &ComponentCatalog) -> Vec<PlacedComponent> {
        let mut placed = Vec::new();

        for component_type in order.required_types().take(usize::from(self.auto_complete_level)) {
            let Some(record) = catalog.get(component_type) else {
                continue;
            };
            let quantity: u32 = order
                .required
                .iter()
                .filter(|r| r.component_type == component_type)
                .map(|r| r.quantity)
                .sum();
            for _ in 0..quantity {
                let instance_id = format!("auto_{}_{}", order.order_id, placed.len());
                placed.push(PlacedComponent::new(instance_id, record.clone()));
            }
        }

        placed
    }
}
