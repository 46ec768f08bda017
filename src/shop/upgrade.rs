//! Upgrade definitions and pricing.

use serde::{Deserialize, Serialize};

/// Price growth per level already owned.
pub const COST_GROWTH: f64 = 1.5;

/// Purchasable upgrades.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeKind {
    /// +10 seconds on every order per level.
    TimeBonus,
    /// +0.2 tip multiplier per level.
    TipMultiplier,
    /// Pre-places one more required component type per level.
    AutoComplete,
    /// Unlocks the premium scenario pool.
    PremiumOrders,
}

impl UpgradeKind {
    /// Every upgrade, in shop order.
    pub const ALL: [Self; 4] = [
        Self::TimeBonus,
        Self::TipMultiplier,
        Self::AutoComplete,
        Self::PremiumOrders,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TimeBonus => "Extra Time",
            Self::TipMultiplier => "Charm School",
            Self::AutoComplete => "Smart Assistant",
            Self::PremiumOrders => "Premium Orders",
        }
    }

    /// One-line effect summary.
    #[must_use]
    pub const fn effect(self) -> &'static str {
        match self {
            Self::TimeBonus => "+10 seconds per level",
            Self::TipMultiplier => "+20% tip bonus per level",
            Self::AutoComplete => "Auto-place components",
            Self::PremiumOrders => "High-reward challenges",
        }
    }

    /// Price of the first level.
    #[must_use]
    pub const fn base_cost(self) -> u64 {
        match self {
            Self::TimeBonus => 300,
            Self::TipMultiplier => 400,
            Self::AutoComplete => 600,
            Self::PremiumOrders => 800,
        }
    }

    /// Highest purchasable level.
    #[must_use]
    pub const fn max_level(self) -> u8 {
        match self {
            Self::TimeBonus | Self::TipMultiplier => 3,
            Self::AutoComplete => 2,
            Self::PremiumOrders => 1,
        }
    }

    /// Price of the next level when `owned` levels are already bought:
    /// `floor(base * 1.5^owned)`.
    #[must_use]
    pub fn cost_at(self, owned: u8) -> u64 {
        (self.base_cost() as f64 * COST_GROWTH.powi(i32::from(owned))).floor() as u64
    }
}

impl std::fmt::Display for UpgradeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
