//! Customers placing orders.

use serde::{Deserialize, Serialize};

/// Immutable customer profile.
///
/// `patience` (1-5) stretches or shrinks the order timer; `tip_multiplier`
/// (>= 1.0) sets the tip paid on perfect orders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Stable key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display logo.
    pub logo: String,
    /// Brand color.
    pub color: String,
    /// 1 (impatient) to 5 (patient).
    pub patience: u8,
    /// 1.0 means no tip.
    pub tip_multiplier: f64,
    /// Flavor text appended to the order description.
    pub personality: String,
}

impl Customer {
    /// Create a customer with neutral patience, no tip and no flavor text.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            logo: String::new(),
            color: String::new(),
            patience: 3,
            tip_multiplier: 1.0,
            personality: String::new(),
        }
    }

    /// Set patience.
    #[must_use]
    pub fn with_patience(mut self, patience: u8) -> Self {
        self.patience = patience;
        self
    }

    /// Set the tip multiplier.
    #[must_use]
    pub fn with_tip_multiplier(mut self, multiplier: f64) -> Self {
        self.tip_multiplier = multiplier;
        self
    }

    /// Set logo and brand color.
    #[must_use]
    pub fn with_branding(mut self, logo: impl Into<String>, color: impl Into<String>) -> Self {
        self.logo = logo.into();
        self.color = color.into();
        self
    }

    /// Set the flavor text.
    #[must_use]
    pub fn with_personality(mut self, personality: impl Into<String>) -> Self {
        self.personality = personality.into();
        self
    }
}
