//! Order scenarios - the templates orders are drawn from.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Requirement lists are short; seven entries covers every shipped scenario.
pub type Requirements = SmallVec<[Requirement; 8]>;

/// One line of an order: a component type and how many of it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Requirement {
    /// Catalog key.
    pub component_type: String,
    /// Always >= 1.
    pub quantity: u32,
}

impl Requirement {
    /// Create a requirement line.
    pub fn new(component_type: impl Into<String>, quantity: u32) -> Self {
        Self {
            component_type: component_type.into(),
            quantity,
        }
    }
}

/// Which pool a scenario belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioTier {
    /// Always eligible.
    #[default]
    Standard,
    /// Eligible only once premium orders are unlocked.
    Premium,
}

/// Static scenario definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Stable key (`"web-app"`).
    pub id: String,
    /// Display title (`"Web Application Stack"`).
    pub title: String,
    /// Canned request texts; one is picked per order.
    pub descriptions: Vec<String>,
    /// What the customer wants built.
    pub requirements: Requirements,
    /// Payment for a correct build before bonuses.
    pub base_reward: u32,
    /// Pool membership.
    pub tier: ScenarioTier,
}

impl Scenario {
    /// Create a standard scenario with no descriptions or requirements yet.
    pub fn new(id: impl Into<String>, title: impl Into<String>, base_reward: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            descriptions: Vec::new(),
            requirements: Requirements::new(),
            base_reward,
            tier: ScenarioTier::Standard,
        }
    }

    /// Move the scenario into the premium pool.
    #[must_use]
    pub fn premium(mut self) -> Self {
        self.tier = ScenarioTier::Premium;
        self
    }

    /// Add a canned description.
    #[must_use]
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.descriptions.push(text.into());
        self
    }

    /// Add a requirement line.
    #[must_use]
    pub fn requires(mut self, component_type: impl Into<String>, quantity: u32) -> Self {
        self.requirements.push(Requirement::new(component_type, quantity));
        self
    }

    /// Sum of all requirement quantities.
    #[must_use]
    pub fn total_units(&self) -> u32 {
        self.requirements.iter().map(|r| r.quantity).sum()
    }

    /// A scenario is playable when it has text and every line asks for something.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        !self.descriptions.is_empty()
            && !self.requirements.is_empty()
            && self.requirements.iter().all(|r| r.quantity >= 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_totals() {
        let scenario = Scenario::new("static-site", "Static Website with CDN", 200)
            .with_description("Simple marketing site with global delivery.")
            .requires("spaces", 1)
            .requires("cdn", 1)
            .requires("floating-ip", 1);

        assert_eq!(scenario.tier, ScenarioTier::Standard);
        assert_eq!(scenario.total_units(), 3);
        assert!(scenario.is_playable());
    }

    #[test]
    fn test_unplayable_scenarios() {
        let no_text = Scenario::new("a", "A", 100).requires("cdn", 1);
        assert!(!no_text.is_playable());

        let no_lines = Scenario::new("b", "B", 100).with_description("x");
        assert!(!no_lines.is_playable());

        let zero = Scenario::new("c", "C", 100).with_description("x").requires("cdn", 0);
        assert!(!zero.is_playable());
    }
}
