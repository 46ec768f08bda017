//! Catalog registries: components, customers and scenarios.
//!
//! All three are built once at startup and then only read. Lookups that can
//! miss return `Option`; callers decide whether a miss is an error.

use rustc_hash::FxHashMap;
use tracing::warn;

use super::component::{ComponentCategory, ComponentRecord};
use super::customer::Customer;
use super::scenario::{Scenario, ScenarioTier};
use crate::core::{EngineError, Result};

/// Registry of component records keyed by `component_type`.
///
/// ## Example
///
/// ```
/// use rainmaker::catalog::{ComponentCatalog, ComponentCategory, ComponentRecord};
///
/// let mut catalog = ComponentCatalog::new();
/// catalog.register(ComponentRecord::new("cdn", "CDN", ComponentCategory::Networking)).unwrap();
///
/// assert!(catalog.get("cdn").is_some());
/// assert!(catalog.get("mainframe").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ComponentCatalog {
    records: FxHashMap<String, ComponentRecord>,
    /// Registration order, for stable iteration.
    order: Vec<String>,
}

impl ComponentCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component record.
    ///
    /// Fails if the type key is already taken.
    pub fn register(&mut self, record: ComponentRecord) -> Result<()> {
        if self.records.contains_key(&record.component_type) {
            return Err(EngineError::DuplicateEntry {
                kind: "component",
                key: record.component_type,
            });
        }
        self.order.push(record.component_type.clone());
        self.records.insert(record.component_type.clone(), record);
        Ok(())
    }

    /// Look up a record by type key.
    #[must_use]
    pub fn get(&self, component_type: &str) -> Option<&ComponentRecord> {
        self.records.get(component_type)
    }

    /// Look up a record, failing with `UnresolvableComponent` on a miss.
    pub fn resolve(&self, component_type: &str) -> Result<&ComponentRecord> {
        self.get(component_type)
            .ok_or_else(|| EngineError::UnresolvableComponent(component_type.to_string()))
    }

    /// Check if a type key is registered.
    #[must_use]
    pub fn contains(&self, component_type: &str) -> bool {
        self.records.contains_key(component_type)
    }

    /// Get the number of registered components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentRecord> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Records in one palette category, in registration order.
    pub fn by_category(&self, category: ComponentCategory) -> impl Iterator<Item = &ComponentRecord> {
        self.iter().filter(move |r| r.category == category)
    }

    /// Check every scenario only references registered components.
    ///
    /// Returns the offending `(scenario id, component type)` pairs and logs
    /// each one at `warn`.
    #[must_use]
    pub fn dangling_requirements<'a>(&self, scenarios: &'a ScenarioBook) -> Vec<(&'a str, &'a str)> {
        let dangling: Vec<_> = scenarios
            .iter()
            .flat_map(|s| {
                s.requirements
                    .iter()
                    .filter(|r| !self.contains(&r.component_type))
                    .map(move |r| (s.id.as_str(), r.component_type.as_str()))
            })
            .collect();

        for (scenario, component) in &dangling {
            warn!(scenario, component, "scenario requires a component missing from the catalog");
        }
        dangling
    }
}

/// The customers orders are placed by.
#[derive(Clone, Debug, Default)]
pub struct CustomerRoster {
    customers: Vec<Customer>,
}

impl CustomerRoster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a customer. Ids must be unique.
    pub fn register(&mut self, customer: Customer) -> Result<()> {
        if self.get(&customer.id).is_some() {
            return Err(EngineError::DuplicateEntry {
                kind: "customer",
                key: customer.id,
            });
        }
        self.customers.push(customer);
        Ok(())
    }

    /// Look up a customer by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// All customers in registration order.
    #[must_use]
    pub fn as_slice(&self) -> &[Customer] {
        &self.customers
    }

    /// Get the number of customers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Check if the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

/// Scenario pools, split by tier.
#[derive(Clone, Debug, Default)]
pub struct ScenarioBook {
    standard: Vec<Scenario>,
    premium: Vec<Scenario>,
}

impl ScenarioBook {
    /// Create an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scenario to the pool matching its tier.
    ///
    /// Rejects duplicate ids and scenarios that could never be played
    /// (no descriptions, no requirements, or a zero quantity).
    pub fn register(&mut self, scenario: Scenario) -> Result<()> {
        if self.by_id(&scenario.id).is_some() {
            return Err(EngineError::DuplicateEntry {
                kind: "scenario",
                key: scenario.id,
            });
        }
        if !scenario.is_playable() {
            return Err(EngineError::InvalidEntry {
                kind: "scenario",
                key: scenario.id,
            });
        }
        match scenario.tier {
            ScenarioTier::Standard => self.standard.push(scenario),
            ScenarioTier::Premium => self.premium.push(scenario),
        }
        Ok(())
    }

    /// Scenarios in one pool.
    #[must_use]
    pub fn pool(&self, tier: ScenarioTier) -> &[Scenario] {
        match tier {
            ScenarioTier::Standard => &self.standard,
            ScenarioTier::Premium => &self.premium,
        }
    }

    /// Find a scenario in either pool.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&Scenario> {
        self.iter().find(|s| s.id == id)
    }

    /// Iterate over standard then premium scenarios.
    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.standard.iter().chain(self.premium.iter())
    }

    /// Total scenarios across both pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.standard.len() + self.premium.len()
    }

    /// Check if both pools are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(key: &str, category: ComponentCategory) -> ComponentRecord {
        ComponentRecord::new(key, key.to_uppercase(), category)
    }

    #[test]
    fn test_register_and_get() {
        let mut catalog = ComponentCatalog::new();
        catalog.register(record("redis", ComponentCategory::Database)).unwrap();

        assert_eq!(catalog.get("redis").unwrap().name, "REDIS");
        assert!(catalog.get("oracle").is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_duplicate_component_rejected() {
        let mut catalog = ComponentCatalog::new();
        catalog.register(record("redis", ComponentCategory::Database)).unwrap();

        let err = catalog.register(record("redis", ComponentCategory::Other)).unwrap_err();
        assert!(matches!(err, EngineError::DuplicateEntry { kind: "component", .. }));
    }

    #[test]
    fn test_resolve_miss() {
        let catalog = ComponentCatalog::new();
        let err = catalog.resolve("mainframe").unwrap_err();
        assert!(matches!(err, EngineError::UnresolvableComponent(ref k) if k == "mainframe"));
    }

    #[test]
    fn test_iteration_keeps_registration_order() {
        let mut catalog = ComponentCatalog::new();
        for key in ["spaces", "cdn", "postgres", "vpc"] {
            let category = if key == "postgres" {
                ComponentCategory::Database
            } else {
                ComponentCategory::Networking
            };
            catalog.register(record(key, category)).unwrap();
        }

        let keys: Vec<_> = catalog.iter().map(|r| r.component_type.as_str()).collect();
        assert_eq!(keys, vec!["spaces", "cdn", "postgres", "vpc"]);

        let networking: Vec<_> = catalog
            .by_category(ComponentCategory::Networking)
            .map(|r| r.component_type.as_str())
            .collect();
        assert_eq!(networking, vec!["spaces", "cdn", "vpc"]);
    }

    #[test]
    fn test_roster_duplicates() {
        let mut roster = CustomerRoster::new();
        roster.register(Customer::new("meta", "Meta")).unwrap();
        assert!(roster.register(Customer::new("meta", "Meta again")).is_err());
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get("meta").unwrap().name, "Meta");
    }

    #[test]
    fn test_book_pools() {
        let mut book = ScenarioBook::new();
        book.register(Scenario::new("a", "A", 100).with_description("x").requires("cdn", 1))
            .unwrap();
        book.register(
            Scenario::new("b", "B", 900)
                .premium()
                .with_description("y")
                .requires("cdn", 3),
        )
        .unwrap();

        assert_eq!(book.pool(ScenarioTier::Standard).len(), 1);
        assert_eq!(book.pool(ScenarioTier::Premium).len(), 1);
        assert_eq!(book.by_id("b").unwrap().base_reward, 900);
        assert!(book.register(Scenario::new("c", "C", 1)).is_err());
    }

    #[test]
    fn test_book_rejection_reasons() {
        let mut book = ScenarioBook::new();
        book.register(Scenario::new("a", "A", 100).with_description("x").requires("cdn", 1))
            .unwrap();

        let err = book
            .register(Scenario::new("a", "A again", 100).with_description("x").requires("cdn", 1))
            .unwrap_err();
        assert!(matches!(err, EngineError::DuplicateEntry { kind: "scenario", .. }));

        let err = book
            .register(Scenario::new("z", "Zero", 100).with_description("x").requires("cdn", 0))
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidEntry { kind: "scenario", ref key } if key == "z"));
        assert_eq!(err.to_string(), "unplayable scenario entry: z");

        let err = book.register(Scenario::new("q", "Quiet", 100).requires("cdn", 1)).unwrap_err();
        assert!(matches!(err, EngineError::InvalidEntry { .. }));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_dangling_requirements() {
        let mut catalog = ComponentCatalog::new();
        catalog.register(record("cdn", ComponentCategory::Networking)).unwrap();

        let mut book = ScenarioBook::new();
        book.register(
            Scenario::new("a", "A", 100)
                .with_description("x")
                .requires("cdn", 1)
                .requires("quantum-link", 1),
        )
        .unwrap();

        assert_eq!(catalog.dangling_requirements(&book), vec![("a", "quantum-link")]);
    }
}
