//! Order and submission types.
//!
//! An `Order` is created by the generator, read once by the scorer and then
//! dropped. Player input arrives as `SubmittedComponent`s (bare type keys)
//! and is resolved against the catalog into `PlacedComponent`s.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::{ComponentCatalog, ComponentRecord, Customer, Requirements};

/// Flags that widen what the generator may draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockFlags {
    /// Premium scenarios become eligible.
    pub premium_orders: bool,
}

impl UnlockFlags {
    /// Flags with premium orders enabled.
    #[must_use]
    pub const fn premium() -> Self {
        Self { premium_orders: true }
    }
}

/// A generated work item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// `order_NNN`.
    pub order_id: String,
    /// Who asked.
    pub customer: Customer,
    /// Scenario key the order was drawn from.
    pub scenario_id: String,
    /// Scenario title.
    pub scenario: String,
    /// Canned request text followed by the customer's flavor text.
    pub description: String,
    /// Never empty; every quantity >= 1.
    pub required: Requirements,
    /// Seconds on the clock.
    pub time_limit_sec: u32,
    /// Payment for a correct build before bonuses.
    pub base_reward: u32,
}

impl Order {
    /// Sum of all requirement quantities.
    #[must_use]
    pub fn total_units(&self) -> u32 {
        self.required.iter().map(|r| r.quantity).sum()
    }

    /// Distinct required component types, in requirement order.
    pub fn required_types(&self) -> impl Iterator<Item = &str> {
        let mut seen = Vec::with_capacity(self.required.len());
        self.required.iter().filter_map(move |r| {
            if seen.contains(&r.component_type.as_str()) {
                None
            } else {
                seen.push(r.component_type.as_str());
                Some(r.component_type.as_str())
            }
        })
    }
}

/// Raw player input: one dropped token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedComponent {
    /// Unique per placement.
    pub instance_id: String,
    /// Catalog key the player dropped.
    pub component_type: String,
}

impl SubmittedComponent {
    /// Create a submitted token.
    pub fn new(instance_id: impl Into<String>, component_type: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            component_type: component_type.into(),
        }
    }
}

/// A token resolved against the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedComponent {
    /// Unique per placement.
    pub instance_id: String,
    /// Full catalog record.
    pub component: ComponentRecord,
}

impl PlacedComponent {
    /// Pair an instance id with a catalog record.
    pub fn new(instance_id: impl Into<String>, component: ComponentRecord) -> Self {
        Self {
            instance_id: instance_id.into(),
            component,
        }
    }

    /// The record's type key.
    #[must_use]
    pub fn component_type(&self) -> &str {
        &self.component.component_type
    }
}

/// Outcome of resolving a submission against the catalog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedSubmission {
    /// Tokens with a catalog entry, in submission order.
    pub placed: Vec<PlacedComponent>,
    /// Type keys with no catalog entry. Never scored.
    pub unrecognized: Vec<String>,
}

/// Resolve raw tokens into placed components.
///
/// Unknown keys are logged and set aside; they are never counted as extra.
pub fn resolve_submission(
    catalog: &ComponentCatalog,
    submitted: &[SubmittedComponent],
) -> ResolvedSubmission {
    let mut resolved = ResolvedSubmission::default();

    for item in submitted {
        match catalog.get(&item.component_type) {
            Some(record) => resolved
                .placed
                .push(PlacedComponent::new(item.instance_id.clone(), record.clone())),
            None => {
                warn!(
                    instance_id = %item.instance_id,
                    component_type = %item.component_type,
                    "dropping submitted component with no catalog entry"
                );
                resolved.unrecognized.push(item.component_type.clone());
            }
        }
    }

    resolved
}
