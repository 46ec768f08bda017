//! Component records - the placeable infrastructure pieces.
//!
//! A `ComponentRecord` is static catalog data: loaded once, never mutated.
//! Orders refer to components by their `component_type` key
//! (`"droplet-general"`, `"postgres"`, ...).

use serde::{Deserialize, Serialize};

/// Broad grouping used by the palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentCategory {
    /// Droplets, Kubernetes, App Platform.
    Compute,
    /// Object and block storage.
    Storage,
    /// Managed databases and caches.
    Database,
    /// Load balancers, VPCs, IPs, CDN, firewalls.
    Networking,
    /// Registry, functions, monitoring.
    Other,
}

impl ComponentCategory {
    /// All categories in palette order.
    pub const ALL: [Self; 5] = [
        Self::Compute,
        Self::Storage,
        Self::Database,
        Self::Networking,
        Self::Other,
    ];
}

impl std::fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Compute => "compute",
            Self::Storage => "storage",
            Self::Database => "database",
            Self::Networking => "networking",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// Static component definition.
///
/// ## Example
///
/// ```
/// use rainmaker::catalog::{ComponentCategory, ComponentRecord};
///
/// let pg = ComponentRecord::new("postgres", "PostgreSQL", ComponentCategory::Database)
///     .with_monthly_cost(15)
///     .with_terraform("digitalocean_database_cluster", serde_json::json!({ "engine": "pg" }));
///
/// assert_eq!(pg.monthly_cost, 15);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    /// Catalog key referenced by orders and submissions.
    pub component_type: String,

    /// Display name.
    pub name: String,

    /// Display icon.
    pub icon: String,

    /// Palette grouping.
    pub category: ComponentCategory,

    /// Monthly cost in dollars.
    pub monthly_cost: u32,

    /// One-line spec shown under the name.
    pub description: String,

    /// Terraform resource type used by the preview.
    pub terraform_resource: String,

    /// Resource body used by the preview. Cosmetic only.
    pub terraform_config: serde_json::Value,
}

impl ComponentRecord {
    /// Create a record with empty display metadata.
    pub fn new(
        component_type: impl Into<String>,
        name: impl Into<String>,
        category: ComponentCategory,
    ) -> Self {
        Self {
            component_type: component_type.into(),
            name: name.into(),
            icon: String::new(),
            category,
            monthly_cost: 0,
            description: String::new(),
            terraform_resource: String::new(),
            terraform_config: serde_json::Value::Null,
        }
    }

    /// Set the icon.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Set the monthly cost.
    #[must_use]
    pub fn with_monthly_cost(mut self, cost: u32) -> Self {
        self.monthly_cost = cost;
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the Terraform resource type and body.
    #[must_use]
    pub fn with_terraform(mut self, resource: impl Into<String>, config: serde_json::Value) -> Self {
        self.terraform_resource = resource.into();
        self.terraform_config = config;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let record = ComponentRecord::new("vpc", "VPC", ComponentCategory::Networking)
            .with_icon("🔒")
            .with_description("Private network");

        assert_eq!(record.component_type, "vpc");
        assert_eq!(record.monthly_cost, 0);
        assert_eq!(record.description, "Private network");
        assert!(record.terraform_config.is_null());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(ComponentCategory::Networking.to_string(), "networking");
        assert_eq!(ComponentCategory::ALL.len(), 5);
    }
}
