//! HCL text rendering.

use std::fmt::Write;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::orders::PlacedComponent;

/// Provider boilerplate at the top of every preview.
pub const PROVIDER_HEADER: &str = r#"terraform {
  required_providers {
    digitalocean = {
      source  = "digitalocean/digitalocean"
      version = "~> 2.0"
    }
  }
}

variable "do_token" {}

provider "digitalocean" {
  token = var.do_token
}
"#;

const INDENT: &str = "  ";

/// Rendered preview.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerraformPreview {
    /// HCL text.
    pub code: String,
    /// Number of `resource` blocks emitted.
    pub resource_count: usize,
    /// Sum of the placed components' monthly cost.
    pub monthly_cost: u64,
}

/// Render `placed` as HCL.
///
/// Each component becomes `resource "<terraform type>" "<type>_<n>"`, where
/// `<type>` is the component key with dashes replaced by underscores and
/// `n` counts from 1 per component type. Components without a Terraform
/// resource type only contribute to the cost.
#[must_use]
pub fn render_preview(placed: &[PlacedComponent]) -> TerraformPreview {
    let mut code = String::from(PROVIDER_HEADER);
    let mut seen: FxHashMap<&str, usize> = FxHashMap::default();
    let mut resource_count = 0;
    let mut monthly_cost = 0u64;

    for item in placed {
        let record = &item.component;
        monthly_cost += u64::from(record.monthly_cost);
        if record.terraform_resource.is_empty() {
            continue;
        }

        let n = seen.entry(record.component_type.as_str()).or_default();
        *n += 1;
        let label = format!("{}_{}", record.component_type.replace('-', "_"), n);

        code.push('\n');
        let _ = writeln!(code, "# {}", record.name);
        let _ = writeln!(code, "resource \"{}\" \"{label}\" {{", record.terraform_resource);
        let _ = writeln!(code, "{INDENT}name = \"{}\"", label.replace('_', "-"));
        if let Value::Object(body) = &record.terraform_config {
            write_body(&mut code, body, 1);
        }
        code.push_str("}\n");
        resource_count += 1;
    }

    let _ = write!(code, "\n# Estimated monthly cost: ${monthly_cost}\n");

    TerraformPreview {
        code,
        resource_count,
        monthly_cost,
    }
}

/// Attributes first, nested objects as blocks after them.
fn write_body(out: &mut String, body: &serde_json::Map<String, Value>, depth: usize) {
    let pad = INDENT.repeat(depth);

    for (key, value) in body.iter().filter(|(_, v)| !v.is_object()) {
        let _ = writeln!(out, "{pad}{key} = {}", inline(value));
    }
    for (key, value) in body {
        if let Value::Object(inner) = value {
            out.push('\n');
            let _ = writeln!(out, "{pad}{key} {{");
            write_body(out, inner, depth + 1);
            let _ = writeln!(out, "{pad}}}");
        }
    }
}

fn inline(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        Value::Array(items) => {
            let items: Vec<_> = items.iter().map(inline).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) => {
            let fields: Vec<_> = map
                .iter()
                .map(|(k, v)| format!("{k} = {}", inline(v)))
                .collect();
            format!("{{ {} }}", fields.join(", "))
        }
    }
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
