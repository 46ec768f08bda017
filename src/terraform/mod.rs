//! Cosmetic Terraform preview of a build.
//!
//! The preview is display text only. Nothing here provisions anything, and
//! scoring never looks at it.

pub mod render;

pub use render::{render_preview, TerraformPreview, PROVIDER_HEADER};
