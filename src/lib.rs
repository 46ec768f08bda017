//! # rainmaker
//!
//! Rules engine for the Rain Maker infrastructure arcade game.
//!
//! ## Design Principles
//!
//! 1. **Injected Randomness**: Every generator takes a `GameRng`. The same
//!    seed deals the same orders, tickets and pod names.
//!
//! 2. **No Globals**: Id counters, the cluster and the economy live in a
//!    `Session`. Sessions never share state.
//!
//! 3. **Pure Scoring**: `score_order` and `apply_action` report a result and
//!    touch nothing but the cluster they are handed.
//!
//! ## Architecture
//!
//! - **Catalogs**: Components, customers and scenarios are static data
//!   loaded once and looked up by key.
//!
//! - **Persistent Data Structures**: The cluster uses `im-rs` vectors so a
//!   snapshot per action costs O(1).
//!
//! ## Modules
//!
//! - `core`: RNG, id counters, configuration, errors
//! - `catalog`: Component, customer and scenario catalogs
//! - `orders`: Order generation and scoring
//! - `cluster`: Simulated cluster, tickets and actions
//! - `shop`: Between-round upgrades
//! - `session`: Phase machine, economy and snapshots
//! - `terraform`: Cosmetic HCL preview

pub mod core;
pub mod catalog;
pub mod orders;
pub mod cluster;
pub mod shop;
pub mod session;
pub mod terraform;

// Re-export commonly used types
pub use crate::core::{EngineConfig, EngineError, GameRng, GameRngState, Result};

pub use crate::catalog::{
    ComponentCatalog, ComponentRecord, Customer, CustomerRoster, Requirement, Scenario,
    ScenarioBook, ScenarioTier,
};

pub use crate::orders::{
    resolve_submission, score_order, score_timeout, time_limit, Order, OrderGenerator,
    OrderResult, PlacedComponent, SubmittedComponent, Tier, UnlockFlags,
};

pub use crate::cluster::{
    apply_action, ActionOutcome, ActionResult, ClusterAction, ClusterMutator, ClusterState,
    Ticket, TicketGenerator, TicketKind, TicketTarget,
};

pub use crate::shop::{ShopState, UpgradeKind};

pub use crate::session::{GamePhase, RoundRating, RoundSummary, Session, SessionSnapshot};

pub use crate::terraform::{render_preview, TerraformPreview};
