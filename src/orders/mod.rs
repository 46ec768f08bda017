//! Order generation and scoring.
//!
//! The generator turns catalogs plus an injected `GameRng` into `Order`s;
//! the scorer compares a placed set against an order and returns an
//! `OrderResult`. Neither touches global state.

pub mod generator;
pub mod order;
pub mod scoring;

pub use generator::{time_limit, OrderGenerator};
pub use order::{
    resolve_submission, Order, PlacedComponent, ResolvedSubmission, SubmittedComponent,
    UnlockFlags,
};
pub use scoring::{score_order, score_timeout, OrderResult, Tier};
