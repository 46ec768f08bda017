//! Cluster ticket variant.
//!
//! Instead of building a stack, the player fixes a live Kubernetes-style
//! cluster one ticket at a time: scale a deployment or restart a pod.
//!
//! - `ClusterState`: deployments and pods, held in `im` vectors
//! - `ClusterMutator`: the read/mutate seam `apply_action` goes through
//! - `TicketGenerator`: picks a target from the live state
//! - `apply_action`: field-level validation, then the mutation

pub mod action;
pub mod mutator;
pub mod state;
pub mod ticket;

pub use action::{apply_action, ActionOutcome, ActionResult, ClusterAction};
pub use mutator::ClusterMutator;
pub use state::{ClusterState, Deployment, Pod, PodStatus};
pub use ticket::{Ticket, TicketGenerator, TicketKind, TicketTarget};
