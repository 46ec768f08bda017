//! Player actions against cluster tickets.
//!
//! Validation compares each field of the submitted action with the
//! ticket's target and reports which field was wrong. The cluster is
//! mutated only after every check has passed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::mutator::ClusterMutator;
use super::state::ClusterState;
use super::ticket::{Ticket, TicketTarget};
use crate::core::{GameRng, TicketRules};

/// What the player did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClusterAction {
    /// Set `deployment` to `replicas`.
    ScaleDeployment {
        /// Deployment the player selected.
        deployment: String,
        /// Replica count the player chose.
        replicas: u32,
    },
    /// Restart `pod`.
    RestartPod {
        /// Pod the player selected.
        pod: String,
    },
}

/// Field-level verdict on an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// Action matched and was applied.
    Applied,
    /// Scale action aimed at a different deployment.
    WrongDeployment,
    /// Right deployment, wrong replica count.
    WrongReplicaCount,
    /// Restart aimed at a live pod other than the target.
    WrongPod,
    /// The selected deployment or pod is not in the live cluster.
    TargetNotFound,
    /// A scale action on a restart ticket, or vice versa.
    KindMismatch,
}

impl ActionOutcome {
    fn message(self, action: &ClusterAction) -> String {
        match (self, action) {
            (Self::Applied, ClusterAction::ScaleDeployment { deployment, replicas }) => {
                format!("Scaled {deployment} to {replicas} replicas!")
            }
            (Self::Applied, ClusterAction::RestartPod { pod }) => format!("Restarted pod {pod}!"),
            (Self::WrongDeployment, _) => "Wrong deployment selected".to_string(),
            (Self::WrongReplicaCount, _) => "Wrong replica count".to_string(),
            (Self::WrongPod, _) => "Wrong pod selected".to_string(),
            (Self::TargetNotFound, ClusterAction::ScaleDeployment { .. }) => {
                "Deployment not found".to_string()
            }
            (Self::TargetNotFound, ClusterAction::RestartPod { .. }) => "Pod not found".to_string(),
            (Self::KindMismatch, _) => "Action type does not match ticket type".to_string(),
        }
    }
}

/// Result of applying an action, with the cluster as it stands afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    /// Whether the action matched the ticket.
    pub success: bool,
    /// Points earned; 0 on any mismatch.
    pub points: u64,
    /// Feedback line for the player.
    pub message: String,
    /// Field-level verdict.
    pub outcome: ActionOutcome,
    /// Cluster after the action.
    pub cluster: ClusterState,
}

/// Validate `action` against `ticket` and apply it to `cluster` on a match.
///
/// Correct actions earn `base_points + points_per_second * time_remaining`.
pub fn apply_action<M: ClusterMutator>(
    ticket: &Ticket,
    action: &ClusterAction,
    time_remaining: u32,
    rules: &TicketRules,
    cluster: &mut M,
    rng: &mut GameRng,
) -> ActionResult {
    let outcome = validate(ticket, action, cluster);

    let applied = outcome == ActionOutcome::Applied
        && match action {
            ClusterAction::ScaleDeployment { deployment, replicas } => {
                cluster.scale_deployment(deployment, *replicas, rng)
            }
            ClusterAction::RestartPod { pod } => cluster.restart_pod(pod, rng).is_some(),
        };
    // A mutator that refuses a validated change reports the target as gone.
    let outcome = if outcome == ActionOutcome::Applied && !applied {
        ActionOutcome::TargetNotFound
    } else {
        outcome
    };

    let points = if applied {
        u64::from(rules.base_points) + u64::from(rules.points_per_second) * u64::from(time_remaining)
    } else {
        0
    };

    debug!(ticket_id = %ticket.ticket_id, ?outcome, points, "applied action");

    ActionResult {
        success: applied,
        points,
        message: outcome.message(action),
        outcome,
        cluster: cluster.snapshot(),
    }
}

fn validate<M: ClusterMutator>(ticket: &Ticket, action: &ClusterAction, cluster: &M) -> ActionOutcome {
    match (&ticket.target, action) {
        (
            TicketTarget::Scale { deployment, replicas },
            ClusterAction::ScaleDeployment {
                deployment: chosen,
                replicas: chosen_replicas,
            },
        ) => {
            if chosen != deployment {
                ActionOutcome::WrongDeployment
            } else if chosen_replicas != replicas {
                ActionOutcome::WrongReplicaCount
            } else if !cluster.has_deployment(chosen) {
                ActionOutcome::TargetNotFound
            } else {
                ActionOutcome::Applied
            }
        }
        (TicketTarget::Restart { pod, .. }, ClusterAction::RestartPod { pod: chosen }) => {
            if !cluster.has_pod(chosen) {
                ActionOutcome::TargetNotFound
            } else if chosen != pod {
                ActionOutcome::WrongPod
            } else {
                ActionOutcome::Applied
            }
        }
        _ => ActionOutcome::KindMismatch,
    }
}
