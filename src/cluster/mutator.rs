//! Seam between action validation and the live cluster.
//!
//! `apply_action` only reads the cluster through this trait and only
//! mutates it after an action has been validated. `ClusterState`
//! implements it; tests and alternative backends can supply their own.

use super::state::{ClusterState, Deployment, Pod};
use crate::core::GameRng;

/// Read and mutate access to live cluster state.
///
/// ## Implementation Notes
///
/// - `scale_deployment`: return `false` (and change nothing) for an unknown name
/// - `restart_pod`: return the pod's new name, or `None` for an unknown pod
/// - `snapshot`: an owned copy, echoed back in every action result
pub trait ClusterMutator {
    /// Look up a deployment by name.
    fn deployment(&self, name: &str) -> Option<&Deployment>;

    /// Look up a pod by name.
    fn find_pod(&self, name: &str) -> Option<&Pod>;

    /// Set a deployment's replica count.
    fn scale_deployment(&mut self, name: &str, replicas: u32, rng: &mut GameRng) -> bool;

    /// Give a pod a fresh identity.
    fn restart_pod(&mut self, name: &str, rng: &mut GameRng) -> Option<String>;

    /// Copy of the current state.
    fn snapshot(&self) -> ClusterState;

    // === Convenience Methods ===

    /// Whether a deployment exists.
    fn has_deployment(&self, name: &str) -> bool {
        self.deployment(name).is_some()
    }

    /// Whether a pod exists.
    fn has_pod(&self, name: &str) -> bool {
        self.find_pod(name).is_some()
    }
}
