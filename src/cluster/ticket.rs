//! Cluster tickets: single-action work items.
//!
//! A ticket asks for exactly one change to the live cluster, either a
//! scale to a new replica count or a pod restart. The generator reads the
//! cluster but never mutates it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::state::ClusterState;
use crate::core::{EngineError, GameRng, IdCounter, Result, TicketRules};

/// Which action a ticket asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketKind {
    /// Change a deployment's replica count.
    ScaleDeployment,
    /// Restart one pod.
    RestartPod,
}

/// What the player must hit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketTarget {
    /// Scale `deployment` to exactly `replicas`.
    Scale {
        /// Deployment name.
        deployment: String,
        /// Requested replica count (differs from the current one).
        replicas: u32,
    },
    /// Restart `pod`, owned by `deployment`.
    Restart {
        /// Owning deployment.
        deployment: String,
        /// Pod name at generation time.
        pod: String,
    },
}

/// A generated cluster ticket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// `t_NNN`.
    pub ticket_id: String,
    /// What must be done.
    pub target: TicketTarget,
    /// Display text.
    pub description: String,
    /// Seconds on the clock.
    pub time_limit_sec: u32,
}

impl Ticket {
    /// The ticket's action kind.
    #[must_use]
    pub fn kind(&self) -> TicketKind {
        match self.target {
            TicketTarget::Scale { .. } => TicketKind::ScaleDeployment,
            TicketTarget::Restart { .. } => TicketKind::RestartPod,
        }
    }
}

/// Generates tickets against a live cluster.
#[derive(Clone, Debug)]
pub struct TicketGenerator {
    rules: TicketRules,
    ids: IdCounter,
}

impl TicketGenerator {
    /// Create a generator with its own id counter.
    pub fn new(rules: TicketRules) -> Self {
        let ids = IdCounter::new(rules.id_prefix.clone());
        Self { rules, ids }
    }

    /// Generate the next ticket for the current cluster.
    ///
    /// Fails with `EmptyCatalog` when the cluster has no deployment to
    /// scale, or no pod to restart. The id counter only advances on success.
    pub fn generate(&mut self, rng: &mut GameRng, cluster: &ClusterState) -> Result<Ticket> {
        if cluster.is_empty() {
            return Err(EngineError::EmptyCatalog { pool: "deployments" });
        }

        let target = if rng.gen_bool(self.rules.scale_chance) {
            self.scale_target(rng, cluster)?
        } else {
            restart_target(rng, cluster)?
        };

        let description = match &target {
            TicketTarget::Scale { deployment, replicas } => {
                format!("Scale {deployment} to {replicas} replicas")
            }
            TicketTarget::Restart { pod, .. } => format!("Restart pod {pod}"),
        };

        let ticket = Ticket {
            ticket_id: self.ids.next_id(),
            target,
            description,
            time_limit_sec: self.rules.time_limit_sec,
        };
        debug!(ticket_id = %ticket.ticket_id, kind = ?ticket.kind(), "generated ticket");
        Ok(ticket)
    }

    fn scale_target(&self, rng: &mut GameRng, cluster: &ClusterState) -> Result<TicketTarget> {
        let index = rng.gen_range_usize(0..cluster.deployments.len());
        let deployment = cluster
            .deployments
            .get(index)
            .ok_or(EngineError::EmptyCatalog { pool: "deployments" })?;

        let options: Vec<u32> = self
            .rules
            .replica_options
            .iter()
            .copied()
            .filter(|&n| n != deployment.replicas)
            .collect();
        let replicas = *rng
            .choose(&options)
            .ok_or(EngineError::EmptyCatalog { pool: "replica options" })?;

        Ok(TicketTarget::Scale {
            deployment: deployment.name.clone(),
            replicas,
        })
    }

    /// Reset the id counter; the next ticket is `t_001`.
    pub fn reset_counter(&mut self) {
        self.ids.reset();
    }

    /// Tickets issued since the last reset.
    #[must_use]
    pub fn issued(&self) -> u32 {
        self.ids.issued()
    }

    /// Current id counter, for snapshots.
    #[must_use]
    pub fn counter(&self) -> &IdCounter {
        &self.ids
    }

    /// Replace the id counter, when restoring a snapshot.
    pub fn restore_counter(&mut self, ids: IdCounter) {
        self.ids = ids;
    }
}

// Only deployments that currently own pods are eligible.
fn restart_target(rng: &mut GameRng, cluster: &ClusterState) -> Result<TicketTarget> {
    let candidates: Vec<&str> = cluster
        .deployments
        .iter()
        .filter(|d| cluster.pods_of(&d.name).next().is_some())
        .map(|d| d.name.as_str())
        .collect();
    let deployment = *rng
        .choose(&candidates)
        .ok_or(EngineError::EmptyCatalog { pool: "pods" })?;

    let pods: Vec<&str> = cluster.pods_of(deployment).map(|p| p.name.as_str()).collect();
    let pod = *rng.choose(&pods).ok_or(EngineError::EmptyCatalog { pool: "pods" })?;

    Ok(TicketTarget::Restart {
        deployment: deployment.to_string(),
        pod: pod.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::{ClusterMutator, Deployment};

    fn setup() -> (ClusterState, GameRng) {
        let mut rng = GameRng::new(42);
        (ClusterState::initial("kuberia", &mut rng), rng)
    }

    fn rules(scale_chance: f64) -> TicketRules {
        TicketRules {
            scale_chance,
            ..TicketRules::default()
        }
    }

    #[test]
    fn test_scale_ticket_asks_for_a_change() {
        let (cluster, mut rng) = setup();
        let mut generator = TicketGenerator::new(rules(1.0));

        for _ in 0..50 {
            let ticket = generator.generate(&mut rng, &cluster).unwrap();
            let TicketTarget::Scale { deployment, replicas } = &ticket.target else {
                panic!("expected a scale ticket");
            };
            let current = cluster.deployment(deployment).unwrap().replicas;
            assert_ne!(*replicas, current);
            assert!((1..=5).contains(replicas));
            assert_eq!(ticket.description, format!("Scale {deployment} to {replicas} replicas"));
            assert_eq!(ticket.time_limit_sec, 30);
        }
    }

    #[test]
    fn test_restart_ticket_targets_a_live_pod() {
        let (cluster, mut rng) = setup();
        let mut generator = TicketGenerator::new(rules(0.0));

        for _ in 0..50 {
            let ticket = generator.generate(&mut rng, &cluster).unwrap();
            assert_eq!(ticket.kind(), TicketKind::RestartPod);
            let TicketTarget::Restart { deployment, pod } = &ticket.target else {
                panic!("expected a restart ticket");
            };
            assert_eq!(&cluster.find_pod(pod).unwrap().owner, deployment);
        }
    }

    #[test]
    fn test_ids_and_reset() {
        let (cluster, mut rng) = setup();
        let mut generator = TicketGenerator::new(TicketRules::default());

        assert_eq!(generator.generate(&mut rng, &cluster).unwrap().ticket_id, "t_001");
        assert_eq!(generator.generate(&mut rng, &cluster).unwrap().ticket_id, "t_002");
        generator.reset_counter();
        assert_eq!(generator.generate(&mut rng, &cluster).unwrap().ticket_id, "t_001");
    }

    #[test]
    fn test_empty_cluster() {
        let mut rng = GameRng::new(1);
        let empty = ClusterState::new("kuberia", Vec::new(), &mut rng);
        let mut generator = TicketGenerator::new(TicketRules::default());

        let err = generator.generate(&mut rng, &empty).unwrap_err();
        assert!(matches!(err, EngineError::EmptyCatalog { pool: "deployments" }));
        assert_eq!(generator.issued(), 0);
    }

    #[test]
    fn test_no_pods_to_restart() {
        let mut rng = GameRng::new(1);
        let idle = ClusterState::new("kuberia", vec![Deployment::new("batch", 0)], &mut rng);
        let mut generator = TicketGenerator::new(rules(0.0));

        let err = generator.generate(&mut rng, &idle).unwrap_err();
        assert!(matches!(err, EngineError::EmptyCatalog { pool: "pods" }));
    }
}
