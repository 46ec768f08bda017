//! Live cluster state for the ticket variant.
//!
//! Uses `im` persistent vectors so every action result can echo a full
//! snapshot without copying the pod list.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::mutator::ClusterMutator;
use crate::core::GameRng;

/// Length of the random suffix in pod names.
pub const POD_SUFFIX_LEN: usize = 5;

/// A deployment and its desired replica count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    /// Deployment name.
    pub name: String,
    /// Desired replicas.
    pub replicas: u32,
    /// Ready replicas. Scaling is instant, so this tracks `replicas`.
    pub ready_replicas: u32,
}

impl Deployment {
    /// A fully ready deployment.
    pub fn new(name: impl Into<String>, replicas: u32) -> Self {
        Self {
            name: name.into(),
            replicas,
            ready_replicas: replicas,
        }
    }
}

/// Pod lifecycle status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PodStatus {
    /// Serving.
    #[default]
    Running,
}

/// A pod owned by a deployment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pod {
    /// `<owner>-<suffix>`.
    pub name: String,
    /// Readiness probe result.
    pub ready: bool,
    /// Lifecycle status.
    pub status: PodStatus,
    /// Owning deployment name.
    pub owner: String,
}

impl Pod {
    fn spawn(owner: &str, rng: &mut GameRng) -> Self {
        Self {
            name: pod_name(owner, rng),
            ready: true,
            status: PodStatus::Running,
            owner: owner.to_string(),
        }
    }
}

fn pod_name(owner: &str, rng: &mut GameRng) -> String {
    format!("{owner}-{}", rng.base36_suffix(POD_SUFFIX_LEN))
}

/// The namespace, its deployments and their pods.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterState {
    /// Namespace shown in the UI.
    pub namespace: String,
    /// Deployments in creation order.
    pub deployments: Vector<Deployment>,
    /// Pods grouped by deployment, in deployment order.
    pub pods: Vector<Pod>,
}

impl ClusterState {
    /// Build a cluster from deployments, spawning one pod per replica.
    pub fn new(
        namespace: impl Into<String>,
        deployments: impl IntoIterator<Item = Deployment>,
        rng: &mut GameRng,
    ) -> Self {
        let deployments: Vector<Deployment> = deployments.into_iter().collect();
        let pods = spawn_pods(&deployments, rng);
        Self {
            namespace: namespace.into(),
            deployments,
            pods,
        }
    }

    /// The starting cluster: `smoothie-api` x2, `toppings-worker` x1,
    /// `order-queue` x2.
    pub fn initial(namespace: impl Into<String>, rng: &mut GameRng) -> Self {
        Self::new(namespace, initial_deployments(), rng)
    }

    /// Pods owned by a deployment.
    pub fn pods_of<'a>(&'a self, deployment: &'a str) -> impl Iterator<Item = &'a Pod> + 'a {
        self.pods.iter().filter(move |p| p.owner == deployment)
    }

    /// Whether there is anything a ticket could target.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deployments.is_empty()
    }
}

fn initial_deployments() -> [Deployment; 3] {
    [
        Deployment::new("smoothie-api", 2),
        Deployment::new("toppings-worker", 1),
        Deployment::new("order-queue", 2),
    ]
}

fn spawn_pods(deployments: &Vector<Deployment>, rng: &mut GameRng) -> Vector<Pod> {
    deployments
        .iter()
        .flat_map(|d| (0..d.replicas).map(move |_| d.name.as_str()))
        .map(|owner| Pod::spawn(owner, rng))
        .collect()
}

impl ClusterMutator for ClusterState {
    fn deployment(&self, name: &str) -> Option<&Deployment> {
        self.deployments.iter().find(|d| d.name == name)
    }

    fn find_pod(&self, name: &str) -> Option<&Pod> {
        self.pods.iter().find(|p| p.name == name)
    }

    fn scale_deployment(&mut self, name: &str, replicas: u32, rng: &mut GameRng) -> bool {
        let Some(index) = self.deployments.iter().position(|d| d.name == name) else {
            return false;
        };
        self.deployments.set(index, Deployment::new(name, replicas));
        // Every pod gets a fresh identity, matching a rolling replace.
        self.pods = spawn_pods(&self.deployments, rng);
        info!(deployment = name, replicas, "scaled deployment");
        true
    }

    fn restart_pod(&mut self, name: &str, rng: &mut GameRng) -> Option<String> {
        let index = self.pods.iter().position(|p| p.name == name)?;
        let pod = self.pods.get_mut(index)?;
        pod.name = pod_name(&pod.owner, rng);
        info!(old = name, new = %pod.name, "restarted pod");
        Some(pod.name.clone())
    }

    fn snapshot(&self) -> ClusterState {
        self.clone()
    }
}
