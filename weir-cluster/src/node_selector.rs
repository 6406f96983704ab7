use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use tokio::select;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use weir_core::endpoint::Endpoint;
use weir_core::error::{Error, Result};
use weir_core::node_preference::NodePreference;

use crate::config::discovery::DiscoverySettings;
use crate::config::topology::ClusterTopologyConfig;
use crate::gossip::tcp_probe::TcpGossipProbe;
use crate::gossip::GossipProbe;
use crate::member::{MemberInfo, VNodeState};

/// Discovers the cluster by querying candidates in order and picks the node
/// a caller should connect to. Everything is fixed at construction, so one
/// selector serves any number of concurrent calls.
#[derive(Clone)]
pub struct NodeSelector {
    candidates: Vec<Endpoint>,
    settings: DiscoverySettings,
    probe: Arc<dyn GossipProbe>,
    shutdown: CancellationToken,
}

/// What selection resolved: the endpoint to dial and the gossip row that
/// backed the decision.
#[derive(Debug, Clone)]
pub struct SelectedNode {
    pub endpoint: Endpoint,
    pub member: MemberInfo,
}

enum DiscoveryOutcome {
    /// Member list of the first candidate that answered with one.
    Members(Vec<MemberInfo>),
    /// Every attempt ran out without a non-empty answer.
    Exhausted,
    /// Shutdown fired before any candidate answered.
    Cancelled,
}

impl NodeSelector {
    pub fn new(topology: &ClusterTopologyConfig, settings: DiscoverySettings) -> Result<Self> {
        Self::with_probe(topology, settings, Arc::new(TcpGossipProbe))
    }

    pub fn with_probe(
        topology: &ClusterTopologyConfig,
        settings: DiscoverySettings,
        probe: Arc<dyn GossipProbe>,
    ) -> Result<Self> {
        topology.validate()?;
        settings.validate()?;
        Ok(Self {
            candidates: topology.candidates(),
            settings,
            probe,
            shutdown: CancellationToken::new(),
        })
    }

    /// Cancels every in-flight and future discovery on this selector and its
    /// clones.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    pub fn is_shutdown(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    pub async fn select(&self, preference: NodePreference) -> Result<SelectedNode> {
        match self.discover().await {
            DiscoveryOutcome::Members(members) => {
                let member = Self::pick(&members, preference, &mut rand::thread_rng())
                    .ok_or(Error::NoMatchingNode(preference))?;
                debug!("selected {} for preference {}", member, preference);
                Ok(SelectedNode {
                    endpoint: member.http_end_point.clone(),
                    member: member.clone(),
                })
            }
            DiscoveryOutcome::Exhausted => Err(Error::ClusterUnavailable {
                attempts: self.settings.max_discovery_attempts,
            }),
            DiscoveryOutcome::Cancelled => Err(Error::Cancelled),
        }
    }

    /// Full member list from the first answering candidate, dead members
    /// included. Never fails: an unreachable cluster or a shutdown degrade to
    /// an empty list.
    pub async fn read_topology(&self) -> Vec<MemberInfo> {
        match self.discover().await {
            DiscoveryOutcome::Members(members) => members,
            DiscoveryOutcome::Exhausted | DiscoveryOutcome::Cancelled => {
                debug!("topology read degraded to an empty member list");
                Vec::new()
            }
        }
    }

    async fn discover(&self) -> DiscoveryOutcome {
        let attempts = self.settings.max_discovery_attempts;
        for attempt in 1..=attempts {
            for candidate in &self.candidates {
                if self.shutdown.is_cancelled() {
                    return DiscoveryOutcome::Cancelled;
                }
                let result = select! {
                    result = self.probe.probe(candidate, self.settings.gossip_timeout) => result,
                    _ = self.shutdown.cancelled() => return DiscoveryOutcome::Cancelled,
                };
                match result {
                    // first non-empty answer wins the attempt
                    Ok(members) if !members.is_empty() => {
                        debug!("gossip from {}: [{}]", candidate, members.iter().join(", "));
                        return DiscoveryOutcome::Members(members);
                    }
                    Ok(_) => {
                        debug!("{} answered with no members, trying next candidate", candidate);
                    }
                    Err(error) => {
                        debug!("{} probe failed: {}", candidate, error);
                    }
                }
            }
            if attempt < attempts {
                debug!(
                    "discovery attempt {}/{} found no usable topology, retrying in {:?}",
                    attempt, attempts, self.settings.discovery_interval
                );
                select! {
                    _ = tokio::time::sleep(self.settings.discovery_interval) => {}
                    _ = self.shutdown.cancelled() => return DiscoveryOutcome::Cancelled,
                }
            }
        }
        warn!("no candidate produced a topology after {} attempts", attempts);
        DiscoveryOutcome::Exhausted
    }

    fn pick<'a>(
        members: &'a [MemberInfo],
        preference: NodePreference,
        rng: &mut impl Rng,
    ) -> Option<&'a MemberInfo> {
        let eligible = members
            .iter()
            .filter(|member| member.is_alive)
            .filter(|member| match preference {
                NodePreference::Leader => member.state == VNodeState::Leader,
                NodePreference::Follower => member.state == VNodeState::Follower,
                NodePreference::ReadOnlyReplica => member.state == VNodeState::ReadOnlyReplica,
                NodePreference::Random => true,
            })
            .collect_vec();
        eligible.choose(rng).copied()
    }
}

impl Debug for NodeSelector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeSelector")
            .field("candidates", &self.candidates)
            .field("settings", &self.settings)
            .field("probe", &"..")
            .finish()
    }
}
