use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use weir_core::endpoint::Endpoint;

/// One node's row in a gossip response: who it is, what role it holds and
/// whether the reporting node considers it alive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberInfo {
    pub instance_id: Uuid,
    pub state: VNodeState,
    pub is_alive: bool,
    pub http_end_point: Endpoint,
    pub timestamp: f64,
}

impl MemberInfo {
    pub fn new(
        instance_id: Uuid,
        state: VNodeState,
        is_alive: bool,
        http_end_point: Endpoint,
        timestamp: f64,
    ) -> Self {
        Self {
            instance_id,
            state,
            is_alive,
            http_end_point,
            timestamp,
        }
    }
}

impl Display for MemberInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let liveness = if self.is_alive { "" } else { ", dead" };
        write!(f, "{} [{}{}]", self.http_end_point, self.state, liveness)
    }
}

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VNodeState {
    Leader,
    Follower,
    ReadOnlyReplica,
    Clone,
    CatchingUp,
    Manager,
    Initializing,
    PreReplica,
    PreLeader,
    PreReadOnlyReplica,
    ResigningLeader,
    DiscoverLeader,
    ReadOnlyLeaderless,
    ShuttingDown,
    Shutdown,
}

impl VNodeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            VNodeState::Leader => "leader",
            VNodeState::Follower => "follower",
            VNodeState::ReadOnlyReplica => "readOnlyReplica",
            VNodeState::Clone => "clone",
            VNodeState::CatchingUp => "catchingUp",
            VNodeState::Manager => "manager",
            VNodeState::Initializing => "initializing",
            VNodeState::PreReplica => "preReplica",
            VNodeState::PreLeader => "preLeader",
            VNodeState::PreReadOnlyReplica => "preReadOnlyReplica",
            VNodeState::ResigningLeader => "resigningLeader",
            VNodeState::DiscoverLeader => "discoverLeader",
            VNodeState::ReadOnlyLeaderless => "readOnlyLeaderless",
            VNodeState::ShuttingDown => "shuttingDown",
            VNodeState::Shutdown => "shutdown",
        }
    }
}

impl Display for VNodeState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
