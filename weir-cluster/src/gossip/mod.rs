use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use weir_core::endpoint::Endpoint;

use crate::member::MemberInfo;

pub mod codec;
pub mod message;
pub mod tcp_probe;

/// One bounded gossip query against a single candidate node. Implementations
/// open a fresh connection per call; nothing is shared between probes.
#[async_trait]
pub trait GossipProbe: Send + Sync + 'static {
    async fn probe(
        &self,
        endpoint: &Endpoint,
        timeout: Duration,
    ) -> Result<Vec<MemberInfo>, ProbeError>;
}

/// Why a candidate produced no topology. Drives candidate iteration inside
/// discovery and is logged there, never handed to callers.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("gossip endpoint {endpoint} unreachable: {cause}")]
    Unreachable {
        endpoint: Endpoint,
        cause: anyhow::Error,
    },
    #[error("gossip endpoint {endpoint} timed out after {timeout:?}")]
    Timeout { endpoint: Endpoint, timeout: Duration },
}

impl ProbeError {
    pub fn unreachable(endpoint: &Endpoint, cause: impl Into<anyhow::Error>) -> Self {
        ProbeError::Unreachable {
            endpoint: endpoint.clone(),
            cause: cause.into(),
        }
    }
}
