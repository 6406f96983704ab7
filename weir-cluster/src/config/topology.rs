use serde::{Deserialize, Serialize};

use weir_core::endpoint::Endpoint;
use weir_core::error::Error;

/// Where discovery starts: a fixed single node, a DNS name standing in for
/// the whole cluster, or an explicit seed list probed in caller order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterTopologyConfig {
    Standalone(Endpoint),
    Dns(Endpoint),
    Seeds(Vec<Endpoint>),
}

impl ClusterTopologyConfig {
    /// Ordered candidates for one discovery pass. Seed order is the caller's
    /// order, never shuffled. A DNS name stays a single candidate; resolution
    /// to backing addresses happens at connect time.
    pub fn candidates(&self) -> Vec<Endpoint> {
        match self {
            ClusterTopologyConfig::Standalone(endpoint) | ClusterTopologyConfig::Dns(endpoint) => {
                vec![endpoint.clone()]
            }
            ClusterTopologyConfig::Seeds(seeds) => seeds.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        match self {
            ClusterTopologyConfig::Standalone(endpoint) | ClusterTopologyConfig::Dns(endpoint) => {
                endpoint.validate()
            }
            ClusterTopologyConfig::Seeds(seeds) => {
                if seeds.is_empty() {
                    return Err(Error::InvalidConfiguration("seed list is empty".to_string()));
                }
                for seed in seeds {
                    seed.validate()?;
                }
                Ok(())
            }
        }
    }
}

impl Default for ClusterTopologyConfig {
    fn default() -> Self {
        ClusterTopologyConfig::Standalone(Endpoint::new("127.0.0.1", 3113))
    }
}
