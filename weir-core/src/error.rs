use thiserror::Error;

use crate::node_preference::NodePreference;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no alive cluster member matches preference {0}")]
    NoMatchingNode(NodePreference),
    #[error("cluster is unavailable, discovery gave up after {attempts} attempts")]
    ClusterUnavailable { attempts: u16 },
    #[error("invalid cluster configuration: {0}")]
    InvalidConfiguration(String),
    #[error("discovery cancelled, the client is shutting down")]
    Cancelled,
}
