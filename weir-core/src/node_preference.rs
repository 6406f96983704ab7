use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Which cluster role selection should land on. `Leader` is the default,
/// matching nodes that accept every operation.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodePreference {
    #[default]
    Leader,
    Follower,
    Random,
    ReadOnlyReplica,
}

impl NodePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodePreference::Leader => "leader",
            NodePreference::Follower => "follower",
            NodePreference::Random => "random",
            NodePreference::ReadOnlyReplica => "readOnlyReplica",
        }
    }
}

impl Display for NodePreference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
