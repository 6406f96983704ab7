use serde::{Deserialize, Serialize};

use crate::member::MemberInfo;

/// Asks a node for its current view of the cluster. Carries no fields; the
/// answering node replies with [`ClusterInfo`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GossipReadReq {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterInfo {
    pub members: Vec<MemberInfo>,
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use weir_core::endpoint::Endpoint;

    use crate::gossip::message::{ClusterInfo, GossipReadReq};
    use crate::member::{MemberInfo, VNodeState};

    #[test]
    fn test_request_is_an_empty_object() -> anyhow::Result<()> {
        assert_eq!(serde_json::to_string(&GossipReadReq {})?, "{}");
        Ok(())
    }

    #[test]
    fn test_cluster_info_wire_shape() -> anyhow::Result<()> {
        let info = ClusterInfo {
            members: vec![MemberInfo::new(
                Uuid::new_v4(),
                VNodeState::Leader,
                true,
                Endpoint::new("10.0.0.1", 3113),
                1_700_000_000.0,
            )],
        };
        let json = serde_json::to_string(&info)?;
        assert!(json.starts_with(r#"{"members":["#));
        let decoded = serde_json::from_str::<ClusterInfo>(&json)?;
        assert_eq!(decoded.members, info.members);
        Ok(())
    }
}
