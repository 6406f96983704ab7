use std::time::Duration;

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use futures::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio_util::codec::Framed;

use weir_core::endpoint::Endpoint;

use crate::gossip::codec::{Packet, PacketCodec};
use crate::gossip::message::{ClusterInfo, GossipReadReq};
use crate::gossip::{GossipProbe, ProbeError};
use crate::member::MemberInfo;

/// Default probe: dials the endpoint, performs one framed request/response
/// exchange and drops the connection. Host names resolve at connect time, so
/// a DNS topology needs no special handling here.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpGossipProbe;

#[async_trait]
impl GossipProbe for TcpGossipProbe {
    async fn probe(
        &self,
        endpoint: &Endpoint,
        timeout: Duration,
    ) -> Result<Vec<MemberInfo>, ProbeError> {
        match tokio::time::timeout(timeout, Self::read_gossip(endpoint)).await {
            Ok(members) => members,
            Err(_) => Err(ProbeError::Timeout {
                endpoint: endpoint.clone(),
                timeout,
            }),
        }
    }
}

impl TcpGossipProbe {
    async fn read_gossip(endpoint: &Endpoint) -> Result<Vec<MemberInfo>, ProbeError> {
        let port = u16::try_from(endpoint.port)
            .map_err(|_| ProbeError::unreachable(endpoint, anyhow!("port {} out of range", endpoint.port)))?;
        let stream = TcpStream::connect((endpoint.host.as_str(), port))
            .await
            .map_err(|error| ProbeError::unreachable(endpoint, error))?;
        Self::exchange(stream)
            .await
            .map_err(|error| ProbeError::Unreachable {
                endpoint: endpoint.clone(),
                cause: error,
            })
    }

    async fn exchange<S>(stream: S) -> anyhow::Result<Vec<MemberInfo>>
    where
        S: AsyncRead + AsyncWrite + Unpin + Send,
    {
        let mut framed = Framed::new(stream, PacketCodec);
        let request = serde_json::to_vec(&GossipReadReq {}).context("encode gossip request")?;
        framed.send(Packet(request)).await.context("send gossip request")?;
        match framed.next().await {
            Some(Ok(packet)) => {
                let info = serde_json::from_slice::<ClusterInfo>(&packet)
                    .context("malformed gossip response")?;
                Ok(info.members)
            }
            Some(Err(error)) => Err(error.context("read gossip response")),
            None => Err(anyhow!("connection closed before gossip response")),
        }
    }
}
