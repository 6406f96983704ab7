use anyhow::Context;
use tokio_util::bytes::{BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

/// One gossip frame: a u32 big-endian length prefix followed by the payload.
#[derive(Debug, Clone)]
pub struct Packet(pub Vec<u8>);

impl std::ops::Deref for Packet {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug)]
pub struct PacketCodec;

impl Encoder<Packet> for PacketCodec {
    type Error = anyhow::Error;

    fn encode(&mut self, item: Packet, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let len = u32::try_from(item.len()).context("packet too large")?;
        dst.put_u32(len);
        dst.put_slice(&item);
        Ok(())
    }
}

impl Decoder for PacketCodec {
    type Item = Packet;
    type Error = anyhow::Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let buf_len = src.len();
        if buf_len < 4 {
            return Ok(None);
        }
        let body_len = read_u32(src, 0) as usize;
        if body_len > buf_len - 4 {
            src.reserve(body_len);
            return Ok(None);
        }
        let frame = src.split_to(4 + body_len);
        Ok(Some(Packet(frame[4..].to_vec())))
    }
}

fn read_u32(src: &BytesMut, offset: usize) -> u32 {
    let mut u32_bytes = [0u8; 4];
    u32_bytes.copy_from_slice(&src[offset..(offset + 4)]);
    u32::from_be_bytes(u32_bytes)
}
