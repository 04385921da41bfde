use std::io::{Cursor, Write};
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use crate::common::enums::codec_error::CodecError;
use crate::common::structs::compact_peer::{CompactPeer, COMPACT_PEER_SIZE};

impl CompactPeer {
    pub fn new(ip: Ipv4Addr, port: u16) -> CompactPeer
    {
        CompactPeer { ip, port }
    }

    /// Returns `None` for IPv6 addresses, which have no compact form.
    pub fn from_socket_addr(addr: SocketAddr) -> Option<CompactPeer>
    {
        match addr {
            SocketAddr::V4(v4) => Some(CompactPeer::from(v4)),
            SocketAddr::V6(_) => None
        }
    }

    pub fn encode(&self) -> [u8; COMPACT_PEER_SIZE]
    {
        let mut out = [0u8; COMPACT_PEER_SIZE];
        out[..4].copy_from_slice(&self.ip.octets());
        out[4..].copy_from_slice(&self.port.to_be_bytes());
        out
    }

    pub fn write(&self, bytes: &mut impl Write) -> Result<(), CodecError>
    {
        bytes.write_u32::<NetworkEndian>(u32::from(self.ip))?;
        bytes.write_u16::<NetworkEndian>(self.port)?;
        Ok(())
    }

    pub fn decode(bytes: &[u8]) -> Result<CompactPeer, CodecError>
    {
        if bytes.len() != COMPACT_PEER_SIZE {
            return Err(CodecError::InvalidLength(bytes.len()));
        }
        let mut cursor = Cursor::new(bytes);
        let ip = Ipv4Addr::from(cursor.read_u32::<NetworkEndian>()?);
        let port = cursor.read_u16::<NetworkEndian>()?;
        Ok(CompactPeer { ip, port })
    }

    pub fn encode_list(peers: &[CompactPeer]) -> Vec<u8>
    {
        let mut out = Vec::with_capacity(peers.len() * COMPACT_PEER_SIZE);
        for peer in peers {
            out.extend_from_slice(&peer.encode());
        }
        out
    }

    pub fn decode_list(bytes: &[u8]) -> Result<Vec<CompactPeer>, CodecError>
    {
        if bytes.len() % COMPACT_PEER_SIZE != 0 {
            return Err(CodecError::InvalidLength(bytes.len()));
        }
        bytes.chunks_exact(COMPACT_PEER_SIZE).map(CompactPeer::decode).collect()
    }
}

impl From<SocketAddrV4> for CompactPeer {
    fn from(addr: SocketAddrV4) -> Self {
        CompactPeer { ip: *addr.ip(), port: addr.port() }
    }
}

impl From<CompactPeer> for SocketAddr {
    fn from(peer: CompactPeer) -> Self {
        SocketAddr::V4(SocketAddrV4::new(peer.ip, peer.port))
    }
}
