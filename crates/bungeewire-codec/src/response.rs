//! The response side of the message catalog.

use std::num::NonZeroU16;

use bungeewire_buffer::PacketBuffer;
use uuid::Uuid;

use crate::error::{CodecError, Result};
use crate::wire::{self, ForwardData, PlayerCount};

/// A message sent from the proxy back to the server.
///
/// Range invariants live in the field types: the `Ip` port is a plain `u16`
/// (the proxy permits 0 there, and nowhere else), other ports are
/// `NonZeroU16`, and player counts are [`PlayerCount`]. The no-payload
/// variants (`Connect`, `Message`, ...) are acknowledgement placeholders
/// the default proxy never sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Placeholder acknowledgement for [`Request::Connect`].
    ///
    /// [`Request::Connect`]: crate::Request::Connect
    Connect,
    /// Placeholder acknowledgement for [`Request::ConnectOther`].
    ///
    /// [`Request::ConnectOther`]: crate::Request::ConnectOther
    ConnectOther,
    /// The sending player's address.
    Ip { ip: String, port: u16 },
    /// A named player's address.
    IpOther {
        player: String,
        ip: String,
        port: NonZeroU16,
    },
    /// A server's player count.
    PlayerCount {
        server: String,
        count: PlayerCount,
    },
    /// A server's player names.
    PlayerList {
        server: String,
        players: Vec<String>,
    },
    /// The names of all servers behind the proxy.
    GetServers { servers: Vec<String> },
    /// Placeholder acknowledgement for [`Request::Message`].
    ///
    /// [`Request::Message`]: crate::Request::Message
    Message,
    /// Placeholder acknowledgement for [`Request::MessageRaw`].
    ///
    /// [`Request::MessageRaw`]: crate::Request::MessageRaw
    MessageRaw,
    /// The name of the server the sending player is on.
    GetServer { server: String },
    /// The name of the server a named player is on.
    GetPlayerServer { player: String, server: String },
    /// The sending player's UUID.
    Uuid { uuid: Uuid },
    /// A named player's UUID.
    UuidOther { player: String, uuid: Uuid },
    /// A server's address as known to the proxy.
    ServerIp {
        server: String,
        ip: String,
        port: NonZeroU16,
    },
    /// Placeholder acknowledgement for [`Request::KickPlayer`].
    ///
    /// [`Request::KickPlayer`]: crate::Request::KickPlayer
    KickPlayer,
    /// Placeholder acknowledgement for [`Request::KickPlayerRaw`].
    ///
    /// [`Request::KickPlayerRaw`]: crate::Request::KickPlayerRaw
    KickPlayerRaw,
    /// A payload forwarded from another server. Unprefixed on the wire.
    Forward { channel: String, data: ForwardData },
    /// A payload forwarded to a specific player. Unprefixed on the wire,
    /// so inbound bytes always decode as [`Response::Forward`] instead.
    ForwardToPlayer { channel: String, data: ForwardData },
}

impl Response {
    /// The wire tag naming this variant.
    ///
    /// `Forward` and `ForwardToPlayer` have tags in the registry but never
    /// put them on the wire in the response direction.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Connect => "Connect",
            Self::ConnectOther => "ConnectOther",
            Self::Ip { .. } => "IP",
            Self::IpOther { .. } => "IPOther",
            Self::PlayerCount { .. } => "PlayerCount",
            Self::PlayerList { .. } => "PlayerList",
            Self::GetServers { .. } => "GetServers",
            Self::Message => "Message",
            Self::MessageRaw => "MessageRaw",
            Self::GetServer { .. } => "GetServer",
            Self::GetPlayerServer { .. } => "GetPlayerServer",
            Self::Uuid { .. } => "UUID",
            Self::UuidOther { .. } => "UUIDOther",
            Self::ServerIp { .. } => "ServerIP",
            Self::KickPlayer => "KickPlayer",
            Self::KickPlayerRaw => "KickPlayerRaw",
            Self::Forward { .. } => "Forward",
            Self::ForwardToPlayer { .. } => "ForwardToPlayer",
        }
    }

    /// Write this variant's fields, without the leading tag.
    pub(crate) fn write_fields(&self, buf: &mut PacketBuffer) -> Result<()> {
        match self {
            Self::Connect
            | Self::ConnectOther
            | Self::Message
            | Self::MessageRaw
            | Self::KickPlayer
            | Self::KickPlayerRaw => {}
            Self::Ip { ip, port } => {
                buf.write_string(ip)?;
                buf.write_i32(i32::from(*port));
            }
            Self::IpOther { player, ip, port } => {
                buf.write_string(player)?;
                buf.write_string(ip)?;
                buf.write_i32(i32::from(port.get()));
            }
            Self::PlayerCount { server, count } => {
                buf.write_string(server)?;
                // In range by construction, so the cast cannot truncate.
                buf.write_i32(count.get() as i32);
            }
            Self::PlayerList { server, players } => {
                buf.write_string(server)?;
                wire::write_csv(buf, players)?;
            }
            Self::GetServers { servers } => wire::write_csv(buf, servers)?,
            Self::GetServer { server } => buf.write_string(server)?,
            Self::GetPlayerServer { player, server } => {
                buf.write_string(player)?;
                buf.write_string(server)?;
            }
            Self::Uuid { uuid } => wire::write_uuid(buf, *uuid)?,
            Self::UuidOther { player, uuid } => {
                buf.write_string(player)?;
                wire::write_uuid(buf, *uuid)?;
            }
            Self::ServerIp { server, ip, port } => {
                buf.write_string(server)?;
                buf.write_string(ip)?;
                buf.write_u16(port.get());
            }
            Self::Forward { channel, data } | Self::ForwardToPlayer { channel, data } => {
                buf.write_string(channel)?;
                wire::write_blob(buf, data);
            }
        }
        Ok(())
    }
}

/// Decode `Forward` fields: channel string, then the payload blob.
///
/// Doubles as the fallback decoder for untagged response bytes.
pub(crate) fn read_forward(buf: &mut PacketBuffer) -> Result<Response> {
    Ok(Response::Forward {
        channel: buf.read_string()?,
        data: wire::read_blob(buf)?,
    })
}

/// Read an i32 port permitting 0 (the `IP` response asymmetry).
pub(crate) fn read_port(buf: &mut PacketBuffer) -> Result<u16> {
    let value = buf.read_i32()?;
    u16::try_from(value).map_err(|_| CodecError::InvalidPort { value })
}

/// Read an i32 port in (0, 65535].
pub(crate) fn read_nonzero_port(buf: &mut PacketBuffer) -> Result<NonZeroU16> {
    let value = buf.read_i32()?;
    u16::try_from(value)
        .ok()
        .and_then(NonZeroU16::new)
        .ok_or(CodecError::InvalidPort { value })
}

/// Read a u16 port in (0, 65535] (the `ServerIP` layout).
pub(crate) fn read_nonzero_port_u16(buf: &mut PacketBuffer) -> Result<NonZeroU16> {
    let value = buf.read_u16()?;
    NonZeroU16::new(value).ok_or(CodecError::InvalidPort {
        value: i32::from(value),
    })
}

/// Read an i32 player count, which must be positive.
pub(crate) fn read_count(buf: &mut PacketBuffer) -> Result<PlayerCount> {
    let value = buf.read_i32()?;
    u32::try_from(value)
        .map_err(|_| CodecError::InvalidCount {
            value: i64::from(value),
        })
        .and_then(PlayerCount::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_zero_allowed_only_for_ip() {
        let mut buf = PacketBuffer::new();
        buf.write_i32(0);
        buf.write_i32(0);
        assert_eq!(read_port(&mut buf).unwrap(), 0);
        let err = read_nonzero_port(&mut buf).unwrap_err();
        assert!(matches!(err, CodecError::InvalidPort { value: 0 }));
    }

    #[test]
    fn port_out_of_range_rejected() {
        let mut buf = PacketBuffer::new();
        buf.write_i32(65536);
        buf.write_i32(-1);
        assert!(matches!(
            read_port(&mut buf).unwrap_err(),
            CodecError::InvalidPort { value: 65536 }
        ));
        assert!(matches!(
            read_nonzero_port(&mut buf).unwrap_err(),
            CodecError::InvalidPort { value: -1 }
        ));
    }

    #[test]
    fn count_must_be_positive() {
        let mut buf = PacketBuffer::new();
        buf.write_i32(0);
        buf.write_i32(-5);
        buf.write_i32(100);
        assert!(matches!(
            read_count(&mut buf).unwrap_err(),
            CodecError::InvalidCount { value: 0 }
        ));
        assert!(matches!(
            read_count(&mut buf).unwrap_err(),
            CodecError::InvalidCount { value: -5 }
        ));
        assert_eq!(read_count(&mut buf).unwrap().get(), 100);
    }

    #[test]
    fn server_ip_port_is_two_bytes_on_the_wire() {
        let response = Response::ServerIp {
            server: "lobby".into(),
            ip: "10.0.0.1".into(),
            port: NonZeroU16::new(25565).unwrap(),
        };
        let mut buf = PacketBuffer::new();
        response.write_fields(&mut buf).unwrap();
        assert_eq!(buf.read_string().unwrap(), "lobby");
        assert_eq!(buf.read_string().unwrap(), "10.0.0.1");
        assert_eq!(buf.read_u16().unwrap(), 25565);
        assert!(buf.is_empty());
    }

    #[test]
    fn ip_port_is_four_bytes_on_the_wire() {
        let response = Response::Ip {
            ip: "127.0.0.1".into(),
            port: 11111,
        };
        let mut buf = PacketBuffer::new();
        response.write_fields(&mut buf).unwrap();
        assert_eq!(buf.read_string().unwrap(), "127.0.0.1");
        assert_eq!(buf.read_i32().unwrap(), 11111);
        assert!(buf.is_empty());
    }
}
