//! The request side of the message catalog.

use bungeewire_buffer::PacketBuffer;

use crate::error::Result;
use crate::wire::{self, ForwardData};

/// Sentinel server name addressing every server behind the proxy.
pub const ALL: &str = "ALL";

/// Sentinel server name addressing every server with at least one player.
pub const ONLINE: &str = "ONLINE";

/// A message sent from the server to the proxy.
///
/// The catalog is closed: the proxy understands exactly these eighteen
/// shapes and nothing else. `ALL`/`ONLINE` sentinels in server-name fields
/// are ordinary strings here; their meaning is a proxy convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Move the sending player to another server.
    Connect { server: String },
    /// Move a named player to another server.
    ConnectOther { player: String, server: String },
    /// Ask for the sending player's IP address and port.
    Ip,
    /// Ask for a named player's IP address and port.
    IpOther { player: String },
    /// Ask for a server's player count (`ALL`/`ONLINE` supported).
    PlayerCount { server: String },
    /// Ask for a server's player list (`ALL`/`ONLINE` supported).
    PlayerList { server: String },
    /// Ask for the names of all servers behind the proxy.
    GetServers,
    /// Send a chat message to a named player.
    Message { player: String, message: String },
    /// Send a JSON-formatted chat message to a named player.
    MessageRaw { player: String, message: String },
    /// Ask for the name of the server the sending player is on.
    GetServer,
    /// Ask for the name of the server a named player is on.
    GetPlayerServer { player: String },
    /// Ask for the sending player's UUID.
    Uuid,
    /// Ask for a named player's UUID.
    UuidOther { player: String },
    /// Ask for a server's address as known to the proxy.
    ServerIp { server: String },
    /// Kick a named player with a plain-text reason.
    KickPlayer { player: String, reason: String },
    /// Kick a named player with a JSON-formatted reason.
    KickPlayerRaw { player: String, reason: String },
    /// Forward an opaque payload to another server's listeners.
    Forward {
        server: String,
        channel: String,
        data: ForwardData,
    },
    /// Forward an opaque payload to a named player's server.
    ForwardToPlayer {
        player: String,
        channel: String,
        data: ForwardData,
    },
}

impl Request {
    /// A [`Request::PlayerCount`] for every server behind the proxy.
    pub fn player_count_all() -> Self {
        Self::PlayerCount { server: ALL.into() }
    }

    /// A [`Request::PlayerList`] for every server behind the proxy.
    pub fn player_list_all() -> Self {
        Self::PlayerList { server: ALL.into() }
    }

    /// A [`Request::Message`] to every player on every server.
    pub fn message_all(message: impl Into<String>) -> Self {
        Self::Message {
            player: ALL.into(),
            message: message.into(),
        }
    }

    /// A [`Request::Forward`] to every server except the sender's.
    pub fn forward_all(channel: impl Into<String>, data: ForwardData) -> Self {
        Self::Forward {
            server: ALL.into(),
            channel: channel.into(),
            data,
        }
    }

    /// A [`Request::Forward`] to every non-empty server except the sender's.
    pub fn forward_online(channel: impl Into<String>, data: ForwardData) -> Self {
        Self::Forward {
            server: ONLINE.into(),
            channel: channel.into(),
            data,
        }
    }

    /// The wire tag naming this variant.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Connect { .. } => "Connect",
            Self::ConnectOther { .. } => "ConnectOther",
            Self::Ip => "IP",
            Self::IpOther { .. } => "IPOther",
            Self::PlayerCount { .. } => "PlayerCount",
            Self::PlayerList { .. } => "PlayerList",
            Self::GetServers => "GetServers",
            Self::Message { .. } => "Message",
            Self::MessageRaw { .. } => "MessageRaw",
            Self::GetServer => "GetServer",
            Self::GetPlayerServer { .. } => "GetPlayerServer",
            Self::Uuid => "UUID",
            Self::UuidOther { .. } => "UUIDOther",
            Self::ServerIp { .. } => "ServerIP",
            Self::KickPlayer { .. } => "KickPlayer",
            Self::KickPlayerRaw { .. } => "KickPlayerRaw",
            Self::Forward { .. } => "Forward",
            Self::ForwardToPlayer { .. } => "ForwardToPlayer",
        }
    }

    /// Write this variant's fields, without the leading tag.
    pub(crate) fn write_fields(&self, buf: &mut PacketBuffer) -> Result<()> {
        match self {
            Self::Ip | Self::GetServers | Self::GetServer | Self::Uuid => {}
            Self::Connect { server }
            | Self::PlayerCount { server }
            | Self::PlayerList { server }
            | Self::ServerIp { server } => buf.write_string(server)?,
            Self::IpOther { player }
            | Self::GetPlayerServer { player }
            | Self::UuidOther { player } => buf.write_string(player)?,
            Self::ConnectOther { player, server } => {
                buf.write_string(player)?;
                buf.write_string(server)?;
            }
            Self::Message { player, message } | Self::MessageRaw { player, message } => {
                buf.write_string(player)?;
                buf.write_string(message)?;
            }
            Self::KickPlayer { player, reason } | Self::KickPlayerRaw { player, reason } => {
                buf.write_string(player)?;
                buf.write_string(reason)?;
            }
            Self::Forward {
                server,
                channel,
                data,
            } => {
                buf.write_string(server)?;
                buf.write_string(channel)?;
                wire::write_blob(buf, data);
            }
            Self::ForwardToPlayer {
                player,
                channel,
                data,
            } => {
                buf.write_string(player)?;
                buf.write_string(channel)?;
                wire::write_blob(buf, data);
            }
        }
        Ok(())
    }
}
