//! The tag registry: one row per catalog variant.
//!
//! This is the single source of truth mapping wire tags to decoders and
//! back. The table is static; the name index is built once on first lookup.
//! There is no runtime registration — the catalog is closed.

use std::collections::HashMap;
use std::sync::OnceLock;

use bungeewire_buffer::PacketBuffer;

use crate::error::Result;
use crate::request::Request;
use crate::response::{self, Response};
use crate::wire;

type RequestDecoder = fn(&mut PacketBuffer) -> Result<Request>;
type ResponseDecoder = fn(&mut PacketBuffer) -> Result<Response>;

/// One catalog variant's registry row.
pub(crate) struct TagEntry {
    /// The canonical ASCII tag written/read on the wire.
    pub name: &'static str,
    /// Field decoder for the request form. Every tag is a valid request.
    pub request: RequestDecoder,
    /// Field decoder for the response form, if the default proxy ever sends
    /// one. Tags without a decoder fall through to the untagged-Forward
    /// path when they show up in response position.
    pub response: Option<ResponseDecoder>,
    /// True for the two variants whose response form omits the tag.
    pub unprefixed_response: bool,
}

pub(crate) static ENTRIES: &[TagEntry] = &[
    TagEntry {
        name: "Connect",
        request: |buf| {
            Ok(Request::Connect {
                server: buf.read_string()?,
            })
        },
        response: None,
        unprefixed_response: false,
    },
    TagEntry {
        name: "ConnectOther",
        request: |buf| {
            Ok(Request::ConnectOther {
                player: buf.read_string()?,
                server: buf.read_string()?,
            })
        },
        response: None,
        unprefixed_response: false,
    },
    TagEntry {
        name: "IP",
        request: |_| Ok(Request::Ip),
        response: Some(|buf| {
            Ok(Response::Ip {
                ip: buf.read_string()?,
                port: response::read_port(buf)?,
            })
        }),
        unprefixed_response: false,
    },
    TagEntry {
        name: "IPOther",
        request: |buf| {
            Ok(Request::IpOther {
                player: buf.read_string()?,
            })
        },
        response: Some(|buf| {
            Ok(Response::IpOther {
                player: buf.read_string()?,
                ip: buf.read_string()?,
                port: response::read_nonzero_port(buf)?,
            })
        }),
        unprefixed_response: false,
    },
    TagEntry {
        name: "PlayerCount",
        request: |buf| {
            Ok(Request::PlayerCount {
                server: buf.read_string()?,
            })
        },
        response: Some(|buf| {
            Ok(Response::PlayerCount {
                server: buf.read_string()?,
                count: response::read_count(buf)?,
            })
        }),
        unprefixed_response: false,
    },
    TagEntry {
        name: "PlayerList",
        request: |buf| {
            Ok(Request::PlayerList {
                server: buf.read_string()?,
            })
        },
        response: Some(|buf| {
            Ok(Response::PlayerList {
                server: buf.read_string()?,
                players: wire::read_csv(buf)?,
            })
        }),
        unprefixed_response: false,
    },
    TagEntry {
        name: "GetServers",
        request: |_| Ok(Request::GetServers),
        response: Some(|buf| {
            Ok(Response::GetServers {
                servers: wire::read_csv(buf)?,
            })
        }),
        unprefixed_response: false,
    },
    TagEntry {
        name: "Message",
        request: |buf| {
            Ok(Request::Message {
                player: buf.read_string()?,
                message: buf.read_string()?,
            })
        },
        response: None,
        unprefixed_response: false,
    },
    TagEntry {
        name: "MessageRaw",
        request: |buf| {
            Ok(Request::MessageRaw {
                player: buf.read_string()?,
                message: buf.read_string()?,
            })
        },
        response: None,
        unprefixed_response: false,
    },
    TagEntry {
        name: "GetServer",
        request: |_| Ok(Request::GetServer),
        response: Some(|buf| {
            Ok(Response::GetServer {
                server: buf.read_string()?,
            })
        }),
        unprefixed_response: false,
    },
    TagEntry {
        name: "GetPlayerServer",
        request: |buf| {
            Ok(Request::GetPlayerServer {
                player: buf.read_string()?,
            })
        },
        response: Some(|buf| {
            Ok(Response::GetPlayerServer {
                player: buf.read_string()?,
                server: buf.read_string()?,
            })
        }),
        unprefixed_response: false,
    },
    TagEntry {
        name: "UUID",
        request: |_| Ok(Request::Uuid),
        response: Some(|buf| {
            Ok(Response::Uuid {
                uuid: wire::read_uuid(buf)?,
            })
        }),
        unprefixed_response: false,
    },
    TagEntry {
        name: "UUIDOther",
        request: |buf| {
            Ok(Request::UuidOther {
                player: buf.read_string()?,
            })
        },
        response: Some(|buf| {
            Ok(Response::UuidOther {
                player: buf.read_string()?,
                uuid: wire::read_uuid(buf)?,
            })
        }),
        unprefixed_response: false,
    },
    TagEntry {
        name: "ServerIP",
        request: |buf| {
            Ok(Request::ServerIp {
                server: buf.read_string()?,
            })
        },
        response: Some(|buf| {
            Ok(Response::ServerIp {
                server: buf.read_string()?,
                ip: buf.read_string()?,
                port: response::read_nonzero_port_u16(buf)?,
            })
        }),
        unprefixed_response: false,
    },
    TagEntry {
        name: "KickPlayer",
        request: |buf| {
            Ok(Request::KickPlayer {
                player: buf.read_string()?,
                reason: buf.read_string()?,
            })
        },
        response: None,
        unprefixed_response: false,
    },
    TagEntry {
        name: "KickPlayerRaw",
        request: |buf| {
            Ok(Request::KickPlayerRaw {
                player: buf.read_string()?,
                reason: buf.read_string()?,
            })
        },
        response: None,
        unprefixed_response: false,
    },
    TagEntry {
        name: "Forward",
        request: |buf| {
            Ok(Request::Forward {
                server: buf.read_string()?,
                channel: buf.read_string()?,
                data: wire::read_blob(buf)?,
            })
        },
        response: Some(response::read_forward),
        unprefixed_response: true,
    },
    TagEntry {
        name: "ForwardToPlayer",
        request: |buf| {
            Ok(Request::ForwardToPlayer {
                player: buf.read_string()?,
                channel: buf.read_string()?,
                data: wire::read_blob(buf)?,
            })
        },
        // Both Forward rows share one response decoder: the two layouts
        // are identical and the proxy never tags either, so anything that
        // lands here is a Forward.
        response: Some(response::read_forward),
        unprefixed_response: true,
    },
];

/// Look up a registry row by exact tag match.
pub(crate) fn lookup(tag: &str) -> Option<&'static TagEntry> {
    static INDEX: OnceLock<HashMap<&'static str, &'static TagEntry>> = OnceLock::new();
    INDEX
        .get_or_init(|| ENTRIES.iter().map(|entry| (entry.name, entry)).collect())
        .get(tag)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_all_eighteen_tags() {
        assert_eq!(ENTRIES.len(), 18);
        let mut names: Vec<_> = ENTRIES.iter().map(|e| e.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 18, "tag names must be unique");
    }

    #[test]
    fn lookup_is_exact_match() {
        assert!(lookup("GetPlayerServer").is_some());
        assert!(lookup("getplayerserver").is_none());
        assert!(lookup("GetPlayerServer ").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn only_forward_variants_are_unprefixed() {
        for entry in ENTRIES {
            let expected = entry.name == "Forward" || entry.name == "ForwardToPlayer";
            assert_eq!(entry.unprefixed_response, expected, "{}", entry.name);
        }
    }

    #[test]
    fn ack_tags_have_no_response_decoder() {
        for name in [
            "Connect",
            "ConnectOther",
            "Message",
            "MessageRaw",
            "KickPlayer",
            "KickPlayerRaw",
        ] {
            assert!(lookup(name).unwrap().response.is_none(), "{name}");
        }
    }
}
