//! Plugin-message channel identifiers.
//!
//! The codec itself only sees flat payload bytes; it is the caller's job to
//! deliver inbound payloads whose channel matches one of these identifiers
//! and to send outbound payloads on one of them.

/// The legacy proxy messaging channel name.
pub const CHANNEL: &str = "BungeeCord";

/// The namespaced channel name used by modern protocol versions.
pub const CHANNEL_MODERN: &str = "bungeecord:main";

/// Returns true if `channel` is one of the two proxy messaging identifiers.
pub fn is_channel_identifier(channel: &str) -> bool {
    channel == CHANNEL || channel == CHANNEL_MODERN
}
