//! Codec for the BungeeCord proxy plugin-messaging protocol.
//!
//! A closed catalog of request/response message shapes exchanged as opaque
//! byte payloads over a plugin-message channel. This crate turns typed
//! [`Request`]/[`Response`] values into payload bytes and back:
//!
//! ```
//! use bungeewire_codec::{decode_response, encode_request, Request};
//!
//! let payload = encode_request(&Request::GetPlayerServer {
//!     player: "Alice".into(),
//! })
//! .unwrap();
//! // hand `payload` to the plugin-message send path...
//! ```
//!
//! Transport is out of scope: callers frame payloads in their host
//! protocol's plugin-message envelope and route inbound payloads here only
//! when the channel matches [`is_channel_identifier`].

pub mod channel;
pub mod codec;
pub mod error;
mod registry;
pub mod request;
pub mod response;
pub mod wire;

pub use channel::{is_channel_identifier, CHANNEL, CHANNEL_MODERN};
pub use codec::{
    decode_request, decode_response, encode_request, encode_response, read_request, read_response,
    write_request, write_response,
};
pub use error::{CodecError, Result};
pub use request::{Request, ALL, ONLINE};
pub use response::Response;
pub use wire::{ForwardData, PlayerCount};
