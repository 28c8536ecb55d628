//! Sequential byte cursor for plugin-message payloads.
//!
//! [`PacketBuffer`] is the IO primitive the codec layer reads and writes
//! through: big-endian integers, u16-length-prefixed UTF-8 strings, raw
//! bytes, and an explicit read index that can be saved and restored for
//! speculative parsing.

pub mod buffer;
pub mod error;

pub use buffer::{PacketBuffer, MAX_STRING_LEN};
pub use error::{BufferError, Result};
