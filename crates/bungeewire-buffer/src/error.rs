/// Errors that can occur while reading from or writing to a [`PacketBuffer`].
///
/// [`PacketBuffer`]: crate::PacketBuffer
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    /// A read needed more bytes than the buffer has left.
    #[error("unexpected end of buffer ({needed} bytes needed, {remaining} remaining)")]
    UnexpectedEof { needed: usize, remaining: usize },

    /// The bytes of a string field are not valid UTF-8.
    #[error("string payload is not valid UTF-8")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// A string is too long for its u16 length prefix.
    #[error("string too long ({len} bytes, max 65535)")]
    StringTooLong { len: usize },
}

pub type Result<T> = std::result::Result<T, BufferError>;
