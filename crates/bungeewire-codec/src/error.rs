use bungeewire_buffer::BufferError;

/// Errors that can occur while encoding or decoding proxy messages.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The underlying buffer ran out of bytes or held malformed data.
    #[error("buffer error: {0}")]
    Buffer(#[from] BufferError),

    /// A tag string with no entry in the tag registry.
    #[error("unknown message tag {tag:?}")]
    UnknownTag { tag: String },

    /// Unconsumed bytes after a structurally complete decode.
    #[error("message not fully read ({remaining} bytes left over)")]
    TrailingBytes { remaining: usize },

    /// A compact UUID field that is not exactly 32 hex characters.
    #[error("malformed compact UUID {input:?} (expected 32 hex chars)")]
    MalformedUuid { input: String },

    /// A wire port value outside the range the variant permits.
    #[error("port {value} out of range")]
    InvalidPort { value: i32 },

    /// A player count outside [1, `i32::MAX`].
    #[error("player count {value} out of range")]
    InvalidCount { value: i64 },

    /// A forwarded payload larger than the u16 length prefix allows.
    #[error("forward payload too large ({len} bytes, max {max})")]
    PayloadTooLarge { len: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, CodecError>;
