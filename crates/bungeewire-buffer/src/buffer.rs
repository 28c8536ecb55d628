use bytes::{BufMut, BytesMut};

use crate::error::{BufferError, Result};

const INITIAL_CAPACITY: usize = 256;

/// Maximum byte length of a length-prefixed string (u16 prefix).
pub const MAX_STRING_LEN: usize = u16::MAX as usize;

/// An owned byte buffer with append-writes and an independent read index.
///
/// All multi-byte integers are big-endian, matching the upstream proxy
/// protocol. Strings are encoded as a u16 big-endian byte length followed
/// by UTF-8 bytes (the `DataOutput.writeUTF` layout).
///
/// The read index can be saved with [`read_index`](Self::read_index) and
/// restored with [`set_read_index`](Self::set_read_index), which is what
/// speculative decoders use to rewind after a failed parse attempt.
///
/// Not safe for concurrent use; construct one per encode/decode call.
#[derive(Debug, Default, Clone)]
pub struct PacketBuffer {
    data: BytesMut,
    read: usize,
}

impl PacketBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Create an empty buffer with a given initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: BytesMut::with_capacity(capacity),
            read: 0,
        }
    }

    /// Create a buffer holding a copy of `bytes`, read index at the start.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self {
            data: BytesMut::from(bytes),
            read: 0,
        }
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.read
    }

    /// True if every written byte has been read.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Current read index.
    pub fn read_index(&self) -> usize {
        self.read
    }

    /// Restore the read index to a previously saved position.
    ///
    /// Indices past the written length are clamped to the end.
    pub fn set_read_index(&mut self, index: usize) {
        self.read = index.min(self.data.len());
    }

    /// The full written contents, regardless of read index.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return the full written contents.
    pub fn into_vec(self) -> Vec<u8> {
        self.data.to_vec()
    }

    pub fn write_u8(&mut self, value: u8) {
        self.data.put_u8(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.data.put_u16(value);
    }

    pub fn write_i32(&mut self, value: i32) {
        self.data.put_i32(value);
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.data.put_slice(bytes);
    }

    /// Write a u16-length-prefixed UTF-8 string.
    pub fn write_string(&mut self, value: &str) -> Result<()> {
        let bytes = value.as_bytes();
        if bytes.len() > MAX_STRING_LEN {
            return Err(BufferError::StringTooLong { len: bytes.len() });
        }
        self.data.put_u16(bytes.len() as u16);
        self.data.put_slice(bytes);
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let bytes = self.take(1)?;
        Ok(bytes[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.take(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let bytes = self.take(4)?;
        Ok(i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read exactly `len` raw bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        Ok(self.take(len)?.to_vec())
    }

    /// Read a u16-length-prefixed UTF-8 string.
    pub fn read_string(&mut self) -> Result<String> {
        let len = self.read_u16()? as usize;
        let bytes = self.take(len)?;
        let value = std::str::from_utf8(bytes)?;
        Ok(value.to_owned())
    }

    fn take(&mut self, len: usize) -> Result<&[u8]> {
        let remaining = self.remaining();
        if remaining < len {
            return Err(BufferError::UnexpectedEof {
                needed: len,
                remaining,
            });
        }
        let start = self.read;
        self.read += len;
        Ok(&self.data[start..self.read])
    }
}
