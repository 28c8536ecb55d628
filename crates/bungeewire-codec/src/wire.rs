//! Primitive value encodings shared by the message catalog.
//!
//! Three field encodings the proxy protocol layers on top of plain strings:
//! comma-joined string lists, compacted 32-hex UUIDs, and u16-length-capped
//! byte blobs.

use std::num::NonZeroU32;

use bungeewire_buffer::PacketBuffer;
use uuid::Uuid;

use crate::error::{CodecError, Result};

/// A positive player count that fits the protocol's i32 wire field.
///
/// The wire carries counts as a signed 32-bit integer, so the valid range
/// is [1, `i32::MAX`]; enforcing it here, at construction, keeps the
/// encoder infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerCount(NonZeroU32);

impl PlayerCount {
    /// Largest count the wire can carry.
    pub const MAX: u32 = i32::MAX as u32;

    /// Validate a count.
    ///
    /// Fails with [`CodecError::InvalidCount`] when `count` is 0 or larger
    /// than [`MAX`](Self::MAX).
    pub fn new(count: u32) -> Result<Self> {
        match NonZeroU32::new(count) {
            Some(count) if count.get() <= Self::MAX => Ok(Self(count)),
            _ => Err(CodecError::InvalidCount {
                value: i64::from(count),
            }),
        }
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

/// An owned forwarded payload, capped at 65535 bytes.
///
/// The cap comes from the u16 length prefix on the wire; it is enforced
/// here, at construction, so the encoder never has to reject a value. The
/// input is always copied and the internal buffer is never handed out
/// mutably.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardData(Vec<u8>);

impl ForwardData {
    /// Maximum payload length in bytes.
    pub const MAX_LEN: usize = u16::MAX as usize;

    /// Copy `data` into an owned payload.
    ///
    /// Fails with [`CodecError::PayloadTooLarge`] when `data` exceeds
    /// [`MAX_LEN`](Self::MAX_LEN).
    pub fn new(data: impl Into<Vec<u8>>) -> Result<Self> {
        let data = data.into();
        if data.len() > Self::MAX_LEN {
            return Err(CodecError::PayloadTooLarge {
                len: data.len(),
                max: Self::MAX_LEN,
            });
        }
        Ok(Self(data))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for ForwardData {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for ForwardData {
    type Error = CodecError;

    fn try_from(data: &[u8]) -> Result<Self> {
        Self::new(data)
    }
}

impl TryFrom<Vec<u8>> for ForwardData {
    type Error = CodecError;

    fn try_from(data: Vec<u8>) -> Result<Self> {
        Self::new(data)
    }
}

/// Write a string list as a single comma-joined string.
pub(crate) fn write_csv(buf: &mut PacketBuffer, items: &[String]) -> Result<()> {
    buf.write_string(&items.join(","))?;
    Ok(())
}

/// Read a comma-joined string back into a list.
///
/// The empty list is not round-trippable: it encodes to `""`, which decodes
/// to a one-element list containing `""`. Inherited from the upstream
/// protocol; callers that care must treat `vec![""]` as empty themselves.
pub(crate) fn read_csv(buf: &mut PacketBuffer) -> Result<Vec<String>> {
    let joined = buf.read_string()?;
    Ok(joined.split(',').map(str::to_owned).collect())
}

/// Write a UUID in the compacted form: 32 lowercase hex chars, no dashes,
/// high 64 bits then low 64 bits.
pub(crate) fn write_uuid(buf: &mut PacketBuffer, uuid: Uuid) -> Result<()> {
    buf.write_string(&uuid.as_simple().to_string())?;
    Ok(())
}

/// Read a compacted UUID.
///
/// The string must be exactly 32 hex characters; anything else is
/// [`CodecError::MalformedUuid`]. This is stricter than `Uuid::parse_str`,
/// which would also accept the dashed and URN forms the wire forbids.
pub(crate) fn read_uuid(buf: &mut PacketBuffer) -> Result<Uuid> {
    let text = buf.read_string()?;
    if text.len() != 32 || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CodecError::MalformedUuid { input: text });
    }
    let high = u64::from_str_radix(&text[..16], 16)
        .map_err(|_| CodecError::MalformedUuid { input: text.clone() })?;
    let low = u64::from_str_radix(&text[16..], 16)
        .map_err(|_| CodecError::MalformedUuid { input: text.clone() })?;
    Ok(Uuid::from_u64_pair(high, low))
}

/// Write a length-capped byte blob: u16 big-endian length, then raw bytes.
pub(crate) fn write_blob(buf: &mut PacketBuffer, data: &ForwardData) {
    buf.write_u16(data.len() as u16);
    buf.write_bytes(data.as_slice());
}

/// Read a length-capped byte blob.
///
/// A declared length larger than the unread remainder surfaces as the
/// buffer's truncated-input error.
pub(crate) fn read_blob(buf: &mut PacketBuffer) -> Result<ForwardData> {
    let len = buf.read_u16()? as usize;
    let bytes = buf.read_bytes(len)?;
    ForwardData::new(bytes)
}

#[cfg(test)]
mod tests {
    use bungeewire_buffer::BufferError;

    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn csv_roundtrip() {
        let mut buf = PacketBuffer::new();
        write_csv(&mut buf, &strings(&["player1", "player2"])).unwrap();
        assert_eq!(read_csv(&mut buf).unwrap(), strings(&["player1", "player2"]));
    }

    #[test]
    fn csv_single_item_has_no_comma() {
        let mut buf = PacketBuffer::new();
        write_csv(&mut buf, &strings(&["lobby"])).unwrap();
        assert_eq!(buf.read_string().unwrap(), "lobby");
    }

    #[test]
    fn csv_empty_list_decodes_to_one_empty_string() {
        // Protocol quirk: [] encodes to "" which decodes to [""].
        let mut buf = PacketBuffer::new();
        write_csv(&mut buf, &[]).unwrap();
        assert_eq!(read_csv(&mut buf).unwrap(), strings(&[""]));
    }

    #[test]
    fn uuid_wire_form_is_32_lowercase_hex() {
        let uuid = Uuid::from_u64_pair(0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210);
        let mut buf = PacketBuffer::new();
        write_uuid(&mut buf, uuid).unwrap();
        assert_eq!(
            buf.read_string().unwrap(),
            "0123456789abcdeffedcba9876543210"
        );
    }

    #[test]
    fn uuid_roundtrip() {
        let uuid = Uuid::from_u64_pair(0xDEAD_BEEF_0000_0001, 0x0000_0000_0000_00FF);
        let mut buf = PacketBuffer::new();
        write_uuid(&mut buf, uuid).unwrap();
        assert_eq!(read_uuid(&mut buf).unwrap(), uuid);
    }

    #[test]
    fn uuid_rejects_wrong_length() {
        let mut buf = PacketBuffer::new();
        buf.write_string("0123456789abcdef").unwrap();
        let err = read_uuid(&mut buf).unwrap_err();
        assert!(matches!(err, CodecError::MalformedUuid { .. }));
    }

    #[test]
    fn uuid_rejects_dashed_form() {
        let mut buf = PacketBuffer::new();
        buf.write_string("01234567-89ab-cdef-fedc-ba9876543210").unwrap();
        let err = read_uuid(&mut buf).unwrap_err();
        assert!(matches!(err, CodecError::MalformedUuid { .. }));
    }

    #[test]
    fn uuid_rejects_non_hex_characters() {
        let mut buf = PacketBuffer::new();
        buf.write_string("0123456789abcdeffedcba987654321g").unwrap();
        let err = read_uuid(&mut buf).unwrap_err();
        assert!(matches!(err, CodecError::MalformedUuid { .. }));
    }

    #[test]
    fn uuid_rejects_multibyte_input() {
        // 32 bytes of UTF-8 but not 32 hex digits.
        let mut buf = PacketBuffer::new();
        buf.write_string(&"é".repeat(16)).unwrap();
        let err = read_uuid(&mut buf).unwrap_err();
        assert!(matches!(err, CodecError::MalformedUuid { .. }));
    }

    #[test]
    fn blob_roundtrip() {
        let data = ForwardData::new(&b"Forwarded message"[..]).unwrap();
        let mut buf = PacketBuffer::new();
        write_blob(&mut buf, &data);
        assert_eq!(buf.as_slice()[..2], [0x00, 0x11]);
        assert_eq!(read_blob(&mut buf).unwrap(), data);
    }

    #[test]
    fn blob_truncated_input_rejected() {
        let mut buf = PacketBuffer::from_slice(&[0x00, 0x05, 0x01, 0x02]);
        let err = read_blob(&mut buf).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Buffer(BufferError::UnexpectedEof { needed: 5, remaining: 2 })
        ));
    }

    #[test]
    fn forward_data_accepts_max_length() {
        let data = ForwardData::new(vec![0u8; ForwardData::MAX_LEN]).unwrap();
        assert_eq!(data.len(), 65535);
    }

    #[test]
    fn forward_data_rejects_oversize() {
        let err = ForwardData::new(vec![0u8; ForwardData::MAX_LEN + 1]).unwrap_err();
        assert!(matches!(
            err,
            CodecError::PayloadTooLarge { len: 65536, max: 65535 }
        ));
    }

    #[test]
    fn player_count_accepts_wire_range() {
        assert_eq!(PlayerCount::new(1).unwrap().get(), 1);
        assert_eq!(PlayerCount::new(PlayerCount::MAX).unwrap().get(), PlayerCount::MAX);
    }

    #[test]
    fn player_count_rejects_zero() {
        let err = PlayerCount::new(0).unwrap_err();
        assert!(matches!(err, CodecError::InvalidCount { value: 0 }));
    }

    #[test]
    fn player_count_rejects_above_i32_max() {
        let err = PlayerCount::new(3_000_000_000).unwrap_err();
        assert!(matches!(
            err,
            CodecError::InvalidCount {
                value: 3_000_000_000
            }
        ));
    }

    #[test]
    fn forward_data_copies_input() {
        let mut source = vec![1u8, 2, 3];
        let data = ForwardData::new(source.as_slice()).unwrap();
        source[0] = 9;
        assert_eq!(data.as_slice(), &[1, 2, 3]);
    }
}
