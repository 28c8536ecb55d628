//! The request and response codecs.
//!
//! Requests are always tag-prefixed. Responses are tag-prefixed except for
//! `Forward`/`ForwardToPlayer`, which the proxy sends bare; since the wire
//! cannot say which rule applies, response decoding is two-phase: try the
//! tagged parse, and on any structural failure rewind and decode the whole
//! payload as an untagged `Forward`.
//!
//! Both directions enforce strict consumption: bytes left over after a
//! structurally complete decode are an error, not noise.

use bungeewire_buffer::PacketBuffer;
use tracing::trace;

use crate::error::{CodecError, Result};
use crate::registry;
use crate::request::Request;
use crate::response::{self, Response};

/// Write a tag-prefixed request into `buf`.
pub fn write_request(request: &Request, buf: &mut PacketBuffer) -> Result<()> {
    buf.write_string(request.tag())?;
    request.write_fields(buf)
}

/// Encode a request to a standalone payload.
pub fn encode_request(request: &Request) -> Result<Vec<u8>> {
    let mut buf = PacketBuffer::new();
    write_request(request, &mut buf)?;
    Ok(buf.into_vec())
}

/// Read a request from `buf`, consuming it entirely.
pub fn read_request(buf: &mut PacketBuffer) -> Result<Request> {
    let tag = buf.read_string()?;
    let entry = registry::lookup(&tag).ok_or(CodecError::UnknownTag { tag })?;
    let request = (entry.request)(buf)?;
    ensure_fully_read(buf)?;
    Ok(request)
}

/// Decode a request from a payload.
pub fn decode_request(payload: &[u8]) -> Result<Request> {
    read_request(&mut PacketBuffer::from_slice(payload))
}

/// Write a response into `buf`; `Forward`/`ForwardToPlayer` get no tag.
pub fn write_response(response: &Response, buf: &mut PacketBuffer) -> Result<()> {
    let unprefixed = registry::lookup(response.tag())
        .is_some_and(|entry| entry.unprefixed_response);
    if !unprefixed {
        buf.write_string(response.tag())?;
    }
    response.write_fields(buf)
}

/// Encode a response to a standalone payload.
pub fn encode_response(response: &Response) -> Result<Vec<u8>> {
    let mut buf = PacketBuffer::new();
    write_response(response, &mut buf)?;
    Ok(buf.into_vec())
}

/// Read a response from `buf`, consuming it entirely.
///
/// Tagged parse first; on failure the read index is rewound and the full
/// remainder is decoded as an untagged [`Response::Forward`]. The split is
/// heuristic — a forwarded payload whose leading bytes happen to form a
/// registered tag string would be misclassified. The registry's short,
/// closed tag set makes that practically safe; the upstream protocol
/// accepts the same risk.
pub fn read_response(buf: &mut PacketBuffer) -> Result<Response> {
    let mark = buf.read_index();
    match read_tagged_response(buf) {
        Ok(response) => Ok(response),
        Err(error) => {
            trace!(%error, "tagged response parse failed, retrying untagged");
            buf.set_read_index(mark);
            let forward = response::read_forward(buf)?;
            ensure_fully_read(buf)?;
            Ok(forward)
        }
    }
}

/// Decode a response from a payload.
pub fn decode_response(payload: &[u8]) -> Result<Response> {
    read_response(&mut PacketBuffer::from_slice(payload))
}

fn read_tagged_response(buf: &mut PacketBuffer) -> Result<Response> {
    let tag = buf.read_string()?;
    let entry = registry::lookup(&tag).ok_or_else(|| CodecError::UnknownTag { tag: tag.clone() })?;
    // A known tag with no response form is as good as unknown here.
    let decode = entry.response.ok_or(CodecError::UnknownTag { tag })?;
    let response = decode(buf)?;
    ensure_fully_read(buf)?;
    Ok(response)
}

fn ensure_fully_read(buf: &PacketBuffer) -> Result<()> {
    let remaining = buf.remaining();
    if remaining > 0 {
        return Err(CodecError::TrailingBytes { remaining });
    }
    Ok(())
}
