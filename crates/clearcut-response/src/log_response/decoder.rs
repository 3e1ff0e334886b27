//! Log response decoder.
//!
//! The response is read in a single forward pass: one tag byte, then the
//! varint payload of field 1. Anything after the varint belongs to fields
//! this client does not interpret and is left unread.

use clearcut_buffers::Reader;

use super::error::LogResponseDecodeError;
use super::types::{LogResponse, NEXT_REQUEST_WAIT_MS_FIELD, WIRE_TYPE_VARINT};

/// Decodes the wait hint from a raw log response.
///
/// The first field must be field 1 with varint wire type; any other tag is an
/// error rather than something to skip. Trailing bytes after the varint are
/// ignored.
///
/// Varints are accumulated into a `u64`. Their length is bounded only by the
/// input, so zero groups past bit 63 are accepted. A group that would set a
/// bit past bit 63 fails with [`LogResponseDecodeError::VarintOverflow`] as
/// soon as it is read, even if the input then ends mid-varint. A varint that
/// only carries zero groups past bit 63 and then runs out of input is
/// [`LogResponseDecodeError::TruncatedVarint`].
pub fn decode_log_response(bytes: &[u8]) -> Result<LogResponse, LogResponseDecodeError> {
    let mut reader = Reader::new(bytes);
    let tag = reader
        .try_u8()
        .map_err(|_| LogResponseDecodeError::EmptyBuffer)?;
    let field_number = u32::from(tag >> 3);
    let wire_type = tag & 0x07;
    if field_number != NEXT_REQUEST_WAIT_MS_FIELD || wire_type != WIRE_TYPE_VARINT {
        return Err(LogResponseDecodeError::UnexpectedWireType {
            field_number,
            wire_type,
        });
    }
    if reader.is_empty() {
        return Err(LogResponseDecodeError::MissingFieldValue);
    }
    let next_request_wait_ms = read_varint(&mut reader)?;
    Ok(LogResponse {
        next_request_wait_ms,
    })
}

/// Reads a base-128 varint, least-significant group first.
fn read_varint(reader: &mut Reader<'_>) -> Result<u64, LogResponseDecodeError> {
    let mut result: u64 = 0;
    let mut shift = 0u32;
    loop {
        let b = reader
            .try_u8()
            .map_err(|_| LogResponseDecodeError::TruncatedVarint)?;
        let group = u64::from(b & 0x7f);
        // Only one bit of the tenth group fits; later groups must be zero.
        if shift < 64 {
            if shift == 63 && group > 1 {
                return Err(LogResponseDecodeError::VarintOverflow);
            }
            result |= group << shift;
        } else if group != 0 {
            return Err(LogResponseDecodeError::VarintOverflow);
        }
        if b & 0x80 == 0 {
            return Ok(result);
        }
        shift = shift.saturating_add(7);
    }
}
