//! Log response decoder error type.

use thiserror::Error;

/// Error type for log response decoding.
///
/// Every variant is terminal for the call that produced it. Callers that only
/// want a wait hint should treat any variant as "no hint available"; see
/// [`next_request_wait_or`](super::next_request_wait_or).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LogResponseDecodeError {
    #[error("empty buffer")]
    EmptyBuffer,
    #[error(
        "unexpected wire type {wire_type} for field {field_number}, expected varint field 1"
    )]
    UnexpectedWireType { field_number: u32, wire_type: u8 },
    #[error("missing field value")]
    MissingFieldValue,
    #[error("truncated varint")]
    TruncatedVarint,
    #[error("varint overflows 64 bits")]
    VarintOverflow,
}
