//! Log response wire format: a single varint field tagged `0x08`.

mod decoder;
pub mod error;
mod fallback;
mod types;

pub use decoder::decode_log_response;
pub use error::LogResponseDecodeError;
pub use fallback::next_request_wait_or;
pub use types::{
    LogResponse, NEXT_REQUEST_WAIT_MS_FIELD, NEXT_REQUEST_WAIT_MS_TAG, WIRE_TYPE_VARINT,
};
