//! Decoding of the clearcut log service response.
//!
//! The service answers every batch upload with a tiny tag-delimited binary
//! message. The only field the client cares about is field 1, a varint
//! holding the number of milliseconds to wait before the next request.
//!
//! # Example
//!
//! ```
//! use clearcut_response::{decode_log_response, LogResponse, LogResponseDecodeError};
//!
//! let response = decode_log_response(&[0x08, 0x7b]).unwrap();
//! assert_eq!(response, LogResponse { next_request_wait_ms: 123 });
//!
//! assert_eq!(decode_log_response(&[]), Err(LogResponseDecodeError::EmptyBuffer));
//! ```

pub mod log_response;

pub use log_response::{
    decode_log_response, next_request_wait_or, LogResponse, LogResponseDecodeError,
    NEXT_REQUEST_WAIT_MS_FIELD, NEXT_REQUEST_WAIT_MS_TAG, WIRE_TYPE_VARINT,
};
