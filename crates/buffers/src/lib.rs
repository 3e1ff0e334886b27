//! clearcut-buffers - byte cursor primitives for decoding service responses.

mod reader;

pub use reader::Reader;

use thiserror::Error;

/// Error type for bounds-checked reads.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    #[error("end of buffer")]
    EndOfBuffer,
}
