use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Field number carrying the wait hint.
pub const NEXT_REQUEST_WAIT_MS_FIELD: u32 = 1;

/// Wire type of a base-128 varint.
pub const WIRE_TYPE_VARINT: u8 = 0;

/// Tag byte for field 1 encoded as a varint: `(1 << 3) | 0`.
pub const NEXT_REQUEST_WAIT_MS_TAG: u8 =
    ((NEXT_REQUEST_WAIT_MS_FIELD as u8) << 3) | WIRE_TYPE_VARINT;

/// Decoded log response.
///
/// Serializes as `{"nextRequestWaitMs": <n>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogResponse {
    /// Milliseconds the client should wait before sending its next request.
    pub next_request_wait_ms: u64,
}

impl LogResponse {
    /// Returns the wait hint as a [`Duration`].
    pub fn next_request_wait(&self) -> Duration {
        Duration::from_millis(self.next_request_wait_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_constant_matches_field_and_wire_type() {
        assert_eq!(NEXT_REQUEST_WAIT_MS_TAG, 0x08);
    }

    #[test]
    fn next_request_wait_converts_milliseconds() {
        let response = LogResponse {
            next_request_wait_ms: 1_500,
        };
        assert_eq!(response.next_request_wait(), Duration::from_millis(1_500));
    }
}
