use std::time::Duration;

use super::decoder::decode_log_response;

/// Returns the wait hint carried by `bytes`, or `default` when the response
/// cannot be decoded.
///
/// This is the caller side of the decode contract: a malformed response means
/// "no hint", never a failed upload. The decode error is logged at `debug`.
pub fn next_request_wait_or(bytes: &[u8], default: Duration) -> Duration {
    match decode_log_response(bytes) {
        Ok(response) => response.next_request_wait(),
        Err(error) => {
            tracing::debug!(
                %error,
                len = bytes.len(),
                "could not decode log response, using default wait"
            );
            default
        }
    }
}
