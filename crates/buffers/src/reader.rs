//! Binary buffer reader with cursor tracking.

use crate::BufferError;

/// A read-only cursor over a borrowed byte slice.
///
/// Every read is bounds-checked: reading past the end yields
/// [`BufferError::EndOfBuffer`] and leaves the cursor where it was.
///
/// # Example
///
/// ```
/// use clearcut_buffers::{BufferError, Reader};
///
/// let data = [0x08, 0x7b];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.try_u8(), Ok(0x08));
/// assert_eq!(reader.try_u8(), Ok(0x7b));
/// assert_eq!(reader.try_u8(), Err(BufferError::EndOfBuffer));
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader positioned at the start of `uint8`.
    pub fn new(uint8: &'a [u8]) -> Self {
        Self { uint8, x: 0 }
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.uint8.len().saturating_sub(self.x)
    }

    /// Returns `true` when no bytes remain.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    #[inline]
    fn check(&self, n: usize) -> Result<(), BufferError> {
        if self.size() < n {
            Err(BufferError::EndOfBuffer)
        } else {
            Ok(())
        }
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn try_u8(&mut self) -> Result<u8, BufferError> {
        self.check(1)?;
        let val = self.uint8[self.x];
        self.x += 1;
        Ok(val)
    }
}
