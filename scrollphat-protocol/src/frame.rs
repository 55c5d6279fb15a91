//! Draw frame layout
//!
//! Frame format (12 bytes):
//! - COLUMNS (11 bytes): one byte per visible column, left to right
//! - TERMINATOR (1 byte): 0xFF
//!
//! Column byte layout: bit 0 is the top row, bit 4 the bottom row.
//! Bits 5-7 are not wired to LEDs.

/// Visible columns on the panel
pub const WIDTH: usize = 11;

/// Rows per column
pub const HEIGHT: usize = 5;

/// Byte that closes every draw frame
pub const FRAME_TERMINATOR: u8 = 0xFF;

/// Complete draw frame size (COLUMNS + TERMINATOR)
pub const FRAME_SIZE: usize = WIDTH + 1;

/// One draw transaction worth of bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DrawFrame {
    bytes: [u8; FRAME_SIZE],
}

impl DrawFrame {
    /// Build a frame from the 11 visible columns
    pub fn new(columns: &[u8; WIDTH]) -> Self {
        let mut bytes = [FRAME_TERMINATOR; FRAME_SIZE];
        bytes[..WIDTH].copy_from_slice(columns);
        Self { bytes }
    }

    /// Parse a frame from raw payload bytes
    ///
    /// Returns `None` unless the payload is exactly [`FRAME_SIZE`] bytes
    /// ending in [`FRAME_TERMINATOR`].
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let bytes: [u8; FRAME_SIZE] = bytes.try_into().ok()?;
        if bytes[WIDTH] != FRAME_TERMINATOR {
            return None;
        }
        Some(Self { bytes })
    }

    /// The visible columns
    pub fn columns(&self) -> &[u8] {
        &self.bytes[..WIDTH]
    }

    /// Wire bytes, terminator included
    pub fn as_bytes(&self) -> &[u8; FRAME_SIZE] {
        &self.bytes
    }

    /// Read a single pixel (`x` in 0..11, `y` in 0..5)
    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }
        Some(self.bytes[x] & (1 << y) != 0)
    }
}

impl Default for DrawFrame {
    fn default() -> Self {
        Self::new(&[0; WIDTH])
    }
}
