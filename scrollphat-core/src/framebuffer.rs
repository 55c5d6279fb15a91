//! Growable column framebuffer
//!
//! The framebuffer is wider than the panel: text and graphs are rendered
//! into it at any x position and the visible window scrolls across it.
//! It never holds fewer than [`WIDTH`] columns.

use alloc::vec;
use alloc::vec::Vec;

use scrollphat_protocol::{HEIGHT, WIDTH};

/// Column framebuffer
///
/// One byte per column; bit 0 is the top row, bit 4 the bottom row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    columns: Vec<u8>,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a blank framebuffer exactly one window wide
    pub fn new() -> Self {
        Self {
            columns: vec![0; WIDTH],
        }
    }

    /// Create a framebuffer from existing columns
    ///
    /// Short inputs are zero-padded to the window width.
    pub fn from_columns(columns: Vec<u8>) -> Self {
        let mut buffer = Self { columns };
        buffer.pad_to_window();
        buffer
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Never true: the buffer is at least one window wide
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// All columns, left to right
    pub fn as_slice(&self) -> &[u8] {
        &self.columns
    }

    /// Read a column
    pub fn col(&self, x: usize) -> Option<u8> {
        self.columns.get(x).copied()
    }

    /// Read a pixel
    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        if y >= HEIGHT {
            return None;
        }
        self.col(x).map(|c| c & (1 << y) != 0)
    }

    /// Grow with zero columns so that index `x` exists
    ///
    /// Never shrinks. Returns `false`, leaving the buffer untouched, when
    /// column `x` cannot be allocated.
    pub fn grow_to(&mut self, x: usize) -> bool {
        let len = self.columns.len();
        if x < len {
            return true;
        }
        let Some(new_len) = x.checked_add(1) else {
            return false;
        };
        if self.columns.try_reserve(new_len - len).is_err() {
            return false;
        }
        self.columns.resize(new_len, 0);
        true
    }

    /// Set column `x`, growing the buffer if needed
    ///
    /// Columns that cannot be allocated are ignored.
    pub fn set_col(&mut self, x: usize, value: u8) {
        if self.grow_to(x) {
            self.columns[x] = value;
        }
    }

    /// Set or clear the pixel at (`x`, `y`), growing the buffer if needed
    ///
    /// Rows outside the panel and columns that cannot be allocated are
    /// ignored and leave the buffer untouched. Returns `true` when the
    /// pixel was written.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) -> bool {
        if y >= HEIGHT || !self.grow_to(x) {
            return false;
        }

        let mask = 1u8 << y;
        if on {
            self.columns[x] |= mask;
        } else {
            self.columns[x] &= !mask;
        }
        true
    }

    /// Reset to a blank window-wide buffer
    ///
    /// Shrinking is only reachable through [`crate::DisplayState`], which
    /// rewinds its offset alongside.
    pub(crate) fn clear(&mut self) {
        self.columns.clear();
        self.columns.resize(WIDTH, 0);
    }

    /// Replace all columns
    ///
    /// Short replacements are zero-padded to the window width.
    pub(crate) fn replace(&mut self, columns: Vec<u8>) {
        self.columns = columns;
        self.pad_to_window();
    }

    fn pad_to_window(&mut self) {
        if self.columns.len() < WIDTH {
            self.columns.resize(WIDTH, 0);
        }
    }
}
