//! Display state
//!
//! Everything the driver mutates between pushes, bundled in one value:
//! the framebuffer, the scroll offset, the rotation flag and the
//! transport error counter.

use alloc::vec::Vec;

use scrollphat_protocol::DrawFrame;

use crate::diagnostics::ErrorCounter;
use crate::framebuffer::FrameBuffer;
use crate::window;

/// Mutable display state
///
/// The offset is kept in `0..buffer.len()` after every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayState {
    buffer: FrameBuffer,
    offset: usize,
    rotate: bool,
    errors: ErrorCounter,
}

impl DisplayState {
    /// Fresh state: blank window, offset 0, no rotation, no errors
    pub fn new(rotate: bool, io_error_threshold: u32) -> Self {
        Self {
            buffer: FrameBuffer::new(),
            offset: 0,
            rotate,
            errors: ErrorCounter::new(io_error_threshold),
        }
    }

    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Mutable framebuffer access
    ///
    /// The framebuffer can only grow through this handle, so the offset
    /// stays valid. Shrinking goes through [`DisplayState::replace_buffer`]
    /// and [`DisplayState::clear`].
    pub fn buffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.buffer
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn rotate(&self) -> bool {
        self.rotate
    }

    pub fn set_rotate(&mut self, rotate: bool) {
        self.rotate = rotate;
    }

    pub fn errors(&self) -> &ErrorCounter {
        &self.errors
    }

    pub fn errors_mut(&mut self) -> &mut ErrorCounter {
        &mut self.errors
    }

    /// Move the window by `delta` columns, wrapping in both directions
    pub fn scroll(&mut self, delta: isize) {
        let len = self.buffer.len() as isize;
        let delta = delta.rem_euclid(len) as usize;
        self.offset = (self.offset + delta) % self.buffer.len();
    }

    /// Move the window to column `pos` (modulo buffer length)
    ///
    /// Negative positions count back from the end of the buffer.
    pub fn scroll_to(&mut self, pos: isize) {
        let len = self.buffer.len() as isize;
        self.offset = pos.rem_euclid(len) as usize;
    }

    /// Blank the buffer and rewind; rotation and error count are kept
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.offset = 0;
    }

    /// Replace the framebuffer, keeping the offset in range
    pub fn replace_buffer(&mut self, columns: Vec<u8>) {
        self.buffer.replace(columns);
        self.offset %= self.buffer.len();
    }

    /// Frame for the current window
    pub fn frame(&self) -> DrawFrame {
        window::frame(self.buffer.as_slice(), self.offset, self.rotate)
    }
}
