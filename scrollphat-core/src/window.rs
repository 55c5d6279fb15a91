//! Window composition
//!
//! Cuts the visible [`WIDTH`]-column slice out of the framebuffer at a
//! circular offset. When the offset is near the end of the buffer the
//! window wraps around to column 0, so a scrolling message loops.
//!
//! # Rotation
//!
//! A board mounted upside down needs a 180° remap: the window is
//! reversed and each column's five row bits are mirrored
//! (bit 4 ↔ bit 0, bit 3 ↔ bit 1, bit 2 fixed).

use scrollphat_protocol::{DrawFrame, WIDTH};

/// Mask of the bits wired to LEDs
pub const ROW_MASK: u8 = 0b0001_1111;

/// Mirror the five row bits of a column
///
/// Bits 5-7 are dropped. Involutory on `0..=31`.
///
/// # Example
/// ```
/// use scrollphat_core::window::rotate5;
/// assert_eq!(rotate5(0b00001), 0b10000);
/// assert_eq!(rotate5(0b00110), 0b01100);
/// ```
#[inline]
pub const fn rotate5(column: u8) -> u8 {
    (column & ROW_MASK).reverse_bits() >> 3
}

/// Compose the visible columns starting at `offset`
///
/// Reads `buffer[offset..offset + WIDTH]`, wrapping to the start of the
/// buffer when the slice runs past the end.
pub fn compose(buffer: &[u8], offset: usize, rotate: bool) -> [u8; WIDTH] {
    let mut window = [0u8; WIDTH];
    if buffer.is_empty() {
        return window;
    }

    let len = buffer.len();
    let start = offset % len;
    for (i, column) in window.iter_mut().enumerate() {
        *column = buffer[(start + i) % len];
    }

    if rotate {
        window.reverse();
        for column in window.iter_mut() {
            *column = rotate5(*column);
        }
    }

    window
}

/// Compose the window and wrap it in a draw frame
pub fn frame(buffer: &[u8], offset: usize, rotate: bool) -> DrawFrame {
    DrawFrame::new(&compose(buffer, offset, rotate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use scrollphat_protocol::{FRAME_SIZE, FRAME_TERMINATOR};

    #[test]
    fn test_rotate5_mirrors_rows() {
        assert_eq!(rotate5(0b10000), 0b00001);
        assert_eq!(rotate5(0b01000), 0b00010);
        assert_eq!(rotate5(0b00100), 0b00100);
        assert_eq!(rotate5(0b00010), 0b01000);
        assert_eq!(rotate5(0b00001), 0b10000);
        assert_eq!(rotate5(0b11100), 0b00111);
    }

    #[test]
    fn test_rotate5_drops_unwired_bits() {
        assert_eq!(rotate5(0b1110_0000), 0);
        assert_eq!(rotate5(0xFF), ROW_MASK);
    }

    #[test]
    fn test_window_without_wrap() {
        let buffer: [u8; 15] = core::array::from_fn(|i| i as u8);
        assert_eq!(
            compose(&buffer, 2, false),
            [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]
        );
    }

    #[test]
    fn test_window_exactly_at_end_does_not_wrap() {
        let buffer: [u8; 15] = core::array::from_fn(|i| i as u8);
        assert_eq!(
            compose(&buffer, 4, false),
            [4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14]
        );
    }

    #[test]
    fn test_window_wraps_around() {
        let buffer = [5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];
        let frame = frame(&buffer, 9, false);
        assert_eq!(
            frame.as_bytes(),
            &[14, 15, 5, 6, 7, 8, 9, 10, 11, 12, 13, FRAME_TERMINATOR]
        );
    }

    #[test]
    fn test_rotated_window_reverses_and_mirrors() {
        let mut buffer = [0u8; WIDTH];
        buffer[0] = 0b00001; // top-left
        buffer[1] = 0b00011;

        let window = compose(&buffer, 0, true);
        assert_eq!(window[WIDTH - 1], 0b10000); // bottom-right
        assert_eq!(window[WIDTH - 2], 0b11000);
        assert!(window[..WIDTH - 2].iter().all(|&c| c == 0));
    }

    #[test]
    fn test_single_lit_column_frame() {
        let mut buffer = [0u8; WIDTH];
        buffer[0] = 0b00001;
        assert_eq!(
            frame(&buffer, 0, false).as_bytes(),
            &[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xFF]
        );
    }

    #[test]
    fn test_empty_buffer_composes_blank_window() {
        assert_eq!(compose(&[], 3, true), [0; WIDTH]);
    }

    proptest! {
        #[test]
        fn prop_rotate5_is_involutory(c in 0u8..32) {
            prop_assert_eq!(rotate5(rotate5(c)), c);
        }

        #[test]
        fn prop_frame_is_terminated(
            buffer in proptest::collection::vec(any::<u8>(), WIDTH..48),
            offset in any::<usize>(),
            rotate in any::<bool>(),
        ) {
            let frame = frame(&buffer, offset % buffer.len(), rotate);
            prop_assert_eq!(frame.as_bytes().len(), FRAME_SIZE);
            prop_assert_eq!(frame.as_bytes()[FRAME_SIZE - 1], FRAME_TERMINATOR);
        }

        #[test]
        fn prop_window_matches_wrapped_slice(
            buffer in proptest::collection::vec(any::<u8>(), WIDTH..48),
            offset in any::<usize>(),
        ) {
            let len = buffer.len();
            let offset = offset % len;
            let window = compose(&buffer, offset, false);

            let mut expected = alloc::vec::Vec::new();
            if offset + WIDTH <= len {
                expected.extend_from_slice(&buffer[offset..offset + WIDTH]);
            } else {
                expected.extend_from_slice(&buffer[offset..]);
                expected.extend_from_slice(&buffer[..WIDTH - (len - offset)]);
            }
            prop_assert_eq!(&window[..], expected.as_slice());
        }
    }
}
