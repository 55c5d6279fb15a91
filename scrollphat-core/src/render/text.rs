//! Text rendering
//!
//! Glyphs are laid out left to right from a starting column:
//! each glyph is followed by a one-column spacer, while spaces and
//! characters missing from the font become a three-column gap.

use crate::font::Font;
use crate::framebuffer::FrameBuffer;

/// Columns used by a space or an unknown character
pub const BLANK_WIDTH: usize = 3;

/// Columns between glyphs
pub const SPACER_WIDTH: usize = 1;

fn blank_or_glyph<F: Font + ?Sized>(font: &F, ch: char) -> Option<&[u8]> {
    if ch == ' ' {
        None
    } else {
        font.glyph_for(ch)
    }
}

/// Render `text` into `buffer` starting at column `start_x`
///
/// Grows the buffer as needed. Returns the column after the last one
/// written, i.e. where the next string would start, saturating at
/// `usize::MAX`. Columns past the addressable range are dropped.
pub fn write_string<F: Font + ?Sized>(
    buffer: &mut FrameBuffer,
    font: &F,
    text: &str,
    start_x: usize,
) -> usize {
    let mut x = start_x;

    for ch in text.chars() {
        match blank_or_glyph(font, ch) {
            Some(glyph) => {
                for &column in glyph {
                    buffer.set_col(x, column);
                    x = x.saturating_add(1);
                }
                buffer.set_col(x, 0);
                x = x.saturating_add(SPACER_WIDTH);
            }
            None => {
                for _ in 0..BLANK_WIDTH {
                    buffer.set_col(x, 0);
                    x = x.saturating_add(1);
                }
            }
        }
    }

    x
}

/// Number of columns `text` occupies when rendered with `font`
pub fn text_width<F: Font + ?Sized>(font: &F, text: &str) -> usize {
    text.chars()
        .map(|ch| match blank_or_glyph(font, ch) {
            Some(glyph) => glyph.len() + SPACER_WIDTH,
            None => BLANK_WIDTH,
        })
        .fold(0, usize::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::GlyphTable;
    use scrollphat_protocol::WIDTH;

    static FONT: &[(u32, &[u8])] = &[
        ('H' as u32, &[0b11111, 0b00100, 0b11111]),
        ('i' as u32, &[0b11101]),
    ];

    #[test]
    fn test_glyphs_are_followed_by_spacer() {
        let font = GlyphTable::new(FONT);
        let mut fb = FrameBuffer::new();

        let end = write_string(&mut fb, &font, "Hi", 0);

        assert_eq!(end, 6);
        assert_eq!(
            &fb.as_slice()[..6],
            &[0b11111, 0b00100, 0b11111, 0, 0b11101, 0]
        );
    }

    #[test]
    fn test_space_and_unknown_are_three_blank_columns() {
        let font = GlyphTable::new(FONT);
        let mut fb = FrameBuffer::from_columns([0x1F; WIDTH].to_vec());

        let end = write_string(&mut fb, &font, " ?", 0);

        assert_eq!(end, 6);
        assert_eq!(&fb.as_slice()[..6], &[0; 6]);
        assert_eq!(fb.col(6), Some(0x1F));
    }

    #[test]
    fn test_long_text_grows_buffer() {
        let font = GlyphTable::new(FONT);
        let mut fb = FrameBuffer::new();

        let end = write_string(&mut fb, &font, "HiHiHi", 2);

        assert_eq!(end, 2 + 3 * 6);
        assert_eq!(fb.len(), end);
        assert_eq!(fb.col(0), Some(0));
        assert_eq!(fb.col(2), Some(0b11111));
    }

    #[test]
    fn test_empty_string_writes_nothing() {
        let font = GlyphTable::new(FONT);
        let mut fb = FrameBuffer::new();
        fb.set_col(3, 9);
        let before = fb.clone();

        assert_eq!(write_string(&mut fb, &font, "", 5), 5);
        assert_eq!(fb, before);
    }

    #[test]
    fn test_text_at_end_of_address_space_is_dropped() {
        let font = GlyphTable::new(FONT);
        let mut fb = FrameBuffer::new();

        let end = write_string(&mut fb, &font, "Hi ", usize::MAX - 2);

        assert_eq!(end, usize::MAX);
        assert_eq!(fb, FrameBuffer::new());
    }

    #[test]
    fn test_text_width_matches_rendered_width() {
        let font = GlyphTable::new(FONT);
        let mut fb = FrameBuffer::new();

        for text in ["", "H", "Hi there", "  i  "] {
            let end = write_string(&mut fb, &font, text, 0);
            assert_eq!(text_width(&font, text), end);
        }
    }
}
