//! Font lookup
//!
//! A font maps a character code to a glyph: the columns that draw the
//! character, left to right, in the same bit layout as the framebuffer.
//! Glyph widths vary per character. Fonts are handed to the driver as
//! values and can be swapped at runtime.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

/// Character code to glyph mapping
pub trait Font {
    /// Columns for `code`, or `None` if the font has no glyph for it
    fn glyph(&self, code: u32) -> Option<&[u8]>;

    /// Columns for a `char`
    fn glyph_for(&self, ch: char) -> Option<&[u8]> {
        self.glyph(ch as u32)
    }
}

impl<F: Font + ?Sized> Font for &F {
    fn glyph(&self, code: u32) -> Option<&[u8]> {
        (**self).glyph(code)
    }
}

impl Font for BTreeMap<u32, Vec<u8>> {
    fn glyph(&self, code: u32) -> Option<&[u8]> {
        self.get(&code).map(Vec::as_slice)
    }
}

/// Font backed by a static table
///
/// Entries must be sorted by code; lookups use binary search.
///
/// # Example
/// ```
/// use scrollphat_core::font::{Font, GlyphTable};
///
/// static GLYPHS: &[(u32, &[u8])] = &[
///     ('-' as u32, &[0b00100, 0b00100]),
///     ('I' as u32, &[0b11111]),
/// ];
///
/// let font = GlyphTable::new(GLYPHS);
/// assert_eq!(font.glyph_for('I'), Some(&[0b11111][..]));
/// assert_eq!(font.glyph_for('?'), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GlyphTable<'a> {
    entries: &'a [(u32, &'a [u8])],
}

impl<'a> GlyphTable<'a> {
    /// Wrap a sorted glyph table
    pub const fn new(entries: &'a [(u32, &'a [u8])]) -> Self {
        Self { entries }
    }

    /// Number of glyphs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no glyphs
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Font for GlyphTable<'_> {
    fn glyph(&self, code: u32) -> Option<&[u8]> {
        self.entries
            .binary_search_by_key(&code, |&(c, _)| c)
            .ok()
            .map(|i| self.entries[i].1)
    }
}
