const GLYPH_WIDTH: i32 = 3;
const GLYPH_HEIGHT: i32 = 5;
const DEFAULT_SCALE: i32 = 3;

// 3x5 glyphs for ' '..='~', one 15-bit word each, top row in the high bits.
const ASCII_GLYPHS: [u16; 95] = [
    0x0000, 0x2482, 0x5A00, 0x5F7D, 0x7DDF, 0x52A5, 0x2AAB, 0x2400,
    0x1491, 0x4494, 0x0AA8, 0x05D0, 0x0014, 0x01C0, 0x0002, 0x12A4,
    0x7B6F, 0x2C97, 0x73E7, 0x73CF, 0x5BC9, 0x79CF, 0x79EF, 0x7292,
    0x7BEF, 0x7BCF, 0x0410, 0x0414, 0x1511, 0x0E38, 0x4454, 0x72C2,
    0x7BE7, 0x2BED, 0x6BAE, 0x7927, 0x6B6E, 0x79A7, 0x79A4, 0x796F,
    0x5BED, 0x7497, 0x726F, 0x5BAD, 0x4927, 0x5FED, 0x5FFD, 0x7B6F,
    0x6BA4, 0x7B79, 0x6BAD, 0x79CF, 0x7492, 0x5B6F, 0x5B6A, 0x5BFD,
    0x5AAD, 0x5A92, 0x72A7, 0x6926, 0x4889, 0x324B, 0x2A00, 0x0007,
    0x4400, 0x0E7F, 0x49AE, 0x0F27, 0x13EF, 0x0FA7, 0x39A4, 0x0F79,
    0x49AD, 0x2092, 0x106A, 0x4BAD, 0x4927, 0x0DED, 0x0D6D, 0x0F6F,
    0x0D74, 0x0F79, 0x0D64, 0x0F8F, 0x2E93, 0x0B6F, 0x0B6A, 0x0B7A,
    0x0A95, 0x0B79, 0x0E57, 0x3593, 0x2492, 0x64D6, 0x0780,
];

/// Fixed-width bitmap font covering printable ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    scale: i32,
    fallback: char,
}

impl Default for Font {
    fn default() -> Self {
        Self::with_scale(DEFAULT_SCALE)
    }
}

impl Font {
    pub fn with_scale(scale: i32) -> Self {
        Self {
            scale: scale.max(1),
            fallback: '?',
        }
    }

    pub fn scale(&self) -> i32 {
        self.scale
    }

    pub fn glyph_advance(&self) -> i32 {
        (GLYPH_WIDTH + 1) * self.scale
    }

    pub fn line_height(&self) -> i32 {
        (GLYPH_HEIGHT + 2) * self.scale
    }

    pub fn text_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * self.glyph_advance()
    }

    /// Font-space pixels lit for `ch`, as `(col, row)` in the unscaled 3x5 cell.
    pub(crate) fn lit_cells(&self, ch: char) -> impl Iterator<Item = (i32, i32)> {
        let bits = glyph_bits(ch).or_else(|| glyph_bits(self.fallback)).unwrap_or(0);
        (0..GLYPH_HEIGHT).flat_map(move |row| {
            (0..GLYPH_WIDTH).filter_map(move |col| {
                let shift = (GLYPH_HEIGHT - 1 - row) * GLYPH_WIDTH + (GLYPH_WIDTH - 1 - col);
                ((bits >> shift) & 1 == 1).then_some((col, row))
            })
        })
    }
}

fn glyph_bits(ch: char) -> Option<u16> {
    match ch {
        ' '..='~' => ASCII_GLYPHS.get(ch as usize - ' ' as usize).copied(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_has_no_lit_cells() {
        assert_eq!(Font::default().lit_cells(' ').count(), 0);
    }

    #[test]
    fn digit_one_matches_bitmap() {
        let cells: Vec<(i32, i32)> = Font::default().lit_cells('1').collect();
        assert_eq!(
            cells,
            vec![(1, 0), (0, 1), (1, 1), (1, 2), (1, 3), (0, 4), (1, 4), (2, 4)]
        );
    }

    #[test]
    fn unknown_characters_use_fallback_glyph() {
        let font = Font::default();
        let fallback: Vec<_> = font.lit_cells('?').collect();
        let unknown: Vec<_> = font.lit_cells('\u{00e9}').collect();
        assert_eq!(unknown, fallback);
    }

    #[test]
    fn metrics_scale_with_font_scale() {
        let font = Font::with_scale(2);
        assert_eq!(font.glyph_advance(), 8);
        assert_eq!(font.line_height(), 14);
        assert_eq!(font.text_width("ID: 12"), 48);
        assert_eq!(Font::with_scale(0).scale(), 1);
    }
}
