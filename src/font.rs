//! Fixed-pitch bitmap fonts for text drawing.
//!
//! Three sizes are available, named for their glyph height; every glyph is
//! half as wide as it is tall. Each font covers the printable ASCII range
//! (32-126), stored row-major with the most significant bit of a row's
//! first byte as the leftmost pixel.

/// First encoded character.
const GLYPH_FIRST: u8 = b' ';
/// Number of encoded characters.
const GLYPH_COUNT: usize = 95;

/// Bitmap font selection for [`write_string`](crate::display::Display::write_string).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Font {
    /// 6x12 pixels per glyph.
    Font12,
    /// 8x16 pixels per glyph.
    Font16,
    /// 12x24 pixels per glyph.
    Font24,
}

impl Font {
    /// Glyph width in pixels. Text advances by this much per character.
    pub fn width(self) -> u8 {
        self.height() / 2
    }

    /// Glyph height in pixels.
    pub fn height(self) -> u8 {
        match self {
            Font::Font12 => 12,
            Font::Font16 => 16,
            Font::Font24 => 24,
        }
    }

    /// Bytes spanned by one glyph row.
    fn row_stride(self) -> usize {
        match self {
            Font::Font12 | Font::Font16 => 1,
            Font::Font24 => 2,
        }
    }

    fn table(self) -> &'static [u8] {
        match self {
            Font::Font12 => &FONT12,
            Font::Font16 => &FONT16,
            Font::Font24 => &FONT24,
        }
    }

    /// Looks up the bitmap for `c`. Returns `None` outside printable ASCII.
    pub(crate) fn glyph(self, c: char) -> Option<&'static [u8]> {
        let index = (c as usize).checked_sub(GLYPH_FIRST as usize)?;
        if index >= GLYPH_COUNT {
            return None;
        }
        let size = self.height() as usize * self.row_stride();
        Some(&self.table()[index * size..(index + 1) * size])
    }

    /// True when pixel (`x`, `y`) of `glyph` is set.
    pub(crate) fn glyph_bit(self, glyph: &[u8], x: u8, y: u8) -> bool {
        let byte = glyph[y as usize * self.row_stride() + x as usize / 8];
        byte & (0x80 >> (x % 8)) != 0
    }
}

static FONT12: [u8; 95 * 12] = [
    // Space (32)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    // ! (33)
    0x00, 0x30, 0x70, 0x70, 0x30, 0x30, 0x30, 0x30,
    0x30, 0x00, 0x00, 0x00,
    // " (34)
    0xD8, 0xD8, 0xD8, 0x50, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    // # (35)
    0x00, 0x00, 0xD0, 0xF8, 0xD0, 0xD0, 0xF8, 0xD0,
    0xD0, 0x00, 0x00, 0x00,
    // $ (36)
    0x30, 0xF0, 0x98, 0x88, 0xF0, 0x18, 0x98, 0x98,
    0xF0, 0x30, 0x00, 0x00,
    // % (37)
    0x00, 0x00, 0x00, 0x98, 0x10, 0x30, 0xE0, 0x98,
    0x98, 0x00, 0x00, 0x00,
    // & (38)
    0x00, 0x70, 0xD0, 0xF0, 0xF8, 0xB0, 0x90, 0x90,
    0xF8, 0x00, 0x00, 0x00,
    // ' (39)
    0x60, 0x60, 0x60, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    // ( (40)
    0x00, 0x10, 0x30, 0x60, 0x60, 0x60, 0x60, 0x30,
    0x10, 0x00, 0x00, 0x00,
    // ) (41)
    0x00, 0x60, 0x30, 0x10, 0x10, 0x10, 0x10, 0x30,
    0x60, 0x00, 0x00, 0x00,
    // * (42)
    0x00, 0x00, 0x00, 0xD8, 0x70, 0xFC, 0xF8, 0x00,
    0x00, 0x00, 0x00, 0x00,
    // + (43)
    0x00, 0x00, 0x00, 0x30, 0x30, 0xF8, 0x30, 0x00,
    0x00, 0x00, 0x00, 0x00,
    // , (44)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x30,
    0x30, 0x60, 0x00, 0x00,
    // - (45)
    0x00, 0x00, 0x00, 0x00, 0x00, 0xF8, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    // . (46)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x30,
    0x30, 0x00, 0x00, 0x00,
    // / (47)
    0x00, 0x00, 0x00, 0x18, 0x10, 0x30, 0xE0, 0x80,
    0x80, 0x00, 0x00, 0x00,
    // 0 (48)
    0x00, 0x70, 0xD0, 0x98, 0xB8, 0xB8, 0x98, 0xD0,
    0x70, 0x00, 0x00, 0x00,
    // 1 (49)
    0x00, 0x30, 0x70, 0xF0, 0x30, 0x30, 0x30, 0x30,
    0xF8, 0x00, 0x00, 0x00,
    // 2 (50)
    0x00, 0xF0, 0x98, 0x18, 0x30, 0x60, 0xC0, 0x98,
    0xF8, 0x00, 0x00, 0x00,
    // 3 (51)
    0x00, 0xF0, 0x98, 0x18, 0x70, 0x18, 0x18, 0x98,
    0xF0, 0x00, 0x00, 0x00,
    // 4 (52)
    0x00, 0x10, 0x30, 0xF0, 0x90, 0xF8, 0x10, 0x10,
    0x38, 0x00, 0x00, 0x00,
    // 5 (53)
    0x00, 0xF8, 0x80, 0x80, 0xF0, 0x18, 0x18, 0x98,
    0xF0, 0x00, 0x00, 0x00,
    // 6 (54)
    0x00, 0x70, 0xC0, 0x80, 0xF0, 0x98, 0x98, 0x98,
    0xF0, 0x00, 0x00, 0x00,
    // 7 (55)
    0x00, 0xF8, 0x98, 0x18, 0x10, 0x30, 0x60, 0x60,
    0x60, 0x00, 0x00, 0x00,
    // 8 (56)
    0x00, 0xF0, 0x98, 0x98, 0xF0, 0x98, 0x98, 0x98,
    0xF0, 0x00, 0x00, 0x00,
    // 9 (57)
    0x00, 0xF0, 0x98, 0x98, 0xF8, 0x18, 0x18, 0x10,
    0xF0, 0x00, 0x00, 0x00,
    // : (58)
    0x00, 0x00, 0x00, 0x30, 0x00, 0x00, 0x30, 0x30,
    0x00, 0x00, 0x00, 0x00,
    // ; (59)
    0x00, 0x00, 0x00, 0x30, 0x00, 0x00, 0x30, 0x30,
    0x60, 0x00, 0x00, 0x00,
    // < (60)
    0x00, 0x00, 0x18, 0x30, 0x60, 0xC0, 0x70, 0x10,
    0x18, 0x00, 0x00, 0x00,
    // = (61)
    0x00, 0x00, 0x00, 0xF8, 0x00, 0x00, 0xF8, 0x00,
    0x00, 0x00, 0x00, 0x00,
    // > (62)
    0x00, 0x00, 0xC0, 0x70, 0x10, 0x18, 0x30, 0x60,
    0xC0, 0x00, 0x00, 0x00,
    // ? (63)
    0x00, 0xF0, 0x98, 0x98, 0x30, 0x30, 0x30, 0x30,
    0x30, 0x00, 0x00, 0x00,
    // @ (64)
    0x00, 0x00, 0xF0, 0x98, 0xB8, 0xB8, 0xB8, 0x80,
    0xF0, 0x00, 0x00, 0x00,
    // A (65)
    0x00, 0x20, 0x70, 0xD8, 0x98, 0xF8, 0x98, 0x98,
    0x98, 0x00, 0x00, 0x00,
    // B (66)
    0x00, 0xF0, 0xD8, 0xD8, 0xF0, 0xD8, 0xD8, 0xD8,
    0xF0, 0x00, 0x00, 0x00,
    // C (67)
    0x00, 0x70, 0xD8, 0x88, 0x80, 0x80, 0x88, 0xD8,
    0x70, 0x00, 0x00, 0x00,
    // D (68)
    0x00, 0xF0, 0xD0, 0xD8, 0xD8, 0xD8, 0xD8, 0xD0,
    0xF0, 0x00, 0x00, 0x00,
    // E (69)
    0x00, 0xF8, 0xD8, 0xD8, 0xF0, 0xD0, 0xC8, 0xD8,
    0xF8, 0x00, 0x00, 0x00,
    // F (70)
    0x00, 0xF8, 0xD8, 0xD8, 0xF0, 0xD0, 0xC0, 0xC0,
    0xE0, 0x00, 0x00, 0x00,
    // G (71)
    0x00, 0x70, 0xD8, 0x88, 0x80, 0xB8, 0x98, 0xD8,
    0x78, 0x00, 0x00, 0x00,
    // H (72)
    0x00, 0x98, 0x98, 0x98, 0xF8, 0x98, 0x98, 0x98,
    0x98, 0x00, 0x00, 0x00,
    // I (73)
    0x00, 0x70, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30,
    0x70, 0x00, 0x00, 0x00,
    // J (74)
    0x00, 0x38, 0x10, 0x10, 0x10, 0x10, 0x90, 0x90,
    0xF0, 0x00, 0x00, 0x00,
    // K (75)
    0x00, 0xD8, 0xD8, 0xD8, 0xF0, 0xF0, 0xD8, 0xD8,
    0xD8, 0x00, 0x00, 0x00,
    // L (76)
    0x00, 0xE0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC8, 0xD8,
    0xF8, 0x00, 0x00, 0x00,
    // M (77)
    0x00, 0x98, 0xD8, 0xF8, 0xB8, 0x98, 0x98, 0x98,
    0x98, 0x00, 0x00, 0x00,
    // N (78)
    0x00, 0x98, 0xD8, 0xF8, 0xB8, 0x98, 0x98, 0x98,
    0x98, 0x00, 0x00, 0x00,
    // O (79)
    0x00, 0xF0, 0x98, 0x98, 0x98, 0x98, 0x98, 0x98,
    0xF0, 0x00, 0x00, 0x00,
    // P (80)
    0x00, 0xF0, 0xD8, 0xD8, 0xF0, 0xC0, 0xC0, 0xC0,
    0xE0, 0x00, 0x00, 0x00,
    // Q (81)
    0x00, 0xF0, 0x98, 0x98, 0x98, 0x98, 0xB8, 0xB8,
    0xF0, 0x18, 0x00, 0x00,
    // R (82)
    0x00, 0xF0, 0xD8, 0xD8, 0xF0, 0xD0, 0xD8, 0xD8,
    0xD8, 0x00, 0x00, 0x00,
    // S (83)
    0x00, 0xF0, 0x98, 0xD8, 0x70, 0x10, 0x98, 0x98,
    0xF0, 0x00, 0x00, 0x00,
    // T (84)
    0x00, 0xF8, 0xF8, 0xB8, 0x30, 0x30, 0x30, 0x30,
    0x70, 0x00, 0x00, 0x00,
    // U (85)
    0x00, 0x98, 0x98, 0x98, 0x98, 0x98, 0x98, 0x98,
    0xF0, 0x00, 0x00, 0x00,
    // V (86)
    0x00, 0x98, 0x98, 0x98, 0x98, 0x98, 0xD8, 0x70,
    0x20, 0x00, 0x00, 0x00,
    // W (87)
    0x00, 0x98, 0x98, 0x98, 0xB8, 0xB8, 0xF8, 0xD8,
    0xD0, 0x00, 0x00, 0x00,
    // X (88)
    0x00, 0x98, 0x98, 0xF0, 0x70, 0x70, 0xF0, 0x98,
    0x98, 0x00, 0x00, 0x00,
    // Y (89)
    0x00, 0xD8, 0xD8, 0xD8, 0x70, 0x30, 0x30, 0x30,
    0x70, 0x00, 0x00, 0x00,
    // Z (90)
    0x00, 0xF8, 0x98, 0x98, 0x30, 0x60, 0xC8, 0x98,
    0xF8, 0x00, 0x00, 0x00,
    // [ (91)
    0x00, 0x70, 0x60, 0x60, 0x60, 0x60, 0x60, 0x60,
    0x70, 0x00, 0x00, 0x00,
    // \ (92)
    0x00, 0x00, 0x80, 0xC0, 0x60, 0x30, 0x18, 0x08,
    0x00, 0x00, 0x00, 0x00,
    // ] (93)
    0x00, 0x70, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10,
    0x70, 0x00, 0x00, 0x00,
    // ^ (94)
    0x70, 0xD0, 0x98, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    // _ (95)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0xFC, 0x00, 0x00,
    // ` (96)
    0x60, 0x30, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    // a (97)
    0x00, 0x00, 0x00, 0xF0, 0x10, 0xF0, 0x90, 0x90,
    0xF8, 0x00, 0x00, 0x00,
    // b (98)
    0x00, 0xC0, 0xC0, 0xF0, 0xD0, 0xD8, 0xD8, 0xD8,
    0xF0, 0x00, 0x00, 0x00,
    // c (99)
    0x00, 0x00, 0x00, 0xF0, 0x98, 0x80, 0x80, 0x98,
    0xF0, 0x00, 0x00, 0x00,
    // d (100)
    0x00, 0x30, 0x10, 0x70, 0xD0, 0x90, 0x90, 0x90,
    0xF8, 0x00, 0x00, 0x00,
    // e (101)
    0x00, 0x00, 0x00, 0xF0, 0x98, 0xF8, 0x80, 0x98,
    0xF0, 0x00, 0x00, 0x00,
    // f (102)
    0x00, 0x30, 0x78, 0x68, 0xF0, 0x60, 0x60, 0x60,
    0xF0, 0x00, 0x00, 0x00,
    // g (103)
    0x00, 0x00, 0x00, 0xF8, 0x90, 0x90, 0x90, 0x90,
    0xF0, 0x90, 0xF0, 0x00,
    // h (104)
    0x00, 0xC0, 0xC0, 0xD0, 0xF8, 0xD8, 0xD8, 0xD8,
    0xD8, 0x00, 0x00, 0x00,
    // i (105)
    0x00, 0x30, 0x30, 0x70, 0x30, 0x30, 0x30, 0x30,
    0x70, 0x00, 0x00, 0x00,
    // j (106)
    0x00, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18,
    0x18, 0xD8, 0x70, 0x00,
    // k (107)
    0x00, 0xC0, 0xC0, 0xD8, 0xD0, 0xF0, 0xF0, 0xD8,
    0xD8, 0x00, 0x00, 0x00,
    // l (108)
    0x00, 0x70, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30,
    0x70, 0x00, 0x00, 0x00,
    // m (109)
    0x00, 0x00, 0x00, 0xD0, 0xF8, 0xB8, 0xB8, 0xB8,
    0x98, 0x00, 0x00, 0x00,
    // n (110)
    0x00, 0x00, 0x00, 0xB0, 0xD8, 0xD8, 0xD8, 0xD8,
    0xD8, 0x00, 0x00, 0x00,
    // o (111)
    0x00, 0x00, 0x00, 0xF0, 0x98, 0x98, 0x98, 0x98,
    0xF0, 0x00, 0x00, 0x00,
    // p (112)
    0x00, 0x00, 0x00, 0xB0, 0xD8, 0xD8, 0xD8, 0xD8,
    0xF0, 0xC0, 0xE0, 0x00,
    // q (113)
    0x00, 0x00, 0x00, 0xF8, 0x90, 0x90, 0x90, 0x90,
    0xF0, 0x10, 0x38, 0x00,
    // r (114)
    0x00, 0x00, 0x00, 0xB0, 0xF8, 0xD8, 0xC0, 0xC0,
    0xE0, 0x00, 0x00, 0x00,
    // s (115)
    0x00, 0x00, 0x00, 0xF0, 0x98, 0xC0, 0x70, 0x98,
    0xF0, 0x00, 0x00, 0x00,
    // t (116)
    0x00, 0x20, 0x60, 0xF0, 0x60, 0x60, 0x60, 0x78,
    0x30, 0x00, 0x00, 0x00,
    // u (117)
    0x00, 0x00, 0x00, 0x90, 0x90, 0x90, 0x90, 0x90,
    0xF8, 0x00, 0x00, 0x00,
    // v (118)
    0x00, 0x00, 0x00, 0xD8, 0xD8, 0xD8, 0xD8, 0x70,
    0x30, 0x00, 0x00, 0x00,
    // w (119)
    0x00, 0x00, 0x00, 0x98, 0x98, 0xB8, 0xB8, 0xF8,
    0xD0, 0x00, 0x00, 0x00,
    // x (120)
    0x00, 0x00, 0x00, 0x98, 0xD0, 0x70, 0x70, 0xD0,
    0x98, 0x00, 0x00, 0x00,
    // y (121)
    0x00, 0x00, 0x00, 0x98, 0x98, 0x98, 0x98, 0x98,
    0xF8, 0x18, 0xF0, 0x00,
    // z (122)
    0x00, 0x00, 0x00, 0xF8, 0x90, 0x30, 0xE0, 0x98,
    0xF8, 0x00, 0x00, 0x00,
    // { (123)
    0x00, 0x18, 0x30, 0x30, 0xE0, 0x30, 0x30, 0x30,
    0x18, 0x00, 0x00, 0x00,
    // | (124)
    0x00, 0x30, 0x30, 0x30, 0x00, 0x30, 0x30, 0x30,
    0x30, 0x00, 0x00, 0x00,
    // } (125)
    0x00, 0xE0, 0x30, 0x30, 0x18, 0x30, 0x30, 0x30,
    0xE0, 0x00, 0x00, 0x00,
    // ~ (126)
    0x00, 0xF8, 0xB0, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

static FONT16: [u8; 95 * 16] = [
    // Space (32)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // ! (33)
    0x00, 0x00, 0x18, 0x3C, 0x3C, 0x3C, 0x18, 0x18,
    0x18, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00,
    // " (34)
    0x00, 0x66, 0x66, 0x66, 0x24, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // # (35)
    0x00, 0x00, 0x00, 0x6C, 0x6C, 0xFE, 0x6C, 0x6C,
    0x6C, 0xFE, 0x6C, 0x6C, 0x00, 0x00, 0x00, 0x00,
    // $ (36)
    0x18, 0x18, 0x7C, 0xC6, 0xC2, 0xC0, 0x7C, 0x06,
    0x06, 0x86, 0xC6, 0x7C, 0x18, 0x18, 0x00, 0x00,
    // % (37)
    0x00, 0x00, 0x00, 0x00, 0xC2, 0xC6, 0x0C, 0x18,
    0x30, 0x60, 0xC6, 0x86, 0x00, 0x00, 0x00, 0x00,
    // & (38)
    0x00, 0x00, 0x38, 0x6C, 0x6C, 0x38, 0x76, 0xDC,
    0xCC, 0xCC, 0xCC, 0x76, 0x00, 0x00, 0x00, 0x00,
    // ' (39)
    0x00, 0x30, 0x30, 0x30, 0x60, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // ( (40)
    0x00, 0x00, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x30,
    0x30, 0x30, 0x18, 0x0C, 0x00, 0x00, 0x00, 0x00,
    // ) (41)
    0x00, 0x00, 0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x0C,
    0x0C, 0x0C, 0x18, 0x30, 0x00, 0x00, 0x00, 0x00,
    // * (42)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x66, 0x3C, 0xFF,
    0x3C, 0x66, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // + (43)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x7E,
    0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // , (44)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x18, 0x18, 0x18, 0x30, 0x00, 0x00, 0x00,
    // - (45)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFE,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // . (46)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00,
    // / (47)
    0x00, 0x00, 0x00, 0x00, 0x02, 0x06, 0x0C, 0x18,
    0x30, 0x60, 0xC0, 0x80, 0x00, 0x00, 0x00, 0x00,
    // 0 (48)
    0x00, 0x00, 0x38, 0x6C, 0xC6, 0xC6, 0xD6, 0xD6,
    0xC6, 0xC6, 0x6C, 0x38, 0x00, 0x00, 0x00, 0x00,
    // 1 (49)
    0x00, 0x00, 0x18, 0x38, 0x78, 0x18, 0x18, 0x18,
    0x18, 0x18, 0x18, 0x7E, 0x00, 0x00, 0x00, 0x00,
    // 2 (50)
    0x00, 0x00, 0x7C, 0xC6, 0x06, 0x0C, 0x18, 0x30,
    0x60, 0xC0, 0xC6, 0xFE, 0x00, 0x00, 0x00, 0x00,
    // 3 (51)
    0x00, 0x00, 0x7C, 0xC6, 0x06, 0x06, 0x3C, 0x06,
    0x06, 0x06, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 4 (52)
    0x00, 0x00, 0x0C, 0x1C, 0x3C, 0x6C, 0xCC, 0xFE,
    0x0C, 0x0C, 0x0C, 0x1E, 0x00, 0x00, 0x00, 0x00,
    // 5 (53)
    0x00, 0x00, 0xFE, 0xC0, 0xC0, 0xC0, 0xFC, 0x06,
    0x06, 0x06, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 6 (54)
    0x00, 0x00, 0x38, 0x60, 0xC0, 0xC0, 0xFC, 0xC6,
    0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 7 (55)
    0x00, 0x00, 0xFE, 0xC6, 0x06, 0x06, 0x0C, 0x18,
    0x30, 0x30, 0x30, 0x30, 0x00, 0x00, 0x00, 0x00,
    // 8 (56)
    0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0x7C, 0xC6,
    0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // 9 (57)
    0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0x7E, 0x06,
    0x06, 0x06, 0x0C, 0x78, 0x00, 0x00, 0x00, 0x00,
    // : (58)
    0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00,
    0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00,
    // ; (59)
    0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00,
    0x00, 0x18, 0x18, 0x30, 0x00, 0x00, 0x00, 0x00,
    // < (60)
    0x00, 0x00, 0x00, 0x06, 0x0C, 0x18, 0x30, 0x60,
    0x30, 0x18, 0x0C, 0x06, 0x00, 0x00, 0x00, 0x00,
    // = (61)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x7E, 0x00, 0x00,
    0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // > (62)
    0x00, 0x00, 0x00, 0x60, 0x30, 0x18, 0x0C, 0x06,
    0x0C, 0x18, 0x30, 0x60, 0x00, 0x00, 0x00, 0x00,
    // ? (63)
    0x00, 0x00, 0x7C, 0xC6, 0xC6, 0x0C, 0x18, 0x18,
    0x18, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00,
    // @ (64)
    0x00, 0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xDE, 0xDE,
    0xDE, 0xDC, 0xC0, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // A (65)
    0x00, 0x00, 0x10, 0x38, 0x6C, 0xC6, 0xC6, 0xFE,
    0xC6, 0xC6, 0xC6, 0xC6, 0x00, 0x00, 0x00, 0x00,
    // B (66)
    0x00, 0x00, 0xFC, 0x66, 0x66, 0x66, 0x7C, 0x66,
    0x66, 0x66, 0x66, 0xFC, 0x00, 0x00, 0x00, 0x00,
    // C (67)
    0x00, 0x00, 0x3C, 0x66, 0xC2, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC2, 0x66, 0x3C, 0x00, 0x00, 0x00, 0x00,
    // D (68)
    0x00, 0x00, 0xF8, 0x6C, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x6C, 0xF8, 0x00, 0x00, 0x00, 0x00,
    // E (69)
    0x00, 0x00, 0xFE, 0x66, 0x62, 0x68, 0x78, 0x68,
    0x60, 0x62, 0x66, 0xFE, 0x00, 0x00, 0x00, 0x00,
    // F (70)
    0x00, 0x00, 0xFE, 0x66, 0x62, 0x68, 0x78, 0x68,
    0x60, 0x60, 0x60, 0xF0, 0x00, 0x00, 0x00, 0x00,
    // G (71)
    0x00, 0x00, 0x3C, 0x66, 0xC2, 0xC0, 0xC0, 0xDE,
    0xC6, 0xC6, 0x66, 0x3A, 0x00, 0x00, 0x00, 0x00,
    // H (72)
    0x00, 0x00, 0xC6, 0xC6, 0xC6, 0xC6, 0xFE, 0xC6,
    0xC6, 0xC6, 0xC6, 0xC6, 0x00, 0x00, 0x00, 0x00,
    // I (73)
    0x00, 0x00, 0x3C, 0x18, 0x18, 0x18, 0x18, 0x18,
    0x18, 0x18, 0x18, 0x3C, 0x00, 0x00, 0x00, 0x00,
    // J (74)
    0x00, 0x00, 0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C,
    0xCC, 0xCC, 0xCC, 0x78, 0x00, 0x00, 0x00, 0x00,
    // K (75)
    0x00, 0x00, 0xE6, 0x66, 0x66, 0x6C, 0x78, 0x78,
    0x6C, 0x66, 0x66, 0xE6, 0x00, 0x00, 0x00, 0x00,
    // L (76)
    0x00, 0x00, 0xF0, 0x60, 0x60, 0x60, 0x60, 0x60,
    0x60, 0x62, 0x66, 0xFE, 0x00, 0x00, 0x00, 0x00,
    // M (77)
    0x00, 0x00, 0xC6, 0xEE, 0xFE, 0xFE, 0xD6, 0xC6,
    0xC6, 0xC6, 0xC6, 0xC6, 0x00, 0x00, 0x00, 0x00,
    // N (78)
    0x00, 0x00, 0xC6, 0xE6, 0xF6, 0xFE, 0xDE, 0xCE,
    0xC6, 0xC6, 0xC6, 0xC6, 0x00, 0x00, 0x00, 0x00,
    // O (79)
    0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6,
    0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // P (80)
    0x00, 0x00, 0xFC, 0x66, 0x66, 0x66, 0x7C, 0x60,
    0x60, 0x60, 0x60, 0xF0, 0x00, 0x00, 0x00, 0x00,
    // Q (81)
    0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6,
    0xC6, 0xD6, 0xDE, 0x7C, 0x0C, 0x0E, 0x00, 0x00,
    // R (82)
    0x00, 0x00, 0xFC, 0x66, 0x66, 0x66, 0x7C, 0x6C,
    0x66, 0x66, 0x66, 0xE6, 0x00, 0x00, 0x00, 0x00,
    // S (83)
    0x00, 0x00, 0x7C, 0xC6, 0xC6, 0x60, 0x38, 0x0C,
    0x06, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // T (84)
    0x00, 0x00, 0x7E, 0x7E, 0x5A, 0x18, 0x18, 0x18,
    0x18, 0x18, 0x18, 0x3C, 0x00, 0x00, 0x00, 0x00,
    // U (85)
    0x00, 0x00, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6,
    0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // V (86)
    0x00, 0x00, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6,
    0xC6, 0x6C, 0x38, 0x10, 0x00, 0x00, 0x00, 0x00,
    // W (87)
    0x00, 0x00, 0xC6, 0xC6, 0xC6, 0xC6, 0xD6, 0xD6,
    0xD6, 0xFE, 0xEE, 0x6C, 0x00, 0x00, 0x00, 0x00,
    // X (88)
    0x00, 0x00, 0xC6, 0xC6, 0x6C, 0x7C, 0x38, 0x38,
    0x7C, 0x6C, 0xC6, 0xC6, 0x00, 0x00, 0x00, 0x00,
    // Y (89)
    0x00, 0x00, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x18,
    0x18, 0x18, 0x18, 0x3C, 0x00, 0x00, 0x00, 0x00,
    // Z (90)
    0x00, 0x00, 0xFE, 0xC6, 0x86, 0x0C, 0x18, 0x30,
    0x60, 0xC2, 0xC6, 0xFE, 0x00, 0x00, 0x00, 0x00,
    // [ (91)
    0x00, 0x00, 0x3C, 0x30, 0x30, 0x30, 0x30, 0x30,
    0x30, 0x30, 0x30, 0x3C, 0x00, 0x00, 0x00, 0x00,
    // \ (92)
    0x00, 0x00, 0x00, 0x80, 0xC0, 0x60, 0x30, 0x18,
    0x0C, 0x06, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00,
    // ] (93)
    0x00, 0x00, 0x3C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C,
    0x0C, 0x0C, 0x0C, 0x3C, 0x00, 0x00, 0x00, 0x00,
    // ^ (94)
    0x10, 0x38, 0x6C, 0xC6, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // _ (95)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00,
    // ` (96)
    0x00, 0x30, 0x18, 0x0C, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // a (97)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x78, 0x0C, 0x7C,
    0xCC, 0xCC, 0xCC, 0x76, 0x00, 0x00, 0x00, 0x00,
    // b (98)
    0x00, 0x00, 0xE0, 0x60, 0x60, 0x78, 0x6C, 0x66,
    0x66, 0x66, 0x66, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // c (99)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0xC0,
    0xC0, 0xC0, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // d (100)
    0x00, 0x00, 0x1C, 0x0C, 0x0C, 0x3C, 0x6C, 0xCC,
    0xCC, 0xCC, 0xCC, 0x76, 0x00, 0x00, 0x00, 0x00,
    // e (101)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0xFE,
    0xC0, 0xC0, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // f (102)
    0x00, 0x00, 0x1C, 0x36, 0x32, 0x30, 0x78, 0x30,
    0x30, 0x30, 0x30, 0x78, 0x00, 0x00, 0x00, 0x00,
    // g (103)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x76, 0xCC, 0xCC,
    0xCC, 0xCC, 0xCC, 0x7C, 0x0C, 0xCC, 0x78, 0x00,
    // h (104)
    0x00, 0x00, 0xE0, 0x60, 0x60, 0x6C, 0x76, 0x66,
    0x66, 0x66, 0x66, 0xE6, 0x00, 0x00, 0x00, 0x00,
    // i (105)
    0x00, 0x00, 0x18, 0x18, 0x00, 0x38, 0x18, 0x18,
    0x18, 0x18, 0x18, 0x3C, 0x00, 0x00, 0x00, 0x00,
    // j (106)
    0x00, 0x00, 0x06, 0x06, 0x00, 0x0E, 0x06, 0x06,
    0x06, 0x06, 0x06, 0x06, 0x66, 0x66, 0x3C, 0x00,
    // k (107)
    0x00, 0x00, 0xE0, 0x60, 0x60, 0x66, 0x6C, 0x78,
    0x78, 0x6C, 0x66, 0xE6, 0x00, 0x00, 0x00, 0x00,
    // l (108)
    0x00, 0x00, 0x38, 0x18, 0x18, 0x18, 0x18, 0x18,
    0x18, 0x18, 0x18, 0x3C, 0x00, 0x00, 0x00, 0x00,
    // m (109)
    0x00, 0x00, 0x00, 0x00, 0x00, 0xEC, 0xFE, 0xD6,
    0xD6, 0xD6, 0xD6, 0xC6, 0x00, 0x00, 0x00, 0x00,
    // n (110)
    0x00, 0x00, 0x00, 0x00, 0x00, 0xDC, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x00, 0x00, 0x00, 0x00,
    // o (111)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0xC6,
    0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // p (112)
    0x00, 0x00, 0x00, 0x00, 0x00, 0xDC, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x7C, 0x60, 0x60, 0xF0, 0x00,
    // q (113)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x76, 0xCC, 0xCC,
    0xCC, 0xCC, 0xCC, 0x7C, 0x0C, 0x0C, 0x1E, 0x00,
    // r (114)
    0x00, 0x00, 0x00, 0x00, 0x00, 0xDC, 0x76, 0x66,
    0x60, 0x60, 0x60, 0xF0, 0x00, 0x00, 0x00, 0x00,
    // s (115)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x7C, 0xC6, 0x60,
    0x38, 0x0C, 0xC6, 0x7C, 0x00, 0x00, 0x00, 0x00,
    // t (116)
    0x00, 0x00, 0x10, 0x30, 0x30, 0xFC, 0x30, 0x30,
    0x30, 0x30, 0x36, 0x1C, 0x00, 0x00, 0x00, 0x00,
    // u (117)
    0x00, 0x00, 0x00, 0x00, 0x00, 0xCC, 0xCC, 0xCC,
    0xCC, 0xCC, 0xCC, 0x76, 0x00, 0x00, 0x00, 0x00,
    // v (118)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x3C, 0x18, 0x00, 0x00, 0x00, 0x00,
    // w (119)
    0x00, 0x00, 0x00, 0x00, 0x00, 0xC6, 0xC6, 0xD6,
    0xD6, 0xD6, 0xFE, 0x6C, 0x00, 0x00, 0x00, 0x00,
    // x (120)
    0x00, 0x00, 0x00, 0x00, 0x00, 0xC6, 0x6C, 0x38,
    0x38, 0x38, 0x6C, 0xC6, 0x00, 0x00, 0x00, 0x00,
    // y (121)
    0x00, 0x00, 0x00, 0x00, 0x00, 0xC6, 0xC6, 0xC6,
    0xC6, 0xC6, 0xC6, 0x7E, 0x06, 0x0C, 0xF8, 0x00,
    // z (122)
    0x00, 0x00, 0x00, 0x00, 0x00, 0xFE, 0xCC, 0x18,
    0x30, 0x60, 0xC6, 0xFE, 0x00, 0x00, 0x00, 0x00,
    // { (123)
    0x00, 0x00, 0x0E, 0x18, 0x18, 0x18, 0x70, 0x18,
    0x18, 0x18, 0x18, 0x0E, 0x00, 0x00, 0x00, 0x00,
    // | (124)
    0x00, 0x00, 0x18, 0x18, 0x18, 0x18, 0x00, 0x18,
    0x18, 0x18, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00,
    // } (125)
    0x00, 0x00, 0x70, 0x18, 0x18, 0x18, 0x0E, 0x18,
    0x18, 0x18, 0x18, 0x70, 0x00, 0x00, 0x00, 0x00,
    // ~ (126)
    0x00, 0x00, 0x76, 0xDC, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

static FONT24: [u8; 95 * 48] = [
    // Space (32)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // ! (33)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x1F, 0x80, 0x1F, 0x80, 0x1F, 0x80,
    0x1F, 0x80, 0x07, 0x00, 0x07, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x07, 0x00, 0x00, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // " (34)
    0x00, 0x00, 0x00, 0x00, 0x38, 0xE0, 0x38, 0xE0,
    0x38, 0xE0, 0x38, 0xE0, 0x18, 0x80, 0x18, 0x80,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // # (35)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x3B, 0x80, 0x3B, 0x80, 0x3B, 0x80,
    0xFF, 0xE0, 0x3B, 0x80, 0x3B, 0x80, 0x3B, 0x80,
    0x3B, 0x80, 0x3B, 0x80, 0xFF, 0xE0, 0x3B, 0x80,
    0x3B, 0x80, 0x3B, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // $ (36)
    0x07, 0x00, 0x07, 0x00, 0x07, 0x00, 0x3F, 0x80,
    0x3F, 0x80, 0xE0, 0xE0, 0xE0, 0x60, 0xE0, 0x60,
    0xE0, 0x00, 0x3F, 0x80, 0x3F, 0x80, 0x00, 0xE0,
    0x00, 0xE0, 0x00, 0xE0, 0xC0, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0x3F, 0x80, 0x07, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // % (37)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xE0, 0x60, 0xE0, 0x60,
    0xE0, 0xE0, 0x03, 0x80, 0x03, 0x80, 0x07, 0x00,
    0x1C, 0x00, 0x1C, 0x00, 0x38, 0x00, 0xE0, 0xE0,
    0xE0, 0xE0, 0xC0, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // & (38)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00,
    0x1F, 0x00, 0x3B, 0x80, 0x3B, 0x80, 0x3B, 0x80,
    0x1F, 0x00, 0x3C, 0xE0, 0x3C, 0xE0, 0xE7, 0x80,
    0xE3, 0x80, 0xE3, 0x80, 0xE3, 0x80, 0xE3, 0x80,
    0xE3, 0x80, 0x3C, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // ' (39)
    0x00, 0x00, 0x00, 0x00, 0x1C, 0x00, 0x1C, 0x00,
    0x1C, 0x00, 0x1C, 0x00, 0x38, 0x00, 0x38, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // ( (40)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x80,
    0x03, 0x80, 0x07, 0x00, 0x1C, 0x00, 0x1C, 0x00,
    0x1C, 0x00, 0x1C, 0x00, 0x1C, 0x00, 0x1C, 0x00,
    0x1C, 0x00, 0x1C, 0x00, 0x1C, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x03, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // ) (41)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1C, 0x00,
    0x1C, 0x00, 0x07, 0x00, 0x03, 0x80, 0x03, 0x80,
    0x03, 0x80, 0x03, 0x80, 0x03, 0x80, 0x03, 0x80,
    0x03, 0x80, 0x03, 0x80, 0x03, 0x80, 0x07, 0x00,
    0x07, 0x00, 0x1C, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // * (42)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x38, 0xE0, 0x1F, 0x80, 0x1F, 0x80, 0xFF, 0xF0,
    0x1F, 0x80, 0x1F, 0x80, 0x38, 0xE0, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // + (43)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x07, 0x00, 0x07, 0x00, 0x07, 0x00, 0x3F, 0xE0,
    0x07, 0x00, 0x07, 0x00, 0x07, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // , (44)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x07, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x07, 0x00, 0x1C, 0x00, 0x1C, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // - (45)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xE0,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // . (46)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // / (47)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x00, 0x60,
    0x00, 0xE0, 0x03, 0x80, 0x03, 0x80, 0x07, 0x00,
    0x1C, 0x00, 0x1C, 0x00, 0x38, 0x00, 0xE0, 0x00,
    0xE0, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 0 (48)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00,
    0x1F, 0x00, 0x3B, 0x80, 0xE0, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0xE4, 0xE0, 0xE4, 0xE0, 0xE4, 0xE0,
    0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0x3B, 0x80,
    0x3B, 0x80, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 1 (49)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x1F, 0x00, 0x3F, 0x00, 0x3F, 0x00,
    0x07, 0x00, 0x07, 0x00, 0x07, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x07, 0x00, 0x07, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x3F, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 2 (50)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0x80,
    0x3F, 0x80, 0xE0, 0xE0, 0x00, 0xE0, 0x00, 0xE0,
    0x03, 0x80, 0x07, 0x00, 0x07, 0x00, 0x1C, 0x00,
    0x38, 0x00, 0x38, 0x00, 0xE0, 0x00, 0xE0, 0xE0,
    0xE0, 0xE0, 0xFF, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 3 (51)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0x80,
    0x3F, 0x80, 0xE0, 0xE0, 0x00, 0xE0, 0x00, 0xE0,
    0x00, 0xE0, 0x1F, 0x80, 0x1F, 0x80, 0x00, 0xE0,
    0x00, 0xE0, 0x00, 0xE0, 0x00, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0x3F, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 4 (52)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x80,
    0x03, 0x80, 0x07, 0x80, 0x1F, 0x80, 0x1F, 0x80,
    0x3B, 0x80, 0xE3, 0x80, 0xE3, 0x80, 0xFF, 0xE0,
    0x03, 0x80, 0x03, 0x80, 0x03, 0x80, 0x03, 0x80,
    0x03, 0x80, 0x07, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 5 (53)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xE0,
    0xFF, 0xE0, 0xE0, 0x00, 0xE0, 0x00, 0xE0, 0x00,
    0xE0, 0x00, 0xFF, 0x80, 0xFF, 0x80, 0x00, 0xE0,
    0x00, 0xE0, 0x00, 0xE0, 0x00, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0x3F, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 6 (54)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00,
    0x1F, 0x00, 0x38, 0x00, 0xE0, 0x00, 0xE0, 0x00,
    0xE0, 0x00, 0xFF, 0x80, 0xFF, 0x80, 0xE0, 0xE0,
    0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0x3F, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 7 (55)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xE0,
    0xFF, 0xE0, 0xE0, 0xE0, 0x00, 0xE0, 0x00, 0xE0,
    0x00, 0xE0, 0x03, 0x80, 0x03, 0x80, 0x07, 0x00,
    0x1C, 0x00, 0x1C, 0x00, 0x1C, 0x00, 0x1C, 0x00,
    0x1C, 0x00, 0x1C, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 8 (56)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0x80,
    0x3F, 0x80, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0x3F, 0x80, 0x3F, 0x80, 0xE0, 0xE0,
    0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0x3F, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 9 (57)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0x80,
    0x3F, 0x80, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0x3F, 0xE0, 0x3F, 0xE0, 0x00, 0xE0,
    0x00, 0xE0, 0x00, 0xE0, 0x00, 0xE0, 0x03, 0x80,
    0x03, 0x80, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // : (58)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x07, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x07, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // ; (59)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x07, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x07, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x1C, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // < (60)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0xE0, 0x03, 0x80, 0x03, 0x80,
    0x07, 0x00, 0x1C, 0x00, 0x1C, 0x00, 0x38, 0x00,
    0x1C, 0x00, 0x1C, 0x00, 0x07, 0x00, 0x03, 0x80,
    0x03, 0x80, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // = (61)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0xE0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0xE0, 0x3F, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // > (62)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x38, 0x00, 0x1C, 0x00, 0x1C, 0x00,
    0x07, 0x00, 0x03, 0x80, 0x03, 0x80, 0x00, 0xE0,
    0x03, 0x80, 0x03, 0x80, 0x07, 0x00, 0x1C, 0x00,
    0x1C, 0x00, 0x38, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // ? (63)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0x80,
    0x3F, 0x80, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0,
    0x03, 0x80, 0x07, 0x00, 0x07, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x07, 0x00, 0x00, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // @ (64)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x3F, 0x80, 0xE0, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0xE7, 0xE0, 0xE7, 0xE0, 0xE7, 0xE0,
    0xE7, 0xE0, 0xE7, 0xE0, 0xE7, 0x80, 0xE0, 0x00,
    0xE0, 0x00, 0x3F, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // A (65)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00,
    0x04, 0x00, 0x1F, 0x00, 0x3B, 0x80, 0x3B, 0x80,
    0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xFF, 0xE0,
    0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0xE0, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // B (66)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x80,
    0xFF, 0x80, 0x38, 0xE0, 0x38, 0xE0, 0x38, 0xE0,
    0x38, 0xE0, 0x3F, 0x80, 0x3F, 0x80, 0x38, 0xE0,
    0x38, 0xE0, 0x38, 0xE0, 0x38, 0xE0, 0x38, 0xE0,
    0x38, 0xE0, 0xFF, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // C (67)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x80,
    0x1F, 0x80, 0x38, 0xE0, 0xE0, 0x60, 0xE0, 0x60,
    0xE0, 0x00, 0xE0, 0x00, 0xE0, 0x00, 0xE0, 0x00,
    0xE0, 0x00, 0xE0, 0x00, 0xE0, 0x60, 0x38, 0xE0,
    0x38, 0xE0, 0x1F, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // D (68)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x00,
    0xFF, 0x00, 0x3B, 0x80, 0x38, 0xE0, 0x38, 0xE0,
    0x38, 0xE0, 0x38, 0xE0, 0x38, 0xE0, 0x38, 0xE0,
    0x38, 0xE0, 0x38, 0xE0, 0x38, 0xE0, 0x3B, 0x80,
    0x3B, 0x80, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // E (69)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xE0,
    0xFF, 0xE0, 0x38, 0xE0, 0x38, 0x60, 0x38, 0x60,
    0x3B, 0x00, 0x3F, 0x00, 0x3F, 0x00, 0x3B, 0x00,
    0x38, 0x00, 0x38, 0x00, 0x38, 0x60, 0x38, 0xE0,
    0x38, 0xE0, 0xFF, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // F (70)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xE0,
    0xFF, 0xE0, 0x38, 0xE0, 0x38, 0x60, 0x38, 0x60,
    0x3B, 0x00, 0x3F, 0x00, 0x3F, 0x00, 0x3B, 0x00,
    0x38, 0x00, 0x38, 0x00, 0x38, 0x00, 0x38, 0x00,
    0x38, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // G (71)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x80,
    0x1F, 0x80, 0x38, 0xE0, 0xE0, 0x60, 0xE0, 0x60,
    0xE0, 0x00, 0xE0, 0x00, 0xE0, 0x00, 0xE7, 0xE0,
    0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0x38, 0xE0,
    0x38, 0xE0, 0x1F, 0x60, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // H (72)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xE0, 0xE0,
    0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0xFF, 0xE0, 0xFF, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0xE0, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // I (73)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x80,
    0x1F, 0x80, 0x07, 0x00, 0x07, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x07, 0x00, 0x07, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x07, 0x00, 0x07, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x1F, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // J (74)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0xE0,
    0x07, 0xE0, 0x03, 0x80, 0x03, 0x80, 0x03, 0x80,
    0x03, 0x80, 0x03, 0x80, 0x03, 0x80, 0x03, 0x80,
    0xE3, 0x80, 0xE3, 0x80, 0xE3, 0x80, 0xE3, 0x80,
    0xE3, 0x80, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // K (75)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF8, 0xE0,
    0xF8, 0xE0, 0x38, 0xE0, 0x38, 0xE0, 0x38, 0xE0,
    0x3B, 0x80, 0x3F, 0x00, 0x3F, 0x00, 0x3F, 0x00,
    0x3B, 0x80, 0x3B, 0x80, 0x38, 0xE0, 0x38, 0xE0,
    0x38, 0xE0, 0xF8, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // L (76)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFC, 0x00,
    0xFC, 0x00, 0x38, 0x00, 0x38, 0x00, 0x38, 0x00,
    0x38, 0x00, 0x38, 0x00, 0x38, 0x00, 0x38, 0x00,
    0x38, 0x00, 0x38, 0x00, 0x38, 0x60, 0x38, 0xE0,
    0x38, 0xE0, 0xFF, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // M (77)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xE0, 0xE0,
    0xE0, 0xE0, 0xFB, 0xE0, 0xFF, 0xE0, 0xFF, 0xE0,
    0xFF, 0xE0, 0xE4, 0xE0, 0xE4, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0xE0, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // N (78)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xE0, 0xE0,
    0xE0, 0xE0, 0xF8, 0xE0, 0xFC, 0xE0, 0xFC, 0xE0,
    0xFF, 0xE0, 0xE7, 0xE0, 0xE7, 0xE0, 0xE3, 0xE0,
    0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0xE0, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // O (79)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0x80,
    0x3F, 0x80, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0x3F, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // P (80)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x80,
    0xFF, 0x80, 0x38, 0xE0, 0x38, 0xE0, 0x38, 0xE0,
    0x38, 0xE0, 0x3F, 0x80, 0x3F, 0x80, 0x38, 0x00,
    0x38, 0x00, 0x38, 0x00, 0x38, 0x00, 0x38, 0x00,
    0x38, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // Q (81)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0x80,
    0x3F, 0x80, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0xE0, 0xE0, 0xE4, 0xE0, 0xE7, 0xE0,
    0xE7, 0xE0, 0x3F, 0x80, 0x03, 0x80, 0x03, 0x80,
    0x03, 0xE0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // R (82)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x80,
    0xFF, 0x80, 0x38, 0xE0, 0x38, 0xE0, 0x38, 0xE0,
    0x38, 0xE0, 0x3F, 0x80, 0x3F, 0x80, 0x3B, 0x80,
    0x38, 0xE0, 0x38, 0xE0, 0x38, 0xE0, 0x38, 0xE0,
    0x38, 0xE0, 0xF8, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // S (83)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0x80,
    0x3F, 0x80, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0,
    0x38, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x03, 0x80,
    0x00, 0xE0, 0x00, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0x3F, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // T (84)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0xE0,
    0x3F, 0xE0, 0x3F, 0xE0, 0x27, 0x60, 0x27, 0x60,
    0x07, 0x00, 0x07, 0x00, 0x07, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x07, 0x00, 0x07, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x1F, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // U (85)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xE0, 0xE0,
    0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0x3F, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // V (86)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xE0, 0xE0,
    0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0xE0, 0xE0, 0x3B, 0x80, 0x1F, 0x00,
    0x1F, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // W (87)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xE0, 0xE0,
    0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0xE4, 0xE0, 0xE4, 0xE0, 0xE4, 0xE0,
    0xE4, 0xE0, 0xE4, 0xE0, 0xFF, 0xE0, 0xFB, 0xE0,
    0xFB, 0xE0, 0x3B, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // X (88)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xE0, 0xE0,
    0xE0, 0xE0, 0xE0, 0xE0, 0x3B, 0x80, 0x3B, 0x80,
    0x3F, 0x80, 0x1F, 0x00, 0x1F, 0x00, 0x1F, 0x00,
    0x3F, 0x80, 0x3F, 0x80, 0x3B, 0x80, 0xE0, 0xE0,
    0xE0, 0xE0, 0xE0, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // Y (89)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x38, 0xE0,
    0x38, 0xE0, 0x38, 0xE0, 0x38, 0xE0, 0x38, 0xE0,
    0x38, 0xE0, 0x1F, 0x80, 0x1F, 0x80, 0x07, 0x00,
    0x07, 0x00, 0x07, 0x00, 0x07, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x1F, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // Z (90)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xE0,
    0xFF, 0xE0, 0xE0, 0xE0, 0xC0, 0xE0, 0xC0, 0xE0,
    0x03, 0x80, 0x07, 0x00, 0x07, 0x00, 0x1C, 0x00,
    0x38, 0x00, 0x38, 0x00, 0xE0, 0x60, 0xE0, 0xE0,
    0xE0, 0xE0, 0xFF, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // [ (91)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x80,
    0x1F, 0x80, 0x1C, 0x00, 0x1C, 0x00, 0x1C, 0x00,
    0x1C, 0x00, 0x1C, 0x00, 0x1C, 0x00, 0x1C, 0x00,
    0x1C, 0x00, 0x1C, 0x00, 0x1C, 0x00, 0x1C, 0x00,
    0x1C, 0x00, 0x1F, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // \ (92)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0xC0, 0x00, 0xE0, 0x00, 0xE0, 0x00,
    0x38, 0x00, 0x1C, 0x00, 0x1C, 0x00, 0x07, 0x00,
    0x03, 0x80, 0x03, 0x80, 0x00, 0xE0, 0x00, 0x60,
    0x00, 0x60, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // ] (93)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x80,
    0x1F, 0x80, 0x03, 0x80, 0x03, 0x80, 0x03, 0x80,
    0x03, 0x80, 0x03, 0x80, 0x03, 0x80, 0x03, 0x80,
    0x03, 0x80, 0x03, 0x80, 0x03, 0x80, 0x03, 0x80,
    0x03, 0x80, 0x1F, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // ^ (94)
    0x04, 0x00, 0x04, 0x00, 0x1F, 0x00, 0x3B, 0x80,
    0x3B, 0x80, 0xE0, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // _ (95)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // ` (96)
    0x00, 0x00, 0x00, 0x00, 0x1C, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x03, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // a (97)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0x00, 0x03, 0x80, 0x03, 0x80, 0x3F, 0x80,
    0xE3, 0x80, 0xE3, 0x80, 0xE3, 0x80, 0xE3, 0x80,
    0xE3, 0x80, 0x3C, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // b (98)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF8, 0x00,
    0xF8, 0x00, 0x38, 0x00, 0x38, 0x00, 0x38, 0x00,
    0x3F, 0x00, 0x3B, 0x80, 0x3B, 0x80, 0x38, 0xE0,
    0x38, 0xE0, 0x38, 0xE0, 0x38, 0xE0, 0x38, 0xE0,
    0x38, 0xE0, 0x3F, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // c (99)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0x80, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0x00,
    0xE0, 0x00, 0xE0, 0x00, 0xE0, 0x00, 0xE0, 0xE0,
    0xE0, 0xE0, 0x3F, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // d (100)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x80,
    0x07, 0x80, 0x03, 0x80, 0x03, 0x80, 0x03, 0x80,
    0x1F, 0x80, 0x3B, 0x80, 0x3B, 0x80, 0xE3, 0x80,
    0xE3, 0x80, 0xE3, 0x80, 0xE3, 0x80, 0xE3, 0x80,
    0xE3, 0x80, 0x3C, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // e (101)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0x80, 0xE0, 0xE0, 0xE0, 0xE0, 0xFF, 0xE0,
    0xE0, 0x00, 0xE0, 0x00, 0xE0, 0x00, 0xE0, 0xE0,
    0xE0, 0xE0, 0x3F, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // f (102)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x80,
    0x07, 0x80, 0x1C, 0xE0, 0x1C, 0x60, 0x1C, 0x60,
    0x1C, 0x00, 0x3F, 0x00, 0x3F, 0x00, 0x1C, 0x00,
    0x1C, 0x00, 0x1C, 0x00, 0x1C, 0x00, 0x1C, 0x00,
    0x1C, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // g (103)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3C, 0xE0, 0xE3, 0x80, 0xE3, 0x80, 0xE3, 0x80,
    0xE3, 0x80, 0xE3, 0x80, 0xE3, 0x80, 0xE3, 0x80,
    0xE3, 0x80, 0x3F, 0x80, 0x03, 0x80, 0x03, 0x80,
    0xE3, 0x80, 0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00,
    // h (104)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF8, 0x00,
    0xF8, 0x00, 0x38, 0x00, 0x38, 0x00, 0x38, 0x00,
    0x3B, 0x80, 0x3C, 0xE0, 0x3C, 0xE0, 0x38, 0xE0,
    0x38, 0xE0, 0x38, 0xE0, 0x38, 0xE0, 0x38, 0xE0,
    0x38, 0xE0, 0xF8, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // i (105)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x1F, 0x00, 0x07, 0x00, 0x07, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x07, 0x00, 0x07, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x1F, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // j (106)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xE0,
    0x00, 0xE0, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x03, 0xE0, 0x00, 0xE0, 0x00, 0xE0, 0x00, 0xE0,
    0x00, 0xE0, 0x00, 0xE0, 0x00, 0xE0, 0x00, 0xE0,
    0x00, 0xE0, 0x00, 0xE0, 0x38, 0xE0, 0x38, 0xE0,
    0x38, 0xE0, 0x1F, 0x80, 0x1F, 0x80, 0x00, 0x00,
    // k (107)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF8, 0x00,
    0xF8, 0x00, 0x38, 0x00, 0x38, 0x00, 0x38, 0x00,
    0x38, 0xE0, 0x3B, 0x80, 0x3B, 0x80, 0x3F, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0x3B, 0x80, 0x38, 0xE0,
    0x38, 0xE0, 0xF8, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // l (108)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00,
    0x1F, 0x00, 0x07, 0x00, 0x07, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x07, 0x00, 0x07, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x07, 0x00, 0x07, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x1F, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // m (109)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xFB, 0x80, 0xFF, 0xE0, 0xFF, 0xE0, 0xE4, 0xE0,
    0xE4, 0xE0, 0xE4, 0xE0, 0xE4, 0xE0, 0xE4, 0xE0,
    0xE4, 0xE0, 0xE0, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // n (110)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xE7, 0x80, 0x38, 0xE0, 0x38, 0xE0, 0x38, 0xE0,
    0x38, 0xE0, 0x38, 0xE0, 0x38, 0xE0, 0x38, 0xE0,
    0x38, 0xE0, 0x38, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // o (111)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0x80, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0x3F, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // p (112)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xE7, 0x80, 0x38, 0xE0, 0x38, 0xE0, 0x38, 0xE0,
    0x38, 0xE0, 0x38, 0xE0, 0x38, 0xE0, 0x38, 0xE0,
    0x38, 0xE0, 0x3F, 0x80, 0x38, 0x00, 0x38, 0x00,
    0x38, 0x00, 0xFC, 0x00, 0xFC, 0x00, 0x00, 0x00,
    // q (113)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3C, 0xE0, 0xE3, 0x80, 0xE3, 0x80, 0xE3, 0x80,
    0xE3, 0x80, 0xE3, 0x80, 0xE3, 0x80, 0xE3, 0x80,
    0xE3, 0x80, 0x3F, 0x80, 0x03, 0x80, 0x03, 0x80,
    0x03, 0x80, 0x07, 0xE0, 0x07, 0xE0, 0x00, 0x00,
    // r (114)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xE7, 0x80, 0x3C, 0xE0, 0x3C, 0xE0, 0x38, 0xE0,
    0x38, 0x00, 0x38, 0x00, 0x38, 0x00, 0x38, 0x00,
    0x38, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // s (115)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0x80, 0xE0, 0xE0, 0xE0, 0xE0, 0x38, 0x00,
    0x1F, 0x00, 0x1F, 0x00, 0x03, 0x80, 0xE0, 0xE0,
    0xE0, 0xE0, 0x3F, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // t (116)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00,
    0x04, 0x00, 0x1C, 0x00, 0x1C, 0x00, 0x1C, 0x00,
    0xFF, 0x80, 0x1C, 0x00, 0x1C, 0x00, 0x1C, 0x00,
    0x1C, 0x00, 0x1C, 0x00, 0x1C, 0x00, 0x1C, 0xE0,
    0x1C, 0xE0, 0x07, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // u (117)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xE3, 0x80, 0xE3, 0x80, 0xE3, 0x80, 0xE3, 0x80,
    0xE3, 0x80, 0xE3, 0x80, 0xE3, 0x80, 0xE3, 0x80,
    0xE3, 0x80, 0x3C, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // v (118)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x38, 0xE0, 0x38, 0xE0, 0x38, 0xE0, 0x38, 0xE0,
    0x38, 0xE0, 0x38, 0xE0, 0x38, 0xE0, 0x1F, 0x80,
    0x1F, 0x80, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // w (119)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE4, 0xE0,
    0xE4, 0xE0, 0xE4, 0xE0, 0xE4, 0xE0, 0xFF, 0xE0,
    0xFF, 0xE0, 0x3B, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // x (120)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xE0, 0xE0, 0x3B, 0x80, 0x3B, 0x80, 0x1F, 0x00,
    0x1F, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x3B, 0x80,
    0x3B, 0x80, 0xE0, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // y (121)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0,
    0xE0, 0xE0, 0x3F, 0xE0, 0x00, 0xE0, 0x00, 0xE0,
    0x03, 0x80, 0xFF, 0x00, 0xFF, 0x00, 0x00, 0x00,
    // z (122)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xE0, 0xE3, 0x80, 0xE3, 0x80, 0x07, 0x00,
    0x1C, 0x00, 0x1C, 0x00, 0x38, 0x00, 0xE0, 0xE0,
    0xE0, 0xE0, 0xFF, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // { (123)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xE0,
    0x03, 0xE0, 0x07, 0x00, 0x07, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x07, 0x00, 0x07, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x03, 0xE0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // | (124)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x07, 0x00, 0x07, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x07, 0x00, 0x07, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // } (125)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3C, 0x00,
    0x3C, 0x00, 0x07, 0x00, 0x07, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x03, 0xE0, 0x03, 0xE0, 0x07, 0x00,
    0x07, 0x00, 0x07, 0x00, 0x07, 0x00, 0x07, 0x00,
    0x07, 0x00, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // ~ (126)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3C, 0xE0,
    0x3C, 0xE0, 0xE7, 0x80, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_metrics() {
        assert_eq!(Font::Font12.width(), 6);
        assert_eq!(Font::Font16.width(), 8);
        assert_eq!(Font::Font24.width(), 12);
        assert_eq!(Font::Font12.height(), 12);
        assert_eq!(Font::Font16.height(), 16);
        assert_eq!(Font::Font24.height(), 24);
    }

    #[test]
    fn lookup_covers_printable_ascii() {
        for c in ' '..='~' {
            assert!(Font::Font12.glyph(c).is_some());
            assert!(Font::Font16.glyph(c).is_some());
            assert!(Font::Font24.glyph(c).is_some());
        }
    }

    #[test]
    fn lookup_rejects_unencoded_characters() {
        assert_eq!(Font::Font16.glyph('\u{1F}'), None);
        assert_eq!(Font::Font16.glyph('\u{7F}'), None);
        assert_eq!(Font::Font24.glyph('\u{E9}'), None);
    }

    #[test]
    fn glyph_lengths_match_metrics() {
        for &font in &[Font::Font12, Font::Font16, Font::Font24] {
            let glyph = font.glyph('A').unwrap();
            let expected = font.height() as usize * font.row_stride();
            assert_eq!(glyph.len(), expected);
        }
    }

    #[test]
    fn space_is_blank() {
        for &font in &[Font::Font12, Font::Font16, Font::Font24] {
            let glyph = font.glyph(' ').unwrap();
            assert!(glyph.iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn exclamation_mark_has_a_stem_and_a_gap() {
        for &font in &[Font::Font12, Font::Font16, Font::Font24] {
            let glyph = font.glyph('!').unwrap();
            let set: Vec<u8> = (0..font.height())
                .filter(|&y| (0..font.width()).any(|x| font.glyph_bit(glyph, x, y)))
                .collect();
            assert!(!set.is_empty());
            // The stem stops above the dot.
            assert!(set.windows(2).any(|w| w[1] - w[0] > 1));
        }
    }
}
