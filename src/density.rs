//! Glyph palettes mapping target brightness levels to printable characters.

/// Default palette, tuned for terminals that alpha-blend dark glyphs.
const TRANSPARENT_ENTRIES: &[(char, u8)] = &[
    ('Ñ', 255),
    ('@', 245),
    ('#', 235),
    ('W', 225),
    ('$', 215),
    ('9', 205),
    ('8', 195),
    ('7', 185),
    ('6', 175),
    ('5', 165),
    ('4', 155),
    ('3', 145),
    ('2', 135),
    ('1', 125),
    ('0', 115),
    ('?', 105),
    ('!', 95),
    ('a', 85),
    ('b', 75),
    (';', 65),
    (':', 55),
    ('+', 50),
    ('=', 45),
    ('-', 40),
    ('*', 35),
    (',', 20),
    ('.', 10),
    (' ', 5),
];

/// Palette for plain-background rendering: same upper range, denser low
/// tail with an extra "c" glyph and shifted boundary values.
const OPAQUE_ENTRIES: &[(char, u8)] = &[
    ('Ñ', 255),
    ('@', 245),
    ('#', 235),
    ('W', 225),
    ('$', 215),
    ('9', 205),
    ('8', 195),
    ('7', 185),
    ('6', 175),
    ('5', 165),
    ('4', 155),
    ('3', 145),
    ('2', 135),
    ('1', 125),
    ('0', 115),
    ('?', 105),
    ('!', 95),
    ('a', 85),
    ('b', 75),
    ('c', 65),
    (';', 55),
    (':', 50),
    ('+', 45),
    ('=', 40),
    ('-', 35),
    ('*', 20),
    (',', 10),
    ('.', 5),
];

/// An ordered glyph palette. Entry order is significant: when two
/// entries are equally close to a brightness value, the one listed
/// first wins, so selection stays deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DensityTable {
    entries: &'static [(char, u8)],
}

impl DensityTable {
    pub fn transparent() -> Self {
        Self {
            entries: TRANSPARENT_ENTRIES,
        }
    }

    pub fn opaque() -> Self {
        Self {
            entries: OPAQUE_ENTRIES,
        }
    }

    /// Pick the table matching the `--no-transparency` flag.
    pub fn for_flag(no_transparency: bool) -> Self {
        if no_transparency {
            Self::opaque()
        } else {
            Self::transparent()
        }
    }

    /// Return the glyph whose target brightness is closest to
    /// `brightness`. Linear scan; on an exact tie the entry listed
    /// earlier wins (`min_by_key` keeps the first minimum).
    pub fn select(&self, brightness: u8) -> char {
        self.entries
            .iter()
            .min_by_key(|&&(_, level)| brightness.abs_diff(level))
            .map(|&(glyph, _)| glyph)
            .unwrap_or(' ')
    }
}
