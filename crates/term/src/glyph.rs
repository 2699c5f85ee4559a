//! Fill-mode glyph renderer.
//!
//! Wall glyphs are spread over seven colour buckets by code point. The fill
//! mode then picks how the bucket colour and the glyph are shown. Empty
//! cells stay a plain space in every mode.

use crossterm::style::Color;

use crate::fb::{Cell, CellStyle};
use crate::types::{colour_bucket, FillMode, EMPTY_GLYPH};

/// Bucket colours: the seven non-black ANSI colours, red first.
pub const PALETTE: [Color; 7] = [
    Color::DarkRed,
    Color::DarkGreen,
    Color::DarkYellow,
    Color::DarkBlue,
    Color::DarkMagenta,
    Color::DarkCyan,
    Color::Grey,
];

/// Colour assigned to a wall glyph.
pub fn bucket_colour(glyph: char) -> Color {
    PALETTE[colour_bucket(glyph) as usize]
}

/// Render a terrain glyph under `mode`.
pub fn fill_cell(glyph: char, mode: FillMode) -> Cell {
    if glyph == EMPTY_GLYPH {
        return Cell::plain(EMPTY_GLYPH);
    }
    let colour = bucket_colour(glyph);
    match mode {
        FillMode::Characters => Cell::plain(glyph),
        FillMode::ColouredCharacters => Cell::styled(glyph, CellStyle::fg(colour)),
        FillMode::BackgroundAndCharacters => Cell::styled(glyph, CellStyle::bg(colour)),
        FillMode::Background => Cell::styled(' ', CellStyle::bg(colour)),
    }
}
