//! Level file loader.
//!
//! Plain text, one value per line:
//!
//! ```text
//! 5          <- world width
//! 4          <- world height
//! #####      <- `height` rows of at least `width` glyphs
//! #   #
//! #   #
//! #####
//! 2          <- player start x
//! 2          <- player start y
//! ```
//!
//! Characters past `width` on a row are ignored. Numbers may carry a fraction,
//! which is truncated toward zero.

use std::path::Path;

use crate::types::Vec2;
use crate::world::World;

/// Errors from reading or parsing a level file.
#[derive(Debug, thiserror::Error)]
pub enum LevelFormatError {
    #[error("could not read level file: {0}")]
    Io(#[from] std::io::Error),
    #[error("{what} was not found")]
    MissingLine { what: &'static str },
    #[error("{what} is not a number: {value:?}")]
    InvalidNumber { what: &'static str, value: String },
    #[error("{what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: i64 },
    #[error("a {width}x{height} world is too large")]
    TooLarge { width: usize, height: usize },
    #[error("row {row} has {found} glyphs, expected at least {expected}")]
    ShortRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A parsed level: the world grid and where the player starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub world: World,
    pub start: Vec2,
}

impl Level {
    /// Read and parse a level file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelFormatError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let level = Self::parse(&text)?;
        tracing::info!(
            path = %path.display(),
            width = level.world.width(),
            height = level.world.height(),
            "level loaded"
        );
        Ok(level)
    }

    /// Parse level text.
    pub fn parse(text: &str) -> Result<Self, LevelFormatError> {
        let mut lines = text.lines();

        let width = positive(next_number(&mut lines, "width")?, "width")?;
        let height = positive(next_number(&mut lines, "height")?, "height")?;

        let area = width
            .checked_mul(height)
            .ok_or(LevelFormatError::TooLarge { width, height })?;
        // The header is untrusted; the text bounds how many glyphs can follow.
        let mut cells = Vec::with_capacity(area.min(text.len()));
        for row in 0..height {
            let line = lines
                .next()
                .ok_or(LevelFormatError::MissingLine { what: "world row" })?;
            let before = cells.len();
            cells.extend(line.chars().take(width));
            let found = cells.len() - before;
            if found < width {
                return Err(LevelFormatError::ShortRow {
                    row,
                    expected: width,
                    found,
                });
            }
        }

        let x = next_number(&mut lines, "player x")?;
        let y = next_number(&mut lines, "player y")?;

        // Dimensions and cell count were checked above.
        let world = World::from_cells(width, height, cells).ok_or(LevelFormatError::MissingLine {
            what: "world row",
        })?;

        if !world.contains(x as i32, y as i32) {
            tracing::warn!(x, y, "player starts outside the world");
        }

        Ok(Self {
            world,
            start: Vec2::new(x as f32, y as f32),
        })
    }
}

fn next_number<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    what: &'static str,
) -> Result<i64, LevelFormatError> {
    let line = lines.next().ok_or(LevelFormatError::MissingLine { what })?;
    parse_number(line, what)
}

/// Decimal text to an integer, truncating any fraction.
fn parse_number(line: &str, what: &'static str) -> Result<i64, LevelFormatError> {
    let text = line.trim();
    if let Ok(n) = text.parse::<i64>() {
        return Ok(n);
    }
    match text.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(f.trunc() as i64),
        _ => Err(LevelFormatError::InvalidNumber {
            what,
            value: text.to_string(),
        }),
    }
}

fn positive(n: i64, what: &'static str) -> Result<usize, LevelFormatError> {
    if n <= 0 {
        return Err(LevelFormatError::NonPositive { what, value: n });
    }
    usize::try_from(n).map_err(|_| LevelFormatError::InvalidNumber {
        what,
        value: n.to_string(),
    })
}
