//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the raycaster.
//! Everything here is plain data plus the 2D vector math, with no I/O, so the
//! same types serve the core sampler, the terminal compositor and the input
//! mapping.
//!
//! # Ray-march constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `RAY_STEP` | 0.1 | Increment of the scan factor per sample |
//! | `RAY_CEILING` | 100.0 | Scan factor at which a column gives up |
//! | `TURN_STEP_DEGREES` | 5.0 | Rotation applied per turn key press |
//!
//! The step and ceiling define the rendered silhouette. Changing them changes
//! the output, so they are fixed here rather than configurable.
//!
//! # Session defaults
//!
//! - Screen: 75x25 character cells
//! - Camera: projection plane 10.0 units ahead, 10.0 units wide
//! - Level file: `level`
//!
//! # Examples
//!
//! ```
//! use ascii_cast_types::{FillMode, Rot2, Vec2};
//!
//! let dir = Vec2::new(0.0, -1.0);
//! let side = Rot2::from_degrees(90.0).apply(dir);
//! assert!((side.x - 1.0).abs() < 1e-6);
//!
//! assert_eq!(FillMode::Characters.next(), FillMode::ColouredCharacters);
//! ```

pub mod math;

pub use math::{DegenerateVectorError, Rot2, Vec2};

/// Scan factor increment of the ray march.
pub const RAY_STEP: f32 = 0.1;

/// Scan factor ceiling of the ray march.
pub const RAY_CEILING: f32 = 100.0;

/// Degrees turned per turn action.
pub const TURN_STEP_DEGREES: f32 = 5.0;

/// Glyph of an empty (passable) terrain cell.
pub const EMPTY_GLYPH: char = ' ';

/// Glyph drawn for every row of a column whose ray hits nothing.
pub const FAR_GLYPH: char = '.';

/// Glyph marking the player on the minimap.
pub const PLAYER_GLYPH: char = '@';

/// Number of colour buckets wall glyphs are spread over.
pub const COLOUR_BUCKETS: u32 = 7;

/// Default screen width in character cells.
pub const DEFAULT_SCREEN_WIDTH: u16 = 75;

/// Default screen height in character cells.
pub const DEFAULT_SCREEN_HEIGHT: u16 = 25;

/// Default distance of the projection plane ahead of the player.
pub const DEFAULT_CAMERA_DISTANCE: f32 = 10.0;

/// Default width of the projection plane.
pub const DEFAULT_CAMERA_WIDTH: f32 = 10.0;

/// Level file read when none is given.
pub const DEFAULT_LEVEL_PATH: &str = "level";

/// How occupied wall glyphs are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillMode {
    /// The glyph itself, uncoloured.
    #[default]
    Characters,
    /// The glyph in its bucket's foreground colour.
    ColouredCharacters,
    /// The glyph over its bucket's background colour.
    BackgroundAndCharacters,
    /// A blank cell in the bucket's background colour.
    Background,
}

impl FillMode {
    /// All modes in cycling order.
    pub const ALL: [FillMode; 4] = [
        FillMode::Characters,
        FillMode::ColouredCharacters,
        FillMode::BackgroundAndCharacters,
        FillMode::Background,
    ];

    /// The mode that follows this one, wrapping back to `Characters`.
    pub fn next(self) -> Self {
        match self {
            FillMode::Characters => FillMode::ColouredCharacters,
            FillMode::ColouredCharacters => FillMode::BackgroundAndCharacters,
            FillMode::BackgroundAndCharacters => FillMode::Background,
            FillMode::Background => FillMode::Characters,
        }
    }

    /// Name used in log output.
    pub fn as_str(self) -> &'static str {
        match self {
            FillMode::Characters => "characters",
            FillMode::ColouredCharacters => "coloured_characters",
            FillMode::BackgroundAndCharacters => "background_and_characters",
            FillMode::Background => "background",
        }
    }
}

/// Colour bucket of a wall glyph: its code point modulo [`COLOUR_BUCKETS`].
#[inline]
pub fn colour_bucket(glyph: char) -> u8 {
    (glyph as u32 % COLOUR_BUCKETS) as u8
}

/// Session actions produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    StepForward,
    StepBackward,
    StrafeLeft,
    StrafeRight,
    /// Rotate the view by `+TURN_STEP_DEGREES`.
    TurnPositive,
    /// Rotate the view by `-TURN_STEP_DEGREES`.
    TurnNegative,
    ToggleMinimap,
    CycleFillMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_march_constants_are_fixed() {
        assert_eq!(RAY_STEP, 0.1);
        assert_eq!(RAY_CEILING, 100.0);
        assert_eq!(TURN_STEP_DEGREES, 5.0);
    }

    #[test]
    fn fill_mode_cycles_through_all_four() {
        let mut mode = FillMode::default();
        for expected in FillMode::ALL {
            assert_eq!(mode, expected);
            mode = mode.next();
        }
        assert_eq!(mode, FillMode::Characters);
        assert_eq!(FillMode::BackgroundAndCharacters.as_str(), "background_and_characters");
    }

    #[test]
    fn colour_bucket_is_code_modulo_seven() {
        assert_eq!(colour_bucket('X'), 4);
        assert_eq!(colour_bucket('#'), (35 % 7) as u8);
        assert_eq!(colour_bucket('X'), colour_bucket('X'));
    }
}
