//! Title banner printed above the first frame.

use crate::core::SimpleRng;
use crate::fb::{Cell, FrameBuffer};

const MAZE_GLYPHS: [char; 2] = ['╱', '╲'];

/// Width of the blank band above and below the message.
const BLANK_BAND: usize = 10;

/// A run of `len` random diagonal glyphs.
pub fn maze(len: usize, rng: &mut SimpleRng) -> String {
    (0..len)
        .map(|_| MAZE_GLYPHS[rng.next_bool() as usize])
        .collect()
}

fn band(side: usize, middle: &str, rng: &mut SimpleRng) -> String {
    format!("{}  {}  {}", maze(side, rng), middle, maze(side, rng))
}

/// Seven banner lines, `width` glyphs of maze framing `message`.
pub fn title(message: &str, width: usize, rng: &mut SimpleRng) -> Vec<String> {
    let side = (width / 2).saturating_sub(message.chars().count() / 2 + 2);
    let blank = " ".repeat(BLANK_BAND);

    vec![
        maze(width, rng),
        maze(width, rng),
        band(side, &blank, rng),
        band(side, message, rng),
        band(side, &blank, rng),
        maze(width, rng),
        maze(width, rng),
    ]
}

/// Lay banner lines out as a framebuffer, one row per line.
pub fn title_frame(lines: &[String]) -> FrameBuffer {
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let width = u16::try_from(width).unwrap_or(u16::MAX);
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let mut fb = FrameBuffer::new(width, height);
    for (y, line) in (0..height).zip(lines) {
        for (x, ch) in (0..width).zip(line.chars()) {
            fb.set(x, y, Cell::plain(ch));
        }
    }
    fb
}
