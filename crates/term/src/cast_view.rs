//! CastView: composes the frame, the minimap and the raycast view into a
//! terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Every screen cell is resolved on its own, first match wins:
//!
//! 1. the border frame,
//! 2. the minimap, when enabled and the cell maps inside the world,
//! 3. the raycast view.

use std::cmp::Ordering;

use crossterm::style::Color;

use crate::core::{ColumnHits, Player, Sample, Settings, World};
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::glyph::fill_cell;
use crate::types::{FillMode, EMPTY_GLYPH, FAR_GLYPH, PLAYER_GLYPH};

/// Box-drawing glyph for (x, y) when it lies on the border of a `w x h` screen.
pub fn frame_glyph(x: u16, y: u16, w: u16, h: u16) -> Option<char> {
    let last_row = y + 1 == h;
    if x == 0 || x + 1 == w {
        let (top, bottom) = if x == 0 { ('┌', '└') } else { ('┐', '┘') };
        Some(if y == 0 {
            top
        } else if last_row {
            bottom
        } else {
            '│'
        })
    } else if y == 0 || last_row {
        Some('─')
    } else {
        None
    }
}

/// Facing marker drawn one cell ahead of the player on the minimap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    DownLeft,
    UpRight,
    DownRight,
}

impl Arrow {
    /// Compass direction from the player cell to the look-ahead cell.
    ///
    /// Same column points up or down (down when the rows match as well).
    pub fn between(player: (i32, i32), ahead: (i32, i32)) -> Self {
        let (px, py) = player;
        let (ax, ay) = ahead;
        if ax == px {
            if ay < py {
                Arrow::Up
            } else {
                Arrow::Down
            }
        } else if ax < px {
            match ay.cmp(&py) {
                Ordering::Equal => Arrow::Left,
                Ordering::Less => Arrow::UpLeft,
                Ordering::Greater => Arrow::DownLeft,
            }
        } else {
            match ay.cmp(&py) {
                Ordering::Equal => Arrow::Right,
                Ordering::Less => Arrow::UpRight,
                Ordering::Greater => Arrow::DownRight,
            }
        }
    }

    pub fn for_player(player: &Player) -> Self {
        Self::between(player.cell(), player.look_ahead_cell())
    }

    pub fn glyph(self) -> char {
        match self {
            Arrow::Up => '^',
            Arrow::Down => 'V',
            Arrow::Left => '<',
            Arrow::Right => '>',
            Arrow::UpLeft | Arrow::DownRight => '\\',
            Arrow::DownLeft | Arrow::UpRight => '/',
        }
    }
}

/// Renders one settings snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastView {
    player_style: CellStyle,
    arrow_style: CellStyle,
}

impl Default for CastView {
    fn default() -> Self {
        Self {
            player_style: CellStyle::fg(Color::DarkGreen),
            arrow_style: CellStyle::fg(Color::DarkRed),
        }
    }
}

impl CastView {
    /// Render into an existing framebuffer, resizing it to the screen.
    pub fn render_into(&self, settings: &Settings, fb: &mut FrameBuffer) {
        let screen = settings.screen;
        fb.resize(screen.width, screen.height);

        let hits = ColumnHits::cast(
            &settings.world,
            &settings.player,
            &settings.camera,
            screen,
        );
        let minimap = settings.minimap.then(|| Minimap::new(settings));

        for y in 0..screen.height {
            for x in 0..screen.width {
                let cell = if let Some(ch) = frame_glyph(x, y, screen.width, screen.height) {
                    Cell::plain(ch)
                } else if let Some(cell) = minimap
                    .as_ref()
                    .and_then(|m| m.cell(self, x as i32 - 1, y as i32 - 1))
                {
                    cell
                } else {
                    ray_cell(hits.sample(x, y), settings.mode)
                };
                fb.set(x, y, cell);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, settings: &Settings) -> FrameBuffer {
        let mut fb = FrameBuffer::new(settings.screen.width, settings.screen.height);
        self.render_into(settings, &mut fb);
        fb
    }

    /// Minimap cell for world coordinate (x, y), `None` outside the world.
    pub fn minimap_cell(&self, settings: &Settings, x: i32, y: i32) -> Option<Cell> {
        Minimap::new(settings).cell(self, x, y)
    }
}

/// Per-frame minimap state, derived once from the player pose.
struct Minimap<'a> {
    world: &'a World,
    mode: FillMode,
    player: (i32, i32),
    ahead: (i32, i32),
    arrow: Arrow,
}

impl<'a> Minimap<'a> {
    fn new(settings: &'a Settings) -> Self {
        let player = settings.player.cell();
        let ahead = settings.player.look_ahead_cell();
        Self {
            world: &settings.world,
            mode: settings.mode,
            player,
            ahead,
            arrow: Arrow::between(player, ahead),
        }
    }

    fn cell(&self, view: &CastView, x: i32, y: i32) -> Option<Cell> {
        let glyph = self.world.get(x, y)?;
        let cell = if (x, y) == self.player {
            Cell::styled(PLAYER_GLYPH, view.player_style)
        } else if (x, y) == self.ahead {
            Cell::styled(self.arrow.glyph(), view.arrow_style)
        } else {
            fill_cell(glyph, self.mode)
        };
        Some(cell)
    }
}

fn ray_cell(sample: Sample, mode: FillMode) -> Cell {
    match sample {
        Sample::Wall(glyph) => fill_cell(glyph, mode),
        Sample::Gap => Cell::plain(EMPTY_GLYPH),
        Sample::Far => Cell::plain(FAR_GLYPH),
    }
}
