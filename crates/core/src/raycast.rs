//! Ray-march sampler.
//!
//! Each screen column casts one ray from the player. The ray is sampled at
//! `origin + direction * f` for `f = RAY_STEP, 2 * RAY_STEP, ...` while
//! `f < RAY_CEILING`. The first sample landing on a wall cell is the hit; the
//! first sample leaving the grid ends the column as a miss, even if the ray
//! would re-enter the grid further along.
//!
//! A hit at factor `f` yields a wall `1 / f` rows tall on each side of the
//! screen's vertical middle.

use crate::player::{Camera, Player, Screen};
use crate::projection::Projection;
use crate::types::{Vec2, EMPTY_GLYPH, RAY_CEILING, RAY_STEP};
use crate::world::World;

/// First wall met by a column's ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub glyph: char,
    /// Scan factor at which the wall was sampled.
    pub factor: f32,
}

impl Hit {
    /// Perceived wall height: closer walls are taller.
    #[inline]
    pub fn wall_height(&self) -> f32 {
        1.0 / self.factor
    }

    /// Whether screen row `row` falls inside the wall span.
    #[inline]
    pub fn covers_row(&self, row: u16, screen_height: u16) -> bool {
        (screen_height as f32 / 2.0 - row as f32).abs() < self.wall_height()
    }
}

/// What one screen cell of the 3D view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// Inside a wall span.
    Wall(char),
    /// Above or below a wall span.
    Gap,
    /// The column hit nothing.
    Far,
}

/// March a ray through `world` and report the first wall.
pub fn march(world: &World, origin: Vec2, direction: Vec2) -> Option<Hit> {
    let mut factor = RAY_STEP;
    while factor < RAY_CEILING {
        let check = origin + direction * factor;
        let (x, y) = check.trunc_cell();
        match world.get(x, y) {
            None => return None,
            Some(EMPTY_GLYPH) => {}
            Some(glyph) => return Some(Hit { glyph, factor }),
        }
        factor += RAY_STEP;
    }
    None
}

/// Resolve the 3D view for one row of a column.
pub fn sample_row(hit: Option<Hit>, row: u16, screen_height: u16) -> Sample {
    match hit {
        Some(hit) if hit.covers_row(row, screen_height) => Sample::Wall(hit.glyph),
        Some(_) => Sample::Gap,
        None => Sample::Far,
    }
}

/// Per-column hits for one frame.
///
/// Ray geometry does not depend on the row, so each column is marched once
/// and reused for every row.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnHits {
    screen_height: u16,
    hits: Vec<Option<Hit>>,
}

impl ColumnHits {
    pub fn cast(world: &World, player: &Player, camera: &Camera, screen: Screen) -> Self {
        let projection = Projection::new(player, camera, screen);
        let hits = (0..screen.width)
            .map(|col| march(world, projection.origin(), projection.ray_direction(col)))
            .collect();
        Self {
            screen_height: screen.height,
            hits,
        }
    }

    pub fn hit(&self, column: u16) -> Option<Hit> {
        self.hits.get(column as usize).copied().flatten()
    }

    pub fn sample(&self, column: u16, row: u16) -> Sample {
        sample_row(self.hit(column), row, self.screen_height)
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_world_never_hits() {
        let world = World::empty(12, 12).unwrap();
        let origin = Vec2::new(6.0, 6.0);
        for deg in (0..360).step_by(15) {
            let dir = crate::types::Rot2::from_degrees(deg as f32).apply(Vec2::new(0.0, -3.0));
            assert_eq!(march(&world, origin, dir), None);
        }
    }

    #[test]
    fn hit_sample_lies_in_the_wall_cell() {
        let world = World::from_rows(&["     ", "  #  ", "     ", "     ", "     "]).unwrap();
        let origin = Vec2::new(2.5, 4.5);
        let hit = march(&world, origin, Vec2::new(0.0, -1.0)).unwrap();
        assert_eq!(hit.glyph, '#');
        let check = origin + Vec2::new(0.0, -1.0) * hit.factor;
        assert_eq!(check.trunc_cell(), (2, 1));
        // Row 1 is entered once 4.5 - f drops below 2.
        assert!((hit.factor - 2.6).abs() < 0.05);
    }

    #[test]
    fn leaving_the_grid_is_a_permanent_miss() {
        // The ray exits at the top before it could wrap anywhere.
        let world = World::from_rows(&["   ", "   ", "   "]).unwrap();
        assert_eq!(march(&world, Vec2::new(1.5, 1.5), Vec2::new(0.0, -1.0)), None);

        // Origin outside the grid: first sample is already out, even though the
        // ray would reach the wall later.
        let world = World::from_rows(&["#  "]).unwrap();
        assert_eq!(march(&world, Vec2::new(5.0, 0.5), Vec2::new(-1.0, 0.0)), None);
    }

    fn corridor_with_wall_at(column: usize) -> World {
        let mut cells = vec![EMPTY_GLYPH; 102];
        cells[column] = '#';
        World::from_cells(102, 1, cells).unwrap()
    }

    #[test]
    fn the_last_sample_before_the_ceiling_still_hits() {
        // The factor reaches 99.999 on the 1000th sample; only that one lands
        // in column 100.
        let world = corridor_with_wall_at(100);
        let hit = march(&world, Vec2::new(0.05, 0.5), Vec2::new(1.0, 0.0)).unwrap();
        assert_eq!(hit.glyph, '#');
        assert!(hit.factor > 99.9 && hit.factor < RAY_CEILING, "{}", hit.factor);
    }

    #[test]
    fn a_wall_one_step_past_the_ceiling_is_a_miss() {
        // Samples end at x = 100.949; the next step would enter column 101.
        let world = corridor_with_wall_at(101);
        assert_eq!(march(&world, Vec2::new(0.95, 0.5), Vec2::new(1.0, 0.0)), None);
    }

    #[test]
    fn farther_walls_look_shorter() {
        let near = Hit {
            glyph: '#',
            factor: 0.5,
        };
        let far = Hit {
            glyph: '#',
            factor: 2.0,
        };
        assert!(near.wall_height() > far.wall_height());
        assert_eq!(far.wall_height(), 0.5);

        let mut last = f32::INFINITY;
        let mut f = RAY_STEP;
        while f < 5.0 {
            let h = Hit { glyph: '#', factor: f }.wall_height();
            assert!(h < last);
            last = h;
            f += RAY_STEP;
        }
    }

    #[test]
    fn rows_split_into_wall_gap_and_far() {
        let hit = Hit {
            glyph: 'X',
            factor: 0.5,
        };
        // Height 2 on a 10 row screen: |5 - y| < 2 => rows 4..=6.
        assert_eq!(sample_row(Some(hit), 3, 10), Sample::Gap);
        assert_eq!(sample_row(Some(hit), 4, 10), Sample::Wall('X'));
        assert_eq!(sample_row(Some(hit), 6, 10), Sample::Wall('X'));
        assert_eq!(sample_row(Some(hit), 7, 10), Sample::Gap);
        assert_eq!(sample_row(None, 5, 10), Sample::Far);
    }

    #[test]
    fn column_hits_cover_every_column() {
        let world = World::from_rows(&["#####", "#   #", "#   #", "#   #", "#####"]).unwrap();
        let player = Player::new(Vec2::new(2.5, 2.5));
        let camera = Camera {
            distance: 1.0,
            width: 1.0,
        };
        let hits = ColumnHits::cast(&world, &player, &camera, Screen::new(6, 6));
        assert_eq!(hits.len(), 6);
        for col in 0..6 {
            assert_eq!(hits.hit(col).map(|h| h.glyph), Some('#'));
        }
        assert_eq!(hits.hit(6), None);
    }
}
