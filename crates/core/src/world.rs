//! World module - the terrain grid
//!
//! The world is a fixed `width x height` grid of glyphs stored row-major in a
//! flat vector. A space glyph is passable; any other glyph is a wall whose
//! identity drives its colour.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom,
//! matching the row order of the level file.

use crate::types::EMPTY_GLYPH;

/// Terrain grid, created once at load time and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    width: usize,
    height: usize,
    /// Flat array of glyphs, row-major order (y * width + x)
    cells: Vec<char>,
}

impl World {
    /// Build a world from row-major cells.
    ///
    /// Returns `None` when a dimension is zero or `cells.len() != width * height`.
    pub fn from_cells(width: usize, height: usize, cells: Vec<char>) -> Option<Self> {
        if width == 0 || height == 0 || Some(cells.len()) != width.checked_mul(height) {
            return None;
        }
        Some(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a world from equally long text rows.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let width = rows.first()?.chars().count();
        if rows.iter().any(|r| r.chars().count() != width) {
            return None;
        }
        let cells = rows.iter().flat_map(|r| r.chars()).collect();
        Self::from_cells(width, rows.len(), cells)
    }

    /// A world with every cell empty.
    pub fn empty(width: usize, height: usize) -> Option<Self> {
        Self::from_cells(width, height, vec![EMPTY_GLYPH; width.checked_mul(height)?])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Whether integer coordinates lie inside the grid.
    #[inline(always)]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Glyph at an in-bounds cell.
    ///
    /// Callers must bounds-check first (see [`World::contains`]); an
    /// out-of-range coordinate panics.
    #[inline(always)]
    pub fn cell_at(&self, x: usize, y: usize) -> char {
        debug_assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x]
    }

    /// Glyph at (x, y), or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        if !self.contains(x, y) {
            return None;
        }
        Some(self.cell_at(x as usize, y as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_is_row_major() {
        let world = World::from_rows(&["ab", "cd", "ef"]).unwrap();
        assert_eq!(world.width(), 2);
        assert_eq!(world.height(), 3);
        assert_eq!(world.cell_at(1, 0), 'b');
        assert_eq!(world.cell_at(0, 2), 'e');
        assert_eq!(world.cells().len(), 6);
    }

    #[test]
    fn rejects_mismatched_dimensions() {
        assert!(World::from_cells(2, 2, vec![' '; 3]).is_none());
        assert!(World::from_cells(0, 2, Vec::new()).is_none());
        assert!(World::from_rows(&["ab", "c"]).is_none());
        assert!(World::from_rows(&[]).is_none());
        assert!(World::from_cells(usize::MAX, 2, vec![' '; 2]).is_none());
    }

    #[test]
    fn checked_lookup_guards_every_edge() {
        let world = World::from_rows(&["# ", " #"]).unwrap();
        assert_eq!(world.get(0, 0), Some('#'));
        assert_eq!(world.get(1, 0), Some(' '));
        assert_eq!(world.get(-1, 0), None);
        assert_eq!(world.get(0, -1), None);
        assert_eq!(world.get(2, 0), None);
        assert_eq!(world.get(0, 2), None);
    }

    #[test]
    #[should_panic]
    fn unchecked_lookup_panics_out_of_range() {
        let world = World::empty(2, 2).unwrap();
        let _ = world.cell_at(2, 1);
    }
}
