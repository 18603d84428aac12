// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector3f};
use crate::math::vector::centroid;

use std::fmt;

pub const GRID_SIZE: usize = 4;
pub const POINT_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Row-major layout of the built-in patch, one triple per control point.
const DEFAULT_LAYOUT: [[Float; 3]; POINT_COUNT] = [
    [-1.5, -1.5, 0.0], [-0.5, -1.5, 0.0], [0.5, -1.5, 0.0], [1.5, -1.5, 0.0],
    [-1.5, -0.5, 0.0], [-0.5, -0.5, 1.5], [0.5, -0.5, 1.5], [1.5, -0.5, 0.0],
    [-1.5,  0.5, 0.0], [-0.5,  0.5, 1.5], [0.5,  0.5, 1.5], [1.5,  0.5, 0.0],
    [-1.5,  1.5, 0.0], [-0.5,  1.5, 0.0], [0.5,  1.5, 0.0], [1.5,  1.5, 0.0],
];

/// Selection index to (row, column); indices past 15 are clamped.
pub fn index_to_coord(index: usize) -> (usize, usize) {
    let index = index.min(POINT_COUNT - 1);
    (index / GRID_SIZE, index % GRID_SIZE)
}

/// Control net of a bicubic Bezier patch.
///
/// `points[i][j]` holds the point weighted by `Bu[i] * Bv[j]`: `i` runs along
/// the u parameter (a row's column number) and `j` along v (the row number).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlGrid {
    points: [[Vector3f; GRID_SIZE]; GRID_SIZE],
}

impl Default for ControlGrid {
    fn default() -> Self {
        let mut points = [[Vector3f::zeros(); GRID_SIZE]; GRID_SIZE];
        for (k, p) in DEFAULT_LAYOUT.iter().enumerate() {
            let (row, column) = index_to_coord(k);
            points[column][row] = Vector3f::new(p[0], p[1], p[2]);
        }
        Self { points }
    }
}

impl ControlGrid {
    /// Builds a grid from exactly 16 points listed row by row.
    pub fn from_row_major(points: &[Vector3f]) -> Option<Self> {
        if points.len() != POINT_COUNT {
            return None;
        }
        let mut grid = [[Vector3f::zeros(); GRID_SIZE]; GRID_SIZE];
        for (k, p) in points.iter().enumerate() {
            let (row, column) = index_to_coord(k);
            grid[column][row] = *p;
        }
        Some(Self { points: grid })
    }

    /// Point weighted by `Bu[i] * Bv[j]`.
    pub fn get(&self, i: usize, j: usize) -> Vector3f {
        self.points[i][j]
    }

    pub fn point(&self, index: usize) -> Vector3f {
        let (row, column) = index_to_coord(index);
        self.points[column][row]
    }

    pub fn point_mut(&mut self, index: usize) -> &mut Vector3f {
        let (row, column) = index_to_coord(index);
        &mut self.points[column][row]
    }

    pub fn translate(&mut self, index: usize, delta: &Vector3f) {
        *self.point_mut(index) += delta;
    }

    /// All 16 points in selection-index order.
    pub fn row_major(&self) -> Vec<Vector3f> {
        (0..POINT_COUNT).map(|k| self.point(k)).collect()
    }

    pub fn centroid(&self) -> Vector3f {
        centroid(self.points.iter().flatten())
    }
}

impl fmt::Display for ControlGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Control points:")?;
        for k in 0..POINT_COUNT {
            let p = self.point(k);
            writeln!(f, "{:2}: ({:.3}, {:.3}, {:.3})", k, p.x, p.y, p.z)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_to_coord() {
        assert_eq!(index_to_coord(0), (0, 0));
        assert_eq!(index_to_coord(5), (1, 1));
        assert_eq!(index_to_coord(7), (1, 3));
        assert_eq!(index_to_coord(14), (3, 2));
        assert_eq!(index_to_coord(99), (3, 3));
    }

    #[test]
    fn test_default_grid_layout() {
        let grid = ControlGrid::default();
        assert_eq!(grid.get(0, 0), Vector3f::new(-1.5, -1.5, 0.0));
        assert_eq!(grid.get(3, 0), Vector3f::new(1.5, -1.5, 0.0));
        assert_eq!(grid.get(0, 3), Vector3f::new(-1.5, 1.5, 0.0));
        assert_eq!(grid.get(1, 1), Vector3f::new(-0.5, -0.5, 1.5));
        assert_eq!(grid.point(5), grid.get(1, 1));
        assert_eq!(grid.point(6), Vector3f::new(0.5, -0.5, 1.5));
    }

    #[test]
    fn test_translate_selected_point_only() {
        let mut grid = ControlGrid::default();
        let before = grid;
        grid.translate(5, &Vector3f::new(0.05, 0.0, 0.0));

        let moved = grid.get(1, 1);
        assert!((moved.x - (before.get(1, 1).x + 0.05)).abs() < 1e-6);
        assert_eq!(moved.y, before.get(1, 1).y);
        assert_eq!(moved.z, before.get(1, 1).z);

        for i in 0..GRID_SIZE {
            for j in 0..GRID_SIZE {
                if (i, j) != (1, 1) {
                    assert_eq!(grid.get(i, j), before.get(i, j));
                }
            }
        }
    }

    #[test]
    fn test_centroid_of_default_grid() {
        let c = ControlGrid::default().centroid();
        assert!(c.x.abs() < 1e-6);
        assert!(c.y.abs() < 1e-6);
        assert!((c.z - 0.375).abs() < 1e-6);
    }

    #[test]
    fn test_row_major_round_trip_and_display() {
        let pts: Vec<Vector3f> = (0..16).map(|k| Vector3f::new(k as Float, 0.0, -(k as Float))).collect();
        let grid = ControlGrid::from_row_major(&pts).expect("16 points");
        assert_eq!(grid.row_major(), pts);
        assert!(ControlGrid::from_row_major(&pts[..10]).is_none());

        let listing = grid.to_string();
        assert!(listing.starts_with("Control points:\n"));
        assert!(listing.contains(" 5: (5.000, 0.000, -5.000)"));
    }
}
