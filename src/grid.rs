//! Grid-decomposition index with flood-fill queries.
//!
//! The bounding box of the point set is cut into a uniform grid; a query
//! flood-fills breadth-first from the cell under the window's center over
//! 4-neighbors that intersect the window. Cells fully covered by the window
//! are reported wholesale, boundary cells are filtered point by point.

use std::collections::VecDeque;

use crate::WindowIndex;
use crate::error::IndexError;
use crate::point::{Point, Window, bounding_box};

/// One grid cell: its points and its closed rectangle.
#[derive(Clone, Debug)]
struct Cell {
    points: Vec<Point>,
    min: Point,
    max: Point,
}

impl Cell {
    fn intersects(&self, window: &Window) -> bool {
        window.x_min() <= self.max.x
            && window.x_max() >= self.min.x
            && window.y_min() <= self.max.y
            && window.y_max() >= self.min.y
    }

    fn covered_by(&self, window: &Window) -> bool {
        window.x_min() <= self.min.x
            && window.y_min() <= self.min.y
            && window.x_max() >= self.max.x
            && window.y_max() >= self.max.y
    }
}

/// Uniform grid over the point set's bounding box.
#[derive(Clone, Debug)]
pub struct GridIndex {
    /// Row-major: `row * columns + column`
    cells: Vec<Cell>,
    columns: usize,
    rows: usize,
    cell_width: f64,
    cell_height: f64,
    bounds: Window,
}

impl GridIndex {
    /// Builds a grid with `subdivisions + 1` cells per axis over the point
    /// set's bounding box.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::EmptyPointSet`] when `points` is empty.
    pub fn build(points: &[Point], subdivisions: usize) -> Result<Self, IndexError> {
        if points.is_empty() {
            return Err(IndexError::EmptyPointSet);
        }
        let subdivisions = subdivisions.max(1);

        let bounds = bounding_box(points);
        let columns = subdivisions + 1;
        let rows = subdivisions + 1;
        let cell_width = (bounds.x_max() - bounds.x_min()) / subdivisions as f64;
        let cell_height = (bounds.y_max() - bounds.y_min()) / subdivisions as f64;

        let mut cells = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            for column in 0..columns {
                let min = Point::new(
                    bounds.x_min() + cell_width * column as f64,
                    bounds.y_min() + cell_height * row as f64,
                );
                let max = Point::new(min.x + cell_width, min.y + cell_height);
                cells.push(Cell { points: Vec::new(), min, max });
            }
        }

        let mut grid = Self { cells, columns, rows, cell_width, cell_height, bounds };
        for point in points {
            let index = grid.cell_index(point.x, point.y);
            grid.cells[index].points.push(*point);
        }
        Ok(grid)
    }

    /// Cell under `(x, y)`, clamped into the grid for coordinates outside
    /// the bounding box.
    fn cell_index(&self, x: f64, y: f64) -> usize {
        // Degenerate axes (width 0) divide to NaN, which the saturating
        // float-to-int cast turns into 0.
        let column = ((x - self.bounds.x_min()) / self.cell_width) as usize;
        let row = ((y - self.bounds.y_min()) / self.cell_height) as usize;
        row.min(self.rows - 1) * self.columns + column.min(self.columns - 1)
    }
}

impl WindowIndex for GridIndex {
    fn search(&self, window: &Window) -> Vec<Point> {
        let center_x = (window.x_min() + window.x_max()) / 2.0;
        let center_y = (window.y_min() + window.y_max()) / 2.0;
        let start = self.cell_index(center_x, center_y);

        let mut result = Vec::new();
        let mut seen = vec![false; self.cells.len()];
        let mut queue = VecDeque::new();
        queue.push_back(start);
        seen[start] = true;

        while let Some(index) = queue.pop_front() {
            let cell = &self.cells[index];
            if cell.covered_by(window) {
                result.extend_from_slice(&cell.points);
            } else {
                for point in &cell.points {
                    if window.contains(point) {
                        result.push(*point);
                    }
                }
            }

            let row = index / self.columns;
            let column = index % self.columns;
            let mut neighbors = [None; 4];
            if row > 0 {
                neighbors[0] = Some(index - self.columns);
            }
            if row + 1 < self.rows {
                neighbors[1] = Some(index + self.columns);
            }
            if column > 0 {
                neighbors[2] = Some(index - 1);
            }
            if column + 1 < self.columns {
                neighbors[3] = Some(index + 1);
            }

            for neighbor in neighbors.into_iter().flatten() {
                if !seen[neighbor] && self.cells[neighbor].intersects(window) {
                    seen[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        result
    }
}
