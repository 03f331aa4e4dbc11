//! Scan-based baseline indexes.
//!
//! [`LinearScan`] is the correctness oracle used by the comparison tests;
//! [`SortedXScan`] adds a binary-search start and early termination on x.
//! Both answer the same [`WindowIndex`] contract as the range tree.

use crate::WindowIndex;
use crate::error::IndexError;
use crate::point::{Point, Window};

/// Unindexed full scan over the point set.
#[derive(Clone, Debug)]
pub struct LinearScan {
    points: Vec<Point>,
}

impl LinearScan {
    /// Stores the point set as-is.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::EmptyPointSet`] when `points` is empty.
    pub fn build(points: &[Point]) -> Result<Self, IndexError> {
        if points.is_empty() {
            return Err(IndexError::EmptyPointSet);
        }
        Ok(Self { points: points.to_vec() })
    }
}

impl WindowIndex for LinearScan {
    fn search(&self, window: &Window) -> Vec<Point> {
        self.points.iter().filter(|point| window.contains(point)).copied().collect()
    }
}

/// X-sorted array scanned from a binary-search start, stopping past the
/// window's right bound.
#[derive(Clone, Debug)]
pub struct SortedXScan {
    points: Vec<Point>,
}

impl SortedXScan {
    /// Sorts the point set by x.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::EmptyPointSet`] when `points` is empty.
    pub fn build(points: &[Point]) -> Result<Self, IndexError> {
        if points.is_empty() {
            return Err(IndexError::EmptyPointSet);
        }
        let mut points = points.to_vec();
        points.sort_by(|a, b| a.x.total_cmp(&b.x));
        Ok(Self { points })
    }
}

impl WindowIndex for SortedXScan {
    fn search(&self, window: &Window) -> Vec<Point> {
        let mut result = Vec::new();
        let start = self.points.partition_point(|point| point.x < window.x_min());
        for point in &self.points[start..] {
            if point.x > window.x_max() {
                break;
            }
            if window.contains(point) {
                result.push(*point);
            }
        }
        result
    }
}
