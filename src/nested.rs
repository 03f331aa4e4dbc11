//! Nested sorted-map index keyed by x then y.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::ops::Bound::Included;

use crate::WindowIndex;
use crate::error::IndexError;
use crate::point::{Point, Window};

/// f64 ordered by `total_cmp`, usable as a `BTreeMap` key.
#[derive(Clone, Copy, Debug, PartialEq)]
struct TotalF64(f64);

impl TotalF64 {
    fn new(value: f64) -> Self {
        // Collapse -0.0: window bounds validated with `<=` must stay ordered
        // under total_cmp as well.
        Self(if value == 0.0 { 0.0 } else { value })
    }
}

impl Eq for TotalF64 {}

impl PartialOrd for TotalF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TotalF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Sorted map keyed by x whose values are sorted maps keyed by y.
///
/// A query takes the x sub-range, then the y sub-range of every inner map.
/// Inner buckets hold every point at that exact coordinate, so duplicate
/// input points survive.
#[derive(Clone, Debug)]
pub struct NestedMapIndex {
    tree: BTreeMap<TotalF64, BTreeMap<TotalF64, Vec<Point>>>,
}

impl NestedMapIndex {
    /// Inserts every point into the nested maps.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::EmptyPointSet`] when `points` is empty.
    pub fn build(points: &[Point]) -> Result<Self, IndexError> {
        if points.is_empty() {
            return Err(IndexError::EmptyPointSet);
        }
        let mut tree: BTreeMap<TotalF64, BTreeMap<TotalF64, Vec<Point>>> = BTreeMap::new();
        for point in points {
            tree.entry(TotalF64::new(point.x))
                .or_default()
                .entry(TotalF64::new(point.y))
                .or_default()
                .push(*point);
        }
        Ok(Self { tree })
    }
}

impl WindowIndex for NestedMapIndex {
    fn search(&self, window: &Window) -> Vec<Point> {
        let mut result = Vec::new();
        let x_range =
            (Included(TotalF64::new(window.x_min())), Included(TotalF64::new(window.x_max())));
        let y_range =
            (Included(TotalF64::new(window.y_min())), Included(TotalF64::new(window.y_max())));

        for inner in self.tree.range(x_range).map(|(_, inner)| inner) {
            for bucket in inner.range(y_range).map(|(_, bucket)| bucket) {
                result.extend_from_slice(bucket);
            }
        }
        result
    }
}
