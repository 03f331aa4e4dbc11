//! # rangetree - 2D Range Tree with Fractional Cascading
//!
//! A Rust library answering axis-aligned window queries over a static set of
//! 2D points: given a rectangle, return every point inside it.
//!
//! ## Features
//!
//! - **Fractional Cascading**: One binary search at the root; every deeper
//!   tree level is reached in constant time through precomputed bridges
//! - **O(log n + k) Queries**: k is the number of reported points
//! - **Simple API**: Build once from a point slice, then query
//! - **Static Optimization**: The structure is immutable after construction,
//!   so any number of queries may run concurrently against shared references
//!
//! ## Quick Start
//!
//! ```rust
//! use rangetree::prelude::*;
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(2.0, 2.0),
//!     Point::new(3.0, 3.0),
//!     Point::new(4.0, 4.0),
//! ];
//!
//! // Build the index (rejects an empty point set)
//! let tree = RangeTree::build(&points)?;
//!
//! // Query a closed rectangle [x_min, x_max] x [y_min, y_max]
//! let window = Window::new(0.0, 4.0, 0.0, 3.0)?;
//! let inside = tree.search(&window);
//!
//! // (4.0, 4.0) lies above the window
//! assert_eq!(inside.len(), 4);
//! # Ok::<(), IndexError>(())
//! ```
//!
//! ## How It Works
//!
//! The primary tree is balanced over the points in x order; every node owns a
//! secondary array of its subtree's points sorted by y. Instead of binary
//! searching that array at each visited node, every array entry carries
//! "bridge" offsets to the first entry with an equal-or-larger y in each
//! child's array. A query binary searches once at the root, descends to the
//! split node where its x range straddles the node's split value, then walks
//! two spines reporting whole canonical subtrees through the bridges.
//!
//! The crate also ships four simpler indexes behind the same [`WindowIndex`]
//! contract - a linear scan, an x-sorted scan, a uniform grid, and a nested
//! sorted map - kept as correctness oracles and benchmark baselines.

pub mod error;
pub mod grid;
pub mod nested;
pub mod point;
pub mod prelude;
pub mod range_tree;
pub mod scan;

mod cascade;

pub use error::IndexError;
pub use grid::GridIndex;
pub use nested::NestedMapIndex;
pub use point::{Point, Window};
pub use range_tree::RangeTree;
pub use scan::{LinearScan, SortedXScan};

/// Window-query contract shared by every index in this crate.
///
/// All implementations answer the same question over the point set they were
/// built from: which points lie inside the closed query rectangle. Result
/// order is unspecified and duplicate input points are reported once each.
pub trait WindowIndex {
    /// Returns every indexed point inside `window`.
    fn search(&self, window: &Window) -> Vec<Point>;
}

#[cfg(test)]
mod integration_test;
