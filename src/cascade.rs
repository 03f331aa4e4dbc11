//! Per-node fractional cascading arrays.
//!
//! Every tree node owns one [`Cascade`]: its subtree's points sorted
//! ascending by y, each entry carrying bridge offsets into the two child
//! arrays. Bridges are plain indices rather than references, so the cross
//! structure they form over the tree never competes with node ownership.

use crate::point::{Point, Window};

/// One entry of a cascading array: a point plus the offsets of the first
/// entry with y at least as large in the left and right child arrays.
///
/// A bridge is `None` when the child does not exist or holds no entry with a
/// large enough y (the tail of the parent array); consumers treat that as
/// "no further points on this path".
#[derive(Clone, Copy, Debug)]
pub(crate) struct CascadeKey {
    pub(crate) point: Point,
    pub(crate) left_bridge: Option<u32>,
    pub(crate) right_bridge: Option<u32>,
}

/// A node's y-sorted cascading array.
#[derive(Clone, Debug)]
pub(crate) struct Cascade {
    pub(crate) keys: Vec<CascadeKey>,
}

impl Cascade {
    /// Builds an unlinked cascade from points already in ascending y order.
    pub(crate) fn from_sorted<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let keys = points
            .into_iter()
            .map(|point| CascadeKey { point, left_bridge: None, right_bridge: None })
            .collect();
        Self { keys }
    }

    /// Lower bound: index of the first key with y >= `y`, or `None` when
    /// every stored key lies below it.
    pub(crate) fn locate(&self, y: f64) -> Option<usize> {
        let index = self.keys.partition_point(|key| key.point.y < y);
        (index < self.keys.len()).then_some(index)
    }

    /// Scans forward from `start`, pushing points inside `window` onto `out`.
    ///
    /// The array ascends by y, so the scan stops at the first point above
    /// `window.y_max()`; everything after it is out of range too. The full
    /// containment check guards the x coordinate for boundary reports.
    pub(crate) fn report(&self, start: usize, window: &Window, out: &mut Vec<Point>) {
        for key in &self.keys[start..] {
            if window.contains(&key.point) {
                out.push(key.point);
            }
            if key.point.y > window.y_max() {
                break;
            }
        }
    }

    /// Wires this cascade's bridges into two fully built child cascades.
    ///
    /// All three arrays ascend by y, so one parallel walk finds each key's
    /// lower bound in both children in linear time. Cursors never move
    /// backwards: a later parent key has an equal-or-larger y, so its lower
    /// bound cannot precede an earlier key's.
    pub(crate) fn link(&mut self, left: &Self, right: &Self) {
        let mut left_cursor = 0;
        let mut right_cursor = 0;

        for key in &mut self.keys {
            while left_cursor < left.keys.len() && left.keys[left_cursor].point.y < key.point.y {
                left_cursor += 1;
            }
            key.left_bridge = (left_cursor < left.keys.len()).then_some(left_cursor as u32);

            while right_cursor < right.keys.len() && right.keys[right_cursor].point.y < key.point.y
            {
                right_cursor += 1;
            }
            key.right_bridge = (right_cursor < right.keys.len()).then_some(right_cursor as u32);
        }
    }
}
