//! Balanced range tree with fractional cascading.
//!
//! The primary tree is balanced over the points in x order. Every node owns a
//! [`Cascade`] of its subtree's points in y order, bridged into the child
//! cascades, so a query binary searches once at the root and reaches every
//! deeper level through the bridges in constant time.

use crate::WindowIndex;
use crate::cascade::Cascade;
use crate::error::IndexError;
use crate::point::{Point, Window};

/// A point tagged with its rank in the x-sorted order.
///
/// The x partition during construction is positional: ranks, not x values,
/// decide which subtree a point lands in, so equal-x points split by their
/// (stable) sorted position.
#[derive(Clone, Copy, Debug)]
struct RankedPoint {
    rank: usize,
    point: Point,
}

/// One node of the primary tree.
///
/// `position` is the x split value. Internal nodes always have both
/// children; a leaf has neither and its cascade holds exactly one key.
#[derive(Clone, Debug)]
pub(crate) struct TreeNode {
    pub(crate) position: f64,
    pub(crate) cascade: Cascade,
    pub(crate) left: Option<Box<TreeNode>>,
    pub(crate) right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Static 2D range tree answering window queries in O(log n + k) time.
///
/// Built once from a non-empty point set and immutable afterwards; shared
/// references may be queried concurrently without synchronization.
///
/// # Examples
/// ```
/// use rangetree::{Point, RangeTree, Window};
///
/// let points = [Point::new(1.0, 2.0), Point::new(3.0, 4.0)];
/// let tree = RangeTree::build(&points)?;
///
/// let window = Window::new(0.0, 2.0, 0.0, 5.0)?;
/// assert_eq!(tree.search(&window), vec![Point::new(1.0, 2.0)]);
/// # Ok::<(), rangetree::IndexError>(())
/// ```
#[derive(Clone, Debug)]
pub struct RangeTree {
    pub(crate) root: TreeNode,
    num_points: usize,
}

impl RangeTree {
    /// Builds the tree from a point set in O(n log n) time.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::EmptyPointSet`] when `points` is empty.
    pub fn build(points: &[Point]) -> Result<Self, IndexError> {
        if points.is_empty() {
            return Err(IndexError::EmptyPointSet);
        }

        let mut x_sorted = points.to_vec();
        x_sorted.sort_by(|a, b| a.x.total_cmp(&b.x));

        let mut y_sorted: Vec<RankedPoint> = x_sorted
            .iter()
            .copied()
            .enumerate()
            .map(|(rank, point)| RankedPoint { rank, point })
            .collect();
        y_sorted.sort_by(|a, b| a.point.y.total_cmp(&b.point.y));

        // The x-sorted array is only needed to resolve split positions; it is
        // dropped once the root returns.
        let root = build_node(&x_sorted, 0, x_sorted.len(), &y_sorted);
        Ok(Self { root, num_points: points.len() })
    }

    /// Returns the number of indexed points.
    pub fn len(&self) -> usize {
        self.num_points
    }

    /// Returns whether the tree indexes no points (never true: construction
    /// rejects empty input).
    pub fn is_empty(&self) -> bool {
        self.num_points == 0
    }

    /// Returns every indexed point inside `window`, in unspecified order.
    ///
    /// Duplicate input points are reported once each.
    pub fn search(&self, window: &Window) -> Vec<Point> {
        let mut out = Vec::new();

        // The only binary search of the whole query. From here on the
        // cascade cursor follows bridges, one per tree level.
        let Some(mut cursor) = self.root.cascade.locate(window.y_min()) else {
            return out;
        };
        let mut node = &self.root;

        // Descend to the split node: the unique node whose split value falls
        // inside the window's x range.
        while node.position < window.x_min() || node.position > window.x_max() {
            let key = &node.cascade.keys[cursor];
            let (child, bridge) = if node.position < window.x_min() {
                (node.right.as_deref(), key.right_bridge)
            } else {
                (node.left.as_deref(), key.left_bridge)
            };
            match (child, bridge) {
                (Some(next), Some(offset)) => {
                    node = next;
                    cursor = offset as usize;
                }
                // Fell off the tree (window outside all x values) or ran out
                // of qualifying y values on this path.
                _ => return out,
            }
        }

        if node.is_leaf() {
            node.cascade.report(cursor, window, &mut out);
            return out;
        }

        let split_key = node.cascade.keys[cursor];
        walk_left_spine(node.left.as_deref(), split_key.left_bridge, window, &mut out);
        walk_right_spine(node.right.as_deref(), split_key.right_bridge, window, &mut out);
        out
    }
}

impl WindowIndex for RangeTree {
    fn search(&self, window: &Window) -> Vec<Point> {
        Self::search(self, window)
    }
}

/// Builds the node covering `[start, end)` of `x_sorted`.
///
/// `y_points` is the parent's y-ordered list; narrowing it by rank keeps the
/// subtree's points in y order without re-sorting, so each level does work
/// linear in the points it covers. Children are built to completion before
/// the parent cascade links to them.
fn build_node(x_sorted: &[Point], start: usize, end: usize, y_points: &[RankedPoint]) -> TreeNode {
    let own: Vec<RankedPoint> = y_points
        .iter()
        .copied()
        .filter(|ranked| start <= ranked.rank && ranked.rank < end)
        .collect();

    let mut cascade = Cascade::from_sorted(own.iter().map(|ranked| ranked.point));

    if own.len() == 1 {
        return TreeNode { position: own[0].point.x, cascade, left: None, right: None };
    }

    // Median biased low on even sizes; both halves stay non-empty, so every
    // internal node has two children.
    let size = end - start;
    let median = if size % 2 == 0 { size / 2 - 1 } else { size / 2 };
    let split = start + median + 1;

    let left = build_node(x_sorted, start, split, &own);
    let right = build_node(x_sorted, split, end, &own);
    cascade.link(&left.cascade, &right.cascade);

    TreeNode {
        position: x_sorted[start + median].x,
        cascade,
        left: Some(Box::new(left)),
        right: Some(Box::new(right)),
    }
}

/// Walks from the split node's left child toward `window.x_min()`.
///
/// Whenever the walk turns left, the node's right subtree lies entirely
/// inside the window's x range and is reported wholesale through its bridged
/// cascade; a leaf on the path reports itself. A `None` bridge means no
/// remaining y value on that path qualifies, ending the walk.
fn walk_left_spine(
    mut node: Option<&TreeNode>,
    mut bridge: Option<u32>,
    window: &Window,
    out: &mut Vec<Point>,
) {
    while let (Some(current), Some(offset)) = (node, bridge) {
        let key = &current.cascade.keys[offset as usize];
        if current.position < window.x_min() {
            node = current.right.as_deref();
            bridge = key.right_bridge;
        } else if current.position > window.x_min() {
            if let Some(right) = current.right.as_deref() {
                if let Some(right_offset) = key.right_bridge {
                    right.cascade.report(right_offset as usize, window, out);
                }
            } else {
                current.cascade.report(offset as usize, window, out);
            }
            node = current.left.as_deref();
            bridge = key.left_bridge;
        } else {
            current.cascade.report(offset as usize, window, out);
            break;
        }
    }
}

/// Mirror of [`walk_left_spine`]: from the split node's right child toward
/// `window.x_max()`, wholesale-reporting left subtrees on right turns.
fn walk_right_spine(
    mut node: Option<&TreeNode>,
    mut bridge: Option<u32>,
    window: &Window,
    out: &mut Vec<Point>,
) {
    while let (Some(current), Some(offset)) = (node, bridge) {
        let key = &current.cascade.keys[offset as usize];
        if current.position > window.x_max() {
            node = current.left.as_deref();
            bridge = key.left_bridge;
        } else if current.position < window.x_max() {
            if let Some(left) = current.left.as_deref() {
                if let Some(left_offset) = key.left_bridge {
                    left.cascade.report(left_offset as usize, window, out);
                }
            } else {
                current.cascade.report(offset as usize, window, out);
            }
            node = current.right.as_deref();
            bridge = key.right_bridge;
        } else {
            current.cascade.report(offset as usize, window, out);
            break;
        }
    }
}
