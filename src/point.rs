//! Point and window value types.

use crate::error::IndexError;

/// A 2D point with finite coordinates.
///
/// Value-equal; multiple points in an index may share coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned query rectangle `[x_min, x_max] x [y_min, y_max]` with
/// inclusive bounds.
///
/// The constructor validates the bounds, so a `Window` held by a caller is
/// always well-formed and queries take it without further checks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Window {
    /// Creates a window from its four bounds.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::MalformedWindow`] when `x_min > x_max`,
    /// `y_min > y_max`, or any bound is NaN. Degenerate (zero-area) windows
    /// are valid.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, IndexError> {
        let nan = x_min.is_nan() || x_max.is_nan() || y_min.is_nan() || y_max.is_nan();
        if nan || x_min > x_max || y_min > y_max {
            return Err(IndexError::MalformedWindow { x_min, x_max, y_min, y_max });
        }
        Ok(Self { x_min, x_max, y_min, y_max })
    }

    /// Left bound.
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// Right bound.
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Bottom bound.
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    /// Top bound.
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Tests whether `point` lies inside the window (closed bounds).
    pub fn contains(&self, point: &Point) -> bool {
        self.x_min <= point.x
            && point.x <= self.x_max
            && self.y_min <= point.y
            && point.y <= self.y_max
    }
}

/// Smallest window enclosing every point in `points`.
///
/// Callers guarantee a non-empty slice; the indexes all reject empty input
/// before reaching this.
pub(crate) fn bounding_box(points: &[Point]) -> Window {
    let mut x_min = points[0].x;
    let mut x_max = x_min;
    let mut y_min = points[0].y;
    let mut y_max = y_min;

    for point in points {
        x_min = x_min.min(point.x);
        x_max = x_max.max(point.x);
        y_min = y_min.min(point.y);
        y_max = y_max.max(point.y);
    }

    Window { x_min, x_max, y_min, y_max }
}
