//! Error type for index construction and window validation.

use std::error::Error;
use std::fmt;

/// Errors surfaced by index constructors and [`Window::new`].
///
/// Everything here is a caller error, never a transient condition: all
/// operations are deterministic functions of the immutable structure and the
/// query, so nothing is retried.
///
/// [`Window::new`]: crate::Window::new
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum IndexError {
    /// An index was built from an empty point set.
    EmptyPointSet,
    /// A query window with an inverted x or y interval.
    MalformedWindow {
        /// Left window bound
        x_min: f64,
        /// Right window bound
        x_max: f64,
        /// Bottom window bound
        y_min: f64,
        /// Top window bound
        y_max: f64,
    },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPointSet => write!(f, "cannot build an index from an empty point set"),
            Self::MalformedWindow { x_min, x_max, y_min, y_max } => write!(
                f,
                "malformed window [{x_min}, {x_max}] x [{y_min}, {y_max}]: bounds must satisfy x_min <= x_max and y_min <= y_max"
            ),
        }
    }
}

impl Error for IndexError {}
