//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use rangetree::prelude::*;
//! ```

pub use crate::GridIndex;
pub use crate::IndexError;
pub use crate::LinearScan;
pub use crate::NestedMapIndex;
pub use crate::Point;
pub use crate::RangeTree;
pub use crate::SortedXScan;
pub use crate::Window;
pub use crate::WindowIndex;
