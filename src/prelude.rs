//! Prelude module: `prelude` re-exports all `gamemath` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use gamemath::prelude::*;
//! ```
//!

// re-exports
pub use crate::fractions::*;
pub use crate::matrices::*;
pub use crate::points::*;
pub use crate::rects::*;
pub use crate::tables::*;
pub use crate::vectors::*;
pub use crate::*;
