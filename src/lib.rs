//! # Gamemath
//!
//! **Gamemath** - small 2d math and grid container library that supports game-object positioning.
//!

#![warn(missing_docs, clippy::missing_docs_in_private_items)] // `missing_docs`
#![warn(unused_import_braces, unused_qualifications, unused_results)] // `unused_*`
#![warn(trivial_casts, trivial_numeric_casts)] // `casts`
#![warn(missing_copy_implementations, missing_debug_implementations)] // `missing_*_implementations`
#![warn(variant_size_differences, unreachable_pub)]

// crates
extern crate num_traits;

extern crate serde;
extern crate serde_big_array;

extern crate thiserror;

// utils
mod errors;
pub use crate::errors::*;

// modules
pub mod fractions;
pub mod matrices;
pub mod points;
pub mod rects;
pub mod tables;
pub mod vectors;

// prelude
pub mod prelude;
