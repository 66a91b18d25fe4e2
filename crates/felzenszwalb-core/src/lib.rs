//! felzenszwalb-core - Core image buffer and union-find primitives
//!
//! This crate provides the shared, dependency-free building blocks that the
//! segmentation pipeline in `felzenszwalb-region` is built on:
//!
//! - **Image** - an immutable, cheaply-clonable H×W RGB8 pixel grid.
//! - **DisjointSet** - union-find with path compression and union-by-rank.

pub mod disjoint_set;
pub mod error;
pub mod image;

pub use disjoint_set::DisjointSet;
pub use error::{CoreError, CoreResult};
pub use image::{Channel, Image};
