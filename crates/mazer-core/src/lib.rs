//! **mazer-core**: core types shared across the *mazer* crates.
//!
//! This crate provides the geometry primitives used to address maze cells
//! and search nodes, and [`Canvas`], an owned character buffer that the
//! renderer draws paths onto.

pub mod canvas;
pub mod geom;

pub use canvas::Canvas;
pub use geom::{Point, Range};
