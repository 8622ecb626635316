//! `freerects` is a 2D rectangle-packing allocator: axis-aligned items are
//! placed one at a time, first-fit, onto a fixed-size canvas of integer
//! cells, and after every placement the remaining usable area is rebuilt as
//! a minimal list of maximal free rectangles.
//!
//! The free-space bookkeeping is deliberately brute-force: every cell of
//! the canvas is treated as a candidate origin and maximal rectangles are
//! grown from it, so a full rebuild costs O(width² · height² · items) in
//! the worst case. This is only suitable for small canvases (tens to low
//! hundreds of cells per side); see [`FreeSpaceEngine`](free_space::FreeSpaceEngine).

/// Entities to model packing problems: canvas, items, layouts, solutions
pub mod entities;

/// The free-space engine maintaining the maximal free rectangles
pub mod free_space;

/// Geometric primitives over integer canvas cells
pub mod geometry;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

/// The scalar unit used across the library: one integer canvas cell.
pub type Cell = i32;
