/// Enums representing geometric relations
pub mod geo_enums;

/// Traits at the seams between geometric primitives
pub mod geo_traits;

/// Geometric primitives: [`Point`], [`Dims`] and [`Rect`]
pub mod primitives;

#[doc(inline)]
pub use primitives::{Dims, Point, Rect};
