/// Trait for types that can detect collisions between `Self` and `T`.
///
/// All extents in this library are half-open in cell units, so two
/// primitives collide iff they share at least one cell.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}
