/// Geometric relation between two axis-aligned rectangles.
#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub enum GeoRelation {
    /// The rectangles share at least one cell, but neither contains the other
    Intersecting,
    /// `self` lies entirely within the other rectangle
    Enclosed,
    /// The other rectangle lies entirely within `self`
    Surrounding,
    /// The rectangles share no cell
    Disjoint,
}
