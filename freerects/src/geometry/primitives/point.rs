use crate::Cell;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Rect;
use serde::{Deserialize, Serialize};

/// Geometric primitive representing a cell position on the canvas
#[derive(Debug, Clone, PartialEq, Eq, Hash, Copy, Serialize, Deserialize)]
pub struct Point(pub Cell, pub Cell);

impl Point {
    pub fn x(&self) -> Cell {
        self.0
    }

    pub fn y(&self) -> Cell {
        self.1
    }
}

impl From<Point> for (Cell, Cell) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(Cell, Cell)> for Point {
    fn from(p: (Cell, Cell)) -> Self {
        Point(p.0, p.1)
    }
}

impl<T> CollidesWith<T> for Point
where
    T: CollidesWith<Point>,
{
    fn collides_with(&self, other: &T) -> bool {
        other.collides_with(self)
    }
}

/// Width and height of a rectangular item, in cells. Carries no position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Copy, Serialize, Deserialize)]
pub struct Dims(pub Cell, pub Cell);

impl Dims {
    pub fn width(&self) -> Cell {
        self.0
    }

    pub fn height(&self) -> Cell {
        self.1
    }

    pub fn area(&self) -> u64 {
        self.0 as u64 * self.1 as u64
    }

    /// True iff an item of these dimensions fits inside `rect` without
    /// resizing. Pure size comparison, positions are irrelevant.
    pub fn fits_in(&self, rect: &Rect) -> bool {
        self.0 <= rect.width() && self.1 <= rect.height()
    }
}

impl From<Dims> for (Cell, Cell) {
    fn from(d: Dims) -> Self {
        (d.0, d.1)
    }
}

impl From<(Cell, Cell)> for Dims {
    fn from(d: (Cell, Cell)) -> Self {
        Dims(d.0, d.1)
    }
}
