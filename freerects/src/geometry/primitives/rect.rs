use crate::Cell;
use crate::geometry::geo_enums::GeoRelation;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Dims, Point};
use anyhow::Result;
use anyhow::ensure;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in cell units, covering the half-open extent
/// `[x_min, x_max) × [y_min, y_max)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Copy, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: Cell,
    pub y_min: Cell,
    pub x_max: Cell,
    pub y_max: Cell,
}

impl Rect {
    pub fn try_new(x_min: Cell, y_min: Cell, x_max: Cell, y_max: Cell) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Rectangle of the given dimensions anchored with its origin at `origin`.
    pub fn from_origin_and_dims(origin: Point, dims: Dims) -> Result<Self> {
        Rect::try_new(
            origin.x(),
            origin.y(),
            origin.x() + dims.width(),
            origin.y() + dims.height(),
        )
    }

    /// Returns the geometric relation between `self` and another [`Rect`].
    /// Optimized for `GeoRelation::Disjoint`
    #[inline(always)]
    pub fn relation_to(&self, other: Rect) -> GeoRelation {
        if !self.collides_with(&other) {
            return GeoRelation::Disjoint;
        }
        if self.x_min <= other.x_min
            && self.y_min <= other.y_min
            && self.x_max >= other.x_max
            && self.y_max >= other.y_max
        {
            return GeoRelation::Surrounding;
        }
        if self.x_min >= other.x_min
            && self.y_min >= other.y_min
            && self.x_max <= other.x_max
            && self.y_max <= other.y_max
        {
            return GeoRelation::Enclosed;
        }
        GeoRelation::Intersecting
    }

    /// The origin cell of `self`: its minimum corner.
    pub fn origin(&self) -> Point {
        Point(self.x_min, self.y_min)
    }

    pub fn dims(&self) -> Dims {
        Dims(self.width(), self.height())
    }

    pub fn width(&self) -> Cell {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> Cell {
        self.y_max - self.y_min
    }

    /// Number of cells covered by `self`.
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }
}

impl CollidesWith<Rect> for Rect {
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        Cell::max(self.x_min, other.x_min) < Cell::min(self.x_max, other.x_max)
            && Cell::max(self.y_min, other.y_min) < Cell::min(self.y_max, other.y_max)
    }
}

impl CollidesWith<Point> for Rect {
    #[inline(always)]
    fn collides_with(&self, point: &Point) -> bool {
        let Point(x, y) = *point;
        x >= self.x_min && x < self.x_max && y >= self.y_min && y < self.y_max
    }
}
