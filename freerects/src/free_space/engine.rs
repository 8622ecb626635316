use crate::geometry::geo_enums::GeoRelation;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Dims, Point, Rect};
use itertools::Itertools;
use log::debug;

/// Maintains the free space of a canvas as a list of maximal free
/// rectangles: rectangles no cell of which is covered by a placed item and
/// which cannot be extended in any direction without overlapping one or
/// leaving the canvas.
///
/// The list is derived state: [`FreeSpaceEngine::recompute`] rebuilds it
/// from scratch from the current set of placed rectangles, it is never
/// patched incrementally. A rebuild visits every cell of the canvas as a
/// candidate origin, costing O(width² · height² · items) in the worst
/// case, which bounds this engine to small canvases.
#[derive(Clone, Debug)]
pub struct FreeSpaceEngine {
    /// Full extent of the canvas
    bbox: Rect,
    /// All maximal free rectangles, ordered ascending by `(y_min, x_min)`
    free_rects: Vec<Rect>,
}

impl FreeSpaceEngine {
    /// A fresh engine over an empty canvas: the whole extent is the single
    /// maximal free rectangle.
    pub fn new(bbox: Rect) -> Self {
        FreeSpaceEngine {
            bbox,
            free_rects: vec![bbox],
        }
    }

    pub fn bbox(&self) -> Rect {
        self.bbox
    }

    /// The maximal free rectangles, ordered ascending by `(y_min, x_min)`.
    pub fn free_rects(&self) -> &[Rect] {
        &self.free_rects
    }

    /// First-fit query: scans the ordered free list and returns the extent
    /// the item would occupy, anchored at the origin of the first free
    /// rectangle it fits in. No state is mutated.
    ///
    /// `dims` must be strictly positive; [`Layout`](crate::entities::Layout)
    /// validates this before querying.
    pub fn find_space(&self, dims: Dims) -> Option<Rect> {
        self.free_rects
            .iter()
            .find(|fr| dims.fits_in(fr))
            .map(|fr| {
                Rect::from_origin_and_dims(fr.origin(), dims)
                    .expect("anchoring validated dims at a free rect origin")
            })
    }

    /// Rebuilds the free-rectangle list from scratch for the given placed
    /// rectangles: maximal-width rectangles are grown from every cell of
    /// the canvas, candidates contained in another candidate are discarded,
    /// and the survivors are sorted.
    pub fn recompute(&mut self, placed: &[Rect]) {
        let candidates = (self.bbox.x_min..self.bbox.x_max)
            .cartesian_product(self.bbox.y_min..self.bbox.y_max)
            .flat_map(|(x, y)| grow_from_origin(Point(x, y), self.bbox, placed))
            .collect_vec();

        self.free_rects = prune_contained(&candidates);
        // ascending y fills the bottom rows first; ascending x breaks ties
        // so that first-fit placement is fully deterministic
        self.free_rects.sort_by_key(|fr| (fr.y_min, fr.x_min));

        debug!(
            "[FSE] rebuilt {} free rects from {} candidates ({} placed items)",
            self.free_rects.len(),
            candidates.len(),
            placed.len()
        );
    }
}

/// True iff `point` lies within any of the placed rectangles.
/// Linear scan, no spatial index: the full rebuild dominates the cost of
/// placement regardless.
pub fn is_occupied(point: Point, placed: &[Rect]) -> bool {
    placed.iter().any(|rect| rect.collides_with(&point))
}

/// Grows every maximal-width free rectangle anchored at `origin`, one
/// candidate per achievable height.
///
/// Rows are consumed upward while the origin column stays free; each row is
/// scanned rightward until a placed item or the running width bound is hit.
/// The bound is clamped to the narrowest row reached so far, since a
/// rectangle cannot be wider than its narrowest row.
fn grow_from_origin(origin: Point, bbox: Rect, placed: &[Rect]) -> Vec<Rect> {
    let Point(ox, oy) = origin;
    let mut candidates = vec![];
    let mut x_reach = bbox.x_max;

    let mut y = oy;
    while y < bbox.y_max && !is_occupied(Point(ox, y), placed) {
        let mut x = ox;
        while x < x_reach && !is_occupied(Point(x, y), placed) {
            x += 1;
        }
        x_reach = x;
        if let Ok(rect) = Rect::try_new(ox, oy, x, y + 1) {
            candidates.push(rect);
        }
        y += 1;
    }
    candidates
}

/// Discards every candidate that lies entirely within another candidate,
/// leaving only the maximal rectangles. A stable pass over the input:
/// survivors keep their discovery order and each candidate is only ever
/// compared against the others.
fn prune_contained(candidates: &[Rect]) -> Vec<Rect> {
    (0..candidates.len())
        .filter(|&i| {
            let rect = candidates[i];
            !candidates.iter().enumerate().any(|(j, &other)| {
                // `Surrounding` is non-strict: among equal rectangles only
                // the first occurrence survives
                j != i
                    && other.relation_to(rect) == GeoRelation::Surrounding
                    && (other != rect || j < i)
            })
        })
        .map(|i| candidates[i])
        .collect()
}
