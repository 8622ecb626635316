use crate::entities::{Item, Layout, LayoutSnapshot, Problem, Solution};
use crate::free_space::FreeSpaceEngine;
use crate::geometry::geo_enums::GeoRelation;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Point, Rect};
use itertools::Itertools;
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

pub fn instance_item_ids_correct(items: &[(Item, usize)]) -> bool {
    items.iter().enumerate().all(|(i, (item, _qty))| item.id == i)
}

/// No two placed items share a cell.
pub fn placed_items_disjoint(layout: &Layout) -> bool {
    layout
        .placed_rects()
        .iter()
        .tuple_combinations()
        .all(|(a, b)| !a.collides_with(b))
}

/// Every placed item lies fully inside the canvas.
pub fn placed_items_inside_canvas(layout: &Layout) -> bool {
    let bbox = layout.canvas.bbox();
    layout
        .placed_rects()
        .iter()
        .all(|rect| bbox.relation_to(*rect) == GeoRelation::Surrounding)
}

/// Every cell of the canvas is covered by exactly one of: a placed item, or
/// at least one free rectangle.
///
/// Maximal free rectangles overlap one another, so coverage is checked per
/// cell rather than by summing rectangle areas.
pub fn area_is_conserved(layout: &Layout) -> bool {
    let placed = layout.placed_rects();
    let free_rects = layout.free_space().free_rects();
    let bbox = layout.canvas.bbox();

    (bbox.x_min..bbox.x_max)
        .cartesian_product(bbox.y_min..bbox.y_max)
        .all(|(x, y)| {
            let point = Point(x, y);
            let occupied = placed.iter().any(|rect| rect.collides_with(&point));
            let free = free_rects.iter().any(|rect| rect.collides_with(&point));
            occupied != free
        })
}

/// No free rectangle can be extended by one cell in any of the four axis
/// directions without overlapping a placed item or leaving the canvas.
pub fn free_rects_are_maximal(layout: &Layout) -> bool {
    let placed = layout.placed_rects();
    let bbox = layout.canvas.bbox();

    layout.free_space().free_rects().iter().all(|fr| {
        let extensions = [
            Rect {
                x_min: fr.x_min - 1,
                ..*fr
            },
            Rect {
                x_max: fr.x_max + 1,
                ..*fr
            },
            Rect {
                y_min: fr.y_min - 1,
                ..*fr
            },
            Rect {
                y_max: fr.y_max + 1,
                ..*fr
            },
        ];
        extensions.into_iter().all(|ext| {
            bbox.relation_to(ext) != GeoRelation::Surrounding
                || placed.iter().any(|rect| rect.collides_with(&ext))
        })
    })
}

/// No free rectangle is a subset of another free rectangle in the list.
pub fn free_rects_non_redundant(free_rects: &[Rect]) -> bool {
    free_rects.iter().tuple_combinations().all(|(a, b)| {
        let rel = a.relation_to(*b);
        rel != GeoRelation::Surrounding && rel != GeoRelation::Enclosed
    })
}

/// Free rectangles are ordered ascending by `(y_min, x_min)`.
pub fn free_rects_sorted(free_rects: &[Rect]) -> bool {
    free_rects
        .iter()
        .tuple_windows()
        .all(|(a, b)| (a.y_min, a.x_min) <= (b.y_min, b.x_min))
}

/// The layout's free-space state matches a from-scratch recomputation over
/// its placed items.
pub fn engine_matches_fresh_recompute(layout: &Layout) -> bool {
    let mut fresh = FreeSpaceEngine::new(layout.free_space().bbox());
    fresh.recompute(&layout.placed_rects());
    fresh.free_rects() == layout.free_space().free_rects()
}

/// Umbrella check for all layout invariants; holds after every successful
/// placement.
pub fn layout_is_consistent(layout: &Layout) -> bool {
    placed_items_disjoint(layout)
        && placed_items_inside_canvas(layout)
        && area_is_conserved(layout)
        && free_rects_are_maximal(layout)
        && free_rects_non_redundant(layout.free_space().free_rects())
        && free_rects_sorted(layout.free_space().free_rects())
}

pub fn snapshot_matches_layout(layout: &Layout, snapshot: &LayoutSnapshot) -> bool {
    if layout.canvas != snapshot.canvas {
        return false;
    }
    if layout.placed_items.len() != snapshot.placed_items.len() {
        return false;
    }
    for (pk, pi) in &snapshot.placed_items {
        if layout.placed_items.get(pk) != Some(pi) {
            return false;
        }
    }
    layout.free_space().free_rects() == snapshot.free_rects
}

pub fn problem_matches_solution(problem: &Problem, solution: &Solution) -> bool {
    snapshot_matches_layout(&problem.layout, &solution.layout_snapshot)
        && problem
            .item_demand_qtys
            .iter()
            .enumerate()
            .all(|(id, &remaining)| {
                let placed_qty = solution
                    .layout_snapshot
                    .placed_items
                    .values()
                    .filter(|pi| pi.item_id == id)
                    .count();
                problem.instance.item_qty(id) == remaining + placed_qty
            })
}
