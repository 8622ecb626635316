use crate::entities::Solution;
use crate::io::ext_repr::{ExtPlacedItem, ExtRect, ExtSolution};
use itertools::Itertools;
use std::time::Instant;

/// Exports a solution out of the library: one `(origin, size, item id)`
/// entry per placement for the rendering sink, plus the remaining free
/// rectangles and run statistics.
pub fn export(solution: &Solution, epoch: Instant) -> ExtSolution {
    let snapshot = &solution.layout_snapshot;

    let placements = snapshot
        .placed_items
        .values()
        .map(|pi| ExtPlacedItem {
            item_id: pi.item_id as u64,
            x: pi.rect.x_min,
            y: pi.rect.y_min,
            width: pi.rect.width(),
            height: pi.rect.height(),
        })
        .collect_vec();

    let free_rects = snapshot
        .free_rects
        .iter()
        .map(|fr| ExtRect {
            x: fr.x_min,
            y: fr.y_min,
            width: fr.width(),
            height: fr.height(),
        })
        .collect_vec();

    ExtSolution {
        placements,
        free_rects,
        density: snapshot.density(),
        run_time_sec: solution.time_stamp.duration_since(epoch).as_secs(),
    }
}
