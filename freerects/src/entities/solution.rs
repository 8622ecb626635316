use crate::entities::LayoutSnapshot;
use std::time::Instant;

/// Snapshot of a [`Problem`](crate::entities::Problem) at a specific moment.
/// Can be used to restore to a previous state.
#[derive(Debug, Clone)]
pub struct Solution {
    pub layout_snapshot: LayoutSnapshot,
    /// Instant the solution was created
    pub time_stamp: Instant,
}

impl Solution {
    pub fn density(&self) -> f32 {
        self.layout_snapshot.density()
    }
}
