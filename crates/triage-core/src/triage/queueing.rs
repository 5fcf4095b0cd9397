use serde::{Deserialize, Serialize};

use super::domain::CaseId;

/// An already-triaged case waiting in the departmental queue. `acuity` is
/// the engine's priority on the shared 1..=5 scale, 1 most urgent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedCase {
    pub case_id: CaseId,
    pub acuity: u8,
}

/// Base wait in minutes for an acuity level before queue effects.
pub fn base_wait_minutes(acuity: u8) -> u32 {
    match acuity {
        0 | 1 => 0,
        2 => 15,
        3 => 30,
        4 => 60,
        _ => 120,
    }
}

/// Estimated wait for the item at `position`: the acuity base plus 15
/// minutes per item ahead with strictly more urgent (lower) acuity.
///
/// Returns `None` when `position` is outside the queue.
pub fn estimate_wait_minutes(queue: &[QueuedCase], position: usize) -> Option<u32> {
    let case = queue.get(position)?;
    let more_urgent_ahead = queue[..position]
        .iter()
        .filter(|ahead| ahead.acuity < case.acuity)
        .count() as u32;
    Some(base_wait_minutes(case.acuity) + 15 * more_urgent_ahead)
}

/// Wait estimates for every queued item, in queue order.
pub fn queue_estimates(queue: &[QueuedCase]) -> Vec<u32> {
    (0..queue.len())
        .map(|position| estimate_wait_minutes(queue, position).unwrap_or(0))
        .collect()
}
