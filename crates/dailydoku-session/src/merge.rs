//! Log union with a canonical total order.

use std::collections::HashSet;

use crate::MoveRecord;

/// Merges two per-device move logs into one canonical log.
///
/// Records are deduplicated by their `(device_id, rev)` identity, keeping
/// the first occurrence encountered, then ordered by
/// `(timestamp, device_id, rev)` ascending. Since duplicate identities are
/// the same immutable fact, the result does not depend on which log is
/// passed first: merge is commutative and idempotent.
#[must_use]
pub fn merge(log_a: &[MoveRecord], log_b: &[MoveRecord]) -> Vec<MoveRecord> {
    let mut seen: HashSet<(&str, u64)> = HashSet::with_capacity(log_a.len() + log_b.len());
    let mut merged = Vec::with_capacity(log_a.len() + log_b.len());
    for record in log_a.iter().chain(log_b) {
        if seen.insert((record.device_id.as_str(), record.rev)) {
            merged.push(record.clone());
        }
    }
    merged.sort_by(|a, b| {
        (a.timestamp, &a.device_id, a.rev).cmp(&(b.timestamp, &b.device_id, b.rev))
    });
    merged
}
