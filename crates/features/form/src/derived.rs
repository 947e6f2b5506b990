//! Derived UI state.
//!
//! Progress and submit eligibility are pure functions of the store contents.
//! They are recomputed after every processed event and never mutated
//! independently.

use crate::store::FieldStateStore;

/// Completion percentage: `round(valid / total * 100)`, 0..=100.
#[must_use]
pub fn compute_progress(store: &FieldStateStore) -> u8 {
    let total = store.len();
    if total == 0 {
        return 0;
    }
    let percent = (store.valid_count() * 100 + total / 2) / total;
    u8::try_from(percent).unwrap_or(100)
}

/// True iff every field is both valid and touched.
///
/// A programmatically filled but never-touched field keeps submission gated.
#[must_use]
pub fn compute_submit_eligible(store: &FieldStateStore) -> bool {
    store.iter().all(|(_, state)| state.is_settled())
}
