//! Field state bookkeeping.

use fgate_domain::fields::{FieldKey, FieldState};
use fxhash::FxHashMap;
use strum::IntoEnumIterator;

/// Holds one `{is_valid, touched}` entry per field.
///
/// The key set is fixed at construction (one entry per [`FieldKey`]) and
/// never grows or shrinks. Entries are mutated only by the event
/// orchestrator; [`reset`](Self::reset) returns every entry to its default in
/// one pass, so a subsequent read can never observe a partial reset.
#[derive(Debug, Clone)]
pub struct FieldStateStore {
    fields: FxHashMap<FieldKey, FieldState>,
}

impl FieldStateStore {
    #[must_use]
    pub fn new() -> Self {
        Self { fields: FieldKey::iter().map(|key| (key, FieldState::default())).collect() }
    }

    /// Current state of a field.
    #[must_use]
    pub fn get(&self, key: FieldKey) -> FieldState {
        self.fields.get(&key).copied().unwrap_or_default()
    }

    /// Records the outcome of a validation pass.
    pub fn set(&mut self, key: FieldKey, is_valid: bool, touched: bool) {
        self.fields.insert(key, FieldState { is_valid, touched });
    }

    /// Returns every field to `{is_valid: false, touched: false}`.
    pub fn reset(&mut self) {
        for state in self.fields.values_mut() {
            *state = FieldState::default();
        }
    }

    /// Number of currently valid fields.
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.fields.values().filter(|state| state.is_valid).count()
    }

    /// Total number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterates over `(key, state)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, FieldState)> + '_ {
        self.fields.iter().map(|(key, state)| (*key, *state))
    }
}

impl Default for FieldStateStore {
    fn default() -> Self {
        Self::new()
    }
}
