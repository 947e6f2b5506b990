//! The event orchestrator.
//!
//! External entry points (`notify_*`) sequence validator calls, store
//! updates and the one declared re-validation cascade, then publish the
//! derived state to the renderer. Each notification runs to completion
//! before the next is handled; the store never crosses a thread boundary.

use crate::derived::{compute_progress, compute_submit_eligible};
use crate::render::FormRenderer;
use crate::store::FieldStateStore;
use fgate_domain::config::FormConfig;
use fgate_domain::constants;
use fgate_domain::fields::{FieldKey, FieldState};
use fgate_domain::strength::StrengthReport;
use fgate_domain::verdict::Verdict;
use fgate_validation::{strength, validators};
use fxhash::FxHashMap;
use std::fmt;
use std::time::Duration;
use strum::IntoEnumIterator;
use tracing::{debug, info, trace, warn};

/// Declared re-validation edges: a change to the left field re-validates the
/// right one. A cascaded update never walks the table again, so cascade
/// depth is structurally one.
const CASCADE_EDGES: &[(FieldKey, FieldKey)] =
    &[(FieldKey::Password, FieldKey::ConfirmPassword)];

/// Result of a submit attempt, also signalled through the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The submission completed after the fixed delay.
    Accepted,
    /// The submission was refused; no state changed.
    Rejected { reason: &'static str },
}

/// Orchestrates one form instance.
///
/// Construct one engine per form; engines share no state, so multiple
/// independent forms can coexist in a process. The per-field state machine
/// is untouched -> touched-invalid -> touched-valid, with input or blur
/// (whichever comes first) marking a field touched.
pub struct FormEngine<R: FormRenderer> {
    config: FormConfig,
    store: FieldStateStore,
    // Last-seen raw values; needed by the cascade and the focus rule.
    values: FxHashMap<FieldKey, String>,
    submit_pending: bool,
    renderer: R,
}

impl<R: FormRenderer> FormEngine<R> {
    /// Creates an engine over a fresh store: all fields untouched and
    /// invalid.
    #[must_use]
    pub fn new(config: FormConfig, renderer: R) -> Self {
        Self {
            config,
            store: FieldStateStore::new(),
            values: FxHashMap::default(),
            submit_pending: false,
            renderer,
        }
    }

    /// Engine with the stock configuration.
    #[must_use]
    pub fn with_defaults(renderer: R) -> Self {
        Self::new(FormConfig::default(), renderer)
    }

    /// The field state store (read-only; mutation goes through `notify_*`).
    #[must_use]
    pub const fn store(&self) -> &FieldStateStore {
        &self.store
    }

    #[must_use]
    pub const fn config(&self) -> &FormConfig {
        &self.config
    }

    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Consumes the engine, returning the renderer.
    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Current completion percentage.
    #[must_use]
    pub fn progress(&self) -> u8 {
        compute_progress(&self.store)
    }

    /// Whether every field is valid and touched.
    #[must_use]
    pub fn submit_eligible(&self) -> bool {
        compute_submit_eligible(&self.store)
    }

    /// True while a submission delay is in flight.
    #[must_use]
    pub const fn submit_pending(&self) -> bool {
        self.submit_pending
    }

    /// A field's value changed.
    ///
    /// Validates the field (marking it touched), updates the strength meter
    /// and runs the cascade when the field is the password, then publishes
    /// progress and submit state.
    pub fn notify_input(&mut self, key: FieldKey, value: &str) {
        trace!(field = %key, "input event");
        self.values.insert(key, value.to_owned());
        self.revalidate(key, true);
        if key == FieldKey::Password {
            self.publish_strength();
        }
        self.cascade_from(key);
        self.publish_derived();
    }

    /// A field lost focus. Marks it touched and re-validates; for the
    /// password field the strength meter is refreshed as well, since the
    /// blur carries the current value.
    pub fn notify_blur(&mut self, key: FieldKey, value: &str) {
        trace!(field = %key, "blur event");
        self.values.insert(key, value.to_owned());
        self.revalidate(key, true);
        if key == FieldKey::Password {
            self.publish_strength();
        }
        self.publish_derived();
    }

    /// A field gained focus.
    ///
    /// Unless the field is touched and holds a non-empty value, the renderer
    /// is told to clear its validation markers. The store is unchanged.
    pub fn notify_focus(&mut self, key: FieldKey) {
        trace!(field = %key, "focus event");
        let touched = self.store.get(key).touched;
        let has_value = self.values.get(&key).is_some_and(|v| !v.is_empty());
        if !(touched && has_value) {
            self.renderer.clear_field(key);
        }
    }

    /// Attempts submission.
    ///
    /// Refused synchronously while a submission is pending or while the form
    /// is not eligible; neither case changes any state. An accepted
    /// submission suspends for the configured delay (the transport stub)
    /// before the accepted signal fires. The delay is not cancellable: if
    /// the returned future is dropped mid-flight the gate stays closed until
    /// [`notify_reset`](Self::notify_reset).
    pub async fn notify_submit(&mut self) -> SubmitOutcome {
        if self.submit_pending {
            warn!("submit refused, one is already pending");
            self.renderer.on_submit_rejected(constants::SUBMIT_IN_FLIGHT);
            return SubmitOutcome::Rejected { reason: constants::SUBMIT_IN_FLIGHT };
        }
        if !compute_submit_eligible(&self.store) {
            debug!("submit refused, form not eligible");
            self.renderer.on_submit_rejected(constants::SUBMIT_FIX_ERRORS);
            return SubmitOutcome::Rejected { reason: constants::SUBMIT_FIX_ERRORS };
        }

        self.submit_pending = true;
        self.renderer.render_submit_state(true, true);
        info!(delay_ms = self.config.submit_delay_ms, "submission started");

        tokio::time::sleep(Duration::from_millis(self.config.submit_delay_ms)).await;

        self.submit_pending = false;
        self.renderer.render_submit_state(compute_submit_eligible(&self.store), false);
        self.renderer.on_submit_accepted();
        info!("submission accepted");
        SubmitOutcome::Accepted
    }

    /// Resets the form: store and value cache back to initial state, every
    /// field re-rendered blank, then the reset signal for the collaborator
    /// to blank visuals and refocus the first field.
    pub fn notify_reset(&mut self) {
        self.store.reset();
        self.values.clear();
        self.submit_pending = false;

        for key in FieldKey::iter() {
            self.renderer.render_field(key, FieldState::default(), &Verdict::none());
        }
        self.renderer.render_strength(&StrengthReport::unset());
        self.publish_derived();
        self.renderer.on_reset();
        info!("form reset");
    }

    fn revalidate(&mut self, key: FieldKey, mark_touched: bool) {
        let verdict = self.verdict_for(key);
        let touched = mark_touched || self.store.get(key).touched;
        self.store.set(key, verdict.is_valid, touched);
        debug!(field = %key, valid = verdict.is_valid, touched, "field state updated");
        self.renderer.render_field(key, self.store.get(key), &verdict);
    }

    fn verdict_for(&self, key: FieldKey) -> Verdict {
        let value = self.value_of(key);
        match key {
            FieldKey::FullName => validators::validate_name(&self.config.policy, value),
            FieldKey::Email => validators::validate_email(value),
            FieldKey::Password => validators::validate_password(&self.config.policy, value),
            FieldKey::ConfirmPassword => {
                validators::validate_confirm(value, self.value_of(FieldKey::Password))
            },
        }
    }

    fn value_of(&self, key: FieldKey) -> &str {
        self.values.get(&key).map_or("", String::as_str)
    }

    // Touched flags are left as-is on the dependent side: a cascade is not a
    // user interaction with that field.
    fn cascade_from(&mut self, key: FieldKey) {
        for &(source, dependent) in CASCADE_EDGES {
            if source == key && !self.value_of(dependent).is_empty() {
                trace!(from = %source, to = %dependent, "cascade re-validation");
                self.revalidate(dependent, false);
            }
        }
    }

    fn publish_strength(&mut self) {
        let report =
            strength::score_strength(&self.config.policy, self.value_of(FieldKey::Password));
        self.renderer.render_strength(&report);
    }

    fn publish_derived(&mut self) {
        self.renderer.render_progress(compute_progress(&self.store));
        self.renderer.render_submit_state(
            compute_submit_eligible(&self.store),
            self.submit_pending,
        );
    }
}

impl<R: FormRenderer> fmt::Debug for FormEngine<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormEngine")
            .field("store", &self.store)
            .field("submit_pending", &self.submit_pending)
            .finish_non_exhaustive()
    }
}
