//! The collaborator surface.
//!
//! The engine owns no UI. Everything visual sits behind [`FormRenderer`];
//! the engine only sequences validation and state updates and tells the
//! renderer what changed.

use fgate_domain::fields::{FieldKey, FieldState};
use fgate_domain::strength::StrengthReport;
use fgate_domain::verdict::Verdict;

/// Rendering callbacks invoked by the [`FormEngine`](crate::engine::FormEngine).
///
/// Implementations must not call back into the engine; data flows one way
/// only.
pub trait FormRenderer {
    /// Visual update for one field after a validation pass.
    fn render_field(&mut self, key: FieldKey, state: FieldState, verdict: &Verdict);

    /// Strength-meter update. The unset report is sent for an empty password.
    fn render_strength(&mut self, report: &StrengthReport);

    /// Progress-bar update, 0..=100.
    fn render_progress(&mut self, percent: u8);

    /// Submit-control update. `pending` is true while a submission delay is
    /// in flight; the control must stay disabled for its duration.
    fn render_submit_state(&mut self, eligible: bool, pending: bool);

    /// The gated submission finished after its fixed delay.
    fn on_submit_accepted(&mut self);

    /// Submission was refused; `reason` is one of the fixed reasons from
    /// [`fgate_domain::constants`].
    fn on_submit_rejected(&mut self, reason: &str);

    /// The form was reset; blank all visual state and refocus the first
    /// field.
    fn on_reset(&mut self);

    /// Clear the validation markers of one field (focus rule). The stored
    /// state is unchanged.
    fn clear_field(&mut self, key: FieldKey);
}
