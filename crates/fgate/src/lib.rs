//! Facade crate for the Fieldgate form engine.
//! Re-exports the domain types, the pure validators and the orchestration
//! layer. Keep this crate thin: it composes other crates, never implements
//! logic of its own.
//!
//! ## Usage
//! - Implement [`FormRenderer`] over your presentation layer.
//! - Build a [`FormEngine`] per form and feed it `notify_*` events.

pub use fgate_domain as domain;
pub use fgate_form as form;
pub use fgate_validation as validation;

pub use fgate_domain::config::{FormConfig, ValidationPolicy};
pub use fgate_domain::fields::{FieldKey, FieldState};
pub use fgate_domain::strength::{StrengthChecks, StrengthReport, StrengthTier};
pub use fgate_domain::verdict::{MessageKind, Verdict};
pub use fgate_form::engine::{FormEngine, SubmitOutcome};
pub use fgate_form::render::FormRenderer;
