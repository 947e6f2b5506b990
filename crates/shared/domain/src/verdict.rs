use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// How a validation message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Error,
    Success,
    /// No message to show (cleared markers).
    None,
}

/// Outcome of validating a single field value.
///
/// Verdicts are transient: produced fresh per validation call and handed to
/// the renderer, never stored. A failed validation is a normal verdict, not
/// an error condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub is_valid: bool,
    pub message: Cow<'static, str>,
    pub kind: MessageKind,
}

impl Verdict {
    /// A failing verdict carrying an error message.
    #[must_use]
    pub fn error(message: impl Into<Cow<'static, str>>) -> Self {
        Self { is_valid: false, message: message.into(), kind: MessageKind::Error }
    }

    /// A passing verdict carrying a success message.
    #[must_use]
    pub fn success(message: impl Into<Cow<'static, str>>) -> Self {
        Self { is_valid: true, message: message.into(), kind: MessageKind::Success }
    }

    /// The blank verdict used when a field's markers are cleared.
    #[must_use]
    pub const fn none() -> Self {
        Self { is_valid: false, message: Cow::Borrowed(""), kind: MessageKind::None }
    }
}
