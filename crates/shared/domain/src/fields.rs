use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// Identifier of one of the form inputs.
///
/// The key set is fixed for the lifetime of a form: keys are never added or
/// removed at runtime. Iteration via [`strum::IntoEnumIterator`] follows the
/// declaration order, which is also the visual order of the form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FieldKey {
    FullName,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldKey {
    /// The first field in visual order, the one a collaborator refocuses
    /// after a form reset.
    #[must_use]
    pub const fn first() -> Self {
        Self::FullName
    }
}

/// Validation state of a single field.
///
/// `touched` means the field has received at least one input or blur event
/// since the last reset. Both flags start false and only a full form reset
/// clears them again.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldState {
    pub is_valid: bool,
    pub touched: bool,
}

impl FieldState {
    /// True when the field counts towards submit eligibility.
    #[must_use]
    pub const fn is_settled(self) -> bool {
        self.is_valid && self.touched
    }
}
