use serde::Deserialize;
use std::borrow::Cow;
use typed_builder::TypedBuilder;

pub const DEFAULT_MIN_NAME_LEN: usize = 3;
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 8;
/// Punctuation set a password must draw at least one character from.
pub const DEFAULT_SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;

/// Tunable validation thresholds.
///
/// Every field has a default matching the stock sign-up form, so an empty
/// config source yields the standard behavior.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, TypedBuilder)]
#[serde(default)]
pub struct ValidationPolicy {
    /// Minimum length, in characters, of a trimmed full name.
    #[builder(default = DEFAULT_MIN_NAME_LEN)]
    pub min_name_len: usize,
    /// Minimum password length, in characters.
    #[builder(default = DEFAULT_MIN_PASSWORD_LEN)]
    pub min_password_len: usize,
    /// Characters counted as "special" by the password checks.
    #[builder(default = Cow::Borrowed(DEFAULT_SPECIAL_CHARS), setter(into))]
    pub special_chars: Cow<'static, str>,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Engine configuration: validation thresholds plus submission timing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, TypedBuilder)]
#[serde(default)]
pub struct FormConfig {
    #[builder(default)]
    pub policy: ValidationPolicy,
    /// Fixed artificial submission delay, in milliseconds. The stub stands in
    /// for a transport the engine does not own.
    #[builder(default = DEFAULT_SUBMIT_DELAY_MS)]
    pub submit_delay_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
