//! Per-field validators.
//!
//! Each validator checks its conditions in a fixed order and returns on the
//! first failure, so only one message is ever shown per field at a time.
//! Every input, including the empty string, has a defined verdict.

use crate::strength::run_checks;
use fgate_domain::config::ValidationPolicy;
use fgate_domain::constants;
use fgate_domain::strength::StrengthChecks;
use fgate_domain::verdict::Verdict;

/// Validates the full-name field.
///
/// The value is trimmed first. Ordered checks: presence, minimum length,
/// then the character class (alphabetic or whitespace only).
#[must_use]
pub fn validate_name(policy: &ValidationPolicy, value: &str) -> Verdict {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Verdict::error(constants::NAME_REQUIRED);
    }
    if trimmed.chars().count() < policy.min_name_len {
        return Verdict::error(format!(
            "Name must be at least {} characters",
            policy.min_name_len
        ));
    }
    if !trimmed.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
        return Verdict::error(constants::NAME_LETTERS_ONLY);
    }

    Verdict::success(constants::NAME_OK)
}

/// Validates the email field against the RFC-lite shape
/// `local@label(.label)*.tld` with a top-level label of at least two ASCII
/// letters.
#[must_use]
pub fn validate_email(value: &str) -> Verdict {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Verdict::error(constants::EMAIL_REQUIRED);
    }
    if !is_rfc_lite_email(trimmed) {
        return Verdict::error(constants::EMAIL_INVALID);
    }

    Verdict::success(constants::EMAIL_OK)
}

/// Validates the password field.
///
/// The value is not trimmed (leading/trailing whitespace is significant in a
/// password). A non-empty password passes iff all five strength checks hold;
/// the failing rule is not distinguished in the message.
#[must_use]
pub fn validate_password(policy: &ValidationPolicy, value: &str) -> Verdict {
    if value.is_empty() {
        return Verdict::error(constants::PASSWORD_REQUIRED);
    }
    if run_checks(policy, value) != StrengthChecks::ALL {
        return Verdict::error(format!(
            "Password must be {}+ characters with uppercase, lowercase, number and special character",
            policy.min_password_len
        ));
    }

    Verdict::success(constants::PASSWORD_OK)
}

/// Validates the confirm-password field against the sibling password value.
/// Comparison is an exact string match.
#[must_use]
pub fn validate_confirm(value: &str, password: &str) -> Verdict {
    if value.is_empty() {
        return Verdict::error(constants::CONFIRM_REQUIRED);
    }
    if value != password {
        return Verdict::error(constants::CONFIRM_MISMATCH);
    }

    Verdict::success(constants::CONFIRM_OK)
}

fn is_rfc_lite_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || !local.chars().all(is_local_char) {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, rest)) = labels.split_last() else {
        return false;
    };
    // "a@b" has no dot and therefore no top-level label.
    if rest.is_empty() {
        return false;
    }
    if !rest.iter().all(|label| !label.is_empty() && label.chars().all(is_label_char)) {
        return false;
    }

    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-')
}

fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}
