//! Password strength scoring.
//!
//! Each aspect of the password (length, character variety) is checked
//! separately; every satisfied check contributes exactly one point and the
//! total maps onto a [`StrengthTier`]. An empty password is not scored at
//! all and yields the unset report.

use fgate_domain::config::ValidationPolicy;
use fgate_domain::strength::{StrengthChecks, StrengthReport, StrengthTier};

/// Runs the five strength checks against a password.
///
/// This is also the rule set `validate_password` gates on: a password passes
/// validation iff every check is satisfied.
#[must_use]
pub fn run_checks(policy: &ValidationPolicy, password: &str) -> StrengthChecks {
    let mut checks = StrengthChecks::empty();

    if password.chars().count() >= policy.min_password_len {
        checks |= StrengthChecks::LENGTH;
    }
    if password.chars().any(char::is_uppercase) {
        checks |= StrengthChecks::UPPERCASE;
    }
    if password.chars().any(char::is_lowercase) {
        checks |= StrengthChecks::LOWERCASE;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        checks |= StrengthChecks::DIGIT;
    }
    if password.chars().any(|c| policy.special_chars.contains(c)) {
        checks |= StrengthChecks::SPECIAL;
    }

    checks
}

/// Scores a password for the strength meter.
///
/// Empty input yields [`StrengthReport::unset`]; any other input carries a
/// tier derived from the number of satisfied checks.
#[must_use]
pub fn score_strength(policy: &ValidationPolicy, password: &str) -> StrengthReport {
    if password.is_empty() {
        return StrengthReport::unset();
    }

    let checks = run_checks(policy, password);
    StrengthReport { checks, tier: Some(StrengthTier::from_score(checks.score())) }
}
