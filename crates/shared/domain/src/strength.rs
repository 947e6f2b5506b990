use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Debug;
use strum_macros::Display;

bitflags! {
    /// The set of satisfied password strength checks.
    ///
    /// Each flag contributes exactly one point to the strength score.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct StrengthChecks: u8 {
        const LENGTH = 1 << 0;
        const UPPERCASE = 1 << 1;
        const LOWERCASE = 1 << 2;
        const DIGIT = 1 << 3;
        const SPECIAL = 1 << 4;

        const ALL = Self::LENGTH.bits()
            | Self::UPPERCASE.bits()
            | Self::LOWERCASE.bits()
            | Self::DIGIT.bits()
            | Self::SPECIAL.bits();
    }
}

impl StrengthChecks {
    /// Number of satisfied checks, 0..=5.
    #[must_use]
    pub fn score(self) -> u8 {
        u8::try_from(self.bits().count_ones()).unwrap_or(u8::MAX)
    }
}

impl Serialize for StrengthChecks {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for StrengthChecks {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}

/// Coarse password-quality bucket derived from the strength score.
///
/// Independent of the pass/fail validation verdict: a password can sit in the
/// `Fair` bucket and still fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StrengthTier {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthTier {
    /// Maps a 0..=5 score onto its bucket.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => Self::Weak,
            2 | 3 => Self::Fair,
            4 => Self::Good,
            _ => Self::Strong,
        }
    }
}

/// Outcome of scoring one password.
///
/// An empty password yields the unset report: no checks satisfied and no
/// tier. The tier is present for every non-empty password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthReport {
    pub checks: StrengthChecks,
    pub tier: Option<StrengthTier>,
}

impl StrengthReport {
    /// The report for an empty password: nothing to score yet.
    #[must_use]
    pub const fn unset() -> Self {
        Self { checks: StrengthChecks::empty(), tier: None }
    }

    /// Number of satisfied checks, 0..=5.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.checks.score()
    }

    /// True for the empty-password report.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        self.tier.is_none()
    }
}

impl Default for StrengthReport {
    fn default() -> Self {
        Self::unset()
    }
}
