//! # Field Validation
//!
//! This crate provides the pure validation core of the form engine: one
//! validator per field plus the password strength scorer.
//!
//! ## Architecture
//!
//! 1. **Validators ([`validators`]):** map a raw field value (and, for the
//!    confirm field, the sibling password) to a [`fgate_domain::verdict::Verdict`].
//!    Checks run in a fixed order and short-circuit on the first failure, so
//!    a single message is produced per call.
//! 2. **Strength scoring ([`strength`]):** counts satisfied password checks
//!    and buckets the score into a coarse tier. Scoring is a separate signal
//!    from validation; the two are rendered independently.
//!
//! Everything here is a pure function: no side effects, no I/O, and no error
//! type. A failed validation is a normal verdict, not an error condition.

pub mod strength;
pub mod validators;
