//! User-facing validation and submission messages.
//!
//! Messages are fixed English strings; internationalization is out of scope.

pub const NAME_REQUIRED: &str = "Full name is required";
pub const NAME_LETTERS_ONLY: &str = "Name cannot contain numbers or symbols";
pub const NAME_OK: &str = "Looks good!";

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const EMAIL_OK: &str = "Looks good!";

pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_OK: &str = "Strong password!";

pub const CONFIRM_REQUIRED: &str = "Please confirm your password";
pub const CONFIRM_MISMATCH: &str = "Passwords do not match";
pub const CONFIRM_OK: &str = "Passwords match!";

pub const SUBMIT_FIX_ERRORS: &str = "fix validation errors";
pub const SUBMIT_IN_FLIGHT: &str = "submission already in progress";
