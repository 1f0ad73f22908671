//! Email validation and the validated email entity.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use validator::ValidateEmail;

/// Reason reported for an empty or whitespace-only candidate.
pub const EMAIL_REQUIRED: &str = "Email is required.";

/// Reason reported for a candidate that is not an email address.
pub const INVALID_EMAIL: &str = "Invalid email.";

/// Overall shape: `local@domain.tld` with no whitespace and a dot in the domain.
///
/// Unanchored so it can also be used as an HTML `pattern` attribute, which
/// browsers anchor implicitly.
pub const EMAIL_SHAPE_PATTERN: &str = r"[^\s@]+@[^\s@]+\.[^\s@]+";

static EMAIL_SHAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{EMAIL_SHAPE_PATTERN}$")).unwrap());

/// An email address that passed [`validate`].
///
/// The wrapped text is exactly what the caller submitted. No case folding or
/// trimming is applied, so `A@x.com` and `a@x.com` are distinct subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEmail(String);

impl ValidatedEmail {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ValidatedEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidatedEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why a candidate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmailRejection {
    #[error("{}", EMAIL_REQUIRED)]
    Required,

    #[error("{}", INVALID_EMAIL)]
    Invalid,
}

impl EmailRejection {
    /// User-facing reason string.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Required => EMAIL_REQUIRED,
            Self::Invalid => INVALID_EMAIL,
        }
    }
}

/// Checks a raw candidate string against the email rule.
///
/// # Rules
///
/// 1. Empty or whitespace-only input is rejected as [`EmailRejection::Required`]
/// 2. Input must have the `local@domain.tld` shape with no embedded whitespace
/// 3. Input must pass the HTML5 email grammar check from `validator`
///
/// Pure and deterministic. The same function backs the pre-submit check
/// (`POST /api/validate`, called by the capture page) and the check inside
/// [`crate::application::services::SubscriptionService::subscribe`], so the two
/// never disagree.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate("a@x.com").unwrap().as_str(), "a@x.com");
/// assert_eq!(validate("   "), Err(EmailRejection::Required));
/// assert_eq!(validate("not-an-email"), Err(EmailRejection::Invalid));
/// ```
pub fn validate(candidate: &str) -> Result<ValidatedEmail, EmailRejection> {
    if candidate.trim().is_empty() {
        return Err(EmailRejection::Required);
    }

    if !EMAIL_SHAPE_REGEX.is_match(candidate) || !candidate.validate_email() {
        return Err(EmailRejection::Invalid);
    }

    Ok(ValidatedEmail(candidate.to_string()))
}
