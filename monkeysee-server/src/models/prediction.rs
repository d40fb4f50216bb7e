//! Prediction field validation
//!
//! Field rules: content is length-bounded and whitespace-normalized,
//! author names are trimmed, elo is range-checked, status comes from a
//! closed set. Validation happens at construction; records read back from
//! the database carry plain types.

use std::fmt;

use super::ValidationError;

/// Maximum length for prediction content, checked on the raw input.
const MAX_CONTENT_LEN: usize = 600;

/// Lower bound for elo scores (inclusive).
const ELO_MIN: i64 = 0;

/// Upper bound for elo scores (inclusive).
const ELO_MAX: i64 = 5000;

/// Default elo assigned when a creation payload omits it.
const ELO_DEFAULT: i64 = 800;

/// Placeholder written over author names in list/get responses.
/// Redaction is response shaping only; the stored value is untouched.
pub const REDACTED_AUTHOR: &str = "(REDACTED)";

/// Validated and normalized prediction content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionContent(String);

impl PredictionContent {
    /// Create prediction content, enforcing the length bound and
    /// collapsing internal whitespace runs to single spaces.
    ///
    /// The length bound applies to the raw input, before normalization.
    ///
    /// # Example
    /// ```
    /// use monkeysee_server::models::PredictionContent;
    ///
    /// let c = PredictionContent::new("  the  moon\twill  be colonized ").unwrap();
    /// assert_eq!(c.as_str(), "the moon will be colonized");
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.chars().count() > MAX_CONTENT_LEN {
            return Err(ValidationError::TooLong {
                field: "content",
                max: MAX_CONTENT_LEN,
            });
        }

        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Author display name, trimmed of surrounding whitespace.
///
/// No identity verification happens here; the value is whatever the
/// client sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorName(String);

impl AuthorName {
    pub fn new(s: &str) -> Self {
        Self(s.trim().to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Elo score in [0, 5000]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Elo(i64);

impl Elo {
    /// Create an elo score, rejecting values outside [0, 5000].
    /// Both bounds are accepted.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if !(ELO_MIN..=ELO_MAX).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: "elo",
                min: ELO_MIN,
                max: ELO_MAX,
                value,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl Default for Elo {
    fn default() -> Self {
        Self(ELO_DEFAULT)
    }
}

/// Prediction lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PredictionStatus {
    #[default]
    Open,
    Resolved,
    Archived,
}

impl PredictionStatus {
    /// Parse a status string, rejecting anything outside the closed set.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s {
            "open" => Ok(Self::Open),
            "resolved" => Ok(Self::Resolved),
            "archived" => Ok(Self::Archived),
            other => Err(ValidationError::InvalidVariant {
                field: "status",
                value: other.to_owned(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Resolved => "resolved",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for PredictionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
