//! Contact-form submission model and pre-submit validation.
//!
//! Validation runs before any network call and reports every failing field
//! at once, so the form can show all inline errors in a single pass.
//! Length rules count characters, not bytes; an Arabic name of two letters
//! is as valid as an English one.

use regex::Regex;
use serde::{Deserialize, Serialize};

pub const NAME_MIN_CHARS: usize = 2;
pub const PHONE_MIN_CHARS: usize = 10;
pub const MESSAGE_MIN_CHARS: usize = 10;

/// The four fields a visitor submits from the contact page. Serialized
/// as-is into the JSON body of the outbound submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Why a single field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    TooShort { min: usize },
    InvalidFormat,
}

/// Per-field validation outcome; `None` means the field passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationReport {
    pub name: Option<FieldIssue>,
    pub email: Option<FieldIssue>,
    pub phone: Option<FieldIssue>,
    pub message: Option<FieldIssue>,
}

impl ValidationReport {
    /// True when every field passed and the submission may be sent.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.message.is_none()
    }
}

impl ContactSubmission {
    /// Copy of the submission with surrounding whitespace stripped from
    /// every field. This is the form that gets validated and submitted.
    #[must_use]
    pub fn trimmed(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// Checks every field and reports all failures together.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        let email_re =
            Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex");

        let mut report = ValidationReport::default();

        if self.name.trim().chars().count() < NAME_MIN_CHARS {
            report.name = Some(FieldIssue::TooShort {
                min: NAME_MIN_CHARS,
            });
        }
        if !email_re.is_match(self.email.trim()) {
            report.email = Some(FieldIssue::InvalidFormat);
        }
        if self.phone.trim().chars().count() < PHONE_MIN_CHARS {
            report.phone = Some(FieldIssue::TooShort {
                min: PHONE_MIN_CHARS,
            });
        }
        if self.message.trim().chars().count() < MESSAGE_MIN_CHARS {
            report.message = Some(FieldIssue::TooShort {
                min: MESSAGE_MIN_CHARS,
            });
        }

        report
    }
}
