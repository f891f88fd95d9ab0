//! The closed locale set the site serves and its reading-direction rules.
//!
//! Every request resolves to exactly one [`Locale`] before any content is
//! fetched or rendered; the locale is never changed mid-render. Text
//! direction is a pure function of the locale code, so there is no separate
//! direction configuration anywhere else in the system.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A language the site is published in.
///
/// The set is closed: anything other than `en` or `ar` fails to parse and
/// the request that carried it is answered with a not-found page, never a
/// silent fallback to a default language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ar,
}

/// Reading direction derived from a [`Locale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

/// The locale used when no prefix is present (the root redirect target).
pub const DEFAULT_LOCALE: Locale = Locale::En;

/// All supported locales, in display order for the language toggle.
pub const LOCALES: [Locale; 2] = [Locale::En, Locale::Ar];

/// Returned when a path or parameter carries a locale outside the
/// supported set.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported locale: {0}")]
pub struct UnsupportedLocale(pub String);

impl Locale {
    /// ISO 639-1 code, also used as the URL prefix and the value sent in
    /// locale request headers.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// Text direction for this locale.
    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            Locale::En => Direction::Ltr,
            Locale::Ar => Direction::Rtl,
        }
    }

    /// Native-script human label, shown in the language toggle.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ar => "العربية",
        }
    }

    /// The other supported locale; the language toggle links to it.
    #[must_use]
    pub fn other(self) -> Locale {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }
}

impl Direction {
    /// Value for the HTML `dir` attribute.
    #[must_use]
    pub fn attr(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    #[must_use]
    pub fn is_rtl(self) -> bool {
        matches!(self, Direction::Rtl)
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "ar" => Ok(Locale::Ar),
            other => Err(UnsupportedLocale(other.to_string())),
        }
    }
}

/// Rewrites the locale prefix of `path` so the language toggle lands on the
/// same logical page under `target`.
///
/// `/en/products/mq-fiber-3015` becomes `/ar/products/mq-fiber-3015`; a
/// bare `/en` or `/` becomes the target's home. Query strings are the
/// caller's concern; this operates on the path only.
#[must_use]
pub fn switch_locale_path(path: &str, target: Locale) -> String {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let (head, rest) = match trimmed.split_once('/') {
        Some((head, rest)) => (head, Some(rest)),
        None => (trimmed, None),
    };

    let tail = if head.parse::<Locale>().is_ok() {
        rest
    } else {
        Some(trimmed)
    };

    match tail {
        Some(rest) if !rest.is_empty() => format!("/{}/{rest}", target.code()),
        _ => format!("/{}/", target.code()),
    }
}
