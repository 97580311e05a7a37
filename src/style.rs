//! Punctuation and separator configuration.
//!
//! A [`Style`] controls the two pieces of fixed text that [`compose`] weaves
//! into an annotated error:
//!
//! - the **punctuation** that quotes every rendered argument, and
//! - the **separator** placed between the annotation and the wrapped error's
//!   message.
//!
//! ```
//! use stackerr::{StackErr, Style};
//!
//! let helper = StackErr::with_style(
//!     Style {
//!         separator: " -> ".into(),
//!         punctuation: "'".into(),
//!     },
//!     &["id"],
//! );
//! let err = helper.handle_named("load", "missing", "read", &[]);
//! assert_eq!(err.to_string(), "load.read('id') -> missing");
//! ```
//!
//! [`compose`]: crate::compose

use alloc::{borrow::Cow, string::String};

/// Separator used when no [`Style`] is given: `": "`.
pub const DEFAULT_SEPARATOR: &str = ": ";

/// Punctuation used when no [`Style`] is given: `"\""`.
pub const DEFAULT_PUNCTUATION: &str = "\"";

/// The configurable text used when composing an annotated error.
///
/// Values are accepted as-is; empty strings are valid for both fields.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Style {
    /// Inserted between the annotation and the wrapped error's message.
    pub separator: Cow<'static, str>,
    /// Placed before and after every rendered argument.
    pub punctuation: Cow<'static, str>,
}

impl Style {
    /// The default style: `": "` as separator and `"\""` as punctuation.
    pub const DEFAULT: Self = Self {
        separator: Cow::Borrowed(DEFAULT_SEPARATOR),
        punctuation: Cow::Borrowed(DEFAULT_PUNCTUATION),
    };

    /// Creates a style from owned or borrowed strings.
    pub fn new(separator: impl Into<String>, punctuation: impl Into<String>) -> Self {
        Self {
            separator: Cow::Owned(separator.into()),
            punctuation: Cow::Owned(punctuation.into()),
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::DEFAULT
    }
}
