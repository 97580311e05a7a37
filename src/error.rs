//! The annotated error type.

use alloc::{boxed::Box, string::String};
use core::{error::Error, fmt};

/// A boxed, thread-safe error. Anything convertible into it can be annotated,
/// including plain `&str` and `String` messages.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// An error annotated with the reporting function, a location label and
/// arguments.
///
/// The [`Display`] output is the annotation, the separator and then the
/// wrapped error's own message. [`Error::source`] returns the wrapped error,
/// so annotating an already annotated error builds a chain that can be
/// walked with [`chain`](Self::chain).
///
/// ```
/// let inner = stackerr::handle_named("parse", "not a number", "atoi", &["x"]);
/// let outer = stackerr::handle_named("load", inner, "config", &[]);
///
/// assert_eq!(
///     outer.to_string(),
///     r#"load.config: parse.atoi("x"): not a number"#
/// );
/// assert_eq!(outer.chain().count(), 3);
/// assert_eq!(outer.root_cause().to_string(), "not a number");
/// ```
///
/// [`Display`]: core::fmt::Display
pub struct StackError {
    context: String,
    separator: String,
    source: BoxError,
}

impl StackError {
    pub(crate) fn new(context: String, separator: String, source: BoxError) -> Self {
        Self {
            context,
            separator,
            source,
        }
    }

    /// The annotation without the separator and the wrapped message, e.g.
    /// `app::load.read("cfg.toml")`.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// The separator placed between the annotation and the wrapped message.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// The wrapped error.
    #[must_use]
    pub fn get_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.source
    }

    /// Consumes the annotation and returns the wrapped error.
    #[must_use]
    pub fn into_inner(self) -> BoxError {
        self.source
    }

    /// Iterates over this error followed by every error in its source chain.
    pub fn chain(&self) -> Chain<'_> {
        Chain {
            next: Some(self),
        }
    }

    /// The innermost error of the source chain.
    #[must_use]
    pub fn root_cause(&self) -> &(dyn Error + 'static) {
        let mut root: &(dyn Error + 'static) = self;
        while let Some(source) = root.source() {
            root = source;
        }
        root
    }

    /// Finds the first error of type `T` in the source chain, not counting
    /// `self`.
    ///
    /// ```
    /// let parse_err = "x".parse::<u8>().unwrap_err();
    /// let err = stackerr::handle_named("main", parse_err, "parse", &[]);
    ///
    /// assert!(err.find_source::<core::num::ParseIntError>().is_some());
    /// assert!(err.find_source::<core::fmt::Error>().is_none());
    /// ```
    #[must_use]
    pub fn find_source<T: Error + 'static>(&self) -> Option<&T> {
        self.chain().skip(1).find_map(|err| err.downcast_ref::<T>())
    }
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.context, self.separator, self.source)
    }
}

impl fmt::Debug for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackError")
            .field("context", &self.context)
            .field("separator", &self.separator)
            .field("source", &self.source)
            .finish()
    }
}

impl Error for StackError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.source)
    }
}

/// Iterator over an error and its sources, returned by
/// [`StackError::chain`].
#[derive(Clone, Debug)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec::Vec};

    use super::*;

    #[derive(Debug)]
    struct DiskFull;

    impl fmt::Display for DiskFull {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("disk full")
        }
    }

    impl Error for DiskFull {}

    fn annotated() -> StackError {
        StackError::new("app::save.write".into(), ": ".into(), Box::new(DiskFull))
    }

    #[test]
    fn test_display_concatenates_parts() {
        assert_eq!(annotated().to_string(), "app::save.write: disk full");
    }

    #[test]
    fn test_source_is_wrapped_error() {
        let err = annotated();
        assert!(err.source().is_some_and(|source| source.is::<DiskFull>()));
        assert!(err.get_ref().is::<DiskFull>());
        assert!(err.into_inner().downcast::<DiskFull>().is_ok());
    }

    #[test]
    fn test_chain_and_root_cause() {
        let outer = StackError::new("app::run.save".into(), " | ".into(), Box::new(annotated()));
        let messages: Vec<_> = outer.chain().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            [
                "app::run.save | app::save.write: disk full",
                "app::save.write: disk full",
                "disk full",
            ]
        );
        assert!(outer.root_cause().is::<DiskFull>());
        assert!(outer.find_source::<DiskFull>().is_some());
        assert_eq!(
            outer.find_source::<StackError>().map(StackError::context),
            Some("app::save.write")
        );
    }

    #[test]
    fn test_stack_error_is_send_sync() {
        static_assertions::assert_impl_all!(StackError: Send, Sync, Error);
        static_assertions::assert_not_impl_any!(StackError: Clone);
    }
}
