//! The reusable annotation helper.

use alloc::{borrow::ToOwned, string::String, sync::Arc, vec::Vec};
use core::fmt;

use crate::{
    caller::{self, CallerNamer},
    compose::compose,
    error::{BoxError, StackError},
    style::Style,
};

/// A reusable annotation helper carrying shared arguments and a [`Style`].
///
/// A `StackErr` is typically created once per scope, for example at the top
/// of a function whose inputs should appear in every error it reports. Every
/// [`handle`](Self::handle) call renders those shared arguments after the
/// location, while the arguments passed to the call itself are rendered
/// right after the caller's name.
///
/// ```
/// use stackerr::{StackErr, caller::CallerName};
///
/// fn load(path: &str) -> Result<String, stackerr::StackError> {
///     let helper = StackErr::new(&[path]).with_namer(CallerName("app::load"));
///     let raw = std::fs::read_to_string(path).map_err(|err| helper.handle(err, "read", &[]))?;
///     raw.lines()
///         .next()
///         .map(str::to_owned)
///         .ok_or_else(|| helper.handle("file is empty", "first_line", &[]))
/// }
///
/// let err = load("/nonexistent/stackerr.toml").unwrap_err();
/// assert!(err.to_string().starts_with(r#"app::load.read("/nonexistent/stackerr.toml"): "#));
/// ```
///
/// The shared arguments are fixed once the helper exists. [`copy`](Self::copy)
/// produces a sibling with the same style and namer but fresh arguments,
/// leaving the original untouched.
#[derive(Clone)]
pub struct StackErr {
    arguments: Vec<String>,
    namer: Option<Arc<dyn CallerNamer>>,
    /// Inserted between the annotation and the wrapped error's message.
    pub separator: String,
    /// Placed before and after every rendered argument.
    pub punctuation: String,
}

impl StackErr {
    /// Creates a helper with the given shared arguments and the default
    /// [`Style`].
    ///
    /// ```
    /// let helper = stackerr::StackErr::new(&["some", "arguments"]);
    /// assert_eq!(helper.arguments(), ["some", "arguments"]);
    /// assert_eq!(helper.separator, ": ");
    /// assert_eq!(helper.punctuation, "\"");
    /// ```
    #[must_use]
    pub fn new(arguments: &[&str]) -> Self {
        Self::with_style(Style::DEFAULT, arguments)
    }

    /// Creates a helper with the given style and shared arguments.
    #[must_use]
    pub fn with_style(style: Style, arguments: &[&str]) -> Self {
        Self {
            arguments: to_owned_arguments(arguments),
            namer: None,
            separator: style.separator.into_owned(),
            punctuation: style.punctuation.into_owned(),
        }
    }

    /// Uses `namer` to resolve the caller of [`handle`](Self::handle) instead
    /// of the process-wide default namer.
    #[must_use]
    pub fn with_namer<N: CallerNamer>(mut self, namer: N) -> Self {
        self.namer = Some(Arc::new(namer));
        self
    }

    /// The shared arguments rendered by every annotation.
    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// The current separator and punctuation as a [`Style`].
    #[must_use]
    pub fn style(&self) -> Style {
        Style::new(self.separator.clone(), self.punctuation.clone())
    }

    /// Annotates `err` with the calling function, `location`, the call's
    /// `arguments` and the shared arguments of this helper.
    ///
    /// The caller is resolved through this helper's namer, or through the
    /// default namer if none was set. See [`caller`](crate::caller).
    ///
    /// ```
    /// use stackerr::{StackErr, caller::CallerName};
    ///
    /// let helper = StackErr::new(&["x"]).with_namer(CallerName("G"));
    /// let err = helper.handle("boom", "step", &["y"]);
    /// assert_eq!(err.to_string(), r#"G("y").step("x"): boom"#);
    /// ```
    pub fn handle(&self, err: impl Into<BoxError>, location: &str, arguments: &[&str]) -> StackError {
        let caller = caller::resolve(self.namer.as_deref());
        self.handle_named(&caller, err, location, arguments)
    }

    /// Like [`handle`](Self::handle), but with an explicitly supplied caller
    /// name. The [`handle!`](crate::handle!) macro uses this with
    /// [`function_name!`](crate::function_name).
    pub fn handle_named(
        &self,
        caller: &str,
        err: impl Into<BoxError>,
        location: &str,
        arguments: &[&str],
    ) -> StackError {
        compose(
            caller,
            err,
            location,
            &self.arguments,
            arguments,
            &self.punctuation,
            &self.separator,
        )
    }

    /// Returns a new helper with the same separator, punctuation and namer,
    /// whose shared arguments are replaced by `arguments`.
    ///
    /// ```
    /// let mut parent = stackerr::StackErr::new(&["a"]);
    /// parent.separator = " -> ".into();
    ///
    /// let child = parent.copy(&["b", "c"]);
    /// assert_eq!(child.arguments(), ["b", "c"]);
    /// assert_eq!(child.separator, " -> ");
    /// assert_eq!(parent.arguments(), ["a"]);
    /// ```
    #[must_use]
    pub fn copy(&self, arguments: &[&str]) -> Self {
        Self {
            arguments: to_owned_arguments(arguments),
            namer: self.namer.clone(),
            separator: self.separator.clone(),
            punctuation: self.punctuation.clone(),
        }
    }
}

impl Default for StackErr {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl fmt::Debug for StackErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackErr")
            .field("arguments", &self.arguments)
            .field("separator", &self.separator)
            .field("punctuation", &self.punctuation)
            .field("has_namer", &self.namer.is_some())
            .finish()
    }
}

fn to_owned_arguments(arguments: &[&str]) -> Vec<String> {
    arguments.iter().map(|&arg| arg.to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use core::error::Error;

    use super::*;
    use crate::caller::{CallerName, UnknownCaller};

    #[test]
    fn test_new_uses_default_style() {
        let helper = StackErr::new(&["some", "arguments"]);
        assert_eq!(helper.arguments(), ["some", "arguments"]);
        assert_eq!(helper.separator, ": ");
        assert_eq!(helper.punctuation, "\"");
        assert_eq!(helper.style(), Style::DEFAULT);
    }

    #[test]
    fn test_handle_renders_invoked_then_shared() {
        let helper = StackErr::new(&["x"]).with_namer(CallerName("G"));
        let err = helper.handle("boom", "step", &["y"]);
        assert_eq!(err.to_string(), "G(\"y\").step(\"x\"): boom");
    }

    #[test]
    fn test_handle_with_many_invoked_arguments() {
        let helper = StackErr::default().with_namer(CallerName("pkg::test_fn"));
        let err = helper.handle("test", "test", &["some", "arguments"]);
        assert_eq!(
            err.to_string(),
            "pkg::test_fn(\"some\", \"arguments\").test: test"
        );
    }

    #[test]
    fn test_punctuation_field_is_used() {
        let mut helper = StackErr::new(&["a"]).with_namer(CallerName("f"));
        helper.punctuation = "foo".into();
        helper.separator = String::new();
        let err = helper.handle("test", "test", &[]);
        assert_eq!(err.to_string(), "f.test(fooafoo)test");
    }

    #[test]
    fn test_separator_field_is_used() {
        let mut helper = StackErr::new(&[]).with_namer(CallerName("f"));
        helper.separator = "foo".into();
        let err = helper.handle("test", "test", &[]);
        assert_eq!(err.to_string(), "f.testfootest");
    }

    #[test]
    fn test_unknown_caller_placeholder() {
        let helper = StackErr::new(&[]).with_namer(UnknownCaller);
        assert_eq!(helper.handle("e", "loc", &[]).to_string(), "unknown.loc: e");
    }

    #[test]
    fn test_handle_keeps_source() {
        let helper = StackErr::new(&[]).with_namer(CallerName("f"));
        let err = helper.handle("inner", "loc", &[]);
        assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("inner"));
    }

    #[test]
    fn test_handle_named_overrides_namer() {
        let helper = StackErr::new(&["s"]).with_namer(CallerName("ignored"));
        let err = helper.handle_named("explicit", "e", "loc", &["i"]);
        assert_eq!(err.to_string(), "explicit(\"i\").loc(\"s\"): e");
    }

    #[test]
    fn test_copy_replaces_arguments_and_keeps_style() {
        let mut original = StackErr::new(&["some", "arguments"]).with_namer(CallerName("f"));
        original.punctuation = "foo".into();
        original.separator = "bar".into();

        let copy = original.copy(&["fizz", "buzz"]);

        assert_eq!(copy.arguments(), ["fizz", "buzz"]);
        assert_eq!(copy.punctuation, "foo");
        assert_eq!(copy.separator, "bar");
        assert_eq!(original.arguments(), ["some", "arguments"]);
        assert_eq!(original.punctuation, "foo");
        assert_eq!(original.separator, "bar");

        assert_eq!(
            copy.handle("e", "l", &[]).to_string(),
            "f.l(foofizzfoo, foobuzzfoo)bare"
        );
    }

    #[test]
    fn test_copy_does_not_share_state() {
        let original = StackErr::new(&["a"]);
        let mut copy = original.copy(&[]);
        copy.separator.push('!');
        assert!(copy.arguments().is_empty());
        assert_eq!(original.separator, ": ");
        assert_eq!(original.arguments(), ["a"]);
    }

    #[test]
    fn test_stack_err_send_sync_clone() {
        static_assertions::assert_impl_all!(StackErr: Send, Sync, Clone, Default);
    }
}
