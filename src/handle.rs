use crate::{
    caller,
    compose::compose,
    error::{BoxError, StackError},
    style::{DEFAULT_PUNCTUATION, DEFAULT_SEPARATOR},
};

const NO_INVOKED_ARGUMENTS: &[&str] = &[];

/// Annotates `err` with the calling function, `location` and `arguments`,
/// using the default [`Style`](crate::Style).
///
/// The arguments are rendered after the location, exactly like the shared
/// arguments of a throwaway [`StackErr`](crate::StackErr) created for this
/// single call. The caller is resolved through the default namer (see
/// [`caller`](crate::caller)); prefer the [`handle!`](crate::handle!) macro
/// to record the enclosing function without any stack inspection.
///
/// ```
/// use stackerr::caller::{CallerName, replace_default_namer};
///
/// replace_default_namer(Some(CallerName("F")));
///
/// let err = stackerr::handle("test", "atoi", &["42"]);
/// assert_eq!(err.to_string(), r#"F.atoi("42"): test"#);
/// ```
pub fn handle(err: impl Into<BoxError>, location: &str, arguments: &[&str]) -> StackError {
    let caller = caller::resolve(None);
    handle_named(&caller, err, location, arguments)
}

/// Like [`handle`], but with an explicitly supplied caller name.
///
/// ```
/// let err = stackerr::handle_named("H", "e", "loc", &[]);
/// assert_eq!(err.to_string(), "H.loc: e");
/// ```
pub fn handle_named(
    caller: &str,
    err: impl Into<BoxError>,
    location: &str,
    arguments: &[&str],
) -> StackError {
    compose(
        caller,
        err,
        location,
        arguments,
        NO_INVOKED_ARGUMENTS,
        DEFAULT_PUNCTUATION,
        DEFAULT_SEPARATOR,
    )
}
