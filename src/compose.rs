use alloc::string::String;

use crate::{error::BoxError, error::StackError, render::render_arguments};

/// Wraps `err` in a [`StackError`] annotated with the caller, the location and
/// both argument lists.
///
/// The resulting message is, in order: `caller`, the rendered `invoked`
/// arguments, `.`, `location`, the rendered `shared` arguments, `separator`,
/// and finally the message of `err`. The source of the returned error is
/// exactly `err`.
///
/// This is the building block behind [`StackErr::handle`] and [`handle`];
/// the caller name is resolved by them before composing.
///
/// ```
/// let err = stackerr::compose("app::main", "boom", "step", &["x"], &["y"], "\"", ": ");
/// assert_eq!(err.to_string(), r#"app::main("y").step("x"): boom"#);
/// ```
///
/// [`StackErr::handle`]: crate::StackErr::handle
/// [`handle`]: crate::handle()
#[must_use]
pub fn compose<S, I>(
    caller: &str,
    err: impl Into<BoxError>,
    location: &str,
    shared: &[S],
    invoked: &[I],
    punctuation: &str,
    separator: &str,
) -> StackError
where
    S: AsRef<str>,
    I: AsRef<str>,
{
    let invoked = render_arguments(invoked, punctuation);
    let shared = render_arguments(shared, punctuation);

    let mut context =
        String::with_capacity(caller.len() + invoked.len() + 1 + location.len() + shared.len());
    context.push_str(caller);
    context.push_str(&invoked);
    context.push('.');
    context.push_str(location);
    context.push_str(&shared);

    tracing::trace!(context = %context, "annotated error");

    StackError::new(context, separator.into(), err.into())
}
