/// Expands to the fully qualified path of the enclosing function, as a
/// `&'static str`.
///
/// The path is resolved at compile time, so it does not depend on inlining,
/// debug symbols or how deeply the call is nested. Inside a closure the
/// result names the function that defines the closure.
///
/// # Examples
///
/// ```
/// mod jobs {
///     pub fn run() -> &'static str {
///         stackerr::function_name!()
///     }
/// }
///
/// assert!(jobs::run().ends_with("jobs::run"));
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __stackerr_marker() {}
        $crate::__private::strip_marker(::core::any::type_name_of_val(&__stackerr_marker))
    }};
}

/// Annotates an error with the enclosing function's name, a location label
/// and arguments.
///
/// The caller name comes from [`function_name!`], so no stack inspection or
/// namer is involved. Arguments can be anything implementing `AsRef<str>`.
///
/// - `handle!(err, "location", args...)` uses the default style, like the
///   [`handle`](crate::handle()) function.
/// - `handle!(helper => err, "location", args...)` uses the shared arguments
///   and style of a [`StackErr`](crate::StackErr).
///
/// # Examples
///
/// ```
/// use stackerr::{StackErr, StackError, handle};
///
/// fn parse(input: &str) -> Result<u32, StackError> {
///     input.parse().map_err(|err| handle!(err, "atoi", input))
/// }
///
/// let err = parse("test").unwrap_err();
/// assert!(err.to_string().ends_with(
///     r#"parse.atoi("test"): invalid digit found in string"#
/// ));
///
/// fn scale(factor: &str) -> Result<u32, StackError> {
///     let helper = StackErr::new(&[factor]);
///     let value: u32 = factor.parse().map_err(|err| handle!(helper => err, "parse"))?;
///     value
///         .checked_mul(1000)
///         .ok_or_else(|| handle!(helper => "overflow", "multiply", value.to_string()))
/// }
///
/// let err = scale("9999999").unwrap_err();
/// assert!(err.to_string().ends_with(r#"scale("9999999").multiply("9999999"): overflow"#));
/// ```
#[macro_export]
macro_rules! handle {
    ($helper:expr => $err:expr, $location:expr $(, $arg:expr)* $(,)?) => {
        $crate::StackErr::handle_named(
            &$helper,
            $crate::function_name!(),
            $err,
            $location,
            &[$(::core::convert::AsRef::<str>::as_ref(&$arg)),*],
        )
    };
    ($err:expr, $location:expr $(, $arg:expr)* $(,)?) => {
        $crate::handle_named(
            $crate::function_name!(),
            $err,
            $location,
            &[$(::core::convert::AsRef::<str>::as_ref(&$arg)),*],
        )
    };
}
