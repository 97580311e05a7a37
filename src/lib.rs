#![cfg_attr(not(doc), no_std)]
#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::undocumented_unsafe_blocks,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    unused_doc_comments,
    unsafe_code
)]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Annotate errors with the function that reported them, a location label
//! and the arguments involved.
//!
//! ## Overview
//!
//! An annotated error reads like a small stack trace:
//!
//! ```text
//! app::config::load("cfg.toml").read: No such file or directory (os error 2)
//! ```
//!
//! It is made of the reporting function (`app::config::load`), the
//! arguments of this particular call (`("cfg.toml")`), a location label
//! naming the failing step (`read`), the shared arguments of the helper that
//! reported it (none here), a separator and finally the message of the
//! wrapped error. The wrapped error stays available as the
//! [`source`](core::error::Error::source) of the resulting [`StackError`].
//!
//! ## Quick Example
//!
//! ```
//! use stackerr::prelude::*;
//!
//! fn my_function(input: &str) -> Result<i64, StackError> {
//!     input.parse().map_err(|err| handle!(err, "atoi", input))
//! }
//!
//! let err = my_function("test").unwrap_err();
//! assert!(err.to_string().ends_with(
//!     r#"my_function.atoi("test"): invalid digit found in string"#
//! ));
//! ```
//!
//! ## Core Concepts
//!
//! - [`handle()`] annotates a single error using the default [`Style`].
//! - [`StackErr`] is a reusable helper holding **shared arguments** that are
//!   rendered by every annotation it makes, along with its own separator
//!   and punctuation. [`StackErr::copy`] gives a sibling helper with the
//!   same style and new shared arguments.
//! - [`compose()`] and [`render_arguments()`] are the pure building blocks
//!   behind both.
//! - The reporting function's name comes from a [`CallerNamer`]. The
//!   [`handle!`] macro supplies it at compile time via [`function_name!`];
//!   the `stackerr-backtrace` crate provides a namer that walks the stack.
//!   Lookups that fail render as `unknown`.
//!
//! [`CallerNamer`]: caller::CallerNamer
//!
//! ## Features
//!
//! - `std` (default): uses `std::sync` for the default-namer slot and enables
//!   `std` support in `tracing`. Without it the crate is `no_std` + `alloc`.

extern crate alloc;
#[cfg(all(feature = "std", not(doc)))]
extern crate std;

#[macro_use]
mod macros;

pub mod caller;
pub mod prelude;
pub mod style;

mod compose;
mod error;
mod handle;
mod namer_lock;
mod render;
mod result_ext;
mod stack_err;

pub use self::{
    compose::compose,
    error::{BoxError, Chain, StackError},
    handle::{handle, handle_named},
    render::render_arguments,
    result_ext::ResultExt,
    stack_err::StackErr,
    style::{DEFAULT_PUNCTUATION, DEFAULT_SEPARATOR, Style},
};

/// A [`Result`](core::result::Result) type alias where the error is
/// [`StackError`].
///
/// ```
/// fn might_fail() -> stackerr::Result<String> {
///     Ok("success".to_string())
/// }
/// ```
pub type Result<T, E = StackError> = core::result::Result<T, E>;

// Not public API. Referenced by macro-generated code.
#[doc(hidden)]
pub mod __private {
    #[doc(hidden)]
    #[must_use]
    pub fn strip_marker(path: &'static str) -> &'static str {
        let mut path = path.strip_suffix("::__stackerr_marker").unwrap_or(path);
        while let Some(outer) = path.strip_suffix("::{{closure}}") {
            path = outer;
        }
        path
    }

    #[cfg(test)]
    mod tests {
        use super::strip_marker;

        #[test]
        fn test_strip_marker() {
            assert_eq!(strip_marker("app::run::__stackerr_marker"), "app::run");
            assert_eq!(
                strip_marker("app::run::{{closure}}::{{closure}}::__stackerr_marker"),
                "app::run"
            );
            assert_eq!(strip_marker("plain"), "plain");
        }

        #[test]
        fn test_function_name_macro() {
            fn named() -> &'static str {
                crate::function_name!()
            }
            assert_eq!(named(), "stackerr::__private::tests::test_function_name_macro::named");

            let from_closure = || crate::function_name!();
            assert_eq!(from_closure(), "stackerr::__private::tests::test_function_name_macro");
        }
    }
}
