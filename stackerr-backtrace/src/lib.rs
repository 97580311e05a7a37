#![deny(
    missing_docs,
    unsafe_code,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]

//! Stack-walking caller names for stackerr annotations.
//!
//! [`BacktraceNamer`] implements [`CallerNamer`] by capturing the current
//! stack with the [`backtrace`] crate and reporting the first frame that does
//! not belong to stackerr itself, its stack-walking machinery or the
//! standard library. No frame depth is hard-coded, so the number of internal
//! calls between the public entry point and the lookup does not matter.
//!
//! Names come from the symbols of the running binary and are best-effort;
//! see [Debugging symbols in release builds](#debugging-symbols-in-release-builds).
//! For an exact name, use `stackerr::handle!`, which records the enclosing
//! function at compile time.
//!
//! # Quick Start
//!
//! ## As the default namer
//!
//! ```rust
//! use stackerr_backtrace::BacktraceNamer;
//!
//! BacktraceNamer::DEFAULT
//!     .install()
//!     .expect("failed to install namer");
//!
//! fn load() -> stackerr::StackError {
//!     stackerr::handle("not found", "read", &["cfg.toml"])
//! }
//! // e.g. `rust_out::main::load.read("cfg.toml"): not found`
//! println!("{}", load());
//! ```
//!
//! ## For a single helper
//!
//! ```rust
//! use stackerr::StackErr;
//! use stackerr_backtrace::BacktraceNamer;
//!
//! let helper = StackErr::new(&["job-42"]).with_namer(BacktraceNamer::DEFAULT);
//! let err = helper.handle("timed out", "poll", &[]);
//! assert!(err.to_string().ends_with(r#".poll("job-42"): timed out"#));
//! ```
//!
//! # Wrapping stackerr
//!
//! Frames are skipped by the leading path of their symbol. A crate that wraps
//! stackerr in its own helpers adds its module path so the wrapper's frames
//! are skipped too:
//!
//! ```rust
//! use stackerr_backtrace::BacktraceNamer;
//!
//! let namer = BacktraceNamer {
//!     skipped_prefixes: &[
//!         "backtrace",
//!         "stackerr",
//!         "stackerr_backtrace",
//!         "core",
//!         "std",
//!         "alloc",
//!         "my_app::errors",
//!     ],
//! };
//! ```
//!
//! # Debugging symbols in release builds
//!
//! Names are only as good as the symbols in the binary. Keep symbols in
//! release builds when annotations are relied upon:
//!
//! ```toml
//! [profile.release]
//! strip = false
//! debug = "line-tables-only"
//! ```
//!
//! Functions inlined into their caller are still reported, since the
//! resolver expands inlined frames.
//!
//! Optimized builds may also merge functions whose machine code is identical
//! into a single symbol. A caller whose body was merged with another function
//! is reported under that function's name.

use std::borrow::Cow;

use stackerr::caller::{CallerNamer, NamerAlreadyInstalledError, install_default_namer};

/// A [`CallerNamer`] that walks the live stack.
///
/// # Examples
///
/// ```rust
/// use stackerr::caller::CallerNamer;
/// use stackerr_backtrace::BacktraceNamer;
///
/// fn whoami() -> Option<String> {
///     BacktraceNamer::DEFAULT.caller_name().map(Into::into)
/// }
///
/// if let Some(name) = whoami() {
///     assert!(name.ends_with("whoami"));
/// }
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BacktraceNamer {
    /// Module paths whose frames are skipped before the caller is found. A
    /// prefix matches a symbol equal to it or starting with it followed by
    /// `::`.
    pub skipped_prefixes: &'static [&'static str],
}

impl BacktraceNamer {
    /// Skips frames of the `backtrace` crate, stackerr, this crate and the
    /// standard library.
    pub const DEFAULT: Self = Self {
        skipped_prefixes: &[
            "backtrace",
            "stackerr",
            "stackerr_backtrace",
            "core",
            "std",
            "alloc",
        ],
    };

    /// Installs this namer as stackerr's process-wide default namer.
    pub fn install(self) -> Result<(), NamerAlreadyInstalledError> {
        install_default_namer(self)
    }

    /// Returns the first symbol on the current stack that is not skipped.
    #[inline(never)]
    fn find_caller(&self) -> Option<String> {
        let mut found: Option<String> = None;

        backtrace::trace(|frame| {
            backtrace::resolve_frame(frame, |symbol| {
                if found.is_some() {
                    return;
                }
                let Some(name) = symbol.name() else {
                    return;
                };
                let name = format!("{name:#}");
                if !self.is_skipped(&name) {
                    found = Some(trim_closures(&name).to_owned());
                }
            });

            found.is_none()
        });

        found
    }

    fn is_skipped(&self, symbol: &str) -> bool {
        let path = symbol.trim_start_matches('<');
        self.skipped_prefixes.iter().any(|prefix| {
            path.strip_prefix(prefix)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
        })
    }
}

impl Default for BacktraceNamer {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl CallerNamer for BacktraceNamer {
    fn caller_name(&self) -> Option<Cow<'static, str>> {
        let name = self.find_caller();
        match &name {
            Some(name) => tracing::trace!(caller = %name, "resolved caller from backtrace"),
            None => tracing::debug!("no caller frame found in backtrace"),
        }
        name.map(Cow::Owned)
    }
}

/// Reports closures as the function that defines them. Handles both the
/// legacy (`{{closure}}`) and v0 (`{closure#0}`) demangled forms.
fn trim_closures(mut symbol: &str) -> &str {
    while let Some((outer, last)) = symbol.rsplit_once("::")
        && (last == "{{closure}}" || last.starts_with("{closure#"))
    {
        symbol = outer;
    }
    symbol
}
