//! Caller identity for annotated errors.
//!
//! Every annotation starts with the name of the function that reported the
//! error. Where that name comes from is pluggable through the
//! [`CallerNamer`] trait:
//!
//! - [`function_name!`] resolves the enclosing function at compile time. The
//!   [`handle!`] macro uses it, which makes the name exact and free of any
//!   stack inspection.
//! - [`CallerName`] is a fixed name, handy for tests and for code that knows
//!   its own identity.
//! - `stackerr_backtrace::BacktraceNamer` walks the live stack, for code that
//!   calls [`StackErr::handle`] or [`handle`] directly.
//!
//! When a namer cannot produce a name, the annotation falls back to
//! [`UNKNOWN_CALLER`]. A failed lookup never fails the annotation itself.
//!
//! # Default namer
//!
//! [`StackErr`] instances without their own namer, and the free [`handle`]
//! function, ask the process-wide default namer. None is installed
//! initially:
//!
//! ```
//! use stackerr::caller::{CallerName, clear_default_namer, install_default_namer};
//!
//! install_default_namer(CallerName("main")).expect("no namer installed yet");
//!
//! let err = stackerr::handle("boom", "start", &[]);
//! assert_eq!(err.to_string(), "main.start: boom");
//!
//! // Restore the empty slot.
//! clear_default_namer();
//! ```
//!
//! [`function_name!`]: crate::function_name
//! [`handle!`]: crate::handle!
//! [`handle`]: crate::handle()
//! [`StackErr`]: crate::StackErr
//! [`StackErr::handle`]: crate::StackErr::handle

use alloc::{borrow::Cow, string::String, sync::Arc};
use core::fmt;

use crate::namer_lock::{NamerLock, SharedNamer};

/// Name used in place of the caller when no name can be resolved.
pub const UNKNOWN_CALLER: &str = "unknown";

/// Resolves the name of the function that reported an error.
///
/// Implementations are best-effort: returning `None` is always allowed and
/// results in [`UNKNOWN_CALLER`] being displayed.
///
/// Any `Fn() -> Option<String>` closure is a namer:
///
/// ```
/// use stackerr::StackErr;
///
/// let helper = StackErr::new(&[]).with_namer(|| Some("jobs::run".to_string()));
/// assert_eq!(
///     helper.handle("timeout", "poll", &[]).to_string(),
///     "jobs::run.poll: timeout"
/// );
/// ```
pub trait CallerNamer: Send + Sync + 'static {
    /// Returns the qualified name of the calling function, if known.
    fn caller_name(&self) -> Option<Cow<'static, str>>;
}

/// A namer that always reports the same, explicitly supplied name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CallerName(pub &'static str);

impl CallerNamer for CallerName {
    fn caller_name(&self) -> Option<Cow<'static, str>> {
        Some(Cow::Borrowed(self.0))
    }
}

impl fmt::Display for CallerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A namer that never knows the caller.
#[derive(Copy, Clone, Debug, Default)]
pub struct UnknownCaller;

impl CallerNamer for UnknownCaller {
    fn caller_name(&self) -> Option<Cow<'static, str>> {
        None
    }
}

impl<F> CallerNamer for F
where
    F: Fn() -> Option<String> + Send + Sync + 'static,
{
    fn caller_name(&self) -> Option<Cow<'static, str>> {
        self().map(Cow::Owned)
    }
}

/// Error returned by [`install_default_namer`] when a default namer is
/// already installed.
#[derive(Copy, Clone)]
pub struct NamerAlreadyInstalledError;

impl fmt::Debug for NamerAlreadyInstalledError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamerAlreadyInstalledError").finish()
    }
}

impl fmt::Display for NamerAlreadyInstalledError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a default caller namer is already installed")
    }
}

impl core::error::Error for NamerAlreadyInstalledError {}

static DEFAULT_NAMER: NamerLock = NamerLock::new();

/// Installs the process-wide default namer.
///
/// Fails if a default namer is already installed. Use
/// [`replace_default_namer`] to overwrite it unconditionally.
pub fn install_default_namer<N: CallerNamer>(namer: N) -> Result<(), NamerAlreadyInstalledError> {
    match DEFAULT_NAMER.install(Arc::new(namer)) {
        Ok(()) => {
            tracing::debug!(namer = core::any::type_name::<N>(), "installed default caller namer");
            Ok(())
        }
        Err(_) => Err(NamerAlreadyInstalledError),
    }
}

/// Replaces the process-wide default namer, returning the previous one.
///
/// Passing `None` clears the slot, like [`clear_default_namer`].
pub fn replace_default_namer<N: CallerNamer>(namer: Option<N>) -> Option<Arc<dyn CallerNamer>> {
    DEFAULT_NAMER.replace(namer.map(|namer| Arc::new(namer) as SharedNamer))
}

/// Removes the process-wide default namer, returning it.
///
/// Annotations without their own namer render [`UNKNOWN_CALLER`] afterwards.
pub fn clear_default_namer() -> Option<Arc<dyn CallerNamer>> {
    DEFAULT_NAMER.replace(None)
}

/// Returns the currently installed default namer.
#[must_use]
pub fn default_namer() -> Option<Arc<dyn CallerNamer>> {
    DEFAULT_NAMER.get()
}

/// Asks `namer` (or the default namer when `namer` is `None`) for the caller's
/// name, falling back to [`UNKNOWN_CALLER`].
pub(crate) fn resolve(namer: Option<&dyn CallerNamer>) -> Cow<'static, str> {
    let name = match namer {
        Some(namer) => namer.caller_name(),
        None => default_namer().and_then(|namer| namer.caller_name()),
    };

    name.unwrap_or_else(|| {
        tracing::debug!("caller name unavailable, using placeholder");
        Cow::Borrowed(UNKNOWN_CALLER)
    })
}

impl fmt::Debug for dyn CallerNamer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallerNamer").finish_non_exhaustive()
    }
}
