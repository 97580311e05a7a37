use alloc::sync::Arc;

#[cfg(feature = "std")]
use std::sync as impl_;

#[cfg(not(feature = "std"))]
use spin as impl_;

use crate::caller::CallerNamer;

pub(crate) type SharedNamer = Arc<dyn CallerNamer>;

/// Process-wide slot holding the default [`CallerNamer`].
#[repr(transparent)]
pub(crate) struct NamerLock(impl_::RwLock<Option<SharedNamer>>);

impl NamerLock {
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self(impl_::RwLock::new(None))
    }

    #[inline]
    pub(crate) fn get(&'static self) -> Option<SharedNamer> {
        #[cfg(not(feature = "std"))]
        let guard = self.0.read();

        #[cfg(feature = "std")]
        let guard = self.0.read().unwrap_or_else(std::sync::PoisonError::into_inner);

        guard.clone()
    }

    /// Stores `namer` only if the slot is empty. On failure the namer is
    /// handed back.
    pub(crate) fn install(&'static self, namer: SharedNamer) -> Result<(), SharedNamer> {
        #[cfg(not(feature = "std"))]
        let mut guard = self.0.write();

        #[cfg(feature = "std")]
        let mut guard = self.0.write().unwrap_or_else(std::sync::PoisonError::into_inner);

        if guard.is_some() {
            return Err(namer);
        }
        *guard = Some(namer);
        Ok(())
    }

    pub(crate) fn replace(&'static self, namer: Option<SharedNamer>) -> Option<SharedNamer> {
        #[cfg(not(feature = "std"))]
        let mut guard = self.0.write();

        #[cfg(feature = "std")]
        let mut guard = self.0.write().unwrap_or_else(std::sync::PoisonError::into_inner);

        core::mem::replace(&mut *guard, namer)
    }
}
