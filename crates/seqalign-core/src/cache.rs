//! Per-artifact memoisation for comparison sessions.
//!
//! Every derived artifact (target index, matching blocks, opcodes, target
//! frequency table) lives in its own [`Memo`], a small state machine:
//!
//! ```text
//!   Dirty ──get──▶ Computing ──ok──▶ Cached
//!     ▲                │                │
//!     └────err─────────┘                │
//!     └──────────invalidate─────────────┘
//! ```
//!
//! Handing out `Arc`s means a cached value is never mutated once a caller
//! holds it; invalidation only drops the session's reference.

use serde::Serialize;
use std::cell::RefCell;
use std::convert::Infallible;
use std::sync::Arc;

/// Observable state of a memoised artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheState {
    Dirty,
    Computing,
    Cached,
}

enum Slot<T> {
    Dirty,
    Computing,
    Cached(Arc<T>),
}

pub(crate) struct Memo<T> {
    name: &'static str,
    slot: RefCell<Slot<T>>,
}

impl<T> Memo<T> {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: RefCell::new(Slot::Dirty),
        }
    }

    pub(crate) fn state(&self) -> CacheState {
        match &*self.slot.borrow() {
            Slot::Dirty => CacheState::Dirty,
            Slot::Computing => CacheState::Computing,
            Slot::Cached(_) => CacheState::Cached,
        }
    }

    pub(crate) fn invalidate(&mut self) {
        *self.slot.get_mut() = Slot::Dirty;
    }

    /// Return the cached value, computing it with `f` when dirty.
    ///
    /// A failed computation leaves the slot dirty. Re-entering a slot that
    /// is already computing is an internal fault; the value is then computed
    /// again and handed back without being cached.
    pub(crate) fn get_or_try_compute<E, F>(&self, f: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let reentrant = {
            let mut slot = self.slot.borrow_mut();
            if let Slot::Cached(value) = &*slot {
                return Ok(Arc::clone(value));
            }
            let reentrant = matches!(*slot, Slot::Computing);
            if !reentrant {
                *slot = Slot::Computing;
            }
            reentrant
        };

        if reentrant {
            tracing::error!(
                artifact = self.name,
                "re-entrant computation detected, result will not be cached"
            );
            return f().map(Arc::new);
        }

        match f() {
            Ok(value) => {
                let value = Arc::new(value);
                *self.slot.borrow_mut() = Slot::Cached(Arc::clone(&value));
                Ok(value)
            }
            Err(err) => {
                *self.slot.borrow_mut() = Slot::Dirty;
                Err(err)
            }
        }
    }

    pub(crate) fn get_or_compute<F>(&self, f: F) -> Arc<T>
    where
        F: FnOnce() -> T,
    {
        match self.get_or_try_compute(|| Ok::<T, Infallible>(f())) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }
}
