// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::{Mutex, PoisonError};

use crate::errors::{BridgeError, BridgeResult};
use crate::handle::registry;
use crate::handle::session::Session;
use crate::traits::Engine;

/// The value a foreign caller holds a pointer to. C sees it as an incomplete
/// `struct EngineHandle`; only this crate knows its layout.
///
/// The session sits behind a mutex so accidental calls from two threads
/// serialise instead of racing. Handles are still single-threaded by
/// contract.
pub struct EngineHandle<E: Engine> {
    session: Mutex<Session<E>>,
}

impl<E: Engine> EngineHandle<E> {
    pub fn new(engine: E) -> Self {
        Self {
            session: Mutex::new(Session::new(engine)),
        }
    }

    /// Box the handle, register it as live and give up ownership.
    /// Returns the raw pointer and the number of live handles.
    pub fn into_raw(self) -> (*mut Self, usize) {
        let ptr = Box::into_raw(Box::new(self));
        let live = registry::register(ptr as usize);
        (ptr, live)
    }

    /// Take ownership back from a pointer produced by [`EngineHandle::into_raw`]
    /// and unregister it.
    ///
    /// # Safety
    /// `ptr` must be null, unregistered, or a live pointer returned by
    /// `into_raw` for the same engine type.
    pub unsafe fn from_raw(ptr: *mut Self) -> BridgeResult<Box<Self>> {
        if ptr.is_null() {
            return Err(BridgeError::NullPointer("data"));
        }
        if !registry::unregister(ptr as usize) {
            return Err(BridgeError::UnknownHandle(ptr as usize));
        }
        Ok(unsafe { Box::from_raw(ptr) })
    }

    /// Run `f` against the session behind `ptr`.
    ///
    /// # Safety
    /// `ptr` must be null, unregistered, or a live pointer returned by
    /// `into_raw` for the same engine type, and must not be deleted while
    /// `f` runs.
    pub unsafe fn with_session<R, F>(ptr: *const Self, f: F) -> BridgeResult<R>
    where
        F: FnOnce(&mut Session<E>) -> R,
    {
        if ptr.is_null() {
            return Err(BridgeError::NullPointer("data"));
        }
        if !registry::is_live(ptr as usize) {
            return Err(BridgeError::UnknownHandle(ptr as usize));
        }
        let handle = unsafe { &*ptr };
        let mut session = handle
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(f(&mut session))
    }
}
