// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Generic implementations of the exported C functions.
//!
//! `export_engine!` emits thin `#[no_mangle] extern "C"` wrappers that call
//! these with a concrete factory. Nothing here unwinds: every function runs
//! under `catch_unwind` and answers failures with its sentinel.
//!
//! | function | sentinel |
//! |---|---|
//! | `new_engine` | null handle |
//! | `delete_engine`, `execute`, `handle_event` | no-op |
//! | `last_string`, `initial_html`, `last_response_json` | null pointer |
//! | `is_shutdown_required` | `false` |

use std::ffi::CStr;
use std::os::raw::c_char;
use std::panic::{self, AssertUnwindSafe};
use std::ptr;

use crate::config::bridge_settings;
use crate::errors::{BridgeError, BridgeResult};
use crate::handle::factory::EngineFactory;
use crate::handle::opaque::EngineHandle;
use crate::handle::registry;
use crate::handle::session::Session;
use crate::observability::messages::handle::{
    HandleCreated, HandleCreationFailed, HandleDeleted, HandleRejected,
};
use crate::observability::messages::StructuredLog;
use crate::traits::Engine;

/// Copy a caller-owned C string, replacing invalid UTF-8.
///
/// # Safety
/// `s` must be null or point to a NUL-terminated buffer.
pub unsafe fn string_from_c(s: *const c_char, argument: &'static str) -> BridgeResult<String> {
    if s.is_null() {
        return Err(BridgeError::NullPointer(argument));
    }
    Ok(unsafe { CStr::from_ptr(s) }.to_string_lossy().into_owned())
}

/// Copy a caller-owned C string that must be valid UTF-8.
///
/// # Safety
/// `s` must be null or point to a NUL-terminated buffer.
pub unsafe fn str_from_c_strict(s: *const c_char, argument: &'static str) -> BridgeResult<String> {
    if s.is_null() {
        return Err(BridgeError::NullPointer(argument));
    }
    unsafe { CStr::from_ptr(s) }
        .to_str()
        .map(str::to_owned)
        .map_err(|source| BridgeError::InvalidUtf8 { argument, source })
}

/// Outermost guard for an exported function: a panic anywhere in the
/// boundary becomes the sentinel.
fn ffi_guard<T, F>(operation: &'static str, sentinel: T, f: F) -> T
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => value,
        Err(payload) => {
            let error = BridgeError::from_panic(operation, payload);
            tracing::error!(operation, error = %error, "Panic caught at C boundary: {}", error);
            sentinel
        }
    }
}

fn reject(operation: &'static str, error: &BridgeError) {
    let (handle, reason) = match error {
        BridgeError::NullPointer(_) => (0, "null handle".to_string()),
        BridgeError::UnknownHandle(address) => (*address, "not a live handle".to_string()),
        other => (0, other.to_string()),
    };
    HandleRejected {
        operation,
        handle,
        reason: &reason,
    }
    .log();
}

/// Run `f` on the session behind `data`, logging and mapping a rejected
/// handle to `sentinel`.
unsafe fn on_session<E, R, F>(
    operation: &'static str,
    data: *const EngineHandle<E>,
    sentinel: R,
    f: F,
) -> R
where
    E: Engine,
    F: FnOnce(&mut Session<E>) -> R,
{
    match unsafe { EngineHandle::with_session(data, f) } {
        Ok(value) => value,
        Err(e) => {
            reject(operation, &e);
            sentinel
        }
    }
}

/// Create an engine through `F` and hand out an owning pointer to it.
///
/// # Safety
/// `config_json` must be null or point to a NUL-terminated buffer.
pub unsafe fn new_engine<F: EngineFactory>(config_json: *const c_char) -> *mut EngineHandle<F::Engine> {
    ffi_guard("new_engine", ptr::null_mut(), || {
        let settings = bridge_settings();
        let created = unsafe { str_from_c_strict(config_json, "config_json") }.and_then(|config| {
            panic::catch_unwind(AssertUnwindSafe(|| F::create(&config, settings.interface_type)))
                .unwrap_or_else(|payload| Err(BridgeError::from_panic("new_engine", payload)))
        });

        match created {
            Ok(engine) => {
                let engine_name = engine.name();
                let interface_type = engine.interface_type();
                let (handle, live_handles) = EngineHandle::new(engine).into_raw();
                HandleCreated {
                    handle: handle as usize,
                    engine: engine_name,
                    interface_type,
                    live_handles,
                }
                .log();
                handle
            }
            Err(e) => {
                HandleCreationFailed {
                    engine: F::engine_name(),
                    error: &e,
                }
                .log();
                ptr::null_mut()
            }
        }
    })
}

/// Drop the engine behind `data`. Null and unknown pointers are ignored.
///
/// # Safety
/// `data` must be null or a pointer returned by `new_engine` for the same
/// engine type that has not been deleted yet.
pub unsafe fn delete_engine<E: Engine>(data: *mut EngineHandle<E>) {
    ffi_guard("delete_engine", (), || match unsafe { EngineHandle::from_raw(data) } {
        Ok(handle) => {
            drop(handle);
            HandleDeleted {
                handle: data as usize,
                live_handles: registry::live_count(),
            }
            .log();
        }
        Err(e) => reject("delete_engine", &e),
    })
}

/// # Safety
/// `data` must be null or a live handle of the same engine type.
pub unsafe fn last_string<E: Engine>(data: *mut EngineHandle<E>) -> *const c_char {
    ffi_guard("last_string", ptr::null(), || unsafe {
        on_session("last_string", data, ptr::null(), |s| s.last_string().as_ptr())
    })
}

/// # Safety
/// `data` must be null or a live handle of the same engine type; `body` must
/// be null or point to a NUL-terminated buffer.
pub unsafe fn execute<E: Engine>(data: *mut EngineHandle<E>, body: *const c_char) {
    ffi_guard("execute", (), || {
        let body = match unsafe { string_from_c(body, "body") } {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(operation = "execute", error = %e, "Ignoring execute: {}", e);
                return;
            }
        };
        // failures are logged by the session and surface through the last response
        unsafe {
            on_session("execute", data, (), |s| {
                let _ = s.execute(&body);
            })
        }
    })
}

/// # Safety
/// Same as [`execute`].
pub unsafe fn handle_event<E: Engine>(data: *mut EngineHandle<E>, body: *const c_char) {
    ffi_guard("handle_event", (), || {
        let body = match unsafe { string_from_c(body, "body") } {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(operation = "handle_event", error = %e, "Ignoring handle_event: {}", e);
                return;
            }
        };
        unsafe {
            on_session("handle_event", data, (), |s| {
                let _ = s.handle_event(&body);
            })
        }
    })
}

/// # Safety
/// `data` must be null or a live handle of the same engine type.
pub unsafe fn initial_html<E: Engine>(data: *mut EngineHandle<E>) -> *const c_char {
    ffi_guard("initial_html", ptr::null(), || unsafe {
        on_session("initial_html", data, ptr::null(), |s| s.initial_html().as_ptr())
    })
}

/// # Safety
/// `data` must be null or a live handle of the same engine type.
pub unsafe fn is_shutdown_required<E: Engine>(data: *const EngineHandle<E>) -> bool {
    ffi_guard("is_shutdown_required", false, || unsafe {
        on_session("is_shutdown_required", data, false, |s| s.is_shutdown_required())
    })
}

/// # Safety
/// `data` must be null or a live handle of the same engine type.
pub unsafe fn last_response_json<E: Engine>(data: *mut EngineHandle<E>) -> *const c_char {
    ffi_guard("last_response_json", ptr::null(), || unsafe {
        on_session("last_response_json", data, ptr::null(), |s| {
            s.last_response_json().as_ptr()
        })
    })
}
