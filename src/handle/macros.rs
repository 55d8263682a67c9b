// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Emit the C ABI for an [`EngineFactory`](crate::handle::EngineFactory).
///
/// Expands to the eight `#[no_mangle] extern "C"` functions declared in
/// `include/engine_bridge.h` plus an `ExportedEngineHandle` alias for the
/// opaque handle type. Invoke it once per cdylib; a second invocation in the
/// same link clashes on the symbol names.
///
/// ```ignore
/// use engine_bridge::handle::DefaultEngineFactory;
///
/// engine_bridge::export_engine!(DefaultEngineFactory<my_app::Engine>);
/// ```
#[macro_export]
macro_rules! export_engine {
    ($factory:ty) => {
        /// Opaque handle type seen by C as `struct EngineHandle`.
        pub type ExportedEngineHandle = $crate::handle::EngineHandle<
            <$factory as $crate::handle::EngineFactory>::Engine,
        >;

        /// Create an engine from a JSON config string. Returns null on failure.
        ///
        /// # Safety
        /// `config_json` must be null or a NUL-terminated string.
        #[no_mangle]
        pub unsafe extern "C" fn new_engine(
            config_json: *const ::std::os::raw::c_char,
        ) -> *mut ExportedEngineHandle {
            unsafe { $crate::handle::abi::new_engine::<$factory>(config_json) }
        }

        /// Delete the engine. The handle is invalid afterwards.
        ///
        /// # Safety
        /// `data` must be null or a handle from `new_engine` not yet deleted.
        #[no_mangle]
        pub unsafe extern "C" fn delete_engine(data: *mut ExportedEngineHandle) {
            unsafe { $crate::handle::abi::delete_engine(data) }
        }

        /// The most recent string produced for the caller.
        ///
        /// # Safety
        /// `data` must be null or a live handle.
        #[no_mangle]
        pub unsafe extern "C" fn last_string(
            data: *mut ExportedEngineHandle,
        ) -> *const ::std::os::raw::c_char {
            unsafe { $crate::handle::abi::last_string(data) }
        }

        /// Execute an action (just wraps the engine call).
        ///
        /// # Safety
        /// `data` must be null or a live handle; `body` null or NUL-terminated.
        #[no_mangle]
        pub unsafe extern "C" fn execute(
            data: *mut ExportedEngineHandle,
            body: *const ::std::os::raw::c_char,
        ) {
            unsafe { $crate::handle::abi::execute(data, body) }
        }

        /// Handle an event (just wraps the engine call).
        ///
        /// # Safety
        /// `data` must be null or a live handle; `body` null or NUL-terminated.
        #[no_mangle]
        pub unsafe extern "C" fn handle_event(
            data: *mut ExportedEngineHandle,
            body: *const ::std::os::raw::c_char,
        ) {
            unsafe { $crate::handle::abi::handle_event(data, body) }
        }

        /// Create the initial HTML (just wraps the engine call).
        ///
        /// # Safety
        /// `data` must be null or a live handle.
        #[no_mangle]
        pub unsafe extern "C" fn initial_html(
            data: *mut ExportedEngineHandle,
        ) -> *const ::std::os::raw::c_char {
            unsafe { $crate::handle::abi::initial_html(data) }
        }

        /// Whether the last response requires the application to shut down.
        ///
        /// # Safety
        /// `data` must be null or a live handle.
        #[no_mangle]
        pub unsafe extern "C" fn is_shutdown_required(data: *const ExportedEngineHandle) -> bool {
            unsafe { $crate::handle::abi::is_shutdown_required(data) }
        }

        /// The JSON-encoded last response (just wraps the engine call).
        ///
        /// # Safety
        /// `data` must be null or a live handle.
        #[no_mangle]
        pub unsafe extern "C" fn last_response_json(
            data: *mut ExportedEngineHandle,
        ) -> *const ::std::os::raw::c_char {
            unsafe { $crate::handle::abi::last_response_json(data) }
        }
    };
}
