// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::ffi::{CStr, CString};
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use crate::errors::{BridgeError, BridgeResult};
use crate::observability::messages::engine::{
    ActionExecuted, BodyRejected, EngineCallFailed, EventHandled, StringProduced,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{Engine, EngineAction, EngineResponse, Event};

/// The state that lives behind a handle: the engine, its last response and
/// the last string handed to the caller.
///
/// Every string accessor writes into the single `last_string` slot, so a
/// pointer obtained from one accessor stays valid until the next call that
/// produces a different string or mutates the engine.
pub struct Session<E: Engine> {
    engine: E,
    last_response: E::Response,
    last_string: CString,
}

impl<E: Engine> Session<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            last_response: E::Response::default(),
            last_string: CString::default(),
        }
    }

    pub fn engine_name(&self) -> &'static str {
        self.engine.name()
    }

    pub fn last_response(&self) -> &E::Response {
        &self.last_response
    }

    pub fn last_string(&self) -> &CStr {
        self.last_string.as_c_str()
    }

    pub fn is_shutdown_required(&self) -> bool {
        self.last_response.shutdown_required()
    }

    /// Decode `body` as an action and run it.
    ///
    /// An undecodable body leaves the last response untouched. An engine
    /// error or panic resets it to the default response.
    pub fn execute(&mut self, body: &str) -> BridgeResult<()> {
        let action = match E::Action::from_json(body) {
            Ok(action) => action,
            Err(e) => {
                BodyRejected {
                    operation: "execute",
                    error: &e,
                }
                .log();
                return Err(e);
            }
        };

        let msg = ActionExecuted {
            engine: self.engine_name(),
            body_size: body.len(),
            shutdown_required: false,
            duration: Default::default(),
        };
        let span = msg.span("session_execute");
        let _guard = span.enter();

        let start = Instant::now();
        let engine = &mut self.engine;
        let result = guarded("execute", move || engine.execute(action));
        self.store_response("execute", result)?;

        ActionExecuted {
            shutdown_required: self.is_shutdown_required(),
            duration: start.elapsed(),
            ..msg
        }
        .log();
        Ok(())
    }

    /// Decode `body` as an [`Event`] and forward it, with the same failure
    /// rules as [`Session::execute`].
    pub fn handle_event(&mut self, body: &str) -> BridgeResult<()> {
        let event = match Event::from_json(body) {
            Ok(event) => event,
            Err(e) => {
                BodyRejected {
                    operation: "handle_event",
                    error: &e,
                }
                .log();
                return Err(e);
            }
        };

        let start = Instant::now();
        let engine = &mut self.engine;
        let result = guarded("handle_event", || engine.handle_event(&event));
        self.store_response("handle_event", result)?;

        EventHandled {
            engine: self.engine_name(),
            event: event.name(),
            shutdown_required: self.is_shutdown_required(),
            duration: start.elapsed(),
        }
        .log();
        Ok(())
    }

    /// Render the engine's bootstrap page into the string slot. An engine
    /// failure yields an empty string.
    pub fn initial_html(&mut self) -> &CStr {
        let engine = &mut self.engine;
        let html = match guarded("initial_html", || engine.initial_html()) {
            Ok(html) => html,
            Err(e) => {
                self.report_failure("initial_html", &e);
                String::new()
            }
        };
        self.store_string("initial_html", html);
        self.last_string()
    }

    /// Encode the last response as JSON into the string slot.
    pub fn last_response_json(&mut self) -> &CStr {
        let json = match serde_json::to_string(&self.last_response) {
            Ok(json) => json,
            Err(e) => {
                let error = BridgeError::from(e);
                self.report_failure("last_response_json", &error);
                String::new()
            }
        };
        self.store_string("last_response_json", json);
        self.last_string()
    }

    fn store_response(
        &mut self,
        operation: &'static str,
        result: BridgeResult<E::Response>,
    ) -> BridgeResult<()> {
        match result {
            Ok(response) => {
                self.last_response = response;
                Ok(())
            }
            Err(e) => {
                self.report_failure(operation, &e);
                self.last_response = E::Response::default();
                Err(e)
            }
        }
    }

    /// Replace the string slot. Identical content keeps the existing buffer
    /// so earlier pointers stay valid.
    fn store_string(&mut self, operation: &'static str, value: String) {
        if self.last_string.as_bytes() == value.as_bytes() {
            StringProduced {
                operation,
                length: value.len(),
                reused: true,
            }
            .log();
            return;
        }

        let length = value.len();
        self.last_string = match CString::new(value) {
            Ok(s) => s,
            Err(source) => {
                let error = BridgeError::InteriorNul { operation, source };
                self.report_failure(operation, &error);
                CString::default()
            }
        };
        StringProduced {
            operation,
            length,
            reused: false,
        }
        .log();
    }

    fn report_failure(&self, operation: &'static str, error: &BridgeError) {
        EngineCallFailed {
            engine: self.engine_name(),
            operation,
            error,
        }
        .log();
    }
}

/// Run an engine entry point, turning both its error and any panic into a
/// [`BridgeError`].
fn guarded<T, F>(operation: &'static str, f: F) -> BridgeResult<T>
where
    F: FnOnce() -> anyhow::Result<T>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(source)) => Err(BridgeError::Engine { operation, source }),
        Err(payload) => Err(BridgeError::from_panic(operation, payload)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::stub::{ErrorEngine, PanickingEngine};
    use crate::engines::{ReferenceConfig, ReferenceEngine};
    use crate::traits::InterfaceType;

    fn reference_session() -> Session<ReferenceEngine> {
        let engine = ReferenceEngine::new(&ReferenceConfig::default(), InterfaceType::Pc).unwrap();
        Session::new(engine)
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = reference_session();
        assert_eq!(session.last_string().to_bytes(), b"");
        assert!(!session.is_shutdown_required());
    }

    #[test]
    fn test_execute_updates_last_response() {
        let mut session = reference_session();
        session.execute(r#"{"Say": "hello"}"#).unwrap();
        assert_eq!(session.last_response().count, 1);
        let json = session.last_response_json().to_str().unwrap().to_string();
        assert!(json.contains("\"msgs\":\"hello\""));
    }

    #[test]
    fn test_bad_action_keeps_last_response() {
        let mut session = reference_session();
        session.execute(r#"{"Say": "first"}"#).unwrap();

        let err = session.execute("\"Dance\"").unwrap_err();
        assert!(matches!(err, BridgeError::InvalidAction { .. }));
        assert_eq!(session.last_response().count, 1);
        assert_eq!(session.last_response().msgs, "first");
    }

    #[test]
    fn test_bad_event_keeps_last_response() {
        let mut session = reference_session();
        session.execute("\"Quit\"").unwrap();

        let err = session.handle_event("{\"Nope\": 1}").unwrap_err();
        assert!(matches!(err, BridgeError::InvalidEvent { .. }));
        assert!(session.is_shutdown_required());
    }

    #[test]
    fn test_quit_requires_shutdown() {
        let mut session = reference_session();
        session.execute(r#"{"Say": "bye"}"#).unwrap();
        assert!(!session.is_shutdown_required());
        session.execute("\"Quit\"").unwrap();
        assert!(session.is_shutdown_required());
    }

    #[test]
    fn test_engine_error_resets_response() {
        let engine = ErrorEngine::default();
        let mut session = Session::new(engine);
        let err = session.execute("\"Fail\"").unwrap_err();
        assert!(matches!(err, BridgeError::Engine { operation: "execute", .. }));
        assert!(!session.is_shutdown_required());
    }

    #[test]
    fn test_engine_error_in_event_resets_response() {
        let mut session = Session::new(ErrorEngine::default());
        session.execute("\"Quit\"").unwrap();
        assert!(session.is_shutdown_required());

        session.handle_event("\"Create\"").unwrap_err();
        assert!(!session.is_shutdown_required());
    }

    #[test]
    fn test_engine_panic_is_caught() {
        let mut session = Session::new(PanickingEngine);
        let err = session.execute("\"Boom\"").unwrap_err();
        match err {
            BridgeError::Panic { operation, message } => {
                assert_eq!(operation, "execute");
                assert!(message.contains("engine exploded"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(session.initial_html().to_bytes(), b"");
    }

    #[test]
    fn test_initial_html_error_gives_empty_string() {
        let mut session = Session::new(ErrorEngine::default());
        assert_eq!(session.initial_html().to_bytes(), b"");
    }

    #[test]
    fn test_identical_string_keeps_buffer() {
        let mut session = reference_session();
        let first = session.last_response_json().as_ptr();
        let second = session.last_response_json().as_ptr();
        assert_eq!(first, second);
        assert_eq!(session.last_string().as_ptr(), first);
    }

    #[test]
    fn test_interior_nul_gives_empty_string() {
        let mut session = reference_session();
        session.execute("{\"Say\": \"a\\u0000b\"}").unwrap();
        // serde_json escapes the NUL, so the JSON itself is clean
        assert!(!session.last_response_json().to_bytes().is_empty());

        session.store_string("test", "a\0b".to_string());
        assert_eq!(session.last_string().to_bytes(), b"");
    }
}
