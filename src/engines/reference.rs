// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use crate::errors::{BridgeError, BridgeResult};
use crate::traits::{Engine, EngineAction, EngineConfig, EngineResponse, Event, InterfaceType};

/// Reference engine configuration.
///
/// ```json
/// { "title": "Cave", "shutdown_on_start": false }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReferenceConfig {
    pub title: String,
    /// Request shutdown in the first response, whatever it answers.
    pub shutdown_on_start: bool,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            title: "Engine".to_string(),
            shutdown_on_start: false,
        }
    }
}

impl EngineConfig for ReferenceConfig {
    fn from_json(json_str: &str) -> BridgeResult<Self> {
        if json_str.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json_str).map_err(|e| BridgeError::InvalidConfig(e.to_string()))
    }
}

/// Actions understood by the reference engine: `{"Say": "text"}`, `"Reset"`
/// and `"Quit"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum ReferenceAction {
    Say(String),
    Reset,
    Quit,
}

impl EngineAction for ReferenceAction {
    fn from_json(json_str: &str) -> BridgeResult<Self> {
        serde_json::from_str(json_str).map_err(|e| BridgeError::InvalidAction {
            body: json_str.to_string(),
            reason: e.to_string(),
        })
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ReferenceResponse {
    pub shutdown_required: bool,
    /// Message log joined with `<br/>`.
    pub msgs: String,
    /// Actions executed since the last reset.
    pub count: u32,
}

impl EngineResponse for ReferenceResponse {
    fn shutdown_required(&self) -> bool {
        self.shutdown_required
    }
}

/// A small engine that keeps a message log. It exists so the boundary has
/// something concrete to export and test against.
#[derive(Debug)]
pub struct ReferenceEngine {
    config: ReferenceConfig,
    interface_type: InterfaceType,
    msgs: Vec<String>,
    count: u32,
    responded: bool,
}

impl ReferenceEngine {
    fn respond(&mut self, shutdown_required: bool) -> ReferenceResponse {
        let first = !self.responded;
        self.responded = true;
        ReferenceResponse {
            shutdown_required: shutdown_required || (first && self.config.shutdown_on_start),
            msgs: self.msgs.join("<br/>"),
            count: self.count,
        }
    }

    fn invoke_script(&self) -> &'static str {
        match self.interface_type {
            InterfaceType::Pc => {
                "var invoke = function (arg) {\n  window.webkit.messageHandlers.external.postMessage(JSON.stringify(arg));\n};"
            }
            InterfaceType::Android => {
                "var invoke = function (arg) {\n  engine.execute(JSON.stringify(arg));\n  respond(engine.last_response_json());\n};"
            }
        }
    }
}

impl Engine for ReferenceEngine {
    type Config = ReferenceConfig;
    type Action = ReferenceAction;
    type Response = ReferenceResponse;

    fn new(config: &ReferenceConfig, interface_type: InterfaceType) -> anyhow::Result<Self> {
        tracing::debug!(title = %config.title, %interface_type, "Creating reference engine");
        Ok(Self {
            config: config.clone(),
            interface_type,
            msgs: Vec::new(),
            count: 0,
            responded: false,
        })
    }

    fn initial_html(&mut self) -> anyhow::Result<String> {
        let title = escape_html(&self.config.title);
        Ok(format!(
            "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
             <body data-interface=\"{interface}\">\n<h1>{title}</h1>\n<div id=\"msgs\"></div>\n\
             <script>\n{script}\nvar respond = function (json) {{\n  \
             document.getElementById(\"msgs\").innerHTML = JSON.parse(json).msgs;\n}};\n</script>\n\
             </body>\n</html>\n",
            title = title,
            interface = self.interface_type,
            script = self.invoke_script(),
        ))
    }

    fn execute(&mut self, action: ReferenceAction) -> anyhow::Result<ReferenceResponse> {
        tracing::debug!(?action, "Reference engine executing");
        match action {
            ReferenceAction::Say(text) => {
                self.msgs.push(text);
                self.count += 1;
                Ok(self.respond(false))
            }
            ReferenceAction::Reset => {
                self.msgs.clear();
                self.count = 0;
                Ok(self.respond(false))
            }
            ReferenceAction::Quit => {
                self.count += 1;
                Ok(self.respond(true))
            }
        }
    }

    fn handle_event(&mut self, event: &Event) -> anyhow::Result<ReferenceResponse> {
        match event {
            Event::Create | Event::Destroy => {
                tracing::debug!(event = event.name(), "Reference engine lifecycle event");
            }
            _ => tracing::trace!(event = event.name(), "Event ignored"),
        }
        let first = !self.responded;
        self.responded = true;
        Ok(ReferenceResponse {
            shutdown_required: matches!(event, Event::Destroy)
                || (first && self.config.shutdown_on_start),
            ..ReferenceResponse::default()
        })
    }

    fn interface_type(&self) -> InterfaceType {
        self.interface_type
    }

    fn name(&self) -> &'static str {
        "reference"
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(config: ReferenceConfig) -> ReferenceEngine {
        ReferenceEngine::new(&config, InterfaceType::Android).unwrap()
    }

    #[test]
    fn test_config_defaults() {
        assert_eq!(ReferenceConfig::from_json("").unwrap(), ReferenceConfig::default());
        assert_eq!(ReferenceConfig::from_json("{}").unwrap(), ReferenceConfig::default());
        let config = ReferenceConfig::from_json(r#"{"title": "Cave"}"#).unwrap();
        assert_eq!(config.title, "Cave");
        assert!(!config.shutdown_on_start);
    }

    #[test]
    fn test_actions_from_json() {
        assert_eq!(
            ReferenceAction::from_json(r#"{"Say": "hi"}"#).unwrap(),
            ReferenceAction::Say("hi".to_string())
        );
        assert_eq!(ReferenceAction::from_json("\"Quit\"").unwrap(), ReferenceAction::Quit);
        assert!(ReferenceAction::from_json("\"Jump\"").is_err());
    }

    #[test]
    fn test_say_accumulates_messages() {
        let mut engine = engine(ReferenceConfig::default());
        engine.execute(ReferenceAction::Say("one".into())).unwrap();
        let response = engine.execute(ReferenceAction::Say("two".into())).unwrap();
        assert_eq!(response.msgs, "one<br/>two");
        assert_eq!(response.count, 2);
        assert!(!response.shutdown_required);
    }

    #[test]
    fn test_reset_clears_state() {
        let mut engine = engine(ReferenceConfig::default());
        engine.execute(ReferenceAction::Say("one".into())).unwrap();
        let response = engine.execute(ReferenceAction::Reset).unwrap();
        assert_eq!(response, ReferenceResponse::default());
    }

    #[test]
    fn test_quit_and_destroy_request_shutdown() {
        let mut engine = engine(ReferenceConfig::default());
        assert!(engine.execute(ReferenceAction::Quit).unwrap().shutdown_required);
        assert!(engine.handle_event(&Event::Destroy).unwrap().shutdown_required);
        assert!(!engine.handle_event(&Event::Pause).unwrap().shutdown_required);
    }

    #[test]
    fn test_shutdown_on_start_applies_to_first_response_only() {
        let mut engine = engine(ReferenceConfig {
            shutdown_on_start: true,
            ..ReferenceConfig::default()
        });
        assert!(engine.handle_event(&Event::Create).unwrap().shutdown_required);
        assert!(!engine.execute(ReferenceAction::Say("x".into())).unwrap().shutdown_required);
    }

    #[test]
    fn test_initial_html_escapes_title_and_tracks_interface() {
        let mut engine = engine(ReferenceConfig {
            title: "<Cave & Co>".to_string(),
            ..ReferenceConfig::default()
        });
        let html = engine.initial_html().unwrap();
        assert!(html.contains("<h1>&lt;Cave &amp; Co&gt;</h1>"));
        assert!(html.contains("data-interface=\"Android\""));
        assert!(html.contains("engine.execute"));

        let mut pc = ReferenceEngine::new(&ReferenceConfig::default(), InterfaceType::Pc).unwrap();
        assert!(pc.initial_html().unwrap().contains("messageHandlers"));
    }
}
