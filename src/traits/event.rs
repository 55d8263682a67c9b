// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::errors::{BridgeError, BridgeResult};

/// Host lifecycle events forwarded to an engine by `handle_event`.
///
/// Encoded as externally tagged JSON: unit events are plain strings
/// (`"Create"`), events with data are single-key objects
/// (`{"RestoreInstanceState": {"room": "7"}}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Create,
    Start,
    Resume,
    Pause,
    Stop,
    Destroy,
    SaveInstanceState,
    RestoreInstanceState(BTreeMap<String, String>),
}

impl Event {
    pub fn from_json(json_str: &str) -> BridgeResult<Self> {
        serde_json::from_str(json_str).map_err(|e| BridgeError::InvalidEvent {
            body: json_str.to_string(),
            reason: e.to_string(),
        })
    }

    /// Short name used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Event::Create => "Create",
            Event::Start => "Start",
            Event::Resume => "Resume",
            Event::Pause => "Pause",
            Event::Stop => "Stop",
            Event::Destroy => "Destroy",
            Event::SaveInstanceState => "SaveInstanceState",
            Event::RestoreInstanceState(_) => "RestoreInstanceState",
        }
    }
}

/// The kind of host driving the engine. Engines use it to tailor their
/// bootstrap rendering (e.g. how the page calls back into the host).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InterfaceType {
    #[serde(rename = "PC", alias = "pc")]
    Pc,
    #[default]
    #[serde(alias = "android")]
    Android,
}

impl fmt::Display for InterfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterfaceType::Pc => write!(f, "PC"),
            InterfaceType::Android => write!(f, "Android"),
        }
    }
}

impl std::str::FromStr for InterfaceType {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pc" => Ok(InterfaceType::Pc),
            "android" => Ok(InterfaceType::Android),
            other => Err(BridgeError::Settings(format!(
                "unknown interface type '{}', expected 'PC' or 'Android'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_event_from_json() {
        assert_eq!(Event::from_json("\"Create\"").unwrap(), Event::Create);
        assert_eq!(
            Event::from_json("\"SaveInstanceState\"").unwrap(),
            Event::SaveInstanceState
        );
    }

    #[test]
    fn test_restore_instance_state_from_json() {
        let event = Event::from_json(r#"{"RestoreInstanceState": {"room": "7", "arrows": "3"}}"#)
            .unwrap();
        let mut expected = BTreeMap::new();
        expected.insert("room".to_string(), "7".to_string());
        expected.insert("arrows".to_string(), "3".to_string());
        assert_eq!(event, Event::RestoreInstanceState(expected));
        assert_eq!(event.name(), "RestoreInstanceState");
    }

    #[test]
    fn test_unknown_event_rejected() {
        let err = Event::from_json("\"Explode\"").unwrap_err();
        match err {
            BridgeError::InvalidEvent { body, .. } => assert_eq!(body, "\"Explode\""),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_interface_type_serde_names() {
        assert_eq!(serde_json::to_string(&InterfaceType::Pc).unwrap(), "\"PC\"");
        assert_eq!(
            serde_json::from_str::<InterfaceType>("\"Android\"").unwrap(),
            InterfaceType::Android
        );
        assert_eq!(InterfaceType::default(), InterfaceType::Android);
    }

    #[test]
    fn test_interface_type_from_str() {
        assert_eq!("pc".parse::<InterfaceType>().unwrap(), InterfaceType::Pc);
        assert_eq!(" Android ".parse::<InterfaceType>().unwrap(), InterfaceType::Android);
        assert!("ios".parse::<InterfaceType>().is_err());
    }
}
