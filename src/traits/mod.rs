pub mod engine;
pub mod event;

pub use engine::{Engine, EngineAction, EngineConfig, EngineResponse};
pub use event::{Event, InterfaceType};
