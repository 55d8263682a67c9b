// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::marker::PhantomData;

use crate::errors::{BridgeError, BridgeResult};
use crate::traits::{Engine, EngineConfig, InterfaceType};

/// The application-specific part of `new_engine`: turns the caller's config
/// string into an engine. `export_engine!` binds one factory to the exported
/// C symbols, so each application chooses its engine by naming its factory.
pub trait EngineFactory {
    type Engine: Engine;

    fn create(config_json: &str, interface_type: InterfaceType) -> BridgeResult<Self::Engine>;

    /// Engine name used in log output before an engine instance exists.
    fn engine_name() -> &'static str {
        std::any::type_name::<Self::Engine>()
    }
}

/// Factory that parses `E::Config` from the config string and calls `E::new`.
pub struct DefaultEngineFactory<E>(PhantomData<E>);

impl<E: Engine> EngineFactory for DefaultEngineFactory<E> {
    type Engine = E;

    fn create(config_json: &str, interface_type: InterfaceType) -> BridgeResult<E> {
        let config = E::Config::from_json(config_json)?;
        E::new(&config, interface_type).map_err(BridgeError::EngineCreation)
    }
}
