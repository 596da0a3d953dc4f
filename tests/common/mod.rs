#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use cli2xls::config::Defaults;
use cli2xls::engine::args::EngineArgs;
use cli2xls::engine::errors::EngineError;
use cli2xls::engine::{CommandParser, ParseRequest};
use cli2xls::record::Record;

/// Parser returning canned output per device name. Devices without an
/// entry are rejected the way a failing parser program would be.
#[derive(Default)]
pub struct CannedParser {
    outputs: HashMap<String, Value>,
}

impl CannedParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, device: &str, output: Value) -> Self {
        self.outputs.insert(device.to_string(), output);
        self
    }
}

impl CommandParser for CannedParser {
    fn parse(&self, request: &ParseRequest<'_>) -> Result<Record, EngineError> {
        match self.outputs.get(request.device_name) {
            Some(Value::Object(map)) => Ok(map.clone()),
            Some(_) => Err(EngineError::NotAMapping {
                parser: request.parser.to_string(),
            }),
            None => Err(EngineError::Rejected {
                parser: request.parser.to_string(),
                os: request.os.to_string(),
                message: format!("no output for {}", request.device_name),
            }),
        }
    }
}

pub fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write test input");
    path
}

pub fn no_overrides() -> EngineArgs {
    EngineArgs::default()
}

pub fn defaults() -> Defaults {
    Defaults::default()
}
