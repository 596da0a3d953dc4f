//! Seam to the external command-output parser.

pub mod args;
pub mod errors;
mod process;

pub use process::ProcessParser;

use crate::record::Record;
use errors::EngineError;

/// One document to parse.
#[derive(Debug, Clone)]
pub struct ParseRequest<'a> {
    pub device_name: &'a str,
    pub os: &'a str,
    pub parser: &'a str,
    pub cli_output: &'a str,
}

/// Turns raw command output into a nested Record.
pub trait CommandParser {
    fn parse(&self, request: &ParseRequest<'_>) -> Result<Record, EngineError>;
}

/// Log and run one request against `engine`.
pub fn parse_cli_output(
    engine: &dyn CommandParser,
    request: &ParseRequest<'_>,
) -> Result<Record, EngineError> {
    tracing::info!(
        "[+] Parsing CLI from device {} with parser '{}' (os={})",
        request.device_name,
        request.parser,
        request.os
    );
    let record = engine.parse(request)?;
    tracing::debug!(keys = record.len(), "parser returned record");
    Ok(record)
}
