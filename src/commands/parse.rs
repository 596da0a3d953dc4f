use std::fs::File;
use std::io::{BufWriter, Write};

use super::Target;
use super::args::ParseArgs;
use crate::config::Settings;
use crate::engine::{CommandParser, ParseRequest, parse_cli_output};
use crate::error::Cli2XlsError;
use crate::input::{self, Document};
use crate::record::Record;
use crate::sink::errors::SinkError;
use crate::sink::json::write_json;

/// Run the engine over one CLI document for an already resolved target.
pub fn parse_document(
    document: &Document,
    target: &Target,
    engine: &dyn CommandParser,
) -> Result<Record, Cli2XlsError> {
    let request = ParseRequest {
        device_name: &target.device_name,
        os: &target.os,
        parser: &target.parser,
        cli_output: &document.text,
    };
    Ok(parse_cli_output(engine, &request)?)
}

pub fn run(
    args: &ParseArgs,
    settings: &Settings,
    engine: &dyn CommandParser,
) -> Result<(), Cli2XlsError> {
    let document = input::read_cli_document(&args.input.infile)?;
    let target = Target::resolve(
        &document.name,
        &args.engine,
        &settings.defaults.os,
        &settings.defaults.cli_parser,
        &settings.defaults.device_name,
    );

    let record = parse_document(&document, &target, engine)?;

    match &args.outfile {
        Some(path) => {
            let file = File::create(path).map_err(|e| SinkError::Io {
                path: path.clone(),
                source: e,
            })?;
            let mut writer = BufWriter::new(file);
            write_json(&record, &mut writer, args.indent)?;
            writer.flush().map_err(|e| SinkError::Io {
                path: path.clone(),
                source: e,
            })?;
            tracing::info!("[+] Done writing JSON to {}", path);
        }
        None => {
            let stdout = std::io::stdout();
            write_json(&record, stdout.lock(), args.indent)?;
        }
    }

    tracing::info!("[!] Done parsing device {}", target.device_name);
    Ok(())
}
