use super::args::ConvertArgs;
use super::parse::parse_document;
use super::{Target, build_registry, sink_options};
use crate::config::Settings;
use crate::engine::CommandParser;
use crate::error::Cli2XlsError;
use crate::input::{self, Document};
use crate::sink::{self, Destination};
use crate::strategy::StrategyRegistry;
use crate::table::Table;

/// Parse one CLI document and flatten the result.
pub fn convert_document(
    document: &Document,
    target: &Target,
    engine: &dyn CommandParser,
    registry: &StrategyRegistry,
) -> Result<Table, Cli2XlsError> {
    let record = parse_document(document, target, engine)?;
    Ok(registry.flatten(&target.os, &target.parser, &record)?)
}

pub fn run(
    args: &ConvertArgs,
    settings: &Settings,
    engine: &dyn CommandParser,
) -> Result<(), Cli2XlsError> {
    let options = sink_options(settings)?;
    let document = input::read_cli_document(&args.input.infile)?;
    let target = Target::resolve(
        &document.name,
        &args.engine,
        &settings.defaults.os,
        &settings.defaults.cli_parser,
        &settings.defaults.device_name,
    );

    let outfile = args
        .output
        .outfile
        .clone()
        .unwrap_or_else(|| format!("{}.xlsx", target.device_name));
    let destination = Destination::from_outfile(Some(&outfile))?;

    let registry = build_registry(&args.flatten, settings);
    let table = convert_document(&document, &target, engine, &registry)?;

    sink::write_table(&table, &destination, &target.parser, options)?;
    tracing::info!("[!] Done converting device {}", target.device_name);
    Ok(())
}
