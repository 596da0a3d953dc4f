use std::path::PathBuf;
use std::time::Instant;

use serde_json::Value;

use super::args::BatchArgs;
use super::convert::convert_document;
use super::stats::{BatchStats, FileStat};
use super::{Target, build_registry, sink_options};
use crate::config::{Defaults, Settings};
use crate::engine::CommandParser;
use crate::engine::args::EngineArgs;
use crate::error::Cli2XlsError;
use crate::input;
use crate::sink::{self, Destination};
use crate::strategy::StrategyRegistry;
use crate::table::Table;
use crate::visuals;

pub const DEVICE_COLUMN: &str = "DEVICE";

#[derive(Debug)]
pub struct BatchOutcome {
    pub table: Table,
    pub sheet_name: String,
    pub stats: BatchStats,
}

fn process_file(
    name: &str,
    target: &Target,
    engine: &dyn CommandParser,
    registry: &StrategyRegistry,
) -> Result<Table, Cli2XlsError> {
    let document = input::read_cli_document(name)?;
    let mut table = convert_document(&document, target, engine, registry)?;
    table.prepend_column(DEVICE_COLUMN, Value::String(target.device_name.clone()));
    Ok(table)
}

/// Convert every file and merge the tables by column name. Files that fail
/// are logged and skipped; it is an error only when none succeed.
pub fn batch_tables(
    files: &[PathBuf],
    engine_args: &EngineArgs,
    defaults: &Defaults,
    engine: &dyn CommandParser,
    registry: &StrategyRegistry,
) -> Result<BatchOutcome, Cli2XlsError> {
    let start = Instant::now();
    let mut stats = BatchStats::new();
    let mut merged = Table::default();
    let mut sheet_name = engine_args.parser.clone();

    for path in files {
        let name = path.to_string_lossy().into_owned();
        let target = Target::resolve(
            &name,
            engine_args,
            &defaults.batch_os,
            &defaults.cli_parser,
            &defaults.device_name,
        );

        match process_file(&name, &target, engine, registry) {
            Ok(table) => {
                let rows = table.len();
                if sheet_name.is_none() {
                    sheet_name = Some(target.parser.clone());
                }
                merged.merge(table);
                stats.add_file(FileStat {
                    file: name,
                    device_name: target.device_name,
                    parser: target.parser,
                    rows,
                    error: None,
                });
            }
            Err(e) => {
                let e = Cli2XlsError::in_file(&name, e);
                tracing::warn!("[!] Skipping file: {}", e);
                stats.add_file(FileStat {
                    file: name,
                    device_name: target.device_name,
                    parser: target.parser,
                    rows: 0,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    stats.total_duration = start.elapsed();

    if stats.files_processed == 0 {
        return Err(Cli2XlsError::NothingProcessed(stats.files_seen));
    }

    Ok(BatchOutcome {
        table: merged,
        sheet_name: sheet_name.unwrap_or_default(),
        stats,
    })
}

pub fn run(
    args: &BatchArgs,
    settings: &Settings,
    engine: &dyn CommandParser,
) -> Result<(), Cli2XlsError> {
    let destination = Destination::from_outfile(Some(&args.outfile))?;
    let options = sink_options(settings)?;
    let files = input::expand_glob(&args.pattern)?;
    tracing::info!("[+] {} file(s) match '{}'", files.len(), args.pattern);

    let registry = build_registry(&args.flatten, settings);
    let outcome = batch_tables(
        &files,
        &args.engine,
        &settings.defaults,
        engine,
        &registry,
    )?;

    sink::write_table(&outcome.table, &destination, &outcome.sheet_name, options)?;

    if args.stats {
        visuals::print_summary(&outcome.stats);
        visuals::print_detailed(&outcome.stats);
    } else {
        tracing::info!(
            "[!] Done: {} of {} file(s) processed, {} row(s)",
            outcome.stats.files_processed,
            outcome.stats.files_seen,
            outcome.stats.total_rows
        );
    }
    Ok(())
}
