pub mod args;
pub mod batch;
pub mod convert;
pub mod export;
pub mod parse;
pub mod stats;

pub use stats::{BatchStats, FileStat};

use crate::args::{Args, Command};
use crate::config::{self, Settings};
use crate::engine::ProcessParser;
use crate::engine::args::EngineArgs;
use crate::error::Cli2XlsError;
use crate::naming::{device_name_from_filename, parser_from_filename};
use crate::sink::SinkOptions;
use crate::strategy::StrategyRegistry;
use crate::table::args::FlattenArgs;
use crate::table::flatten::FlattenMode;
use crate::visuals;

/// Load settings and dispatch the selected subcommand.
pub fn run(args: &Args) -> Result<(), Cli2XlsError> {
    let settings = config::load_settings(args.config.as_deref())?;

    match &args.command {
        Command::Parse(cmd) => {
            let engine = ProcessParser::new(&settings.engine);
            parse::run(cmd, &settings, &engine)
        }
        Command::Export(cmd) => export::run(cmd, &settings),
        Command::Convert(cmd) => {
            let engine = ProcessParser::new(&settings.engine);
            convert::run(cmd, &settings, &engine)
        }
        Command::Batch(cmd) => {
            let engine = ProcessParser::new(&settings.engine);
            batch::run(cmd, &settings, &engine)
        }
        Command::Strategies => {
            let registry = build_registry(&FlattenArgs::default(), &settings);
            visuals::print_strategies(&registry);
            Ok(())
        }
    }
}

/// Device, OS and parser for one input document. Explicit flags win over
/// what the file name suggests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub device_name: String,
    pub os: String,
    pub parser: String,
}

impl Target {
    pub fn resolve(
        document_name: &str,
        engine: &EngineArgs,
        default_os: &str,
        default_parser: &str,
        default_device: &str,
    ) -> Self {
        let os = engine
            .os
            .clone()
            .unwrap_or_else(|| default_os.to_string());
        let parser = match &engine.parser {
            Some(parser) => parser.clone(),
            None => parser_from_filename(document_name, default_parser, &os),
        };
        let device_name = device_name_from_filename(document_name, default_device);

        Target {
            device_name,
            os,
            parser,
        }
    }
}

pub fn build_registry(flatten: &FlattenArgs, settings: &Settings) -> StrategyRegistry {
    let mode = FlattenMode::from_all_branches(flatten.all_branches || settings.flatten.all_branches);
    StrategyRegistry::builtin(mode)
}

pub fn sink_options(settings: &Settings) -> Result<SinkOptions, Cli2XlsError> {
    Ok(SinkOptions {
        delimiter: settings.csv.delimiter_byte()?,
    })
}
