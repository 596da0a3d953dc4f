use thiserror::Error;

use crate::config::errors::ConfigError;
use crate::engine::errors::EngineError;
use crate::input::errors::InputError;
use crate::sink::errors::SinkError;
use crate::strategy::errors::StrategyError;

#[derive(Debug, Error)]
pub enum Cli2XlsError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Strategy(#[from] StrategyError),

    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error("While processing '{file}': {source}")]
    InFile {
        file: String,
        #[source]
        source: Box<Cli2XlsError>,
    },

    #[error("None of the {0} input files could be processed.")]
    NothingProcessed(usize),
}

impl Cli2XlsError {
    pub fn in_file(file: &str, source: Cli2XlsError) -> Self {
        Cli2XlsError::InFile {
            file: file.to_string(),
            source: Box::new(source),
        }
    }
}
