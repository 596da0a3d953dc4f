use thiserror::Error;

use crate::table::errors::TableError;

#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("Strategy '{strategy}' expected {expected}.")]
    UnexpectedShape {
        strategy: &'static str,
        expected: String,
    },

    #[error(transparent)]
    Table(#[from] TableError),
}
