use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("Row has {found} cells but the header has {expected} columns.")]
    RowWidth { expected: usize, found: usize },
}
