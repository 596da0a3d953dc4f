use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Unsupported output format for '{0}' (expected .csv, .xls or .xlsx).")]
    UnsupportedFormat(String),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error writing {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to read existing workbook {path}: {message}")]
    WorkbookRead { path: String, message: String },

    #[error("Failed to write workbook {path}: {source}")]
    WorkbookWrite {
        path: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
