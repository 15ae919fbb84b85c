//! Terminal probing errors.

/// Errors that can occur while asking the terminal for its size.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal closed input before reporting the cursor position")]
    NoReport,

    #[error("Cursor position report exceeded {limit} bytes without a terminator")]
    ReportTooLong { limit: usize },

    #[error("Malformed cursor position report: {report:?}")]
    MalformedReport { report: String },
}
