use std::{io, path::PathBuf};

use crate::config::FAILURE_EXIT_CODE;

#[derive(Debug, thiserror::Error)]
pub enum AppendError {
    #[error("failed opening '{}' for append", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed writing to '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AppendError {
    /// Line printed on stdout, without the trailing newline.
    pub fn console_message(&self) -> &'static str {
        match self {
            AppendError::Open { .. } => "error",
            AppendError::Write { .. } => "cannot write",
        }
    }

    /// Process exit status for this failure.
    pub fn exit_status(&self) -> u8 {
        FAILURE_EXIT_CODE
    }

    /// Underlying OS error, for logs.
    pub fn io_error(&self) -> &io::Error {
        match self {
            AppendError::Open { source, .. } | AppendError::Write { source, .. } => source,
        }
    }
}
