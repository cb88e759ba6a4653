use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid invocation.\nError: No flags found.")]
    MissingFlagsMarker,

    #[error("Invalid invocation.\nError: No source files flag \"-s\" found.")]
    MissingSourcesMarker,

    #[error("Invalid invocation.\nError: Executable name must not be empty.")]
    EmptyExecutableName,

    #[error("Unable to create makefile:\n{} already exists in this directory.", .path.display())]
    AlreadyExists { path: PathBuf },

    #[error("FATAL ERROR:\nUnable to create makefile:\n{} could not be created.", .path.display())]
    Create { path: PathBuf, source: io::Error },

    #[error("FATAL ERROR:\nUnable to write makefile:\n{} could not be written.", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl Error {
    /// Malformed invocations are followed by the usage text.
    pub fn shows_usage(&self) -> bool {
        matches!(self, Self::MissingFlagsMarker | Self::MissingSourcesMarker | Self::EmptyExecutableName)
    }
}
