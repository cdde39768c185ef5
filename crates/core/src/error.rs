use std::io;

use crate::types::Label;

/// Errors that can occur while generating IDE info for a target graph
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("dependency cycle involving {0}")]
    DependencyCycle(Label),

    #[error("{target} depends on {dependency}, which is not in the graph")]
    UnknownDependency { target: Label, dependency: Label },

    #[error("duplicate target {0}")]
    DuplicateTarget(Label),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("text serialization error: {0}")]
    TextEncodeError(#[from] serde_json::Error),

    #[error("binary serialization error: {0}")]
    BinaryEncodeError(#[from] rmp_serde::encode::Error),
}

/// Result type alias for idegen operations
pub type Result<T> = std::result::Result<T, Error>;
