use crate::core::io::pdb::PdbError;
use crate::core::sequence::SequenceError;
use crate::engine::provider::ProviderError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Initialization failed: {0}")]
    Initialization(String),

    #[error("Invalid input: {source}")]
    InvalidInput {
        #[from]
        source: SequenceError,
    },

    #[error("Name list contains no names")]
    NoNames,

    #[error("Prediction service failed for sequence {sequence}: {source}")]
    PredictionService {
        sequence: String,
        #[source]
        source: ProviderError,
    },

    #[error("Malformed structure for sequence {sequence}: {source}")]
    MalformedStructure {
        sequence: String,
        #[source]
        source: PdbError,
    },

    #[error("Structure cache I/O failed at {path:?}: {source}")]
    Cache {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to render ranking: {0}")]
    Render(#[from] csv::Error),

    #[error("Failed to process name '{name}': {source}")]
    Entry {
        name: String,
        #[source]
        source: Box<EngineError>,
    },
}

impl EngineError {
    pub(crate) fn for_name(self, name: &str) -> Self {
        EngineError::Entry {
            name: name.to_string(),
            source: Box::new(self),
        }
    }

    /// The innermost error, with any per-name context stripped.
    pub fn root(&self) -> &EngineError {
        match self {
            EngineError::Entry { source, .. } => source.root(),
            other => other,
        }
    }
}
