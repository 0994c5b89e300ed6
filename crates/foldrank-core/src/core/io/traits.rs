use crate::core::models::structure::ConfidenceRecord;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading confidence records out of a structure file format.
///
/// Implementors handle format-specific parsing; the default methods add the
/// path and in-memory entry points on top of [`StructureFile::read_from`].
pub trait StructureFile {
    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads every confidence-annotated coordinate record from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<ConfidenceRecord>, Self::Error>;

    /// Reads confidence records from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ConfidenceRecord>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Reads confidence records from a raw payload, such as a service response body.
    fn read_from_bytes(bytes: &[u8]) -> Result<Vec<ConfidenceRecord>, Self::Error> {
        let mut reader = bytes;
        Self::read_from(&mut reader)
    }
}
