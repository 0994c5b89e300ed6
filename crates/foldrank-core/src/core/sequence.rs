use phf::{Set, phf_set};
use sha2::{Digest, Sha256};
use std::fmt;
use thiserror::Error;

/// Number of times a filtered name is repeated when no other value is configured.
pub const DEFAULT_COPIES: usize = 10;

// The 20 standard residues. Ambiguity and rare codes (B, J, O, U, X, Z) are excluded.
static CANONICAL_AMINO_ACIDS: Set<char> = phf_set! {
    'A', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W', 'Y',
};

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SequenceError {
    #[error("Name '{name}' contains no canonical amino-acid letters")]
    NoCanonicalResidues { name: String },
    #[error("Name '{name}' cannot be encoded with zero copies")]
    ZeroCopies { name: String },
}

/// An amplified amino-acid sequence derived from a name.
///
/// A `Sequence` is never empty and only ever contains uppercase one-letter codes
/// of the 20 canonical amino acids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sequence(String);

impl Sequence {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Lowercase hex SHA-256 of the sequence; the content address used by structure stores.
    pub fn digest(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        format!("{:x}", digest)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Returns `true` if `code` is the uppercase one-letter code of a canonical amino acid.
pub fn is_canonical(code: char) -> bool {
    CANONICAL_AMINO_ACIDS.contains(&code)
}

/// Uppercases `name` and keeps only canonical amino-acid letters.
///
/// Uppercasing happens before filtering, so `m` and `M` both map to methionine.
/// Anything that is not a canonical letter after uppercasing is dropped.
pub fn filter_name(name: &str) -> String {
    name.chars()
        .flat_map(char::to_uppercase)
        .filter(|c| is_canonical(*c))
        .collect()
}

/// Encodes a name as an amino-acid sequence repeated `copies` times.
///
/// # Arguments
///
/// * `name` - The raw name, as read from the input list.
/// * `copies` - How many times the filtered name is concatenated with itself.
///
/// # Errors
///
/// Returns [`SequenceError`] if the filtered name is empty or `copies` is zero, since
/// neither can be folded.
pub fn encode(name: &str, copies: usize) -> Result<Sequence, SequenceError> {
    let filtered = filter_name(name);
    if filtered.is_empty() {
        return Err(SequenceError::NoCanonicalResidues {
            name: name.to_string(),
        });
    }
    if copies == 0 {
        return Err(SequenceError::ZeroCopies {
            name: name.to_string(),
        });
    }
    Ok(Sequence(filtered.repeat(copies)))
}
