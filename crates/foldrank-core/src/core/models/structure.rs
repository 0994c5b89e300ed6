use crate::core::sequence::Sequence;
use std::collections::HashSet;

/// One coordinate record of a predicted structure and its confidence annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceRecord {
    pub chain_id: char,     // Chain identifier, 'A' when blank
    pub residue_id: String, // Residue sequence number plus insertion code, as written
    pub plddt: f64,         // Predicted confidence, stored in the B-factor column
}

/// Where a prediction's payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionOrigin {
    Cache,
    Service,
}

/// A predicted structure, bound to the sequence it was folded from.
#[derive(Debug, Clone, PartialEq)]
pub struct StructurePrediction {
    pub sequence: Sequence,
    pub origin: PredictionOrigin,
    records: Vec<ConfidenceRecord>,
}

impl StructurePrediction {
    pub fn new(
        sequence: Sequence,
        origin: PredictionOrigin,
        records: Vec<ConfidenceRecord>,
    ) -> Self {
        Self {
            sequence,
            origin,
            records,
        }
    }

    pub fn records(&self) -> &[ConfidenceRecord] {
        &self.records
    }

    pub fn plddt_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.plddt)
    }

    /// Number of distinct `(chain, residue)` pairs with at least one record.
    pub fn residue_count(&self) -> usize {
        self.records
            .iter()
            .map(|r| (r.chain_id, r.residue_id.as_str()))
            .collect::<HashSet<_>>()
            .len()
    }
}
