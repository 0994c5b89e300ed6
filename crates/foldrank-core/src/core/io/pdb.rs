use crate::core::io::traits::StructureFile;
use crate::core::models::structure::ConfidenceRecord;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: PdbParseErrorKind },
    #[error("No confidence values found in structure")]
    NoConfidenceValues,
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Line is too short for ATOM/HETATM record (must be at least 66 chars)")]
    LineTooShort,
}

const MIN_COORDINATE_RECORD_LEN: usize = 66;

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

/// Reader for the PDB payloads produced by the structure prediction service.
///
/// Only `ATOM` and `HETATM` records are consumed; the predicted confidence is read
/// from the temperature-factor field (columns 61-66). Every other record type is skipped.
pub struct PdbFile;

impl StructureFile for PdbFile {
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<ConfidenceRecord>, Self::Error> {
        let mut records = Vec::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            let record_type = slice_and_trim(&line, 0, 6);
            if record_type != "ATOM" && record_type != "HETATM" {
                continue;
            }

            if line.trim_end().len() < MIN_COORDINATE_RECORD_LEN {
                return Err(PdbError::Parse {
                    line: line_num,
                    kind: PdbParseErrorKind::LineTooShort,
                });
            }

            let chain_id_str = slice_and_trim(&line, 21, 22);
            // resSeq and iCode (columns 23-27), kept verbatim as the residue key.
            let residue_id = slice_and_trim(&line, 22, 27);
            let plddt_str = slice_and_trim(&line, 60, 66);

            let plddt: f64 = plddt_str
                .parse()
                .ok()
                .filter(|v: &f64| v.is_finite())
                .ok_or_else(|| PdbError::Parse {
                    line: line_num,
                    kind: PdbParseErrorKind::InvalidFloat {
                        columns: "61-66".into(),
                        value: plddt_str.into(),
                    },
                })?;

            records.push(ConfidenceRecord {
                chain_id: chain_id_str.chars().next().unwrap_or('A'),
                residue_id: residue_id.to_string(),
                plddt,
            });
        }

        Ok(records)
    }
}
