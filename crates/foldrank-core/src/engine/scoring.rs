use crate::core::io::pdb::PdbError;
use crate::core::models::structure::StructurePrediction;
use crate::engine::error::EngineError;

/// Arithmetic mean of `values`, or `None` when there are none.
pub fn mean_confidence(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0_f64, 0_usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Reduces a prediction to its mean pLDDT over every coordinate record.
///
/// Averaging keeps names of different lengths comparable.
///
/// # Errors
///
/// Returns [`EngineError::MalformedStructure`] if the prediction holds no confidence
/// values, which also catches cached payloads from a truncated or failed download.
pub fn score(prediction: &StructurePrediction) -> Result<f64, EngineError> {
    mean_confidence(prediction.plddt_values()).ok_or_else(|| EngineError::MalformedStructure {
        sequence: prediction.sequence.to_string(),
        source: PdbError::NoConfidenceValues,
    })
}
