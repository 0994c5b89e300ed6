use crate::core::io::pdb::PdbFile;
use crate::core::io::traits::StructureFile;
use crate::core::models::structure::{PredictionOrigin, StructurePrediction};
use crate::core::sequence::Sequence;
use crate::engine::cache::StructureStore;
use crate::engine::error::EngineError;
use crate::engine::provider::PredictionProvider;
use tracing::{debug, info};

/// Cache-first access to structure predictions.
///
/// The store is passed into every call rather than owned, so the same client can be
/// pointed at the on-disk cache in production and an in-memory store in tests.
#[derive(Debug, Clone)]
pub struct StructureClient<P> {
    provider: P,
}

impl<P: PredictionProvider> StructureClient<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    #[cfg(test)]
    pub(crate) fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns the prediction for `sequence`, querying the provider only on a cache miss.
    ///
    /// On a miss the provider's payload is saved to `store` before it is parsed, so a
    /// payload that later fails to parse is still cached and can be inspected.
    ///
    /// # Errors
    ///
    /// * [`EngineError::PredictionService`] if the provider fails; nothing is cached.
    /// * [`EngineError::Cache`] if the store cannot be read or written.
    /// * [`EngineError::MalformedStructure`] if the payload is not a readable PDB file.
    pub async fn predict<S: StructureStore>(
        &self,
        sequence: &Sequence,
        store: &mut S,
    ) -> Result<StructurePrediction, EngineError> {
        let (payload, origin) = match store.load(sequence)? {
            Some(bytes) => {
                debug!("Cache hit for sequence {}", sequence);
                (bytes, PredictionOrigin::Cache)
            }
            None => {
                info!("Cache miss; folding sequence {}", sequence);
                let bytes = self.provider.fold(sequence).await.map_err(|source| {
                    EngineError::PredictionService {
                        sequence: sequence.to_string(),
                        source,
                    }
                })?;
                store.save(sequence, &bytes)?;
                (bytes, PredictionOrigin::Service)
            }
        };

        let records =
            PdbFile::read_from_bytes(&payload).map_err(|source| EngineError::MalformedStructure {
                sequence: sequence.to_string(),
                source,
            })?;

        Ok(StructurePrediction::new(sequence.clone(), origin, records))
    }
}
