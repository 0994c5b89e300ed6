use crate::core::sequence::{Sequence, encode};
use crate::engine::cache::{DiskStore, StructureStore};
use crate::engine::client::StructureClient;
use crate::engine::config::RankingConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::provider::{EsmFoldProvider, OfflineProvider, PredictionProvider};
use crate::engine::ranking::{Ranking, RankedEntry, rank};
use crate::engine::scoring::score;
use tracing::{debug, info, instrument};

/// Ranks `names` using the cache directory and prediction service described by `config`.
///
/// With `config.offline` set, predictions are only ever read from the cache.
pub async fn run_with_config(
    names: &[String],
    config: &RankingConfig,
    reporter: &ProgressReporter<'_>,
) -> Result<Ranking, EngineError> {
    let mut store = DiskStore::open(&config.cache_dir)?;

    if config.offline {
        info!("Offline mode: predictions will be read from {:?} only.", store.root());
        reporter.message(format!(
            "Offline mode: reading structures from {} only",
            store.root().display()
        ));
        let client = StructureClient::new(OfflineProvider);
        run(names, config.copies, &client, &mut store, reporter).await
    } else {
        let provider = EsmFoldProvider::new(&config.service).map_err(|e| {
            EngineError::Initialization(format!("could not build prediction client: {}", e))
        })?;
        let client = StructureClient::new(provider);
        run(names, config.copies, &client, &mut store, reporter).await
    }
}

/// Runs the ordering pipeline over `names`.
///
/// Every name is encoded before any prediction is requested, so an unusable name aborts
/// the run without touching the service. Names are then scored one at a time, in input
/// order. Any failure aborts the whole run: a ranking with missing names is never returned.
///
/// # Errors
///
/// Returns [`EngineError::NoNames`] for an empty list; otherwise the first failure,
/// wrapped in [`EngineError::Entry`] to identify the offending name.
#[instrument(skip_all, name = "ordering_workflow", fields(names = names.len(), copies = copies))]
pub async fn run<P, S>(
    names: &[String],
    copies: usize,
    client: &StructureClient<P>,
    store: &mut S,
    reporter: &ProgressReporter<'_>,
) -> Result<Ranking, EngineError>
where
    P: PredictionProvider,
    S: StructureStore,
{
    if names.is_empty() {
        return Err(EngineError::NoNames);
    }

    // === Phase 1: Encode every name ===
    reporter.report(Progress::PhaseStart { name: "Encoding" });
    let sequences = names
        .iter()
        .map(|name| encode(name, copies).map_err(|e| EngineError::from(e).for_name(name)))
        .collect::<Result<Vec<Sequence>, _>>()?;
    reporter.report(Progress::PhaseFinish);
    debug!("Encoded {} names with {} copies each.", names.len(), copies);

    // === Phase 2: Predict and score, one name at a time ===
    reporter.report(Progress::ScoringStart {
        total_names: names.len() as u64,
    });
    let mut entries = Vec::with_capacity(names.len());
    for (name, sequence) in names.iter().zip(&sequences) {
        let prediction = client
            .predict(sequence, store)
            .await
            .map_err(|e| e.for_name(name))?;
        let value = score(&prediction).map_err(|e| e.for_name(name))?;

        let residues = prediction.residue_count();
        info!(
            "Scored '{}': {:.6} over {} residues ({:?})",
            name, value, residues, prediction.origin
        );
        reporter.report(Progress::EntryScored {
            name: name.clone(),
            score: value,
            residues,
            origin: prediction.origin,
        });
        entries.push(RankedEntry::new(name.clone(), value));
    }
    reporter.report(Progress::ScoringFinish);

    // === Phase 3: Rank ===
    let ranking = rank(entries);
    info!("Ranked {} names.", ranking.len());
    Ok(ranking)
}
