use crate::engine::error::EngineError;
use std::cmp::Ordering;

/// Number of decimal places used for scores in the tabular rendering.
pub const SCORE_PRECISION: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub name: String,
    pub score: f64,
}

impl RankedEntry {
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Entries ordered by score, highest first.
///
/// Both renderings are produced from this one ordered list, so they always agree,
/// including on the order of tied scores.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ranking {
    entries: Vec<RankedEntry>,
}

/// Sorts entries by score, descending.
///
/// The sort is stable: entries with equal scores keep their input order. No secondary
/// key is applied.
pub fn rank(mut entries: Vec<RankedEntry>) -> Ranking {
    entries.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    Ranking { entries }
}

impl Ranking {
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// One name per line, in rank order.
    pub fn render_names(&self) -> String {
        let mut out = String::new();
        for name in self.names() {
            out.push_str(name);
            out.push('\n');
        }
        out
    }

    /// One `name<TAB>score` row per line, in rank order, without a header.
    pub fn render_table(&self) -> Result<String, EngineError> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .from_writer(Vec::new());
        for entry in &self.entries {
            let score = format!("{:.*}", SCORE_PRECISION, entry.score);
            writer.write_record([entry.name.as_str(), score.as_str()])?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
