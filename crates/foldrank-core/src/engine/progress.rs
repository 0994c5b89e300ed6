use crate::core::models::structure::PredictionOrigin;

/// Events emitted while a name list is being ranked.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    PhaseStart {
        name: &'static str,
    },
    PhaseFinish,

    /// Scoring begins; one [`Progress::EntryScored`] follows per name.
    ScoringStart {
        total_names: u64,
    },
    EntryScored {
        name: String,
        score: f64,
        residues: usize,
        origin: PredictionOrigin,
    },
    ScoringFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards [`Progress`] events to an optional callback; a reporter without one drops them.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    pub fn message(&self, text: impl Into<String>) {
        if self.callback.is_some() {
            self.report(Progress::Message(text.into()));
        }
    }
}
