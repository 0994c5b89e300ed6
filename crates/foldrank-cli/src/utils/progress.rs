use foldrank::core::models::structure::PredictionOrigin;
use foldrank::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use std::time::Duration;

const SPINNER_TICK_MS: u64 = 80;

/// Renders workflow progress on stderr with an `indicatif` bar.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: ProgressBar,
}

impl CliProgressHandler {
    pub fn new(visible: bool) -> Self {
        let pb = ProgressBar::new(0)
            .with_style(Self::spinner_style())
            .with_message("Initializing...");
        pb.set_draw_target(if visible {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        });
        pb.finish_and_clear();

        Self { pb }
    }

    pub fn callback(&self) -> ProgressCallback<'static> {
        let pb = self.pb.clone();

        Box::new(move |progress: Progress| match progress {
            Progress::PhaseStart { name } => {
                pb.reset();
                pb.set_length(0);
                pb.set_style(Self::spinner_style());
                pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                pb.set_message(name.to_string());
            }
            Progress::PhaseFinish => {
                pb.disable_steady_tick();
                pb.finish_with_message("✓ Done");
            }
            Progress::ScoringStart { total_names } => {
                pb.disable_steady_tick();
                pb.reset();
                pb.set_length(total_names);
                pb.set_position(0);
                pb.set_style(Self::bar_style());
                pb.set_message("Scoring");
            }
            Progress::EntryScored {
                name,
                score,
                residues,
                origin,
            } => {
                let source = match origin {
                    PredictionOrigin::Cache => "cached",
                    PredictionOrigin::Service => "fetched",
                };
                pb.println(format!(
                    "  {:<32} {:.6} ({} residues, {})",
                    name, score, residues, source
                ));
                pb.inc(1);
            }
            Progress::ScoringFinish => {
                if pb.position() < pb.length().unwrap_or(0) {
                    pb.set_position(pb.length().unwrap_or(0));
                }
                pb.finish();
            }
            Progress::Message(msg) => {
                if !pb.is_finished() {
                    pb.println(format!("  {}", msg));
                } else {
                    pb.set_message(msg);
                }
            }
        })
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .expect("Failed to create spinner style template")
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<12} [{bar:40.cyan/blue}] {pos}/{len} ({secs})")
            .expect("Failed to create bar style template")
            .with_key(
                "secs",
                |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                    let _ = write!(w, "{:.1}s", state.elapsed().as_secs_f64());
                },
            )
            .progress_chars("##-")
    }
}
