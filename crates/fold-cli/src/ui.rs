use hpfold::engine::progress::Progress;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Mutex;

/// Renders engine progress events as an indicatif bar on stderr.
///
/// The engine loop is synchronous, so the view only needs interior
/// mutability for the lazily created bar, not a background task.
pub struct ProgressView {
    bar: Mutex<Option<ProgressBar>>,
    enabled: bool,
}

impl ProgressView {
    pub fn new(enabled: bool) -> Self {
        Self {
            bar: Mutex::new(None),
            enabled,
        }
    }

    pub fn handle(&self, event: Progress) {
        if !self.enabled {
            return;
        }

        let mut bar = self.bar.lock().unwrap();
        match event {
            Progress::TaskStart { total_steps } => {
                let pb = ProgressBar::new(total_steps);
                pb.set_draw_target(ProgressDrawTarget::stderr_with_hz(12));
                pb.set_style(Self::bar_style());
                *bar = Some(pb);
            }
            Progress::TaskIncrement => {
                if let Some(pb) = bar.as_ref() {
                    pb.inc(1);
                }
            }
            Progress::Improvement { energy, .. } => {
                if let Some(pb) = bar.as_ref() {
                    pb.set_message(format!("E = {energy}"));
                }
            }
            Progress::TaskFinish => {
                if let Some(pb) = bar.take() {
                    pb.finish_and_clear();
                }
            }
            Progress::PhaseStart { .. } | Progress::PhaseFinish => {}
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} steps {msg}")
            .expect("progress bar template is valid")
    }
}
