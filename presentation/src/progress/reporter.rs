//! Progress reporting for record composition

use colored::Colorize;
use flow_application::ProgressNotifier;
use flow_domain::Step;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with one spinner per step (drawn on stderr)
pub struct ProgressReporter {
    multi: MultiProgress,
    bars: Mutex<HashMap<Step, ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            bars: Mutex::new(HashMap::new()),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_step_start(&self, step: Step) {
        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(Self::spinner_style());
        pb.set_prefix(step.display_name());
        pb.set_message("running...");
        pb.enable_steady_tick(Duration::from_millis(80));

        if let Ok(mut bars) = self.bars.lock() {
            bars.insert(step, pb);
        }
    }

    fn on_step_complete(&self, step: Step, success: bool) {
        let Some(pb) = self.bars.lock().ok().and_then(|mut bars| bars.remove(&step)) else {
            return;
        };
        if success {
            pb.finish_with_message(format!("{}", "done".green()));
        } else {
            pb.finish_with_message(format!("{}", "failed".red()));
        }
    }

    fn on_finished(&self, _success: bool) {
        if let Ok(mut bars) = self.bars.lock() {
            for (_, pb) in bars.drain() {
                pb.finish_and_clear();
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_step_start(&self, step: Step) {
        eprintln!("{} {}", "->".cyan(), step.display_name().bold());
    }

    fn on_step_complete(&self, step: Step, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), step);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), step);
        }
    }
}
