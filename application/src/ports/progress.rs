//! Progress notification port
//!
//! Defines the interface for reporting progress while records are composed.

use flow_domain::Step;

/// Callback for progress updates during composition
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinners, plain lines, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called when a step starts
    fn on_step_start(&self, step: Step);

    /// Called when a step finishes
    fn on_step_complete(&self, step: Step, success: bool);

    /// Called once the whole chain has produced its outcome
    fn on_finished(&self, _success: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_step_start(&self, _step: Step) {}
    fn on_step_complete(&self, _step: Step, _success: bool) {}
}
