//! Compose Records use case
//!
//! Looks up an animal, then a machine, and merges both into one record.
//! The machine lookup is only started once the animal lookup has succeeded;
//! the first failure ends the run.

use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::record_source::{AnimalSource, MachineSource};
use flow_domain::{Animal, AsyncResult, Combined, FetchError, Machine, Step};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Merge function applied to both successful lookups
pub type Combiner = dyn Fn(&Animal, &Machine) -> Combined + Send + Sync;

/// Use case for composing an animal and a machine record
pub struct ComposeRecordsUseCase<A: AnimalSource + 'static, M: MachineSource + 'static> {
    animals: Arc<A>,
    machines: Arc<M>,
    combiner: Arc<Combiner>,
}

impl<A: AnimalSource + 'static, M: MachineSource + 'static> ComposeRecordsUseCase<A, M> {
    pub fn new(animals: Arc<A>, machines: Arc<M>) -> Self {
        Self {
            animals,
            machines,
            combiner: Arc::new(Combined::merge),
        }
    }

    /// Replace the default [`Combined::merge`]. The combiner must be total.
    pub fn with_combiner<F>(mut self, combiner: F) -> Self
    where
        F: Fn(&Animal, &Machine) -> Combined + Send + Sync + 'static,
    {
        self.combiner = Arc::new(combiner);
        self
    }

    /// Build the composed computation without running it
    pub fn compose(&self) -> AsyncResult<FetchError, Combined> {
        self.compose_with_progress(Arc::new(NoProgress))
    }

    /// Build the composed computation, reporting each step as it runs
    pub fn compose_with_progress(
        &self,
        progress: Arc<dyn ProgressNotifier>,
    ) -> AsyncResult<FetchError, Combined> {
        let machines = Arc::clone(&self.machines);
        let combiner = Arc::clone(&self.combiner);
        let chain_progress = Arc::clone(&progress);

        observe(Step::FetchAnimal, self.animals.fetch_animal(), &progress).chain(
            move |animal| {
                debug!("Animal fetched: {:?}", animal);
                let combiner = Arc::clone(&combiner);
                let progress = Arc::clone(&chain_progress);

                observe(Step::FetchMachine, machines.fetch_machine(), &progress).map(
                    move |machine| {
                        debug!("Machine fetched: {:?}", machine);
                        progress.on_step_start(Step::Combine);
                        let combined = combiner(&animal, &machine);
                        progress.on_step_complete(Step::Combine, true);
                        combined
                    },
                )
            },
        )
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self) -> Result<Combined, FetchError> {
        self.execute_with_progress(Arc::new(NoProgress)).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        progress: Arc<dyn ProgressNotifier>,
    ) -> Result<Combined, FetchError> {
        info!("Composing animal and machine records");

        let outcome = self
            .compose_with_progress(Arc::clone(&progress))
            .execute()
            .await;

        match &outcome {
            Ok(combined) => info!("Records combined: {}", combined),
            Err(e) => warn!("Composition failed: {}", e),
        }
        progress.on_finished(outcome.is_ok());

        outcome
    }
}

/// Wrap a lookup so that its start and completion are reported as `step`
fn observe<T: Send + 'static>(
    step: Step,
    lookup: AsyncResult<FetchError, T>,
    progress: &Arc<dyn ProgressNotifier>,
) -> AsyncResult<FetchError, T> {
    let on_start = Arc::clone(progress);
    let on_complete = Arc::clone(progress);

    AsyncResult::new(move || {
        info!("Step started: {}", step);
        on_start.on_step_start(step);
        lookup.execute()
    })
    .inspect(move |outcome| on_complete.on_step_complete(step, outcome.is_ok()))
}
