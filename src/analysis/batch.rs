use std::{sync::Arc, time::Duration};

use anyhow::{anyhow, Result};
use log::info;
use serde::Serialize;
use tauri::{AppHandle, Emitter};
use tokio::{sync::Mutex, task::JoinHandle, time};

use crate::analysis::{
    config::AnalysisConfig,
    generator::{self, SeedSource},
    image_set::ImageSet,
    types::{AnalysisRecord, ImageHandle},
};

/// Shared state of the batch flow.
///
/// `run_generation` is bumped whenever a run starts or the set is cleared;
/// a worker that observes a generation other than its own is stale and must
/// exit without touching anything. That, plus id-based record addressing,
/// is what makes remove and clear safe while a run is in flight.
#[derive(Debug, Default)]
pub struct BatchState {
    pub set: ImageSet,
    pub running: bool,
    run_generation: u64,
}

impl BatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append uploads as pending records. Rejected while a run is in
    /// flight: the worker is the only writer during a run.
    pub fn add_images(&mut self, images: Vec<ImageHandle>) -> Result<()> {
        if self.running {
            return Err(anyhow!("batch analysis already in progress"));
        }
        self.set.add(images);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) {
        self.set.remove(index);
    }

    /// Empty the set unconditionally and invalidate any in-flight worker.
    pub fn clear(&mut self) {
        self.set.clear();
        self.running = false;
        self.run_generation += 1;
    }

    /// Move into running if there is anything to do. Returns the new run's
    /// generation, or None when this is a no-op (empty set, nothing
    /// pending, or a run already in flight).
    pub fn begin_run(&mut self) -> Option<u64> {
        if self.running || self.set.next_pending().is_none() {
            return None;
        }
        self.running = true;
        self.run_generation += 1;
        Some(self.run_generation)
    }

    pub fn generation(&self) -> u64 {
        self.run_generation
    }

    pub fn snapshot(&self) -> BatchSnapshot {
        BatchSnapshot {
            records: self.set.records().to_vec(),
            running: self.running,
            pending: self.set.pending_count(),
            completed: self.set.completed_count(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSnapshot {
    pub records: Vec<AnalysisRecord>,
    pub running: bool,
    pub pending: usize,
    pub completed: usize,
}

#[derive(Clone)]
pub struct BatchAnalysisController {
    state: Arc<Mutex<BatchState>>,
    worker: Arc<Mutex<Option<JoinHandle<()>>>>,
    item_delay: Duration,
    seeds: Arc<dyn SeedSource>,
    app_handle: AppHandle,
}

impl BatchAnalysisController {
    pub fn new(app_handle: AppHandle, config: &AnalysisConfig, seeds: Arc<dyn SeedSource>) -> Self {
        Self {
            state: Arc::new(Mutex::new(BatchState::new())),
            worker: Arc::new(Mutex::new(None)),
            item_delay: config.batch_item_delay,
            seeds,
            app_handle,
        }
    }

    pub async fn snapshot(&self) -> BatchSnapshot {
        self.state.lock().await.snapshot()
    }

    pub async fn add_images(&self, images: Vec<ImageHandle>) -> Result<BatchSnapshot> {
        let mut state = self.state.lock().await;
        let count = images.len();
        state.add_images(images)?;
        info!("added {count} image(s) to the batch set");
        emit_batch_state(&self.app_handle, &state);
        Ok(state.snapshot())
    }

    pub async fn remove_image(&self, index: usize) -> BatchSnapshot {
        let mut state = self.state.lock().await;
        state.remove(index);
        emit_batch_state(&self.app_handle, &state);
        state.snapshot()
    }

    pub async fn clear(&self) -> BatchSnapshot {
        self.cancel_worker().await;
        let mut state = self.state.lock().await;
        state.clear();
        emit_batch_state(&self.app_handle, &state);
        state.snapshot()
    }

    /// Process every pending record sequentially, in list order. A no-op
    /// when the set is empty, everything is already complete, or a run is
    /// already in flight.
    pub async fn start_analysis(&self) -> BatchSnapshot {
        let generation = {
            let mut state = self.state.lock().await;
            match state.begin_run() {
                Some(generation) => {
                    info!(
                        "starting batch analysis of {} pending image(s) out of {}",
                        state.set.pending_count(),
                        state.set.len()
                    );
                    emit_batch_state(&self.app_handle, &state);
                    generation
                }
                None => return state.snapshot(),
            }
        };

        let state = Arc::clone(&self.state);
        let seeds = Arc::clone(&self.seeds);
        let app_handle = self.app_handle.clone();
        let handle = tokio::spawn(run_batch(
            state,
            generation,
            self.item_delay,
            seeds,
            move |state| emit_batch_state(&app_handle, state),
        ));

        let mut worker = self.worker.lock().await;
        if let Some(previous) = worker.replace(handle) {
            previous.abort();
        }
        drop(worker);

        self.state.lock().await.snapshot()
    }

    async fn cancel_worker(&self) {
        if let Some(handle) = self.worker.lock().await.take() {
            handle.abort();
        }
    }
}

/// Worker body for one batch run. Strictly sequential: an item is only
/// picked up once the previous one has completed. Each iteration re-checks
/// the run generation under the lock, so a concurrent clear stops the loop
/// at the next step.
pub(crate) async fn run_batch<F>(
    state: Arc<Mutex<BatchState>>,
    generation: u64,
    item_delay: Duration,
    seeds: Arc<dyn SeedSource>,
    notify: F,
) where
    F: Fn(&BatchState) + Send + 'static,
{
    loop {
        let id = {
            let mut guard = state.lock().await;
            if guard.generation() != generation {
                return;
            }
            match guard.set.next_pending() {
                Some(id) => {
                    if let Some(record) = guard.set.record_mut(&id) {
                        record.begin_analysis();
                    }
                    notify(&guard);
                    id
                }
                None => break,
            }
        };

        time::sleep(item_delay).await;
        let outcome = generator::analyze_with_seed(seeds.next_seed());

        let mut guard = state.lock().await;
        if guard.generation() != generation {
            return;
        }
        // A record removed mid-flight simply drops its completion.
        if let Some(record) = guard.set.record_mut(&id) {
            record.complete(outcome);
        }
        notify(&guard);
    }

    let mut guard = state.lock().await;
    if guard.generation() == generation {
        guard.running = false;
        info!(
            "batch analysis finished, {} record(s) complete",
            guard.set.completed_count()
        );
        notify(&guard);
    }
}

fn emit_batch_state(app_handle: &AppHandle, state: &BatchState) {
    let _ = app_handle.emit("batch-analysis-changed", state.snapshot());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::generator::FixedSeedSource;
    use crate::analysis::types::{RecordStatus, RiskLevel};
    use std::sync::Mutex as StdMutex;

    fn handles(n: usize) -> Vec<ImageHandle> {
        (0..n)
            .map(|i| ImageHandle::new(format!("fundus-{i}.png"), vec![0u8; 4]))
            .collect()
    }

    async fn run_to_completion(state: &Arc<Mutex<BatchState>>, seeds: Vec<f64>) {
        let generation = state.lock().await.begin_run().expect("run should start");
        run_batch(
            Arc::clone(state),
            generation,
            Duration::from_millis(1),
            Arc::new(FixedSeedSource::new(seeds)),
            |_| {},
        )
        .await;
    }

    #[tokio::test]
    async fn start_on_empty_set_is_a_no_op() {
        let mut state = BatchState::new();
        assert!(state.begin_run().is_none());
        assert!(!state.running);
        assert_eq!(state.generation(), 0);
    }

    #[tokio::test]
    async fn start_with_nothing_pending_is_a_no_op() {
        let state = Arc::new(Mutex::new(BatchState::new()));
        state.lock().await.add_images(handles(1)).unwrap();
        run_to_completion(&state, vec![0.0]).await;

        let mut guard = state.lock().await;
        assert_eq!(guard.set.completed_count(), 1);
        assert!(guard.begin_run().is_none());
    }

    #[tokio::test]
    async fn add_is_rejected_while_running() {
        let mut state = BatchState::new();
        state.add_images(handles(1)).unwrap();
        state.begin_run().unwrap();
        assert!(state.add_images(handles(1)).is_err());
        assert_eq!(state.set.len(), 1);
    }

    #[tokio::test]
    async fn run_processes_records_sequentially_in_order() {
        let state = Arc::new(Mutex::new(BatchState::new()));
        state.lock().await.add_images(handles(3)).unwrap();

        let observed: Arc<StdMutex<Vec<Vec<RecordStatus>>>> = Arc::default();
        let sink = Arc::clone(&observed);
        let generation = state.lock().await.begin_run().unwrap();
        run_batch(
            Arc::clone(&state),
            generation,
            Duration::from_millis(1),
            Arc::new(FixedSeedSource::new([9.0, 1.0, -3.0])),
            move |state| {
                sink.lock()
                    .unwrap()
                    .push(state.set.records().iter().map(|r| r.status).collect());
            },
        )
        .await;

        // Every snapshot must show a complete prefix, at most one analyzing
        // record, and pending records only after it. Record k+1 never leaves
        // Pending before record k is Complete.
        for statuses in observed.lock().unwrap().iter() {
            let mut past_complete_prefix = false;
            let mut analyzing = 0;
            for status in statuses {
                match status {
                    RecordStatus::Complete => {
                        assert!(!past_complete_prefix, "out-of-order completion: {statuses:?}")
                    }
                    RecordStatus::Analyzing => {
                        past_complete_prefix = true;
                        analyzing += 1;
                    }
                    RecordStatus::Pending => past_complete_prefix = true,
                }
            }
            assert!(analyzing <= 1, "concurrent analysis observed: {statuses:?}");
        }

        let guard = state.lock().await;
        assert!(!guard.running);
        let records = guard.set.records();
        assert_eq!(records.len(), 3);
        for record in records {
            assert_eq!(record.status, RecordStatus::Complete);
            assert_eq!(record.findings.len(), 4);
            assert!(record.metrics.is_some());
        }
        // Risk follows each record's own seed: 9 -> high, 1 -> medium, -3 -> low.
        assert_eq!(records[0].overall_risk, RiskLevel::High);
        assert_eq!(records[1].overall_risk, RiskLevel::Medium);
        assert_eq!(records[2].overall_risk, RiskLevel::Low);
    }

    #[tokio::test]
    async fn rerun_only_processes_newly_added_pending_records() {
        let state = Arc::new(Mutex::new(BatchState::new()));
        state.lock().await.add_images(handles(2)).unwrap();
        run_to_completion(&state, vec![2.0, 2.0]).await;

        let first_completed_at = state.lock().await.set.records()[0].completed_at;

        state.lock().await.add_images(handles(1)).unwrap();
        run_to_completion(&state, vec![-9.0]).await;

        let guard = state.lock().await;
        let records = guard.set.records();
        assert_eq!(guard.set.completed_count(), 3);
        // The earlier results were not recomputed.
        assert_eq!(records[0].completed_at, first_completed_at);
        assert_eq!(records[0].overall_risk, RiskLevel::Medium);
        assert_eq!(records[2].overall_risk, RiskLevel::Low);
    }

    #[tokio::test]
    async fn clear_during_run_empties_the_set_and_stops_the_worker() {
        let state = Arc::new(Mutex::new(BatchState::new()));
        state.lock().await.add_images(handles(3)).unwrap();

        let generation = state.lock().await.begin_run().unwrap();
        let worker = tokio::spawn(run_batch(
            Arc::clone(&state),
            generation,
            Duration::from_millis(20),
            Arc::new(FixedSeedSource::new([0.0])),
            |_| {},
        ));

        time::sleep(Duration::from_millis(5)).await;
        state.lock().await.clear();
        worker.await.unwrap();

        let guard = state.lock().await;
        assert!(guard.set.is_empty());
        assert!(!guard.running);
    }

    #[tokio::test]
    async fn removing_the_in_flight_record_drops_its_completion() {
        let state = Arc::new(Mutex::new(BatchState::new()));
        state.lock().await.add_images(handles(2)).unwrap();

        let generation = state.lock().await.begin_run().unwrap();
        let worker = tokio::spawn(run_batch(
            Arc::clone(&state),
            generation,
            Duration::from_millis(20),
            Arc::new(FixedSeedSource::new([4.0])),
            |_| {},
        ));

        time::sleep(Duration::from_millis(5)).await;
        state.lock().await.remove(0);
        worker.await.unwrap();

        let guard = state.lock().await;
        assert_eq!(guard.set.len(), 1);
        assert_eq!(guard.set.completed_count(), 1);
        assert_eq!(guard.set.records()[0].image.name, "fundus-1.png");
        assert!(!guard.running);
    }
}
