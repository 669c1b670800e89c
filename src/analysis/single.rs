use std::{sync::Arc, time::Duration};

use log::info;
use serde::Serialize;
use tauri::{AppHandle, Emitter};
use tokio::{sync::Mutex, task::JoinHandle, time};

use crate::analysis::{
    config::AnalysisConfig,
    generator,
    types::{AnalysisRecord, ImageHandle},
};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SessionStatus {
    Idle,
    Analyzing,
    Complete,
}

/// State machine for the single-image flow: Idle -> Analyzing -> Complete,
/// back to Idle only via clear. Holds at most one record; selecting a new
/// image replaces the previous one.
#[derive(Debug)]
pub struct SingleState {
    pub status: SessionStatus,
    pub record: Option<AnalysisRecord>,
}

impl Default for SingleState {
    fn default() -> Self {
        Self {
            status: SessionStatus::Idle,
            record: None,
        }
    }
}

impl SingleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_image(&mut self, image: ImageHandle) {
        *self = Self {
            status: SessionStatus::Idle,
            record: Some(AnalysisRecord::new(image)),
        };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Try to move into Analyzing. No image held, a run already in flight,
    /// or an already-complete result all leave the state untouched.
    pub fn begin_analysis(&mut self) -> bool {
        if self.status != SessionStatus::Idle {
            return false;
        }
        match self.record.as_mut() {
            Some(record) => {
                record.begin_analysis();
                self.status = SessionStatus::Analyzing;
                true
            }
            None => false,
        }
    }

    /// Apply the fixed baseline result if a run is still in flight. A clear
    /// that raced the worker wins: the late completion is dropped.
    pub fn complete_if_analyzing(&mut self) -> bool {
        if self.status != SessionStatus::Analyzing {
            return false;
        }
        if let Some(record) = self.record.as_mut() {
            record.complete(generator::baseline_outcome());
        }
        self.status = SessionStatus::Complete;
        true
    }

    pub fn snapshot(&self) -> SingleSnapshot {
        SingleSnapshot {
            status: self.status,
            record: self.record.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleSnapshot {
    pub status: SessionStatus,
    pub record: Option<AnalysisRecord>,
}

#[derive(Clone)]
pub struct SingleAnalysisController {
    state: Arc<Mutex<SingleState>>,
    worker: Arc<Mutex<Option<JoinHandle<()>>>>,
    delay: Duration,
    app_handle: AppHandle,
}

impl SingleAnalysisController {
    pub fn new(app_handle: AppHandle, config: &AnalysisConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(SingleState::new())),
            worker: Arc::new(Mutex::new(None)),
            delay: config.single_delay,
            app_handle,
        }
    }

    pub async fn snapshot(&self) -> SingleSnapshot {
        self.state.lock().await.snapshot()
    }

    pub async fn select_image(&self, image: ImageHandle) -> SingleSnapshot {
        self.cancel_worker().await;
        let mut state = self.state.lock().await;
        info!("selected image '{}' for single analysis", image.name);
        state.select_image(image);
        emit_single_state(&self.app_handle, &state);
        state.snapshot()
    }

    /// Forcibly return to Idle, discarding any in-flight record.
    pub async fn clear(&self) -> SingleSnapshot {
        self.cancel_worker().await;
        let mut state = self.state.lock().await;
        state.clear();
        emit_single_state(&self.app_handle, &state);
        state.snapshot()
    }

    /// Kick off the simulated analysis. A no-op when no image is held or a
    /// run is already in flight.
    pub async fn start_analysis(&self) -> SingleSnapshot {
        let started = {
            let mut state = self.state.lock().await;
            let started = state.begin_analysis();
            if started {
                emit_single_state(&self.app_handle, &state);
            }
            started
        };

        if started {
            let state = Arc::clone(&self.state);
            let app_handle = self.app_handle.clone();
            let handle = tokio::spawn(run_single(state, self.delay, move |state| {
                emit_single_state(&app_handle, state);
            }));

            let mut worker = self.worker.lock().await;
            if let Some(previous) = worker.replace(handle) {
                previous.abort();
            }
        }

        self.state.lock().await.snapshot()
    }

    async fn cancel_worker(&self) {
        if let Some(handle) = self.worker.lock().await.take() {
            handle.abort();
        }
    }
}

/// Worker body for one single-image run: wait out the simulated latency,
/// then apply the fixed result unless the session was cleared meanwhile.
pub(crate) async fn run_single<F>(state: Arc<Mutex<SingleState>>, delay: Duration, notify: F)
where
    F: Fn(&SingleState) + Send + 'static,
{
    time::sleep(delay).await;

    let mut guard = state.lock().await;
    if guard.complete_if_analyzing() {
        info!("single analysis complete");
        notify(&guard);
    }
}

fn emit_single_state(app_handle: &AppHandle, state: &SingleState) {
    let _ = app_handle.emit("single-analysis-changed", state.snapshot());
}
