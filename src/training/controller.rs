use std::{sync::Arc, time::Duration};

use anyhow::Result;
use log::info;
use serde::Serialize;
use tauri::{AppHandle, Emitter};
use tokio::{sync::Mutex, task::JoinHandle, time};

use crate::analysis::types::ImageUpload;

use super::state::{DiseaseLabel, Gender, TrainingConfig, TrainingImage, TrainingState, TrainingStatus};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSnapshot {
    pub status: TrainingStatus,
    pub progress: u8,
    pub images: Vec<TrainingImage>,
    pub config: TrainingConfig,
    pub unlabeled: usize,
}

#[derive(Clone)]
pub struct TrainingController {
    state: Arc<Mutex<TrainingState>>,
    ticker: Arc<Mutex<Option<JoinHandle<()>>>>,
    tick_interval: Duration,
    app_handle: AppHandle,
}

impl TrainingController {
    pub fn new(app_handle: AppHandle) -> Self {
        Self {
            state: Arc::new(Mutex::new(TrainingState::new())),
            ticker: Arc::new(Mutex::new(None)),
            tick_interval: Duration::from_millis(500),
            app_handle,
        }
    }

    pub async fn snapshot(&self) -> TrainingSnapshot {
        snapshot_of(&*self.state.lock().await)
    }

    pub async fn add_images(&self, uploads: Vec<ImageUpload>) -> Result<TrainingSnapshot> {
        let mut state = self.state.lock().await;
        let count = state.add_images(uploads)?;
        info!("added {count} image(s) to the training set");
        emit_training_state(&self.app_handle, &state);
        Ok(snapshot_of(&state))
    }

    pub async fn label_image(
        &self,
        index: usize,
        disease_label: Option<DiseaseLabel>,
        gender: Option<Gender>,
    ) -> TrainingSnapshot {
        let mut state = self.state.lock().await;
        state.label_image(index, disease_label, gender);
        emit_training_state(&self.app_handle, &state);
        snapshot_of(&state)
    }

    pub async fn set_config(&self, config: TrainingConfig) -> Result<TrainingSnapshot> {
        let mut state = self.state.lock().await;
        state.set_config(config)?;
        emit_training_state(&self.app_handle, &state);
        Ok(snapshot_of(&state))
    }

    /// Validate the dataset and start the simulated run.
    pub async fn start_training(&self) -> Result<TrainingSnapshot> {
        {
            let mut state = self.state.lock().await;
            state.start()?;
            info!(
                "training started on {} image(s), {} epochs",
                state.images.len(),
                state.config.epochs
            );
            emit_training_state(&self.app_handle, &state);
        }

        self.spawn_ticker().await;
        Ok(self.snapshot().await)
    }

    /// Interrupt the run and reset the progress bar.
    pub async fn stop_training(&self) -> TrainingSnapshot {
        self.cancel_ticker().await;
        let mut state = self.state.lock().await;
        state.stop();
        info!("training stopped");
        emit_training_state(&self.app_handle, &state);
        snapshot_of(&state)
    }

    async fn spawn_ticker(&self) {
        let mut ticker_guard = self.ticker.lock().await;
        if let Some(handle) = ticker_guard.take() {
            handle.abort();
        }

        let state = Arc::clone(&self.state);
        let app_handle = self.app_handle.clone();
        let tick_interval = self.tick_interval;

        let handle = tokio::spawn(async move {
            let mut interval = time::interval(tick_interval);
            // The first tick fires immediately; skip it so progress starts
            // moving one full interval after the start command returns.
            interval.tick().await;
            loop {
                interval.tick().await;

                let mut guard = state.lock().await;
                let done = guard.advance();
                emit_training_state(&app_handle, &guard);
                if done {
                    if guard.status == TrainingStatus::Complete {
                        info!("training complete");
                    }
                    break;
                }
            }
        });

        *ticker_guard = Some(handle);
    }

    async fn cancel_ticker(&self) {
        if let Some(handle) = self.ticker.lock().await.take() {
            handle.abort();
        }
    }
}

fn snapshot_of(state: &TrainingState) -> TrainingSnapshot {
    TrainingSnapshot {
        status: state.status,
        progress: state.progress,
        images: state.images.clone(),
        config: state.config,
        unlabeled: state.unlabeled_count(),
    }
}

fn emit_training_state(app_handle: &AppHandle, state: &TrainingState) {
    let _ = app_handle.emit("training-progress", snapshot_of(state));
}
