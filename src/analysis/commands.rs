use serde::Deserialize;
use tauri::State;

use crate::{
    analysis::{
        batch::BatchSnapshot,
        single::SingleSnapshot,
        types::{ImageHandle, ImageUpload},
    },
    AppState,
};

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnalysisMode {
    Single,
    Batch,
}

#[tauri::command]
pub async fn get_batch_state(state: State<'_, AppState>) -> Result<BatchSnapshot, String> {
    Ok(state.batch.snapshot().await)
}

#[tauri::command]
pub async fn add_batch_images(
    state: State<'_, AppState>,
    images: Vec<ImageUpload>,
) -> Result<BatchSnapshot, String> {
    let handles: Vec<ImageHandle> = images.into_iter().map(ImageHandle::from).collect();
    state
        .batch
        .add_images(handles)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn remove_batch_image(
    state: State<'_, AppState>,
    index: usize,
) -> Result<BatchSnapshot, String> {
    Ok(state.batch.remove_image(index).await)
}

#[tauri::command]
pub async fn clear_batch_images(state: State<'_, AppState>) -> Result<BatchSnapshot, String> {
    Ok(state.batch.clear().await)
}

#[tauri::command]
pub async fn start_batch_analysis(state: State<'_, AppState>) -> Result<BatchSnapshot, String> {
    Ok(state.batch.start_analysis().await)
}

#[tauri::command]
pub async fn get_single_state(state: State<'_, AppState>) -> Result<SingleSnapshot, String> {
    Ok(state.single.snapshot().await)
}

#[tauri::command]
pub async fn select_single_image(
    state: State<'_, AppState>,
    image: ImageUpload,
) -> Result<SingleSnapshot, String> {
    Ok(state.single.select_image(image.into()).await)
}

#[tauri::command]
pub async fn clear_single_image(state: State<'_, AppState>) -> Result<SingleSnapshot, String> {
    Ok(state.single.clear().await)
}

#[tauri::command]
pub async fn start_single_analysis(state: State<'_, AppState>) -> Result<SingleSnapshot, String> {
    Ok(state.single.start_analysis().await)
}

/// Feed the bundled sample fundus image into the selected session.
#[tauri::command]
pub async fn use_sample_image(
    state: State<'_, AppState>,
    mode: AnalysisMode,
) -> Result<(), String> {
    let image = state.sample.sample();
    match mode {
        AnalysisMode::Single => {
            state.single.select_image(image).await;
        }
        AnalysisMode::Batch => {
            state
                .batch
                .add_images(vec![image])
                .await
                .map_err(|e| e.to_string())?;
        }
    }
    Ok(())
}
