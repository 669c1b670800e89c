use tauri::State;

use crate::{
    analysis::types::ImageUpload,
    training::{
        controller::TrainingSnapshot,
        state::{DiseaseLabel, Gender, TrainingConfig},
    },
    AppState,
};

#[tauri::command]
pub async fn get_training_state(state: State<'_, AppState>) -> Result<TrainingSnapshot, String> {
    Ok(state.training.snapshot().await)
}

#[tauri::command]
pub async fn add_training_images(
    state: State<'_, AppState>,
    images: Vec<ImageUpload>,
) -> Result<TrainingSnapshot, String> {
    state
        .training
        .add_images(images)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn label_training_image(
    state: State<'_, AppState>,
    index: usize,
    disease_label: Option<DiseaseLabel>,
    gender: Option<Gender>,
) -> Result<TrainingSnapshot, String> {
    Ok(state.training.label_image(index, disease_label, gender).await)
}

#[tauri::command]
pub async fn set_training_config(
    state: State<'_, AppState>,
    config: TrainingConfig,
) -> Result<TrainingSnapshot, String> {
    state
        .training
        .set_config(config)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn start_training(state: State<'_, AppState>) -> Result<TrainingSnapshot, String> {
    state.training.start_training().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn stop_training(state: State<'_, AppState>) -> Result<TrainingSnapshot, String> {
    Ok(state.training.stop_training().await)
}
