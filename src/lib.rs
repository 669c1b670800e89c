mod analysis;
mod dictionary;
mod report;
mod sample;
mod training;

use std::sync::Arc;

use analysis::{
    commands::{
        add_batch_images, clear_batch_images, clear_single_image, get_batch_state,
        get_single_state, remove_batch_image, select_single_image, start_batch_analysis,
        start_single_analysis, use_sample_image,
    },
    AnalysisConfig, BatchAnalysisController, SingleAnalysisController, UniformSeedSource,
};
use dictionary::commands::search_diseases;
use report::commands::get_classification_report;
use sample::{BundledSample, SampleImageProvider};
use tauri::Manager;
use training::{
    commands::{
        add_training_images, get_training_state, label_training_image, set_training_config,
        start_training, stop_training,
    },
    TrainingController,
};

pub(crate) struct AppState {
    pub(crate) single: SingleAnalysisController,
    pub(crate) batch: BatchAnalysisController,
    pub(crate) training: TrainingController,
    pub(crate) sample: Arc<dyn SampleImageProvider>,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("retscan starting up...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let config = AnalysisConfig::default();
            let handle = app.handle().clone();

            app.manage(AppState {
                single: SingleAnalysisController::new(handle.clone(), &config),
                batch: BatchAnalysisController::new(
                    handle.clone(),
                    &config,
                    Arc::new(UniformSeedSource),
                ),
                training: TrainingController::new(handle),
                sample: Arc::new(BundledSample),
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Single-image analysis
            get_single_state,
            select_single_image,
            clear_single_image,
            start_single_analysis,
            // Batch analysis
            get_batch_state,
            add_batch_images,
            remove_batch_image,
            clear_batch_images,
            start_batch_analysis,
            use_sample_image,
            // Model training simulation
            get_training_state,
            add_training_images,
            label_training_image,
            set_training_config,
            start_training,
            stop_training,
            // Reference data
            search_diseases,
            get_classification_report,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application")
}
