use super::ModelReport;

#[tauri::command]
pub fn get_classification_report() -> ModelReport {
    super::model_report()
}
