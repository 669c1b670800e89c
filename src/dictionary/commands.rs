use super::DiseaseEntry;

#[tauri::command]
pub fn search_diseases(query: Option<String>) -> Vec<DiseaseEntry> {
    super::search(query.as_deref().unwrap_or(""))
        .into_iter()
        .cloned()
        .collect()
}
