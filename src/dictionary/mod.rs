mod data;
pub mod commands;

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DiseaseSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// One reference entry in the eye-disease dictionary. The content is a
/// fixed educational dataset compiled into the binary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub severity: DiseaseSeverity,
    pub description: &'static str,
    pub symptoms: &'static [&'static str],
    pub causes: &'static [&'static str],
    pub treatment: &'static [&'static str],
    pub prevention: &'static [&'static str],
}

pub fn all() -> &'static [DiseaseEntry] {
    &data::DISEASES
}

/// Case-insensitive substring search over name, category and description.
/// A blank query returns the whole dictionary.
pub fn search(query: &str) -> Vec<&'static DiseaseEntry> {
    let needle = query.trim().to_lowercase();
    all()
        .iter()
        .filter(|disease| {
            needle.is_empty()
                || disease.name.to_lowercase().contains(&needle)
                || disease.category.to_lowercase().contains(&needle)
                || disease.description.to_lowercase().contains(&needle)
        })
        .collect()
}
