pub mod commands;

use serde::Serialize;

use crate::analysis::types::ClassificationMetrics;

/// Accuracy and sample count for one disease class in the demo dataset.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseasePerformance {
    pub disease: &'static str,
    pub accuracy: f64,
    pub samples: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenderShare {
    pub gender: &'static str,
    pub percent: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpochStat {
    pub epoch: u32,
    pub accuracy: f64,
    pub loss: f64,
}

/// Canned model-evaluation report backing the classification charts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelReport {
    pub overall: ClassificationMetrics,
    pub disease_performance: Vec<DiseasePerformance>,
    pub gender_distribution: Vec<GenderShare>,
    pub training_history: Vec<EpochStat>,
}

pub fn model_report() -> ModelReport {
    ModelReport {
        overall: ClassificationMetrics {
            accuracy: 94.2,
            precision: 92.8,
            recall: 93.5,
            f1_score: 93.1,
        },
        disease_performance: vec![
            DiseasePerformance { disease: "Normal", accuracy: 96.5, samples: 450 },
            DiseasePerformance { disease: "Diabetic Retinopathy", accuracy: 93.2, samples: 380 },
            DiseasePerformance { disease: "Glaucoma", accuracy: 91.8, samples: 320 },
            DiseasePerformance { disease: "Cataract", accuracy: 94.7, samples: 290 },
            DiseasePerformance { disease: "AMD", accuracy: 89.3, samples: 210 },
        ],
        gender_distribution: vec![
            GenderShare { gender: "Male", percent: 52 },
            GenderShare { gender: "Female", percent: 48 },
        ],
        training_history: vec![
            EpochStat { epoch: 1, accuracy: 65.2, loss: 0.85 },
            EpochStat { epoch: 5, accuracy: 78.5, loss: 0.62 },
            EpochStat { epoch: 10, accuracy: 86.3, loss: 0.42 },
            EpochStat { epoch: 15, accuracy: 91.2, loss: 0.28 },
            EpochStat { epoch: 20, accuracy: 94.2, loss: 0.18 },
        ],
    }
}
