use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The four conditions every analysis reports on, in the order the
/// result list is rendered. Serialized as the human-readable names the
/// result cards display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Condition {
    #[serde(rename = "Diabetic Retinopathy")]
    DiabeticRetinopathy,
    #[serde(rename = "Macular Degeneration")]
    MacularDegeneration,
    #[serde(rename = "Glaucoma")]
    Glaucoma,
    #[serde(rename = "Hypertensive Retinopathy")]
    HypertensiveRetinopathy,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Normal,
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl Default for RiskLevel {
    fn default() -> Self {
        RiskLevel::Low
    }
}

/// One per-condition result row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub condition: Condition,
    /// Percentage in [0, 100].
    pub confidence: f64,
    pub severity: Severity,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RecordStatus {
    Pending,
    Analyzing,
    Complete,
}

/// What the frontend sends when the user picks files.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUpload {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// An uploaded image owned by a session. The raw bytes never travel back
/// across the command boundary; snapshots carry name and size only.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageHandle {
    pub name: String,
    pub size_bytes: u64,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl ImageHandle {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            size_bytes: bytes.len() as u64,
            bytes,
        }
    }
}

impl From<ImageUpload> for ImageHandle {
    fn from(upload: ImageUpload) -> Self {
        ImageHandle::new(upload.name, upload.bytes)
    }
}

/// Everything the generators produce for one completed analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub findings: Vec<Finding>,
    pub overall_risk: RiskLevel,
    pub metrics: ClassificationMetrics,
}

/// Per-image analysis state bundle.
///
/// Lifecycle: created Pending, moves to Analyzing when a run picks it up,
/// then to Complete exactly once. It never moves backwards; findings stay
/// empty and metrics absent until completion.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub id: String,
    pub image: ImageHandle,
    pub status: RecordStatus,
    pub findings: Vec<Finding>,
    pub overall_risk: RiskLevel,
    pub metrics: Option<ClassificationMetrics>,
    pub added_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl AnalysisRecord {
    pub fn new(image: ImageHandle) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            image,
            status: RecordStatus::Pending,
            findings: Vec::new(),
            overall_risk: RiskLevel::default(),
            metrics: None,
            added_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Pending -> Analyzing. Ignored from any other status.
    pub fn begin_analysis(&mut self) {
        if self.status == RecordStatus::Pending {
            self.status = RecordStatus::Analyzing;
        }
    }

    /// Analyzing -> Complete, populating findings, risk and metrics.
    /// A record that is not mid-analysis keeps its current state, so a
    /// completion can never regress or double-apply.
    pub fn complete(&mut self, outcome: AnalysisOutcome) {
        if self.status != RecordStatus::Analyzing {
            return;
        }
        self.findings = outcome.findings;
        self.overall_risk = outcome.overall_risk;
        self.metrics = Some(outcome.metrics);
        self.status = RecordStatus::Complete;
        self.completed_at = Some(Utc::now());
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> AnalysisRecord {
        AnalysisRecord::new(ImageHandle::new("fundus.png", vec![0u8; 16]))
    }

    fn outcome() -> AnalysisOutcome {
        AnalysisOutcome {
            findings: vec![Finding {
                condition: Condition::Glaucoma,
                confidence: 8.0,
                severity: Severity::Normal,
                description: "ok".into(),
            }],
            overall_risk: RiskLevel::Medium,
            metrics: ClassificationMetrics {
                accuracy: 94.5,
                precision: 92.3,
                recall: 89.7,
                f1_score: 90.9,
            },
        }
    }

    #[test]
    fn new_record_is_pending_and_empty() {
        let rec = record();
        assert_eq!(rec.status, RecordStatus::Pending);
        assert!(rec.findings.is_empty());
        assert!(rec.metrics.is_none());
        assert_eq!(rec.image.size_bytes, 16);
    }

    #[test]
    fn complete_requires_analyzing() {
        let mut rec = record();
        rec.complete(outcome());
        assert_eq!(rec.status, RecordStatus::Pending);
        assert!(rec.findings.is_empty());

        rec.begin_analysis();
        rec.complete(outcome());
        assert_eq!(rec.status, RecordStatus::Complete);
        assert_eq!(rec.findings.len(), 1);
        assert!(rec.metrics.is_some());
        assert!(rec.completed_at.is_some());
    }

    #[test]
    fn record_serializes_with_frontend_field_names() {
        let mut rec = record();
        rec.begin_analysis();
        rec.complete(outcome());

        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["status"], "complete");
        assert_eq!(value["overallRisk"], "medium");
        assert_eq!(value["metrics"]["f1Score"], 90.9);
        assert_eq!(value["findings"][0]["condition"], "Glaucoma");
        // Raw bytes stay inside the session; only metadata goes out.
        assert_eq!(value["image"]["sizeBytes"], 16);
        assert!(value["image"].get("bytes").is_none());
    }

    #[test]
    fn status_never_regresses() {
        let mut rec = record();
        rec.begin_analysis();
        rec.complete(outcome());
        let completed_at = rec.completed_at;

        rec.begin_analysis();
        assert_eq!(rec.status, RecordStatus::Complete);
        rec.complete(outcome());
        assert_eq!(rec.completed_at, completed_at);
    }
}
