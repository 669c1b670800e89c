use rand::Rng;

use crate::analysis::types::{
    AnalysisOutcome, ClassificationMetrics, Condition, Finding, RiskLevel, Severity,
};

/// Seeds are drawn uniformly from [-SEED_RANGE, SEED_RANGE].
pub const SEED_RANGE: f64 = 10.0;

const DR_BASELINE: f64 = 85.0;
const MD_BASELINE: f64 = 12.0;
const GLAUCOMA_BASELINE: f64 = 8.0;
const HR_BASELINE: f64 = 23.0;

const ACCURACY_BASELINE: f64 = 94.5;
const PRECISION_BASELINE: f64 = 92.3;
const RECALL_BASELINE: f64 = 89.7;
const F1_BASELINE: f64 = 90.9;

const METRIC_MIN: f64 = 85.0;
const METRIC_MAX: f64 = 98.0;
const METRIC_SEED_WEIGHT: f64 = 0.3;

/// Source of per-image perturbation seeds. Injected so tests can drive the
/// pipeline with a deterministic sequence.
pub trait SeedSource: Send + Sync {
    fn next_seed(&self) -> f64;
}

/// Production source: one independent uniform draw per image.
pub struct UniformSeedSource;

impl SeedSource for UniformSeedSource {
    fn next_seed(&self) -> f64 {
        rand::thread_rng().gen_range(-SEED_RANGE..=SEED_RANGE)
    }
}

/// Test source that replays a fixed queue of seeds, then repeats the last one.
#[cfg(test)]
pub struct FixedSeedSource {
    seeds: std::sync::Mutex<std::collections::VecDeque<f64>>,
    last: std::sync::Mutex<f64>,
}

#[cfg(test)]
impl FixedSeedSource {
    pub fn new(seeds: impl IntoIterator<Item = f64>) -> Self {
        Self {
            seeds: std::sync::Mutex::new(seeds.into_iter().collect()),
            last: std::sync::Mutex::new(0.0),
        }
    }
}

#[cfg(test)]
impl SeedSource for FixedSeedSource {
    fn next_seed(&self) -> f64 {
        match self.seeds.lock().unwrap().pop_front() {
            Some(seed) => {
                *self.last.lock().unwrap() = seed;
                seed
            }
            None => *self.last.lock().unwrap(),
        }
    }
}

/// Generate the four findings for one batch item, perturbed by `seed`.
/// Order is fixed; every confidence is clamped into [0, 100].
pub fn generate_findings(seed: f64) -> Vec<Finding> {
    let dr_severity = if seed > 5.0 {
        Severity::Moderate
    } else if seed > -5.0 {
        Severity::Mild
    } else {
        Severity::Normal
    };

    vec![
        Finding {
            condition: Condition::DiabeticRetinopathy,
            confidence: (DR_BASELINE + seed).clamp(0.0, 100.0),
            severity: dr_severity,
            description: "Signs of diabetic retinopathy detected. Monitoring recommended."
                .to_string(),
        },
        Finding {
            condition: Condition::MacularDegeneration,
            confidence: (MD_BASELINE + seed).clamp(0.0, 100.0),
            severity: Severity::Normal,
            description: "No significant signs of age-related macular degeneration observed."
                .to_string(),
        },
        Finding {
            condition: Condition::Glaucoma,
            confidence: (GLAUCOMA_BASELINE + seed).clamp(0.0, 100.0),
            severity: Severity::Normal,
            description: "Optic nerve appears healthy with no signs of glaucomatous damage."
                .to_string(),
        },
        Finding {
            condition: Condition::HypertensiveRetinopathy,
            confidence: (HR_BASELINE + seed).clamp(0.0, 100.0),
            severity: Severity::Normal,
            description: "Blood vessels appear normal with no signs of hypertensive changes."
                .to_string(),
        },
    ]
}

/// Overall risk label for a batch item.
pub fn overall_risk(seed: f64) -> RiskLevel {
    if seed > 8.0 {
        RiskLevel::High
    } else if seed > 0.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Classification metrics for a batch item, clamped into [85, 98].
pub fn generate_metrics(seed: f64) -> ClassificationMetrics {
    let jitter = seed * METRIC_SEED_WEIGHT;
    ClassificationMetrics {
        accuracy: (ACCURACY_BASELINE + jitter).clamp(METRIC_MIN, METRIC_MAX),
        precision: (PRECISION_BASELINE + jitter).clamp(METRIC_MIN, METRIC_MAX),
        recall: (RECALL_BASELINE + jitter).clamp(METRIC_MIN, METRIC_MAX),
        f1_score: (F1_BASELINE + jitter).clamp(METRIC_MIN, METRIC_MAX),
    }
}

pub fn analyze_with_seed(seed: f64) -> AnalysisOutcome {
    AnalysisOutcome {
        findings: generate_findings(seed),
        overall_risk: overall_risk(seed),
        metrics: generate_metrics(seed),
    }
}

/// Fixed findings for the single-image flow: no perturbation, diabetic
/// retinopathy reported mild at 85, everything else at baseline.
pub fn baseline_findings() -> Vec<Finding> {
    vec![
        Finding {
            condition: Condition::DiabeticRetinopathy,
            confidence: DR_BASELINE,
            severity: Severity::Mild,
            description:
                "Mild signs of diabetic retinopathy detected. Early intervention and monitoring recommended."
                    .to_string(),
        },
        Finding {
            condition: Condition::MacularDegeneration,
            confidence: MD_BASELINE,
            severity: Severity::Normal,
            description: "No significant signs of age-related macular degeneration observed."
                .to_string(),
        },
        Finding {
            condition: Condition::Glaucoma,
            confidence: GLAUCOMA_BASELINE,
            severity: Severity::Normal,
            description: "Optic nerve appears healthy with no signs of glaucomatous damage."
                .to_string(),
        },
        Finding {
            condition: Condition::HypertensiveRetinopathy,
            confidence: HR_BASELINE,
            severity: Severity::Normal,
            description: "Blood vessels appear normal with no signs of hypertensive changes."
                .to_string(),
        },
    ]
}

/// Fixed metrics for the single-image flow, exactly the baselines.
pub fn baseline_metrics() -> ClassificationMetrics {
    ClassificationMetrics {
        accuracy: ACCURACY_BASELINE,
        precision: PRECISION_BASELINE,
        recall: RECALL_BASELINE,
        f1_score: F1_BASELINE,
    }
}

pub fn baseline_outcome() -> AnalysisOutcome {
    AnalysisOutcome {
        findings: baseline_findings(),
        overall_risk: RiskLevel::Low,
        metrics: baseline_metrics(),
    }
}
