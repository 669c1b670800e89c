use anyhow::{anyhow, Result};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::analysis::types::ImageUpload;

/// How much the simulated progress bar moves per tick.
pub const PROGRESS_STEP: u8 = 2;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiseaseLabel {
    Normal,
    DiabeticRetinopathy,
    Glaucoma,
    Cataract,
    Amd,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

/// One uploaded training sample. Only the metadata is kept; the mock
/// trainer never looks at pixels.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingImage {
    pub name: String,
    pub size_bytes: u64,
    pub disease_label: Option<DiseaseLabel>,
    pub gender: Option<Gender>,
}

impl TrainingImage {
    pub fn is_labeled(&self) -> bool {
        self.disease_label.is_some() && self.gender.is_some()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingConfig {
    pub epochs: u32,
    pub batch_size: u32,
    pub learning_rate: f64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            epochs: 10,
            batch_size: 32,
            learning_rate: 0.001,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TrainingStatus {
    Idle,
    Training,
    Complete,
}

#[derive(Debug)]
pub struct TrainingState {
    pub status: TrainingStatus,
    pub progress: u8,
    pub images: Vec<TrainingImage>,
    pub config: TrainingConfig,
}

impl Default for TrainingState {
    fn default() -> Self {
        Self {
            status: TrainingStatus::Idle,
            progress: 0,
            images: Vec::new(),
            config: TrainingConfig::default(),
        }
    }
}

impl TrainingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_images(&mut self, uploads: Vec<ImageUpload>) -> Result<usize> {
        if self.status == TrainingStatus::Training {
            return Err(anyhow!("training already in progress"));
        }
        let count = uploads.len();
        self.images.extend(uploads.into_iter().map(|u| TrainingImage {
            name: u.name,
            size_bytes: u.bytes.len() as u64,
            disease_label: None,
            gender: None,
        }));
        Ok(count)
    }

    /// Update one sample's labels; fields passed as None are left alone.
    /// Out-of-bounds indices are a silent no-op.
    pub fn label_image(
        &mut self,
        index: usize,
        disease_label: Option<DiseaseLabel>,
        gender: Option<Gender>,
    ) {
        match self.images.get_mut(index) {
            Some(image) => {
                if disease_label.is_some() {
                    image.disease_label = disease_label;
                }
                if gender.is_some() {
                    image.gender = gender;
                }
            }
            None => warn!(
                "ignoring label update at index {index}, {} training images held",
                self.images.len()
            ),
        }
    }

    pub fn set_config(&mut self, config: TrainingConfig) -> Result<()> {
        if self.status == TrainingStatus::Training {
            return Err(anyhow!("cannot change configuration during training"));
        }
        self.config = config;
        Ok(())
    }

    pub fn unlabeled_count(&self) -> usize {
        self.images.iter().filter(|img| !img.is_labeled()).count()
    }

    /// Validate the dataset and move into Training at 0%.
    pub fn start(&mut self) -> Result<()> {
        if self.status == TrainingStatus::Training {
            return Err(anyhow!("training already in progress"));
        }
        if self.images.is_empty() {
            return Err(anyhow!("no training data: upload images first"));
        }
        let unlabeled = self.unlabeled_count();
        if unlabeled > 0 {
            return Err(anyhow!("{unlabeled} images need labels"));
        }
        self.status = TrainingStatus::Training;
        self.progress = 0;
        Ok(())
    }

    /// One ticker step. Returns true when the run is over (either finished
    /// or no longer training).
    pub fn advance(&mut self) -> bool {
        if self.status != TrainingStatus::Training {
            return true;
        }
        self.progress = self.progress.saturating_add(PROGRESS_STEP).min(100);
        if self.progress >= 100 {
            self.status = TrainingStatus::Complete;
            return true;
        }
        false
    }

    /// Interrupt the run and reset progress. Uploaded images and their
    /// labels are kept.
    pub fn stop(&mut self) {
        self.status = TrainingStatus::Idle;
        self.progress = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uploads(n: usize) -> Vec<ImageUpload> {
        (0..n)
            .map(|i| ImageUpload {
                name: format!("train-{i}.png"),
                bytes: vec![0u8; 4],
            })
            .collect()
    }

    fn labeled_state(n: usize) -> TrainingState {
        let mut state = TrainingState::new();
        state.add_images(uploads(n)).unwrap();
        for i in 0..n {
            state.label_image(i, Some(DiseaseLabel::Normal), Some(Gender::Female));
        }
        state
    }

    #[test]
    fn start_without_data_fails() {
        let mut state = TrainingState::new();
        let err = state.start().unwrap_err();
        assert!(err.to_string().contains("no training data"));
        assert_eq!(state.status, TrainingStatus::Idle);
    }

    #[test]
    fn start_with_unlabeled_images_reports_the_count() {
        let mut state = TrainingState::new();
        state.add_images(uploads(3)).unwrap();
        state.label_image(0, Some(DiseaseLabel::Glaucoma), Some(Gender::Male));
        // A disease label alone is not enough.
        state.label_image(1, Some(DiseaseLabel::Amd), None);

        let err = state.start().unwrap_err();
        assert_eq!(err.to_string(), "2 images need labels");
    }

    #[test]
    fn label_update_out_of_bounds_is_a_no_op() {
        let mut state = TrainingState::new();
        state.add_images(uploads(1)).unwrap();
        state.label_image(5, Some(DiseaseLabel::Cataract), Some(Gender::Male));
        assert!(!state.images[0].is_labeled());
    }

    #[test]
    fn progress_reaches_completion_in_fifty_steps() {
        let mut state = labeled_state(2);
        state.start().unwrap();
        assert_eq!(state.status, TrainingStatus::Training);

        let mut steps = 0;
        while !state.advance() {
            steps += 1;
            assert!(steps < 100, "training never completed");
        }
        assert_eq!(state.progress, 100);
        assert_eq!(state.status, TrainingStatus::Complete);
        assert_eq!(steps + 1, 50);
    }

    #[test]
    fn stop_resets_progress_but_keeps_the_dataset() {
        let mut state = labeled_state(2);
        state.start().unwrap();
        state.advance();
        assert!(state.progress > 0);

        state.stop();
        assert_eq!(state.status, TrainingStatus::Idle);
        assert_eq!(state.progress, 0);
        assert_eq!(state.images.len(), 2);
        assert!(state.images[0].is_labeled());
    }

    #[test]
    fn mutation_is_rejected_while_training() {
        let mut state = labeled_state(1);
        state.start().unwrap();
        assert!(state.add_images(uploads(1)).is_err());
        assert!(state.set_config(TrainingConfig::default()).is_err());
        assert!(state.start().is_err());
    }
}
