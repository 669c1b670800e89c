pub mod commands;
pub mod controller;
pub mod state;

pub use controller::{TrainingController, TrainingSnapshot};
pub use state::{TrainingConfig, TrainingStatus};
