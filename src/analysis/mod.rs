pub mod batch;
pub mod commands;
pub mod config;
pub mod generator;
pub mod image_set;
pub mod single;
pub mod types;

pub use batch::BatchAnalysisController;
pub use config::AnalysisConfig;
pub use generator::UniformSeedSource;
pub use single::SingleAnalysisController;
