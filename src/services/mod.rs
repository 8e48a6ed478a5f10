// src/services/mod.rs
pub mod analysis_service;
pub mod catalog;
pub mod colors;
pub mod furniture;
pub mod image_processor;
pub mod random;
pub mod room_classifier;
pub mod room_model;
pub mod suggestions;

pub use analysis_service::AnalysisService;
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use suggestions::CatalogGenerator;
