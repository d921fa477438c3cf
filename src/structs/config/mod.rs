pub mod ai_config;
pub mod analysis_config;
pub mod config;
pub mod execution_config;
pub mod ocr_config;
