pub mod ai_provider;
pub mod text_extractor;
