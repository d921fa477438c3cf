pub mod ai_providers;
pub mod code_analyzer;
pub mod execution_probe;
pub mod ocr;
pub mod response_cache;
pub mod response_parser;
pub mod source_loader;
