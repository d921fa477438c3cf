pub mod analysis_mode;
pub mod code_template;
pub mod commands;
pub mod execution_language;
pub mod execution_status;
pub mod invocation_error;
pub mod language;
pub mod ocr_error;
pub mod response_format;
pub mod safety_policy;
