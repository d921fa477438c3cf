pub mod ai;
pub mod analysis_request;
pub mod analysis_session;
pub mod cli;
pub mod config;
pub mod credentials;
pub mod execution_outcome;
pub mod generation_request;
pub mod ocr;
pub mod parse_error;
pub mod parsed_analysis;
pub mod source_input;
