pub mod analysis_report_logger;
pub mod animated_logger;
