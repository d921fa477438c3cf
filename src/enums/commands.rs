use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::analysis_mode::AnalysisMode;
use crate::enums::code_template::CodeTemplate;
use crate::enums::response_format::ResponseFormat;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Check configuration and credentials
    Validate,
    /// Review source files (or images of code) with the model
    Analyze {
        /// Source files or images; `-` reads code from stdin
        #[clap(required = true)]
        files: Vec<PathBuf>,
        #[clap(short, long)]
        language: Option<String>,
        #[clap(short, long, value_enum)]
        mode: Option<AnalysisMode>,
        #[clap(short, long, value_enum)]
        format: Option<ResponseFormat>,
        #[clap(short, long, value_enum)]
        template: Option<CodeTemplate>,
        /// Run the snippet in the sandbox before asking the model
        #[clap(short, long)]
        execute: bool,
        /// Print the parsed analysis as JSON
        #[clap(long)]
        json: bool,
    },
    /// Generate code from a description
    Generate {
        description: String,
        #[clap(short, long, default_value = "python")]
        language: String,
        #[clap(short, long, value_enum)]
        template: Option<CodeTemplate>,
    },
    /// Generate OpenAPI documentation for a source file
    Docs {
        file: PathBuf,
        #[clap(short, long)]
        language: Option<String>,
    },
    /// Extract code text from an image
    Ocr {
        image: PathBuf,
    },
    /// Run a source file in the execution sandbox
    Run {
        file: PathBuf,
        #[clap(short, long)]
        language: Option<String>,
    },
}
