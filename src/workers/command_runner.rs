use std::path::{Path, PathBuf};
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::analysis_mode::AnalysisMode;
use crate::enums::code_template::CodeTemplate;
use crate::enums::commands::Commands;
use crate::enums::language::Language;
use crate::enums::response_format::ResponseFormat;
use crate::errors::{DebuggerError, DebuggerResult, ErrorHandler};
use crate::logger::analysis_report_logger::AnalysisReportLogger;
use crate::logger::animated_logger::AnimatedLogger;
use crate::services::code_analyzer::CodeAnalyzer;
use crate::services::execution_probe::{find_program, ExecutionProbe};
use crate::services::ocr::vision::VisionOcr;
use crate::services::source_loader::SourceLoader;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_session::AnalysisSession;
use crate::structs::config::config::Config;
use crate::structs::credentials::Credentials;
use crate::structs::generation_request::GenerationRequest;
use crate::structs::source_input::SourceInput;
use crate::traits::text_extractor::TextExtractor;

pub struct AnalyzeOptions {
    pub files: Vec<PathBuf>,
    pub language: Option<String>,
    pub mode: Option<AnalysisMode>,
    pub format: Option<ResponseFormat>,
    pub template: Option<CodeTemplate>,
    pub execute: bool,
    pub json: bool,
}

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> DebuggerResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Analyze { files, language, mode, format, template, execute, json } => {
                self.analyze_command(AnalyzeOptions { files, language, mode, format, template, execute, json }).await
            }
            Commands::Generate { description, language, template } => {
                self.generate_command(description, language, template).await
            }
            Commands::Docs { file, language } => self.docs_command(&file, language).await,
            Commands::Ocr { image } => self.ocr_command(&image).await,
            Commands::Run { file, language } => self.run_file_command(&file, language).await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> DebuggerResult<()> {
        log::info!("🚀 Initializing aidebugger configuration...");

        match ConfigManager::create_sample_config(self.config_path.as_deref()) {
            Ok(path) => {
                log::info!("✅ Configuration file created at {}", path.display());
                log::info!("🔑 Export GEMINI_API_KEY (and Google credentials for OCR) before analyzing.");
                log::info!("🔧 Run 'aidebugger validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    fn load_config(&self) -> DebuggerResult<Config> {
        let config = ConfigManager::load(self.config_path.as_deref())
            .inspect_err(|_| log::error!("💡 Run 'aidebugger init' to create a configuration file."))?;

        if let Err(problems) = ConfigManager::validate_config(&config) {
            return Err(DebuggerError::config_error(
                &problems.join("; "),
                None,
                Some("Fix the listed values in your config file"),
            ));
        }

        Ok(config)
    }

    fn validate_command(&self) -> DebuggerResult<()> {
        log::info!("🔍 Validating aidebugger configuration...");

        let config = ConfigManager::load(self.config_path.as_deref())?;
        log::info!("✅ Configuration file loaded successfully");

        let mut issues = Vec::new();
        let mut warnings = Vec::new();

        if let Err(problems) = ConfigManager::validate_config(&config) {
            issues.extend(problems);
        }

        match ConfigManager::credentials(&config) {
            Ok(credentials) => {
                if !credentials.has_model_api_key() {
                    issues.push(format!("{} is not set: analyze, generate and docs will refuse to run", config.ai.api_key_env));
                }
                if !credentials.has_vision() {
                    warnings.push("No Google Vision credentials: image inputs cannot be read".to_string());
                }
            }
            Err(e) => issues.push(e.user_message()),
        }

        if config.execution.sandbox_wrapper.is_empty() {
            warnings.push("execution.sandbox_wrapper is empty: executed snippets are only resource-limited".to_string());
        }

        for program in [
            &config.execution.python_command,
            &config.execution.node_command,
            &config.execution.javac_command,
            &config.execution.java_command,
        ] {
            if find_program(program).is_none() {
                warnings.push(format!("'{}' not found on PATH: that language cannot be executed", program));
            }
        }

        if issues.is_empty() && warnings.is_empty() {
            log::info!("✅ Configuration is valid - no issues found");
            return Ok(());
        }

        if !warnings.is_empty() {
            log::info!("⚠️ Warnings:");
            for warning in &warnings {
                log::info!("   - {}", warning);
            }
        }

        if issues.is_empty() {
            log::info!("✅ Configuration is valid");
            return Ok(());
        }

        log::info!("❌ Issues found:");
        for issue in &issues {
            log::info!("   - {}", issue);
        }

        Err(DebuggerError::config_error(
            &format!("{} configuration issue(s) found", issues.len()),
            None,
            Some("Fix the issues above and run 'aidebugger validate' again"),
        ))
    }

    async fn analyze_command(&self, options: AnalyzeOptions) -> DebuggerResult<()> {
        let mut config = self.load_config()?;
        if let Some(format) = options.format {
            config.analysis.response_format = format;
        }
        if options.execute {
            config.analysis.execute_code = true;
        }

        let credentials = ConfigManager::credentials(&config)?;
        let analyzer = CodeAnalyzer::with_gemini(&config, &credentials)?;

        let sources = options
            .files
            .iter()
            .map(|path| SourceLoader::load(path))
            .collect::<DebuggerResult<Vec<_>>>()?;

        let ocr = if sources.iter().any(|s| matches!(s, SourceInput::Image { .. })) {
            Some(Self::vision_ocr(&config, &credentials)?)
        } else {
            None
        };

        let language_override = options.language.as_deref().map(Language::from_name);
        let mode = options.mode.unwrap_or(config.analysis.default_mode);
        let mut session = AnalysisSession::new();

        log::info!("🔍 Analyzing {} input(s) in {} mode...", sources.len(), mode);

        for source in sources {
            let origin = source.origin();
            let (code, detected) = match source {
                SourceInput::Code { text, language, .. } => (text, language),
                SourceInput::Image { bytes, .. } => match &ocr {
                    Some(ocr) => match Self::extract_text(ocr, &bytes).await {
                        Ok(text) => (text, Language::AutoDetect),
                        Err(e) => {
                            ErrorHandler::handle_error(&e);
                            continue;
                        }
                    },
                    None => continue,
                },
            };

            let language = language_override.clone().unwrap_or(detected);
            let request = match AnalysisRequest::new(code, language, mode) {
                Ok(request) => request.with_template(options.template),
                Err(e) => {
                    log::error!("❌ Skipping {}: {}", origin, e);
                    continue;
                }
            };

            let mut spinner = AnimatedLogger::new(format!("Analyzing {}", origin));
            spinner.start();
            let analysis = analyzer.analyze(&mut session, &request).await;
            match &analysis.error {
                Some(error) => spinner.error(error).await,
                None => spinner.stop("Analysis complete").await,
            }

            let language = request.language().resolve(&config.analysis.default_language);
            if options.json {
                let report = serde_json::json!({
                    "origin": origin,
                    "language": language,
                    "mode": mode,
                    "analysis": analysis,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                AnalysisReportLogger::print_analysis_report(&origin, &language, &analysis);
            }
        }

        log::info!("📜 {} analysis(es) recorded this session", session.history().len());
        Ok(())
    }

    async fn generate_command(&self, description: String, language: String, template: Option<CodeTemplate>) -> DebuggerResult<()> {
        let config = self.load_config()?;
        let credentials = ConfigManager::credentials(&config)?;
        let analyzer = CodeAnalyzer::with_gemini(&config, &credentials)?;
        let request = GenerationRequest::new(description, language, template)?;

        let mut spinner = AnimatedLogger::new("Generating code");
        spinner.start();
        match analyzer.generate_code(&request).await {
            Ok(code) => {
                spinner.stop("Code generated").await;
                AnalysisReportLogger::print_generated(&format!("🧩 GENERATED {} CODE", request.language.to_uppercase()), &code);
                Ok(())
            }
            Err(e) => {
                spinner.error("Code generation failed").await;
                Err(e)
            }
        }
    }

    async fn docs_command(&self, file: &Path, language: Option<String>) -> DebuggerResult<()> {
        let config = self.load_config()?;
        let credentials = ConfigManager::credentials(&config)?;
        let analyzer = CodeAnalyzer::with_gemini(&config, &credentials)?;

        let (code, detected) = Self::load_code(file)?;
        let language = language
            .map(|name| Language::from_name(&name))
            .unwrap_or(detected)
            .resolve(&config.analysis.default_language);

        let mut spinner = AnimatedLogger::new("Generating API documentation");
        spinner.start();
        match analyzer.generate_api_docs(&code, &language).await {
            Ok(docs) => {
                spinner.stop("Documentation generated").await;
                AnalysisReportLogger::print_generated("📚 API DOCUMENTATION", &docs);
                Ok(())
            }
            Err(e) => {
                spinner.error("Documentation generation failed").await;
                Err(e)
            }
        }
    }

    async fn ocr_command(&self, image: &Path) -> DebuggerResult<()> {
        let config = self.load_config()?;
        let credentials = ConfigManager::credentials(&config)?;
        let ocr = Self::vision_ocr(&config, &credentials)?;

        let bytes = match SourceLoader::load(image)? {
            SourceInput::Image { bytes, .. } => bytes,
            SourceInput::Code { origin, .. } => {
                return Err(DebuggerError::input_error(&origin, "a .png, .jpg or .jpeg image", "Pass an image file to 'aidebugger ocr'"));
            }
        };

        let text = Self::extract_text(&ocr, &bytes).await?;
        AnalysisReportLogger::print_generated("🖼️ EXTRACTED TEXT", &text);
        Ok(())
    }

    async fn run_file_command(&self, file: &Path, language: Option<String>) -> DebuggerResult<()> {
        let config = self.load_config()?;
        let (code, detected) = Self::load_code(file)?;
        let language = language.map(|name| Language::from_name(&name)).unwrap_or(detected);
        let execution_language = language.execution_language(&config.analysis.default_language);

        if !execution_language.is_supported() {
            return Err(DebuggerError::execution_error(
                &language.resolve(&config.analysis.default_language),
                "only python, javascript and java can be executed",
            ));
        }

        let probe = ExecutionProbe::new(config.execution.clone());
        let outcome = probe.execute(&code, execution_language).await;
        AnalysisReportLogger::print_execution_outcome(&file.display().to_string(), &outcome);
        Ok(())
    }

    fn load_code(file: &Path) -> DebuggerResult<(String, Language)> {
        match SourceLoader::load(file)? {
            SourceInput::Code { text, language, .. } => Ok((text, language)),
            SourceInput::Image { path, .. } => Err(DebuggerError::input_error(
                &path.display().to_string(),
                "a source file",
                "Run 'aidebugger ocr' on images first",
            )),
        }
    }

    fn vision_ocr(config: &Config, credentials: &Credentials) -> DebuggerResult<VisionOcr> {
        let vision_credentials = credentials.require_vision()?;
        Ok(VisionOcr::new(vision_credentials, &config.ocr)?)
    }

    async fn extract_text(ocr: &VisionOcr, bytes: &[u8]) -> DebuggerResult<String> {
        let mut spinner = AnimatedLogger::new("Reading code from image");
        spinner.start();
        match ocr.extract_text(bytes).await {
            Ok(text) => {
                spinner.stop("Text extracted").await;
                Ok(text)
            }
            Err(e) => {
                spinner.error(&e.to_string()).await;
                Err(e.into())
            }
        }
    }
}
