use std::sync::Arc;
use crate::enums::response_format::ResponseFormat;
use crate::errors::{DebuggerError, DebuggerResult};
use crate::helpers::prompt_generator::PromptBuilder;
use crate::services::ai_providers::gemini::GeminiProvider;
use crate::services::execution_probe::ExecutionProbe;
use crate::services::response_cache::{CacheKey, ResponseCache};
use crate::services::response_parser::ResponseParser;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_session::AnalysisSession;
use crate::structs::config::config::Config;
use crate::structs::credentials::Credentials;
use crate::structs::execution_outcome::ExecutionOutcome;
use crate::structs::generation_request::GenerationRequest;
use crate::structs::parsed_analysis::ParsedAnalysis;
use crate::traits::ai_provider::AiProvider;

/// The analysis pipeline: optional execution, prompt, cached model call, parse.
pub struct CodeAnalyzer {
    ai_provider: Arc<dyn AiProvider>,
    execution_probe: Option<ExecutionProbe>,
    cache: ResponseCache,
    prompt_builder: PromptBuilder,
    default_language: String,
}

impl CodeAnalyzer {
    pub fn new(ai_provider: Arc<dyn AiProvider>, config: &Config) -> Self {
        let execution_probe = config
            .analysis
            .execute_code
            .then(|| ExecutionProbe::new(config.execution.clone()));

        Self {
            ai_provider,
            execution_probe,
            cache: ResponseCache::new(config.ai.cache_capacity),
            prompt_builder: PromptBuilder::new(config.analysis.response_format, config.analysis.default_language.clone()),
            default_language: config.analysis.default_language.clone(),
        }
    }

    /// Analyzer backed by Gemini. Fails before any request when the API key is missing.
    pub fn with_gemini(config: &Config, credentials: &Credentials) -> DebuggerResult<Self> {
        let api_key = credentials.require_model_api_key()?;
        let provider = GeminiProvider::new(api_key.to_string(), &config.ai)?;
        log::debug!("Using model {}", provider.model_name());
        Ok(Self::new(Arc::new(provider), config))
    }

    pub fn format(&self) -> ResponseFormat {
        self.prompt_builder.format()
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    pub fn executes_code(&self) -> bool {
        self.execution_probe.is_some()
    }

    /// Never fails: model and parse failures come back inside the result.
    pub async fn analyze(&self, session: &mut AnalysisSession, request: &AnalysisRequest) -> ParsedAnalysis {
        let language = self.prompt_builder.resolve_language(request);
        session.set_current_code(request.code());

        let outcome = self.probe(request).await;
        let prompt = match &outcome {
            Some(outcome) => self.prompt_builder.build_with_execution(request, outcome),
            None => self.prompt_builder.build(request),
        };

        let key = CacheKey::new(request.code(), &language, request.mode());
        let reply = match self.cache.get(&key) {
            Some(reply) => {
                log::info!("♻️ Reusing cached analysis");
                reply
            }
            None => match self.ai_provider.invoke(&prompt).await {
                Ok(reply) => {
                    self.cache.insert(key, reply.clone());
                    reply
                }
                Err(e) => {
                    log::error!("❌ Model invocation failed: {}", e);
                    let mut analysis = ParsedAnalysis::from_error(format!("API Error: {}", e));
                    analysis.execution_result = outcome.as_ref().map(ExecutionOutcome::summary);
                    return analysis;
                }
            },
        };

        let mut analysis = ResponseParser::parse(&reply, self.format());

        if let Some(outcome) = &outcome {
            if outcome.has_errors() && analysis.claims_no_errors() {
                log::warn!("⚠️ Model reported no errors but execution failed; using the observed failure");
                let observed = outcome.summary();
                analysis.explanation = vec![observed.clone()];
                if self.format() == ResponseFormat::Structured {
                    analysis.bugs = vec![observed];
                }
            }
            analysis.execution_result = Some(outcome.summary());
        }

        session.record(request, &language, &reply, &analysis);
        analysis
    }

    async fn probe(&self, request: &AnalysisRequest) -> Option<ExecutionOutcome> {
        let probe = self.execution_probe.as_ref()?;
        let language = request.language().execution_language(&self.default_language);

        if !language.is_supported() {
            log::info!("ℹ️ Execution skipped: {} is not executable", self.prompt_builder.resolve_language(request));
            return None;
        }

        Some(probe.execute(request.code(), language).await)
    }

    pub async fn generate_code(&self, request: &GenerationRequest) -> DebuggerResult<String> {
        let prompt = self.prompt_builder.build_generation_prompt(request);
        Ok(self.ai_provider.invoke(&prompt).await?)
    }

    pub async fn generate_api_docs(&self, code: &str, language: &str) -> DebuggerResult<String> {
        if code.trim().is_empty() {
            return Err(DebuggerError::input_error("<empty code>", "non-empty source code", "Please input code to document"));
        }

        let prompt = self.prompt_builder.build_documentation_prompt(code, language);
        Ok(self.ai_provider.invoke(&prompt).await?)
    }
}
