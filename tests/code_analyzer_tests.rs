use std::sync::Arc;
use aidebugger::enums::analysis_mode::AnalysisMode;
use aidebugger::enums::invocation_error::InvocationError;
use aidebugger::enums::language::Language;
use aidebugger::enums::response_format::ResponseFormat;
use aidebugger::services::code_analyzer::CodeAnalyzer;
use aidebugger::services::execution_probe::find_program;
use aidebugger::structs::analysis_request::AnalysisRequest;
use aidebugger::structs::analysis_session::AnalysisSession;
use aidebugger::structs::config::config::Config;
use aidebugger::structs::credentials::Credentials;
use aidebugger::structs::generation_request::GenerationRequest;
use aidebugger::structs::parsed_analysis::NO_ERRORS_DETECTED;
use aidebugger::traits::ai_provider::AiProvider;
use async_trait::async_trait;
use mockall::mock;
use tokio_test::assert_ok;

mock! {
    pub Provider {}

    #[async_trait]
    impl AiProvider for Provider {
        async fn invoke(&self, prompt: &str) -> Result<String, InvocationError>;
        fn model_name(&self) -> &str;
    }
}

const FREE_TEXT_REPLY: &str = "### CORRECTED CODE\n```python\nprint(1)\n```\n### ERROR EXPLANATION\n- missing parenthesis\n### BEST PRACTICES & RECOMMENDATIONS\n- add tests";

fn analyzer(provider: MockProvider, config: &Config) -> CodeAnalyzer {
    CodeAnalyzer::new(Arc::new(provider), config)
}

fn request(code: &str) -> AnalysisRequest {
    AnalysisRequest::new(code, Language::Python, AnalysisMode::FullAudit).unwrap()
}

#[tokio::test]
async fn reply_is_parsed_and_recorded() {
    let mut provider = MockProvider::new();
    provider
        .expect_invoke()
        .withf(|prompt| prompt.contains("print 1") && prompt.contains("### CORRECTED CODE"))
        .times(1)
        .returning(|_| Ok(FREE_TEXT_REPLY.to_string()));

    let analyzer = analyzer(provider, &Config::default());
    let mut session = AnalysisSession::new();

    let analysis = analyzer.analyze(&mut session, &request("print 1")).await;

    assert_eq!(analysis.corrected_code, "print(1)");
    assert_eq!(analysis.explanation_text(), "- missing parenthesis");
    assert_eq!(analysis.execution_result, None);
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history()[0].response, FREE_TEXT_REPLY);
    assert_eq!(session.history()[0].language, "python");
    assert_eq!(session.current_code(), "print 1");
    assert_eq!(session.last_analysis(), Some(&analysis));
}

#[tokio::test]
async fn identical_requests_reuse_the_cached_reply() {
    let mut provider = MockProvider::new();
    provider
        .expect_invoke()
        .times(2)
        .returning(|_| Ok(FREE_TEXT_REPLY.to_string()));

    let analyzer = analyzer(provider, &Config::default());
    let mut session = AnalysisSession::new();

    let first = analyzer.analyze(&mut session, &request("print 1")).await;
    let second = analyzer.analyze(&mut session, &request("print 1")).await;
    let quick_fix = AnalysisRequest::new("print 1", Language::Python, AnalysisMode::QuickFix).unwrap();
    analyzer.analyze(&mut session, &quick_fix).await;

    assert_eq!(first, second);
    assert_eq!(analyzer.cache().len(), 2);
    assert_eq!(session.history().len(), 3);
}

#[tokio::test]
async fn disabled_cache_calls_the_model_every_time() {
    let mut provider = MockProvider::new();
    provider.expect_invoke().times(2).returning(|_| Ok(FREE_TEXT_REPLY.to_string()));

    let mut config = Config::default();
    config.ai.cache_capacity = 0;
    let analyzer = analyzer(provider, &config);
    let mut session = AnalysisSession::new();

    analyzer.analyze(&mut session, &request("print 1")).await;
    analyzer.analyze(&mut session, &request("print 1")).await;

    assert!(analyzer.cache().is_empty());
}

#[tokio::test]
async fn invocation_failure_becomes_an_error_result() {
    let mut provider = MockProvider::new();
    provider
        .expect_invoke()
        .times(2)
        .returning(|_| Err(InvocationError::transport("HTTP 503: unavailable")));

    let analyzer = analyzer(provider, &Config::default());
    let mut session = AnalysisSession::new();

    let analysis = analyzer.analyze(&mut session, &request("print 1")).await;
    analyzer.analyze(&mut session, &request("print 1")).await;

    assert_eq!(analysis.error.as_deref(), Some("API Error: HTTP 503: unavailable"));
    assert!(analyzer.cache().is_empty());
    assert!(session.history().is_empty());
    assert_eq!(session.current_code(), "print 1");
}

#[tokio::test]
async fn structured_format_is_honoured() {
    let mut provider = MockProvider::new();
    provider
        .expect_invoke()
        .withf(|prompt| prompt.contains("\"corrected_code\""))
        .returning(|_| Ok("```json\n{\"bugs\": [\"b\"], \"fixes\": [\"f\"]}\n```".to_string()));

    let mut config = Config::default();
    config.analysis.response_format = ResponseFormat::Structured;
    let analyzer = analyzer(provider, &config);

    let analysis = analyzer.analyze(&mut AnalysisSession::new(), &request("x = 1")).await;

    assert_eq!(analysis.bugs, vec!["b".to_string()]);
    assert_eq!(analysis.fixes, vec!["f".to_string()]);
}

#[tokio::test]
async fn observed_failure_replaces_a_no_errors_claim() {
    if find_program("python3").is_none() {
        eprintln!("skipping: python3 is not installed");
        return;
    }

    let mut provider = MockProvider::new();
    provider
        .expect_invoke()
        .withf(|prompt| prompt.contains("ZeroDivisionError") && prompt.contains("exited with code 1"))
        .times(1)
        .returning(|_| Ok("Looks good to me!".to_string()));

    let mut config = Config::default();
    config.analysis.execute_code = true;
    config.execution.timeout_secs = 10;
    let analyzer = analyzer(provider, &config);

    let analysis = analyzer.analyze(&mut AnalysisSession::new(), &request("print(1 / 0)")).await;

    assert!(analysis.explanation_text().contains("ZeroDivisionError"));
    assert_ne!(analysis.explanation_text(), NO_ERRORS_DETECTED);
    assert!(analysis.execution_result.as_deref().is_some_and(|r| r.contains("exited with code 1")));
}

#[tokio::test]
async fn clean_execution_still_asks_the_model() {
    if find_program("python3").is_none() {
        eprintln!("skipping: python3 is not installed");
        return;
    }

    let mut provider = MockProvider::new();
    provider
        .expect_invoke()
        .withf(|prompt| prompt.contains("finished without errors"))
        .times(1)
        .returning(|_| Ok(FREE_TEXT_REPLY.to_string()));

    let mut config = Config::default();
    config.analysis.execute_code = true;
    config.execution.timeout_secs = 10;
    let analyzer = analyzer(provider, &config);

    let analysis = analyzer.analyze(&mut AnalysisSession::new(), &request("print(3)")).await;

    assert_eq!(analysis.explanation_text(), "- missing parenthesis");
    assert!(analysis.execution_result.as_deref().is_some_and(|r| r.contains("exited with code 0")));
}

#[tokio::test]
async fn non_executable_language_skips_the_probe() {
    let mut provider = MockProvider::new();
    provider
        .expect_invoke()
        .withf(|prompt| !prompt.contains("executed in a sandbox"))
        .returning(|_| Ok(FREE_TEXT_REPLY.to_string()));

    let mut config = Config::default();
    config.analysis.execute_code = true;
    let analyzer = analyzer(provider, &config);
    let go = AnalysisRequest::new("package main", Language::Go, AnalysisMode::FullAudit).unwrap();

    let analysis = analyzer.analyze(&mut AnalysisSession::new(), &go).await;

    assert!(analyzer.executes_code());
    assert_eq!(analysis.execution_result, None);
}

#[tokio::test]
async fn code_generation_returns_raw_text() {
    let mut provider = MockProvider::new();
    provider
        .expect_invoke()
        .withf(|prompt| prompt.starts_with("Generate rust code using CLI template for:"))
        .returning(|_| Ok("fn main() {}".to_string()));

    let analyzer = analyzer(provider, &Config::default());
    let request = GenerationRequest::new("a greeter", "rust", Some(aidebugger::enums::code_template::CodeTemplate::Cli)).unwrap();

    let code = assert_ok!(analyzer.generate_code(&request).await);

    assert_eq!(code, "fn main() {}");
}

#[tokio::test]
async fn documentation_failure_is_an_invocation_error() {
    let mut provider = MockProvider::new();
    provider.expect_invoke().returning(|_| Err(InvocationError::EmptyResponse));

    let analyzer = analyzer(provider, &Config::default());

    let error = analyzer.generate_api_docs("def handler(): pass", "python").await.unwrap_err();
    let blank = analyzer.generate_api_docs("  ", "python").await.unwrap_err();

    assert!(error.user_message().contains("empty-response"));
    assert!(!blank.is_configuration());
}

#[test]
fn missing_api_key_stops_before_any_model_call() {
    let error = CodeAnalyzer::with_gemini(&Config::default(), &Credentials::new(None, None))
        .err()
        .unwrap();

    assert!(error.is_configuration());
}
