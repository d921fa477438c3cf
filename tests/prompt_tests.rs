use aidebugger::constants::prompts::{BEST_PRACTICES_HEADER, CORRECTED_CODE_HEADER, ERROR_EXPLANATION_HEADER};
use aidebugger::enums::analysis_mode::AnalysisMode;
use aidebugger::enums::code_template::CodeTemplate;
use aidebugger::enums::execution_language::ExecutionLanguage;
use aidebugger::enums::language::Language;
use aidebugger::enums::response_format::ResponseFormat;
use aidebugger::helpers::prompt_generator::{fill_template, PromptBuilder};
use aidebugger::structs::analysis_request::AnalysisRequest;
use aidebugger::structs::execution_outcome::ExecutionOutcome;
use aidebugger::structs::generation_request::GenerationRequest;

fn request(code: &str, language: Language, mode: AnalysisMode) -> AnalysisRequest {
    AnalysisRequest::new(code, language, mode).unwrap()
}

#[test]
fn free_text_prompt_lists_headers_in_order() {
    let builder = PromptBuilder::new(ResponseFormat::FreeText, "python");
    let prompt = builder.build(&request("print(1)", Language::Python, AnalysisMode::FullAudit));

    let code = prompt.rfind(CORRECTED_CODE_HEADER).unwrap();
    let explanation = prompt.rfind(ERROR_EXPLANATION_HEADER).unwrap();
    let practices = prompt.rfind(BEST_PRACTICES_HEADER).unwrap();

    assert!(code < explanation && explanation < practices);
    assert!(prompt.contains("```python\nprint(1)\n```"));
    assert!(prompt.contains(AnalysisMode::FullAudit.focus()));
}

#[test]
fn prompt_is_a_pure_function_of_its_inputs() {
    let builder = PromptBuilder::new(ResponseFormat::Structured, "python");
    let req = request("let x = 1;", Language::JavaScript, AnalysisMode::SecurityReview);

    assert_eq!(builder.build(&req), builder.build(&req));
}

#[test]
fn structured_prompt_names_every_key() {
    let builder = PromptBuilder::new(ResponseFormat::Structured, "python");
    let prompt = builder.build(&request("x = 1", Language::Python, AnalysisMode::QuickFix));

    for key in ["\"bugs\"", "\"fixes\"", "\"corrected_code\"", "\"optimizations\"", "\"explanation\""] {
        assert!(prompt.contains(key), "missing {}", key);
    }
    assert!(prompt.contains(AnalysisMode::QuickFix.focus()));
}

#[test]
fn auto_detect_resolves_to_the_default_language() {
    let builder = PromptBuilder::new(ResponseFormat::FreeText, "java");
    let req = request("class A {}", Language::AutoDetect, AnalysisMode::FullAudit);

    assert_eq!(builder.resolve_language(&req), "java");
    assert!(builder.build(&req).contains("```java\nclass A {}"));
}

#[test]
fn placeholders_inside_user_code_are_left_alone() {
    let builder = PromptBuilder::new(ResponseFormat::FreeText, "python");
    let code = "print(\"{lang} {code} {focus}\")";
    let prompt = builder.build(&request(code, Language::Python, AnalysisMode::FullAudit));

    assert!(prompt.contains(code));
}

#[test]
fn template_context_is_included() {
    let builder = PromptBuilder::new(ResponseFormat::FreeText, "python");
    let req = request("app = Flask(__name__)", Language::Python, AnalysisMode::FullAudit)
        .with_template(Some(CodeTemplate::WebApi));

    assert!(builder.build(&req).contains("The code belongs to a Web API project."));
}

#[test]
fn failed_execution_is_fed_back() {
    let builder = PromptBuilder::new(ResponseFormat::FreeText, "python");
    let req = request("1/0", Language::Python, AnalysisMode::FullAudit);
    let outcome = ExecutionOutcome::finished(String::new(), "ZeroDivisionError: division by zero".to_string(), Some(1));

    let prompt = builder.build_with_execution(&req, &outcome);

    assert!(prompt.starts_with(&builder.build(&req)));
    assert!(prompt.contains("the program exited with code 1"));
    assert!(prompt.contains("ZeroDivisionError"));
}

#[test]
fn timeout_is_described_as_its_own_failure() {
    let builder = PromptBuilder::new(ResponseFormat::FreeText, "python");
    let req = request("while True: pass", Language::Python, AnalysisMode::FullAudit);

    let prompt = builder.build_with_execution(&req, &ExecutionOutcome::timed_out());

    assert!(prompt.contains("did not finish before the timeout"));
}

#[test]
fn clean_execution_changes_the_prompt_only() {
    let builder = PromptBuilder::new(ResponseFormat::FreeText, "python");
    let req = request("print(2)", Language::Python, AnalysisMode::FullAudit);
    let outcome = ExecutionOutcome::finished("2\n".to_string(), String::new(), Some(0));

    let prompt = builder.build_with_execution(&req, &outcome);

    assert!(prompt.contains("finished without errors"));
    assert!(prompt.contains("2"));
}

#[test]
fn unsupported_or_unlaunched_execution_adds_nothing() {
    let builder = PromptBuilder::new(ResponseFormat::FreeText, "python");
    let req = request("fn main() {}", Language::Rust, AnalysisMode::FullAudit);

    let unsupported = builder.build_with_execution(&req, &ExecutionOutcome::unsupported());
    let unlaunched = builder.build_with_execution(&req, &ExecutionOutcome::launch_failed(ExecutionLanguage::Python, "missing"));

    assert_eq!(unsupported, builder.build(&req));
    assert_eq!(unlaunched, builder.build(&req));
}

#[test]
fn generation_prompt_mentions_template() {
    let builder = PromptBuilder::new(ResponseFormat::FreeText, "python");
    let req = GenerationRequest::new("a todo list", "go", Some(CodeTemplate::Microservice)).unwrap();

    let prompt = builder.build_generation_prompt(&req);

    assert!(prompt.starts_with("Generate go code using Microservice template for:\na todo list"));
}

#[test]
fn blank_inputs_are_rejected_before_prompting() {
    assert!(AnalysisRequest::new("  \n", Language::Python, AnalysisMode::FullAudit).is_err());
    assert!(GenerationRequest::new("", "python", None).is_err());
}

#[test]
fn fill_template_keeps_unknown_braces() {
    assert_eq!(fill_template("{a} {b} {", &[("a", "1")]), "1 {b} {");
}
