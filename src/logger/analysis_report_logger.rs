use terminal_size::{terminal_size, Width};
use crate::structs::execution_outcome::ExecutionOutcome;
use crate::structs::parsed_analysis::ParsedAnalysis;

const MAX_RULE_WIDTH: usize = 80;

pub struct AnalysisReportLogger {}

impl AnalysisReportLogger {

    fn rule() -> String {
        let width = terminal_size()
            .map(|(Width(w), _)| usize::from(w))
            .unwrap_or(MAX_RULE_WIDTH)
            .min(MAX_RULE_WIDTH);
        "━".repeat(width)
    }

    pub fn print_analysis_report(origin: &str, language: &str, analysis: &ParsedAnalysis) {
        println!("\n🔍 CODE ANALYSIS REPORT: {} ({})", origin, language);
        println!("{}", Self::rule());

        if let Some(error) = &analysis.error {
            println!("\n⚠️ {}", error);
        }

        if !analysis.corrected_code.trim().is_empty() {
            println!("\n🛠️ CORRECTED CODE");
            Self::print_code(&analysis.corrected_code);
        }

        Self::print_section("🐛 ERROR EXPLANATION", &analysis.explanation, "No errors detected");
        Self::print_section("✅ BEST PRACTICES & RECOMMENDATIONS", &analysis.recommendations, "No best practices available");
        Self::print_list("🐞 BUGS", &analysis.bugs, "No bugs detected");
        Self::print_list("🔧 FIXES", &analysis.fixes, "No fixes suggested");
        Self::print_list("⚡ OPTIMIZATIONS", &analysis.optimizations, "No optimizations suggested");

        if let Some(result) = &analysis.execution_result {
            println!("\n🧪 EXECUTION RESULT");
            println!("{}", result);
        }

        println!("{}", Self::rule());
    }

    // Structured replies carry bare items, free-text sections are already bulleted.
    fn print_section(title: &str, lines: &[String], placeholder: &str) {
        println!("\n{}", title);
        let body = lines.join("\n");
        if body.trim().is_empty() {
            println!("  {}", placeholder);
        } else {
            println!("{}", body);
        }
    }

    fn print_list(title: &str, items: &[String], placeholder: &str) {
        if items.is_empty() {
            println!("\n{}\n  {}", title, placeholder);
            return;
        }

        println!("\n{}", title);
        for (i, item) in items.iter().enumerate() {
            println!("  {}. {}", i + 1, item);
        }
    }

    pub fn print_code(code: &str) {
        for (i, line) in code.lines().enumerate() {
            println!("\x1b[32m{:<4}|\x1b[0m {}", i + 1, line);
        }
    }

    pub fn print_execution_outcome(origin: &str, outcome: &ExecutionOutcome) {
        println!("\n🧪 EXECUTION: {}", origin);
        println!("{}", Self::rule());
        println!("{}", outcome.summary());
        println!("{}", Self::rule());
    }

    pub fn print_generated(title: &str, text: &str) {
        println!("\n{}", title);
        println!("{}", Self::rule());
        println!("{}", text.trim_end());
        println!("{}", Self::rule());
    }
}
