pub const CORRECTED_CODE_HEADER: &str = "### CORRECTED CODE";
pub const ERROR_EXPLANATION_HEADER: &str = "### ERROR EXPLANATION";
pub const BEST_PRACTICES_HEADER: &str = "### BEST PRACTICES & RECOMMENDATIONS";
pub const SECTION_MARKER: &str = "###";
pub const CODE_FENCE: &str = "```";
pub const JSON_FENCE: &str = "```json";

// Placeholders: {lang}, {focus}, {context}, {code}
pub const FREE_TEXT_ANALYSIS_PROMPT: &str = r#"Analyze this {lang} code and provide:

1. CORRECTED CODE with line numbers and change comments
2. ERROR EXPLANATION with categorized errors and fixes
3. BEST PRACTICES & RECOMMENDATIONS for improvement

{focus}
{context}
Code to analyze:
```{lang}
{code}
```

Format your response EXACTLY like this:

### CORRECTED CODE
```{lang}
[Your corrected code here]
```

### ERROR EXPLANATION
- [Error 1]
- [Error 2]

### BEST PRACTICES & RECOMMENDATIONS
- [Recommendation 1]
- [Recommendation 2]
"#;

// Placeholders: {lang}, {focus}, {context}, {code}
pub const STRUCTURED_ANALYSIS_PROMPT: &str = r#"Analyze this {lang} code for bugs and improvements.

{focus}
{context}
Code to analyze:
```{lang}
{code}
```

CRITICAL: You MUST respond with a single valid JSON object and nothing else, using exactly these keys:

{
  "bugs": ["description of each bug, in order of appearance"],
  "fixes": ["fix for each bug, in the same order"],
  "corrected_code": "the complete corrected code as one string",
  "optimizations": ["performance or readability improvements"],
  "explanation": ["short explanation of each change"]
}

RULES:
1. Every value is an array of strings except "corrected_code", which is a string
2. Use an empty array when there is nothing to report
3. Do not add keys
"#;

// Placeholders: {stdout}, {stderr}, {status}
pub const EXECUTION_FEEDBACK_PROMPT: &str = r#"
The code was executed in a sandbox. Observed result: {status}
stdout:
{stdout}
stderr:
{stderr}
Use this runtime evidence: explain and fix the failure it shows, and do not claim the code is error-free if it failed.
"#;

pub const CLEAN_EXECUTION_PROMPT: &str = r#"
The code was executed in a sandbox and finished without errors.
stdout:
{stdout}
Review it for logic errors, edge cases and improvements rather than crashes.
"#;

// Placeholders: {lang}, {template}, {description}
pub const CODE_GENERATION_PROMPT: &str = r#"Generate {lang} code{template} for:
{description}

Include:
1. Production-ready code
2. Error handling
3. Documentation
4. Security best practices
"#;

// Placeholders: {lang}, {code}
pub const API_DOCUMENTATION_PROMPT: &str = r#"Create OpenAPI documentation for this {lang} code:
```{lang}
{code}
```
Include:
- Endpoints
- Schemas
- Examples
- Security schemes
"#;
