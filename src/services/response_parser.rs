use serde::Deserialize;
use serde_json::Value;
use crate::constants::prompts::{
    BEST_PRACTICES_HEADER, CODE_FENCE, CORRECTED_CODE_HEADER, ERROR_EXPLANATION_HEADER, JSON_FENCE, SECTION_MARKER,
};
use crate::enums::response_format::ResponseFormat;
use crate::structs::parse_error::ParseError;
use crate::structs::parsed_analysis::{
    ParsedAnalysis, NO_BEST_PRACTICES, NO_CODE_CORRECTIONS, NO_ERRORS_DETECTED, STRUCTURED_PARSE_FAILURE,
};

/// Turns a raw model reply into a `ParsedAnalysis`. Never fails: malformed
/// replies degrade to fallback values.
pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(reply: &str, format: ResponseFormat) -> ParsedAnalysis {
        match format {
            ResponseFormat::FreeText => Self::parse_free_text(reply),
            ResponseFormat::Structured => Self::parse_structured(reply),
        }
    }

    pub fn parse_free_text(reply: &str) -> ParsedAnalysis {
        match Self::extract_sections(reply) {
            Ok(analysis) => analysis,
            Err(e) => {
                log::warn!("⚠️ Parsing error: {}", e);
                ParsedAnalysis {
                    error: Some(format!("Parsing error: {}", e)),
                    ..ParsedAnalysis::free_text_fallback()
                }
            }
        }
    }

    fn extract_sections(reply: &str) -> Result<ParsedAnalysis, ParseError> {
        let scanner = SectionScanner::new(reply)?;

        let corrected_code = scanner
            .fenced_section(CORRECTED_CODE_HEADER)
            .map_or_else(|| NO_CODE_CORRECTIONS.to_string(), str::to_string);
        let explanation = scanner
            .section(ERROR_EXPLANATION_HEADER)
            .map_or_else(|| NO_ERRORS_DETECTED.to_string(), str::to_string);
        let recommendations = scanner
            .section(BEST_PRACTICES_HEADER)
            .map_or_else(|| NO_BEST_PRACTICES.to_string(), str::to_string);

        Ok(ParsedAnalysis {
            corrected_code,
            explanation: vec![explanation],
            recommendations: vec![recommendations],
            ..ParsedAnalysis::default()
        })
    }

    pub fn parse_structured(reply: &str) -> ParsedAnalysis {
        let payload = Self::strip_json_fences(reply);

        let decoded = serde_json::from_str::<Value>(&payload).and_then(|value| {
            if value.is_object() {
                serde_json::from_value::<StructuredReply>(value)
            } else {
                Err(serde::de::Error::custom("reply is not a JSON object"))
            }
        });

        match decoded {
            Ok(reply) => ParsedAnalysis {
                corrected_code: reply.corrected_code,
                bugs: reply.bugs,
                fixes: reply.fixes,
                optimizations: reply.optimizations,
                explanation: reply.explanation,
                ..ParsedAnalysis::default()
            },
            Err(e) => {
                log::warn!("⚠️ Structured reply rejected: {}", e);
                ParsedAnalysis::from_error(STRUCTURED_PARSE_FAILURE)
            }
        }
    }

    /// Drops every code fence, along with a directly attached `json` tag in any case.
    pub fn strip_json_fences(reply: &str) -> String {
        let tag = &JSON_FENCE[CODE_FENCE.len()..];
        let mut stripped = String::with_capacity(reply.len());
        let mut rest = reply;

        while let Some(at) = rest.find(CODE_FENCE) {
            stripped.push_str(&rest[..at]);
            rest = &rest[at + CODE_FENCE.len()..];
            if rest.get(..tag.len()).is_some_and(|next| next.eq_ignore_ascii_case(tag)) {
                rest = &rest[tag.len()..];
            }
        }

        stripped.push_str(rest);
        stripped.trim().to_string()
    }
}

#[derive(Debug, Deserialize)]
struct StructuredReply {
    #[serde(default)]
    bugs: Vec<String>,
    #[serde(default)]
    fixes: Vec<String>,
    #[serde(default)]
    corrected_code: String,
    #[serde(default)]
    optimizations: Vec<String>,
    #[serde(default)]
    explanation: Vec<String>,
}

/// Header/body tokenizer for free-text replies. Header matching is ASCII
/// case-insensitive; `folded` has the same byte offsets as `text`.
struct SectionScanner<'a> {
    text: &'a str,
    folded: String,
}

impl<'a> SectionScanner<'a> {
    fn new(text: &'a str) -> Result<Self, ParseError> {
        if text.trim().is_empty() {
            return Err(ParseError::BlankReply);
        }

        Ok(Self {
            text,
            folded: text.to_ascii_lowercase(),
        })
    }

    /// Byte offsets just past each occurrence of `header`, in order.
    fn header_ends(&self, header: &str) -> Vec<usize> {
        let needle = header.to_ascii_lowercase();
        let mut ends = Vec::new();
        let mut from = 0;

        while let Some(found) = self.folded[from..].find(&needle) {
            let end = from + found + needle.len();
            ends.push(end);
            from = end;
        }

        ends
    }

    /// Text between the first `header` and the next section marker (or end), trimmed.
    fn section(&self, header: &str) -> Option<&'a str> {
        let start = *self.header_ends(header).first()?;
        let end = self.text[start..]
            .find(SECTION_MARKER)
            .map_or(self.text.len(), |offset| start + offset);

        Some(self.text[start..end].trim())
    }

    /// Body of the fenced block directly following `header`. The opening fence
    /// line, language tag included, is dropped. Later occurrences of the header
    /// are tried when an earlier one has no complete fence.
    fn fenced_section(&self, header: &str) -> Option<&'a str> {
        self.header_ends(header)
            .into_iter()
            .find_map(|start| self.fenced_block_at(start))
    }

    fn fenced_block_at(&self, start: usize) -> Option<&'a str> {
        let after_header = &self.text[start..];
        let fence_start = start + (after_header.len() - after_header.trim_start().len());

        if !self.text[fence_start..].starts_with(CODE_FENCE) {
            return None;
        }

        let opener_end = fence_start + CODE_FENCE.len();
        let body_start = opener_end + self.text[opener_end..].find('\n')? + 1;
        let body_end = body_start + self.text[body_start..].find(CODE_FENCE)?;

        Some(self.text[body_start..body_end].trim())
    }
}
