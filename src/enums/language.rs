use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::config::constants::SOURCE_FILE_EXTENSIONS;
use crate::enums::execution_language::ExecutionLanguage;

/// Source language of a snippet. Known languages get a variant, anything else
/// is carried through verbatim (lowercased) as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Language {
    #[default]
    AutoDetect,
    Python,
    JavaScript,
    Java,
    Cpp,
    CSharp,
    Go,
    Rust,
    Other(String),
}

impl Language {
    pub fn tag(&self) -> &str {
        match self {
            Self::AutoDetect => "auto-detect",
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::Java => "java",
            Self::Cpp => "c++",
            Self::CSharp => "c#",
            Self::Go => "go",
            Self::Rust => "rust",
            Self::Other(name) => name,
        }
    }

    /// Tag used in prompts and fences; auto-detection falls back to `default_language`.
    pub fn resolve(&self, default_language: &str) -> String {
        match self {
            Self::AutoDetect => default_language.trim().to_lowercase(),
            other => other.tag().to_string(),
        }
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.trim_start_matches('.').to_lowercase();
        SOURCE_FILE_EXTENSIONS
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, tag)| Self::from_name(tag))
    }

    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "" | "auto" | "auto-detect" | "autodetect" => Self::AutoDetect,
            "python" | "py" | "python3" => Self::Python,
            "javascript" | "js" | "node" => Self::JavaScript,
            "java" => Self::Java,
            "c++" | "cpp" => Self::Cpp,
            "c#" | "cs" | "csharp" => Self::CSharp,
            "go" | "golang" => Self::Go,
            "rust" | "rs" => Self::Rust,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_auto_detect(&self) -> bool {
        matches!(self, Self::AutoDetect)
    }

    /// Execution support after auto-detection has been resolved against `default_language`.
    pub fn execution_language(&self, default_language: &str) -> ExecutionLanguage {
        let resolved = match self {
            Self::AutoDetect => Self::from_name(default_language),
            other => other.clone(),
        };

        match resolved {
            Self::Python => ExecutionLanguage::Python,
            Self::JavaScript => ExecutionLanguage::JavaScript,
            Self::Java => ExecutionLanguage::Java,
            _ => ExecutionLanguage::Unsupported,
        }
    }
}

impl FromStr for Language {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<String> for Language {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<Language> for String {
    fn from(value: Language) -> Self {
        value.tag().to_string()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
