use std::fs;
use std::io::Read;
use std::path::Path;
use crate::config::constants::{IMAGE_FILE_EXTENSIONS, SOURCE_FILE_EXTENSIONS, STDIN_PATH};
use crate::enums::language::Language;
use crate::errors::{DebuggerError, DebuggerResult};
use crate::structs::source_input::SourceInput;

const INVALID_FORMAT_MESSAGE: &str = "Invalid file format - please upload text-based source files";

pub struct SourceLoader;

impl SourceLoader {
    /// Loads `path` as source text or image bytes. `-` reads stdin.
    pub fn load(path: &Path) -> DebuggerResult<SourceInput> {
        if path.as_os_str() == STDIN_PATH {
            let mut bytes = Vec::new();
            std::io::stdin().read_to_end(&mut bytes)?;
            return Self::decode_source("<stdin>", bytes, Language::AutoDetect);
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        if IMAGE_FILE_EXTENSIONS.contains(&extension.as_str()) {
            let bytes = Self::read(path)?;
            return Ok(SourceInput::Image {
                path: path.to_path_buf(),
                bytes,
            });
        }

        let language = Language::from_extension(&extension).ok_or_else(|| {
            DebuggerError::input_error(
                &path.display().to_string(),
                &Self::supported_extensions(),
                INVALID_FORMAT_MESSAGE,
            )
        })?;

        let bytes = Self::read(path)?;
        Self::decode_source(&path.display().to_string(), bytes, language)
    }

    pub fn decode_source(origin: &str, bytes: Vec<u8>, language: Language) -> DebuggerResult<SourceInput> {
        let text = String::from_utf8(bytes)
            .map_err(|_| DebuggerError::input_error(origin, "UTF-8 text", INVALID_FORMAT_MESSAGE))?;

        Ok(SourceInput::Code {
            origin: origin.to_string(),
            text,
            language,
        })
    }

    fn read(path: &Path) -> DebuggerResult<Vec<u8>> {
        fs::read(path).map_err(|e| DebuggerError::file_error(&path.display().to_string(), "read", &e.to_string()))
    }

    fn supported_extensions() -> String {
        let mut extensions: Vec<String> = SOURCE_FILE_EXTENSIONS.iter().map(|(ext, _)| format!(".{}", ext)).collect();
        extensions.extend(IMAGE_FILE_EXTENSIONS.iter().map(|ext| format!(".{}", ext)));
        format!("one of {}", extensions.join(", "))
    }
}
