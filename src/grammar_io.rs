//*** START FILE: src/grammar_io.rs ***//
use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::Path;

use crate::error::{GrammarError, Result};
use crate::types::grammar_data::GrammarDocument;

/// Serializes the grammar as 2-space indented JSON with sorted keys and a
/// trailing newline.
pub fn to_json(document: &GrammarDocument) -> Result<String> {
    let mut json = serde_json::to_string_pretty(document).map_err(|e| GrammarError::Output {
        path: "<memory>".to_string(),
        reason: e.to_string(),
    })?;
    json.push('\n');
    Ok(json)
}

/// Writes the grammar to `file_path`, creating parent directories as needed.
/// The document is serialized fully before the file is touched, so a failed
/// run never leaves a half-written grammar behind.
pub fn save_grammar(document: &GrammarDocument, file_path: &Path) -> Result<()> {
    let json = to_json(document)?;
    let output_error = |e: io::Error| GrammarError::Output {
        path: file_path.display().to_string(),
        reason: e.to_string(),
    };

    if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(output_error)?;
    }
    fs::write(file_path, json).map_err(output_error)?;
    Ok(())
}

pub fn write_grammar_stdout(document: &GrammarDocument) -> Result<()> {
    let json = to_json(document)?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(json.as_bytes())
        .and_then(|_| handle.flush())
        .map_err(|e| GrammarError::Output { path: "<stdout>".to_string(), reason: e.to_string() })
}

/// Loads a previously written grammar.
pub fn load_grammar(file_path: &Path) -> Result<GrammarDocument> {
    let file = File::open(file_path).map_err(|e| GrammarError::resource("grammar", file_path, e))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| GrammarError::resource("grammar", file_path, e))
}

//*** END FILE: src/grammar_io.rs ***//
