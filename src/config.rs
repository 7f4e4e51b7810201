use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GrammarError, Result};
use crate::grammar::assembler::GrammarSettings;
use crate::types::grammar_data::StanzaTemplate;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub corpora_dir: PathBuf,
    pub pronunciations: PathBuf,
    pub lexicon: PathBuf,
    pub output: Option<PathBuf>, // None writes to stdout
    pub adverb_target: String,
    pub instrument_root: String,
    pub superstar_word: String,
    pub stanzas: Option<Vec<StanzaTemplate>>, // None uses the built-in stanzas
}

impl Default for Config {
    fn default() -> Self {
        let settings = GrammarSettings::default();
        Config {
            corpora_dir: PathBuf::from("corpora/data"),
            pronunciations: PathBuf::from("cmudict.dict"),
            lexicon: PathBuf::from("lexicon.json"),
            output: None,
            adverb_target: settings.adverb_target,
            instrument_root: settings.instrument_root,
            superstar_word: settings.superstar_word,
            stanzas: None,
        }
    }
}

impl Config {
    pub fn grammar_settings(&self) -> GrammarSettings {
        let defaults = GrammarSettings::default();
        GrammarSettings {
            adverb_target: self.adverb_target.clone(),
            instrument_root: self.instrument_root.clone(),
            superstar_word: self.superstar_word.clone(),
            stanzas: self.stanzas.clone().unwrap_or(defaults.stanzas),
        }
    }

    /// Makes every relative path relative to `base` instead of the working
    /// directory.
    fn resolve_paths(&mut self, base: &Path) {
        for path in [&mut self.corpora_dir, &mut self.pronunciations, &mut self.lexicon] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        if let Some(output) = self.output.as_mut() {
            if output.is_relative() {
                *output = base.join(&*output);
            }
        }
    }
}

pub fn parse_config(file_path: &Path, contents: &str) -> Result<Config> {
    toml::from_str::<Config>(contents).map_err(|e| GrammarError::Config {
        path: file_path.to_path_buf(),
        reason: e.to_string(),
    })
}

pub fn load_config_from_file(file_path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(file_path).map_err(|e| GrammarError::Config {
        path: file_path.to_path_buf(),
        reason: format!("{}. Please ensure it exists.", e),
    })?;
    let mut loaded_config = parse_config(file_path, &contents)?;

    let base = file_path.parent().unwrap_or_else(|| Path::new(""));
    loaded_config.resolve_paths(base);

    if !loaded_config.corpora_dir.is_dir() {
        return Err(GrammarError::Config {
            path: file_path.to_path_buf(),
            reason: format!(
                "corpora_dir ('{}') is not a valid directory",
                loaded_config.corpora_dir.display()
            ),
        });
    }
    Ok(loaded_config)
}
