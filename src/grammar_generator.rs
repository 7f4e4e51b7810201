//*** START FILE: src/grammar_generator.rs ***//
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::grammar::GrammarAssembler;
use crate::grammar_io::{save_grammar, write_grammar_stdout};
use crate::resources::{Corpora, EnglishConjugator, Lexicon, PronunciationIndex};
use crate::types::grammar_data::GrammarDocument;

/// Where the finished grammar goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `-` on the command line means stdout.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(arg))
        }
    }

    pub fn from_config(config: &Config) -> Self {
        match &config.output {
            Some(path) => OutputTarget::File(path.clone()),
            None => OutputTarget::Stdout,
        }
    }
}

/// Every external resource, loaded once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct LoadedResources {
    pub pronunciations: PronunciationIndex,
    pub lexicon: Lexicon,
    pub corpora: Corpora,
}

impl LoadedResources {
    pub fn load(config: &Config) -> Result<Self> {
        Ok(LoadedResources {
            pronunciations: PronunciationIndex::load(&config.pronunciations)?,
            lexicon: Lexicon::load(&config.lexicon)?,
            corpora: Corpora::load(&config.corpora_dir)?,
        })
    }
}

/// Builds the grammar from already-loaded resources.
pub fn build_grammar(config: &Config, resources: &LoadedResources) -> Result<GrammarDocument> {
    let settings = config.grammar_settings();
    let assembler = GrammarAssembler {
        pronunciations: &resources.pronunciations,
        lexicon: &resources.lexicon,
        conjugator: &EnglishConjugator,
        corpora: &resources.corpora,
        settings: &settings,
    };
    assembler.assemble()
}

/// Load, assemble, write. Any failure aborts before output is written.
pub fn run_grammar_generation(config: &Config, target: &OutputTarget) -> Result<GrammarDocument> {
    log::info!("Starting grammar generation...");

    // --- 1. Load resources ---
    let resources = LoadedResources::load(config)?;

    // --- 2. Assemble ---
    let document = build_grammar(config, &resources)?;
    log::info!("Assembled grammar with {} keys", document.len());

    // --- 3. Write ---
    match target {
        OutputTarget::Stdout => write_grammar_stdout(&document)?,
        OutputTarget::File(path) => {
            save_grammar(&document, path)?;
            log::info!("Saved grammar to: {}", path.display());
        }
    }

    Ok(document)
}
//*** END FILE: src/grammar_generator.rs ***//
