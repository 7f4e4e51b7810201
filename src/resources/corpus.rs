//*** START FILE: src/resources/corpus.rs ***//
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{GrammarError, Result};

/// Location of one word list inside the corpora tree: the JSON file and the
/// name of the list inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusSource {
    pub path: &'static str,
    pub key: &'static str,
}

pub const ADJECTIVES: CorpusSource = CorpusSource { path: "words/adjs.json", key: "adjs" };
pub const FRUITS: CorpusSource = CorpusSource { path: "foods/fruits.json", key: "fruits" };
pub const BODY_PARTS: CorpusSource = CorpusSource { path: "humans/bodyParts.json", key: "bodyParts" };
pub const OCCUPATIONS: CorpusSource = CorpusSource { path: "humans/occupations.json", key: "occupations" };
pub const ENCOURAGING_WORDS: CorpusSource =
    CorpusSource { path: "words/encouraging_words.json", key: "encouraging_words" };

/// Every static word list the grammar needs, read once up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpora {
    pub adjectives: Vec<String>,
    pub fruits: Vec<String>,
    pub body_parts: Vec<String>,
    pub occupations: Vec<String>,
    pub encouraging_words: Vec<String>,
}

impl Corpora {
    /// Loads all corpora from `corpora_dir`. The first missing or malformed
    /// file aborts the load.
    pub fn load(corpora_dir: &Path) -> Result<Self> {
        let corpora = Corpora {
            adjectives: load_corpus(corpora_dir, ADJECTIVES)?,
            fruits: load_corpus(corpora_dir, FRUITS)?,
            body_parts: load_corpus(corpora_dir, BODY_PARTS)?,
            occupations: load_corpus(corpora_dir, OCCUPATIONS)?,
            encouraging_words: load_corpus(corpora_dir, ENCOURAGING_WORDS)?,
        };
        log::info!(
            "Loaded corpora: {} adjectives, {} fruits, {} body parts, {} occupations, {} encouraging words",
            corpora.adjectives.len(),
            corpora.fruits.len(),
            corpora.body_parts.len(),
            corpora.occupations.len(),
            corpora.encouraging_words.len()
        );
        Ok(corpora)
    }
}

/// Reads one named string list out of a corpus JSON document.
pub fn load_corpus(corpora_dir: &Path, source: CorpusSource) -> Result<Vec<String>> {
    let full_path = corpora_dir.join(source.path);
    let file = File::open(&full_path).map_err(|e| GrammarError::resource("corpus", &full_path, e))?;
    let reader = BufReader::new(file);
    let document: Value =
        serde_json::from_reader(reader).map_err(|e| GrammarError::resource("corpus", &full_path, e))?;

    let list = document
        .get(source.key)
        .and_then(Value::as_array)
        .ok_or_else(|| GrammarError::resource("corpus", &full_path, format!("missing list '{}'", source.key)))?;

    list.iter()
        .map(|item| {
            item.as_str().map(String::from).ok_or_else(|| {
                GrammarError::resource(
                    "corpus",
                    &full_path,
                    format!("list '{}' contains a non-string entry: {}", source.key, item),
                )
            })
        })
        .collect()
}

//*** END FILE: src/resources/corpus.rs ***//
