//*** START FILE: src/resources/pronunciation.rs ***//
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::{GrammarError, Result};
use crate::parsing::{parse_cmudict, PronunciationMap};

/// Stress digits of one pronunciation variant, e.g. `['0', '1', '0']` for
/// "atrocious".
pub type StressTuple = Vec<char>;

/// All stress tuples of a word, one per pronunciation variant. Empty for words
/// the dictionary doesn't know.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StressPattern(BTreeSet<StressTuple>);

impl StressPattern {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, tuple: &[char]) -> bool {
        self.0.contains(tuple)
    }

    /// True if at least one stress tuple is shared. An empty pattern overlaps
    /// nothing, itself included.
    pub fn overlaps(&self, other: &StressPattern) -> bool {
        self.0.intersection(&other.0).next().is_some()
    }
}

impl FromIterator<StressTuple> for StressPattern {
    fn from_iter<I: IntoIterator<Item = StressTuple>>(iter: I) -> Self {
        StressPattern(iter.into_iter().collect())
    }
}

/// Read-only view of the pronunciation dictionary. Built once at startup and
/// passed by reference to everything that needs phonetic lookups.
#[derive(Debug, Default, Clone)]
pub struct PronunciationIndex {
    entries: PronunciationMap,
}

impl PronunciationIndex {
    pub fn from_map(entries: PronunciationMap) -> Self {
        PronunciationIndex { entries }
    }

    /// Parses dictionary text directly; mostly useful for tests and fixtures.
    pub fn from_text(content: &str) -> Self {
        Self::from_map(parse_cmudict("<inline>", content))
    }

    /// Loads a CMU dictionary file. An unreadable or empty dictionary is fatal.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GrammarError::resource("pronunciation dictionary", path, e))?;
        let source_name = path.display().to_string();
        let entries = parse_cmudict(&source_name, &content);
        if entries.is_empty() {
            return Err(GrammarError::resource(
                "pronunciation dictionary",
                path,
                "no pronunciation entries found",
            ));
        }
        log::info!("Loaded {} pronunciations from {}", entries.len(), source_name);
        Ok(Self::from_map(entries))
    }

    /// Pronunciation variants for a word. The word is lowercased and otherwise
    /// used as-is, matching the dictionary's own keying.
    pub fn variants(&self, word: &str) -> Option<&Vec<Vec<String>>> {
        self.entries.get(&word.to_lowercase())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.variants(word).is_some()
    }

    pub fn stress_patterns(&self, word: &str) -> StressPattern {
        match self.variants(word) {
            Some(variants) => variants.iter().map(|chunks| stress_tuple(chunks)).collect(),
            None => StressPattern::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Trailing stress digit of every chunk that has one. Consonants carry no
/// digit and are skipped.
fn stress_tuple(chunks: &[String]) -> StressTuple {
    chunks
        .iter()
        .filter_map(|chunk| chunk.chars().last())
        .filter(|c| c.is_ascii_digit())
        .collect()
}

//*** END FILE: src/resources/pronunciation.rs ***//
