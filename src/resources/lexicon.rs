//*** START FILE: src/resources/lexicon.rs ***//
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{GrammarError, Result};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    #[serde(rename = "n")]
    Noun,
    #[serde(rename = "v")]
    Verb,
    #[serde(rename = "a")]
    Adjective,
    #[serde(rename = "s")]
    AdjectiveSatellite,
    #[serde(rename = "r")]
    Adverb,
}

/// Points at one lemma of one synset, e.g. `teach` in `teach.v.01`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct LemmaRef {
    pub synset: String,
    pub lemma: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Lemma {
    pub name: String,
    #[serde(default)]
    pub derivations: Vec<LemmaRef>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Synset {
    pub id: String,
    pub pos: PartOfSpeech,
    pub lemmas: Vec<Lemma>,
    #[serde(default)]
    pub hyponyms: Vec<String>,
}

impl Synset {
    pub fn lemma_names(&self) -> impl Iterator<Item = &str> {
        self.lemmas.iter().map(|l| l.name.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct LexiconData {
    pub synsets: Vec<Synset>,
}

/// WordNet-shaped semantic lexicon: senses, their lemmas, the derivationally
/// related forms between lemmas and the hyponym tree between senses.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    synsets: Vec<Synset>,
    by_id: HashMap<String, usize>,
    by_lemma: HashMap<String, Vec<usize>>, // Synset indices in file order
}

impl Lexicon {
    /// Indexes lexicon data. Every derivation and hyponym must point at a
    /// synset (and lemma) that exists, so lookups later never dangle.
    pub fn from_data(data: LexiconData) -> std::result::Result<Self, String> {
        let mut by_id = HashMap::with_capacity(data.synsets.len());
        let mut by_lemma: HashMap<String, Vec<usize>> = HashMap::new();

        for (idx, synset) in data.synsets.iter().enumerate() {
            if by_id.insert(synset.id.clone(), idx).is_some() {
                return Err(format!("duplicate synset id '{}'", synset.id));
            }
            for name in synset.lemma_names() {
                by_lemma.entry(name.to_string()).or_default().push(idx);
            }
        }

        for synset in &data.synsets {
            for hyponym in &synset.hyponyms {
                if !by_id.contains_key(hyponym) {
                    return Err(format!("synset '{}' lists unknown hyponym '{}'", synset.id, hyponym));
                }
            }
            for lemma in &synset.lemmas {
                for related in &lemma.derivations {
                    let target = by_id
                        .get(&related.synset)
                        .map(|&i| &data.synsets[i])
                        .ok_or_else(|| {
                            format!(
                                "lemma '{}' in '{}' derives from unknown synset '{}'",
                                lemma.name, synset.id, related.synset
                            )
                        })?;
                    if !target.lemma_names().any(|n| n == related.lemma) {
                        return Err(format!(
                            "lemma '{}' in '{}' derives from '{}', which is not a lemma of '{}'",
                            lemma.name, synset.id, related.lemma, related.synset
                        ));
                    }
                }
            }
        }

        Ok(Lexicon { synsets: data.synsets, by_id, by_lemma })
    }

    pub fn from_json_str(json: &str) -> std::result::Result<Self, String> {
        let data: LexiconData = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Self::from_data(data)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| GrammarError::resource("lexicon", path, e))?;
        let reader = BufReader::new(file);
        let data: LexiconData =
            serde_json::from_reader(reader).map_err(|e| GrammarError::resource("lexicon", path, e))?;
        let lexicon = Self::from_data(data).map_err(|e| GrammarError::resource("lexicon", path, e))?;
        log::info!("Loaded {} synsets from {}", lexicon.len(), path.display());
        Ok(lexicon)
    }

    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }

    pub fn synset(&self, id: &str) -> Option<&Synset> {
        self.by_id.get(id).map(|&i| &self.synsets[i])
    }

    /// Senses having `word` as one of their lemmas, optionally restricted to one
    /// part of speech. Exact match, no lemmatization.
    pub fn synsets(&self, word: &str, pos: Option<PartOfSpeech>) -> Vec<&Synset> {
        self.by_lemma
            .get(word)
            .map(|indices| {
                indices
                    .iter()
                    .map(|&i| &self.synsets[i])
                    .filter(|s| pos.map_or(true, |p| s.pos == p))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Resolves a lemma's derivationally related forms to (synset, lemma name)
    /// pairs.
    pub fn derivationally_related_forms<'a>(&'a self, lemma: &'a Lemma) -> impl Iterator<Item = (&'a Synset, &'a str)> + 'a {
        lemma
            .derivations
            .iter()
            .filter_map(move |r| self.synset(&r.synset).map(|s| (s, r.lemma.as_str())))
    }

    /// The root and every synset below it, pre-order, children in file order.
    /// Each synset is visited once even if the tree has shared children.
    pub fn hyponym_closure(&self, root_id: &str) -> Vec<&Synset> {
        let mut visited = HashSet::new();
        let mut ordered = Vec::new();
        let mut stack: Vec<&str> = vec![root_id];

        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            if let Some(synset) = self.synset(id) {
                ordered.push(synset);
                // Reverse so the first hyponym is popped first.
                stack.extend(synset.hyponyms.iter().rev().map(String::as_str));
            }
        }
        ordered
    }
}

//*** END FILE: src/resources/lexicon.rs ***//
