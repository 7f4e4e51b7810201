//*** START FILE: src/types/grammar_data.rs ***//
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One stanza template and how many copies of it go into the `stanza` list.
/// Weight is kept signed so a bad config value can be reported instead of
/// failing inside the TOML deserializer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StanzaTemplate {
    pub template: String,
    pub weight: i64,
}

impl StanzaTemplate {
    pub fn new(template: impl Into<String>, weight: i64) -> Self {
        StanzaTemplate { template: template.into(), weight }
    }

    pub fn has_placeholders(&self) -> bool {
        self.template.contains('#')
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OccupationEntry {
    pub noun: String,
    pub action: Option<String>, // Third-person-singular verb, None when no derivation was usable
}

impl OccupationEntry {
    /// Symbols every rendered occupation binds.
    pub const BINDINGS: [&'static str; 2] = ["actor", "acts"];

    /// Renders the Tracery push actions for this occupation, or None if the
    /// noun never resolved to a verb.
    pub fn to_placeholder(&self) -> Option<String> {
        self.action
            .as_ref()
            .filter(|act| !act.is_empty())
            .map(|act| format!("[actor:{}][acts:{}]", self.noun, act))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PronounSet {
    Masculine,
    Feminine,
    Neuter,
    // Not in ACTIVE: "they acts" breaks agreement with the derived occupation verbs.
    Plural,
}

impl PronounSet {
    pub const ACTIVE: [PronounSet; 3] = [PronounSet::Masculine, PronounSet::Feminine, PronounSet::Neuter];

    /// Symbols every bundle binds.
    pub const BINDINGS: [&'static str; 3] = ["he", "him", "hes"];

    pub fn bundle(self) -> &'static str {
        match self {
            PronounSet::Masculine => "[he:he][him:him][hes:he's]",
            PronounSet::Feminine => "[he:she][him:her][hes:she's]",
            PronounSet::Neuter => "[he:it][him:it][hes:it's]",
            PronounSet::Plural => "[he:they][him:them][hes:they're]",
        }
    }
}

/// The Tracery grammar handed to the expansion engine. Backed by a BTreeMap so
/// serialization always comes out with sorted keys.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct GrammarDocument {
    pub rules: BTreeMap<String, Vec<String>>,
}

impl GrammarDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, values: Vec<String>) {
        self.rules.insert(key.to_string(), values);
    }

    pub fn get(&self, key: &str) -> Option<&Vec<String>> {
        self.rules.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.rules.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

//*** END FILE: src/types/grammar_data.rs ***//
