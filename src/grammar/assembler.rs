//*** START FILE: src/grammar/assembler.rs ***//
use crate::error::Result;
use crate::grammar::derivation::DerivationalResolver;
use crate::grammar::stanza::{default_stanzas, weighted_stanzas};
use crate::grammar::stress::adjly;
use crate::grammar::validator::validate_with_bindings;
use crate::resources::{Conjugator, Corpora, Lexicon, PronunciationIndex};
use crate::types::grammar_data::{GrammarDocument, OccupationEntry, PronounSet, StanzaTemplate};

pub const NUMERAL_WORDS: [&str; 11] =
    ["two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven", "twelve"];

pub const ORIGIN: &str = "#[#setPronouns#][#setOccupation#]stanza#";

/// Lexicon entries that sit under the instrument root but read badly in a
/// stanza ("he can play the woodwind instrument").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    Contains(&'static str),
    Equals(&'static str),
}

pub const INSTRUMENT_DENYLIST: &[Exclusion] =
    &[Exclusion::Contains("instrument"), Exclusion::Contains("woodwind"), Exclusion::Equals("wind")];

impl Exclusion {
    pub fn excludes(&self, name: &str) -> bool {
        match self {
            Exclusion::Contains(fragment) => name.contains(fragment),
            Exclusion::Equals(word) => name == *word,
        }
    }
}

pub fn is_denied_instrument(name: &str) -> bool {
    INSTRUMENT_DENYLIST.iter().any(|rule| rule.excludes(name))
}

/// Knobs for one grammar build; everything else comes from the resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarSettings {
    pub adverb_target: String,
    pub instrument_root: String,
    pub superstar_word: String,
    pub stanzas: Vec<StanzaTemplate>,
}

impl Default for GrammarSettings {
    fn default() -> Self {
        GrammarSettings {
            adverb_target: "atrocious".to_string(),
            instrument_root: "musical_instrument.n.01".to_string(),
            superstar_word: "superstar".to_string(),
            stanzas: default_stanzas(),
        }
    }
}

/// Lexicon lemma names use '_' between words.
fn display_form(lemma_name: &str) -> String {
    lemma_name.replace('_', " ")
}

fn push_unique(list: &mut Vec<String>, item: String) {
    if !list.contains(&item) {
        list.push(item);
    }
}

pub struct GrammarAssembler<'a> {
    pub pronunciations: &'a PronunciationIndex,
    pub lexicon: &'a Lexicon,
    pub conjugator: &'a dyn Conjugator,
    pub corpora: &'a Corpora,
    pub settings: &'a GrammarSettings,
}

impl<'a> GrammarAssembler<'a> {
    /// Every lemma under the instrument root, flattened in tree order, minus
    /// the denylisted entries.
    pub fn instruments(&self) -> Vec<String> {
        let synsets = self.lexicon.hyponym_closure(&self.settings.instrument_root);
        if synsets.is_empty() {
            log::warn!("Instrument root '{}' not found in lexicon", self.settings.instrument_root);
        }

        let mut instruments = Vec::new();
        for synset in synsets {
            for name in synset.lemma_names().map(display_form) {
                if !is_denied_instrument(&name) {
                    push_unique(&mut instruments, name);
                }
            }
        }
        instruments
    }

    /// All lemma names of every sense of the superstar word.
    pub fn superstars(&self) -> Vec<String> {
        let mut names = Vec::new();
        for synset in self.lexicon.synsets(&self.settings.superstar_word, None) {
            for name in synset.lemma_names().map(display_form) {
                push_unique(&mut names, name);
            }
        }
        names
    }

    pub fn pronouns(&self) -> Vec<String> {
        PronounSet::ACTIVE.iter().map(|p| p.bundle().to_string()).collect()
    }

    /// Builds the complete grammar and checks that it is self-contained.
    pub fn assemble(&self) -> Result<GrammarDocument> {
        // --- 1. Stanzas first, so a bad weight fails before the slow lookups ---
        for stanza in self.settings.stanzas.iter().filter(|s| !s.has_placeholders()) {
            log::info!("Dropping stanza without placeholders: {:?}", stanza.template.trim());
        }
        let stanzas: Vec<String> = weighted_stanzas(&self.settings.stanzas)?
            .into_iter()
            .filter(|s| s.contains('#'))
            .collect();

        // --- 2. Phonetic and derivational word lists ---
        let adverbs = adjly(self.pronunciations, &self.settings.adverb_target, &self.corpora.adjectives);
        let resolver = DerivationalResolver::new(self.lexicon, self.conjugator);
        let occupations = resolver.occupations(&self.corpora.occupations);

        // --- 3. Merge everything into one document ---
        let mut document = GrammarDocument::new();
        document.insert("atrociously", adverbs);
        document.insert("watermelon", self.corpora.fruits.clone());
        document.insert("seven", NUMERAL_WORDS.iter().map(|s| s.to_string()).collect());
        document.insert("arm", self.corpora.body_parts.clone());
        document.insert("superstar", self.superstars());
        document.insert("instrument", self.instruments());
        document.insert("encouragement", self.corpora.encouraging_words.clone());
        document.insert("setPronouns", self.pronouns());
        document.insert("setOccupation", occupations);
        document.insert("stanza", stanzas);
        document.insert("origin", vec![ORIGIN.to_string()]);

        for (key, values) in document.iter() {
            log::debug!("{}: {} rules", key, values.len());
        }

        // --- 4. Referential completeness ---
        // The bundles above bind these even when a list came out empty.
        let declared: Vec<&str> =
            OccupationEntry::BINDINGS.iter().chain(PronounSet::BINDINGS.iter()).copied().collect();
        validate_with_bindings(&document, &declared)?;
        Ok(document)
    }
}

//*** END FILE: src/grammar/assembler.rs ***//
