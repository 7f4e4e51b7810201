//*** START FILE: src/grammar/derivation.rs ***//
use std::collections::BTreeSet;

use crate::resources::{Conjugator, Lexicon, PartOfSpeech};
use crate::types::grammar_data::OccupationEntry;

/// Finds the verb an occupation noun "does": the derivationally related verb
/// sharing the longest prefix with the noun, conjugated for he/she/it.
pub struct DerivationalResolver<'a> {
    lexicon: &'a Lexicon,
    conjugator: &'a dyn Conjugator,
}

impl<'a> DerivationalResolver<'a> {
    pub fn new(lexicon: &'a Lexicon, conjugator: &'a dyn Conjugator) -> Self {
        DerivationalResolver { lexicon, conjugator }
    }

    /// Every verb lemma derivationally related to any lemma of any noun sense
    /// of `noun`. Ordered, so selection below is reproducible.
    pub fn related_verbs(&self, noun: &str) -> BTreeSet<String> {
        let mut verbs = BTreeSet::new();
        for synset in self.lexicon.synsets(noun, Some(PartOfSpeech::Noun)) {
            for lemma in &synset.lemmas {
                for (related_synset, related_lemma) in self.lexicon.derivationally_related_forms(lemma) {
                    if related_synset.pos == PartOfSpeech::Verb {
                        verbs.insert(related_lemma.to_string());
                    }
                }
            }
        }
        verbs
    }

    /// Picks the base verb for `noun`, or None if nothing usable relates to it.
    ///
    /// Longest common prefix with the noun wins. A candidate spelled exactly
    /// like the noun is never picked. Equal prefixes go to the
    /// lexicographically first candidate; those ties are logged since the
    /// lexicon gives no better signal.
    pub fn best_verb(&self, noun: &str) -> Option<String> {
        let candidates = self.related_verbs(noun);
        let mut best: Option<(&String, usize)> = None;
        let mut tied: Vec<&String> = Vec::new();

        for candidate in candidates.iter().filter(|c| c.as_str() != noun) {
            let prefix_len = common_prefix_length(candidate, noun);
            match best {
                Some((_, best_len)) if prefix_len < best_len => {}
                Some((_, best_len)) if prefix_len == best_len => tied.push(candidate),
                _ => {
                    best = Some((candidate, prefix_len));
                    tied.clear();
                }
            }
        }

        let (winner, prefix_len) = best?;
        if !tied.is_empty() {
            log::debug!(
                "'{}': '{}' ties with {:?} on prefix length {}, keeping '{}'",
                noun,
                winner,
                tied,
                prefix_len,
                winner
            );
        }
        Some(winner.clone())
    }

    pub fn occupation_action(&self, noun: &str) -> Option<String> {
        self.best_verb(noun)
            .map(|verb| self.conjugator.third_person_singular(&verb))
    }

    pub fn resolve(&self, noun: &str) -> OccupationEntry {
        OccupationEntry { noun: noun.to_string(), action: self.occupation_action(noun) }
    }

    /// Tracery actor/action bundles for every noun that resolves, in input
    /// order. Nouns without a verb are left out.
    pub fn occupations(&self, nouns: &[String]) -> Vec<String> {
        let bundles: Vec<String> = nouns
            .iter()
            .map(|noun| self.resolve(noun))
            .filter_map(|entry| {
                if entry.action.is_none() {
                    log::debug!("No verb derivable from '{}', skipping", entry.noun);
                }
                entry.to_placeholder()
            })
            .collect();
        log::info!("Resolved actions for {} of {} occupations", bundles.len(), nouns.len());
        bundles
    }
}

/// Number of leading characters two strings share.
pub fn common_prefix_length(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::EnglishConjugator;

    const LEXICON: &str = r#"{
        "synsets": [
            {"id": "teacher.n.01", "pos": "n",
             "lemmas": [{"name": "teacher", "derivations": [{"synset": "teach.v.01", "lemma": "teach"}]},
                        {"name": "instructor", "derivations": [{"synset": "instruct.v.01", "lemma": "instruct"}]}]},
            {"id": "teach.v.01", "pos": "v", "lemmas": [{"name": "teach"}]},
            {"id": "instruct.v.01", "pos": "v", "lemmas": [{"name": "instruct"}]},

            {"id": "cook.n.01", "pos": "n",
             "lemmas": [{"name": "cook", "derivations": [{"synset": "cook.v.01", "lemma": "cook"}]}]},
            {"id": "cook.v.01", "pos": "v", "lemmas": [{"name": "cook"}]},

            {"id": "baker.n.01", "pos": "n",
             "lemmas": [{"name": "baker", "derivations": [{"synset": "bake.v.01", "lemma": "bake"},
                                                          {"synset": "bakery.n.01", "lemma": "bakery"}]}]},
            {"id": "bake.v.01", "pos": "v", "lemmas": [{"name": "bake"}]},
            {"id": "bakery.n.01", "pos": "n", "lemmas": [{"name": "bakery"}]},

            {"id": "pilot.n.01", "pos": "n",
             "lemmas": [{"name": "pilot", "derivations": [{"synset": "pilot.v.01", "lemma": "pilot"},
                                                          {"synset": "aviate.v.01", "lemma": "fly"},
                                                          {"synset": "aviate.v.01", "lemma": "aviate"}]}]},
            {"id": "aviate.v.01", "pos": "v", "lemmas": [{"name": "aviate"}, {"name": "fly"}]},
            {"id": "pilot.v.01", "pos": "v", "lemmas": [{"name": "pilot"}]},

            {"id": "poet.n.01", "pos": "n", "lemmas": [{"name": "poet"}]}
        ]
    }"#;

    fn lexicon() -> Lexicon {
        Lexicon::from_json_str(LEXICON).unwrap()
    }

    #[test]
    fn teacher_teaches() {
        let lex = lexicon();
        let resolver = DerivationalResolver::new(&lex, &EnglishConjugator);
        assert_eq!(resolver.occupation_action("teacher").as_deref(), Some("teaches"));
    }

    #[test]
    fn only_verb_senses_count() {
        let lex = lexicon();
        let resolver = DerivationalResolver::new(&lex, &EnglishConjugator);
        let verbs: Vec<String> = resolver.related_verbs("baker").into_iter().collect();
        assert_eq!(verbs, vec!["bake"]);
        assert_eq!(resolver.occupation_action("baker").as_deref(), Some("bakes"));
    }

    #[test]
    fn never_returns_the_noun_itself() {
        let lex = lexicon();
        let resolver = DerivationalResolver::new(&lex, &EnglishConjugator);
        assert_eq!(resolver.best_verb("cook"), None);
        // "pilot" the verb is skipped; "aviate" and "fly" tie at 0, lexicographic wins.
        assert_eq!(resolver.best_verb("pilot").as_deref(), Some("aviate"));
        for noun in ["teacher", "cook", "baker", "pilot", "poet"] {
            assert_ne!(resolver.best_verb(noun).as_deref(), Some(noun));
        }
    }

    #[test]
    fn unknown_or_underived_nouns_are_absent() {
        let lex = lexicon();
        let resolver = DerivationalResolver::new(&lex, &EnglishConjugator);
        assert_eq!(resolver.occupation_action("poet"), None);
        assert_eq!(resolver.occupation_action("astronaut"), None);
    }

    #[test]
    fn occupations_skip_unresolved_nouns_and_keep_order() {
        let lex = lexicon();
        let resolver = DerivationalResolver::new(&lex, &EnglishConjugator);
        let nouns: Vec<String> = ["poet", "teacher", "cook", "baker"].iter().map(|s| s.to_string()).collect();
        let bundles = resolver.occupations(&nouns);
        assert_eq!(bundles, vec!["[actor:teacher][acts:teaches]", "[actor:baker][acts:bakes]"]);
        assert!(bundles.len() <= nouns.len());
    }

    #[test]
    fn prefix_length_stops_at_first_mismatch() {
        assert_eq!(common_prefix_length("teach", "teacher"), 5);
        assert_eq!(common_prefix_length("instruct", "teacher"), 0);
        assert_eq!(common_prefix_length("abcx", "abyx"), 2);
        assert_eq!(common_prefix_length("", "abc"), 0);
    }
}
//*** END FILE: src/grammar/derivation.rs ***//
