//*** START FILE: src/grammar/stress.rs ***//
use crate::resources::PronunciationIndex;

/// Keeps the candidates that share at least one stress pattern with `word`,
/// in their original order. A word the dictionary doesn't know matches
/// nothing.
pub fn matching_stresses(index: &PronunciationIndex, word: &str, candidates: &[String]) -> Vec<String> {
    let target = index.stress_patterns(word);
    if target.is_empty() {
        log::debug!("'{}' has no pronunciation, no stress matches", word);
        return Vec::new();
    }

    candidates
        .iter()
        .filter(|c| index.stress_patterns(c).overlaps(&target))
        .cloned()
        .collect()
}

/// Adverbs that scan like `word`: stress-matching adjectives with "ly"
/// appended, kept only when the dictionary knows the resulting word.
pub fn adjly(index: &PronunciationIndex, word: &str, adjectives: &[String]) -> Vec<String> {
    let adverbs: Vec<String> = matching_stresses(index, word, adjectives)
        .into_iter()
        .map(|adj| adj + "ly")
        .filter(|adverb| index.contains(adverb))
        .collect();
    log::debug!("{} adverbs scan like '{}'", adverbs.len(), word);
    adverbs
}

//*** END FILE: src/grammar/stress.rs ***//
