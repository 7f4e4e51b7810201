//*** START FILE: src/parsing/cmudict_parser.rs ***//
use std::collections::HashMap;

/// Word -> pronunciation variants, each variant a list of ARPABET chunks.
pub type PronunciationMap = HashMap<String, Vec<Vec<String>>>;

/// Parses CMU Pronouncing Dictionary text.
///
/// Accepts both the classic `cmudict-0.7b` layout (`WORD  PH1 PH2`, `;;;`
/// comments) and the newer `cmudict.dict` layout (`word ph1 ph2 # comment`).
/// Alternative pronunciations are written `word(2)` and are appended to the
/// base word's variant list in file order. Keys are lowercased.
pub fn parse_cmudict(source_name: &str, content: &str) -> PronunciationMap {
    let mut pronunciations: PronunciationMap = HashMap::new();

    for (line_no, line) in content.lines().enumerate() {
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with(";;;") {
            continue;
        }

        // Drop inline comments ("abbe AE1 B IY0 # place, french")
        let line_cleaned = match line_trimmed.find(" #") {
            Some(comment_start) => line_trimmed[..comment_start].trim_end(),
            None => line_trimmed,
        };

        let mut parts = line_cleaned.split_whitespace();
        let word_raw = match parts.next() {
            Some(w) => w,
            None => continue,
        };
        let chunks: Vec<String> = parts.map(String::from).collect();
        if chunks.is_empty() {
            log::warn!(
                "{}:{}: entry '{}' has no phonemes, skipping",
                source_name,
                line_no + 1,
                word_raw
            );
            continue;
        }

        let word = strip_variant_marker(word_raw).to_lowercase();
        pronunciations.entry(word).or_default().push(chunks);
    }

    pronunciations
}

/// `word(2)` -> `word`. Parentheses that are not a numeric variant marker are
/// part of the word and stay.
fn strip_variant_marker(word_raw: &str) -> &str {
    if let Some(open) = word_raw.rfind('(') {
        let tail = &word_raw[open + 1..];
        if let Some(digits) = tail.strip_suffix(')') {
            if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
                return &word_raw[..open];
            }
        }
    }
    word_raw
}

//*** END FILE: src/parsing/cmudict_parser.rs ***//
