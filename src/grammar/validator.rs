//*** START FILE: src/grammar/validator.rs ***//
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

use crate::error::{GrammarError, Result};
use crate::types::grammar_data::GrammarDocument;

/// Matches the symbol a Tracery push action binds, e.g. `he` in `[he:she]`.
fn binding_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\[([A-Za-z0-9_]+):").expect("binding pattern is a valid regex"))
}

/// Symbols that some rule binds at expansion time through a push action.
pub fn bound_symbols(document: &GrammarDocument) -> BTreeSet<String> {
    document
        .iter()
        .flat_map(|(_, values)| values.iter())
        .flat_map(|value| binding_pattern().captures_iter(value))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Every symbol a rule string expands, including the ones inside actions.
/// Modifiers (`#animal.capitalize#`) are stripped.
pub fn symbol_references(text: &str) -> Vec<String> {
    let mut refs = Vec::new();
    collect_references(text, &mut refs);
    refs
}

fn collect_references(text: &str, refs: &mut Vec<String>) {
    let mut depth = 0usize;
    let mut in_tag = false;
    let mut buf = String::new();

    for c in text.chars() {
        match c {
            '[' => {
                depth += 1;
                if depth > 1 || in_tag {
                    buf.push(c);
                }
            }
            ']' if depth > 0 => {
                depth -= 1;
                if depth == 0 && !in_tag {
                    handle_action(&buf, refs);
                    buf.clear();
                } else {
                    buf.push(c);
                }
            }
            '#' if depth == 0 => {
                if in_tag {
                    handle_tag(&buf, refs);
                    buf.clear();
                }
                in_tag = !in_tag;
            }
            _ => {
                if in_tag || depth > 0 {
                    buf.push(c);
                }
            }
        }
    }
}

/// `[a:#b#][#c#]symbol.mod` -> actions first, then the symbol itself.
fn handle_tag(tag: &str, refs: &mut Vec<String>) {
    let mut rest = tag;
    while rest.starts_with('[') {
        match matching_bracket(rest) {
            Some(end) => {
                handle_action(&rest[1..end], refs);
                rest = &rest[end + 1..];
            }
            None => break,
        }
    }
    let symbol = rest.split('.').next().unwrap_or("").trim();
    if !symbol.is_empty() {
        refs.push(symbol.to_string());
    }
}

fn handle_action(action: &str, refs: &mut Vec<String>) {
    match action.split_once(':') {
        Some((_, value)) => collect_references(value, refs),
        None => collect_references(action, refs),
    }
}

fn matching_bracket(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Checks that every `#symbol#` used anywhere in the document is either a
/// top-level key or bound by a push action somewhere in the document.
pub fn validate(document: &GrammarDocument) -> Result<()> {
    validate_with_bindings(document, &[])
}

/// Like [`validate`], but `declared` symbols also count as defined. They come
/// from push-action lists that may have ended up empty (no occupation
/// resolved), which is only worth a warning.
pub fn validate_with_bindings(document: &GrammarDocument, declared: &[&str]) -> Result<()> {
    let bound = bound_symbols(document);

    for (key, values) in document.iter() {
        for value in values {
            for symbol in symbol_references(value) {
                match document.get(&symbol) {
                    Some(rules) if rules.is_empty() => {
                        log::warn!("'{}' references '{}', which has no rules", key, symbol);
                    }
                    Some(_) => {}
                    None if bound.contains(&symbol) => {}
                    None if declared.contains(&symbol.as_str()) => {
                        log::warn!("'{}' references '{}', which no rule binds", key, symbol);
                    }
                    None => {
                        return Err(GrammarError::UnresolvedSymbol { key: key.clone(), symbol });
                    }
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(rules: &[(&str, &[&str])]) -> GrammarDocument {
        let mut document = GrammarDocument::new();
        for (key, values) in rules {
            document.insert(key, values.iter().map(|s| s.to_string()).collect());
        }
        document
    }

    #[test]
    fn finds_plain_and_nested_references() {
        assert_eq!(symbol_references("#he# can eat a whole #watermelon#"), vec!["he", "watermelon"]);
        assert_eq!(
            symbol_references("#[#setPronouns#][#setOccupation#]stanza#"),
            vec!["setPronouns", "setOccupation", "stanza"]
        );
        assert_eq!(symbol_references("[hero:#name.capitalize#]#hero#"), vec!["name", "hero"]);
        assert!(symbol_references("[he:she][hes:she's]").is_empty());
        assert!(symbol_references("no tags at all").is_empty());
    }

    #[test]
    fn bindings_come_from_push_actions() {
        let document = doc(&[
            ("setPronouns", &["[he:he][him:him][hes:he's]"]),
            ("setOccupation", &["[actor:teacher][acts:teaches]"]),
        ]);
        let bound: Vec<String> = bound_symbols(&document).into_iter().collect();
        assert_eq!(bound, vec!["actor", "acts", "he", "hes", "him"]);
    }

    #[test]
    fn accepts_complete_grammar() {
        let document = doc(&[
            ("origin", &["#[#setPronouns#]stanza#"]),
            ("setPronouns", &["[he:she][hes:she's]"]),
            ("stanza", &["#hes# a #superstar#"]),
            ("superstar", &["star"]),
        ]);
        assert!(validate(&document).is_ok());
    }

    #[test]
    fn rejects_undefined_symbol() {
        let document = doc(&[("origin", &["#stanza#"]), ("stanza", &["#he# plays the #kazoo#"]), ("he", &["it"])]);
        match validate(&document).unwrap_err() {
            GrammarError::UnresolvedSymbol { key, symbol } => {
                assert_eq!(key, "stanza");
                assert_eq!(symbol, "kazoo");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn declared_bindings_survive_an_empty_source_list() {
        let document = doc(&[
            ("origin", &["#[#setOccupation#]stanza#"]),
            ("setOccupation", &[]),
            ("stanza", &["#he# may not be an #actor#"]),
        ]);
        assert!(validate_with_bindings(&document, &["actor", "acts", "he", "him", "hes"]).is_ok());
        match validate(&document).unwrap_err() {
            GrammarError::UnresolvedSymbol { symbol, .. } => assert_eq!(symbol, "he"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(matches!(
            validate_with_bindings(&document, &["actor"]),
            Err(GrammarError::UnresolvedSymbol { symbol, .. }) if symbol == "he"
        ));
    }

    #[test]
    fn empty_rule_lists_are_not_fatal() {
        let document = doc(&[("origin", &["#atrociously#"]), ("atrociously", &[])]);
        assert!(validate(&document).is_ok());
    }
}
//*** END FILE: src/grammar/validator.rs ***//
