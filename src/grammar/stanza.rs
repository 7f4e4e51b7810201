//*** START FILE: src/grammar/stanza.rs ***//
use crate::error::{GrammarError, Result};
use crate::types::grammar_data::StanzaTemplate;

/// Upper bound on a single template's weight. Copies are materialized, so
/// the limit keeps a typo in the config from exhausting memory.
pub const MAX_STANZA_WEIGHT: i64 = 10_000;

/// Flattens weighted stanzas into the `stanza` rule list. Tracery picks
/// uniformly, so a template with weight 3 is three times as likely.
///
/// Output follows declaration order with each template's copies adjacent.
/// Every copy is dedented and trimmed.
pub fn weighted_stanzas(templates: &[StanzaTemplate]) -> Result<Vec<String>> {
    let mut stanzas = Vec::new();
    for stanza in templates {
        let copies = usize::try_from(stanza.weight)
            .ok()
            .filter(|_| (1..=MAX_STANZA_WEIGHT).contains(&stanza.weight))
            .ok_or_else(|| GrammarError::MalformedTemplate {
                template: stanza.template.clone(),
                weight: stanza.weight,
            })?;
        let normalized = dedent(&stanza.template).trim().to_string();
        stanzas.extend(std::iter::repeat(normalized).take(copies));
    }
    Ok(stanzas)
}

/// Removes the leading whitespace common to all non-blank lines.
/// Whitespace-only lines become empty and don't count toward the margin.
pub fn dedent(text: &str) -> String {
    let margin: Option<&str> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| &line[..line.len() - line.trim_start().len()])
        .fold(None, |common, indent| match common {
            None => Some(indent),
            Some(common) => Some(common_prefix(common, indent)),
        });
    let margin = margin.unwrap_or("");

    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                line.strip_prefix(margin).unwrap_or(line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Longest shared prefix of two indentation strings, by exact character so
/// tabs and spaces never mix.
fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let shared: usize = a
        .char_indices()
        .zip(b.chars())
        .take_while(|((_, x), y)| x == y)
        .map(|((_, x), _)| x.len_utf8())
        .sum();
    &a[..shared]
}

/// The stanzas the bot shipped with, one copy each. The first one plays an
/// `#instrument#` where the bot always played the guitar.
pub fn default_stanzas() -> Vec<StanzaTemplate> {
    vec![
        StanzaTemplate::new(
            "
            my cat is amazing
            #he# can play the #instrument#
            #he# may not be an #actor#
            but #hes# a pussy #superstar#
            ",
            1,
        ),
        StanzaTemplate::new(
            "
            #he# may not be an #actor#
            #he# #acts# #atrociously#
            ",
            1,
        ),
        StanzaTemplate::new(
            "
            #he# can break my #arm# in #seven# places
            #he# can eat a whole #watermelon#
            ",
            1,
        ),
    ]
}

//*** END FILE: src/grammar/stanza.rs ***//
