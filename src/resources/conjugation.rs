/// Inflects a base verb form. The derivational resolver only picks which verb
/// to use; how it is inflected lives behind this trait.
pub trait Conjugator {
    fn third_person_singular(&self, verb: &str) -> String;
}

/// Rule-based English present tense, third person singular. Good enough for
/// the verbs WordNet relates to occupation nouns.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishConjugator;

const IRREGULAR: &[(&str, &str)] = &[("be", "is"), ("have", "has"), ("do", "does"), ("go", "goes")];

impl Conjugator for EnglishConjugator {
    fn third_person_singular(&self, verb: &str) -> String {
        // Lexicon lemmas join words with '_' ("look_after"); only the head word inflects.
        let phrase = verb.replace('_', " ");
        let (head, rest) = match phrase.split_once(' ') {
            Some((head, rest)) => (head, Some(rest)),
            None => (phrase.as_str(), None),
        };

        let inflected = inflect_head(head);
        match rest {
            Some(rest) => format!("{} {}", inflected, rest),
            None => inflected,
        }
    }
}

fn inflect_head(head: &str) -> String {
    if let Some((_, form)) = IRREGULAR.iter().find(|(base, _)| *base == head) {
        return form.to_string();
    }

    let before_last = head.chars().rev().nth(1);
    let consonant_before = before_last.map_or(false, |c| c.is_alphabetic() && !is_vowel(c));

    if head.ends_with('s')
        || head.ends_with('x')
        || head.ends_with('z')
        || head.ends_with("ch")
        || head.ends_with("sh")
        || (head.ends_with('o') && consonant_before)
    {
        format!("{}es", head)
    } else if head.ends_with('y') && consonant_before {
        format!("{}ies", &head[..head.len() - 1])
    } else {
        format!("{}s", head)
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}
