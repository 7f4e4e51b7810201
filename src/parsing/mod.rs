//*** START FILE: src/parsing/mod.rs ***//
pub mod cmudict_parser;

pub use cmudict_parser::{parse_cmudict, PronunciationMap};
//*** END FILE: src/parsing/mod.rs ***//
