//*** START FILE: src/resources/mod.rs ***//
pub mod conjugation;
pub mod corpus;
pub mod lexicon;
pub mod pronunciation;

// Re-export the handles the grammar builders take by reference
pub use conjugation::{Conjugator, EnglishConjugator};
pub use corpus::Corpora;
pub use lexicon::{Lexicon, PartOfSpeech};
pub use pronunciation::{PronunciationIndex, StressPattern};
//*** END FILE: src/resources/mod.rs ***//
