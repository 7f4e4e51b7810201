//*** START FILE: src/grammar/mod.rs ***//
pub mod assembler;
pub mod derivation;
pub mod stanza;
pub mod stress;
pub mod validator;

// Re-export the entry points the binary and integration tests use
pub use assembler::{GrammarAssembler, GrammarSettings, INSTRUMENT_DENYLIST};
pub use derivation::DerivationalResolver;
pub use stanza::{default_stanzas, weighted_stanzas};
pub use stress::{adjly, matching_stresses};
pub use validator::{validate, validate_with_bindings};
//*** END FILE: src/grammar/mod.rs ***//
