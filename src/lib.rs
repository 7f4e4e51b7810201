//*** START FILE: src/lib.rs ***//

// Declare all modules that are part of this library
pub mod config;
pub mod error;
pub mod types {
    pub mod grammar_data;
}
pub mod parsing;
pub mod resources;
pub mod grammar;
pub mod grammar_io;
pub mod grammar_generator;

pub use config::Config;
pub use error::{GrammarError, Result};
pub use grammar_generator::{build_grammar, run_grammar_generation, LoadedResources, OutputTarget};
pub use types::grammar_data::GrammarDocument;

//*** END FILE: src/lib.rs ***//
