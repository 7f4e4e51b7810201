use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GrammarError>;

#[derive(Error, Debug)]
pub enum GrammarError {
    #[error("Failed to load {resource} from {path:?}: {reason}")]
    ResourceLoad {
        resource: &'static str,
        path: PathBuf,
        reason: String,
    },

    #[error("Invalid config {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error(
        "Stanza weight must be between 1 and {}, got {weight} for template {template:?}",
        crate::grammar::stanza::MAX_STANZA_WEIGHT
    )]
    MalformedTemplate { template: String, weight: i64 },

    #[error("Key '{key}' references undefined symbol '#{symbol}#'")]
    UnresolvedSymbol { key: String, symbol: String },

    #[error("Failed to write grammar to {path}: {reason}")]
    Output { path: String, reason: String },
}

impl GrammarError {
    pub(crate) fn resource(
        resource: &'static str,
        path: impl Into<PathBuf>,
        reason: impl ToString,
    ) -> Self {
        GrammarError::ResourceLoad {
            resource,
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
