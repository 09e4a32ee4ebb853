// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// Everything the core can fail with.
///
/// `Network`, `VerbNotFound` and `VerbNotParsable` are per-verb: a cache
/// population run skips the verb and carries on. The rest are fatal to the
/// operation that raised them.
#[derive(Debug, Error)]
pub enum Error {
    #[error("network error: {0}")]
    Network(String),

    #[error("verb not found on the conjugation site: {0}")]
    VerbNotFound(String),

    #[error("conjugation table not parsable for {verb}: {reason}")]
    VerbNotParsable { verb: String, reason: String },

    #[error("unknown tense: {0}")]
    UnknownTense(String),

    #[error("no conjugation tables available")]
    EmptyCorpus,

    #[error("storage error at {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("bad cache record at {}: {source}", path.display())]
    Record {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for failures that only cost us one verb.
    pub fn is_per_verb(&self) -> bool {
        matches!(
            self,
            Error::Network(_) | Error::VerbNotFound(_) | Error::VerbNotParsable { .. }
        )
    }

    pub(crate) fn not_parsable(verb: &str, reason: impl Into<String>) -> Self {
        Error::VerbNotParsable { verb: s!(verb), reason: reason.into() }
    }

    pub(crate) fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Storage { path: path.into(), source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_verb_classification() {
        assert!(Error::Network(s!("reset")).is_per_verb());
        assert!(Error::VerbNotFound(s!("xyz")).is_per_verb());
        assert!(Error::not_parsable("falloir", "short").is_per_verb());
        assert!(!Error::UnknownTense(s!("subjonctif")).is_per_verb());
        assert!(!Error::EmptyCorpus.is_per_verb());
        let io = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert!(!Error::storage("/tmp/x", io).is_per_verb());
    }
}
