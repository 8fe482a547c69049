use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading an export or converting its entries
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The export does not have the expected top-level layout or version
    #[error("unexpected export format: {0}")]
    Format(String),

    /// The reader was queried before a successful load
    #[error("export not loaded: call load() before reading entries")]
    State,

    /// `text` leaked into the metadata view of an entry
    #[error("entry metadata still contains `text` after extraction")]
    Invariant,

    #[error("entry is not a JSON object")]
    NotAnObject,

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` should be {expected}")]
    UnexpectedType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("unparsable date `{0}`")]
    InvalidDate(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize front matter: {0}")]
    FrontMatter(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
