use thiserror::Error;

pub type Result<T> = std::result::Result<T, self::Error>;

/// Everything that can go wrong while parsing text or editing a value tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input text was absent altogether.
    #[error("input text is null")]
    NullInput,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A grammar violation, reported with the character offset where it was
    /// detected.
    #[error("{message} at character {position}")]
    Syntax { message: String, position: usize },

    #[error("Duplicate key \"{key}\" at character {position}")]
    DuplicateKey { key: String, position: usize },

    /// `Array::set` was asked to leave a hole.
    #[error("index {index} out of range for array of length {len}: index hole not allowed")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("nesting depth {depth} exceeds the limit of {max}")]
    NestingTooDeep { depth: usize, max: usize },

    /// A bug in the grammar, never caused by the input.
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Character offset the error was detected at, if it came from the parser.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Syntax { position, .. } | Error::DuplicateKey { position, .. } => Some(*position),
            _ => None,
        }
    }
}
