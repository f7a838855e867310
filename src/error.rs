use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("no comma found between values")]
    MissingDelimiter,
    #[error("not an integer: {token:?}")]
    InvalidNumber { token: String },
    #[error("integer out of range: {token}")]
    Overflow { token: String },
    #[error("expected at least two values, found {found}")]
    TooFewValues { found: usize },
}

/// Every way the driver can end up printing the usage message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("expected exactly one argument, got {found}")]
    ArgumentCount { found: usize },
    #[error("could not parse list: {0}")]
    Parse(#[from] ParseError),
}
