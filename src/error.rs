use thiserror::Error;

/// Error parsing a version tag or an identifier string representation.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum ParseError {
    /// The version tag is none of `v1`, `v4` or `v7`.
    #[error("unknown identifier version tag '{0}'")]
    UnknownVersion(String),

    /// The input is not 32 hexadecimal digits.
    #[error("invalid identifier string representation")]
    InvalidIdentifier,
}
