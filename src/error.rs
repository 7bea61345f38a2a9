use std::fmt;

/// Unified error type for the search tree.
///
/// Structural operations never fail: inserting a present key or erasing an
/// absent one is a silent no-op. Errors only come from cursor misuse and from
/// the invariant checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A cursor was dereferenced or advanced after it ran off the end.
    ExhaustedCursor,
    /// Tree structure broke a red-black or ordering invariant.
    Corruption(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ExhaustedCursor => write!(f, "Cursor is exhausted"),
            Error::Corruption(msg) => write!(f, "Corruption: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
