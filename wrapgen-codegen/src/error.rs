use thiserror::Error;

/// Result type for translating a single member or artifact.
pub type Result<T> = std::result::Result<T, Error>;

/// Why one member (or one artifact) could not be translated.
///
/// These errors never abort a run: the enclosing aggregate step records a
/// diagnostic and moves on to the next sibling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{name} has not been fixed")]
    UnresolvedReference { name: String },

    #[error("translation of lists of {kind} is not supported")]
    UnsupportedContainment { kind: String },

    #[error("{symbol} has been escaped")]
    EscapedSymbol { symbol: String },

    #[error("'{name}' is not a base abstract type")]
    UnknownBaseType { name: String },
}

impl Error {
    /// Short machine-readable reason, used as a log field.
    pub fn reason(&self) -> &'static str {
        match self {
            Error::UnresolvedReference { .. } => "unresolved_reference",
            Error::UnsupportedContainment { .. } => "unsupported_containment",
            Error::EscapedSymbol { .. } => "escaped_symbol",
            Error::UnknownBaseType { .. } => "unknown_base_type",
        }
    }

    pub(crate) fn unresolved(name: impl Into<String>) -> Self {
        Error::UnresolvedReference { name: name.into() }
    }

    pub(crate) fn unsupported(kind: impl Into<String>) -> Self {
        Error::UnsupportedContainment { kind: kind.into() }
    }

    pub(crate) fn escaped(symbol: impl Into<String>) -> Self {
        Error::EscapedSymbol {
            symbol: symbol.into(),
        }
    }
}
