//! Error types for document generation
//!
//! Only structural and configuration failures are errors. Recoverable
//! problems (missing titles, unknown definitions) are reported as
//! [`Diagnostic`](crate::document::Diagnostic) values on the generated
//! document instead.
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use crate::loader::LoaderError;
use std::fmt;
use thiserror::Error;

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors that abort generation
#[derive(Error, Debug)]
pub enum Error {
    /// The root schema is neither an object nor an array
    #[error("Unsupported schema type at root: {found}")]
    UnsupportedRootType { found: String },

    /// A node needs an explicit `type` but declares none
    #[error("Explicit type not defined for {breadcrumb}")]
    TypeNotDefined { breadcrumb: String },

    /// An array with neither `items` nor a combinator
    #[error("Unhandled array shape at {breadcrumb}: expected items or a combinator")]
    UnhandledArrayShape { breadcrumb: String },

    /// Lifting item constraints onto a single-typed array would lose data
    #[error("Cannot merge single-item array at {breadcrumb}: {conflict}")]
    MergeConflict {
        breadcrumb: String,
        conflict: MergeConflict,
    },

    /// A node routed as a combinator lacks the combinator keyword
    #[error("Schema object at {breadcrumb} is missing expected '{combinator}' property")]
    MissingCombinator {
        breadcrumb: String,
        combinator: &'static str,
    },

    /// The `format` keyword is outside the closed format table
    #[error("Unsupported JSON format '{format}' at {breadcrumb}")]
    UnsupportedFormat { format: String, breadcrumb: String },

    /// Reading or parsing the input failed
    #[error(transparent)]
    Loader(#[from] LoaderError),
}

/// Which part of a single-item array merge collided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeConflict {
    /// Both the array and its items define `examples`
    Examples,
    /// The array already defines an `enum`
    Enum,
}

impl fmt::Display for MergeConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeConflict::Examples => {
                write!(f, "the array and its single item type both contain examples")
            }
            MergeConflict::Enum => {
                write!(f, "the array with a single item type contains an unexpected enum")
            }
        }
    }
}

impl Error {
    /// Create an unsupported root type error
    pub fn unsupported_root_type(found: impl Into<String>) -> Self {
        Self::UnsupportedRootType {
            found: found.into(),
        }
    }

    /// Create a missing type error
    pub fn type_not_defined(breadcrumb: impl ToString) -> Self {
        Self::TypeNotDefined {
            breadcrumb: breadcrumb.to_string(),
        }
    }

    /// Create an unhandled array shape error
    pub fn unhandled_array_shape(breadcrumb: impl ToString) -> Self {
        Self::UnhandledArrayShape {
            breadcrumb: breadcrumb.to_string(),
        }
    }

    /// Create a merge conflict error
    pub fn merge_conflict(breadcrumb: impl ToString, conflict: MergeConflict) -> Self {
        Self::MergeConflict {
            breadcrumb: breadcrumb.to_string(),
            conflict,
        }
    }

    /// Create a missing combinator error
    pub fn missing_combinator(breadcrumb: impl ToString, combinator: &'static str) -> Self {
        Self::MissingCombinator {
            breadcrumb: breadcrumb.to_string(),
            combinator,
        }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(format: impl Into<String>, breadcrumb: impl ToString) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
            breadcrumb: breadcrumb.to_string(),
        }
    }

    /// Get the breadcrumb the error was raised at, if any
    pub fn breadcrumb(&self) -> Option<&str> {
        match self {
            Self::TypeNotDefined { breadcrumb }
            | Self::UnhandledArrayShape { breadcrumb }
            | Self::MergeConflict { breadcrumb, .. }
            | Self::MissingCombinator { breadcrumb, .. }
            | Self::UnsupportedFormat { breadcrumb, .. } => Some(breadcrumb),
            Self::UnsupportedRootType { .. } | Self::Loader(_) => None,
        }
    }

    /// Check if this error comes from a closed configuration table rather
    /// than from the shape of the schema
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::UnsupportedFormat { .. })
    }
}
