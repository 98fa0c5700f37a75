//! Error types for the collections crate.

use thiserror::Error;

use crate::descriptor::TypeDescriptor;

/// Errors raised by [`Collection`](crate::Collection) operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CollectionError {
    /// An element's runtime type does not satisfy the declared descriptor.
    ///
    /// `position` is the index the element would have taken, which is also
    /// the number of elements committed before the failure.
    #[error("type mismatch at position {position}: collection holds {expected}, got {actual}")]
    TypeMismatch {
        expected: TypeDescriptor,
        actual: TypeDescriptor,
        position: usize,
    },

    /// `collect` was given no elements, so there is no type to infer.
    #[error("cannot collect an empty sequence: no element type to infer")]
    EmptyInput,

    /// A lookup was attempted on a collection with no elements.
    #[error("collection is empty")]
    EmptyCollection,

    /// No element satisfied the lookup predicate.
    #[error("no element matches the predicate")]
    NotFound,
}

/// Result type for collection operations.
pub type Result<T> = std::result::Result<T, CollectionError>;

/// Errors raised by [`Outline`](crate::Outline).
#[cfg(feature = "outline")]
#[derive(Debug, Error)]
pub enum OutlineError {
    /// The root handed to the outline is not an object or an array.
    #[error("outline requires an object or array root, got {0}")]
    NotAStructure(&'static str),

    /// A path segment could not be resolved.
    #[error("path '{path}' cannot be resolved at segment '{segment}'")]
    PathNotFound { path: String, segment: String },

    /// Converting to or from the nested structure failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(feature = "outline")]
impl OutlineError {
    /// Create a path-not-found error.
    pub fn path_not_found(path: impl Into<String>, segment: impl Into<String>) -> Self {
        Self::PathNotFound {
            path: path.into(),
            segment: segment.into(),
        }
    }
}
