//! The [`error`](self) module defines the [`Error`] type that is returned by
//! the fallible operations of this crate.

use thiserror::Error;

/// Boxed error returned by a fallible property accessor.
pub type AccessorError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error returned when properties could not be read or a reported matcher
/// could not be pulled.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested property is not exposed by the object.
    #[error("Type `{type_name}` does not expose a readable property named `{name}`.")]
    UnknownProperty {
        /// Name of the type the property was requested from.
        type_name: &'static str,

        /// Name of the requested property.
        name: String,
    },

    /// The property was requested from an absent (`None`) object.
    #[error("Unable to read property `{name}` of a null object.")]
    NullTarget {
        /// Name of the requested property.
        name: String,
    },

    /// The accessor of the property failed.
    #[error("The accessor of property `{name}` failed: {source}")]
    Accessor {
        /// Name of the property.
        name: String,

        /// Error returned by the accessor.
        #[source]
        source: AccessorError,
    },

    /// Properties could not be extracted from a reference object.
    #[error("Unable to extract the properties of `{type_name}`: {source}")]
    Extraction {
        /// Name of the type of the reference object.
        type_name: &'static str,

        /// Error that caused the extraction to fail.
        #[source]
        source: Box<Error>,
    },

    /// A reported matcher was pulled for a different argument type than it was
    /// reported for.
    #[error("Expected a matcher for argument type `{expected}`, but the reported matcher is for `{reported}`.")]
    ArgumentType {
        /// Argument type the matcher was pulled for.
        expected: &'static str,

        /// Argument type the matcher was reported for.
        reported: &'static str,
    },
}

impl Error {
    /// Create a new [`Error::Accessor`] from any error returned by a property
    /// accessor.
    pub fn accessor<E>(name: impl Into<String>, source: E) -> Self
    where
        E: Into<AccessorError>,
    {
        Self::Accessor {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a new [`Error::UnknownProperty`] for the type `T`.
    pub fn unknown_property<T: ?Sized>(name: impl Into<String>) -> Self {
        Self::UnknownProperty {
            type_name: std::any::type_name::<T>(),
            name: name.into(),
        }
    }
}
