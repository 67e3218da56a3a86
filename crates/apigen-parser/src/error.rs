//! Error types for signature parsing and registry construction

use apigen_types::TypeDescriptor;
use thiserror::Error;

/// Errors that abort a parse
///
/// None of these are recoverable: a failing batch produces no output.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// Raw text does not match the signature grammar
    #[error("Invalid method signature '{signature}': {reason}")]
    MalformedSignature {
        /// Signature text after generic and modifier stripping
        signature: String,
        /// What part of the grammar did not match
        reason: String,
    },

    /// A type name could not be resolved through any fallback
    #[error("Error loading type '{name}'")]
    TypeResolution {
        /// Type name as written in the signature
        name: String,
    },

    /// No member on the target type has the parsed name and exact parameter types
    #[error("Method not found [{signature}] in type {target}")]
    MemberBinding {
        /// Signature that failed to bind
        signature: String,
        /// Target type the signature was bound against
        target: String,
    },

    /// The same argument name resolves to different types across the batch
    #[error("Argument [{name}] is used in multiple methods with different types {first}, {second}")]
    ArgumentConsistency {
        /// Argument name
        name: String,
        /// Type seen first
        first: TypeDescriptor,
        /// Conflicting type
        second: TypeDescriptor,
    },
}

impl ParseError {
    /// Create a malformed-signature error
    pub fn malformed(signature: impl Into<String>, reason: impl Into<String>) -> Self {
        ParseError::MalformedSignature {
            signature: signature.into(),
            reason: reason.into(),
        }
    }
}

/// Errors building a [`TypeRegistry`](crate::TypeRegistry) from a manifest
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegistryError {
    /// A member declaration could not be parsed or resolved
    #[error("Invalid member '{declaration}' in class {class}: {source}")]
    InvalidMember {
        /// Owning class
        class: String,
        /// Declaration text
        declaration: String,
        /// Underlying parse failure
        source: ParseError,
    },

    /// The same name and parameter types were declared twice on one class
    #[error("Duplicate member '{member}' in class {class}")]
    DuplicateMember {
        /// Owning class
        class: String,
        /// Rendered member signature
        member: String,
    },

    /// Two manifest entries declare the same class
    #[error("Class {0} is declared more than once")]
    DuplicateClass(String),

    /// A class or type name is empty or not well formed
    #[error("Invalid type name '{0}'")]
    InvalidTypeName(String),
}
