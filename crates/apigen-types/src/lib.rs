//! Apigen Type Descriptors
//!
//! Resolved type representations shared by the signature parser and the
//! code generators that consume its output.

#![warn(missing_docs)]

pub mod ty;

pub use ty::{ArrayType, PrimitiveType, TypeDescriptor, NAMESPACE_SEPARATOR};
