//! Resolution context: the only injected dependency of the parser
//!
//! A context turns type names into [`TypeDescriptor`]s and binds parsed
//! signatures to real members of a target type. [`TypeRegistry`] is the
//! in-memory implementation; callers with their own symbol tables implement
//! the trait directly.
//!
//! [`TypeRegistry`]: crate::TypeRegistry

use apigen_types::TypeDescriptor;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Namespace whose types may be written unqualified (`String`, `Object`, ...)
pub const DEFAULT_NAMESPACE: &str = "java.lang";

/// Handle to an existing callable member of a type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberHandle {
    /// Fully qualified name of the declaring type
    pub owner: String,
    /// Member name
    pub name: String,
    /// Declared parameter types, in order
    pub params: Vec<TypeDescriptor>,
    /// Declared result type
    pub result_type: TypeDescriptor,
    /// Position of the member in its type's declaration order
    pub index: usize,
}

impl fmt::Display for MemberHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}.{}(", self.result_type, self.owner, self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param)?;
        }
        write!(f, ")")
    }
}

/// Lookup capability used to resolve type names and bind members
pub trait ResolutionContext {
    /// Resolve a fully qualified type name
    fn resolve(&self, name: &str) -> Option<TypeDescriptor>;

    /// Find the member of `target` named `name` whose parameter types equal
    /// `params` exactly, in order
    fn bind(&self, target: &str, name: &str, params: &[TypeDescriptor]) -> Option<MemberHandle>;

    /// Namespace prefixed onto unqualified names that fail to resolve
    fn default_namespace(&self) -> Option<&str> {
        Some(DEFAULT_NAMESPACE)
    }
}

impl<T: ResolutionContext + ?Sized> ResolutionContext for &T {
    fn resolve(&self, name: &str) -> Option<TypeDescriptor> {
        (**self).resolve(name)
    }

    fn bind(&self, target: &str, name: &str, params: &[TypeDescriptor]) -> Option<MemberHandle> {
        (**self).bind(target, name, params)
    }

    fn default_namespace(&self) -> Option<&str> {
        (**self).default_namespace()
    }
}

impl<T: ResolutionContext + ?Sized> ResolutionContext for Box<T> {
    fn resolve(&self, name: &str) -> Option<TypeDescriptor> {
        (**self).resolve(name)
    }

    fn bind(&self, target: &str, name: &str, params: &[TypeDescriptor]) -> Option<MemberHandle> {
        (**self).bind(target, name, params)
    }

    fn default_namespace(&self) -> Option<&str> {
        (**self).default_namespace()
    }
}

impl<T: ResolutionContext + ?Sized> ResolutionContext for Arc<T> {
    fn resolve(&self, name: &str) -> Option<TypeDescriptor> {
        (**self).resolve(name)
    }

    fn bind(&self, target: &str, name: &str, params: &[TypeDescriptor]) -> Option<MemberHandle> {
        (**self).bind(target, name, params)
    }

    fn default_namespace(&self) -> Option<&str> {
        (**self).default_namespace()
    }
}
