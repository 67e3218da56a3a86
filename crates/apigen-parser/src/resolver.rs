//! Type resolver
//!
//! Maps type text from a signature to a [`TypeDescriptor`]. Lookup order:
//!
//! 1. primitive keywords (`int`, `boolean`, `void`, ...), exact match
//! 2. the name as a fully qualified type in the resolution context
//! 3. a trailing `[]` suffix, resolving the base name recursively (`void`
//!    has no array form)
//! 4. for unqualified names, the context's default namespace

use crate::context::ResolutionContext;
use crate::error::ParseError;
use apigen_types::{PrimitiveType, TypeDescriptor, NAMESPACE_SEPARATOR};
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

const ARRAY_SUFFIX: &str = "[]";

/// Primitive keyword table, shared and immutable
static PRIMITIVE_TYPES: LazyLock<FxHashMap<&'static str, PrimitiveType>> = LazyLock::new(|| {
    PrimitiveType::ALL
        .into_iter()
        .map(|p| (p.keyword(), p))
        .collect()
});

/// Resolves type text against a [`ResolutionContext`]
pub struct TypeResolver<'a, C: ?Sized> {
    context: &'a C,
}

impl<'a, C: ResolutionContext + ?Sized> TypeResolver<'a, C> {
    /// Create a resolver over `context`
    pub fn new(context: &'a C) -> Self {
        TypeResolver { context }
    }

    /// Resolve `name`, failing with [`ParseError::TypeResolution`]
    pub fn resolve(&self, name: &str) -> Result<TypeDescriptor, ParseError> {
        self.try_resolve(name).ok_or_else(|| ParseError::TypeResolution {
            name: name.to_string(),
        })
    }

    fn try_resolve(&self, name: &str) -> Option<TypeDescriptor> {
        if let Some(&primitive) = PRIMITIVE_TYPES.get(name) {
            return Some(TypeDescriptor::Primitive(primitive));
        }

        if let Some(ty) = self.context.resolve(name) {
            return Some(ty);
        }

        if let Some((base, dimensions)) = split_array_suffix(name) {
            let component = self.try_resolve(base)?;
            if component.is_void() {
                return None;
            }
            return Some(TypeDescriptor::array_of(component, dimensions));
        }

        if name.contains(NAMESPACE_SEPARATOR) {
            return None;
        }
        let namespace = self.context.default_namespace()?;
        self.context
            .resolve(&format!("{}{}{}", namespace, NAMESPACE_SEPARATOR, name))
    }
}

/// Split `Foo[][]` into `("Foo", 2)`; `None` when there is no suffix
fn split_array_suffix(name: &str) -> Option<(&str, usize)> {
    let mut base = name;
    let mut dimensions = 0;
    while let Some(stripped) = base.strip_suffix(ARRAY_SUFFIX) {
        base = stripped.trim_end();
        dimensions += 1;
    }
    if dimensions == 0 || base.is_empty() {
        return None;
    }
    Some((base, dimensions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TypeRegistry;

    #[test]
    fn test_split_array_suffix() {
        assert_eq!(split_array_suffix("int[]"), Some(("int", 1)));
        assert_eq!(split_array_suffix("a.B[][][]"), Some(("a.B", 3)));
        assert_eq!(split_array_suffix("int"), None);
        assert_eq!(split_array_suffix("[]"), None);
        assert_eq!(split_array_suffix("int[2]"), None);
    }

    #[test]
    fn test_primitives_are_case_sensitive() {
        let registry = TypeRegistry::new();
        let resolver = TypeResolver::new(&registry);
        assert_eq!(resolver.resolve("int").unwrap(), PrimitiveType::Int.into());
        assert_eq!(resolver.resolve("void").unwrap(), PrimitiveType::Void.into());
        assert!(matches!(
            resolver.resolve("Int"),
            Err(ParseError::TypeResolution { name }) if name == "Int"
        ));
    }

    #[test]
    fn test_qualified_name_skips_default_namespace() {
        let mut registry = TypeRegistry::new();
        registry.register_type("java.lang.util.Thing");
        let resolver = TypeResolver::new(&registry);
        assert!(resolver.resolve("util.Thing").is_err());
    }

    #[test]
    fn test_array_of_default_namespace_type() {
        let registry = TypeRegistry::with_core_types();
        let resolver = TypeResolver::new(&registry);
        assert_eq!(
            resolver.resolve("String[][]").unwrap(),
            TypeDescriptor::array_of(TypeDescriptor::named("java.lang.String"), 2)
        );
    }

    #[test]
    fn test_void_arrays_rejected() {
        let registry = TypeRegistry::with_core_types();
        let resolver = TypeResolver::new(&registry);
        for name in ["void[]", "void[][]"] {
            assert_eq!(
                resolver.resolve(name),
                Err(ParseError::TypeResolution {
                    name: name.to_string()
                })
            );
        }
        assert!(resolver.resolve("void").unwrap().is_void());
    }

    #[test]
    fn test_error_carries_original_text() {
        let registry = TypeRegistry::with_core_types();
        let resolver = TypeResolver::new(&registry);
        match resolver.resolve("Missing[]") {
            Err(ParseError::TypeResolution { name }) => assert_eq!(name, "Missing[]"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
