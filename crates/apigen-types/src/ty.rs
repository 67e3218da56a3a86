//! Core type descriptors for resolved signature types

use serde::{Serialize, Serializer};
use std::fmt;

/// Separator between namespace segments in a fully qualified type name
pub const NAMESPACE_SEPARATOR: char = '.';

/// Built-in scalar, boolean and void types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveType {
    /// 8-bit signed integer (`byte`)
    Byte,
    /// 16-bit signed integer (`short`)
    Short,
    /// 32-bit signed integer (`int`)
    Int,
    /// 64-bit signed integer (`long`)
    Long,
    /// 32-bit IEEE 754 float (`float`)
    Float,
    /// 64-bit IEEE 754 float (`double`)
    Double,
    /// UTF-16 code unit (`char`)
    Char,
    /// The `boolean` type
    Boolean,
    /// The `void` type (for methods with no return value)
    Void,
}

impl PrimitiveType {
    /// Every primitive, in declaration order
    pub const ALL: [PrimitiveType; 9] = [
        PrimitiveType::Byte,
        PrimitiveType::Short,
        PrimitiveType::Int,
        PrimitiveType::Long,
        PrimitiveType::Float,
        PrimitiveType::Double,
        PrimitiveType::Char,
        PrimitiveType::Boolean,
        PrimitiveType::Void,
    ];

    /// Keyword used to spell this primitive in a signature
    pub fn keyword(&self) -> &'static str {
        match self {
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Char => "char",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Void => "void",
        }
    }

    /// Look up a primitive by its keyword (exact, case-sensitive match)
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.keyword() == keyword)
    }

    /// Check if this primitive denotes "no value"
    pub fn is_void(&self) -> bool {
        matches!(self, PrimitiveType::Void)
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Array type: `T[]`, `T[][]`, ...
///
/// The component is never itself an array; nesting is expressed through
/// `dimensions` so that `int[][]` has exactly one representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayType {
    /// Innermost (non-array) component type
    pub component: Box<TypeDescriptor>,
    /// Number of dimensions, always at least 1
    pub dimensions: usize,
}

/// A resolved type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// Built-in primitive (int, boolean, void, ...)
    Primitive(PrimitiveType),

    /// Named type, identified by its fully qualified name
    Named(String),

    /// N-dimensional array of a primitive or named component
    Array(ArrayType),
}

impl TypeDescriptor {
    /// Create a named type descriptor
    pub fn named(qualified_name: impl Into<String>) -> Self {
        TypeDescriptor::Named(qualified_name.into())
    }

    /// Wrap `element` in `dimensions` array dimensions
    ///
    /// Wrapping an array adds to its existing dimensions. Zero dimensions
    /// returns `element` unchanged.
    pub fn array_of(element: TypeDescriptor, dimensions: usize) -> Self {
        if dimensions == 0 {
            return element;
        }
        match element {
            TypeDescriptor::Array(inner) => TypeDescriptor::Array(ArrayType {
                component: inner.component,
                dimensions: inner.dimensions + dimensions,
            }),
            component => TypeDescriptor::Array(ArrayType {
                component: Box::new(component),
                dimensions,
            }),
        }
    }

    /// Check if this is a primitive type
    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeDescriptor::Primitive(_))
    }

    /// Check if this is the `void` type
    pub fn is_void(&self) -> bool {
        matches!(self, TypeDescriptor::Primitive(p) if p.is_void())
    }

    /// Check if this is an array type
    pub fn is_array(&self) -> bool {
        matches!(self, TypeDescriptor::Array(_))
    }

    /// Get the array type if this is an array
    pub fn as_array(&self) -> Option<&ArrayType> {
        match self {
            TypeDescriptor::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Number of array dimensions (0 for non-arrays)
    pub fn dimensions(&self) -> usize {
        self.as_array().map_or(0, |a| a.dimensions)
    }

    /// Name without its namespace, e.g. `String` for `java.lang.String`
    pub fn simple_name(&self) -> String {
        match self {
            TypeDescriptor::Primitive(p) => p.keyword().to_string(),
            TypeDescriptor::Named(name) => match name.rfind(NAMESPACE_SEPARATOR) {
                Some(pos) => name[pos + 1..].to_string(),
                None => name.clone(),
            },
            TypeDescriptor::Array(a) => {
                format!("{}{}", a.component.simple_name(), "[]".repeat(a.dimensions))
            }
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Primitive(p) => write!(f, "{}", p),
            TypeDescriptor::Named(name) => f.write_str(name),
            TypeDescriptor::Array(a) => {
                write!(f, "{}", a.component)?;
                for _ in 0..a.dimensions {
                    f.write_str("[]")?;
                }
                Ok(())
            }
        }
    }
}

impl From<PrimitiveType> for TypeDescriptor {
    fn from(p: PrimitiveType) -> Self {
        TypeDescriptor::Primitive(p)
    }
}

/// Serialized as the canonical type name (`int[][]`, `java.lang.String`)
impl Serialize for TypeDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
