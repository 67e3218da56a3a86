//! Parsed method models

use crate::context::MemberHandle;
use apigen_types::TypeDescriptor;
use serde::Serialize;
use std::fmt;

/// A named, typed method argument
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Argument {
    name: String,
    #[serde(rename = "type")]
    ty: TypeDescriptor,
}

impl Argument {
    /// Create an argument
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Argument {
            name: name.into(),
            ty,
        }
    }

    /// Argument name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved argument type
    pub fn ty(&self) -> &TypeDescriptor {
        &self.ty
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

/// A resolved signature bound to a member of the target type
///
/// Everything except the unique name is fixed at construction; the unique
/// name is assigned once the whole batch has been sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    unique_name: Option<String>,
    name: String,
    result_type: TypeDescriptor,
    arguments: Vec<Argument>,
    member: MemberHandle,
}

impl MethodModel {
    /// Create a model with no unique name
    pub fn new(
        name: impl Into<String>,
        result_type: TypeDescriptor,
        arguments: Vec<Argument>,
        member: MemberHandle,
    ) -> Self {
        MethodModel {
            unique_name: None,
            name: name.into(),
            result_type,
            arguments,
            member,
        }
    }

    /// Declared method name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved return type
    pub fn result_type(&self) -> &TypeDescriptor {
        &self.result_type
    }

    /// Arguments in declaration order
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// Argument types in declaration order
    pub fn argument_types(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.arguments.iter().map(Argument::ty)
    }

    /// Member this model is bound to
    pub fn member(&self) -> &MemberHandle {
        &self.member
    }

    /// Collision-free identifier, present once the batch is canonicalized
    pub fn unique_name(&self) -> Option<&str> {
        self.unique_name.as_deref()
    }

    pub(crate) fn set_unique_name(&mut self, unique_name: String) {
        self.unique_name = Some(unique_name);
    }
}

impl fmt::Display for MethodModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}(", self.result_type, self.name)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", argument)?;
        }
        write!(f, ");")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apigen_types::PrimitiveType;

    fn model() -> MethodModel {
        let string = TypeDescriptor::named("java.lang.String");
        let arguments = vec![
            Argument::new("key", string.clone()),
            Argument::new("ids", TypeDescriptor::array_of(PrimitiveType::Long.into(), 1)),
        ];
        let member = MemberHandle {
            owner: "com.example.Api".to_string(),
            name: "lookup".to_string(),
            params: arguments.iter().map(|a| a.ty().clone()).collect(),
            result_type: string.clone(),
            index: 3,
        };
        MethodModel::new("lookup", string, arguments, member)
    }

    #[test]
    fn test_display() {
        assert_eq!(
            model().to_string(),
            "java.lang.String lookup(java.lang.String key, long[] ids);"
        );
        assert_eq!(Argument::new("x", PrimitiveType::Int.into()).to_string(), "int x");
    }

    #[test]
    fn test_unique_name_lifecycle() {
        let mut m = model();
        assert_eq!(m.unique_name(), None);
        m.set_unique_name("LOOKUP".to_string());
        assert_eq!(m.unique_name(), Some("LOOKUP"));
    }

    #[test]
    fn test_argument_equality() {
        let a = Argument::new("x", PrimitiveType::Int.into());
        assert_eq!(a, Argument::new("x", PrimitiveType::Int.into()));
        assert_ne!(a, Argument::new("y", PrimitiveType::Int.into()));
        assert_ne!(a, Argument::new("x", PrimitiveType::Long.into()));
    }

    #[test]
    fn test_argument_types() {
        let types: Vec<String> = model().argument_types().map(|t| t.to_string()).collect();
        assert_eq!(types, vec!["java.lang.String", "long[]"]);
    }
}
