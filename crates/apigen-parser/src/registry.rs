//! In-memory type registry
//!
//! A reflection-free [`ResolutionContext`]: resolvable type names and the
//! members of each target class are registered up front, either in code or
//! from a declarative [`RegistryManifest`] whose members are written in the
//! same signature syntax the parser accepts.

use crate::context::{MemberHandle, ResolutionContext, DEFAULT_NAMESPACE};
use crate::error::RegistryError;
use crate::resolver::TypeResolver;
use crate::tokenizer::{self, is_identifier};
use apigen_types::{TypeDescriptor, NAMESPACE_SEPARATOR};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// Simple names of the types registered by [`TypeRegistry::with_core_types`]
pub const CORE_TYPES: [&str; 22] = [
    "Object",
    "String",
    "CharSequence",
    "StringBuilder",
    "Number",
    "Byte",
    "Short",
    "Integer",
    "Long",
    "Float",
    "Double",
    "Character",
    "Boolean",
    "Void",
    "Class",
    "Enum",
    "Iterable",
    "Comparable",
    "Runnable",
    "Throwable",
    "Exception",
    "RuntimeException",
];

/// Members declared by one class, in declaration order
#[derive(Debug, Clone, Default)]
pub struct ClassInfo {
    name: String,
    members: Vec<MemberHandle>,
    /// Member name to positions in `members`
    member_indices: FxHashMap<String, Vec<usize>>,
}

impl ClassInfo {
    /// Create a class with no members
    pub fn new(name: impl Into<String>) -> Self {
        ClassInfo {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Fully qualified class name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declare a method; fails if one with the same name and parameter types exists
    pub fn add_method(
        &mut self,
        name: impl Into<String>,
        params: Vec<TypeDescriptor>,
        result_type: TypeDescriptor,
    ) -> Result<&MemberHandle, RegistryError> {
        let name = name.into();
        if let Some(existing) = self.find(&name, &params) {
            return Err(RegistryError::DuplicateMember {
                class: self.name.clone(),
                member: existing.to_string(),
            });
        }

        let index = self.members.len();
        self.member_indices.entry(name.clone()).or_default().push(index);
        self.members.push(MemberHandle {
            owner: self.name.clone(),
            name,
            params,
            result_type,
            index,
        });
        Ok(&self.members[index])
    }

    /// Find the member with `name` and exactly these parameter types
    pub fn find(&self, name: &str, params: &[TypeDescriptor]) -> Option<&MemberHandle> {
        self.member_indices
            .get(name)?
            .iter()
            .map(|&i| &self.members[i])
            .find(|m| m.params == params)
    }

    /// Check if any overload named `name` exists
    pub fn has_method(&self, name: &str) -> bool {
        self.member_indices.contains_key(name)
    }

    /// All members, in declaration order
    pub fn methods(&self) -> &[MemberHandle] {
        &self.members
    }
}

/// Registry of resolvable types and bindable class members
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: FxHashSet<String>,
    classes: FxHashMap<String, ClassInfo>,
    default_namespace: Option<String>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Create an empty registry using [`DEFAULT_NAMESPACE`]
    pub fn new() -> Self {
        TypeRegistry {
            types: FxHashSet::default(),
            classes: FxHashMap::default(),
            default_namespace: Some(DEFAULT_NAMESPACE.to_string()),
        }
    }

    /// Create a registry pre-populated with [`CORE_TYPES`] in [`DEFAULT_NAMESPACE`]
    pub fn with_core_types() -> Self {
        let mut registry = Self::new();
        for name in CORE_TYPES {
            registry.register_type(format!("{}{}{}", DEFAULT_NAMESPACE, NAMESPACE_SEPARATOR, name));
        }
        registry
    }

    /// Replace the namespace used for unqualified names (`None` disables the fallback)
    pub fn with_default_namespace(mut self, namespace: Option<String>) -> Self {
        self.default_namespace = namespace;
        self
    }

    /// Make a fully qualified type name resolvable
    pub fn register_type(&mut self, qualified_name: impl Into<String>) {
        self.types.insert(qualified_name.into());
    }

    /// Register a class and its members; the class name becomes resolvable
    ///
    /// Replaces any class previously registered under the same name.
    pub fn register_class(&mut self, class: ClassInfo) {
        self.types.insert(class.name.clone());
        self.classes.insert(class.name.clone(), class);
    }

    /// Check if a fully qualified name is registered
    pub fn contains_type(&self, qualified_name: &str) -> bool {
        self.types.contains(qualified_name)
    }

    /// Look up a registered class
    pub fn class(&self, name: &str) -> Option<&ClassInfo> {
        self.classes.get(name)
    }

    /// Build a registry from a manifest
    ///
    /// All type and class names are registered before any member is
    /// compiled, so members may reference classes declared later.
    pub fn from_manifest(manifest: &RegistryManifest) -> Result<Self, RegistryError> {
        let mut registry = if manifest.core_types {
            Self::with_core_types()
        } else {
            Self::new()
        };
        if let Some(namespace) = &manifest.default_namespace {
            validate_type_name(namespace)?;
            registry.default_namespace = Some(namespace.clone());
        }

        for name in &manifest.types {
            validate_type_name(name)?;
            registry.register_type(name.clone());
        }
        let mut declared = FxHashSet::default();
        for class in &manifest.classes {
            validate_type_name(&class.name)?;
            if !declared.insert(class.name.as_str()) {
                return Err(RegistryError::DuplicateClass(class.name.clone()));
            }
            registry.register_type(class.name.clone());
        }

        let mut classes = Vec::with_capacity(manifest.classes.len());
        for class in &manifest.classes {
            classes.push(compile_class(&registry, class)?);
        }
        for class in classes {
            registry.register_class(class);
        }

        Ok(registry)
    }
}

impl ResolutionContext for TypeRegistry {
    fn resolve(&self, name: &str) -> Option<TypeDescriptor> {
        self.types
            .contains(name)
            .then(|| TypeDescriptor::named(name))
    }

    fn bind(&self, target: &str, name: &str, params: &[TypeDescriptor]) -> Option<MemberHandle> {
        self.classes.get(target)?.find(name, params).cloned()
    }

    fn default_namespace(&self) -> Option<&str> {
        self.default_namespace.as_deref()
    }
}

/// Declarative registry contents
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct RegistryManifest {
    /// Pre-register [`CORE_TYPES`] (default: true)
    #[serde(default = "default_core_types")]
    pub core_types: bool,

    /// Override of the namespace used for unqualified names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_namespace: Option<String>,

    /// Additional fully qualified type names
    #[serde(default)]
    pub types: Vec<String>,

    /// Classes whose members can be bound
    #[serde(default)]
    pub classes: Vec<ClassManifest>,
}

fn default_core_types() -> bool {
    true
}

impl Default for RegistryManifest {
    fn default() -> Self {
        Self {
            core_types: default_core_types(),
            default_namespace: None,
            types: Vec::new(),
            classes: Vec::new(),
        }
    }
}

/// One class in a [`RegistryManifest`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassManifest {
    /// Fully qualified class name
    pub name: String,

    /// Member declarations, e.g. `"String greet(String name)"`
    #[serde(default)]
    pub methods: Vec<String>,
}

fn compile_class(registry: &TypeRegistry, manifest: &ClassManifest) -> Result<ClassInfo, RegistryError> {
    let resolver = TypeResolver::new(registry);
    let mut class = ClassInfo::new(manifest.name.clone());

    for declaration in &manifest.methods {
        let invalid = |source| RegistryError::InvalidMember {
            class: manifest.name.clone(),
            declaration: declaration.clone(),
            source,
        };

        let tokens = tokenizer::tokenize(declaration).map_err(invalid)?;
        let result_type = resolver.resolve(&tokens.return_type).map_err(invalid)?;
        let params = tokens
            .arguments
            .iter()
            .map(|arg| resolver.resolve(&arg.type_name))
            .collect::<Result<Vec<_>, _>>()
            .map_err(invalid)?;

        class.add_method(tokens.name, params, result_type)?;
    }

    Ok(class)
}

fn validate_type_name(name: &str) -> Result<(), RegistryError> {
    if name.split(NAMESPACE_SEPARATOR).all(is_identifier) {
        Ok(())
    } else {
        Err(RegistryError::InvalidTypeName(name.to_string()))
    }
}
