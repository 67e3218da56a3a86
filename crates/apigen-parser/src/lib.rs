//! Apigen Signature Parser
//!
//! Compiles a batch of textual method signatures into a validated,
//! deterministically ordered, uniquely named list of [`MethodModel`]s bound
//! to real members of a target type.
//!
//! This crate provides:
//! - A pluggable [`ResolutionContext`] and an in-memory [`TypeRegistry`]
//! - Type resolution with primitive, array and default-namespace fallbacks
//! - Signature tokenizing
//! - Member binding and cross-signature argument consistency checks
//! - Canonical ordering and collision-free unique names
//! - A [`ResultProcessor`] hook to post-process the bound batch
//!
//! # Usage
//!
//! ```ignore
//! use apigen_parser::{ApiMethodParser, ClassInfo, TypeRegistry};
//!
//! let mut registry = TypeRegistry::with_core_types();
//! registry.register_class(api_class);
//!
//! let models = ApiMethodParser::with_context("com.example.Api", registry)
//!     .signatures(["String greet(String name)", "int count()"])
//!     .parse()?;
//!
//! for model in &models {
//!     println!("{:?} = {}", model.unique_name(), model);
//! }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod builder;
pub mod canonical;
pub mod context;
pub mod error;
pub mod hook;
pub mod model;
pub mod parser;
pub mod registry;
pub mod resolver;
pub mod tokenizer;

// Re-export main types
pub use builder::{check_argument_consistency, ModelBuilder};
pub use canonical::{canonicalize, compare_models};
pub use context::{MemberHandle, ResolutionContext, DEFAULT_NAMESPACE};
pub use error::{ParseError, RegistryError};
pub use hook::{Identity, ResultProcessor};
pub use model::{Argument, MethodModel};
pub use parser::ApiMethodParser;
pub use registry::{ClassInfo, ClassManifest, RegistryManifest, TypeRegistry};
pub use resolver::TypeResolver;
pub use tokenizer::{tokenize, ArgumentTokens, SignatureTokens};

pub use apigen_types::{PrimitiveType, TypeDescriptor};
