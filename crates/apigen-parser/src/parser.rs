//! Parser driver
//!
//! Runs the whole pipeline for one batch of signatures:
//! tokenize, resolve and bind, post-process, check argument consistency,
//! then sort and name. All per-batch state lives inside [`ApiMethodParser::parse`].

use crate::builder::{check_argument_consistency, ModelBuilder};
use crate::canonical::canonicalize;
use crate::context::ResolutionContext;
use crate::error::ParseError;
use crate::hook::{Identity, ResultProcessor};
use crate::model::MethodModel;
use crate::registry::TypeRegistry;
use crate::tokenizer::tokenize;
use tracing::debug;

/// Compiles method signatures into named models bound to `target`
pub struct ApiMethodParser<C = TypeRegistry> {
    target: String,
    signatures: Vec<String>,
    context: C,
    processor: Box<dyn ResultProcessor + Send + Sync>,
}

impl ApiMethodParser<TypeRegistry> {
    /// Create a parser resolving against [`TypeRegistry::with_core_types`]
    pub fn new(target: impl Into<String>) -> Self {
        ApiMethodParser::with_context(target, TypeRegistry::with_core_types())
    }
}

impl<C: ResolutionContext> ApiMethodParser<C> {
    /// Create a parser resolving types and members through `context`
    pub fn with_context(target: impl Into<String>, context: C) -> Self {
        ApiMethodParser {
            target: target.into(),
            signatures: Vec::new(),
            context,
            processor: Box::new(Identity),
        }
    }

    /// Replace the resolution context
    pub fn context<D: ResolutionContext>(self, context: D) -> ApiMethodParser<D> {
        ApiMethodParser {
            target: self.target,
            signatures: self.signatures,
            context,
            processor: self.processor,
        }
    }

    /// Set the signatures to parse, in parse order
    pub fn signatures<I, S>(mut self, signatures: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.signatures = signatures.into_iter().map(Into::into).collect();
        self
    }

    /// Install a post-processing hook, replacing the identity default
    pub fn processor(mut self, processor: impl ResultProcessor + Send + Sync + 'static) -> Self {
        self.processor = Box::new(processor);
        self
    }

    /// Target type name
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Signatures to parse, in parse order
    pub fn signature_list(&self) -> &[String] {
        &self.signatures
    }

    /// Parse every signature into a sorted, uniquely named batch
    ///
    /// The batch is all or nothing: the first error aborts the parse.
    pub fn parse(&self) -> Result<Vec<MethodModel>, ParseError> {
        let builder = ModelBuilder::new(&self.context, &self.target);

        let mut models = Vec::with_capacity(self.signatures.len());
        for signature in &self.signatures {
            let tokens = tokenize(signature)?;
            debug!("Processing {}", tokens.signature);
            models.push(builder.build(&tokens)?);
        }

        let models = self.processor.process_results(models);
        check_argument_consistency(&models)?;

        let models = canonicalize(models);
        debug!(
            target_type = %self.target,
            methods = models.len(),
            "Parsed API methods"
        );
        Ok(models)
    }
}
