//! Model builder
//!
//! Resolves tokenized signatures into [`MethodModel`]s bound to members of
//! the target type, and checks that argument names are typed consistently
//! across the batch.

use crate::context::ResolutionContext;
use crate::error::ParseError;
use crate::model::{Argument, MethodModel};
use crate::resolver::TypeResolver;
use crate::tokenizer::SignatureTokens;
use apigen_types::TypeDescriptor;
use rustc_hash::FxHashMap;

/// Builds bound models for one target type
pub struct ModelBuilder<'a, C: ?Sized> {
    context: &'a C,
    resolver: TypeResolver<'a, C>,
    target: &'a str,
}

impl<'a, C: ResolutionContext + ?Sized> ModelBuilder<'a, C> {
    /// Create a builder binding against `target`
    pub fn new(context: &'a C, target: &'a str) -> Self {
        ModelBuilder {
            context,
            resolver: TypeResolver::new(context),
            target,
        }
    }

    /// Resolve and bind one signature
    pub fn build(&self, tokens: &SignatureTokens) -> Result<MethodModel, ParseError> {
        let result_type = self.resolver.resolve(&tokens.return_type)?;

        let mut arguments = Vec::with_capacity(tokens.arguments.len());
        let mut param_types = Vec::with_capacity(tokens.arguments.len());
        for arg in &tokens.arguments {
            let ty = self.resolver.resolve(&arg.type_name)?;
            param_types.push(ty.clone());
            arguments.push(Argument::new(arg.name.clone(), ty));
        }

        let member = self
            .context
            .bind(self.target, &tokens.name, &param_types)
            .ok_or_else(|| ParseError::MemberBinding {
                signature: tokens.signature.clone(),
                target: self.target.to_string(),
            })?;

        Ok(MethodModel::new(
            tokens.name.clone(),
            result_type,
            arguments,
            member,
        ))
    }
}

/// Fail if one argument name is declared with two different types
///
/// Models are checked in batch order, so `first` in the error is the type
/// seen earliest.
pub fn check_argument_consistency(models: &[MethodModel]) -> Result<(), ParseError> {
    let mut seen: FxHashMap<&str, &TypeDescriptor> = FxHashMap::default();

    for argument in models.iter().flat_map(MethodModel::arguments) {
        match seen.get(argument.name()) {
            None => {
                seen.insert(argument.name(), argument.ty());
            }
            Some(&first) if first != argument.ty() => {
                return Err(ParseError::ArgumentConsistency {
                    name: argument.name().to_string(),
                    first: first.clone(),
                    second: argument.ty().clone(),
                });
            }
            Some(_) => {}
        }
    }

    Ok(())
}
