//! CLI command implementations.

pub mod check;
pub mod parse;

use anyhow::Context;
use apigen_parser::{ApiMethodParser, MethodModel};

use crate::config::ApigenConfig;

/// Load signatures and registry from `config` and run the parser.
pub fn run_pipeline(config: &ApigenConfig) -> anyhow::Result<Vec<MethodModel>> {
    let signatures = config.load_signatures()?;
    let registry = config.build_registry()?;

    let models = ApiMethodParser::with_context(config.parser.target.as_str(), registry)
        .signatures(signatures)
        .parse()
        .with_context(|| format!("Failed to parse API methods for {}", config.parser.target))?;
    Ok(models)
}
