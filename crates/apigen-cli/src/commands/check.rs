//! `apigen check` — Validate signatures without writing output.

use crate::config::ApigenConfig;
use crate::output::StyledOutput;

pub fn execute(config: &ApigenConfig, out: &mut StyledOutput) -> anyhow::Result<()> {
    let models = super::run_pipeline(config)?;
    out.success(&format!(
        "{} method(s) bound to {}",
        models.len(),
        config.parser.target
    ))?;
    Ok(())
}
