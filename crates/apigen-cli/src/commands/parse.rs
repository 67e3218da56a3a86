//! `apigen parse` — Compile signatures and emit the finished batch.

use anyhow::Context;
use std::path::PathBuf;
use tracing::info;

use crate::config::{ApigenConfig, OutputFormat};
use crate::output::{self, StyledOutput};

pub fn execute(
    config: &ApigenConfig,
    output_path: Option<PathBuf>,
    format: Option<OutputFormat>,
    out: &mut StyledOutput,
) -> anyhow::Result<()> {
    let models = super::run_pipeline(config)?;
    let format = format.unwrap_or(config.output.format);
    let path = output_path.or_else(|| {
        config
            .output
            .path
            .as_deref()
            .map(|p| config.resolve_path(p))
    });

    match path {
        Some(path) => {
            let rendered = output::render(&models, format)?;
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(&path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(methods = models.len(), path = %path.display(), "Wrote API methods");
            out.note(&format!("Wrote {} method(s) to {}", models.len(), path.display()))?;
        }
        None => match format {
            OutputFormat::Text => out.print_models(&models)?,
            OutputFormat::Json => println!("{}", output::render(&models, format)?),
        },
    }

    Ok(())
}
