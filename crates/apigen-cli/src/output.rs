//! Rendering of finished method batches.
//!
//! Uses `termcolor` for colored terminal output.
//! Respects `NO_COLOR` environment variable and `--color` flag.

use apigen_parser::MethodModel;
use clap::ValueEnum;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::config::OutputFormat;

/// Value of the `--color` flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color when writing to a terminal
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

/// Resolve `ColorChoice` from CLI flag and environment.
///
/// Priority: `NO_COLOR` env > `--color` flag > auto-detect TTY.
pub fn resolve_color_choice(mode: ColorMode) -> ColorChoice {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    match mode {
        ColorMode::Auto => ColorChoice::Auto,
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
    }
}

/// Render a batch as plain text or JSON
pub fn render(models: &[MethodModel], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(models),
        OutputFormat::Text => Ok(render_text(models)),
    }
}

/// One `UNIQUE_NAME = signature` line per model
pub fn render_text(models: &[MethodModel]) -> String {
    let mut out = String::new();
    for model in models {
        out.push_str(model.unique_name().unwrap_or_default());
        out.push_str(" = ");
        out.push_str(&model.to_string());
        out.push('\n');
    }
    out
}

/// Styled output writer for terminal.
pub struct StyledOutput {
    stdout: StandardStream,
    stderr: StandardStream,
}

impl StyledOutput {
    /// Create a new styled output with the given color choice.
    pub fn new(choice: ColorChoice) -> Self {
        Self {
            stdout: StandardStream::stdout(choice),
            stderr: StandardStream::stderr(choice),
        }
    }

    fn write_styled(&mut self, text: &str, color: Option<Color>, bold: bool) -> io::Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_fg(color).set_bold(bold);
        self.stdout.set_color(&spec)?;
        write!(self.stdout, "{}", text)?;
        self.stdout.reset()
    }

    /// Print a batch as text, highlighting unique names.
    pub fn print_models(&mut self, models: &[MethodModel]) -> io::Result<()> {
        for model in models {
            self.write_styled(model.unique_name().unwrap_or_default(), Some(Color::Cyan), true)?;
            writeln!(self.stdout, " = {}", model)?;
        }
        Ok(())
    }

    /// Green bold status line.
    pub fn success(&mut self, text: &str) -> io::Result<()> {
        self.write_styled(text, Some(Color::Green), true)?;
        writeln!(self.stdout)
    }

    /// Informational line to stderr, dimmed.
    pub fn note(&mut self, text: &str) -> io::Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_dimmed(true);
        self.stderr.set_color(&spec)?;
        writeln!(self.stderr, "{}", text)?;
        self.stderr.reset()
    }
}
