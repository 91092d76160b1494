//! Output mode routing for encryption results.

use crate::cli::OutputFormat;

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// `{status, results, warnings}` envelope on stdout
    Json,
    /// `cipher=ciphertext` lines, stable for scripts
    #[default]
    Plain,
    /// Header and results table
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// `--json` or `--format json` wins. `--format table` draws the table even
    /// when piped, except on a dumb terminal. Without a format the table is
    /// used only on an interactive stdout.
    pub fn resolve(
        json_flag: bool,
        format: Option<OutputFormat>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        if json_flag {
            return Self::Json;
        }

        match format {
            Some(OutputFormat::Json) => Self::Json,
            Some(OutputFormat::Plain) => Self::Plain,
            Some(OutputFormat::Table) if !term_is_dumb => Self::Pretty,
            None if is_tty && !term_is_dumb => Self::Pretty,
            _ => Self::Plain,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
