//! Table layout resolved once per run from the global flags and the terminal.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

use super::table::TableOptions;

/// Narrower `COLUMNS` values are ignored.
const NARROWEST_TABLE: usize = 40;

static TABLE_OPTIONS: OnceLock<TableOptions> = OnceLock::new();

/// What the process can see of the terminal it writes to.
#[derive(Clone, Debug, Default)]
pub struct Terminal {
    pub is_tty: bool,
    pub no_color: bool,
    pub columns: Option<String>,
}

impl Terminal {
    fn detect() -> Self {
        Self {
            is_tty: std::io::stdout().is_terminal(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: std::env::var("COLUMNS").ok(),
        }
    }
}

/// Decide severity coloring and width fitting for table output.
#[must_use]
pub fn table_options_for(flags: &GlobalFlags, terminal: &Terminal) -> TableOptions {
    let table = flags.format == OutputFormat::Table;
    let color = match flags.color {
        ColorMode::Always => table,
        ColorMode::Never => false,
        ColorMode::Auto => table && terminal.is_tty && !terminal.no_color && !flags.quiet,
    };
    let max_width = terminal
        .columns
        .as_deref()
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|width| *width >= NARROWEST_TABLE);

    TableOptions { max_width, color }
}

/// Record table options for this run. Later calls are ignored.
pub fn init(flags: &GlobalFlags) {
    let _ = TABLE_OPTIONS.set(table_options_for(flags, &Terminal::detect()));
}

/// Options recorded by [`init`], or uncolored and unbounded before it runs.
#[must_use]
pub fn table_options() -> TableOptions {
    TABLE_OPTIONS.get().copied().unwrap_or(TableOptions {
        max_width: None,
        color: false,
    })
}
