use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Terminal-dependent rendering choices, resolved once per process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

impl UiPrefs {
    fn resolve(
        flags: &GlobalFlags,
        stdout_is_tty: bool,
        no_color: bool,
        columns: Option<&str>,
    ) -> Self {
        let table = flags.format == OutputFormat::Table;
        let table_color = match flags.color {
            ColorMode::Always => table,
            ColorMode::Never => false,
            ColorMode::Auto => table && stdout_is_tty && !flags.quiet && !no_color,
        };
        // Widths under 40 columns are ignored.
        let term_width = columns
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|width| *width >= 40);

        Self {
            table_color,
            term_width,
        }
    }
}

pub fn init(flags: &GlobalFlags) {
    let columns = std::env::var("COLUMNS").ok();
    let prefs = UiPrefs::resolve(
        flags,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        columns.as_deref(),
    );
    let _ = UI_PREFS.set(prefs);
}

#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}
