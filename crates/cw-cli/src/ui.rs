use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(resolve(flags, std::io::stdout().is_terminal()));
}

fn resolve(flags: &GlobalFlags, is_tty: bool) -> UiPrefs {
    let table_color = match flags.color {
        ColorMode::Always => flags.format == OutputFormat::Table,
        ColorMode::Never => false,
        ColorMode::Auto => {
            is_tty
                && flags.format == OutputFormat::Table
                && !flags.quiet
                && std::env::var_os("NO_COLOR").is_none()
        }
    };

    // spinners draw on stderr, so they only depend on the terminal and the format
    let progress = match flags.progress {
        ProgressMode::Auto => is_tty && !flags.quiet && flags.format != OutputFormat::Json,
        ProgressMode::Off => false,
    };

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    UiPrefs {
        table_color,
        progress,
        term_width,
    }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        progress: false,
        term_width: None,
    })
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use crate::cli::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};

    fn flags(format: OutputFormat, color: ColorMode, quiet: bool) -> GlobalFlags {
        GlobalFlags {
            format,
            limit: None,
            quiet,
            color,
            progress: ProgressMode::Auto,
        }
    }

    #[test]
    fn color_only_applies_to_tables() {
        let prefs = resolve(&flags(OutputFormat::Json, ColorMode::Always, false), true);
        assert!(!prefs.table_color);
        let prefs = resolve(&flags(OutputFormat::Table, ColorMode::Always, false), false);
        assert!(prefs.table_color);
    }

    #[test]
    fn quiet_disables_progress() {
        let prefs = resolve(&flags(OutputFormat::Table, ColorMode::Never, true), true);
        assert!(!prefs.progress);
        assert!(!prefs.table_color);
    }

    #[test]
    fn progress_off_wins_on_a_terminal() {
        let mut off = flags(OutputFormat::Table, ColorMode::Never, false);
        off.progress = ProgressMode::Off;
        assert!(!resolve(&off, true).progress);
        assert!(resolve(&flags(OutputFormat::Table, ColorMode::Never, false), true).progress);
    }

    #[test]
    fn no_progress_without_terminal() {
        let prefs = resolve(&flags(OutputFormat::Table, ColorMode::Auto, false), false);
        assert!(!prefs.progress);
        assert!(!prefs.table_color);
    }
}
