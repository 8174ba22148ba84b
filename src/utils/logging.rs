use std::str::FromStr;

use tracing::Level;

use crate::config::{LogSettings, Settings};

/// Level named in `settings`, or `INFO` when the name is not recognised.
///
/// Accepts the `tracing` level names in any case, plus `warning`.
pub fn level_of(settings: &LogSettings) -> Level {
    let name = settings.level.trim();
    if name.eq_ignore_ascii_case("warning") {
        return Level::WARN;
    }
    Level::from_str(name).unwrap_or(Level::INFO)
}

/// Installs a `fmt` subscriber filtered at the level from `settings`.
///
/// Returns `false` when a global subscriber was already installed, in which
/// case the existing one is kept.
pub fn init(settings: &LogSettings) -> bool {
    let level = level_of(settings);
    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(%level, "logging initialised");
    }
    installed
}

/// Shorthand for [`init`] with the `[log]` section of loaded settings.
pub fn init_from_settings(settings: &Settings) -> bool {
    init(&settings.log)
}
