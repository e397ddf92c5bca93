// SPDX-License-Identifier: MPL-2.0
//! Location of the settings directory.
//!
//! The first available source wins: an explicit directory passed by the
//! caller, then `--config-dir`, then `TIFFANY_CONFIG_DIR`, then
//! `<platform config dir>/Tiffany`.

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "Tiffany";

/// Environment variable naming the settings directory.
pub const ENV_CONFIG_DIR: &str = "TIFFANY_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument. Only the first call counts.
pub fn init_cli_override(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        log::warn!("--config-dir was already recorded");
    }
}

/// Settings directory, or `None` when the platform has no config dir.
pub fn config_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        explicit,
        CLI_CONFIG_DIR.get().cloned().flatten(),
        std::env::var(ENV_CONFIG_DIR).ok(),
        dirs::config_dir(),
    )
}

fn resolve(
    explicit: Option<PathBuf>,
    cli: Option<PathBuf>,
    env: Option<String>,
    platform: Option<PathBuf>,
) -> Option<PathBuf> {
    explicit
        .or(cli)
        .or_else(|| env.filter(|value| !value.is_empty()).map(PathBuf::from))
        .or_else(|| platform.map(|dir| dir.join(APP_NAME)))
}
