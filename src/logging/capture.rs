// SPDX-License-Identifier: Apache-2.0 OR MIT
// Bridge from the `log` facade: library warnings land in this logger's WARN path

use super::{Logger, Severity};
use std::sync::{OnceLock, RwLock};

/// `log::Log` implementation forwarding warnings and errors to a [`Logger`]
struct WarningBridge {
    target: RwLock<Option<Logger>>,
}

static BRIDGE: WarningBridge = WarningBridge {
    target: RwLock::new(None),
};

/// Whether `BRIDGE` is the process-wide `log` logger
static INSTALLED: OnceLock<bool> = OnceLock::new();

impl log::Log for WarningBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::Level::Warn
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let target = self
            .target
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let Some(logger) = target.as_ref() else {
            return;
        };

        let severity = match record.level() {
            log::Level::Error => Severity::Error,
            _ => Severity::Warning,
        };
        if logger.is_enabled(severity.as_u8()) {
            logger.emit_at(
                severity.as_u8(),
                record.file().unwrap_or("<unknown>"),
                record.line().unwrap_or(0),
                &record.args().to_string(),
            );
        }
    }

    fn flush(&self) {}
}

/// Route warnings emitted through the `log` crate into `logger`.
///
/// With `enabled` set, `log::warn!` (and `log::error!`) records from any crate
/// are written by `logger` at WARNING (ERROR) severity; other `log` levels are
/// dropped. With `enabled` unset, the bridge discards everything.
///
/// Returns `false` if another `log` implementation was installed first, in
/// which case nothing is captured.
pub fn capture_warnings(logger: &Logger, enabled: bool) -> bool {
    let installed = *INSTALLED.get_or_init(|| log::set_logger(&BRIDGE).is_ok());
    if !installed {
        return false;
    }

    let mut target = BRIDGE
        .target
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if enabled {
        *target = Some(logger.clone());
        log::set_max_level(log::LevelFilter::Warn);
    } else {
        *target = None;
        log::set_max_level(log::LevelFilter::Off);
    }
    true
}
