use std::{
    io::{self, Write as _},
    sync::{OnceLock, PoisonError, RwLock},
};

use chrono::{DateTime, Local};
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    LOGGER.get_or_init(|| AppLogger::new(LevelFilter::Warn))
}

/// Installs the stderr logger, only messages at `level` or more severe are printed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(get_logger())?;
    log::set_max_level(LevelFilter::Trace);
    get_logger().set_min_level(level);
    Ok(())
}

pub struct AppLogger {
    min_level: RwLock<LevelFilter>,
}

impl AppLogger {
    fn new(min_level: LevelFilter) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> LevelFilter {
        *self.min_level.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_min_level(&self, level: LevelFilter) {
        *self.min_level.write().unwrap_or_else(PoisonError::into_inner) = level;
    }
}

fn format_record(time: DateTime<Local>, record: &Record) -> String {
    format!(
        "{} {:<5} {} -> {}",
        time.format("%H:%M:%S%.3f"),
        record.level(),
        record.module_path().unwrap_or("unknown"),
        record.args()
    )
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = format_record(Local::now(), record);
            // nowhere to report a failing stderr
            let _ = writeln!(io::stderr().lock(), "{}", line);
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;
    use log::Level;

    use super::*;

    #[test]
    fn level_filtering() {
        let logger = AppLogger::new(LevelFilter::Warn);
        let meta = |level| Metadata::builder().level(level).build();

        assert!(logger.enabled(&meta(Level::Error)));
        assert!(logger.enabled(&meta(Level::Warn)));
        assert!(!logger.enabled(&meta(Level::Info)));

        logger.set_min_level(LevelFilter::Trace);
        assert!(logger.enabled(&meta(Level::Trace)));

        logger.set_min_level(LevelFilter::Off);
        assert!(!logger.enabled(&meta(Level::Error)));
    }

    #[test]
    fn record_format() {
        let time = Local.with_ymd_and_hms(2024, 5, 1, 13, 7, 9).unwrap();
        let line = format_record(
            time,
            &Record::builder()
                .level(Level::Info)
                .module_path(Some("mazecore::maze"))
                .args(format_args!("Generating {}x{} maze", 3, 4))
                .build(),
        );

        assert_eq!(line, "13:07:09.000 INFO  mazecore::maze -> Generating 3x4 maze");
    }
}
