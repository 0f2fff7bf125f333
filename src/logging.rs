use std::env;
use std::io::Write;
use std::time::Instant;
use std::sync::OnceLock;

use log::{LevelFilter, Metadata, Record};

struct StdoutLogger {
    started: OnceLock<Instant>,
}

impl log::Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = self.started.get_or_init(Instant::now).elapsed();
        let mut out = std::io::stdout().lock();
        let _ = writeln!(
            out,
            "[{:>8.3}s {:<5} {}] {}",
            elapsed.as_secs_f64(),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
    }
}

static LOGGER: StdoutLogger = StdoutLogger {
    started: OnceLock::new(),
};

/// Initialize logging with a level taken from the `BATTLESHIP_LOG` environment variable.
/// Defaults to `info` if the variable is not set or invalid.
pub fn init_logging() {
    let level = env::var("BATTLESHIP_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = LOGGER.started.set(Instant::now());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
