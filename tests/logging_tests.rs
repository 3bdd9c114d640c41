//! Logging Tests
//!
//! Checks that pipeline failures stay below the binary's default `warn`
//! filter, so the only stderr output is the single error line.

use std::fs;
use std::io;
use std::sync::Mutex;

use interleave::cli::commands::run;
use interleave::cli::Cli;
use interleave::InterleaveError;
use log::{Level, LevelFilter, Log, Metadata, Record};
use tempfile::tempdir;

/// Records the level and message of every log call
struct CapturingLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    records: Mutex::new(Vec::new()),
};

#[test]
fn test_refused_overwrite_logs_below_warn() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let dir = tempdir().unwrap();
    let even = dir.path().join("even.bin");
    let odd = dir.path().join("odd.bin");
    let output = dir.path().join("output.bin");
    fs::write(&even, [1u8, 2]).unwrap();
    fs::write(&odd, [3u8, 4]).unwrap();
    fs::write(&output, b"existing").unwrap();

    let cli = Cli::new(&even, &odd).with_output(&output);
    let err = run(&cli, "interleave", &mut io::sink()).unwrap_err();
    assert!(matches!(err, InterleaveError::OutputAlreadyExists { .. }));

    let records = LOGGER.records.lock().unwrap();
    assert!(records
        .iter()
        .any(|(_, message)| message.starts_with("Refusing to overwrite")));
    assert!(
        records.iter().all(|(level, _)| *level > Level::Warn),
        "records at warn or above: {:?}",
        records
    );
}
