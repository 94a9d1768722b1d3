#![cfg(feature = "log")]

use form_disposition::ContentDisposition;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if record.target().starts_with("form_disposition") {
            self.records
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

// Single test: the logger is process-wide.
#[test]
fn test_log_records() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    ContentDisposition::build("my field", Some("a.txt"), true).unwrap();
    ContentDisposition::build(&b"bad\xff"[..], None::<&str>, true).unwrap_err();

    let records = LOGGER.records.lock().unwrap().clone();
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0],
        (
            Level::Trace,
            r#"built content disposition: form-data; name="my%20field"; filename="a.txt""#.to_owned()
        )
    );
    assert_eq!(records[1].0, Level::Debug);
    assert!(records[1].1.starts_with("failed to percent-encode value: \"bad"));
}
