use std::{fs, thread::sleep, time::Duration};

use serial_test::serial;
use tempfile::tempdir;

#[test]
#[serial]
fn writes_log_file_and_ignores_later_init() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("air_mouse.log");

    air_mouse::logging::init(false, Some(path.clone()));
    tracing::info!("gesture session started");
    tracing::debug!("filtered out at info level");

    // A second call must not panic or replace the subscriber.
    air_mouse::logging::init(true, None);
    tracing::info!("still logging");

    sleep(Duration::from_millis(100));

    assert!(path.exists(), "log file was not created");
    let contents = fs::read_to_string(path).unwrap();
    assert!(contents.contains("gesture session started"));
    assert!(contents.contains("still logging"));
    assert!(!contents.contains("filtered out"));
}
