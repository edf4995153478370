use featdeck_logger::Logger;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn json_output_writes_one_object_per_line() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let log_dir = tmp.path().join("logs");

    let logger = Logger::builder()
        .name("featdeck-json-logging")
        .console(false)
        .directory(&log_dir)
        .json(true)
        .env_filter("info")
        .init()?;

    tracing::info!(path = "planned.rateLimiting", "rendered indicator");
    tracing::debug!("filtered out");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(log_file)?;
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), 1);

    let event: serde_json::Value = serde_json::from_str(lines[0])?;
    assert_eq!(event["level"], "INFO");
    assert_eq!(event["fields"]["message"], "rendered indicator");
    assert_eq!(event["fields"]["path"], "planned.rateLimiting");

    Ok(())
}
