//! End-to-end tests for dump extraction
//!
//! These tests write small dump files shaped like a mysqldump export of the
//! locations table and run them through the library and the binary.

use dump_locations::{ExtractConfig, ExtractError, LocationExtractor, LocationRecord};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Build a tuple line with the default 31-column layout
fn location_tuple(name: &str, category: &str, lat: &str, lng: &str, terminator: &str) -> String {
    let mut fields: Vec<String> = (0..31).map(|i| i.to_string()).collect();
    fields[1] = "'2024-01-26 20:59:36'".to_string();
    fields[5] = "NULL".to_string();
    fields[14] = format!("'{}'", category);
    fields[15] = format!("'{}'", name);
    fields[18] = lat.to_string();
    fields[19] = lng.to_string();
    format!("({}){}", fields.join(","), terminator)
}

fn write_dump(dir: &Path, lines: &[String]) -> std::path::PathBuf {
    let path = dir.join("dump.sql");
    fs::write(&path, lines.join("\n")).unwrap();
    path
}

fn read_records(path: &Path) -> Vec<LocationRecord> {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_one_valid_one_malformed_one_comment() {
    let temp_dir = TempDir::new().unwrap();

    let mut short = location_tuple("Short Row", "cafe", "1.0", "2.0", ",");
    short = short.replacen("(0,", "(", 1);

    let lines = vec![
        "-- Dumping data for table `locations`".to_string(),
        location_tuple("Tower Bridge", "landmark", "51.5055", "-0.0754", ","),
        short,
    ];
    let input_path = write_dump(temp_dir.path(), &lines);
    let output_path = temp_dir.path().join("full_locations.json");

    let stats = LocationExtractor::new(input_path, output_path.clone())
        .unwrap()
        .extract()
        .unwrap();

    assert_eq!(stats.records_extracted, 1);
    assert_eq!(stats.tuple_lines, 2);
    assert_eq!(stats.arity_mismatches, 1);

    let records = read_records(&output_path);
    assert_eq!(
        records,
        vec![LocationRecord {
            name: "Tower Bridge".to_string(),
            lat: 51.5055,
            lng: -0.0754,
            category: "landmark".to_string(),
        }]
    );
}

#[test]
fn test_realistic_insert_block() {
    let temp_dir = TempDir::new().unwrap();

    let lines = vec![
        "/*!40101 SET NAMES utf8mb4 */;".to_string(),
        "LOCK TABLES `locations` WRITE;".to_string(),
        "INSERT INTO `locations` VALUES".to_string(),
        location_tuple(r"Rick\'s Bar, Casablanca", "bar", "33.5731", "-7.5898", ","),
        location_tuple("Nowhere", "unknown", "NULL", "NULL", ","),
        location_tuple("Sydney Opera House", "venue", "-33.8568", "151.2153", ";"),
        "UNLOCK TABLES;".to_string(),
        String::new(),
    ];
    let input_path = write_dump(temp_dir.path(), &lines);
    let output_path = temp_dir.path().join("out").join("locations.json");

    let stats = LocationExtractor::new(input_path, output_path.clone())
        .unwrap()
        .with_config(ExtractConfig::default().with_pretty())
        .extract()
        .unwrap();

    assert_eq!(stats.records_extracted, 2);
    assert_eq!(stats.invalid_coordinates, 1);

    let records = read_records(&output_path);
    assert_eq!(records[0].name, r"Rick\'s Bar, Casablanca");
    assert_eq!(records[0].category, "bar");
    assert_eq!(records[1].name, "Sydney Opera House");
    assert_eq!(records[1].lng, 151.2153);
}

#[test]
fn test_invalid_utf8_line_is_still_extracted() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("dump.sql");
    let output_path = temp_dir.path().join("locations.json");

    let mut bytes = b"-- latin-1 encoded row follows\n".to_vec();
    bytes.extend(location_tuple("Caf#", "cafe", "48.85", "2.35", ",").into_bytes());
    // Replace the placeholder with a bare ISO-8859-1 'é'
    let placeholder = bytes.iter().position(|b| *b == b'#').unwrap();
    bytes[placeholder] = 0xE9;
    fs::write(&input_path, &bytes).unwrap();

    let stats = LocationExtractor::new(input_path, output_path.clone())
        .unwrap()
        .extract()
        .unwrap();

    assert_eq!(stats.fallback_decoded_lines, 1);
    assert_eq!(stats.records_extracted, 1);
    assert_eq!(read_records(&output_path)[0].name, "Café");
}

#[test]
fn test_missing_input_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let result = LocationExtractor::new(
        temp_dir.path().join("nope.sql"),
        temp_dir.path().join("out.json"),
    );

    assert!(matches!(result, Err(ExtractError::InputNotFound { .. })));
    assert!(!temp_dir.path().join("out.json").exists());
}

#[test]
fn test_binary_reports_count() {
    let temp_dir = TempDir::new().unwrap();
    let lines = vec![
        "-- comment".to_string(),
        location_tuple("Alpha", "park", "10.0", "20.0", ","),
        location_tuple("Beta", "park", "oops", "20.0", ";"),
    ];
    let input_path = write_dump(temp_dir.path(), &lines);
    let output_path = temp_dir.path().join("result.json");

    let output = Command::new(env!("CARGO_BIN_EXE_dump_locations"))
        .arg(&input_path)
        .arg("--output")
        .arg(&output_path)
        .arg("--no-progress")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Extracted 1 locations"), "stdout was: {stdout}");
    assert_eq!(read_records(&output_path).len(), 1);
}

#[test]
fn test_binary_fails_without_output_on_missing_input() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("result.json");

    let output = Command::new(env!("CARGO_BIN_EXE_dump_locations"))
        .arg(temp_dir.path().join("missing.sql"))
        .arg("-o")
        .arg(&output_path)
        .env("NO_COLOR", "1")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Dump file not found"));
    assert!(!output_path.exists());
}
