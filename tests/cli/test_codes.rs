// Tests for `quill codes`

use std::process::Command;

use super::common::quill_bin;

#[test]
fn test_codes_lists_taxonomy() {
    let out = Command::new(quill_bin()).arg("codes").output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    for code in ["DAR001", "DAR101", "DAR203", "DAR402", "DAR501"] {
        assert!(stdout.contains(code), "missing {code}");
    }
}

#[test]
fn test_codes_json() {
    let out = Command::new(quill_bin())
        .args(["codes", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 17);
    let dar001 = entries.iter().find(|e| e["code"] == "DAR001").unwrap();
    assert_eq!(dar001["style"], true);
}
