//! Reports written to disk, read back as plain JSON.

use ov_report::{
    PlaceholderSafetyChecker, ReportError, generate_optimization_safety_report,
    generate_verification_report,
};
use ov_schema::SchemaRegistry;
use ov_store::Registry;
use pretty_assertions::assert_eq;

fn read_json(path: &std::path::Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

/// gcc 11.2.0 registered, one verification at -O0. Returns the registered hash.
fn single_gcc(dir: &tempfile::TempDir) -> (Registry, String) {
    let binary = dir.path().join("gcc-11");
    std::fs::write(&binary, b"\x7fELF gcc 11.2.0").unwrap();
    let mut registry = Registry::seeded();
    let version = registry
        .register_compiler_version("gcc", "11.2.0", &binary)
        .unwrap();
    registry
        .record_verification(
            "VC-GCC-O0-001",
            "gcc",
            "11.2.0",
            "-O0",
            vec!["test_results.xml".into()],
        )
        .unwrap();
    (registry, version.content_hash)
}

#[test]
fn verification_report_hash_matches_registration() {
    let dir = tempfile::tempdir().unwrap();
    let (registry, hash) = single_gcc(&dir);
    let output = dir.path().join("verification_report.json");

    generate_verification_report(&registry, &output).unwrap();

    let json = read_json(&output);
    assert_eq!(json["compilers"]["gcc"]["versions"]["11.2.0"]["hash"], hash);
    assert_eq!(json["metadata"]["tool_version"], "1.0.0");
    assert!(json["metadata"]["generation_time"].is_string());
    assert_eq!(json["verifications"][0]["id"], "VC-GCC-O0-001");
    assert_eq!(json["verifications"][0]["compiler_type"], "gcc");
    assert_eq!(json["verifications"][0]["optimization_level"], "-O0");
    assert_eq!(json["verifications"][0]["status"], "verified");
    assert!(json["verifications"][0]["verified"].is_string());

    let schemas = SchemaRegistry::new();
    assert!(schemas.validate("verification_report", &json).is_ok());
}

#[test]
fn safety_report_marks_every_check_as_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let (registry, _) = single_gcc(&dir);
    let output = dir.path().join("optimization_safety_report.json");

    generate_optimization_safety_report(&registry, &PlaceholderSafetyChecker, &output).unwrap();

    let json = read_json(&output);
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 4);
    for evaluation in results {
        let checks = evaluation["checks"].as_array().unwrap();
        assert_eq!(checks.len(), 6);
        for check in checks {
            assert_eq!(check["result"]["kind"], "placeholder");
            assert_eq!(check["result"]["nominal"], "PASS");
        }
    }
    assert_eq!(json["summary"]["executed_checks"], 0);
    assert_eq!(json["summary"]["placeholder_checks"], 24);

    let schemas = SchemaRegistry::new();
    assert!(schemas.validate("safety_report", &json).is_ok());
}

#[test]
fn reports_overwrite_existing_files() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.json");
    std::fs::write(&output, b"previous contents").unwrap();

    generate_verification_report(&Registry::seeded(), &output).unwrap();

    let json = read_json(&output);
    assert!(json["verifications"].as_array().unwrap().is_empty());
}

#[test]
fn unwritable_destination_is_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("no-such-dir").join("report.json");

    let err = generate_verification_report(&Registry::seeded(), &output).unwrap_err();
    assert!(matches!(err, ReportError::Write { .. }));
}
