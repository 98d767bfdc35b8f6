use std::path::Path;

use packforge_engine::{load_project, parse_project, ProjectError, SourceEntry};
use pretty_assertions::assert_eq;

#[test]
fn full_manifest_parses() {
    let text = r#"{
        "metadata": {
            "package_name": "Demo",
            "version": "1.0",
            "author": "someone",
            "readme": "hello"
        },
        "sources": [
            { "name": "a.txt", "content": "alpha" },
            { "name": "b.txt" }
        ]
    }"#;

    let project = parse_project(text).unwrap();
    assert_eq!(project.metadata.package_name, "Demo");
    assert_eq!(project.metadata.version, "1.0");
    assert_eq!(
        project.sources,
        vec![
            SourceEntry {
                name: "a.txt".to_string(),
                content: "alpha".to_string(),
            },
            SourceEntry {
                name: "b.txt".to_string(),
                content: String::new(),
            },
        ]
    );
}

#[test]
fn minimal_manifest_defaults_everything() {
    let project = parse_project("{}").unwrap();
    assert_eq!(project.metadata.package_name, "");
    assert_eq!(project.metadata.version, "");
    assert!(project.sources.is_empty());
}

#[test]
fn malformed_manifest_is_a_parse_error() {
    let err = parse_project("not json").unwrap_err();
    assert!(matches!(err, ProjectError::Parse(_)));
}

#[test]
fn missing_file_is_a_read_error() {
    let err = load_project(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, ProjectError::Read(_)));
}
