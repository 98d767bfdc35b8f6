use packforge_core::{
    cleanup_file_name, default_package_file_name, ensure_package_extension, has_forbidden_chars,
};

#[test]
fn cleanup_strips_forbidden_characters_and_trims() {
    assert_eq!(cleanup_file_name("My: Package?"), "My Package");
    assert_eq!(cleanup_file_name("  spaced  "), "spaced");
    assert_eq!(cleanup_file_name("dots..."), "dots");
    assert_eq!(cleanup_file_name("a/b\\c"), "abc");
    assert_eq!(cleanup_file_name("<>:|*?\""), "");
}

#[test]
fn default_name_combines_name_and_version() {
    assert_eq!(default_package_file_name("My Package", "2.1"), "My Package-2.1.zip");
    assert_eq!(default_package_file_name("My Package", ""), "My Package.zip");
}

#[test]
fn default_name_falls_back_only_when_both_parts_are_empty() {
    assert_eq!(default_package_file_name("", ""), "package.zip");
    // A version alone keeps the dash prefix; the fallback applies only to a
    // fully empty base.
    assert_eq!(default_package_file_name("", "1.0"), "-1.0.zip");
}

#[test]
fn extension_is_forced_case_insensitively() {
    assert_eq!(ensure_package_extension("My Package"), "My Package.zip");
    assert_eq!(ensure_package_extension("done.zip"), "done.zip");
    assert_eq!(ensure_package_extension("done.ZIP"), "done.ZIP");
    assert_eq!(ensure_package_extension("archive.tar"), "archive.tar.zip");
}

#[test]
fn forbidden_character_detection() {
    assert!(has_forbidden_chars("a:b"));
    assert!(has_forbidden_chars("tab\there")); // control character
    assert!(!has_forbidden_chars("Plain name 1.0"));
}
