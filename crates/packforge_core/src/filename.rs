//! Artifact naming: cleanup, validation, and the forced extension.

use std::path::Path;

/// Extension every generated package carries, regardless of user input.
pub const PACKAGE_EXTENSION: &str = ".zip";

/// Base name used when a project has neither a name nor a version.
pub const UNNAMED_PACKAGE: &str = "package";

const FORBIDDEN: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

fn is_forbidden(c: char) -> bool {
    c.is_control() || FORBIDDEN.contains(&c)
}

/// Whether `name` contains characters illegal for a file path.
pub fn has_forbidden_chars(name: &str) -> bool {
    name.chars().any(is_forbidden)
}

/// Strips characters illegal in file names and trims stray dots and spaces.
pub fn cleanup_file_name(name: &str) -> String {
    let kept: String = name.chars().filter(|c| !is_forbidden(*c)).collect();
    kept.trim_matches(&[' ', '.'][..]).to_string()
}

/// Default artifact name for a freshly loaded project:
/// `<cleaned-name>[-<version>]<ext>`. The fixed base applies only when the
/// combined name-plus-version comes out empty.
pub fn default_package_file_name(package_name: &str, version: &str) -> String {
    let mut base = cleanup_file_name(package_name);
    if !version.is_empty() {
        base.push('-');
        base.push_str(version);
    }
    if base.is_empty() {
        base.push_str(UNNAMED_PACKAGE);
    }
    base.push_str(PACKAGE_EXTENSION);
    base
}

/// Appends the required extension unless `name` already carries it.
/// The comparison is case-insensitive, so `a.ZIP` stays as typed.
pub fn ensure_package_extension(name: &str) -> String {
    let required = &PACKAGE_EXTENSION[1..];
    let already = Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(required));
    if already {
        name.to_string()
    } else {
        format!("{name}{PACKAGE_EXTENSION}")
    }
}
