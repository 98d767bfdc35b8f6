//! Project manifest: what a package is built from.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("unreadable manifest: {0}")]
    Read(#[from] std::io::Error),
    #[error("malformed manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Package metadata carried by the manifest. Every field defaults to empty
/// so a minimal manifest stays valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProjectMetadata {
    pub package_name: String,
    pub version: String,
    pub author: String,
    pub readme: String,
}

/// One named payload entry of the package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    pub name: String,
    #[serde(default)]
    pub content: String,
}

/// A package project: metadata plus the source entries the generator packs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PackageProject {
    pub metadata: ProjectMetadata,
    pub sources: Vec<SourceEntry>,
}

/// Parses a manifest from its JSON text.
pub fn parse_project(text: &str) -> Result<PackageProject, ProjectError> {
    Ok(serde_json::from_str(text)?)
}

/// Loads a manifest from disk.
pub fn load_project(path: &Path) -> Result<PackageProject, ProjectError> {
    let text = fs::read_to_string(path)?;
    parse_project(&text)
}
