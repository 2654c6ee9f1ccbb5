use semver::Version;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{RelnotesError, Result};

/// Project identity read once at startup and passed explicitly through the
/// pipeline.
///
/// `manifest` records which file supplied the version; it doubles as the
/// fallback entry of the changed-file list when git queries fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMetadata {
    pub name: String,
    pub version: Version,
    pub manifest: String,
}

#[derive(Deserialize)]
struct CargoManifest {
    package: CargoPackage,
}

#[derive(Deserialize)]
struct CargoPackage {
    name: String,
    version: String,
}

#[derive(Deserialize)]
struct PackageJson {
    name: String,
    version: String,
}

impl ProjectMetadata {
    /// Read name and version from the project manifest.
    ///
    /// Probes `Cargo.toml` first, then `package.json`. This is the one
    /// required input of the tool: without it there is nothing to name or
    /// version the document with.
    ///
    /// # Returns
    /// * `Ok(ProjectMetadata)` - Resolved name and version
    /// * `Err` - If no manifest exists or it cannot be parsed
    pub fn resolve(project_dir: &Path) -> Result<Self> {
        let cargo_path = project_dir.join("Cargo.toml");
        if cargo_path.exists() {
            return Self::from_cargo(&cargo_path);
        }

        let package_path = project_dir.join("package.json");
        if package_path.exists() {
            return Self::from_package_json(&package_path);
        }

        Err(RelnotesError::metadata(format!(
            "no Cargo.toml or package.json found in {}",
            project_dir.display()
        )))
    }

    fn from_cargo(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let manifest: CargoManifest = toml::from_str(&content).map_err(|e| {
            RelnotesError::metadata(format!("cannot parse {}: {}", path.display(), e))
        })?;

        Ok(ProjectMetadata {
            name: manifest.package.name,
            version: parse_version(&manifest.package.version)?,
            manifest: "Cargo.toml".to_string(),
        })
    }

    fn from_package_json(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let package: PackageJson = serde_json::from_str(&content).map_err(|e| {
            RelnotesError::metadata(format!("cannot parse {}: {}", path.display(), e))
        })?;

        Ok(ProjectMetadata {
            name: package.name,
            version: parse_version(&package.version)?,
            manifest: "package.json".to_string(),
        })
    }
}

fn parse_version(raw: &str) -> Result<Version> {
    Version::parse(raw)
        .map_err(|e| RelnotesError::version(format!("invalid version '{}': {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_resolve_from_cargo_toml() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "Cargo.toml",
            "[package]\nname = \"demo\"\nversion = \"1.2.3\"\nedition = \"2021\"\n",
        );

        let meta = ProjectMetadata::resolve(dir.path()).unwrap();
        assert_eq!(meta.name, "demo");
        assert_eq!(meta.version, Version::new(1, 2, 3));
        assert_eq!(meta.manifest, "Cargo.toml");
    }

    #[test]
    fn test_resolve_from_package_json() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "package.json",
            r#"{ "name": "demo-js", "version": "0.4.1", "private": true }"#,
        );

        let meta = ProjectMetadata::resolve(dir.path()).unwrap();
        assert_eq!(meta.name, "demo-js");
        assert_eq!(meta.version, Version::new(0, 4, 1));
        assert_eq!(meta.manifest, "package.json");
    }

    #[test]
    fn test_cargo_toml_wins_over_package_json() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "Cargo.toml",
            "[package]\nname = \"rusty\"\nversion = \"2.0.0\"\n",
        );
        write_file(
            dir.path(),
            "package.json",
            r#"{ "name": "webby", "version": "9.9.9" }"#,
        );

        let meta = ProjectMetadata::resolve(dir.path()).unwrap();
        assert_eq!(meta.name, "rusty");
        assert_eq!(meta.manifest, "Cargo.toml");
    }

    #[test]
    fn test_missing_manifest_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProjectMetadata::resolve(dir.path()).unwrap_err();
        assert!(err.to_string().contains("metadata"));
    }

    #[test]
    fn test_invalid_version_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "Cargo.toml",
            "[package]\nname = \"demo\"\nversion = \"not-a-version\"\n",
        );

        assert!(ProjectMetadata::resolve(dir.path()).is_err());
    }
}
