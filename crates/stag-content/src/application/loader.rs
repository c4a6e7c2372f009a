//! Loading world definitions from YAML text or files.

use std::fs;
use std::path::{Path, PathBuf};

use stag_world::domain::source::{WorldSeed, WorldSource};

use crate::domain::definitions::WorldDefinition;
use crate::error::ContentError;

/// Parses and validates a YAML world definition.
///
/// # Errors
///
/// Returns `ContentError::Parse` for malformed YAML and
/// `ContentError::Invalid` for an inconsistent world.
pub fn parse_world(yaml: &str) -> Result<WorldSeed, ContentError> {
    let definition: WorldDefinition = serde_yaml::from_str(yaml)?;
    definition.into_seed()
}

/// Reads, parses and validates a YAML world file.
///
/// # Errors
///
/// Returns `ContentError::Io` if the file cannot be read, otherwise as
/// [`parse_world`].
pub fn load_world_file(path: &Path) -> Result<WorldSeed, ContentError> {
    let yaml = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let seed = parse_world(&yaml)?;
    tracing::info!(path = %path.display(), start_location = %seed.start_location, "world loaded");
    Ok(seed)
}

/// A world source backed by a YAML file on disk.
#[derive(Debug, Clone)]
pub struct YamlWorldSource {
    path: PathBuf,
}

impl YamlWorldSource {
    /// Creates a source that reads `path` on every load.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WorldSource for YamlWorldSource {
    type Error = ContentError;

    fn load(&self) -> Result<WorldSeed, ContentError> {
        load_world_file(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled_world() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/basic-world.yaml")
    }

    #[test]
    fn test_parse_world_reports_yaml_errors() {
        let result = parse_world("locations: [unterminated");

        assert!(matches!(result, Err(ContentError::Parse(_))));
    }

    #[test]
    fn test_load_world_file_reports_missing_file() {
        let result = load_world_file(Path::new("/definitely/not/here.yaml"));

        let error = result.unwrap_err();
        assert!(matches!(error, ContentError::Io { .. }));
        assert!(error.to_string().contains("/definitely/not/here.yaml"));
    }

    #[test]
    fn test_bundled_world_loads() {
        // Arrange
        let source = YamlWorldSource::new(bundled_world());

        // Act
        let seed = source.load().unwrap();

        // Assert
        assert_eq!(seed.start_location, "cabin");
        assert!(seed.world.has_location("storeroom"));
        let log = seed.world.find_entity_template("log").unwrap();
        assert_eq!(log.description(), "A heavy wooden log");
        assert!(!seed.world.actions().is_empty());
    }
}
