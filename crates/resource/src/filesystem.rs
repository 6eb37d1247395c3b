//! Filesystem-backed resources.
//!
//! Paths are resolved below a base directory. Absolute paths and paths that
//! climb out of the base (`..`) are refused.

use crate::error::ResourceError;
use crate::provider::{ResourceProvider, SharedResourceData};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

#[derive(Debug)]
pub struct FilesystemResourceProvider {
    base_path: PathBuf,
    /// Canonical form of `base_path`, when it exists at construction time.
    canonical_base: Option<PathBuf>,
}

impl FilesystemResourceProvider {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base_path = base_path.as_ref().to_path_buf();
        let canonical_base = base_path.canonicalize().ok();
        Self {
            base_path,
            canonical_base,
        }
    }

    /// `None` when `path` would escape the base directory.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path);
        let escapes = |c: Component<'_>| {
            matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_))
        };
        if relative.is_absolute() || relative.components().any(escapes) {
            return None;
        }

        let full_path = self.base_path.join(relative);
        match (full_path.canonicalize(), &self.canonical_base) {
            // symlinks may still point outside the base
            (Ok(canonical), Some(base)) => canonical.starts_with(base).then_some(canonical),
            _ => Some(full_path),
        }
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let full_path = self
            .resolve(path)
            .ok_or_else(|| {
                ResourceError::NotFound(format!("{path} (outside resource directory)"))
            })?;

        std::fs::read(&full_path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(path.to_string())
            } else {
                ResourceError::LoadFailed {
                    path: path.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_some_and(|p| p.is_file())
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_text_below_base() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("instructions.txt"), "Carry photo ID.\n").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        assert!(provider.exists("instructions.txt"));
        assert_eq!(provider.load_text("instructions.txt").unwrap(), "Carry photo ID.");
    }

    #[test]
    fn nested_paths_are_allowed() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("text")).unwrap();
        fs::write(dir.path().join("text/desk.txt"), b"desk").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        assert_eq!(&*provider.load("text/desk.txt").unwrap(), b"desk");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());
        assert!(!provider.exists("absent.txt"));
        assert!(matches!(provider.load("absent.txt"), Err(ResourceError::NotFound(_))));
    }

    #[test]
    fn traversal_and_absolute_paths_are_refused() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());

        assert!(provider.load("../../../etc/passwd").is_err());
        assert!(provider.load("/etc/passwd").is_err());
        assert!(!provider.exists("text/../../secret"));
        assert!(!provider.exists(".."));
    }

    #[test]
    fn directories_do_not_count_as_resources() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());
        assert!(!provider.exists("sub"));
    }
}
