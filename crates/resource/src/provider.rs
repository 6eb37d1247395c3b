use crate::error::ResourceError;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};

/// Reference-counted resource bytes.
pub type SharedResourceData = Arc<Vec<u8>>;

/// Loads named static resources.
pub trait ResourceProvider: Send + Sync + Debug {
    /// Load the raw bytes stored under `path`.
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError>;

    fn exists(&self, path: &str) -> bool;

    /// Human-readable provider name for log lines.
    fn name(&self) -> &'static str;

    /// Load a resource and decode it as UTF-8 text.
    ///
    /// A trailing line break is dropped so that text files edited by hand
    /// do not render an empty last line.
    fn load_text(&self, path: &str) -> Result<String, ResourceError> {
        let data = self.load(path)?;
        let text = std::str::from_utf8(&data)
            .map_err(|_| ResourceError::InvalidFormat(path.to_string()))?;
        log::debug!("Loaded '{}' ({} bytes) via {}", path, data.len(), self.name());
        Ok(text.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// A provider backed by a map held in memory.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    resources: RwLock<HashMap<String, SharedResourceData>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, for providers assembled up front.
    pub fn with(self, path: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        // A fresh provider cannot have a poisoned lock.
        let _ = self.add(path, data.into());
        self
    }

    /// Stores `data` under `path`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, path: impl Into<String>, data: Vec<u8>) -> Result<(), ResourceError> {
        let path = path.into();
        let mut resources = self.resources.write().map_err(|_| ResourceError::LoadFailed {
            path: path.clone(),
            message: "resource store lock poisoned".to_string(),
        })?;
        resources.insert(path, Arc::new(data));
        Ok(())
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.resources.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let resources = self.resources.read().map_err(|_| ResourceError::LoadFailed {
            path: path.to_string(),
            message: "resource store lock poisoned".to_string(),
        })?;
        resources
            .get(path)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }

    fn exists(&self, path: &str) -> bool {
        self.resources
            .read()
            .map(|r| r.contains_key(path))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}
