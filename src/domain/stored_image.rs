use std::fmt;
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Request-scoped identity for an uploaded image and every working file
/// derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(Uuid);

impl ImageHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ImageHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An uploaded image persisted to temporary storage. Never mutated after
/// creation; masking and extraction only read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub handle: ImageHandle,
    pub path: PathBuf,
}

impl StoredImage {
    pub fn new(handle: ImageHandle, path: PathBuf) -> Self {
        Self { handle, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
