//! File references of areas.
//!
//! Areas point at files by id. The referenced file may have been deleted
//! since; such a dangling reference is still rendered, marked as such.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::{Area, FileId, TargetType};

/// The parts of a stored file the editor shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: FileId,
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl FileRecord {
    pub fn new(id: impl Into<FileId>, file_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            file_name: file_name.into(),
            thumbnail_url: None,
        }
    }

    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }
}

/// Files of one kind (images, audio files), keyed by id.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileRegistry {
    files: BTreeMap<FileId, FileRecord>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: FileRecord) {
        self.files.insert(record.id, record);
    }

    pub fn get(&self, id: FileId) -> Option<&FileRecord> {
        self.files.get(&id)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FromIterator<FileRecord> for FileRegistry {
    fn from_iter<I: IntoIterator<Item = FileRecord>>(iter: I) -> Self {
        let mut registry = FileRegistry::new();
        for record in iter {
            registry.insert(record);
        }
        registry
    }
}

/// Outcome of looking up a file reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reference<'a> {
    Resolved(&'a FileRecord),
    /// An id is set but the registry has no such file.
    Dangling(FileId),
    /// No id is set.
    Unset,
}

impl<'a> Reference<'a> {
    pub fn file(&self) -> Option<&'a FileRecord> {
        match self {
            Reference::Resolved(file) => Some(file),
            _ => None,
        }
    }

    pub fn is_dangling(&self) -> bool {
        matches!(self, Reference::Dangling(_))
    }
}

/// Looks up `id` in `registry`.
pub fn get_reference(id: Option<FileId>, registry: &FileRegistry) -> Reference<'_> {
    match id {
        None => Reference::Unset,
        Some(id) => match registry.get(id) {
            Some(file) => Reference::Resolved(file),
            None => Reference::Dangling(id),
        },
    }
}

/// The file an area's audio link or audio player points at.
///
/// Audio targets take precedence over an attached player file.
pub fn target_file<'a>(area: &Area, audio_files: &'a FileRegistry) -> Reference<'a> {
    let id = match (&area.target_type, area.target_id) {
        (TargetType::AudioFile, Some(id)) => Some(FileId(id.as_u64())),
        _ => area.audio_file_id,
    };
    get_reference(id, audio_files)
}

/// Side effect of edit and select actions.
pub trait Navigation {
    fn navigate(&mut self, path: &str);
}

/// Navigation that only remembers the paths it was sent to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationLog {
    pub paths: Vec<String>,
}

impl Navigation for NavigationLog {
    fn navigate(&mut self, path: &str) {
        self.paths.push(path.to_string());
    }
}
