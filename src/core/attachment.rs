//! # Attachments
//!
//! A file picker hands the composer a selection; the composer forwards it
//! once as an [`AttachmentBatch`] and then clears the picker, otherwise a
//! picker would swallow a repeat selection of the same files.

use std::path::{Path, PathBuf};

/// Opaque handle to a user-selected file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileHandle {
    path: PathBuf,
}

impl FileHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Display name (final path component, or the whole path if there is none).
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Ordered, non-empty set of files forwarded to the attach sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentBatch {
    files: Vec<FileHandle>,
}

impl AttachmentBatch {
    /// Returns `None` for an empty selection.
    pub fn new(files: Vec<FileHandle>) -> Option<Self> {
        (!files.is_empty()).then_some(Self { files })
    }

    pub fn files(&self) -> &[FileHandle] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn into_files(self) -> Vec<FileHandle> {
        self.files
    }
}

/// The selection state of a host file picker.
pub trait FileSelection {
    /// Files currently selected, in picker order.
    fn selected(&self) -> Vec<FileHandle>;

    /// Drop the current selection so that picking the same files fires again.
    fn clear_selection(&mut self);
}

impl FileSelection for Vec<FileHandle> {
    fn selected(&self) -> Vec<FileHandle> {
        self.clone()
    }

    fn clear_selection(&mut self) {
        self.clear();
    }
}
