//! Directory listing model for rang.
//!
//! Provides the [Entry] struct shown in the left pane and [list_entries], which turns a raw
//! directory enumeration into the ordered list the browser works with:
//! directories first, then files, each group sorted by name.

use crate::core::fs::{FsError, FsGateway};

use std::path::Path;

/// A single child of the current directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    is_dir: bool,
}

impl Entry {
    pub fn new(name: impl Into<String>, is_dir: bool) -> Self {
        Entry {
            name: name.into(),
            is_dir,
        }
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }
}

/// Lists the children of `path`, directories first, each group sorted lexicographically.
///
/// # Returns
/// The ordered entries, or [FsError::Listing] when the directory cannot be enumerated.
pub fn list_entries<F: FsGateway + ?Sized>(fs: &F, path: &Path) -> Result<Vec<Entry>, FsError> {
    let names = fs.list_children(path)?;

    let (mut dirs, mut files): (Vec<Entry>, Vec<Entry>) = names
        .into_iter()
        .map(|name| {
            let is_dir = fs.is_directory(&path.join(&name));
            Entry::new(name, is_dir)
        })
        .partition(Entry::is_dir);

    dirs.sort_unstable_by(|a, b| a.name.cmp(&b.name));
    files.sort_unstable_by(|a, b| a.name.cmp(&b.name));

    dirs.append(&mut files);
    Ok(dirs)
}
