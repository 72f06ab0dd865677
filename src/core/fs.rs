//! Filesystem gateway for rang.
//!
//! Every filesystem touch the browser makes goes through the [FsGateway] trait so the
//! navigation and preview logic can be exercised without a real disk.
//! [LocalFs] is the std::fs backed implementation used by the `rang` binary.
//!
//! All fallible operations return an [FsError] tagged with the operation that failed.

use std::fs;
use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

/// Errors produced by the filesystem gateway, one variant per operation.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("cannot list {}: {source}", path.display())]
    Listing { path: PathBuf, source: io::Error },

    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot delete {}: {source}", path.display())]
    Delete { path: PathBuf, source: io::Error },

    #[error("cannot rename {}: {source}", path.display())]
    Rename { path: PathBuf, source: io::Error },

    #[error("cannot create directory {}: {source}", path.display())]
    Mkdir { path: PathBuf, source: io::Error },

    #[error("invalid name '{0}'")]
    InvalidName(String),
}

impl FsError {
    /// The underlying io error kind, if the failure came from the OS.
    pub fn kind(&self) -> Option<io::ErrorKind> {
        match self {
            FsError::Listing { source, .. }
            | FsError::Read { source, .. }
            | FsError::Delete { source, .. }
            | FsError::Rename { source, .. }
            | FsError::Mkdir { source, .. } => Some(source.kind()),
            FsError::InvalidName(_) => None,
        }
    }
}

/// Capability set the browser needs from a filesystem.
pub trait FsGateway {
    /// Names of the immediate children of `path`.
    fn list_children(&self, path: &Path) -> Result<Vec<String>, FsError>;

    fn is_directory(&self, path: &Path) -> bool;

    /// Reads at most `limit` bytes from the start of a regular file.
    /// Pipes, sockets and devices are refused with [FsError::Read] instead of being opened.
    fn read_file(&self, path: &Path, limit: u64) -> Result<Vec<u8>, FsError>;

    fn delete(&self, path: &Path) -> Result<(), FsError>;

    /// Renames `path` to `new_name` inside the same parent directory.
    /// Fails if an entry called `new_name` already exists.
    fn rename(&self, path: &Path, new_name: &str) -> Result<(), FsError>;

    fn make_directory(&self, path: &Path) -> Result<(), FsError>;
}

/// Accepts only names that stay inside the current directory: one normal path component.
pub fn validate_name(name: &str) -> Result<&str, FsError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(c)), None) if c == name => Ok(name),
        _ => Err(FsError::InvalidName(name.to_string())),
    }
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs {
    move_to_trash: bool,
}

impl LocalFs {
    pub fn new(move_to_trash: bool) -> Self {
        Self { move_to_trash }
    }

    #[inline]
    pub fn move_to_trash(&self) -> bool {
        self.move_to_trash
    }
}

impl FsGateway for LocalFs {
    fn list_children(&self, path: &Path) -> Result<Vec<String>, FsError> {
        let listing = |source| FsError::Listing {
            path: path.to_path_buf(),
            source,
        };

        let mut names = Vec::with_capacity(64);
        for entry in fs::read_dir(path).map_err(listing)? {
            // entries that vanish mid-enumeration are skipped
            let Ok(entry) = entry else {
                continue;
            };
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_file(&self, path: &Path, limit: u64) -> Result<Vec<u8>, FsError> {
        let read = |source| FsError::Read {
            path: path.to_path_buf(),
            source,
        };

        // opening a FIFO blocks until a writer shows up
        let meta = fs::metadata(path).map_err(read)?;
        if !meta.is_file() {
            return Err(read(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }

        let file = fs::File::open(path).map_err(read)?;
        let mut buf = Vec::new();
        file.take(limit).read_to_end(&mut buf).map_err(read)?;
        Ok(buf)
    }

    fn delete(&self, path: &Path) -> Result<(), FsError> {
        let delete = |source| FsError::Delete {
            path: path.to_path_buf(),
            source,
        };

        if self.move_to_trash {
            return trash::delete(path).map_err(|e| delete(io::Error::other(e.to_string())));
        }

        let meta = fs::symlink_metadata(path).map_err(delete)?;
        if meta.is_dir() {
            fs::remove_dir_all(path).map_err(delete)
        } else {
            fs::remove_file(path).map_err(delete)
        }
    }

    fn rename(&self, path: &Path, new_name: &str) -> Result<(), FsError> {
        let new_name = validate_name(new_name)?;
        let target = path.with_file_name(new_name);

        // std::fs::rename silently replaces an existing file on unix
        if fs::symlink_metadata(&target).is_ok() {
            return Err(FsError::Rename {
                path: path.to_path_buf(),
                source: io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("'{}' already exists", new_name),
                ),
            });
        }

        fs::rename(path, &target).map_err(|source| FsError::Rename {
            path: path.to_path_buf(),
            source,
        })
    }

    fn make_directory(&self, path: &Path) -> Result<(), FsError> {
        fs::create_dir(path).map_err(|source| FsError::Mkdir {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn list_children_returns_every_name() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        File::create(dir.path().join("one.txt"))?;
        fs::create_dir(dir.path().join("two"))?;

        let mut names = LocalFs::default().list_children(dir.path())?;
        names.sort();
        assert_eq!(names, vec!["one.txt", "two"]);
        Ok(())
    }

    #[test]
    fn list_children_missing_dir_is_listing_error() {
        let res = LocalFs::default().list_children(Path::new("/path/does/not/exist"));
        assert!(matches!(res, Err(FsError::Listing { .. })));
    }

    #[test]
    fn read_file_respects_limit() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("data.txt");
        let mut file = File::create(&path)?;
        file.write_all(b"0123456789")?;

        let bytes = LocalFs::default().read_file(&path, 4)?;
        assert_eq!(bytes, b"0123");
        Ok(())
    }

    #[test]
    fn read_file_refuses_non_regular_files() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let gw = LocalFs::default();

        let err = gw
            .read_file(dir.path(), 16)
            .expect_err("a directory is not readable as a file");
        assert!(matches!(err, FsError::Read { .. }));
        assert_eq!(err.kind(), Some(io::ErrorKind::InvalidInput));

        #[cfg(unix)]
        {
            let err = gw
                .read_file(Path::new("/dev/null"), 16)
                .expect_err("character devices are refused");
            assert_eq!(err.kind(), Some(io::ErrorKind::InvalidInput));
        }
        Ok(())
    }

    #[test]
    fn delete_removes_files_and_directories() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let file = dir.path().join("gone.txt");
        let sub = dir.path().join("sub");
        File::create(&file)?;
        fs::create_dir(&sub)?;
        File::create(sub.join("inner.txt"))?;

        let gw = LocalFs::default();
        gw.delete(&file)?;
        gw.delete(&sub)?;
        assert!(!file.exists());
        assert!(!sub.exists());

        assert!(matches!(gw.delete(&file), Err(FsError::Delete { .. })));
        Ok(())
    }

    #[test]
    fn rename_refuses_to_overwrite() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        fs::write(&a, "from a")?;
        fs::write(&b, "from b")?;

        let err = LocalFs::default()
            .rename(&a, "b")
            .expect_err("rename onto an existing name must fail");
        assert!(matches!(err, FsError::Rename { .. }));
        assert_eq!(err.kind(), Some(io::ErrorKind::AlreadyExists));
        assert_eq!(fs::read_to_string(&b)?, "from b");
        assert!(a.exists());
        Ok(())
    }

    #[test]
    fn rename_moves_within_parent() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let a = dir.path().join("a");
        fs::write(&a, "x")?;

        LocalFs::default().rename(&a, "c")?;
        assert!(!a.exists());
        assert!(dir.path().join("c").exists());
        Ok(())
    }

    #[test]
    fn invalid_names_are_rejected() {
        for name in ["", ".", "..", "a/b", "/abs"] {
            assert!(
                matches!(validate_name(name), Err(FsError::InvalidName(_))),
                "accepted {name:?}"
            );
        }
        assert!(validate_name("fine.txt").is_ok());
    }

    #[test]
    fn make_directory_fails_when_present() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let target = dir.path().join("new");
        let gw = LocalFs::default();
        gw.make_directory(&target)?;
        assert!(target.is_dir());
        assert!(matches!(
            gw.make_directory(&target),
            Err(FsError::Mkdir { .. })
        ));
        Ok(())
    }
}
