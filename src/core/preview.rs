//! Preview content for the right pane.
//!
//! Turns the selected path into the lines the layout engine draws:
//! file contents split on line breaks, a one-line child listing for directories,
//! or a single diagnostic line when the entry cannot be read.

use crate::core::fs::{FsError, FsGateway};

use std::path::Path;

/// Upper bound on bytes read from a file for its preview.
pub const PREVIEW_BYTE_LIMIT: u64 = 1024 * 1024;
// Bytes scanned for NUL when deciding whether a file is binary
const BINARY_PEEK_BYTES: usize = 1024;

/// Builds the preview lines for `path`.
pub fn preview_lines<F: FsGateway + ?Sized>(fs: &F, path: &Path) -> Vec<String> {
    if fs.is_directory(path) {
        return match fs.list_children(path) {
            Ok(mut names) => {
                names.sort_unstable();
                vec![names.join(", ")]
            }
            Err(e) => vec![diagnostic(&e)],
        };
    }

    match fs.read_file(path, PREVIEW_BYTE_LIMIT) {
        Ok(bytes) => text_lines(&bytes),
        Err(e) => vec![diagnostic(&e)],
    }
}

/// The single line shown when an entry cannot be previewed.
pub fn diagnostic(err: &FsError) -> String {
    format!("Unable to open the file or directory: {}", err)
}

fn text_lines(bytes: &[u8]) -> Vec<String> {
    let peek = &bytes[..bytes.len().min(BINARY_PEEK_BYTES)];
    if peek.contains(&0) {
        return vec!["[Binary file - preview hidden]".to_string()];
    }

    String::from_utf8_lossy(bytes)
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fs::LocalFs;
    use std::fs::{self, File};
    use tempfile::tempdir;

    #[test]
    fn file_preview_splits_lines() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("notes.txt");
        fs::write(&path, "first\r\nsecond\n\tthird")?;

        let lines = preview_lines(&LocalFs::default(), &path);
        assert_eq!(lines, vec!["first", "second", "\tthird"]);
        Ok(())
    }

    #[test]
    fn directory_preview_is_one_joined_line() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let sub = dir.path().join("sub");
        fs::create_dir(&sub)?;
        File::create(sub.join("b.txt"))?;
        File::create(sub.join("a.txt"))?;
        fs::create_dir(sub.join("c"))?;

        let lines = preview_lines(&LocalFs::default(), &sub);
        assert_eq!(lines, vec!["a.txt, b.txt, c"]);
        Ok(())
    }

    #[test]
    fn empty_directory_preview_is_blank_line() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let lines = preview_lines(&LocalFs::default(), dir.path());
        assert_eq!(lines, vec![String::new()]);
        Ok(())
    }

    #[test]
    fn unreadable_entry_yields_single_diagnostic() {
        let lines = preview_lines(&LocalFs::default(), Path::new("/path/does/not/exist"));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Unable to open the file or directory"));
    }

    #[cfg(unix)]
    #[test]
    fn fifo_preview_does_not_block() -> Result<(), Box<dyn std::error::Error>> {
        use std::process::Command;
        use std::sync::mpsc;
        use std::thread;
        use std::time::Duration;

        let dir = tempdir()?;
        let pipe = dir.path().join("pipe");
        assert!(Command::new("mkfifo").arg(&pipe).status()?.success());

        let (tx, rx) = mpsc::channel();
        let target = pipe.clone();
        thread::spawn(move || {
            let _ = tx.send(preview_lines(&LocalFs::default(), &target));
        });

        let lines = rx.recv_timeout(Duration::from_secs(3))?;
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Unable to open the file or directory"));
        assert!(lines[0].ends_with("not a regular file"));
        Ok(())
    }

    #[test]
    fn binary_files_are_hidden() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("blob.bin");
        fs::write(&path, [0x7f, b'E', b'L', b'F', 0, 0, 1])?;

        let lines = preview_lines(&LocalFs::default(), &path);
        assert_eq!(lines, vec!["[Binary file - preview hidden]"]);
        Ok(())
    }
}
