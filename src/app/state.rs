//! Browser state and transition logic for rang.
//!
//! [AppState] holds everything that survives between frames: the current directory, the
//! cursor, a transient status message and the name the cursor should jump to once the
//! next listing is in. The entry list itself is recomputed every cycle and passed in.
//!
//! Transitions are driven by [Action]s from the keymap. Filesystem mutations go through the
//! [FsGateway]; their failures end up in the status line and the log, never as errors.

use crate::app::keymap::{Action, FileAction, NavAction, SystemAction};
use crate::core::fs::{FsError, FsGateway, validate_name};
use crate::core::listing::Entry;

use std::io;
use std::path::{Path, PathBuf};

/// Enumeration for each individual keypress result processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypressResult {
    Continue,
    Quit,
}

/// Persistent state of the browser between frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    current_dir: PathBuf,
    cursor: usize,
    status: Option<String>,
    pending_focus: Option<String>,
}

impl AppState {
    /// Starts at the process working directory.
    pub fn new() -> std::io::Result<Self> {
        let current_dir = std::env::current_dir()?;
        Ok(Self::from_dir(current_dir))
    }

    pub fn from_dir(initial_path: impl Into<PathBuf>) -> Self {
        Self {
            current_dir: initial_path.into(),
            cursor: 0,
            status: None,
            pending_focus: None,
        }
    }

    // Getters/ accessors

    #[inline]
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Drops the status message. Called on every key press.
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Reconciles the cursor with a freshly computed entry list.
    ///
    /// A pending focus name moves the cursor onto that entry if it is present.
    /// Afterwards the cursor is clamped into the list (or reset to 0 when it is empty).
    pub fn sync(&mut self, entries: &[Entry]) {
        if let Some(name) = self.pending_focus.take()
            && let Some(idx) = entries.iter().position(|e| e.name() == name)
        {
            self.cursor = idx;
        }
        self.cursor = self.cursor.min(entries.len().saturating_sub(1));
    }

    /// Index of the selected entry, `None` for an empty directory.
    pub fn selected_idx(&self, entries: &[Entry]) -> Option<usize> {
        (self.cursor < entries.len()).then_some(self.cursor)
    }

    pub fn selected_entry<'e>(&self, entries: &'e [Entry]) -> Option<&'e Entry> {
        entries.get(self.cursor)
    }

    pub fn selected_path(&self, entries: &[Entry]) -> Option<PathBuf> {
        self.selected_entry(entries)
            .map(|e| self.current_dir.join(e.name()))
    }

    /// Applies one action to the state.
    ///
    /// `entries` must be the list the user saw when pressing the key.
    /// `input` is the answer to [Action::prompt], `None` when cancelled or not asked.
    /// Delete only runs on a `y`/`yes` answer.
    pub fn handle_action<F: FsGateway + ?Sized>(
        &mut self,
        action: Action,
        entries: &[Entry],
        fs: &F,
        input: Option<String>,
    ) -> KeypressResult {
        match action {
            Action::Nav(nav) => self.handle_nav(nav, entries, fs),
            Action::File(FileAction::Delete) => self.handle_delete(entries, fs, input),
            Action::File(FileAction::Rename) => self.handle_rename(entries, fs, input),
            Action::File(FileAction::CreateDirectory) => self.handle_create_directory(fs, input),
            Action::System(SystemAction::Quit) => return KeypressResult::Quit,
        }
        KeypressResult::Continue
    }

    fn handle_nav<F: FsGateway + ?Sized>(&mut self, nav: NavAction, entries: &[Entry], fs: &F) {
        match nav {
            NavAction::GoUp => {
                if self.selected_idx(entries).is_some() && self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            NavAction::GoDown => {
                if self.cursor + 1 < entries.len() {
                    self.cursor += 1;
                }
            }
            NavAction::GoParent => {
                if let Some(parent) = self.current_dir.parent() {
                    self.current_dir = parent.to_path_buf();
                    log::debug!("Moved to parent {}", self.current_dir.display());
                }
                self.cursor = 0;
            }
            NavAction::GoIntoDir => {
                if let Some(path) = self.selected_path(entries)
                    && fs.is_directory(&path)
                {
                    log::debug!("Entered {}", path.display());
                    self.current_dir = path;
                    self.cursor = 0;
                }
            }
        }
    }

    fn handle_delete<F: FsGateway + ?Sized>(
        &mut self,
        entries: &[Entry],
        fs: &F,
        input: Option<String>,
    ) {
        let Some(entry) = self.selected_entry(entries) else {
            return;
        };
        if !is_confirmed(input) {
            return;
        }
        let path = self.current_dir.join(entry.name());

        match fs.delete(&path) {
            Ok(()) => {
                log::info!("Deleted {}", path.display());
                self.status = Some(format!("Deleted {}", entry.name()));
            }
            Err(e) => {
                log::warn!("Delete failed: {e}");
                self.status = Some(format!("Delete failed: {}", reason(&e)));
            }
        }
    }

    fn handle_rename<F: FsGateway + ?Sized>(
        &mut self,
        entries: &[Entry],
        fs: &F,
        input: Option<String>,
    ) {
        let Some(entry) = self.selected_entry(entries) else {
            return;
        };
        let Some(new_name) = non_empty(input) else {
            return;
        };
        let path = self.current_dir.join(entry.name());

        match fs.rename(&path, &new_name) {
            Ok(()) => {
                log::info!("Renamed {} to {new_name}", path.display());
                self.status = Some(format!("Renamed {} to {new_name}", entry.name()));
                self.pending_focus = Some(new_name);
            }
            Err(e) => {
                log::warn!("Rename failed: {e}");
                self.status = Some(format!("Rename failed: {}", reason(&e)));
            }
        }
    }

    fn handle_create_directory<F: FsGateway + ?Sized>(&mut self, fs: &F, input: Option<String>) {
        let Some(name) = non_empty(input) else {
            return;
        };

        let result = validate_name(&name)
            .map(|valid| self.current_dir.join(valid))
            .and_then(|path| fs.make_directory(&path).map(|()| path));

        match result {
            Ok(path) => {
                log::info!("Created directory {}", path.display());
                self.status = Some(format!("Created directory {name}"));
                self.pending_focus = Some(name);
            }
            Err(e) => {
                log::warn!("Create directory failed: {e}");
                self.status = Some(format!("Create directory failed: {}", reason(&e)));
            }
        }
    }
}

fn is_confirmed(input: Option<String>) -> bool {
    input.is_some_and(|s| matches!(s.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Short reason for the status line; the log keeps the full error.
fn reason(err: &FsError) -> String {
    match err.kind() {
        Some(io::ErrorKind::AlreadyExists) => "name already exists".to_string(),
        Some(io::ErrorKind::PermissionDenied) => "permission denied".to_string(),
        Some(io::ErrorKind::NotFound) => "no such file or directory".to_string(),
        Some(io::ErrorKind::DirectoryNotEmpty) => "directory not empty".to_string(),
        _ => err.to_string(),
    }
}

fn non_empty(input: Option<String>) -> Option<String> {
    input
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fs::LocalFs;
    use crate::core::listing::list_entries;
    use std::fs::{self, File};
    use tempfile::tempdir;

    const UP: Action = Action::Nav(NavAction::GoUp);
    const DOWN: Action = Action::Nav(NavAction::GoDown);
    const PARENT: Action = Action::Nav(NavAction::GoParent);
    const ENTER: Action = Action::Nav(NavAction::GoIntoDir);

    fn files(names: &[&str]) -> Vec<Entry> {
        names.iter().map(|n| Entry::new(*n, false)).collect()
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let fs = LocalFs::default();
        let entries = files(&["a", "b", "c"]);
        let mut state = AppState::from_dir("/tmp");

        for _ in 0..10 {
            state.handle_action(DOWN, &entries, &fs, None);
        }
        assert_eq!(state.cursor(), 2);

        for _ in 0..10 {
            state.handle_action(UP, &entries, &fs, None);
        }
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn empty_directory_moves_are_noops() {
        let fs = LocalFs::default();
        let mut state = AppState::from_dir("/tmp");

        for action in [DOWN, UP, ENTER, Action::File(FileAction::Delete)] {
            state.handle_action(action, &[], &fs, None);
        }
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.selected_idx(&[]), None);
        assert_eq!(state.current_dir(), Path::new("/tmp"));
        assert_eq!(state.status(), None);
    }

    #[test]
    fn parent_of_root_stays_root() {
        let fs = LocalFs::default();
        let mut state = AppState::from_dir("/");
        state.handle_action(PARENT, &[], &fs, None);
        assert_eq!(state.current_dir(), Path::new("/"));
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn enter_then_parent_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::create_dir(dir.path().join("alpha"))?;
        fs::create_dir(dir.path().join("beta"))?;
        File::create(dir.path().join("file.txt"))?;

        let fs = LocalFs::default();
        let mut state = AppState::from_dir(dir.path());
        let entries = list_entries(&fs, state.current_dir())?;

        state.handle_action(DOWN, &entries, &fs, None);
        state.handle_action(ENTER, &entries, &fs, None);
        assert_eq!(state.current_dir(), dir.path().join("beta"));
        assert_eq!(state.cursor(), 0);

        state.handle_action(PARENT, &[], &fs, None);
        assert_eq!(state.current_dir(), dir.path());
        assert_eq!(state.cursor(), 0);
        Ok(())
    }

    #[test]
    fn enter_on_file_is_noop() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        File::create(dir.path().join("file.txt"))?;

        let fs = LocalFs::default();
        let mut state = AppState::from_dir(dir.path());
        let entries = list_entries(&fs, state.current_dir())?;

        state.handle_action(ENTER, &entries, &fs, None);
        assert_eq!(state.current_dir(), dir.path());
        Ok(())
    }

    #[test]
    fn delete_last_entry_clamps_cursor() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        for name in ["a", "b", "c"] {
            File::create(dir.path().join(name))?;
        }

        let fs = LocalFs::default();
        let mut state = AppState::from_dir(dir.path());
        let entries = list_entries(&fs, state.current_dir())?;
        state.handle_action(DOWN, &entries, &fs, None);
        state.handle_action(DOWN, &entries, &fs, None);
        assert_eq!(state.cursor(), 2);

        state.handle_action(
            Action::File(FileAction::Delete),
            &entries,
            &fs,
            Some("y".into()),
        );
        assert_eq!(state.status(), Some("Deleted c"));
        assert!(!dir.path().join("c").exists());

        let entries = list_entries(&fs, state.current_dir())?;
        state.sync(&entries);
        assert_eq!(entries.len(), 2);
        assert_eq!(state.cursor(), 1);
        Ok(())
    }

    #[test]
    fn rename_collision_leaves_state_unchanged() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a"), "first")?;
        fs::write(dir.path().join("b"), "second")?;

        let fs = LocalFs::default();
        let mut state = AppState::from_dir(dir.path());
        let entries = list_entries(&fs, state.current_dir())?;
        let before = state.clone();

        state.handle_action(
            Action::File(FileAction::Rename),
            &entries,
            &fs,
            Some("b".into()),
        );

        assert_eq!(state.status(), Some("Rename failed: name already exists"));
        state.clear_status();
        assert_eq!(state, before);
        assert_eq!(std::fs::read_to_string(dir.path().join("a"))?, "first");
        assert_eq!(std::fs::read_to_string(dir.path().join("b"))?, "second");
        Ok(())
    }

    #[test]
    fn delete_directory_needs_confirmation() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let project = dir.path().join("project");
        fs::create_dir(&project)?;
        fs::write(project.join("important.txt"), "keep me")?;

        let fs = LocalFs::default();
        let mut state = AppState::from_dir(dir.path());
        let entries = list_entries(&fs, state.current_dir())?;
        let delete = Action::File(FileAction::Delete);

        for answer in [None, Some(""), Some("n"), Some("nope")] {
            state.handle_action(delete, &entries, &fs, answer.map(String::from));
            assert_eq!(state.status(), None);
            assert!(project.join("important.txt").exists());
        }

        state.handle_action(delete, &entries, &fs, Some(" Yes ".into()));
        assert_eq!(state.status(), Some("Deleted project"));
        assert!(!project.exists());
        Ok(())
    }

    #[test]
    fn rename_moves_cursor_onto_new_name() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        for name in ["a", "b", "c"] {
            File::create(dir.path().join(name))?;
        }

        let fs = LocalFs::default();
        let mut state = AppState::from_dir(dir.path());
        let entries = list_entries(&fs, state.current_dir())?;

        state.handle_action(
            Action::File(FileAction::Rename),
            &entries,
            &fs,
            Some(" z ".into()),
        );
        let entries = list_entries(&fs, state.current_dir())?;
        state.sync(&entries);

        assert_eq!(
            state.selected_entry(&entries).map(Entry::name),
            Some("z")
        );
        assert_eq!(state.cursor(), 2);
        Ok(())
    }

    #[test]
    fn cancelled_or_empty_prompt_does_nothing() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        File::create(dir.path().join("a"))?;

        let fs = LocalFs::default();
        let mut state = AppState::from_dir(dir.path());
        let entries = list_entries(&fs, state.current_dir())?;

        let rename = Action::File(FileAction::Rename);
        let mkdir = Action::File(FileAction::CreateDirectory);
        state.handle_action(rename, &entries, &fs, None);
        state.handle_action(rename, &entries, &fs, Some("   ".into()));
        state.handle_action(mkdir, &entries, &fs, None);
        state.handle_action(mkdir, &entries, &fs, Some(String::new()));

        assert_eq!(state.status(), None);
        assert_eq!(list_entries(&fs, dir.path())?, files(&["a"]));
        Ok(())
    }

    #[test]
    fn create_directory_and_reject_bad_names() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        File::create(dir.path().join("zzz"))?;

        let fs = LocalFs::default();
        let mut state = AppState::from_dir(dir.path());
        let mkdir = Action::File(FileAction::CreateDirectory);

        state.handle_action(mkdir, &[], &fs, Some("new".into()));
        assert_eq!(state.status(), Some("Created directory new"));
        assert!(dir.path().join("new").is_dir());

        let entries = list_entries(&fs, state.current_dir())?;
        state.sync(&entries);
        assert_eq!(state.selected_entry(&entries).map(Entry::name), Some("new"));

        state.handle_action(mkdir, &entries, &fs, Some("../escape".into()));
        let status = state.status().ok_or("missing status")?;
        assert!(status.starts_with("Create directory failed"));
        assert!(!dir.path().join("../escape").exists());
        Ok(())
    }

    #[test]
    fn quit_terminates() {
        let mut state = AppState::from_dir("/");
        let res = state.handle_action(
            Action::System(SystemAction::Quit),
            &[],
            &LocalFs::default(),
            None,
        );
        assert_eq!(res, KeypressResult::Quit);
    }
}
