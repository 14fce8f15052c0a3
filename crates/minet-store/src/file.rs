use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::names::validate_slot_name;
use crate::traits::SlotStore;

/// Extension used for slot files on disk.
const SLOT_EXT: &str = "json";

/// File-backed slot store: one file per slot under a data directory.
///
/// A slot named `posts` lives at `<dir>/posts.json`. Writes go through a
/// temporary file followed by an atomic rename, so a crash mid-write leaves
/// the previous snapshot intact rather than a half-written one. Reads of a
/// slot that was never written return `Ok(None)`.
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    /// Open a slot store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        debug!(dir = %dir.display(), "opened slot store");
        Ok(Self { dir })
    }

    /// The data directory this store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{SLOT_EXT}"))
    }

    fn tmp_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!(".{name}.{SLOT_EXT}.tmp"))
    }
}

impl SlotStore for FileSlotStore {
    fn read_slot(&self, name: &str) -> StoreResult<Option<String>> {
        validate_slot_name(name)?;
        match fs::read(self.slot_path(name)) {
            Ok(bytes) => {
                let text = String::from_utf8(bytes).map_err(|_| StoreError::NotText {
                    name: name.to_string(),
                })?;
                Ok(Some(text))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_slot(&self, name: &str, contents: &str) -> StoreResult<()> {
        validate_slot_name(name)?;
        let tmp = self.tmp_path(name);
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, self.slot_path(name))?;
        debug!(slot = name, bytes = contents.len(), "wrote slot");
        Ok(())
    }

    fn delete_slot(&self, name: &str) -> StoreResult<bool> {
        validate_slot_name(name)?;
        match fs::remove_file(self.slot_path(name)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn list_slots(&self) -> StoreResult<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(SLOT_EXT) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                // Skip leftover temp files from an interrupted write.
                if validate_slot_name(stem).is_ok() {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

impl std::fmt::Debug for FileSlotStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSlotStore")
            .field("dir", &self.dir)
            .finish()
    }
}
