//! Directory-backed slot store.
//!
//! Every key is stored as `<key>.json` inside one directory handle. Writes
//! land in a sibling temporary file first and are renamed over the target,
//! so readers only ever observe a complete value.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use tracing::warn;

use crate::task::ports::{SlotStore, SlotStoreError, SlotStoreResult};

const SLOT_EXTENSION: &str = "json";
const TEMP_SUFFIX: &str = "tmp";

/// Slot store keeping one file per key in a capability-scoped directory.
#[derive(Debug)]
pub struct FileSlotStore {
    dir: Dir,
}

impl FileSlotStore {
    /// Wraps an already opened directory handle.
    #[must_use]
    pub const fn new(dir: Dir) -> Self {
        Self { dir }
    }

    /// Opens `path` as the slot directory, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns [`SlotStoreError::Backend`] when the directory cannot be
    /// created or opened.
    pub fn open(path: impl AsRef<Utf8Path>) -> SlotStoreResult<Self> {
        let root = path.as_ref();
        Dir::create_ambient_dir_all(root, ambient_authority()).map_err(SlotStoreError::backend)?;
        let dir = Dir::open_ambient_dir(root, ambient_authority()).map_err(SlotStoreError::backend)?;
        Ok(Self::new(dir))
    }

    fn replace(&self, target: &Utf8Path, value: &str) -> io::Result<()> {
        let temp = temp_path_for(target);
        self.dir.write(&temp, value)?;
        if let Err(err) = self.dir.rename(&temp, &self.dir, target) {
            if let Err(cleanup_err) = self.dir.remove_file(&temp) {
                warn!(
                    path = %temp,
                    error = %cleanup_err,
                    "failed to remove temporary slot file"
                );
            }
            return Err(err);
        }
        Ok(())
    }
}

/// Maps a key to its file name within the slot directory.
fn slot_path(key: &str) -> SlotStoreResult<Utf8PathBuf> {
    let is_valid = !key.is_empty()
        && key != "."
        && key != ".."
        && !key.contains(['/', '\\', '\0']);
    if !is_valid {
        return Err(SlotStoreError::InvalidKey(key.to_owned()));
    }
    Ok(Utf8PathBuf::from(format!("{key}.{SLOT_EXTENSION}")))
}

fn temp_path_for(target: &Utf8Path) -> Utf8PathBuf {
    Utf8PathBuf::from(format!("{target}.{TEMP_SUFFIX}"))
}

impl SlotStore for FileSlotStore {
    fn read(&self, key: &str) -> SlotStoreResult<Option<String>> {
        let path = slot_path(key)?;
        match self.dir.read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SlotStoreError::backend(err)),
        }
    }

    fn write(&self, key: &str, value: &str) -> SlotStoreResult<()> {
        let path = slot_path(key)?;
        self.replace(&path, value).map_err(SlotStoreError::backend)
    }

    fn remove(&self, key: &str) -> SlotStoreResult<bool> {
        let path = slot_path(key)?;
        match self.dir.remove_file(&path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(SlotStoreError::backend(err)),
        }
    }
}
