use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::note::Note;
use crate::model::store::NoteStore;

/// File inside the data directory that holds the serialized collection
pub const STORE_FILE: &str = "notes.json";

/// Error type for store persistence
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unreadable store {path} (kept aside as notes.json.corrupt): {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not serialize notes: {0}")]
    Serialize(serde_json::Error),
}

/// Resolve the data directory: explicit flag > `JOT_DIR` env > `~/.jot`
pub fn resolve_data_dir(flag: Option<&Path>) -> PathBuf {
    if let Some(dir) = flag {
        return dir.to_path_buf();
    }
    if let Ok(dir) = std::env::var("JOT_DIR")
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }
    match std::env::var("HOME") {
        Ok(home) if !home.is_empty() => Path::new(&home).join(".jot"),
        _ => PathBuf::from(".jot"),
    }
}

/// Load the note collection from `dir`.
///
/// A missing file is a normal first run (empty collection). An unreadable
/// or unparseable file is moved aside to `notes.json.corrupt` so nothing is
/// silently destroyed, and the error is returned for the caller to report —
/// the application then proceeds with an empty collection.
pub fn load_store(dir: &Path) -> Result<NoteStore, StoreError> {
    let path = dir.join(STORE_FILE);
    if !path.exists() {
        return Ok(NoteStore::new());
    }

    let text = fs::read_to_string(&path).map_err(|e| StoreError::Read {
        path: path.clone(),
        source: e,
    })?;

    match serde_json::from_str::<Vec<Note>>(&text) {
        Ok(notes) => Ok(NoteStore::from_notes(notes)),
        Err(e) => {
            // Keep the unreadable file for manual recovery; the next save
            // would otherwise clobber it.
            let _ = fs::rename(&path, dir.join(format!("{}.corrupt", STORE_FILE)));
            Err(StoreError::Corrupt { path, source: e })
        }
    }
}

/// Serialize and write the full collection to `dir`, atomically
pub fn save_store(dir: &Path, store: &NoteStore) -> Result<(), StoreError> {
    let path = dir.join(STORE_FILE);
    let content = serde_json::to_string_pretty(&store.notes).map_err(StoreError::Serialize)?;

    fs::create_dir_all(dir).map_err(|e| StoreError::Write {
        path: path.clone(),
        source: e,
    })?;
    atomic_write(&path, content.as_bytes()).map_err(|e| StoreError::Write { path, source: e })
}

/// Write via a temp file in the same directory, then rename into place
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
