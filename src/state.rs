use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::address_book::AddressBook;
use crate::record::Record;

/// Current on-disk document version
pub const FORMAT_VERSION: u32 = 1;
// Refuse to load anything bigger than this (10MB)
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Contacts file {0:?} does not exist")]
    Missing(PathBuf),
    #[error("Contacts file {0:?} exceeds the size limit")]
    TooLarge(PathBuf),
    #[error("Unsupported contacts file version {0}")]
    UnsupportedVersion(u32),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed contacts file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to replace contacts file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

#[derive(Serialize)]
struct DocumentRef<'a> {
    version: u32,
    contacts: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct Document {
    version: u32,
    #[serde(default)]
    contacts: Vec<Record>,
}

/// Loads and saves an address book as a versioned JSON document
#[derive(Debug, Clone)]
pub struct ContactStorage {
    path: PathBuf,
}

impl ContactStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<AddressBook, StorageError> {
        if !self.path.exists() {
            return Err(StorageError::Missing(self.path.clone()));
        }

        let metadata = fs::metadata(&self.path)?;
        if metadata.len() > MAX_FILE_SIZE {
            return Err(StorageError::TooLarge(self.path.clone()));
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let document: Document = serde_json::from_reader(reader)?;
        if document.version != FORMAT_VERSION {
            return Err(StorageError::UnsupportedVersion(document.version));
        }

        log::info!("Loaded {} contacts from {:?}", document.contacts.len(), self.path);
        Ok(AddressBook::from_records(document.contacts))
    }

    /// Move the current file aside to `<name>.bak`, replacing an older backup
    pub fn backup(&self) -> Result<PathBuf, StorageError> {
        let mut backup = self.path.clone().into_os_string();
        backup.push(".bak");
        let backup = PathBuf::from(backup);
        fs::rename(&self.path, &backup)?;
        log::info!("Moved {:?} to {:?}", self.path, backup);
        Ok(backup)
    }

    /// Write the whole book to a temp file next to the target, then rename over it
    pub fn save(&self, book: &AddressBook) -> Result<(), StorageError> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let tmp_file = NamedTempFile::new_in(parent)?;
        {
            let mut writer = BufWriter::new(tmp_file.as_file());
            serde_json::to_writer_pretty(
                &mut writer,
                &DocumentRef { version: FORMAT_VERSION, contacts: book.records().collect() },
            )?;
            writer.flush()?;
        }
        tmp_file.persist(&self.path)?;

        log::info!("Saved {} contacts to {:?}", book.len(), self.path);
        Ok(())
    }
}
