//! Package opening and entry reading

use super::candidates::EntrySource;
use crate::error::{Error, Result};
use crate::model::DEFAULT_MAX_ENTRY_SIZE;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;
use zip::ZipArchive;
use zip::result::ZipError;

/// An open 3MF container
///
/// Owns the underlying ZIP reader for the lifetime of one analysis. The reader
/// (and the file handle behind it, when opened from a path) is released when
/// the package is dropped, on every exit path.
pub struct Package<R: Read + Seek> {
    archive: ZipArchive<R>,
    max_entry_size: u64,
}

impl<R: Read + Seek> Package<R> {
    /// Open a 3MF package from a reader
    ///
    /// Fails with [`Error::NotAnArchive`] when the ZIP central directory
    /// cannot be read.
    pub fn open(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader).map_err(|e| Error::NotAnArchive(e.to_string()))?;
        log::debug!("Opened archive with {} entries", archive.len());

        Ok(Self {
            archive,
            max_entry_size: DEFAULT_MAX_ENTRY_SIZE,
        })
    }

    /// Limit the uncompressed size of entries returned by [`Package::read_entry`]
    pub fn with_max_entry_size(mut self, bytes: u64) -> Self {
        self.max_entry_size = bytes;
        self
    }

    /// Read an entry as binary data
    ///
    /// Returns `Ok(None)` when the archive has no entry with that name. Errors
    /// are reserved for entries that exist but cannot be read: corrupt data,
    /// unsupported compression, or a size above the configured limit.
    pub fn read_entry(&mut self, name: &str) -> Result<Option<Vec<u8>>> {
        let file = match self.archive.by_name(name) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(Error::Zip(e)),
        };

        let limit = self.max_entry_size;
        let declared = file.size();
        if declared > limit {
            return Err(Error::EntryTooLarge {
                name: name.to_string(),
                size: declared,
                limit,
            });
        }

        // The declared size comes from the archive and is not trusted
        let mut content = Vec::with_capacity(usize::try_from(declared).unwrap_or(0));
        file.take(limit.saturating_add(1)).read_to_end(&mut content)?;
        if content.len() as u64 > limit {
            return Err(Error::EntryTooLarge {
                name: name.to_string(),
                size: content.len() as u64,
                limit,
            });
        }

        Ok(Some(content))
    }

    /// Check if an entry exists in the archive
    pub fn has_entry(&self, name: &str) -> bool {
        self.archive.index_for_name(name).is_some()
    }

    /// Get the number of entries in the archive
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Check if the archive is empty
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }

    /// List all entry names in the archive
    pub fn entry_names(&self) -> Vec<String> {
        self.archive.file_names().map(str::to_string).collect()
    }
}

impl Package<BufReader<File>> {
    /// Open a 3MF package from a file on disk
    ///
    /// I/O failures opening the file surface as [`Error::Io`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        log::debug!("Opening 3MF package {}", path.display());
        Self::open(BufReader::new(file))
    }
}

impl<B: AsRef<[u8]>> Package<Cursor<B>> {
    /// Open a 3MF package held in memory
    pub fn from_bytes(bytes: B) -> Result<Self> {
        Self::open(Cursor::new(bytes))
    }
}

impl<R: Read + Seek> EntrySource for Package<R> {
    fn read_entry(&mut self, name: &str) -> Result<Option<Vec<u8>>> {
        Package::read_entry(self, name)
    }
}
