//! File Store
//!
//! `Storage` implementation writing one file per record under a root
//! directory.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{Config, SyncStrategy};
use crate::error::{FolioError, Result};
use crate::serializer::{JsonSerializer, Serializer};

use super::Storage;

/// Suffix appended to a record path while it is being written
const TEMP_SUFFIX: &str = ".tmp";

/// File-backed record store
///
/// ## Concurrency:
/// - Holds no mutable state; all methods use `&self`
/// - Two writes to the same record share one temp path, so concurrent
///   writers of a collection must be serialized by the caller
/// - Readers never observe a partially written record
pub struct FileStore<S: Serializer = JsonSerializer> {
    /// Directory holding one subdirectory per collection
    root: PathBuf,

    /// Codec for record payloads
    serializer: S,

    /// Whether temp files are fsynced before the rename
    sync_strategy: SyncStrategy,
}

impl FileStore<JsonSerializer> {
    /// Open or create a JSON store rooted at `config.data_dir`
    pub fn open(config: &Config) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)?;

        tracing::info!("Opened document store at {}", config.data_dir.display());

        Ok(Self::new(&config.data_dir, JsonSerializer::new())
            .with_sync_strategy(config.sync_strategy))
    }
}

impl<S: Serializer> FileStore<S> {
    /// Create a store over `root` using the given codec
    ///
    /// Nothing is created on disk until the first write.
    pub fn new(root: impl Into<PathBuf>, serializer: S) -> Self {
        Self {
            root: root.into(),
            serializer,
            sync_strategy: SyncStrategy::EveryWrite,
        }
    }

    /// Override the sync strategy (default: `EveryWrite`)
    pub fn with_sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.sync_strategy = strategy;
        self
    }

    /// Root directory of the store
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory backing a collection
    pub fn collection_dir(&self, collection: &str) -> Result<PathBuf> {
        validate_name("collection", collection)?;
        Ok(self.root.join(collection))
    }

    /// Final on-disk path of a record
    /// ("users", "John") → {root}/users/John.json
    pub fn record_path(&self, collection: &str, resource: &str) -> Result<PathBuf> {
        validate_name("resource", resource)?;
        let file_name = format!("{}.{}", resource, self.serializer.extension());
        Ok(self.collection_dir(collection)?.join(file_name))
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Whether a directory entry is a committed record of this codec
    /// (skips `*.tmp` leftovers and foreign files)
    fn is_record_file(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext == self.serializer.extension())
            .unwrap_or(false)
    }

    /// Write the full payload to the temp file, syncing if configured
    fn write_temp(&self, tmp_path: &Path, bytes: &[u8]) -> io::Result<()> {
        let mut file = File::create(tmp_path)?;
        file.write_all(bytes)?;

        if self.sync_strategy == SyncStrategy::EveryWrite {
            file.sync_all()?;
        }

        Ok(())
    }
}

impl<S: Serializer> Storage for FileStore<S> {
    type Codec = S;

    fn codec(&self) -> &S {
        &self.serializer
    }

    fn write<T: Serialize + ?Sized>(
        &self,
        collection: &str,
        resource: &str,
        value: &T,
    ) -> Result<()> {
        let dir = self.collection_dir(collection)?;
        let path = self.record_path(collection, resource)?;
        let tmp_path = temp_path(&path);

        // Encode before touching the filesystem so an unencodable value
        // leaves no trace
        let bytes = self.serializer.encode(value)?;

        fs::create_dir_all(&dir)?;

        let committed = self
            .write_temp(&tmp_path, &bytes)
            .and_then(|()| fs::rename(&tmp_path, &path));

        if let Err(e) = committed {
            // Prior record (if any) is untouched; only the temp file can be stale
            if let Err(cleanup) = fs::remove_file(&tmp_path) {
                if cleanup.kind() != io::ErrorKind::NotFound {
                    tracing::warn!(
                        "Failed to remove temp file {}: {}",
                        tmp_path.display(),
                        cleanup
                    );
                }
            }
            return Err(e.into());
        }

        tracing::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    fn read<T: DeserializeOwned>(&self, collection: &str, resource: &str) -> Result<T> {
        let path = self.record_path(collection, resource)?;

        let bytes = fs::read(&path).map_err(|e| {
            not_found_or_io(e, || FolioError::record_not_found(collection, resource))
        })?;

        tracing::trace!("Read {} bytes from {}", bytes.len(), path.display());
        self.serializer.decode(&bytes)
    }

    fn read_all(&self, collection: &str) -> Result<Vec<Vec<u8>>> {
        let dir = self.collection_dir(collection)?;

        let entries = fs::read_dir(&dir)
            .map_err(|e| not_found_or_io(e, || FolioError::collection_not_found(collection)))?;

        let mut records = Vec::new();
        for entry in entries {
            let entry = entry?;

            if entry.file_type()?.is_dir() {
                continue;
            }

            let path = entry.path();
            if !self.is_record_file(&path) {
                tracing::trace!("Skipping non-record file {}", path.display());
                continue;
            }

            match fs::read(&path) {
                Ok(bytes) => records.push(bytes),
                // Deleted between enumeration and read
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            }
        }

        tracing::trace!(
            "Scanned {} records from collection '{}'",
            records.len(),
            collection
        );
        Ok(records)
    }

    fn delete(&self, collection: &str, resource: &str) -> Result<()> {
        let path = self.record_path(collection, resource)?;

        fs::remove_file(&path).map_err(|e| {
            not_found_or_io(e, || FolioError::record_not_found(collection, resource))
        })?;

        tracing::debug!("Deleted {}", path.display());
        Ok(())
    }
}

/// "{root}/users/John.json" → "{root}/users/John.json.tmp"
fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(TEMP_SUFFIX);
    PathBuf::from(name)
}

/// Map `ErrorKind::NotFound` to a domain error, pass everything else through
fn not_found_or_io(err: io::Error, not_found: impl FnOnce() -> FolioError) -> FolioError {
    if err.kind() == io::ErrorKind::NotFound {
        not_found()
    } else {
        FolioError::Io(err)
    }
}

/// Reject names that would resolve outside their parent directory
fn validate_name(kind: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(FolioError::InvalidName(format!("{} name is empty", kind)));
    }

    if name == "." || name == ".." || name.contains(['/', '\\', '\0']) {
        return Err(FolioError::InvalidName(format!(
            "{} name {:?} must be a single path component",
            kind, name
        )));
    }

    Ok(())
}
