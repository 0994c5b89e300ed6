use crate::core::sequence::Sequence;
use crate::engine::error::EngineError;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Storage for raw prediction payloads, addressed by sequence.
///
/// Entries are written once and never mutated. Implementations must not expose a
/// partially written entry through [`StructureStore::load`].
pub trait StructureStore {
    /// Returns the stored payload for `sequence`, or `None` on a miss.
    fn load(&self, sequence: &Sequence) -> Result<Option<Vec<u8>>, EngineError>;

    /// Stores `payload` verbatim as the entry for `sequence`.
    fn save(&mut self, sequence: &Sequence, payload: &[u8]) -> Result<(), EngineError>;
}

/// A directory of `<sha256>.pdb` files, one per distinct sequence.
#[derive(Debug, Clone)]
pub struct DiskStore {
    root: PathBuf,
}

impl DiskStore {
    /// Opens the store at `root`, creating the directory if it does not exist.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, EngineError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| EngineError::Cache {
            path: root.clone(),
            source,
        })?;
        debug!("Structure cache opened at {:?}", &root);
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The file that holds (or would hold) the entry for `sequence`.
    pub fn entry_path(&self, sequence: &Sequence) -> PathBuf {
        self.root.join(format!("{}.pdb", sequence.digest()))
    }

    fn staging_path(&self, sequence: &Sequence) -> PathBuf {
        self.root.join(format!("{}.pdb.part", sequence.digest()))
    }
}

impl StructureStore for DiskStore {
    fn load(&self, sequence: &Sequence) -> Result<Option<Vec<u8>>, EngineError> {
        let path = self.entry_path(sequence);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(EngineError::Cache { path, source }),
        }
    }

    fn save(&mut self, sequence: &Sequence, payload: &[u8]) -> Result<(), EngineError> {
        let staging = self.staging_path(sequence);
        let path = self.entry_path(sequence);

        fs::write(&staging, payload).map_err(|source| EngineError::Cache {
            path: staging.clone(),
            source,
        })?;
        if let Err(source) = fs::rename(&staging, &path) {
            let _ = fs::remove_file(&staging);
            return Err(EngineError::Cache { path, source });
        }

        debug!("Cached {} bytes for sequence at {:?}", payload.len(), &path);
        Ok(())
    }
}

/// A store that lives for one process; used where the disk must not be touched.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    data: HashMap<Sequence, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl StructureStore for MemoryStore {
    fn load(&self, sequence: &Sequence) -> Result<Option<Vec<u8>>, EngineError> {
        Ok(self.data.get(sequence).cloned())
    }

    fn save(&mut self, sequence: &Sequence, payload: &[u8]) -> Result<(), EngineError> {
        self.data.insert(sequence.clone(), payload.to_vec());
        Ok(())
    }
}
