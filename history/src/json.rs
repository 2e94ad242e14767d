use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use minefield_core::{GameId, GameRecord};

use crate::{HistoryStore, MemoryHistory, Result};

/// History persisted as a single JSON file, the whole record list rewritten
/// after every mutation. Read operations never touch the disk.
#[derive(Debug)]
pub struct JsonHistory {
    path: PathBuf,
    inner: MemoryHistory,
}

impl JsonHistory {
    /// Opens the history at `path`, loading any records already stored there.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let inner = if path.exists() {
            let file = File::open(&path)?;
            let records: Vec<GameRecord> = serde_json::from_reader(BufReader::new(file))?;
            log::debug!(
                "loaded {} game records from {}",
                records.len(),
                path.display()
            );
            MemoryHistory::from_records(records)
        } else {
            MemoryHistory::new()
        };
        Ok(Self { path, inner })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self.inner.records())?;
        writer.flush()?;
        log::trace!(
            "saved {} game records to {}",
            self.inner.len(),
            self.path.display()
        );
        Ok(())
    }
}

impl HistoryStore for JsonHistory {
    fn insert(&mut self, record: GameRecord) -> Result<GameId> {
        let id = self.inner.insert(record)?;
        self.persist()?;
        Ok(id)
    }

    fn update(&mut self, record: &GameRecord) -> Result<()> {
        self.inner.update(record)?;
        self.persist()
    }

    fn get(&self, id: GameId) -> Result<Option<GameRecord>> {
        self.inner.get(id)
    }

    fn latest(&self) -> Result<Option<GameRecord>> {
        self.inner.latest()
    }

    fn by_elapsed(&self) -> Result<Vec<GameRecord>> {
        self.inner.by_elapsed()
    }

    fn by_recency(&self) -> Result<Vec<GameRecord>> {
        self.inner.by_recency()
    }

    fn delete(&mut self, id: GameId) -> Result<()> {
        self.inner.delete(id)?;
        self.persist()
    }

    fn delete_many(&mut self, ids: &[GameId]) -> Result<()> {
        self.inner.delete_many(ids)?;
        self.persist()
    }

    fn clear(&mut self) -> Result<()> {
        self.inner.clear()?;
        self.persist()
    }
}
