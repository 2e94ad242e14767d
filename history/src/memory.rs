use minefield_core::{GameId, GameRecord};

use crate::{HistoryStore, Result};

/// Vec-backed store, also the in-memory half of [`crate::JsonHistory`].
/// Assigned ids start at 1 so that 0 keeps meaning "not stored yet".
#[derive(Clone, Debug)]
pub struct MemoryHistory {
    records: Vec<GameRecord>,
    next_id: GameId,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuilds a store around already-assigned records, continuing the id
    /// sequence after the highest one present.
    pub fn from_records(records: Vec<GameRecord>) -> Self {
        let next_id = records.iter().map(|record| record.id).max().unwrap_or(0) + 1;
        Self { records, next_id }
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore for MemoryHistory {
    fn insert(&mut self, mut record: GameRecord) -> Result<GameId> {
        let id = self.next_id;
        self.next_id += 1;
        record.id = id;
        self.records.push(record);
        Ok(id)
    }

    fn update(&mut self, record: &GameRecord) -> Result<()> {
        if let Some(slot) = self.records.iter_mut().find(|slot| slot.id == record.id) {
            *slot = record.clone();
        }
        Ok(())
    }

    fn get(&self, id: GameId) -> Result<Option<GameRecord>> {
        Ok(self.records.iter().find(|record| record.id == id).cloned())
    }

    fn latest(&self) -> Result<Option<GameRecord>> {
        Ok(self
            .records
            .iter()
            .max_by_key(|record| record.id)
            .cloned())
    }

    fn by_elapsed(&self) -> Result<Vec<GameRecord>> {
        let mut ranked = self.records.clone();
        ranked.sort_by_key(|record| record.elapsed);
        Ok(ranked)
    }

    fn by_recency(&self) -> Result<Vec<GameRecord>> {
        let mut ranked = self.records.clone();
        ranked.sort_by_key(|record| std::cmp::Reverse(record.id));
        Ok(ranked)
    }

    fn delete(&mut self, id: GameId) -> Result<()> {
        self.records.retain(|record| record.id != id);
        Ok(())
    }

    fn delete_many(&mut self, ids: &[GameId]) -> Result<()> {
        self.records.retain(|record| !ids.contains(&record.id));
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.records.clear();
        Ok(())
    }
}
