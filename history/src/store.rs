use minefield_core::{GameId, GameRecord};

use crate::Result;

/// Access surface of the game-history store. Inserting is the "submit record"
/// operation the application fires after a game ends; the remaining methods
/// back the score and history-editing screens.
pub trait HistoryStore {
    /// Stores a completed game, returning the id the store assigned to it.
    fn insert(&mut self, record: GameRecord) -> Result<GameId>;

    /// Rewrites the stored record with the same id. Unknown ids change
    /// nothing.
    fn update(&mut self, record: &GameRecord) -> Result<()>;

    fn get(&self, id: GameId) -> Result<Option<GameRecord>>;

    /// The most recently inserted record.
    fn latest(&self) -> Result<Option<GameRecord>>;

    /// Every record, fastest game first.
    fn by_elapsed(&self) -> Result<Vec<GameRecord>>;

    /// Every record, newest first.
    fn by_recency(&self) -> Result<Vec<GameRecord>>;

    fn delete(&mut self, id: GameId) -> Result<()>;

    fn delete_many(&mut self, ids: &[GameId]) -> Result<()>;

    fn clear(&mut self) -> Result<()>;

    /// Trims the history down to the `keep` fastest games.
    fn trim_to_best(&mut self, keep: usize) -> Result<()> {
        let ranked = self.by_elapsed()?;
        if keep >= ranked.len() {
            return Ok(());
        }
        let doomed: Vec<GameId> = ranked[keep..].iter().map(|record| record.id).collect();
        self.delete_many(&doomed)
    }
}
