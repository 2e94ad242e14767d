use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::{Board, CellCount, Coord, Result};

/// Identifier assigned by a history store; 0 means "not stored yet".
pub type GameId = i64;

/// Persisted summary of one finished game, including the encoded mine layout
/// needed to replay it. Opaque to the board once captured; stores own
/// ordering and retention.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    pub columns: Coord,
    pub rows: Coord,
    pub mines: CellCount,
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
    pub layout: String,
}

impl GameRecord {
    /// Snapshots a finished (or abandoned) board together with its timing.
    pub fn capture(board: &Board, started_at: DateTime<Utc>, now: DateTime<Utc>) -> GameRecord {
        let elapsed = (now - started_at).to_std().unwrap_or(Duration::ZERO);
        GameRecord {
            id: 0,
            columns: board.columns(),
            rows: board.rows(),
            mines: board.mine_count(),
            started_at,
            elapsed,
            layout: board.encode_layout(),
        }
    }
}

impl Board {
    /// Rebuilds the board a record was captured from, ready for replay.
    pub fn replay(record: &GameRecord) -> Result<Board> {
        Board::restore(record.columns, record.rows, record.mines, &record.layout)
    }
}
