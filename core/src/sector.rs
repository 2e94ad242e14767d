use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::types::{CellCount, Coord};

/// One grid position and everything the board knows about it. The mine flag
/// and the neighbor set are fixed at construction; `resolved` flips to `true`
/// at most once during play.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    row: Coord,
    column: Coord,
    index: CellCount,
    has_mine: bool,
    resolved: bool,
    neighbors: SmallVec<[CellCount; 8]>,
}

impl Sector {
    pub(crate) fn new(
        row: Coord,
        column: Coord,
        index: CellCount,
        has_mine: bool,
        neighbors: SmallVec<[CellCount; 8]>,
    ) -> Self {
        Self {
            row,
            column,
            index,
            has_mine,
            resolved: false,
            neighbors,
        }
    }

    pub fn row(&self) -> Coord {
        self.row
    }

    pub fn column(&self) -> Coord {
        self.column
    }

    /// Linear index, `row * columns + column`. This is the addressing contract
    /// shared with whatever displays the board.
    pub fn index(&self) -> CellCount {
        self.index
    }

    pub fn has_mine(&self) -> bool {
        self.has_mine
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Linear indices of the adjacent sectors, up to 8, fewer at edges.
    pub fn neighbors(&self) -> &[CellCount] {
        &self.neighbors
    }

    pub(crate) fn mark_resolved(&mut self) {
        self.resolved = true;
    }
}
