use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Layout-string sentinel for a mined sector.
pub const MINE_CHAR: char = '*';
/// Layout-string sentinel for a clear sector.
pub const CLEAR_CHAR: char = ' ';

/// Outcome of marking a sector as safe.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SafeOutcome {
    /// The sector was already resolved.
    NoChange,
    /// The sector (and possibly a flood-revealed region around it) resolved
    /// as safe. `adjacent_mines` is the display value for the sector itself.
    Cleared {
        adjacent_mines: u8,
        newly_resolved: CellCount,
    },
    /// The sector holds a mine; it stays unresolved and can still be marked
    /// as mined afterwards.
    HitMine,
}

impl SafeOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use SafeOutcome::*;
        match self {
            NoChange => false,
            Cleared { .. } => true,
            HitMine => true,
        }
    }
}

/// Outcome of marking a sector as mined.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MineOutcome {
    /// The sector was already resolved.
    NoChange,
    /// The sector holds a mine and is now resolved.
    Marked,
    /// The assertion was wrong; nothing changed on the board.
    NotAMine,
}

impl MineOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use MineOutcome::*;
        match self {
            NoChange => false,
            Marked => true,
            NotAMine => true,
        }
    }
}

/// The full grid, row-major, with its run-time resolve counters. Mutated only
/// through the two resolve operations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    columns: Coord,
    rows: Coord,
    mines: CellCount,
    sectors: Vec<Sector>,
    safe_resolved: CellCount,
    mine_resolved: CellCount,
}

impl Board {
    /// Builds the grid from a row-major mine-flag sequence, computing each
    /// sector's neighbor set once.
    pub(crate) fn from_flags(columns: Coord, rows: Coord, flags: &[bool]) -> Board {
        debug_assert_eq!(flags.len(), mult(columns, rows) as usize);

        let mut sectors = Vec::with_capacity(flags.len());
        let mut index: CellCount = 0;
        for row in 0..rows {
            for column in 0..columns {
                let neighbors = neighbor_indices(row, column, columns, rows);
                sectors.push(Sector::new(
                    row,
                    column,
                    index,
                    flags[index as usize],
                    neighbors,
                ));
                index += 1;
            }
        }

        let mines = flags
            .iter()
            .filter(|&&has_mine| has_mine)
            .count()
            .try_into()
            .unwrap();
        Board {
            columns,
            rows,
            mines,
            sectors,
            safe_resolved: 0,
            mine_resolved: 0,
        }
    }

    /// Rebuilds a previously played board from its encoded mine layout, for
    /// replay. Any non-blank character marks a mine. All sectors start
    /// unresolved and the counters reset to zero.
    pub fn restore(columns: Coord, rows: Coord, mines: CellCount, layout: &str) -> Result<Board> {
        let total = mult(columns, rows) as usize;
        if layout.chars().count() != total {
            return Err(GameError::LayoutMismatch);
        }

        let flags: Vec<bool> = layout.chars().map(|ch| ch != CLEAR_CHAR).collect();
        let board = Board::from_flags(columns, rows, &flags);
        if board.mines != mines {
            return Err(GameError::LayoutMismatch);
        }
        Ok(board)
    }

    pub fn columns(&self) -> Coord {
        self.columns
    }

    pub fn rows(&self) -> Coord {
        self.rows
    }

    pub fn total_sectors(&self) -> CellCount {
        self.sectors.len().try_into().unwrap()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines
    }

    /// Sectors the player has resolved as safe, including flood-revealed ones.
    pub fn safe_resolved(&self) -> CellCount {
        self.safe_resolved
    }

    /// Sectors the player has correctly resolved as mined.
    pub fn mine_resolved(&self) -> CellCount {
        self.mine_resolved
    }

    pub fn resolved_count(&self) -> CellCount {
        self.safe_resolved + self.mine_resolved
    }

    /// True once every sector has been resolved one way or the other. The
    /// caller decides what completion means (record the game, navigate away);
    /// the board only reports it.
    pub fn is_complete(&self) -> bool {
        self.resolved_count() == self.total_sectors()
    }

    pub fn sector(&self, index: CellCount) -> Result<&Sector> {
        let index = self.validate_index(index)?;
        Ok(&self.sectors[index as usize])
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    /// How many of the sector's neighbors hold mines, 0-8.
    pub fn adjacent_mine_count(&self, index: CellCount) -> Result<u8> {
        let index = self.validate_index(index)?;
        Ok(self.count_adjacent_mines(index))
    }

    /// Marks a sector as safe. A clear sector resolves and, when its
    /// mine-adjacency count is zero, flood-resolves every transitively
    /// reachable zero-region neighbor. A mined sector yields [`SafeOutcome::HitMine`]
    /// and stays unresolved.
    pub fn resolve_safe(&mut self, index: CellCount) -> Result<SafeOutcome> {
        use std::collections::{HashSet, VecDeque};

        let index = self.validate_index(index)?;
        if self.sectors[index as usize].is_resolved() {
            return Ok(SafeOutcome::NoChange);
        }
        if self.sectors[index as usize].has_mine() {
            log::debug!("sector {} marked safe but holds a mine", index);
            return Ok(SafeOutcome::HitMine);
        }

        let adjacent_mines = self.count_adjacent_mines(index);
        self.sectors[index as usize].mark_resolved();
        self.safe_resolved += 1;
        let mut newly_resolved: CellCount = 1;
        log::debug!(
            "resolved sector {} as safe, adjacent mines: {}",
            index,
            adjacent_mines
        );

        if adjacent_mines == 0 {
            let mut visited = HashSet::from([index]);
            let mut to_visit: VecDeque<CellCount> = self.sectors[index as usize]
                .neighbors()
                .iter()
                .copied()
                .filter(|&pos| !self.sectors[pos as usize].is_resolved())
                .collect();

            while let Some(visit) = to_visit.pop_front() {
                if !visited.insert(visit) {
                    continue;
                }
                if self.sectors[visit as usize].is_resolved() {
                    continue;
                }

                // a zero-count sector has no mined neighbors, so nothing
                // enqueued here can hold a mine
                let visit_count = self.count_adjacent_mines(visit);
                self.sectors[visit as usize].mark_resolved();
                self.safe_resolved += 1;
                newly_resolved += 1;
                log::trace!(
                    "flood resolved sector {}, adjacent mines: {}",
                    visit,
                    visit_count
                );

                if visit_count == 0 {
                    let next: SmallVec<[CellCount; 8]> = self.sectors[visit as usize]
                        .neighbors()
                        .iter()
                        .copied()
                        .filter(|&pos| !self.sectors[pos as usize].is_resolved())
                        .filter(|pos| !visited.contains(pos))
                        .collect();
                    to_visit.extend(next);
                }
            }
        }

        Ok(SafeOutcome::Cleared {
            adjacent_mines,
            newly_resolved,
        })
    }

    /// Marks a sector as mined. Only a correct assertion changes board state.
    pub fn resolve_mined(&mut self, index: CellCount) -> Result<MineOutcome> {
        let index = self.validate_index(index)?;
        if self.sectors[index as usize].is_resolved() {
            return Ok(MineOutcome::NoChange);
        }
        if !self.sectors[index as usize].has_mine() {
            return Ok(MineOutcome::NotAMine);
        }

        self.sectors[index as usize].mark_resolved();
        self.mine_resolved += 1;
        log::debug!("resolved sector {} as mined", index);
        Ok(MineOutcome::Marked)
    }

    /// Row-major layout string, [`MINE_CHAR`] for mined sectors and
    /// [`CLEAR_CHAR`] for clear ones. Exactly reversible by [`Board::restore`].
    pub fn encode_layout(&self) -> String {
        self.sectors
            .iter()
            .map(|sector| {
                if sector.has_mine() {
                    MINE_CHAR
                } else {
                    CLEAR_CHAR
                }
            })
            .collect()
    }

    fn validate_index(&self, index: CellCount) -> Result<CellCount> {
        if (index as usize) < self.sectors.len() {
            Ok(index)
        } else {
            Err(GameError::InvalidIndex)
        }
    }

    fn count_adjacent_mines(&self, index: CellCount) -> u8 {
        self.sectors[index as usize]
            .neighbors()
            .iter()
            .filter(|&&pos| self.sectors[pos as usize].has_mine())
            .count()
            .try_into()
            .unwrap()
    }
}

/// Neighbor set for `(row, column)`: west/east, then the three sectors of the
/// row above, then the three below, each guarded by the grid edges. Corners
/// get 3 entries, edges 5, interior sectors 8.
fn neighbor_indices(row: Coord, column: Coord, columns: Coord, rows: Coord) -> SmallVec<[CellCount; 8]> {
    let cols = columns as CellCount;
    let index = row as CellCount * cols + column as CellCount;
    let west = column > 0;
    let east = column + 1 < columns;

    let mut neighbors = SmallVec::new();
    if west {
        neighbors.push(index - 1);
    }
    if east {
        neighbors.push(index + 1);
    }
    if row > 0 {
        let north = index - cols;
        neighbors.push(north);
        if west {
            neighbors.push(north - 1);
        }
        if east {
            neighbors.push(north + 1);
        }
    }
    if row + 1 < rows {
        let south = index + cols;
        neighbors.push(south);
        if west {
            neighbors.push(south - 1);
        }
        if east {
            neighbors.push(south + 1);
        }
    }
    neighbors
}
