use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use generator::*;
pub use record::*;
pub use sector::*;
pub use types::*;

mod board;
mod error;
mod generator;
mod record;
mod sector;
mod types;

/// Board geometry plus mine count, as chosen on the size-selection screen.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub columns: Coord,
    pub rows: Coord,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(columns: Coord, rows: Coord, mines: CellCount) -> Self {
        Self {
            columns,
            rows,
            mines,
        }
    }

    /// Clamps user-entered values into range: at least one column and row,
    /// and no more mines than sectors. A zero-mine board is legal.
    pub fn new(columns: Coord, rows: Coord, mines: CellCount) -> Self {
        let columns = columns.clamp(1, Coord::MAX);
        let rows = rows.clamp(1, Coord::MAX);
        let mines = mines.min(mult(columns, rows));
        Self::new_unchecked(columns, rows, mines)
    }

    pub const fn total_sectors(&self) -> CellCount {
        mult(self.columns, self.rows)
    }

    /// The original app's default 8x8 board.
    pub const fn classic() -> Self {
        Self::new_unchecked(8, 8, 10)
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked(9, 9, 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked(16, 16, 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked(30, 16, 99)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_degenerate_geometry() {
        let config = BoardConfig::new(0, 0, 5);

        assert_eq!(config.columns, 1);
        assert_eq!(config.rows, 1);
        assert_eq!(config.mines, 1);
    }

    #[test]
    fn new_caps_mines_at_the_sector_count() {
        let config = BoardConfig::new(4, 4, 100);

        assert_eq!(config.mines, 16);
    }

    #[test]
    fn new_allows_zero_mines() {
        let config = BoardConfig::new(4, 4, 0);

        assert_eq!(config.mines, 0);
    }

    #[test]
    fn presets_fit_their_grids() {
        for config in [
            BoardConfig::classic(),
            BoardConfig::beginner(),
            BoardConfig::intermediate(),
            BoardConfig::expert(),
        ] {
            assert!(config.mines <= config.total_sectors());
        }
    }
}
