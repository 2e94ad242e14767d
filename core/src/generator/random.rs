use super::*;

/// Generation strategy that lays out exactly the requested number of mines by
/// shuffling a flag sequence, making every permutation equally likely. The
/// seed makes a layout reproducible; callers supply their own entropy.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShuffledBoardGenerator {
    seed: u64,
}

impl ShuffledBoardGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for ShuffledBoardGenerator {
    fn generate(self, config: BoardConfig) -> Board {
        use rand::prelude::*;

        let total = config.total_sectors() as usize;
        let mut mines = config.mines as usize;
        if mines > total {
            log::warn!(
                "board only fits {} mines, requested {}, generating full",
                total,
                config.mines
            );
            mines = total;
        }

        let mut flags = vec![true; mines];
        flags.resize(total, false);

        let mut rng = SmallRng::seed_from_u64(self.seed);
        flags.shuffle(&mut rng);

        Board::from_flags(config.columns, config.rows, &flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exactly_the_requested_mines() {
        for &(columns, rows, mines) in &[(8u16, 8u16, 10u32), (9, 9, 0), (4, 4, 16), (1, 1, 1)] {
            let config = BoardConfig::new(columns, rows, mines);
            let board = ShuffledBoardGenerator::new(7).generate(config);

            let placed = board
                .sectors()
                .iter()
                .filter(|sector| sector.has_mine())
                .count();
            assert_eq!(placed as CellCount, mines);
            assert_eq!(board.mine_count(), mines);
        }
    }

    #[test]
    fn fresh_board_starts_unresolved() {
        let board = ShuffledBoardGenerator::new(3).generate(BoardConfig::classic());

        assert_eq!(board.resolved_count(), 0);
        assert!(board.sectors().iter().all(|sector| !sector.is_resolved()));
    }

    #[test]
    fn same_seed_reproduces_the_layout() {
        let config = BoardConfig::intermediate();

        let a = ShuffledBoardGenerator::new(42).generate(config);
        let b = ShuffledBoardGenerator::new(42).generate(config);

        assert_eq!(a.encode_layout(), b.encode_layout());
    }

    #[test]
    fn different_seeds_move_the_mines() {
        let config = BoardConfig::intermediate();

        let a = ShuffledBoardGenerator::new(1).generate(config);
        let b = ShuffledBoardGenerator::new(2).generate(config);

        assert_ne!(a.encode_layout(), b.encode_layout());
    }

    #[test]
    fn overfull_request_saturates() {
        let config = BoardConfig::new_unchecked(2, 2, 9);

        let board = ShuffledBoardGenerator::new(0).generate(config);

        assert_eq!(board.mine_count(), 4);
    }
}
