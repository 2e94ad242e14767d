/// Single grid axis, used for column/row counts and positions.
pub type Coord = u16;

/// Count type used for mine counts, sector totals, and linear sector indices.
pub type CellCount = u32;

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}
