//! Rank ↔ box/row/column mapping for the fixed 6×5 storage box.

use crate::domain::model::Position;
use crate::utils::error::{LivingDexError, Result};

pub const BOX_COLUMNS: usize = 6;
pub const BOX_ROWS: usize = 5;
pub const BOX_CAPACITY: usize = BOX_COLUMNS * BOX_ROWS;
/// Highest box whose last slot still has a representable rank.
pub const MAX_BOX: usize = usize::MAX / BOX_CAPACITY;
/// Rank of the last slot of [`MAX_BOX`].
pub const MAX_RANK: usize = MAX_BOX * BOX_CAPACITY;

impl Position {
    /// Checked constructor for coordinates coming from outside the grid widget.
    pub fn new(box_number: usize, row: usize, column: usize) -> Result<Self> {
        if !(1..=MAX_BOX).contains(&box_number)
            || !(1..=BOX_ROWS).contains(&row)
            || !(1..=BOX_COLUMNS).contains(&column)
        {
            return Err(LivingDexError::InvalidPosition {
                box_number,
                row,
                column,
            });
        }
        Ok(Self {
            box_number,
            row,
            column,
        })
    }

    pub fn rank(&self) -> usize {
        position_to_rank(self.box_number, self.row, self.column)
    }
}

/// `rank` must be in `1..=MAX_RANK`.
pub fn rank_to_position(rank: usize) -> Position {
    debug_assert!((1..=MAX_RANK).contains(&rank), "rank is 1-indexed and bounded");

    let zero_rank = rank - 1;
    let zero_box = zero_rank / BOX_CAPACITY;
    let in_box = zero_rank % BOX_CAPACITY;

    Position {
        box_number: zero_box + 1,
        row: in_box / BOX_COLUMNS + 1,
        column: in_box % BOX_COLUMNS + 1,
    }
}

/// Inverse of [`rank_to_position`]. Coordinates must be inside the grid.
pub fn position_to_rank(box_number: usize, row: usize, column: usize) -> usize {
    debug_assert!((1..=MAX_BOX).contains(&box_number));
    debug_assert!((1..=BOX_ROWS).contains(&row));
    debug_assert!((1..=BOX_COLUMNS).contains(&column));

    (box_number - 1) * BOX_CAPACITY + (row - 1) * BOX_COLUMNS + (column - 1) + 1
}

/// Number of boxes needed to hold `len` entries.
pub fn box_count(len: usize) -> usize {
    len.div_ceil(BOX_CAPACITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(box_number: usize, row: usize, column: usize) -> Position {
        Position {
            box_number,
            row,
            column,
        }
    }

    #[test]
    fn test_grid_constants() {
        assert_eq!(BOX_CAPACITY, 30);
        assert_eq!(BOX_COLUMNS, 6);
        assert_eq!(BOX_ROWS, 5);
    }

    #[test]
    fn test_box_boundaries() {
        assert_eq!(rank_to_position(1), pos(1, 1, 1));
        assert_eq!(rank_to_position(6), pos(1, 1, 6));
        assert_eq!(rank_to_position(7), pos(1, 2, 1));
        assert_eq!(rank_to_position(30), pos(1, 5, 6));
        assert_eq!(rank_to_position(31), pos(2, 1, 1));
        assert_eq!(rank_to_position(60), pos(2, 5, 6));
    }

    #[test]
    fn test_position_to_rank() {
        assert_eq!(position_to_rank(1, 1, 1), 1);
        assert_eq!(position_to_rank(1, 5, 6), 30);
        assert_eq!(position_to_rank(2, 1, 1), 31);
        assert_eq!(position_to_rank(35, 2, 3), 34 * 30 + 6 + 2 + 1);
    }

    #[test]
    fn test_checked_position() {
        assert_eq!(Position::new(3, 5, 6).unwrap().rank(), 90);
        assert!(Position::new(0, 1, 1).is_err());
        assert!(Position::new(1, 6, 1).is_err());
        assert!(Position::new(1, 1, 7).is_err());
        assert!(Position::new(1, 0, 1).is_err());
    }

    #[test]
    fn test_huge_box_is_rejected() {
        assert!(matches!(
            Position::new(usize::MAX, 1, 1),
            Err(LivingDexError::InvalidPosition { .. })
        ));
        assert!(Position::new(MAX_BOX + 1, 1, 1).is_err());

        let last = Position::new(MAX_BOX, BOX_ROWS, BOX_COLUMNS).unwrap();
        assert_eq!(last.rank(), MAX_RANK);
        assert_eq!(rank_to_position(MAX_RANK), last);
    }

    #[test]
    fn test_box_count() {
        assert_eq!(box_count(0), 0);
        assert_eq!(box_count(1), 1);
        assert_eq!(box_count(30), 1);
        assert_eq!(box_count(31), 2);
        assert_eq!(box_count(151), 6);
    }
}
