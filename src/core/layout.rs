use crate::core::position::{position_to_rank, BOX_COLUMNS, BOX_ROWS};
use crate::core::selection::SelectionState;
use crate::domain::model::{Dataset, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell<'a> {
    pub rank: usize,
    pub position: Position,
    /// `None` past the end of the dataset.
    pub entry: Option<&'a str>,
    pub highlighted: bool,
}

/// One box of the grid, rows top to bottom, columns left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxView<'a> {
    pub box_number: usize,
    pub rows: Vec<Vec<Cell<'a>>>,
}

impl<'a> BoxView<'a> {
    pub fn build(dataset: &'a Dataset, state: &SelectionState) -> Self {
        Self::for_box(dataset, state.visible_box + 1, state.highlighted_rank)
    }

    pub fn for_box(dataset: &'a Dataset, box_number: usize, highlighted: Option<usize>) -> Self {
        let rows = (1..=BOX_ROWS)
            .map(|row| {
                (1..=BOX_COLUMNS)
                    .map(|column| {
                        let rank = position_to_rank(box_number, row, column);
                        Cell {
                            rank,
                            position: Position {
                                box_number,
                                row,
                                column,
                            },
                            entry: dataset.resolve_by_rank(rank).ok(),
                            highlighted: highlighted == Some(rank),
                        }
                    })
                    .collect()
            })
            .collect();

        Self { box_number, rows }
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell<'a>> {
        self.rows.iter().flatten()
    }

    pub fn occupied(&self) -> usize {
        self.cells().filter(|c| c.entry.is_some()).count()
    }
}
