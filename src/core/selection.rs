use crate::core::layout::BoxView;
use crate::core::position::{rank_to_position, MAX_BOX, MAX_RANK};
use crate::core::resolver::resolve_by_name;
use crate::domain::model::{Catalog, Dataset, Position};
use crate::utils::error::{LivingDexError, Result};

/// What the user is looking at. Transitions return a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_dataset: Option<String>,
    pub highlighted_rank: Option<usize>,
    /// 0-based index of the box on screen.
    pub visible_box: usize,
}

impl SelectionState {
    pub fn select_dataset(&self, dataset_id: &str) -> Self {
        Self {
            selected_dataset: Some(dataset_id.to_lowercase()),
            highlighted_rank: None,
            visible_box: 0,
        }
    }

    /// Absent or non-positive ranks clear the highlight and leave the page alone.
    pub fn highlight(&self, rank: Option<i64>) -> Self {
        self.highlight_rank(rank.and_then(|r| usize::try_from(r).ok()))
    }

    /// Same as [`highlight`](Self::highlight) for ranks already held as `usize`.
    /// Zero and ranks past [`MAX_RANK`] clear the highlight.
    pub fn highlight_rank(&self, rank: Option<usize>) -> Self {
        match rank.filter(|r| (1..=MAX_RANK).contains(r)) {
            Some(rank) => Self {
                selected_dataset: self.selected_dataset.clone(),
                highlighted_rank: Some(rank),
                visible_box: rank_to_position(rank).box_number - 1,
            },
            None => Self {
                selected_dataset: self.selected_dataset.clone(),
                highlighted_rank: None,
                visible_box: self.visible_box,
            },
        }
    }

    pub fn previous_box(&self) -> Self {
        Self {
            visible_box: self.visible_box.saturating_sub(1),
            ..self.clone()
        }
    }

    pub fn next_box(&self) -> Self {
        Self {
            visible_box: self.visible_box.saturating_add(1).min(MAX_BOX - 1),
            ..self.clone()
        }
    }
}

/// A request coming from one of the input widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Raw text of the number field.
    Number(String),
    Name(String),
    Coordinates {
        box_number: usize,
        row: usize,
        column: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Cleared,
    Located {
        rank: usize,
        position: Position,
        name: String,
    },
    /// The slot exists in the grid but the dataset ends before it.
    Vacant {
        rank: usize,
        position: Position,
        len: usize,
    },
}

/// Owns the loaded datasets and the current selection; all input goes through `submit`.
#[derive(Debug, Clone)]
pub struct LookupController {
    catalog: Catalog,
    state: SelectionState,
}

impl LookupController {
    /// Starts on the first dataset of the catalog, if there is one.
    pub fn new(catalog: Catalog) -> Self {
        let state = match catalog.datasets().first() {
            Some(first) => SelectionState::default().select_dataset(first.dataset_id()),
            None => SelectionState::default(),
        };
        Self { catalog, state }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn selected_dataset(&self) -> Result<&Dataset> {
        let id = self
            .state
            .selected_dataset
            .as_deref()
            .ok_or(LivingDexError::NoDatasetSelected)?;
        self.catalog.find(id)
    }

    pub fn select(&mut self, dataset_id: &str) -> Result<&Dataset> {
        let id = self.catalog.find(dataset_id)?.dataset_id().to_string();
        tracing::debug!("Selected dataset '{}'", id);
        self.state = self.state.select_dataset(&id);
        self.selected_dataset()
    }

    pub fn submit(&mut self, query: Query) -> Result<Outcome> {
        let rank = match query {
            Query::Number(text) => {
                let number = text.trim().parse::<i64>().unwrap_or(0);
                usize::try_from(number).ok()
            }
            Query::Name(text) if text.trim().is_empty() => None,
            Query::Name(text) => {
                let found = resolve_by_name(self.selected_dataset()?, &text)?;
                tracing::info!(
                    "'{}' matched '{}' (#{}, score {:.1})",
                    text,
                    found.name,
                    found.rank,
                    found.score
                );
                Some(found.rank)
            }
            Query::Coordinates {
                box_number,
                row,
                column,
            } => Some(Position::new(box_number, row, column)?.rank()),
        };
        self.apply_rank(rank)
    }

    pub fn previous_box(&mut self) -> usize {
        self.state = self.state.previous_box();
        self.state.visible_box
    }

    pub fn next_box(&mut self) -> usize {
        self.state = self.state.next_box();
        self.state.visible_box
    }

    pub fn box_view(&self) -> Result<BoxView<'_>> {
        Ok(BoxView::build(self.selected_dataset()?, &self.state))
    }

    fn apply_rank(&mut self, rank: Option<usize>) -> Result<Outcome> {
        let next = self.state.highlight_rank(rank);
        let dataset = self.selected_dataset()?;

        let outcome = match next.highlighted_rank {
            None => Outcome::Cleared,
            Some(rank) => {
                let position = rank_to_position(rank);
                match dataset.resolve_by_rank(rank) {
                    Ok(name) => Outcome::Located {
                        rank,
                        position,
                        name: name.to_string(),
                    },
                    Err(LivingDexError::OutOfRange { len, .. }) => Outcome::Vacant {
                        rank,
                        position,
                        len,
                    },
                    Err(e) => return Err(e),
                }
            }
        };

        self.state = next;
        Ok(outcome)
    }
}
