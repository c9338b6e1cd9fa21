use crate::utils::error::{LivingDexError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A pokedex as it is persisted on disk: one JSON object per file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub game: String,
    pub region: String,
    pub pokemon: Vec<String>,
}

impl DatasetRecord {
    pub fn new(game: impl Into<String>, region: impl Into<String>, pokemon: Vec<String>) -> Self {
        Self {
            game: game.into(),
            region: region.into(),
            pokemon,
        }
    }

    /// File stem used when the record is stored: `&` becomes `and`, `:` is dropped.
    pub fn file_stem(&self) -> String {
        sanitize_game_name(&self.game)
    }
}

pub fn sanitize_game_name(game: &str) -> String {
    game.replace('&', "and").replace(':', "")
}

/// An ordered list of entry names for one game. The i-th entry has rank i+1.
///
/// Identifiers and entries are lowercased on construction and never change
/// afterwards, so a `Dataset` can be shared freely between readers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    dataset_id: String,
    group_id: String,
    entries: Vec<String>,
}

impl Dataset {
    pub fn new<I, S>(dataset_id: &str, group_id: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            dataset_id: dataset_id.to_lowercase(),
            group_id: group_id.to_lowercase(),
            entries: entries
                .into_iter()
                .map(|e| e.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Parses a persisted record. `source_name` only shows up in error messages.
    pub fn from_json_str(content: &str, source_name: &str) -> Result<Self> {
        let record: DatasetRecord =
            serde_json::from_str(content).map_err(|e| LivingDexError::DataFormat {
                source_name: source_name.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self::from(record))
    }

    pub fn dataset_id(&self) -> &str {
        &self.dataset_id
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry name at a 1-indexed rank.
    pub fn resolve_by_rank(&self, rank: usize) -> Result<&str> {
        rank.checked_sub(1)
            .and_then(|index| self.entries.get(index))
            .map(String::as_str)
            .ok_or(LivingDexError::OutOfRange {
                rank,
                len: self.entries.len(),
            })
    }
}

impl From<DatasetRecord> for Dataset {
    fn from(record: DatasetRecord) -> Self {
        Self::new(&record.game, &record.region, record.pokemon)
    }
}

/// Slot of an entry inside the box grid. All three components are 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub box_number: usize,
    pub row: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Box {}, Row {}, Column {}",
            self.box_number, self.row, self.column
        )
    }
}

/// Best fuzzy match for a free-text query.
#[derive(Debug, Clone, PartialEq)]
pub struct NameMatch {
    pub name: String,
    pub rank: usize,
    /// Similarity in `0.0..=100.0`, higher is closer.
    pub score: f64,
}

/// All datasets known to the store, in a stable order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    datasets: Vec<Dataset>,
}

impl Catalog {
    pub fn new(datasets: Vec<Dataset>) -> Self {
        Self { datasets }
    }

    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    pub fn find(&self, dataset_id: &str) -> Result<&Dataset> {
        let wanted = dataset_id.trim().to_lowercase();
        self.datasets
            .iter()
            .find(|d| d.dataset_id() == wanted)
            .ok_or(LivingDexError::DatasetNotFound { id: wanted })
    }
}
