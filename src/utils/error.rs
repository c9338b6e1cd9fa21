use thiserror::Error;

#[derive(Error, Debug)]
pub enum LivingDexError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Malformed dataset record in {source_name}: {message}")]
    DataFormat { source_name: String, message: String },

    #[error("Rank {rank} is out of range for a dataset of {len} entries")]
    OutOfRange { rank: usize, len: usize },

    #[error("Dataset '{dataset}' has no entries to search")]
    NoEntries { dataset: String },

    #[error("Invalid position: box {box_number}, row {row}, column {column}")]
    InvalidPosition {
        box_number: usize,
        row: usize,
        column: usize,
    },

    #[error("Dataset not found: {id}")]
    DatasetNotFound { id: String },

    #[error("No dataset selected")]
    NoDatasetSelected,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Lookup,
    Configuration,
    System,
}

impl LivingDexError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DataFormat { .. } | Self::SerializationError(_) | Self::CsvError(_) => {
                ErrorCategory::Data
            }
            Self::OutOfRange { .. }
            | Self::NoEntries { .. }
            | Self::InvalidPosition { .. }
            | Self::DatasetNotFound { .. }
            | Self::NoDatasetSelected => ErrorCategory::Lookup,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    /// Short message meant for the terminal, without internal detail.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::DataFormat { source_name, .. } => {
                format!("The dataset file {} could not be read", source_name)
            }
            Self::OutOfRange { rank, len } => {
                format!("Number {} is past the end of this pokedex ({} entries)", rank, len)
            }
            Self::NoEntries { dataset } => format!("The pokedex '{}' is empty", dataset),
            Self::InvalidPosition {
                box_number,
                row,
                column,
            } => format!(
                "Box {}, row {}, column {} is not a slot (rows 1-5, columns 1-6)",
                box_number, row, column
            ),
            Self::DatasetNotFound { id } => format!("No pokedex named '{}'", id),
            Self::NoDatasetSelected => "Select a pokedex first".to_string(),
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => format!("Configuration problem: {}", self),
            Self::IoError(e) => format!("File system error: {}", e),
            Self::SerializationError(_) | Self::CsvError(_) => {
                format!("Could not encode or decode data: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Data => "Rebuild the dataset file; it needs game, region and pokemon fields",
            ErrorCategory::Lookup => "Run `living-dex list` to see the available pokedexes and their sizes",
            ErrorCategory::Configuration => "Check the configuration file and command line flags",
            ErrorCategory::System => "Check that the database directory exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, LivingDexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_errors_are_distinct_from_data_errors() {
        let out_of_range = LivingDexError::OutOfRange { rank: 99, len: 3 };
        let no_entries = LivingDexError::NoEntries {
            dataset: "kanto".to_string(),
        };
        let malformed = LivingDexError::DataFormat {
            source_name: "kanto.json".to_string(),
            message: "missing field `pokemon`".to_string(),
        };

        assert_eq!(out_of_range.category(), ErrorCategory::Lookup);
        assert_eq!(no_entries.category(), ErrorCategory::Lookup);
        assert_eq!(malformed.category(), ErrorCategory::Data);
        assert!(out_of_range.user_friendly_message().contains("99"));
    }
}
