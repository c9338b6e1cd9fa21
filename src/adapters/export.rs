use crate::core::position::rank_to_position;
use crate::domain::model::Dataset;
use crate::utils::error::{LivingDexError, Result};
use serde::Serialize;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub const VALUES: [&'static str; 2] = ["csv", "tsv"];

    fn delimiter(self) -> u8 {
        match self {
            Self::Csv => b',',
            Self::Tsv => b'\t',
        }
    }
}

impl FromStr for ExportFormat {
    type Err = LivingDexError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            other => Err(LivingDexError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: format!("Valid formats: {}", Self::VALUES.join(", ")),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct LayoutRow<'a> {
    rank: usize,
    name: &'a str,
    #[serde(rename = "box")]
    box_number: usize,
    row: usize,
    column: usize,
}

/// Writes where every entry of a dataset lives, one line per entry.
pub struct BoxLayoutExporter {
    format: ExportFormat,
}

impl BoxLayoutExporter {
    pub fn new(format: ExportFormat) -> Self {
        Self { format }
    }

    pub fn write<W: Write>(&self, dataset: &Dataset, out: W) -> Result<usize> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.format.delimiter())
            .from_writer(out);

        for (index, name) in dataset.entries().iter().enumerate() {
            let rank = index + 1;
            let position = rank_to_position(rank);
            writer.serialize(LayoutRow {
                rank,
                name,
                box_number: position.box_number,
                row: position.row,
                column: position.column,
            })?;
        }
        writer.flush()?;

        Ok(dataset.len())
    }

    pub fn render(&self, dataset: &Dataset) -> Result<String> {
        let mut buf = Vec::new();
        self.write(dataset, &mut buf)?;
        String::from_utf8(buf).map_err(|e| LivingDexError::DataFormat {
            source_name: dataset.dataset_id().to_string(),
            message: e.to_string(),
        })
    }
}
