pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{BoxLayoutExporter, ExportFormat, LocalStorage};
pub use app::LivingDex;
pub use config::{toml_config::TomlConfig, Settings};
pub use crate::core::position::{box_count, position_to_rank, rank_to_position};
pub use crate::core::selection::{LookupController, Outcome, Query, SelectionState};
pub use domain::model::{Catalog, Dataset, DatasetRecord, NameMatch, Position};
pub use utils::error::{LivingDexError, Result};
