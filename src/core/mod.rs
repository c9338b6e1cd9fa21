pub mod layout;
pub mod position;
pub mod resolver;
pub mod selection;

pub use crate::domain::model::{Catalog, Dataset, DatasetRecord, NameMatch, Position};
pub use crate::domain::ports::{ConfigProvider, DatasetStore};
pub use crate::utils::error::Result;
