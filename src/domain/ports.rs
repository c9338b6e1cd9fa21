use crate::domain::model::{Catalog, Dataset, DatasetRecord};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Where datasets and their icons live.
pub trait DatasetStore {
    fn load(&self, path: &Path) -> Result<Dataset>;
    fn load_all(&self) -> Result<Catalog>;
    fn save(&self, record: &DatasetRecord) -> Result<PathBuf>;
    fn icon_path(&self, entry: &str) -> Option<PathBuf>;
}

pub trait ConfigProvider {
    fn db_dir(&self) -> &str;
}
