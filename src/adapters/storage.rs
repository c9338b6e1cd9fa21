use crate::domain::model::{Catalog, Dataset, DatasetRecord};
use crate::domain::ports::DatasetStore;
use crate::utils::error::{LivingDexError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const POKEDEX_SUBDIR: &str = "pokedex";
pub const ICON_SUBDIR: &str = "icons";

/// Datasets under `<db_dir>/pokedex`, icons under `<db_dir>/icons`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn pokedex_dir(&self) -> PathBuf {
        self.base_path.join(POKEDEX_SUBDIR)
    }

    pub fn icon_dir(&self) -> PathBuf {
        self.base_path.join(ICON_SUBDIR)
    }
}

impl DatasetStore for LocalStorage {
    fn load(&self, path: &Path) -> Result<Dataset> {
        let content = fs::read_to_string(path)?;
        Dataset::from_json_str(&content, &path.display().to_string())
    }

    fn load_all(&self) -> Result<Catalog> {
        let dir = self.pokedex_dir();
        if !dir.is_dir() {
            tracing::warn!("Dataset directory {} does not exist", dir.display());
            return Ok(Catalog::default());
        }

        let mut paths = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        let datasets = paths
            .iter()
            .map(|p| self.load(p))
            .collect::<Result<Vec<_>>>()?;

        tracing::info!("📁 Loaded {} datasets from {}", datasets.len(), dir.display());
        Ok(Catalog::new(datasets))
    }

    fn save(&self, record: &DatasetRecord) -> Result<PathBuf> {
        let dir = self.pokedex_dir();
        fs::create_dir_all(&dir)?;

        let path = dir.join(format!("{}.json", record.file_stem()));
        let data = serde_json::to_string(record)?;
        fs::write(&path, data)?;

        tracing::info!("Dumped {} entries to {}", record.pokemon.len(), path.display());
        Ok(path)
    }

    fn icon_path(&self, entry: &str) -> Option<PathBuf> {
        let path = self.icon_dir().join(format!("{}.png", entry.to_lowercase()));
        path.is_file().then_some(path)
    }
}

/// Reads a plain list, one entry per line; blank lines are skipped.
pub fn read_entry_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let entries: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_lowercase)
        .collect();

    if entries.is_empty() {
        return Err(LivingDexError::DataFormat {
            source_name: path.display().to_string(),
            message: "entry list is empty".to_string(),
        });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_uses_sanitized_name() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());
        let record = DatasetRecord::new(
            "sword & shield - crown tundra",
            "galar: crown tundra",
            vec!["rillaboom".to_string()],
        );

        let path = storage.save(&record).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "sword and shield - crown tundra.json"
        );

        let loaded = storage.load(&path).unwrap();
        assert_eq!(loaded.group_id(), "galar: crown tundra");
    }

    #[test]
    fn test_load_all_skips_directories_and_sorts() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());
        storage
            .save(&DatasetRecord::new("sinnoh", "sinnoh", vec!["turtwig".into()]))
            .unwrap();
        storage
            .save(&DatasetRecord::new("kanto", "kanto", vec!["bulbasaur".into()]))
            .unwrap();
        fs::create_dir_all(storage.pokedex_dir().join("nested")).unwrap();

        let catalog = storage.load_all().unwrap();
        let ids: Vec<_> = catalog.datasets().iter().map(|d| d.dataset_id()).collect();
        assert_eq!(ids, ["kanto", "sinnoh"]);
    }

    #[test]
    fn test_load_all_missing_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().join("nope"));
        assert!(storage.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_file_fails_load_all() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());
        fs::create_dir_all(storage.pokedex_dir()).unwrap();
        fs::write(storage.pokedex_dir().join("broken.json"), r#"{"game": "x"}"#).unwrap();

        assert!(matches!(
            storage.load_all(),
            Err(LivingDexError::DataFormat { .. })
        ));
    }

    #[test]
    fn test_icon_path_lowercases() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());
        fs::create_dir_all(storage.icon_dir()).unwrap();
        fs::write(storage.icon_dir().join("pikachu.png"), b"png").unwrap();

        assert!(storage.icon_path("Pikachu").is_some());
        assert!(storage.icon_path("raichu").is_none());
    }

    #[test]
    fn test_read_entry_list() {
        let dir = TempDir::new().unwrap();
        let list = dir.path().join("list.txt");
        fs::write(&list, "Bulbasaur\n\n  Ivysaur \nvenusaur\n").unwrap();
        assert_eq!(
            read_entry_list(&list).unwrap(),
            ["bulbasaur", "ivysaur", "venusaur"]
        );

        fs::write(&list, "\n \n").unwrap();
        assert!(read_entry_list(&list).is_err());
    }
}
