// Application layer: the commands behind the terminal front end.

pub mod display;

use crate::adapters::export::{BoxLayoutExporter, ExportFormat};
use crate::adapters::storage::read_entry_list;
use crate::core::layout::BoxView;
use crate::core::position::box_count;
use crate::core::resolver::resolve_candidates;
use crate::core::selection::{LookupController, Outcome, Query};
use crate::domain::model::{DatasetRecord, Position};
use crate::domain::ports::DatasetStore;
use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;
use std::fmt::Write;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

pub struct LivingDex<S: DatasetStore> {
    store: S,
}

impl<S: DatasetStore> LivingDex<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads every dataset and selects `dex`.
    pub fn controller_for(&self, dex: &str) -> Result<LookupController> {
        let mut controller = LookupController::new(self.store.load_all()?);
        controller.select(dex)?;
        Ok(controller)
    }

    pub fn list(&self) -> Result<String> {
        let catalog = self.store.load_all()?;
        let mut out = String::new();
        for dataset in catalog.datasets() {
            let _ = writeln!(
                out,
                "{:<40} {:>5} entries  (id: {})",
                display::dataset_label(dataset),
                dataset.len(),
                dataset.dataset_id()
            );
        }
        Ok(out)
    }

    pub fn locate(&self, dex: &str, query: Query) -> Result<Outcome> {
        let mut controller = self.controller_for(dex)?;
        controller.submit(query)
    }

    /// Best match plus up to `alternatives` runner-up lines.
    pub fn locate_name(&self, dex: &str, name: &str, alternatives: usize) -> Result<String> {
        let mut controller = self.controller_for(dex)?;
        let outcome = controller.submit(Query::Name(name.to_string()))?;

        let mut out = display::describe(&outcome);
        if alternatives > 0 && !name.trim().is_empty() {
            let dataset = controller.selected_dataset()?;
            for alt in resolve_candidates(dataset, name, alternatives + 1)?.iter().skip(1) {
                let _ = write!(
                    out,
                    "\n  also: {} (#{}, score {:.1})",
                    display::title_case(&alt.name),
                    alt.rank,
                    alt.score
                );
            }
        }
        Ok(out)
    }

    pub fn show_box(
        &self,
        dex: &str,
        box_number: Option<usize>,
        highlight: Option<i64>,
        icons: bool,
    ) -> Result<String> {
        let mut controller = self.controller_for(dex)?;
        if let Some(rank) = highlight {
            controller.submit(Query::Number(rank.to_string()))?;
        }

        let view = match box_number {
            Some(b) => BoxView::for_box(
                controller.selected_dataset()?,
                Position::new(b, 1, 1)?.box_number,
                controller.state().highlighted_rank,
            ),
            None => controller.box_view()?,
        };
        let total = box_count(controller.selected_dataset()?.len());

        Ok(display::render_box(&view, total, icons.then_some(&self.store)))
    }

    pub fn export(&self, dex: &str, output: &Path, format: ExportFormat) -> Result<usize> {
        let controller = self.controller_for(dex)?;
        let dataset = controller.selected_dataset()?;

        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = BufWriter::new(File::create(output)?);
        let written = BoxLayoutExporter::new(format).write(dataset, file)?;

        tracing::info!("✅ Exported {} entries to {}", written, output.display());
        Ok(written)
    }

    pub fn import(&self, game: &str, region: &str, list: &Path) -> Result<PathBuf> {
        validate_non_empty_string("game", game)?;
        validate_non_empty_string("region", region)?;

        let entries = read_entry_list(list)?;
        let record = DatasetRecord::new(game.to_lowercase(), region.to_lowercase(), entries);
        self.store.save(&record)
    }
}
