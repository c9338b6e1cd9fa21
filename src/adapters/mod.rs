// Adapters layer: concrete implementations for the file system.

pub mod export;
pub mod storage;

pub use export::{BoxLayoutExporter, ExportFormat};
pub use storage::LocalStorage;
