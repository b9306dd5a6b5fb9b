mod csv;
mod fs_utils;
pub mod json;
pub mod logic;
mod model;

pub use logic::ExportLogic;
pub use model::SessionExport;

use clap::ValueEnum;
use std::path::Path;

use crate::ui::messages::success;

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        }
    }
}
