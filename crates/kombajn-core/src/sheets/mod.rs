//! Per-sheet builders.
//!
//! Each builder populates one named worksheet region by region: title,
//! input fields, formula templates, data tables, instructional text.
//! Builders never depend on each other's output; cross-sheet references
//! are plain formula text resolved by the spreadsheet application.

mod cho_sources;
mod dashboard;
mod log;
mod power_zones;
mod settings;

pub use cho_sources::ChoSourcesSheet;
pub use dashboard::DashboardSheet;
pub use log::LogSheet;
pub use power_zones::PowerZonesSheet;
pub use settings::SettingsSheet;

use rust_xlsxwriter::Worksheet;

use crate::styles::Styles;
use crate::BuildError;

/// Contract shared by all sheet builders: populate one named worksheet.
pub trait SheetBuilder {
    /// Tab name of the sheet this builder produces.
    fn name(&self) -> &'static str;

    /// Writes the sheet's cells, formulas and formatting.
    fn build(&self, sheet: &mut Worksheet, styles: &Styles) -> Result<(), BuildError>;
}
