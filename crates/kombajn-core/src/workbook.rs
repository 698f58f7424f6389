//! Workbook assembly: runs every sheet builder in tab order.

use rust_xlsxwriter::Workbook;
use tracing::{debug, info};

use crate::config;
use crate::sheets::{
    ChoSourcesSheet, DashboardSheet, LogSheet, PowerZonesSheet, SettingsSheet, SheetBuilder,
};
use crate::styles::Styles;
use crate::BuildError;

/// Sheet builders in tab order.
fn builders() -> [&'static dyn SheetBuilder; 5] {
    [
        &SettingsSheet,
        &LogSheet,
        &DashboardSheet,
        &PowerZonesSheet,
        &ChoSourcesSheet,
    ]
}

/// Builds the complete five-sheet workbook in memory.
///
/// Configuration tables are validated first; a bad table aborts before
/// any worksheet exists. Formulas are stored without cached results, so
/// the spreadsheet application computes everything on first open.
pub fn build_workbook() -> Result<Workbook, BuildError> {
    config::validate()?;

    let styles = Styles::new();
    let mut workbook = Workbook::new();

    for builder in builders() {
        debug!(sheet = builder.name(), "building sheet");
        let sheet = workbook.add_worksheet();
        sheet.set_name(builder.name())?;
        builder.build(sheet, &styles)?;
        info!(sheet = builder.name(), "sheet built");
    }

    Ok(workbook)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builds_five_sheets_in_order() {
        let mut workbook = build_workbook().expect("workbook should build");
        let names: Vec<String> = workbook.worksheets_mut().iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            [
                "Ustawienia",
                "Dziennik",
                "Dashboard",
                "Strefy Mocy",
                "Źródła CHO"
            ]
        );
    }

    #[test]
    fn builder_names_are_unique() {
        let mut names: Vec<&str> = builders().iter().map(|b| b.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 5);
    }
}
