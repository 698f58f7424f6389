//! `Ustawienia` sheet: athlete profile and nutrition targets.
//!
//! Cell anchors referenced from other sheets:
//! - `B4` weight (kg), `B5` FTP (W), `B7` HRmax — power zones, log metrics
//! - `B20` CPM base, `B21` deficit, `B22` protein g/kg, `B23` fat share — log
//!   calorie/macro columns

use rust_xlsxwriter::Worksheet;

use crate::config::{DEFAULTS, METABOLIC_DEFAULTS, POWER_DEFAULTS};
use crate::sheets::SheetBuilder;
use crate::styles::Styles;
use crate::BuildError;

pub struct SettingsSheet;

/// Section headers, merged across columns A:C. (0-based row, text)
const SECTION_HEADERS: [(u32, &str); 4] = [
    (0, "PROFIL MOCY (WKO5)"),
    (9, "PROFIL METABOLICZNY (INSCYD)"),
    (15, "METABOLIZM I CELE"),
    (24, "DANE ŚCIĄGANE Z DZIENNIKA"),
];

/// Field labels in column A. (0-based row, text)
const LABELS: [(u32, &str); 18] = [
    (1, "Data testu FTP"),
    (2, "Protokół testu"),
    (3, "Waga (kg)"),
    (4, "FTP (W)"),
    (5, "W/kg (FTP)"),
    (6, "HR Max"),
    (7, "HR Spoczynkowe"),
    (10, "VO2max (ml/kg/min)"),
    (11, "VLamax (mmol/L/s)"),
    (12, "FatMax (% FTP)"),
    (13, "FatMax (W)"),
    (16, "BMR (kcal)"),
    (17, "TEF (kcal)"),
    (18, "NEAT (kcal)"),
    (19, "CPM (Baza)"),
    (20, "Planowany Deficyt (np. 500)"),
    (21, "CEL: Białko (g / kgmc)"),
    (22, "CEL: Tłuszcze (% TDEE)"),
];

/// Formula cells in column B. (0-based row, formula)
const FORMULAS: [(u32, &str); 6] = [
    // W/kg = FTP / waga
    (5, r#"=IF(B4>0, B5/B4, "")"#),
    // FatMax w watach = FTP * procent FatMax
    (13, "=ROUND($B$5*B13, 0)"),
    // CPM (baza) = BMR + TEF + NEAT
    (19, "=SUM(B17:B19)"),
    // Ostatnie niepuste wpisy z dziennika
    (25, r#"=IFERROR(LOOKUP(2,1/('Dziennik'!D:D<>""),'Dziennik'!D:D), "Brak danych")"#),
    (26, r#"=IFERROR(LOOKUP(2,1/('Dziennik'!X:X<>""),'Dziennik'!X:X), "Brak danych")"#),
    (27, r#"=IFERROR(LOOKUP(2,1/('Dziennik'!Z:Z<>""),'Dziennik'!Z:Z), "Brak danych")"#),
];

const LOOKUP_LABELS: [(u32, &str); 3] = [
    (25, "Aktualna waga (ostatni wpis)"),
    (26, "Aktualny CTL (Fitness)"),
    (27, "Aktualny TSB (Forma)"),
];

impl SheetBuilder for SettingsSheet {
    fn name(&self) -> &'static str {
        "Ustawienia"
    }

    fn build(&self, sheet: &mut Worksheet, styles: &Styles) -> Result<(), BuildError> {
        for (row, text) in SECTION_HEADERS {
            sheet.merge_range(row, 0, row, 2, text, &styles.section_title)?;
        }

        for (row, text) in LABELS.iter().chain(LOOKUP_LABELS.iter()) {
            sheet.write_with_format(*row, 0, *text, &styles.bold)?;
        }

        self.write_inputs(sheet, styles)?;

        for (row, formula) in FORMULAS {
            sheet.write_formula_with_format(row, 1, formula, &styles.formula)?;
        }

        // Wskazówki do pól procentowych
        sheet.write_with_format(12, 2, "(Wpisz 0.55 dla 55%)", &styles.info)?;
        sheet.write_with_format(22, 2, "(Wpisz 0.25 dla 25%)", &styles.info)?;

        sheet.set_column_width(0, 30)?;
        sheet.set_column_width(1, 15)?;
        sheet.set_column_width(2, 25)?;

        Ok(())
    }
}

impl SettingsSheet {
    fn write_inputs(&self, sheet: &mut Worksheet, styles: &Styles) -> Result<(), BuildError> {
        // Data testu: puste pole daty
        sheet.write_with_format(1, 1, "", &styles.input_date)?;
        sheet.write_with_format(2, 1, "Test 20 min", &styles.input)?;
        sheet.write_with_format(3, 1, POWER_DEFAULTS.weight_kg, &styles.input)?;
        sheet.write_with_format(4, 1, POWER_DEFAULTS.ftp, &styles.input)?;
        sheet.write_with_format(6, 1, POWER_DEFAULTS.max_hr, &styles.input)?;
        sheet.write_with_format(7, 1, POWER_DEFAULTS.resting_hr, &styles.input)?;

        sheet.write_with_format(10, 1, METABOLIC_DEFAULTS.vo2max, &styles.input)?;
        sheet.write_with_format(11, 1, METABOLIC_DEFAULTS.vlamax, &styles.input)?;
        sheet.write_with_format(12, 1, METABOLIC_DEFAULTS.fatmax_percent, &styles.input)?;

        sheet.write_with_format(16, 1, DEFAULTS.bmr, &styles.input)?;
        sheet.write_with_format(17, 1, DEFAULTS.tef, &styles.input)?;
        sheet.write_with_format(18, 1, DEFAULTS.neat, &styles.input)?;
        sheet.write_with_format(20, 1, DEFAULTS.deficit, &styles.input)?;
        sheet.write_with_format(21, 1, DEFAULTS.protein_ratio, &styles.input)?;
        sheet.write_with_format(22, 1, DEFAULTS.fat_ratio, &styles.input)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpm_cell_is_literal_sum_over_inputs() {
        let (row, formula) = FORMULAS[2];
        assert_eq!(row, 19);
        assert_eq!(formula, "=SUM(B17:B19)");
    }

    #[test]
    fn all_formulas_are_formula_text() {
        assert!(FORMULAS.iter().all(|(_, f)| f.starts_with('=')));
    }

    #[test]
    fn settings_sheet_builds() {
        let mut sheet = rust_xlsxwriter::Worksheet::new();
        let styles = Styles::new();
        assert!(SettingsSheet.build(&mut sheet, &styles).is_ok());
    }
}
