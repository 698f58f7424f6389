//! `Dziennik` sheet: the daily training log grid.
//!
//! 42 columns in nine logical sections (date/week, morning physiology,
//! ride data, WKO5 metrics, PMC, calories, macros, in-ride fueling,
//! notes). Row 2 carries the formula template for every computed column;
//! the user drags it down as entries accumulate. Only the date column is
//! pre-filled further (90 days of date-increment formulas anchored at
//! `$A$2`).

use rust_xlsxwriter::Worksheet;

use crate::config::{
    LOG_COLUMN_WIDTHS, LOG_HEADERS, LOG_INPUT_COLUMNS, LOG_SECTION_END_COLUMNS, SHEET_PARAMS,
};
use crate::sheets::SheetBuilder;
use crate::styles::Styles;
use crate::BuildError;

pub struct LogSheet;

/// Row-2 formula templates for the computed columns. (0-based column, formula)
///
/// Column letters for cross-checking: D waga, K czas (min), N avg power,
/// O NP, T IF, U TSS, X CTL, Y ATL, AB TDEE, AC cel kcal, AD spożyte kcal.
/// Every division or cross-reference is guarded so blanks stay blank
/// instead of propagating spreadsheet errors.
pub const ROW2_FORMULAS: [(u16, &str); 17] = [
    // B: numer tygodnia z daty
    (1, r#"=IF(ISNUMBER(A2), WEEKNUM(A2, 2), "")"#),
    // C: dzień tygodnia
    (2, r#"=IF(ISNUMBER(A2), TEXT(A2, "ddd"), "")"#),
    // E: waga, średnia krocząca 7 dni
    (4, r#"=IF(ISNUMBER(D2), AVERAGE(D2:INDEX(D:D, MAX(2, ROW()-6))), "")"#),
    // T: IF = NP / FTP
    (19, r#"=IF(OR(O2="",O2=0), "", IFERROR(ROUND(O2/'Ustawienia'!$B$5, 2), ""))"#),
    // U: TSS = (czas[min] * NP * IF) / (FTP * 60) * 100
    (
        20,
        r#"=IF(OR(K2="",O2="",T2=""), "", IFERROR(ROUND((K2*O2*T2)/('Ustawienia'!$B$5*60)*100, 0), ""))"#,
    ),
    // V: W/kg liczone z NP
    (21, r#"=IF(OR(O2="",O2=0), "", IFERROR(ROUND(O2/'Ustawienia'!$B$4, 2), ""))"#),
    // W: strefa dominująca wg IF (progi Coggan)
    (
        22,
        r#"=IF(T2="", "", IF(T2<0.55, "Z1", IF(T2<0.75, "Z2", IF(T2<0.9, "Z3", IF(T2<1.05, "Z4", IF(T2<1.2, "Z5", IF(T2<1.5, "Z6", "Z7")))))))"#,
    ),
    // X: CTL, okno 42 dni kończące się na bieżącym wierszu
    (
        23,
        r#"=IF(ISNUMBER(U2), ROUND(AVERAGE(U2:INDEX(U:U, MAX(2, ROW()-41))), 1), "")"#,
    ),
    // Y: ATL, okno 7 dni
    (
        24,
        r#"=IF(ISNUMBER(U2), ROUND(AVERAGE(U2:INDEX(U:U, MAX(2, ROW()-6))), 1), "")"#,
    ),
    // Z: TSB = CTL - ATL
    (25, r#"=IF(OR(X2="",Y2=""), "", ROUND(X2-Y2, 1))"#),
    // AA: kcal treningu z pracy mechanicznej (kJ ~ kcal)
    (26, r#"=IF(OR(K2="",N2=""), "", ROUND(N2*K2*60/1000, 0))"#),
    // AB: TDEE = CPM baza + kcal treningu
    (
        27,
        r#"=IF(ISNUMBER(AA2), 'Ustawienia'!$B$20 + AA2, 'Ustawienia'!$B$20)"#,
    ),
    // AC: cel kcal = TDEE - planowany deficyt
    (28, "=AB2 - 'Ustawienia'!$B$21"),
    // AE: bilans = spożyte - cel
    (30, r#"=IF(ISBLANK(AD2), "", AD2 - AC2)"#),
    // AF: cel białka = współczynnik * waga
    (
        31,
        r#"=IF(OR(D2="",D2=0), "", IFERROR(ROUND('Ustawienia'!$B$22 * D2, 0), 0))"#,
    ),
    // AG: cel tłuszczu = (cel kcal * udział) / 9
    (32, r#"=IFERROR(ROUND((AC2 * 'Ustawienia'!$B$23) / 9, 0), 0)"#),
    // AH: cel węgli = pozostałe kcal / 4
    (33, r#"=IFERROR(ROUND((AC2 - (AF2*4) - (AG2*9)) / 4, 0), 0)"#),
];

/// Date-increment formula stamped into rows 3..=91.
const DATE_FILL_FORMULA: &str = r#"=IF(ISBLANK($A$2), "", $A$2 + (ROW()-2))"#;

impl SheetBuilder for LogSheet {
    fn name(&self) -> &'static str {
        "Dziennik"
    }

    fn build(&self, sheet: &mut Worksheet, styles: &Styles) -> Result<(), BuildError> {
        self.write_headers(sheet, styles)?;
        self.style_data_rows(sheet, styles)?;
        self.write_formulas(sheet, styles)?;
        self.write_date_column(sheet, styles)?;

        // Notatka w kolumnie Notatki (AP), na żółtym tle pola do wpisywania
        sheet.write_with_format(
            1,
            41,
            "Wypełnij żółte pola. Szare liczą się same.",
            &styles.info_input,
        )?;

        for (i, width) in LOG_COLUMN_WIDTHS.iter().enumerate() {
            sheet.set_column_width(i as u16, *width)?;
        }

        // Nagłówek zawsze widoczny
        sheet.set_freeze_panes(1, 0)?;

        Ok(())
    }
}

impl LogSheet {
    fn write_headers(&self, sheet: &mut Worksheet, styles: &Styles) -> Result<(), BuildError> {
        for (i, header) in LOG_HEADERS.iter().enumerate() {
            let col_1based = (i + 1) as u16;
            let is_section_end = LOG_SECTION_END_COLUMNS.contains(&col_1based);
            sheet.write_with_format(0, i as u16, *header, styles.header_for(is_section_end))?;
        }
        Ok(())
    }

    /// Pre-styles the whole grid: yellow for input columns, gray for
    /// computed ones, thick right border at section ends. No values yet.
    fn style_data_rows(&self, sheet: &mut Worksheet, styles: &Styles) -> Result<(), BuildError> {
        for (i, _) in LOG_HEADERS.iter().enumerate() {
            let col_1based = (i + 1) as u16;
            let is_input = LOG_INPUT_COLUMNS.contains(&col_1based);
            let is_section_end = LOG_SECTION_END_COLUMNS.contains(&col_1based);
            let format = styles.grid_for(is_input, is_section_end);

            for row in 1..=SHEET_PARAMS.max_log_rows {
                sheet.write_with_format(row, i as u16, "", format)?;
            }
        }
        Ok(())
    }

    /// Formula templates keep the grid's gray fill and section borders.
    fn write_formulas(&self, sheet: &mut Worksheet, styles: &Styles) -> Result<(), BuildError> {
        for (col, formula) in ROW2_FORMULAS {
            let is_section_end = LOG_SECTION_END_COLUMNS.contains(&(col + 1));
            sheet.write_formula_with_format(1, col, formula, styles.grid_for(false, is_section_end))?;
        }
        Ok(())
    }

    fn write_date_column(&self, sheet: &mut Worksheet, styles: &Styles) -> Result<(), BuildError> {
        // A2: data startowa, do wpisania
        sheet.write_with_format(1, 0, "", &styles.input_date)?;

        // Kolejne dni liczą się same po wpisaniu A2; kolumna daty zostaje
        // żółtym polem do wpisywania
        for row in 2..=SHEET_PARAMS.initial_days_count {
            sheet.write_formula_with_format(row, 0, DATE_FILL_FORMULA, &styles.input_date)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_are_formula_text() {
        for (col, formula) in ROW2_FORMULAS {
            assert!(
                formula.starts_with('='),
                "column {col} template is not a formula: {formula}"
            );
        }
    }

    #[test]
    fn formula_columns_are_exactly_the_non_input_columns() {
        let formula_cols: Vec<u16> = ROW2_FORMULAS.iter().map(|(c, _)| c + 1).collect();

        for col in &formula_cols {
            assert!(
                !LOG_INPUT_COLUMNS.contains(col),
                "column {col} is both input and computed"
            );
        }

        // 42 columns split into 25 input + 17 computed
        assert_eq!(formula_cols.len() + LOG_INPUT_COLUMNS.len(), LOG_HEADERS.len());
    }

    #[test]
    fn log_sheet_builds() {
        let mut sheet = Worksheet::new();
        let styles = Styles::new();
        assert!(LogSheet.build(&mut sheet, &styles).is_ok());
    }
}
