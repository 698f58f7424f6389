//! `Dashboard` sheet: weekly summary and current form (PMC).
//!
//! All aggregates are driven by a single week-number input in `B3`,
//! pre-filled with the ISO week of the generation date. The PMC block
//! pulls the last non-blank CTL/ATL entries from the log.

use chrono::{Datelike, Local};
use rust_xlsxwriter::{Format, Worksheet};

use crate::sheets::SheetBuilder;
use crate::styles::Styles;
use crate::BuildError;

pub struct DashboardSheet;

/// Weekly aggregate rows: (label, column in `Dziennik`, aggregate function).
/// Rows are written in order starting at row 6 (1-based).
const WEEKLY_METRICS: [(&str, &str, &str); 9] = [
    ("Średnia waga (kg)", "D", "AVERAGEIFS"),
    ("Łączny TSS", "U", "SUMIFS"),
    ("Łączny czas (h)", "K", "SUMIFS"),
    ("Łączny dystans (km)", "L", "SUMIFS"),
    ("Śr. IF", "T", "AVERAGEIFS"),
    ("Śr. Kcal spożyte", "AD", "AVERAGEIFS"),
    ("Śr. Bilans Kcal", "AE", "AVERAGEIFS"),
    ("Śr. Jakość snu (1-5)", "I", "AVERAGEIFS"),
    ("Śr. Samopoczucie (1-5)", "J", "AVERAGEIFS"),
];

/// Five-way form assessment keyed to TSB breakpoints (+25 / +10 / -10 / -30).
const FORM_ASSESSMENT_FORMULA: &str = concat!(
    r#"=IF(B19="", "", IF(B19>25, "Bardzo świeży (możliwy detrening)", "#,
    r#"IF(B19>=10, "Świeżość - gotowy na start", "#,
    r#"IF(B19>=-10, "Strefa neutralna", "#,
    r#"IF(B19>=-30, "Zmęczenie produktywne", "Przeciążenie - odpocznij!")))))"#,
);

const CHART_INSTRUCTIONS: &str = "JAK ZROBIĆ WYKRES PMC:\n\
    1. Zaznacz w Dzienniku kolumny A (Data), X (CTL), Y (ATL), Z (TSB)\n\
    2. Wstaw -> Wykres liniowy\n\
    3. CTL = niebieska linia (forma), ATL = czerwona (zmęczenie)\n\
    4. TSB nad zerem = świeżość, pod zerem = zmęczenie";

impl SheetBuilder for DashboardSheet {
    fn name(&self) -> &'static str {
        "Dashboard"
    }

    fn build(&self, sheet: &mut Worksheet, styles: &Styles) -> Result<(), BuildError> {
        let title = Format::new().set_bold().set_font_size(16);
        sheet.write_with_format(0, 0, "PODSUMOWANIE TYGODNIOWE", &title)?;

        sheet.write_with_format(2, 0, "Wpisz nr tygodnia:", &styles.bold)?;
        let input_bold = styles.input.clone().set_bold();
        sheet.write_with_format(2, 1, current_iso_week(), &input_bold)?;

        for (i, header) in ["Wskaźnik", "Średnia / Suma", "Komentarz"].iter().enumerate() {
            sheet.write_with_format(4, i as u16, *header, &styles.header)?;
        }

        for (i, (label, column, function)) in WEEKLY_METRICS.iter().enumerate() {
            let row = 5 + i as u32;
            sheet.write_with_format(row, 0, *label, &styles.bold)?;
            sheet.write_formula_with_format(
                row,
                1,
                weekly_formula(function, column).as_str(),
                &styles.formula,
            )?;
        }

        self.write_pmc_block(sheet, styles)?;

        sheet.write_with_format(21, 2, "INSTRUKCJA DO WYKRESÓW", &styles.bold)?;
        let wrapped_info = styles.info.clone().set_text_wrap();
        sheet.write_with_format(22, 2, CHART_INSTRUCTIONS, &wrapped_info)?;
        sheet.set_row_height(22, 70)?;

        sheet.set_column_width(0, 30)?;
        sheet.set_column_width(1, 20)?;
        sheet.set_column_width(2, 50)?;

        Ok(())
    }
}

impl DashboardSheet {
    fn write_pmc_block(&self, sheet: &mut Worksheet, styles: &Styles) -> Result<(), BuildError> {
        sheet.merge_range(15, 0, 15, 2, "AKTUALNA FORMA (PMC)", &styles.section_title)?;

        sheet.write_with_format(16, 0, "CTL (Fitness):", &styles.bold)?;
        sheet.write_formula_with_format(16, 1, last_entry_formula("X").as_str(), &styles.formula)?;

        sheet.write_with_format(17, 0, "ATL (Zmęczenie):", &styles.bold)?;
        sheet.write_formula_with_format(17, 1, last_entry_formula("Y").as_str(), &styles.formula)?;

        sheet.write_with_format(18, 0, "TSB (Forma):", &styles.bold)?;
        sheet.write_formula_with_format(
            18,
            1,
            r#"=IF(OR(B17="Brak danych",B18="Brak danych"), "", ROUND(B17-B18, 1))"#,
            &styles.formula,
        )?;

        sheet.write_with_format(19, 0, "Ocena formy:", &styles.bold)?;
        sheet.write_formula_with_format(19, 1, FORM_ASSESSMENT_FORMULA, &styles.formula)?;

        Ok(())
    }
}

/// Weekly aggregate over a log column, filtered by the week number in `B3`.
/// Ride time is logged in minutes, so the hours row divides by 60.
fn weekly_formula(function: &str, column: &str) -> String {
    let aggregate = format!(
        "{function}('Dziennik'!{column}:{column},'Dziennik'!B:B,$B$3)"
    );
    if column == "K" {
        format!(r#"=IFERROR(ROUND({aggregate}/60, 1), "Brak danych")"#)
    } else {
        format!(r#"=IFERROR(ROUND({aggregate}, 1), "Brak danych")"#)
    }
}

/// Last non-blank value in a log column.
fn last_entry_formula(column: &str) -> String {
    format!(
        r#"=IFERROR(LOOKUP(2,1/('Dziennik'!{column}:{column}<>""),'Dziennik'!{column}:{column}), "Brak danych")"#
    )
}

fn current_iso_week() -> u32 {
    Local::now().date_naive().iso_week().week()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ride_time_is_converted_to_hours() {
        let formula = weekly_formula("SUMIFS", "K");
        assert_eq!(
            formula,
            r#"=IFERROR(ROUND(SUMIFS('Dziennik'!K:K,'Dziennik'!B:B,$B$3)/60, 1), "Brak danych")"#
        );
    }

    #[test]
    fn aggregates_fall_back_to_brak_danych() {
        for (_, column, function) in WEEKLY_METRICS {
            let formula = weekly_formula(function, column);
            assert!(formula.starts_with("=IFERROR("));
            assert!(formula.ends_with(r#""Brak danych")"#));
        }
    }

    #[test]
    fn iso_week_is_in_range() {
        let week = current_iso_week();
        assert!((1..=53).contains(&week));
    }

    #[test]
    fn dashboard_sheet_builds() {
        let mut sheet = Worksheet::new();
        let styles = Styles::new();
        assert!(DashboardSheet.build(&mut sheet, &styles).is_ok());
    }
}
