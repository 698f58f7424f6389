//! `Źródła CHO` sheet: carbohydrate product database plus a small
//! per-ride fueling calculator.

use rust_xlsxwriter::{Format, Worksheet};

use crate::config::{ChoProduct, CHO_COLUMN_WIDTHS, CHO_HEADERS, CHO_SAMPLE_DATA};
use crate::sheets::SheetBuilder;
use crate::styles::Styles;
use crate::BuildError;

pub struct ChoSourcesSheet;

/// Editable columns (1-based): name, portion, CHO/100g, kcal/100g, type,
/// absorption, note. Per-portion values are computed.
const INPUT_COLUMNS: [u16; 7] = [1, 2, 3, 4, 7, 8, 9];

/// Last pre-styled product row (Excel, 1-based).
const LAST_PRODUCT_ROW: u32 = 100;

/// First row of the calculator block (0-based): sample data plus a gap.
const CALCULATOR_ROW: u32 = CHO_SAMPLE_DATA.len() as u32 + 4;

const TIPS: [&str; 6] = [
    "💡 Wskazówki spożywania CHO podczas jazdy:",
    "• Z2/Z3 < 2h: 30-40g/h (lub bez)",
    "• Z3/Z4 2-3h: 60g/h",
    "• Wyścig/intensywny: 80-90g/h (mix glukoza:fruktoza 1:0.8)",
    "• Ultra >5h: do 120g/h (wymaga treningu jelit!)",
    "• Zacznij od 30g/h i zwiększaj o 10g/h co tydzień",
];

impl SheetBuilder for ChoSourcesSheet {
    fn name(&self) -> &'static str {
        "Źródła CHO"
    }

    fn build(&self, sheet: &mut Worksheet, styles: &Styles) -> Result<(), BuildError> {
        sheet.merge_range(
            0,
            0,
            0,
            (CHO_HEADERS.len() - 1) as u16,
            "🍌 ŹRÓDŁA WĘGLOWODANÓW - BAZA DLA KOLARZA",
            &styles.banner,
        )?;
        sheet.set_row_height(0, 28)?;

        for (i, header) in CHO_HEADERS.iter().enumerate() {
            sheet.write_with_format(1, i as u16, *header, &styles.header)?;
        }

        self.style_product_rows(sheet, styles)?;

        for (i, product) in CHO_SAMPLE_DATA.iter().enumerate() {
            self.write_product(sheet, styles, 2 + i as u32, product)?;
        }

        self.write_calculator(sheet, styles, CALCULATOR_ROW)?;

        for (i, width) in CHO_COLUMN_WIDTHS.iter().enumerate() {
            sheet.set_column_width(i as u16, *width)?;
        }

        sheet.set_freeze_panes(2, 0)?;

        Ok(())
    }
}

impl ChoSourcesSheet {
    /// Marks the editable columns yellow down to row 100. Fill only; the
    /// computed columns stay untouched until a formula lands in them.
    fn style_product_rows(&self, sheet: &mut Worksheet, styles: &Styles) -> Result<(), BuildError> {
        for col_1based in INPUT_COLUMNS {
            for row in 2..LAST_PRODUCT_ROW {
                sheet.write_with_format(row, col_1based - 1, "", &styles.input_fill)?;
            }
        }
        Ok(())
    }

    fn write_product(
        &self,
        sheet: &mut Worksheet,
        styles: &Styles,
        row: u32,
        product: &ChoProduct,
    ) -> Result<(), BuildError> {
        sheet.write_with_format(row, 0, product.name, &styles.input_fill)?;
        sheet.write_with_format(row, 1, product.portion_g, &styles.input_fill)?;
        sheet.write_with_format(row, 2, product.cho_per_100g, &styles.input_fill)?;
        sheet.write_with_format(row, 3, product.kcal_per_100g, &styles.input_fill)?;

        let excel_row = row + 1;
        sheet.write_formula_with_format(
            row,
            4,
            per_portion_formula(excel_row, "C", 1).as_str(),
            &styles.formula,
        )?;
        sheet.write_formula_with_format(
            row,
            5,
            per_portion_formula(excel_row, "D", 0).as_str(),
            &styles.formula,
        )?;

        sheet.write_with_format(row, 6, product.product_type, &styles.input_fill)?;
        sheet.write_with_format(row, 7, product.absorption, &styles.input_fill)?;
        sheet.write_with_format(row, 8, product.note, &styles.input_fill)?;

        Ok(())
    }

    fn write_calculator(
        &self,
        sheet: &mut Worksheet,
        styles: &Styles,
        start: u32,
    ) -> Result<(), BuildError> {
        let title = Format::new().set_bold().set_font_size(12);
        sheet.merge_range(start, 0, start, 4, "🧮 KALKULATOR CHO NA TRENING", &title)?;

        sheet.write_with_format(start + 2, 0, "Cel CHO/h (g):", &styles.bold)?;
        sheet.write_with_format(start + 2, 1, 60, &styles.input_fill)?;

        sheet.write_with_format(start + 3, 0, "Czas treningu (h):", &styles.bold)?;
        sheet.write_with_format(start + 3, 1, 3, &styles.input_fill)?;

        sheet.write_with_format(start + 4, 0, "Całkowite CHO potrzebne:", &styles.bold)?;
        let excel_target = start + 3; // 1-based row of the CHO/h input
        sheet.write_formula_with_format(
            start + 4,
            1,
            format!("=B{}*B{}", excel_target, excel_target + 1).as_str(),
            &styles.formula,
        )?;
        sheet.write(start + 4, 2, "g")?;

        for (i, tip) in TIPS.iter().enumerate() {
            let row = start + 6 + i as u32;
            let format = if i == 0 { &styles.bold } else { &styles.info };
            sheet.merge_range(row, 0, row, 4, tip, format)?;
        }

        Ok(())
    }
}

/// Per-portion amount: portion (B) times per-100g value, blank-guarded.
fn per_portion_formula(excel_row: u32, source_col: &str, decimals: u8) -> String {
    format!(
        r#"=IF(OR(B{row}="",{col}{row}=""), "", ROUND(B{row} * {col}{row} / 100, {decimals}))"#,
        row = excel_row,
        col = source_col,
        decimals = decimals,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn per_portion_references_the_row() {
        assert_eq!(
            per_portion_formula(3, "C", 1),
            r#"=IF(OR(B3="",C3=""), "", ROUND(B3 * C3 / 100, 1))"#
        );
    }

    #[test]
    fn computed_columns_are_not_inputs() {
        // E (5) and F (6) carry the per-portion formulas
        assert!(!INPUT_COLUMNS.contains(&5));
        assert!(!INPUT_COLUMNS.contains(&6));
        assert_eq!(INPUT_COLUMNS.len() + 2, CHO_HEADERS.len());
    }

    #[test]
    fn calculator_sits_below_the_sample_data() {
        // 15 sample rows ending on Excel row 17, banner on Excel row 20
        assert_eq!(CALCULATOR_ROW, 19);
    }

    #[test]
    fn tips_keep_the_shipped_wording() {
        assert_eq!(TIPS[0], "💡 Wskazówki spożywania CHO podczas jazdy:");
        assert_eq!(TIPS[3], "• Wyścig/intensywny: 80-90g/h (mix glukoza:fruktoza 1:0.8)");
        assert!(TIPS[1..].iter().all(|t| t.starts_with('•')));
    }

    #[test]
    fn cho_sheet_builds() {
        let mut sheet = Worksheet::new();
        let styles = Styles::new();
        assert!(ChoSourcesSheet.build(&mut sheet, &styles).is_ok());
    }
}
