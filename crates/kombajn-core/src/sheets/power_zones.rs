//! `Strefy Mocy` sheet: Coggan power zones and HR zones.
//!
//! Watt boundaries are formulas over the FTP mirrored from `Ustawienia`,
//! so retesting FTP updates every zone without regenerating the file.

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Worksheet};

use crate::config::{colors, HrZone, PowerZone, HR_ZONES, POWER_ZONES};
use crate::sheets::SheetBuilder;
use crate::styles::Styles;
use crate::BuildError;

pub struct PowerZonesSheet;

const COLUMN_WIDTHS: [f64; 7] = [5.0, 25.0, 10.0, 10.0, 12.0, 12.0, 50.0];

const ZONE_TABLE_HEADERS: [&str; 7] =
    ["Strefa", "Nazwa", "Min %", "Max %", "Min W", "Max W", "Opis"];

const USAGE_NOTES: [&str; 5] = [
    "1. Ustaw swoje FTP w arkuszu [Ustawienia] - strefy przeliczą się automatycznie",
    "2. Z2-Z3: Większość treningu bazowego (70-80% czasu)",
    "3. Z4 Sweet Spot: Najbardziej efektywny trening dla FTP (88-94% FTP)",
    "4. Z5 VO2max: Interwały 3-8 min, rozwój wydolności tlenowej",
    "5. Monitoruj TSS: 300-500/tydzień dla amatorów, 700-1000+ dla zawodowców",
];

impl SheetBuilder for PowerZonesSheet {
    fn name(&self) -> &'static str {
        "Strefy Mocy"
    }

    fn build(&self, sheet: &mut Worksheet, styles: &Styles) -> Result<(), BuildError> {
        sheet.merge_range(0, 0, 0, 6, "STREFY MOCY (COGGAN / WKO5)", &styles.banner)?;
        sheet.set_row_height(0, 30)?;

        self.write_ftp_row(sheet, styles)?;
        self.write_power_table(sheet, styles)?;
        self.write_hr_table(sheet, styles)?;

        let notes_title = Format::new().set_bold().set_font_size(12);
        sheet.write_with_format(24, 0, "INSTRUKCJA", &notes_title)?;
        for (i, note) in USAGE_NOTES.iter().enumerate() {
            let row = 25 + i as u32;
            sheet.merge_range(row, 0, row, 6, note, &styles.info)?;
        }

        for (i, width) in COLUMN_WIDTHS.iter().enumerate() {
            sheet.set_column_width(i as u16, *width)?;
        }

        Ok(())
    }
}

impl PowerZonesSheet {
    fn write_ftp_row(&self, sheet: &mut Worksheet, styles: &Styles) -> Result<(), BuildError> {
        let ftp_display = styles
            .formula
            .clone()
            .set_font_size(14)
            .set_align(FormatAlign::Center);

        sheet.write_with_format(2, 0, "Twoje FTP (W):", &styles.bold)?;
        sheet.write_formula_with_format(2, 2, "='Ustawienia'!$B$5", &ftp_display)?;

        sheet.write_with_format(2, 3, "W/kg:", &styles.bold)?;
        let wkg_display = ftp_display.set_num_format("0.00");
        sheet.write_formula_with_format(
            2,
            4,
            r#"=IF('Ustawienia'!$B$4>0, C3/'Ustawienia'!$B$4, "")"#,
            &wkg_display,
        )?;

        Ok(())
    }

    fn write_power_table(&self, sheet: &mut Worksheet, styles: &Styles) -> Result<(), BuildError> {
        for (i, header) in ZONE_TABLE_HEADERS.iter().enumerate() {
            sheet.write_with_format(4, i as u16, *header, &styles.header)?;
        }

        for (i, zone) in POWER_ZONES.iter().enumerate() {
            let row = 5 + i as u32;
            self.write_power_zone_row(sheet, row, zone, colors::ZONES[i])?;
        }

        Ok(())
    }

    fn write_power_zone_row(
        &self,
        sheet: &mut Worksheet,
        row: u32,
        zone: &PowerZone,
        fill: u32,
    ) -> Result<(), BuildError> {
        // Cały wiersz strefy na kolorze strefy
        let zone_cell = Format::new()
            .set_bold()
            .set_background_color(fill)
            .set_align(FormatAlign::Center)
            .set_border(FormatBorder::Thin);
        let name_cell = Format::new()
            .set_bold()
            .set_background_color(fill)
            .set_border(FormatBorder::Thin);
        let pct_cell = Format::new()
            .set_num_format("0%")
            .set_background_color(fill)
            .set_align(FormatAlign::Center)
            .set_border(FormatBorder::Thin);
        let watt_cell = Format::new()
            .set_bold()
            .set_background_color(fill)
            .set_align(FormatAlign::Center)
            .set_border(FormatBorder::Thin);
        let description_cell = Format::new()
            .set_background_color(fill)
            .set_text_wrap()
            .set_border(FormatBorder::Thin);

        sheet.write_with_format(row, 0, format!("Z{}", zone.number), &zone_cell)?;
        sheet.write_with_format(row, 1, zone.name, &name_cell)?;
        sheet.write_with_format(row, 2, zone.min_pct, &pct_cell)?;
        sheet.write_with_format(row, 3, zone.max_pct, &pct_cell)?;

        // Granice w watach przeliczane z FTP w C3
        let excel_row = row + 1;
        sheet.write_formula_with_format(
            row,
            4,
            format!("=ROUND($C$3*C{excel_row}, 0)").as_str(),
            &watt_cell,
        )?;
        sheet.write_formula_with_format(
            row,
            5,
            format!("=ROUND($C$3*D{excel_row}, 0)").as_str(),
            &watt_cell,
        )?;

        sheet.write_with_format(row, 6, zone.description, &description_cell)?;
        sheet.set_row_height(row, 25)?;

        Ok(())
    }

    fn write_hr_table(&self, sheet: &mut Worksheet, styles: &Styles) -> Result<(), BuildError> {
        sheet.merge_range(14, 0, 14, 6, "STREFY TĘTNA", &styles.section_title)?;

        sheet.write_with_format(15, 0, "HR Max:", &styles.bold)?;
        sheet.write_formula_with_format(15, 1, "='Ustawienia'!$B$7", &styles.formula)?;

        for (i, header) in ["Strefa", "Nazwa", "Min %", "Max %", "Min BPM", "Max BPM"]
            .iter()
            .enumerate()
        {
            sheet.write_with_format(17, i as u16, *header, &styles.header)?;
        }

        for (i, zone) in HR_ZONES.iter().enumerate() {
            let row = 18 + i as u32;
            self.write_hr_zone_row(sheet, styles, row, zone)?;
        }

        Ok(())
    }

    fn write_hr_zone_row(
        &self,
        sheet: &mut Worksheet,
        styles: &Styles,
        row: u32,
        zone: &HrZone,
    ) -> Result<(), BuildError> {
        let bpm_cell = Format::new()
            .set_align(FormatAlign::Center)
            .set_border(FormatBorder::Thin);

        sheet.write_with_format(row, 0, format!("Z{}", zone.number), &styles.bold)?;
        sheet.write(row, 1, zone.name)?;
        sheet.write_with_format(row, 2, zone.min_pct, &styles.percent)?;
        sheet.write_with_format(row, 3, zone.max_pct, &styles.percent)?;

        let excel_row = row + 1;
        sheet.write_formula_with_format(
            row,
            4,
            format!("=ROUND($B$16*C{excel_row}, 0)").as_str(),
            &bpm_cell,
        )?;
        sheet.write_formula_with_format(
            row,
            5,
            format!("=ROUND($B$16*D{excel_row}, 0)").as_str(),
            &bpm_cell,
        )?;

        Ok(())
    }
}
