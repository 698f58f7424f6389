//! Shared cell styles.
//!
//! All visual identity (header color, input highlight, formula highlight,
//! border weights) is defined once here and applied by reference. Because
//! `rust_xlsxwriter` bundles font, fill and border into a single [`Format`],
//! the registry pre-combines the variants the builders need.

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder};

use crate::config::colors;

/// Pre-built formats used across all sheets.
#[derive(Debug)]
pub struct Styles {
    /// Column header: bold white on blue, centered, wrapped, thin border
    pub header: Format,
    /// Column header closing a section: thick right border
    pub header_section_end: Format,
    /// User-entered cell: yellow fill, thin border
    pub input: Format,
    /// User-entered cell closing a section
    pub input_section_end: Format,
    /// Yellow fill without borders, for loosely formatted input areas
    pub input_fill: Format,
    /// Date input cell: yellow fill plus `yyyy-mm-dd`
    pub input_date: Format,
    /// Computed cell: bold on gray fill, thin border
    pub formula: Format,
    /// Computed cell closing a section
    pub formula_section_end: Format,
    /// Informational text: italic gray
    pub info: Format,
    /// Informational text inside an input cell: italic gray on yellow
    pub info_input: Format,
    /// Section title inside a sheet: bold, size 14
    pub section_title: Format,
    /// Full-width sheet banner: bold white on blue
    pub banner: Format,
    /// Plain bold label
    pub bold: Format,
    /// Percent display (`0%`)
    pub percent: Format,
}

impl Styles {
    pub fn new() -> Self {
        let header_base = Format::new()
            .set_bold()
            .set_font_color(colors::HEADER_TEXT)
            .set_background_color(colors::HEADER_BG)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap();

        let input_base = Format::new().set_background_color(colors::INPUT_BG);
        let formula_base = Format::new()
            .set_bold()
            .set_background_color(colors::FORMULA_BG);

        Self {
            header: header_base.clone().set_border(FormatBorder::Thin),
            header_section_end: header_base
                .set_border(FormatBorder::Thin)
                .set_border_right(FormatBorder::Thick),
            input: input_base.clone().set_border(FormatBorder::Thin),
            input_section_end: input_base
                .clone()
                .set_border(FormatBorder::Thin)
                .set_border_right(FormatBorder::Thick),
            input_fill: input_base.clone(),
            input_date: input_base
                .set_border(FormatBorder::Thin)
                .set_num_format("yyyy-mm-dd"),
            formula: formula_base.clone().set_border(FormatBorder::Thin),
            formula_section_end: formula_base
                .set_border(FormatBorder::Thin)
                .set_border_right(FormatBorder::Thick),
            info: Format::new().set_italic().set_font_color(colors::INFO_TEXT),
            info_input: Format::new()
                .set_italic()
                .set_font_color(colors::INFO_TEXT)
                .set_background_color(colors::INPUT_BG)
                .set_border(FormatBorder::Thin),
            section_title: Format::new().set_bold().set_font_size(14),
            banner: Format::new()
                .set_bold()
                .set_font_size(14)
                .set_font_color(colors::HEADER_TEXT)
                .set_background_color(colors::HEADER_BG),
            bold: Format::new().set_bold(),
            percent: Format::new()
                .set_num_format("0%")
                .set_align(FormatAlign::Center)
                .set_border(FormatBorder::Thin),
        }
    }

    /// Header format for a column, thick-bordered at section ends.
    pub fn header_for(&self, is_section_end: bool) -> &Format {
        if is_section_end {
            &self.header_section_end
        } else {
            &self.header
        }
    }

    /// Grid-cell format for a column, by input/formula role and section position.
    pub fn grid_for(&self, is_input: bool, is_section_end: bool) -> &Format {
        match (is_input, is_section_end) {
            (true, true) => &self.input_section_end,
            (true, false) => &self.input,
            (false, true) => &self.formula_section_end,
            (false, false) => &self.formula,
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::new()
    }
}
