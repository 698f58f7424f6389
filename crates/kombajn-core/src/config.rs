//! Static configuration for the training log workbook.
//!
//! Every default value, header list, column-width list and sample dataset
//! lives here as compile-time data. [`validate`] checks the cross-table
//! invariants once, before any sheet is built; the builders trust these
//! tables without re-validating.

use crate::BuildError;

/// Default metabolic and goal values for the settings sheet.
#[derive(Clone, Copy, Debug)]
pub struct Defaults {
    /// Basal Metabolic Rate (kcal)
    pub bmr: u32,
    /// Thermic Effect of Food (kcal)
    pub tef: u32,
    /// Non-Exercise Activity Thermogenesis (kcal)
    pub neat: u32,
    /// Planned daily calorie deficit (kcal)
    pub deficit: u32,
    /// Protein target (g per kg of body weight)
    pub protein_ratio: f64,
    /// Fat target (fraction of TDEE)
    pub fat_ratio: f64,
}

pub const DEFAULTS: Defaults = Defaults {
    bmr: 1800,
    tef: 200,
    neat: 300,
    deficit: 500,
    protein_ratio: 2.0,
    fat_ratio: 0.25,
};

/// Default power metrics (WKO5).
#[derive(Clone, Copy, Debug)]
pub struct PowerDefaults {
    /// Functional Threshold Power (W)
    pub ftp: u32,
    /// Maximum heart rate (bpm)
    pub max_hr: u32,
    /// Resting heart rate (bpm)
    pub resting_hr: u32,
    /// Body weight (kg), used for W/kg
    pub weight_kg: f64,
}

pub const POWER_DEFAULTS: PowerDefaults = PowerDefaults {
    ftp: 250,
    max_hr: 185,
    resting_hr: 50,
    weight_kg: 75.0,
};

/// Default metabolic profile values (INSCYD).
#[derive(Clone, Copy, Debug)]
pub struct MetabolicDefaults {
    /// Maximal oxygen uptake (ml/kg/min)
    pub vo2max: f64,
    /// Maximal lactate production rate (mmol/L/s)
    pub vlamax: f64,
    /// Fraction of FTP where fat oxidation peaks
    pub fatmax_percent: f64,
}

pub const METABOLIC_DEFAULTS: MetabolicDefaults = MetabolicDefaults {
    vo2max: 55.0,
    vlamax: 0.50,
    fatmax_percent: 0.55,
};

/// One Coggan power zone.
#[derive(Clone, Copy, Debug)]
pub struct PowerZone {
    pub number: u8,
    pub name: &'static str,
    pub name_en: &'static str,
    pub min_pct: f64,
    pub max_pct: f64,
    pub description: &'static str,
}

/// The 7 Coggan power zones, as percentages of FTP.
pub const POWER_ZONES: [PowerZone; 7] = [
    PowerZone {
        number: 1,
        name: "Aktywna regeneracja",
        name_en: "Active Recovery",
        min_pct: 0.00,
        max_pct: 0.55,
        description: "Bardzo łatwa jazda, regeneracja po ciężkim treningu",
    },
    PowerZone {
        number: 2,
        name: "Wytrzymałość",
        name_en: "Endurance",
        min_pct: 0.55,
        max_pct: 0.75,
        description: "Długie jazdy aerobowe, budowanie bazy tlenowej",
    },
    PowerZone {
        number: 3,
        name: "Tempo",
        name_en: "Tempo",
        min_pct: 0.75,
        max_pct: 0.90,
        description: "Umiarkowanie ciężka praca, trening tempa",
    },
    PowerZone {
        number: 4,
        name: "Próg (Sweet Spot)",
        name_en: "Threshold",
        min_pct: 0.90,
        max_pct: 1.05,
        description: "Praca na progu FTP, bardzo efektywny trening",
    },
    PowerZone {
        number: 5,
        name: "VO2max",
        name_en: "VO2max",
        min_pct: 1.05,
        max_pct: 1.20,
        description: "Krótkie interwały 3-8 min, rozwój VO2max",
    },
    PowerZone {
        number: 6,
        name: "Anaerobowa",
        name_en: "Anaerobic",
        min_pct: 1.20,
        max_pct: 1.50,
        description: "Bardzo krótkie wysiłki 30s-2min, praca glikolityczna",
    },
    PowerZone {
        number: 7,
        name: "Nerwowo-mięśniowa",
        name_en: "Neuromuscular",
        min_pct: 1.50,
        max_pct: 3.00,
        description: "Sprinty <30s, maksymalna moc rekrutacji mięśni",
    },
];

/// One heart-rate zone as percentages of HRmax.
#[derive(Clone, Copy, Debug)]
pub struct HrZone {
    pub number: u8,
    pub name: &'static str,
    pub min_pct: f64,
    pub max_pct: f64,
}

pub const HR_ZONES: [HrZone; 5] = [
    HrZone { number: 1, name: "Z1 - Regeneracja", min_pct: 0.50, max_pct: 0.60 },
    HrZone { number: 2, name: "Z2 - Wytrzymałość", min_pct: 0.60, max_pct: 0.70 },
    HrZone { number: 3, name: "Z3 - Tempo", min_pct: 0.70, max_pct: 0.80 },
    HrZone { number: 4, name: "Z4 - Próg", min_pct: 0.80, max_pct: 0.90 },
    HrZone { number: 5, name: "Z5 - VO2max", min_pct: 0.90, max_pct: 1.00 },
];

/// Sheet generation parameters.
#[derive(Clone, Copy, Debug)]
pub struct SheetParams {
    /// Number of pre-styled data rows in the log sheet
    pub max_log_rows: u32,
    /// Number of rows pre-filled with the date-increment formula
    pub initial_days_count: u32,
    /// Default output filename
    pub output_filename: &'static str,
    /// Chronic Training Load window (days)
    pub ctl_days: u32,
    /// Acute Training Load window (days)
    pub atl_days: u32,
}

pub const SHEET_PARAMS: SheetParams = SheetParams {
    max_log_rows: 1000,
    initial_days_count: 90,
    output_filename: "dziennik_kolarza_v3.xlsx",
    ctl_days: 42,
    atl_days: 7,
};

/// Color palette (RGB hex, as consumed by `rust_xlsxwriter`).
pub mod colors {
    /// Header background (dark blue)
    pub const HEADER_BG: u32 = 0x2E5090;
    /// Header text (white)
    pub const HEADER_TEXT: u32 = 0xFFFFFF;
    /// Input cell background (light yellow)
    pub const INPUT_BG: u32 = 0xFFFFCC;
    /// Formula cell background (light gray)
    pub const FORMULA_BG: u32 = 0xE8E8E8;
    /// Informational text (gray)
    pub const INFO_TEXT: u32 = 0x666666;

    /// Power zone fills Z1..Z7
    pub const ZONES: [u32; 7] = [
        0xB4C6E7, // Z1 light blue - recovery
        0x92D050, // Z2 green - endurance
        0xFFEB9C, // Z3 yellow - tempo
        0xFFC000, // Z4 orange - threshold
        0xFF6600, // Z5 dark orange - VO2max
        0xFF0000, // Z6 red - anaerobic
        0x7030A0, // Z7 purple - neuromuscular
    ];
}

/// Column headers of the `Dziennik` (log) sheet, in order.
pub const LOG_HEADERS: [&str; 42] = [
    // Sekcja 1: ogólne
    "Data",
    "Tydzień",
    "Dzień tyg.",
    // Sekcja 2: fizjologia (rano)
    "Waga (kg)",
    "Waga śr. 7d",
    "RHR",
    "HRV (ms)",
    "Sen (h)",
    "Jakość snu (1-5)",
    "Samopoczucie (1-5)",
    // Sekcja 3: dane treningu (z Garmin/Zwift)
    "Czas jazdy (min)",
    "Dystans (km)",
    "Przewyższenia (m)",
    "Avg Power (W)",
    "NP (W)",
    "Max Power (W)",
    "Avg Kadencja",
    "Avg HR",
    "Max HR",
    // Sekcja 4: metryki WKO5 (formuły)
    "IF",
    "TSS",
    "W/kg (NP)",
    "Strefa dom.",
    // Sekcja 5: PMC (formuły)
    "CTL",
    "ATL",
    "TSB",
    // Sekcja 6: kalorie
    "Kcal treningu",
    "TDEE",
    "CEL Kcal",
    "Spożyte Kcal",
    "Bilans Kcal",
    // Sekcja 7: makroskładniki
    "CEL B (g)",
    "CEL T (g)",
    "CEL W (g)",
    "Spoż. B (g)",
    "Spoż. T (g)",
    "Spoż. W (g)",
    // Sekcja 8: CHO podczas treningu
    "CHO/h (g)",
    "Nawodnienie (L)",
    // Sekcja 9: notatki
    "Typ treningu",
    "RPE (1-10)",
    "Notatki",
];

/// Log columns filled in by hand (1-based, yellow fill).
pub const LOG_INPUT_COLUMNS: [u16; 25] = [
    1, // Data
    4, // Waga (kg)
    6, 7, // RHR, HRV
    8, 9, 10, // Sen, Jakość snu, Samopoczucie
    11, 12, 13, // Czas, Dystans, Przewyższenia
    14, 15, 16, // Avg/NP/Max Power
    17, 18, 19, // Kadencja, Avg/Max HR
    30, // Spożyte Kcal
    35, 36, 37, // Spożyte makro
    38, 39, // CHO/h, Nawodnienie
    40, 41, 42, // Typ, RPE, Notatki
];

/// Log columns closing a logical section (1-based, thick right border).
pub const LOG_SECTION_END_COLUMNS: [u16; 8] = [
    3,  // po Dzień tyg.
    10, // po Samopoczucie
    19, // po Max HR
    23, // po Strefa dominująca
    26, // po TSB
    31, // po Bilans Kcal
    37, // po Spożyte Węgle
    39, // po Nawodnienie
];

/// Log column widths, one per header.
pub const LOG_COLUMN_WIDTHS: [f64; 42] = [
    12.0, 6.0, 6.0, // Data, Tydzień, Dzień
    8.0, 8.0, 6.0, 8.0, // Waga, Waga śr, RHR, HRV
    6.0, 10.0, 12.0, // Sen, Jakość snu, Samopoczucie
    10.0, 10.0, 12.0, // Czas, Dystans, Przewyższenia
    10.0, 10.0, 10.0, // Avg/NP/Max Power
    10.0, 8.0, 8.0, // Kadencja, HR
    6.0, 8.0, 8.0, 10.0, // IF, TSS, W/kg, Strefa
    8.0, 8.0, 8.0, // CTL, ATL, TSB
    10.0, 10.0, 10.0, 10.0, 10.0, // Kalorie
    8.0, 8.0, 8.0, // Cele makro
    8.0, 8.0, 8.0, // Spożyte makro
    8.0, 10.0, // CHO/h, Nawodnienie
    15.0, 8.0, 30.0, // Typ, RPE, Notatki
];

/// Column headers of the `Źródła CHO` sheet.
pub const CHO_HEADERS: [&str; 9] = [
    "Nazwa produktu",
    "Porcja (g)",
    "CHO / 100g (g)",
    "kcal / 100g",
    "CHO w porcji (g)",
    "kcal w porcji",
    "Typ",
    "Szybkość wchłaniania",
    "Uwagi",
];

pub const CHO_COLUMN_WIDTHS: [f64; 9] = [30.0, 12.0, 12.0, 12.0, 14.0, 12.0, 15.0, 18.0, 35.0];

/// One sample carbohydrate product row.
#[derive(Clone, Copy, Debug)]
pub struct ChoProduct {
    pub name: &'static str,
    pub portion_g: f64,
    pub cho_per_100g: f64,
    pub kcal_per_100g: f64,
    pub product_type: &'static str,
    pub absorption: &'static str,
    pub note: &'static str,
}

/// Sample carbohydrate products, cycling-oriented.
pub const CHO_SAMPLE_DATA: [ChoProduct; 15] = [
    ChoProduct { name: "Żel SiS GO", portion_g: 60.0, cho_per_100g: 36.7, kcal_per_100g: 138.0, product_type: "żel", absorption: "szybka", note: "Popularny żel bez kofeiny" },
    ChoProduct { name: "Żel Maurten 100", portion_g: 40.0, cho_per_100g: 62.5, kcal_per_100g: 250.0, product_type: "żel", absorption: "szybka", note: "Żel hydrożelowy, łagodny dla żołądka" },
    ChoProduct { name: "Żel z kofeiną", portion_g: 40.0, cho_per_100g: 55.0, kcal_per_100g: 200.0, product_type: "żel", absorption: "szybka", note: "Na ostatnie godziny wyścigu" },
    ChoProduct { name: "Baton Clif", portion_g: 68.0, cho_per_100g: 66.0, kcal_per_100g: 400.0, product_type: "baton", absorption: "średnia", note: "Dobre na długie jazdy w Z2" },
    ChoProduct { name: "Daktyle Medjool (3 szt)", portion_g: 72.0, cho_per_100g: 75.0, kcal_per_100g: 277.0, product_type: "naturalny", absorption: "średnia", note: "Naturalne źródło CHO" },
    ChoProduct { name: "Banan", portion_g: 120.0, cho_per_100g: 23.0, kcal_per_100g: 89.0, product_type: "naturalny", absorption: "średnia", note: "Klasyka, dobry na przerwę" },
    ChoProduct { name: "Napój Maurten 320", portion_g: 500.0, cho_per_100g: 16.0, kcal_per_100g: 64.0, product_type: "napój", absorption: "szybka", note: "80g CHO na bidon 500ml" },
    ChoProduct { name: "Napój SiS GO", portion_g: 500.0, cho_per_100g: 7.2, kcal_per_100g: 29.0, product_type: "napój", absorption: "szybka", note: "36g CHO na bidon" },
    ChoProduct { name: "Maltodekstryna", portion_g: 30.0, cho_per_100g: 100.0, kcal_per_100g: 400.0, product_type: "proszek", absorption: "bardzo szybka", note: "Do własnych miksów" },
    ChoProduct { name: "Fruktoza", portion_g: 30.0, cho_per_100g: 100.0, kcal_per_100g: 399.0, product_type: "proszek", absorption: "średnia", note: "Mieszać z MD 1:0.8" },
    ChoProduct { name: "Mix MD:Fruktoza 1:0.8", portion_g: 54.0, cho_per_100g: 100.0, kcal_per_100g: 399.0, product_type: "mieszanka", absorption: "szybka", note: "Optymalny stosunek 90g/h" },
    ChoProduct { name: "Rodzynki", portion_g: 40.0, cho_per_100g: 79.0, kcal_per_100g: 299.0, product_type: "naturalny", absorption: "średnia", note: "Wygodne w kieszeni" },
    ChoProduct { name: "Żelki Haribo", portion_g: 50.0, cho_per_100g: 77.0, kcal_per_100g: 343.0, product_type: "słodycze", absorption: "szybka", note: "Szybkie cukry na sprint" },
    ChoProduct { name: "Ryż biały (ugotowany)", portion_g: 150.0, cho_per_100g: 28.0, kcal_per_100g: 130.0, product_type: "posiłek", absorption: "średnia", note: "Carb-loading dzień przed" },
    ChoProduct { name: "Makaron (ugotowany)", portion_g: 200.0, cho_per_100g: 25.0, kcal_per_100g: 131.0, product_type: "posiłek", absorption: "średnia", note: "Bazowy posiłek kolarski" },
];

/// Suggested values for the log's "Typ treningu" column.
pub const TRAINING_TYPES: [&str; 12] = [
    "Z2 Wytrzymałość",
    "Z3 Tempo",
    "Sweet Spot",
    "FTP Interwały",
    "VO2max Interwały",
    "Sprinty",
    "Wyścig/Zawody",
    "Regeneracja",
    "Test FTP",
    "Grupowa jazda",
    "Commute",
    "Inne",
];

/// Checks cross-table consistency. Must run before any sheet is built.
pub fn validate() -> Result<(), BuildError> {
    if LOG_HEADERS.len() != LOG_COLUMN_WIDTHS.len() {
        return Err(BuildError::Config(format!(
            "LOG_HEADERS ({}) != LOG_COLUMN_WIDTHS ({})",
            LOG_HEADERS.len(),
            LOG_COLUMN_WIDTHS.len()
        )));
    }

    let max_col = LOG_HEADERS.len() as u16;
    let invalid_input: Vec<u16> = LOG_INPUT_COLUMNS
        .iter()
        .copied()
        .filter(|&c| c == 0 || c > max_col)
        .collect();
    if !invalid_input.is_empty() {
        return Err(BuildError::Config(format!(
            "LOG_INPUT_COLUMNS out of range 1-{max_col}: {invalid_input:?}"
        )));
    }

    let invalid_section: Vec<u16> = LOG_SECTION_END_COLUMNS
        .iter()
        .copied()
        .filter(|&c| c == 0 || c > max_col)
        .collect();
    if !invalid_section.is_empty() {
        return Err(BuildError::Config(format!(
            "LOG_SECTION_END_COLUMNS out of range 1-{max_col}: {invalid_section:?}"
        )));
    }

    if CHO_HEADERS.len() != CHO_COLUMN_WIDTHS.len() {
        return Err(BuildError::Config(format!(
            "CHO_HEADERS ({}) != CHO_COLUMN_WIDTHS ({})",
            CHO_HEADERS.len(),
            CHO_COLUMN_WIDTHS.len()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn shipped_tables_validate() {
        assert!(validate().is_ok());
    }

    #[test]
    fn defaults_values() {
        assert_eq!(DEFAULTS.bmr, 1800);
        assert_eq!(DEFAULTS.tef, 200);
        assert_eq!(DEFAULTS.neat, 300);
        assert_eq!(DEFAULTS.deficit, 500);
    }

    #[test]
    fn power_defaults() {
        assert_eq!(POWER_DEFAULTS.ftp, 250);
        assert_eq!(POWER_DEFAULTS.max_hr, 185);
        assert_eq!(POWER_DEFAULTS.weight_kg, 75.0);
    }

    #[test]
    fn metabolic_defaults() {
        assert_eq!(METABOLIC_DEFAULTS.vo2max, 55.0);
        assert_eq!(METABOLIC_DEFAULTS.vlamax, 0.50);
    }

    #[test]
    fn power_zone_structure() {
        assert_eq!(POWER_ZONES.len(), 7);
        let z1 = &POWER_ZONES[0];
        assert_eq!(z1.number, 1);
        assert_eq!(z1.name_en, "Active Recovery");
        assert_eq!(z1.min_pct, 0.0);
        assert_eq!(z1.max_pct, 0.55);
        // Zone boundaries are contiguous
        for pair in POWER_ZONES.windows(2) {
            assert_eq!(pair[0].max_pct, pair[1].min_pct);
        }
    }

    #[test]
    fn sheet_params() {
        assert_eq!(SHEET_PARAMS.max_log_rows, 1000);
        assert_eq!(SHEET_PARAMS.ctl_days, 42);
        assert_eq!(SHEET_PARAMS.atl_days, 7);
    }

    #[test]
    fn log_headers_contain_power_metrics() {
        assert_eq!(LOG_HEADERS.len(), 42);
        for metric in ["NP (W)", "IF", "TSS", "CTL", "ATL", "TSB"] {
            assert!(LOG_HEADERS.contains(&metric), "missing header: {metric}");
        }
    }

    #[test]
    fn input_and_section_columns_in_range() {
        let max = LOG_HEADERS.len() as u16;
        assert!(LOG_INPUT_COLUMNS.iter().all(|&c| (1..=max).contains(&c)));
        assert!(LOG_SECTION_END_COLUMNS.iter().all(|&c| (1..=max).contains(&c)));
    }

    #[test]
    fn training_types_are_unique() {
        let mut types = TRAINING_TYPES.to_vec();
        types.sort_unstable();
        types.dedup();
        assert_eq!(types.len(), TRAINING_TYPES.len());
    }

    #[test]
    fn cho_tables_match() {
        assert_eq!(CHO_HEADERS.len(), CHO_COLUMN_WIDTHS.len());
        assert_eq!(CHO_SAMPLE_DATA.len(), 15);
    }
}
