//! # kombajn-core
//!
//! Builds the "Dziennik Kolarza" training log workbook: a five-sheet
//! `.xlsx` template with WKO5/INSCYD metrics (power zones, TSS/IF/NP,
//! CTL/ATL/TSB), calorie/macro targets and carbohydrate planning.
//!
//! The generator only stamps values, formula text and formatting into the
//! grid; every computation is left to the spreadsheet application that
//! opens the file.
//!
//! ## Example
//!
//! ```rust,no_run
//! use kombajn_core::{build_workbook, output};
//!
//! let mut workbook = build_workbook()?;
//! let path = output::save_workbook(&mut workbook, "dziennik.xlsx", None)?;
//! println!("saved to {}", path.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod output;
pub mod sheets;
pub mod styles;
pub mod workbook;

pub use output::OutputError;
pub use sheets::SheetBuilder;
pub use styles::Styles;
pub use workbook::build_workbook;

use thiserror::Error;

/// Errors raised while assembling the in-memory workbook.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Configuration tables are inconsistent (checked before any sheet is built)
    #[error("configuration error: {0}")]
    Config(String),

    /// The underlying xlsx library rejected a write
    #[error("worksheet write failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
