//! kombajn CLI - Dziennik Kolarza generator
//!
//! Command-line interface for generating the WKO5/INSCYD training log
//! workbook.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kombajn_core::config::SHEET_PARAMS;
use kombajn_core::{build_workbook, output};

#[derive(Parser)]
#[command(name = "kombajn")]
#[command(author, version, about = "Generator dziennika treningowego kolarza (WKO5/INSCYD)", long_about = None)]
struct Cli {
    /// Nazwa pliku wyjściowego (domyślnie: dziennik_kolarza_v3.xlsx)
    #[arg(short, long)]
    output: Option<String>,

    /// Katalog wyjściowy (domyślnie: bieżący katalog)
    #[arg(short, long)]
    directory: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose > 0 { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    println!("🚴 Dziennik Kolarza v3 - WKO5/INSCYD Edition");
    println!("{}", "=".repeat(50));

    match run(&cli) {
        Ok(path) => {
            print_success(&path);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[BŁĄD] {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<PathBuf> {
    let mut workbook = build_workbook()?;

    let filename = cli.output.as_deref().unwrap_or(SHEET_PARAMS.output_filename);
    let path = output::save_workbook(&mut workbook, filename, cli.directory.as_deref())?;

    Ok(path)
}

fn print_success(path: &std::path::Path) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    println!("{}", "-".repeat(50));
    println!("GOTOWE! 🚀");
    println!("Plik '{name}' został stworzony.");
    println!("{}", "-".repeat(50));
    println!("\n📖 Jak zacząć:");
    println!("1. Otwórz plik i ustaw FTP w [Ustawienia]");
    println!("2. Sprawdź [Strefy Mocy] - przeliczą się automatycznie");
    println!("3. Wypełniaj [Dziennik] danymi z Garmina/Zwift");
    println!("4. Śledź formę w [Dashboard] (CTL/ATL/TSB)");
    println!("\n💡 Wskazówki:");
    println!("• TSB +10 do +25 = gotowy na wyścig");
    println!("• Tygodniowy TSS: 300-500 (amator), 500-800 (zaawansowany)");
}
