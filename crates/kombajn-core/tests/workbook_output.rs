//! End-to-end tests: build the workbook, save it, and inspect the xlsx
//! container.

use std::fs::File;
use std::io::Read;

use kombajn_core::config::SHEET_PARAMS;
use kombajn_core::{build_workbook, output};

const SHEET_NAMES: [&str; 5] = [
    "Ustawienia",
    "Dziennik",
    "Dashboard",
    "Strefy Mocy",
    "Źródła CHO",
];

fn read_archive_entry(path: &std::path::Path, entry: &str) -> String {
    let file = File::open(path).expect("open saved workbook");
    let mut archive = zip::ZipArchive::new(file).expect("xlsx is a zip archive");
    let mut content = String::new();
    archive
        .by_name(entry)
        .unwrap_or_else(|_| panic!("missing archive entry {entry}"))
        .read_to_string(&mut content)
        .expect("entry is valid utf-8");
    content
}

fn cell_style_index(sheet_xml: &str, cell: &str) -> u32 {
    let needle = format!(r#"r="{cell}""#);
    let at = sheet_xml
        .find(&needle)
        .unwrap_or_else(|| panic!("cell {cell} not in sheet xml"));
    let tag = &sheet_xml[at + needle.len()..];
    let tag = &tag[..tag.find('>').expect("unterminated cell tag")];
    let s = tag
        .find(r#"s=""#)
        .map(|i| &tag[i + 3..])
        .unwrap_or_else(|| panic!("cell {cell} has no style index"));
    s[..s.find('"').unwrap()].parse().expect("numeric style index")
}

#[test]
fn saved_workbook_contains_all_sheets_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut workbook = build_workbook().expect("workbook builds");
    let path = output::save_workbook(&mut workbook, "test", Some(dir.path())).unwrap();

    let workbook_xml = read_archive_entry(&path, "xl/workbook.xml");

    assert_eq!(workbook_xml.matches("<sheet ").count(), SHEET_NAMES.len());

    let mut last_pos = 0;
    for name in SHEET_NAMES {
        let needle = format!(r#"name="{name}""#);
        let pos = workbook_xml
            .find(&needle)
            .unwrap_or_else(|| panic!("sheet {name} missing from workbook.xml"));
        assert!(pos > last_pos, "sheet {name} out of order");
        last_pos = pos;
    }
}

#[test]
fn log_headers_land_in_shared_strings() {
    let dir = tempfile::tempdir().unwrap();
    let mut workbook = build_workbook().unwrap();
    let path = output::save_workbook(&mut workbook, "strings", Some(dir.path())).unwrap();

    let strings = read_archive_entry(&path, "xl/sharedStrings.xml");
    for header in ["TSS", "Strefa dom.", "NP (W)", "Nawodnienie (L)"] {
        assert!(strings.contains(header), "missing header text {header}");
    }
    // Instructional text from the settings sheet
    assert!(strings.contains("(Wpisz 0.55 dla 55%)"));
}

#[test]
fn log_template_cells_keep_the_grid_styling() {
    let dir = tempfile::tempdir().unwrap();
    let mut workbook = build_workbook().unwrap();
    let path = output::save_workbook(&mut workbook, "grid", Some(dir.path())).unwrap();

    let log_xml = read_archive_entry(&path, "xl/worksheets/sheet2.xml");

    // TSS template (gray formula column) matches the pre-styled cell below it
    assert_eq!(cell_style_index(&log_xml, "U2"), cell_style_index(&log_xml, "U3"));
    // Dominant-zone template sits on a section boundary (thick right border)
    assert_eq!(cell_style_index(&log_xml, "W2"), cell_style_index(&log_xml, "W3"));
    // Date auto-fill cells stay yellow input cells like A2
    assert_eq!(cell_style_index(&log_xml, "A3"), cell_style_index(&log_xml, "A2"));
    assert_eq!(cell_style_index(&log_xml, "A91"), cell_style_index(&log_xml, "A2"));
}

#[test]
fn zone_and_fueling_text_is_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let mut workbook = build_workbook().unwrap();
    let path = output::save_workbook(&mut workbook, "texts", Some(dir.path())).unwrap();

    let strings = read_archive_entry(&path, "xl/sharedStrings.xml");

    // Zone names carry no translated suffix
    assert!(strings.contains("Aktywna regeneracja"));
    assert!(!strings.contains("(Active Recovery)"));

    assert!(strings.contains(
        "1. Ustaw swoje FTP w arkuszu [Ustawienia] - strefy przeliczą się automatycznie"
    ));
    assert!(strings.contains("💡 Wskazówki spożywania CHO podczas jazdy:"));
    assert!(strings.contains("• Wyścig/intensywny: 80-90g/h (mix glukoza:fruktoza 1:0.8)"));
}

#[test]
fn default_filename_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut workbook = build_workbook().unwrap();
    let path = output::save_workbook(
        &mut workbook,
        SHEET_PARAMS.output_filename,
        Some(dir.path()),
    )
    .unwrap();

    assert!(path.exists());
    assert!(path.to_string_lossy().ends_with("dziennik_kolarza_v3.xlsx"));
    // Saved file is a real zip container with the xlsx content types entry
    let types = read_archive_entry(&path, "[Content_Types].xml");
    assert!(types.contains("spreadsheetml"));
}

#[test]
fn sanitized_filename_is_used_for_the_saved_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut workbook = build_workbook().unwrap();
    let path = output::save_workbook(&mut workbook, "my:plan", Some(dir.path())).unwrap();

    assert!(path.to_string_lossy().ends_with("my_plan.xlsx"));
    assert!(path.starts_with(dir.path().canonicalize().unwrap()));
}
