use std::fs;
use std::path::Path;

use photo_timeline_core::TimelineDocument;
use photo_timeline_sheet::{
    build_document, list_photos_for_week, merge_with_photos, parse_rows, write_document,
    BuildConfig, Cell, SheetError, SheetTable, DEFAULT_EXTENSIONS,
};
use serde_json::{json, Value};
use tempfile::TempDir;

fn extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Không tạo được thư mục");
    }
    fs::write(path, b"").expect("Không tạo được file");
}

fn pre_sheet() -> SheetTable {
    SheetTable {
        name: "Pre".into(),
        headers: vec![
            "Semana".into(),
            "Inicio".into(),
            "Fin".into(),
            "Comentario".into(),
        ],
        rows: vec![
            vec![
                Cell::text("W2"),
                Cell::text("08/01/2024"),
                Cell::text("14/01/2024"),
                Cell::Empty,
            ],
            vec![
                Cell::Int(1),
                Cell::text("2024-01-01"),
                Cell::text("2024-01-07"),
                Cell::text("Primera semana"),
            ],
            vec![Cell::Empty, Cell::text("2024-02-01"), Cell::Empty, Cell::Empty],
            vec![Cell::text("??"), Cell::Empty, Cell::Empty, Cell::Empty],
        ],
    }
}

#[test]
fn photos_are_filtered_and_sorted() {
    let dir = TempDir::new().expect("Không tạo được thư mục tạm");
    touch(dir.path(), "Pre/W1/b.JPG");
    touch(dir.path(), "Pre/W1/A.png");
    touch(dir.path(), "Pre/W1/notes.txt");
    touch(dir.path(), "Pre/W1/nested/c.jpg");

    let photos = list_photos_for_week(dir.path(), "Pre", 1, &extensions());
    assert_eq!(photos, vec!["Pre/W1/A.png", "Pre/W1/b.JPG"]);
    assert!(list_photos_for_week(dir.path(), "Pre", 9, &extensions()).is_empty());
}

#[test]
fn sheet_rows_become_sorted_records() {
    let dir = TempDir::new().expect("Không tạo được thư mục tạm");
    touch(dir.path(), "Pre/W1/a.jpg");
    touch(dir.path(), "Pre/W2/b.webp");

    let report = parse_rows(&pre_sheet());
    assert_eq!(report.total_rows, 4);
    assert_eq!(report.non_empty_week, 3);
    assert_eq!(report.conversion_failures, 1);

    let records = merge_with_photos(&report.rows, dir.path(), "Pre", &extensions());
    let actual = serde_json::to_value(&records).expect("Không serialize records");

    let expected = json!([
        {
            "week": 1,
            "start": "2024-01-01",
            "end": "2024-01-07",
            "comment": "Primera semana",
            "photos": ["Pre/W1/a.jpg"]
        },
        {
            "week": 2,
            "start": "2024-01-08",
            "end": "2024-01-14",
            "photos": ["Pre/W2/b.webp"]
        }
    ]);
    assert_eq!(actual, expected);
}

#[test]
fn sheet_without_week_column_yields_nothing() {
    let table = SheetTable {
        name: "Post".into(),
        headers: vec!["Foto".into(), "Lugar".into()],
        rows: vec![vec![Cell::text("x"), Cell::text("y")]],
    };
    let report = parse_rows(&table);
    assert_eq!(report.total_rows, 1);
    assert!(report.rows.is_empty());
}

#[test]
fn missing_workbook_is_reported() {
    let dir = TempDir::new().expect("Không tạo được thư mục tạm");
    let config = BuildConfig {
        workbook: dir.path().join("Aniversario.xlsx"),
        root: dir.path().to_path_buf(),
        ..BuildConfig::default()
    };

    let err = build_document(&config).unwrap_err();
    assert!(matches!(err, SheetError::MissingWorkbook(_)));
    assert!(err.to_string().starts_with("No se encontró"));
}

#[test]
fn written_document_reads_back() {
    let dir = TempDir::new().expect("Không tạo được thư mục tạm");
    let output = dir.path().join("timeline.json");
    let report = parse_rows(&pre_sheet());
    let document = TimelineDocument {
        generated_at: None,
        pre: merge_with_photos(&report.rows, dir.path(), "Pre", &extensions()),
        post: Vec::new(),
    };

    write_document(&document, &output).expect("Không ghi được timeline");

    let text = fs::read_to_string(&output).expect("Không đọc được timeline");
    let raw: Value = serde_json::from_str(&text).expect("JSON không hợp lệ");
    assert_eq!(raw["post"], json!([]));
    assert_eq!(TimelineDocument::parse(&text), Ok(document));
}
