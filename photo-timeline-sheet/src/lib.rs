//! Spreadsheet + photo folders to `TimelineDocument` builder.

mod cells;
mod headers;
mod photos;

use std::fs;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, DataType, Range, Reader};
use chrono::{SubsecRound, Utc};
use photo_timeline_core::{Section, TimelineDocument, WeekRecord};
use tracing::{info, warn};

pub use cells::{parse_week, to_comment, to_iso_date, Cell};
pub use headers::{find_column, normalize_header, ColumnMap};
pub use photos::{list_photos_for_week, DEFAULT_EXTENSIONS};

/// Where one timeline section comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSource {
    pub section: Section,
    pub sheet: String,
    /// Photo folder relative to the build root.
    pub directory: String,
}

/// Inputs and output of a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub workbook: PathBuf,
    pub root: PathBuf,
    pub output: PathBuf,
    pub sections: Vec<SectionSource>,
    pub extensions: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            workbook: PathBuf::from("Aniversario.xlsx"),
            root: PathBuf::from("."),
            output: PathBuf::from("timeline.json"),
            sections: Section::ALL
                .into_iter()
                .map(|section| SectionSource {
                    section,
                    sheet: section.label().to_string(),
                    directory: section.label().to_string(),
                })
                .collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("No se encontró {0}")]
    MissingWorkbook(PathBuf),
    #[error("No se pudo abrir {path}: {message}")]
    Workbook { path: PathBuf, message: String },
    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),
    #[error("No se pudo serializar el timeline: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One worksheet as header names plus data rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SheetTable {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl SheetTable {
    pub fn from_range(name: &str, range: &Range<DataType>) -> Self {
        let mut rows = range.rows();
        let headers = rows
            .next()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        DataType::Empty => String::new(),
                        other => other.to_string().trim().to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            name: name.to_string(),
            headers,
            rows: rows.map(|row| row.iter().map(Cell::from).collect()).collect(),
        }
    }
}

/// A parsed sheet row before photos are attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub week: i64,
    pub start: Option<String>,
    pub end: Option<String>,
    pub comment: Option<String>,
}

/// Parsed rows plus the counters reported for each sheet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SheetReport {
    pub columns: ColumnMap,
    pub total_rows: usize,
    pub non_empty_week: usize,
    pub conversion_failures: usize,
    pub rows: Vec<SheetRow>,
}

/// Turn a worksheet into week rows; rows without a usable week are skipped.
pub fn parse_rows(table: &SheetTable) -> SheetReport {
    let columns = ColumnMap::detect(&table.headers);
    info!(
        sheet = %table.name,
        headers = ?table.headers,
        start = ?columns.start,
        end = ?columns.end,
        week = ?columns.week,
        comment = ?columns.comment,
        "columns detected"
    );

    let mut report = SheetReport {
        columns,
        total_rows: table.rows.len(),
        ..SheetReport::default()
    };

    let Some(week_column) = columns.week else {
        warn!(sheet = %table.name, "no week column found");
        return report;
    };

    for row in &table.rows {
        let week_cell = cell_at(row, Some(week_column));
        if week_cell.is_empty() {
            continue;
        }
        report.non_empty_week += 1;

        let Some(week) = parse_week(week_cell) else {
            report.conversion_failures += 1;
            continue;
        };

        report.rows.push(SheetRow {
            week,
            start: to_iso_date(cell_at(row, columns.start)),
            end: to_iso_date(cell_at(row, columns.end)),
            comment: to_comment(cell_at(row, columns.comment)),
        });
    }

    info!(
        sheet = %table.name,
        total_rows = report.total_rows,
        non_empty_week = report.non_empty_week,
        conversion_failures = report.conversion_failures,
        parsed = report.rows.len(),
        "sheet parsed"
    );
    report
}

static EMPTY_CELL: Cell = Cell::Empty;

fn cell_at(row: &[Cell], column: Option<usize>) -> &Cell {
    column
        .and_then(|index| row.get(index))
        .unwrap_or(&EMPTY_CELL)
}

/// Attach photos to each row and sort by week (stable).
pub fn merge_with_photos(
    rows: &[SheetRow],
    root: &Path,
    section_dir: &str,
    extensions: &[String],
) -> Vec<WeekRecord> {
    let mut records: Vec<WeekRecord> = rows
        .iter()
        .map(|row| WeekRecord {
            week: row.week,
            start: row.start.clone(),
            end: row.end.clone(),
            comment: row.comment.clone(),
            photos: list_photos_for_week(root, section_dir, row.week, extensions),
        })
        .collect();
    records.sort_by_key(|record| record.week);
    records
}

/// Read the workbook and photo folders described by `config`.
pub fn build_document(config: &BuildConfig) -> Result<TimelineDocument, SheetError> {
    if !config.workbook.is_file() {
        return Err(SheetError::MissingWorkbook(config.workbook.clone()));
    }

    let mut workbook =
        open_workbook_auto(&config.workbook).map_err(|err| SheetError::Workbook {
            path: config.workbook.clone(),
            message: err.to_string(),
        })?;

    let mut document = TimelineDocument {
        generated_at: Some(Utc::now().trunc_subsecs(0)),
        pre: Vec::new(),
        post: Vec::new(),
    };

    for source in &config.sections {
        let table = match workbook.worksheet_range(&source.sheet) {
            Some(Ok(range)) => SheetTable::from_range(&source.sheet, &range),
            Some(Err(err)) => {
                warn!(sheet = %source.sheet, error = %err, "cannot read sheet");
                SheetTable::default()
            }
            None => {
                warn!(sheet = %source.sheet, "sheet not found in workbook");
                SheetTable::default()
            }
        };

        let report = parse_rows(&table);
        let records = merge_with_photos(
            &report.rows,
            &config.root,
            &source.directory,
            &config.extensions,
        );

        match source.section {
            Section::Pre => document.pre = records,
            Section::Post => document.post = records,
        }
    }

    Ok(document)
}

/// Write the document as pretty JSON.
pub fn write_document(document: &TimelineDocument, path: &Path) -> Result<(), SheetError> {
    let json = serde_json::to_string_pretty(document)?;
    fs::write(path, json + "\n")?;
    Ok(())
}

/// Build and write in one step, as the CLI does.
pub fn build_and_write(config: &BuildConfig) -> Result<TimelineDocument, SheetError> {
    let document = build_document(config)?;
    write_document(&document, &config.output)?;
    info!(
        output = %config.output.display(),
        pre = document.pre.len(),
        post = document.post.len(),
        "timeline written"
    );
    Ok(document)
}
