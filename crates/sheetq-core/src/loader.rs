//! Workbook loading via calamine with format auto-detection

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::cell::CellValue;
use crate::error::LoadError;
use crate::table::Grid;

/// Read every sheet of the workbook at `path` into raw grids.
///
/// Sheets come back in workbook order. Row 0 is data; no header row is
/// assumed. Format detection (xlsx/xls/ods) is delegated to calamine.
pub fn load_workbook(path: impl AsRef<Path>) -> Result<Vec<(String, Grid)>, LoadError> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut sheets = Vec::new();
    for sheet_name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|source| LoadError::Sheet {
                sheet: sheet_name.clone(),
                source,
            })?;
        let grid: Grid = range
            .rows()
            .map(|row| row.iter().map(convert_cell).collect())
            .collect();
        sheets.push((sheet_name, grid));
    }

    Ok(sheets)
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        // Booleans count as 1/0 in row sums
        Data::Bool(b) => CellValue::Number(if *b { 1.0 } else { 0.0 }),
        Data::DateTime(dt) => CellValue::Text(dt.to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(format!("#{:?}", e)),
    }
}
