use crate::cell::CellValue;
use crate::table::{Grid, Table};

/// Split a sheet into logical tables at fully-blank rows.
///
/// Blank rows separate blocks and belong to no table; runs of blank rows
/// collapse into a single boundary. Rows are padded to the sheet's width
/// so every table keeps a uniform column count. A sheet with no non-blank
/// rows yields no tables.
pub fn segment(rows: Grid) -> Vec<Table> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);

    let mut tables = Vec::new();
    let mut block: Vec<Vec<CellValue>> = Vec::new();

    for mut row in rows {
        if row.iter().all(CellValue::is_blank) {
            if !block.is_empty() {
                let index = tables.len() + 1;
                tables.push(close_block(std::mem::take(&mut block), index));
            }
        } else {
            row.resize(width, CellValue::Empty);
            block.push(row);
        }
    }

    if !block.is_empty() {
        let index = tables.len() + 1;
        tables.push(close_block(block, index));
    }

    tables
}

/// Name a finished block from its first row: the first cell that is
/// non-blank and does not read "nan" wins. Blocks with no usable cell get
/// "Table {n}", n counting closed blocks within the sheet.
fn close_block(rows: Vec<Vec<CellValue>>, index: usize) -> Table {
    let name = rows[0]
        .iter()
        .filter(|cell| !cell.is_blank())
        .map(|cell| cell.as_text().trim().to_string())
        .find(|text| text != "nan")
        .unwrap_or_else(|| format!("Table {index}"));
    Table::new(name, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::text(s)
    }

    fn num(n: f64) -> CellValue {
        CellValue::number(n)
    }

    fn blank_row() -> Vec<CellValue> {
        vec![CellValue::Empty, CellValue::Empty]
    }

    #[test]
    fn test_empty_sheet_yields_no_tables() {
        assert!(segment(vec![]).is_empty());
        assert!(segment(vec![blank_row(), vec![text("  "), text("")], blank_row()]).is_empty());
    }

    #[test]
    fn test_blank_rows_split_blocks() {
        let tables = segment(vec![
            vec![text("Revenue"), num(100.0), num(200.0)],
            vec![CellValue::Empty, text(""), text("  ")],
            vec![text("Costs"), num(50.0), text("10%")],
        ]);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].name, "Revenue");
        assert_eq!(tables[1].name, "Costs");
        assert_eq!(tables[0].row_count(), 1);
        assert_eq!(tables[1].row_count(), 1);
    }

    #[test]
    fn test_consecutive_blank_rows_collapse() {
        let tables = segment(vec![
            blank_row(),
            vec![text("A"), num(1.0)],
            blank_row(),
            blank_row(),
            vec![text("B"), num(2.0)],
            blank_row(),
        ]);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].name, "A");
        assert_eq!(tables[1].name, "B");
    }

    #[test]
    fn test_trailing_block_closes_without_boundary() {
        let tables = segment(vec![vec![text("Last"), num(1.0)]]);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].name, "Last");
    }

    #[test]
    fn test_name_skips_blank_and_nan_cells() {
        let tables = segment(vec![vec![
            CellValue::Empty,
            text(" nan "),
            text("Quarterly"),
            num(3.0),
        ]]);
        assert_eq!(tables[0].name, "Quarterly");
    }

    #[test]
    fn test_name_comes_from_first_row_only() {
        let tables = segment(vec![
            vec![CellValue::Empty, num(9.0)],
            vec![text("NotMe"), num(1.0)],
        ]);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].name, "9");
    }

    #[test]
    fn test_fallback_name_counts_closed_blocks() {
        let tables = segment(vec![
            vec![text("nan"), text(" ")],
            blank_row(),
            vec![text("Named"), num(1.0)],
            blank_row(),
            vec![text("nan"), CellValue::Empty],
        ]);
        assert_eq!(tables[0].name, "Table 1");
        assert_eq!(tables[1].name, "Named");
        assert_eq!(tables[2].name, "Table 3");
    }

    #[test]
    fn test_rows_padded_to_sheet_width() {
        let tables = segment(vec![
            vec![text("Wide"), num(1.0), num(2.0)],
            vec![text("Narrow")],
        ]);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].column_count(), 3);
        assert_eq!(tables[0].rows()[1][2], CellValue::Empty);
    }
}
