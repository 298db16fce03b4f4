use serde::{Deserialize, Serialize};

use crate::cell::CellValue;

/// A raw sheet grid as produced by the loader: rows of cells, no header row
pub type Grid = Vec<Vec<CellValue>>;

/// A contiguous block of non-blank rows cut out of a sheet.
///
/// Rows keep their sheet order and share one column count. Tables are
/// built once during the load pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Name taken from the block's first row, or a generated fallback
    pub name: String,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub(crate) fn new(name: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Table {
            name: name.into(),
            rows,
        }
    }

    /// Number of rows in the table
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Shared column count of every row
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// All rows in sheet order
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Trimmed column-0 labels in row order.
    ///
    /// Rows whose first cell is blank are skipped; duplicate labels are
    /// preserved.
    pub fn row_labels(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter_map(|row| row.first())
            .filter(|cell| !cell.is_blank())
            .map(|cell| cell.as_text().trim().to_string())
            .collect()
    }

    /// First row whose trimmed label equals the trimmed input,
    /// case-sensitive
    pub fn find_row(&self, label: &str) -> Option<&[CellValue]> {
        let wanted = label.trim();
        self.rows
            .iter()
            .find(|row| {
                row.first()
                    .is_some_and(|cell| !cell.is_blank() && cell.as_text().trim() == wanted)
            })
            .map(Vec::as_slice)
    }

    /// Sum the numeric cells of the first row matching `label`, excluding
    /// the label column itself.
    ///
    /// Non-numeric cells contribute nothing, so a row with no numeric
    /// cells sums to 0.0. `None` means no row matched.
    pub fn sum_row(&self, label: &str) -> Option<f64> {
        let row = self.find_row(label)?;
        Some(row.iter().skip(1).filter_map(CellValue::as_number).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            "Budget",
            vec![
                vec![
                    CellValue::text("Revenue"),
                    CellValue::number(100.0),
                    CellValue::number(200.0),
                ],
                vec![
                    CellValue::text("  Costs  "),
                    CellValue::number(50.0),
                    CellValue::text("10%"),
                ],
                vec![CellValue::Empty, CellValue::number(1.0), CellValue::number(2.0)],
                vec![
                    CellValue::text("Costs"),
                    CellValue::number(999.0),
                    CellValue::Empty,
                ],
            ],
        )
    }

    #[test]
    fn test_row_labels_skip_blanks_keep_duplicates() {
        assert_eq!(sample().row_labels(), vec!["Revenue", "Costs", "Costs"]);
    }

    #[test]
    fn test_sum_row_first_match_wins() {
        assert_eq!(sample().sum_row("Costs"), Some(60.0));
    }

    #[test]
    fn test_sum_row_trims_both_sides() {
        assert_eq!(sample().sum_row("  Costs"), Some(60.0));
        assert_eq!(sample().sum_row("Revenue  "), Some(300.0));
    }

    #[test]
    fn test_sum_row_excludes_label_column() {
        let table = Table::new(
            "T",
            vec![vec![CellValue::text("7"), CellValue::number(1.0)]],
        );
        assert_eq!(table.sum_row("7"), Some(1.0));
    }

    #[test]
    fn test_sum_row_without_numeric_cells_is_zero() {
        let table = Table::new(
            "T",
            vec![vec![CellValue::text("only"), CellValue::text("words")]],
        );
        assert_eq!(table.sum_row("only"), Some(0.0));
    }

    #[test]
    fn test_sum_row_missing_label() {
        assert_eq!(sample().sum_row("Margin"), None);
    }
}
