use indexmap::IndexMap;

use crate::error::QueryError;
use crate::segment::segment;
use crate::table::{Grid, Table};

/// Flat name -> table mapping built once at startup.
///
/// Iteration order is insertion order. Re-inserting an existing name
/// replaces the table in place (last write wins), mirroring plain
/// map-insert semantics; `collisions` counts how many entries were
/// replaced that way.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    tables: IndexMap<String, Table>,
    collisions: usize,
}

impl Registry {
    /// Segment every sheet in order and merge the results into one
    /// registry
    pub fn build(sheets: Vec<(String, Grid)>) -> Self {
        let mut registry = Registry::default();
        for (_sheet_name, grid) in sheets {
            for table in segment(grid) {
                if registry.tables.insert(table.name.clone(), table).is_some() {
                    registry.collisions += 1;
                }
            }
        }
        registry
    }

    /// Number of tables in the registry
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Check if the registry holds no tables
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// How many tables were overwritten by a later same-named block
    pub fn collision_count(&self) -> usize {
        self.collisions
    }

    /// Look up a table by exact name
    pub fn get(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Table names in insertion order
    pub fn table_names(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }

    /// Row labels of `table`, or `TableNotFound` listing every valid name
    pub fn row_names(&self, table: &str) -> Result<Vec<String>, QueryError> {
        Ok(self.lookup(table)?.row_labels())
    }

    /// Sum of the numeric cells of `row` in `table`, label column
    /// excluded.
    ///
    /// `TableNotFound` and `RowNotFound` both enumerate the valid
    /// alternatives.
    pub fn row_sum(&self, table: &str, row: &str) -> Result<f64, QueryError> {
        let found = self.lookup(table)?;
        found.sum_row(row).ok_or_else(|| QueryError::RowNotFound {
            table: found.name.clone(),
            row: row.to_string(),
            available: found.row_labels(),
        })
    }

    fn lookup(&self, name: &str) -> Result<&Table, QueryError> {
        self.tables.get(name).ok_or_else(|| QueryError::TableNotFound {
            name: name.to_string(),
            available: self.table_names(),
        })
    }
}
