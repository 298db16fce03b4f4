use serde::{Deserialize, Serialize};

/// Raw value held by a single cell, fixed at load time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Empty
    }
}

impl CellValue {
    /// Create a number cell
    pub fn number(value: f64) -> Self {
        CellValue::Number(value)
    }

    /// Create a text cell
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Check if the value is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// A cell is blank if it is empty or its text trims to nothing.
    /// Numbers are never blank.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Number(_) => false,
            CellValue::Text(s) => s.trim().is_empty(),
        }
    }

    /// Coerce the value to a number for summation.
    ///
    /// Text ending in `%` contributes the literal number before the sign
    /// ("10%" is 10.0, not 0.1). Text that does not parse as a float is
    /// `None` and is simply not counted, never an error.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Empty => None,
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => {
                let s = s.trim();
                match s.strip_suffix('%') {
                    Some(stripped) => stripped.trim().parse().ok(),
                    None => s.parse().ok(),
                }
            }
        }
    }

    /// Display form, used for table names and row labels
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Text(s) => s.clone(),
        }
    }
}
