// ---------------------------------------------------------------------------
// Table – a CSV file held fully in memory
// ---------------------------------------------------------------------------

/// A CSV file parsed into memory: one ordered header plus string rows.
///
/// Invariant: every row has exactly `header.len()` fields, in header order.
/// The CSV reader enforces this at load time; all editing operations
/// preserve it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Ordered column names.
    pub header: Vec<String>,
    /// Data rows, each aligned with `header`.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == header.len()));
        Table { header, rows }
    }

    /// Position of a column in the header, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    /// Subset of `names` that is absent from the header, in request order.
    pub fn missing_columns(&self, names: &[String]) -> Vec<String> {
        names
            .iter()
            .filter(|n| self.column_index(n).is_none())
            .cloned()
            .collect()
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Set every cell of the given columns to the empty string.
    /// Indices must come from [`Table::column_index`].
    pub fn clear_columns(&mut self, indices: &[usize]) {
        for row in &mut self.rows {
            for &i in indices {
                row[i].clear();
            }
        }
    }

    /// Remove one column from the header and from every row.
    pub fn delete_column(&mut self, index: usize) {
        self.header.remove(index);
        for row in &mut self.rows {
            row.remove(index);
        }
    }

    /// Append a new column after the existing ones.
    /// `values` must have one entry per row.
    pub fn push_column(&mut self, name: &str, values: Vec<String>) {
        debug_assert_eq!(values.len(), self.rows.len());
        self.header.push(name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
    }
}
