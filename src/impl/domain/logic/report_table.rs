use std::collections::HashSet;

use fractic_server_error::ServerError;

use crate::{
    domain::logic::table_projector::{collect_expandable_keys, flatten},
    entities::{Column, ExpansionState, FlatRow, Row, ValueFormatter},
    errors::DuplicateRowKey,
};

/// A report tree together with its columns and the expand/collapse state of a
/// single view.
///
/// Expansion state lives exactly as long as the tree it was seeded from: it
/// starts fully expanded and is reset, never merged, when the tree is
/// replaced.
#[derive(Debug, Clone)]
pub struct ReportTable {
    columns: Vec<Column>,
    rows: Vec<Row>,
    expandable_keys: Vec<String>,
    expansion: ExpansionState,
}

impl ReportTable {
    /// Row keys must be unique across the whole tree.
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Result<Self, ServerError> {
        ensure_unique_keys(&rows)?;
        let expandable_keys = collect_expandable_keys(&rows);
        let expansion = expandable_keys.iter().cloned().collect();
        Ok(Self {
            columns,
            rows,
            expandable_keys,
            expansion,
        })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn expandable_keys(&self) -> &[String] {
        &self.expandable_keys
    }

    /// Swaps in a new tree and re-seeds the expansion state from it. On error
    /// the table is left untouched.
    pub fn replace_rows(&mut self, rows: Vec<Row>) -> Result<(), ServerError> {
        ensure_unique_keys(&rows)?;
        self.expandable_keys = collect_expandable_keys(&rows);
        self.expansion = self.expandable_keys.iter().cloned().collect();
        self.rows = rows;
        tracing::debug!(
            expandable = self.expandable_keys.len(),
            "report table rows replaced"
        );
        Ok(())
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expansion.is_expanded(key)
    }

    pub fn toggle(&mut self, key: &str) {
        self.expansion.toggle(key);
        tracing::trace!(key, expanded = self.expansion.is_expanded(key), "toggled row");
    }

    pub fn expand_all(&mut self) {
        self.expansion = self.expandable_keys.iter().cloned().collect();
        tracing::trace!("expanded all rows");
    }

    pub fn collapse_all(&mut self) {
        self.expansion.clear();
        tracing::trace!("collapsed all rows");
    }

    pub fn visible_rows(&self) -> Vec<FlatRow<'_>> {
        flatten(&self.rows, &self.expansion)
    }

    /// Display strings for each column of `row`. Positions the row has no
    /// value for read as zero.
    pub fn cells<F>(&self, row: &Row, formatter: &F) -> Vec<String>
    where
        F: ValueFormatter + ?Sized,
    {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, column)| formatter.format(row.value_at(i), &column.key))
            .collect()
    }
}

fn ensure_unique_keys(rows: &[Row]) -> Result<(), ServerError> {
    let mut seen = HashSet::new();
    let mut stack: Vec<&Row> = rows.iter().collect();
    while let Some(row) = stack.pop() {
        if !seen.insert(row.key.as_str()) {
            return Err(DuplicateRowKey::new(&row.key));
        }
        stack.extend(row.children.iter());
    }
    Ok(())
}
