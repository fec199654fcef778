/// Placeholder shown for a column position the row has no value for.
pub const MISSING_VALUE: &str = "0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde_derive::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Deserialize)]
pub struct Column {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub align: Option<Alignment>,
}

impl Column {
    pub fn alignment(&self) -> Alignment {
        self.align.unwrap_or_default()
    }
}

/// A line item of a hierarchical report.
///
/// Values are display strings (as formatted by the backend), positionally
/// aligned with the table's columns. A row without children and a row with an
/// empty children list are both leaves.
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Deserialize)]
pub struct Row {
    pub key: String,
    pub label: String,
    pub values: Vec<String>,
    #[serde(default)]
    pub children: Vec<Row>,
}

impl Row {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Value at the given column position, or [`MISSING_VALUE`] if the row's
    /// value list is shorter than the column list.
    pub fn value_at(&self, index: usize) -> &str {
        self.values
            .get(index)
            .map(String::as_str)
            .unwrap_or(MISSING_VALUE)
    }
}

impl Drop for Row {
    // Children are detached onto a work stack so that each row is dropped with
    // an empty child list, keeping drop depth constant for any tree height.
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut row) = stack.pop() {
            stack.append(&mut row.children);
        }
    }
}

/// One entry of a projected table: a row and its indentation depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatRow<'a> {
    pub row: &'a Row,
    pub depth: usize,
}

// Shorthand constructors.

pub fn row<K, L, V>(key: K, label: L, values: V, children: Vec<Row>) -> Row
where
    K: Into<String>,
    L: Into<String>,
    V: IntoIterator,
    V::Item: Into<String>,
{
    Row {
        key: key.into(),
        label: label.into(),
        values: values.into_iter().map(Into::into).collect(),
        children,
    }
}

pub fn leaf<K, L, V>(key: K, label: L, values: V) -> Row
where
    K: Into<String>,
    L: Into<String>,
    V: IntoIterator,
    V::Item: Into<String>,
{
    row(key, label, values, Vec::new())
}

pub fn column(key: impl Into<String>, label: impl Into<String>) -> Column {
    Column {
        key: key.into(),
        label: label.into(),
        align: None,
    }
}
