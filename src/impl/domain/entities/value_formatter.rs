/// Maps a raw cell value to its display string. Called once per drawn cell.
pub trait ValueFormatter {
    fn format(&self, value: &str, column_key: &str) -> String;
}

impl<F> ValueFormatter for F
where
    F: Fn(&str, &str) -> String,
{
    fn format(&self, value: &str, column_key: &str) -> String {
        self(value, column_key)
    }
}

/// Shows values exactly as the backend formatted them.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughFormatter;

impl ValueFormatter for PassthroughFormatter {
    fn format(&self, value: &str, _column_key: &str) -> String {
        value.to_string()
    }
}
