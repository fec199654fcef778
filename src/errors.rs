use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidJson, "Invalid {json_type} (invalid JSON format).", { json_type: &str });
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(InvalidIsoCurrencyCode, "Invalid ISO currency code: {code}.", { code: &str });

// Report-related.
define_client_error!(
    DuplicateRowKey,
    "Row key '{key}' appears more than once in the report tree. Row keys must be unique across the whole tree, since expansion state is keyed by row.",
    { key: &str }
);

// Export-related.
define_internal_error!(CsvWriteError, "Failed to write CSV export: {details}.", { details: &str });
