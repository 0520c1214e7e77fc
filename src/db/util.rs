/// Quote a SQL identifier such as a table name
///
/// Identifiers cannot be bound as query parameters, so the configured table
/// name is double-quoted with embedded quotes doubled.
pub fn quote_ident(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}
