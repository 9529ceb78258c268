pub mod challenges;
pub mod connection;
pub mod players;
pub mod progress;
pub mod rankings;
pub mod setup;
pub mod submissions;
pub mod videos;

pub use connection::{create_pool, get_connection, DbConn, DbPool};

/// Parse a JSON text column into a typed value. Nested documents (metric
/// definitions, achievement lists, score maps) are stored as JSON, mirroring
/// the upstream document store.
pub(crate) fn json_column<T: serde::de::DeserializeOwned>(
    row: &rusqlite::Row,
    idx: usize,
) -> rusqlite::Result<T> {
    let raw: String = row.get(idx)?;
    serde_json::from_str(&raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Conversion error for an enum text column with an unknown value.
pub(crate) fn bad_enum_value(idx: usize, value: &str) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        idx,
        rusqlite::types::Type::Text,
        format!("unrecognized value: {value}").into(),
    )
}
