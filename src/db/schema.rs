/// One row per stored record. Values are JSON documents.
pub(crate) const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS kv_store (
    key   TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL
);
"#;
