//! v001 -- Initial schema creation.
//!
//! A single `secure_items` table mapping a key to a sealed value.

use rusqlite::Connection;

const UP_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS secure_items (
    key        TEXT PRIMARY KEY NOT NULL,
    value      BLOB NOT NULL,                 -- nonce || XChaCha20-Poly1305 ciphertext
    updated_at TEXT NOT NULL                  -- RFC-3339
);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
