use super::*;

use rusqlite::{Connection, OptionalExtension, Row, params};
use tracing::debug;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS contacts (
        id    INTEGER PRIMARY KEY,
        name  TEXT,
        phone TEXT,
        email TEXT
    );
";

/// Contacts kept in a single SQLite table.
pub struct SqliteStorage {
    pub medium: String,
    conn: Connection,
}

impl SqliteStorage {
    /// Open or create the database file, creating its directory if needed.
    pub fn open(path: &Path) -> Result<Self, AppError> {
        create_file_parent(path)?;
        debug!(path = %path.display(), "opening contact database");

        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, AppError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, AppError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            medium: "sqlite".to_string(),
            conn,
        })
    }

    fn row_to_contact(row: &Row<'_>) -> rusqlite::Result<Contact> {
        // Columns are nullable; rows written by other tools may hold NULL.
        Ok(Contact {
            id: row.get(0)?,
            name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            phone: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            email: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        })
    }
}

impl ContactStore for SqliteStorage {
    fn create(&mut self, fields: &ContactFields) -> Result<i64, AppError> {
        self.conn.execute(
            "INSERT INTO contacts (name, phone, email) VALUES (?1, ?2, ?3)",
            params![fields.name, fields.phone, fields.email],
        )?;
        let id = self.conn.last_insert_rowid();

        debug!(id, "inserted contact row");
        Ok(id)
    }

    fn read(&self, id: i64) -> Result<Option<Contact>, AppError> {
        let contact = self
            .conn
            .query_row(
                "SELECT id, name, phone, email FROM contacts WHERE id = ?1",
                params![id],
                Self::row_to_contact,
            )
            .optional()?;
        Ok(contact)
    }

    fn read_all(&self) -> Result<Vec<Contact>, AppError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, phone, email FROM contacts ORDER BY id")?;

        let contacts = stmt
            .query_map([], Self::row_to_contact)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(contacts)
    }

    fn update(&mut self, id: i64, fields: &ContactFields) -> Result<bool, AppError> {
        let affected = self.conn.execute(
            "UPDATE contacts SET name = ?1, phone = ?2, email = ?3 WHERE id = ?4",
            params![fields.name, fields.phone, fields.email, id],
        )?;

        debug!(id, affected, "updated contact row");
        Ok(affected > 0)
    }

    fn delete(&mut self, id: i64) -> Result<bool, AppError> {
        let affected = self
            .conn
            .execute("DELETE FROM contacts WHERE id = ?1", params![id])?;

        debug!(id, affected, "deleted contact row");
        Ok(affected > 0)
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
