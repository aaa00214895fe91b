//! Sheet-style record store over SQLite.
//!
//! The datastore behaves like a workbook of named sheets with ordered,
//! fixed-position rows: the first row of every sheet is a header that scan
//! logic ignores, and the write primitives are append-row,
//! delete-row-by-position and set-cell-by-position. All of that is emulated
//! on a single SQLite relation so the rest of the crate never touches SQL.

pub mod sheets;

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, params};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS sheet_rows (
    sheet TEXT NOT NULL,
    pos   INTEGER NOT NULL,
    cells TEXT NOT NULL,
    PRIMARY KEY (sheet, pos)
)";

pub struct Workbook {
    conn: Connection,
}

impl Workbook {
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute(SCHEMA, [])?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute(SCHEMA, [])?;
        Ok(Self { conn })
    }

    /// Seed a sheet with its header row when it does not exist yet.
    pub fn ensure_sheet(&self, name: &str, header: &[&str]) -> AppResult<()> {
        if self.sheet_exists(name)? {
            return Ok(());
        }
        let cells: Vec<String> = header.iter().map(|s| s.to_string()).collect();
        self.conn.execute(
            "INSERT INTO sheet_rows (sheet, pos, cells) VALUES (?1, 1, ?2)",
            params![name, serde_json::to_string(&cells)?],
        )?;
        Ok(())
    }

    pub fn sheet_exists(&self, name: &str) -> AppResult<bool> {
        let mut stmt = self
            .conn
            .prepare("SELECT 1 FROM sheet_rows WHERE sheet = ?1 LIMIT 1")?;
        Ok(stmt.exists(params![name])?)
    }

    /// All rows of a sheet except the header, in position order, paired with
    /// the physical position used by delete_row / set_cell. A sheet with no
    /// rows at all yields an empty list; callers that consider the sheet
    /// structurally required must check sheet_exists first.
    pub fn data_rows(&self, name: &str) -> AppResult<Vec<(i64, Vec<String>)>> {
        let mut stmt = self.conn.prepare(
            "SELECT pos, cells FROM sheet_rows
             WHERE sheet = ?1 AND pos > 1
             ORDER BY pos ASC",
        )?;

        let rows = stmt.query_map(params![name], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut out = Vec::new();
        for r in rows {
            let (pos, raw) = r?;
            let cells: Vec<String> = serde_json::from_str(&raw)
                .map_err(|e| AppError::CorruptRow(name.to_string(), e.to_string()))?;
            out.push((pos, cells));
        }
        Ok(out)
    }

    pub fn append_row(&self, name: &str, cells: &[String]) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO sheet_rows (sheet, pos, cells)
             SELECT ?1, COALESCE(MAX(pos), 0) + 1, ?2 FROM sheet_rows WHERE sheet = ?1",
            params![name, serde_json::to_string(cells)?],
        )?;
        Ok(())
    }

    pub fn delete_row(&self, name: &str, pos: i64) -> AppResult<()> {
        self.conn.execute(
            "DELETE FROM sheet_rows WHERE sheet = ?1 AND pos = ?2",
            params![name, pos],
        )?;
        Ok(())
    }

    /// Overwrite a single cell, padding the row when the column does not
    /// exist yet (spreadsheet cells spring into existence on write).
    pub fn set_cell(&self, name: &str, pos: i64, col: usize, value: &str) -> AppResult<()> {
        let raw: String = self
            .conn
            .query_row(
                "SELECT cells FROM sheet_rows WHERE sheet = ?1 AND pos = ?2",
                params![name, pos],
                |row| row.get(0),
            )
            .map_err(AppError::Store)?;

        let mut cells: Vec<String> = serde_json::from_str(&raw)
            .map_err(|e| AppError::CorruptRow(name.to_string(), e.to_string()))?;
        while cells.len() <= col {
            cells.push(String::new());
        }
        cells[col] = value.to_string();

        self.conn.execute(
            "UPDATE sheet_rows SET cells = ?3 WHERE sheet = ?1 AND pos = ?2",
            params![name, pos, serde_json::to_string(&cells)?],
        )?;
        Ok(())
    }
}
