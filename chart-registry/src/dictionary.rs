//! `object_class` / `attribute_class` / `chart_metadata` tables: the data
//! backing the CM93 style server's `/tiles/cm93/dict.json` endpoint.

use rusqlite::Connection;

use chart_catalogue::{AttributeInfo, ObjectClass};

use crate::RegistryError;

/// Codes are sparse (IHO assigns them in registration order, not
/// contiguously); these bounds cover the full generated catalogue.
const MAX_OBJECT_CODE: u16 = 22000;
const MAX_ATTRIBUTE_CODE: u16 = 41000;

pub fn create_tables(conn: &Connection) -> Result<(), RegistryError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS object_class (
            id INTEGER PRIMARY KEY,
            acronym TEXT NOT NULL,
            name TEXT NOT NULL
        )",
        [],
    )?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS attribute_class (
            id INTEGER PRIMARY KEY,
            acronym TEXT NOT NULL,
            name TEXT NOT NULL
        )",
        [],
    )?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS chart_metadata (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

/// Repopulate the three dictionary tables from the in-process catalogue.
/// Idempotent: safe to call on every ingest run.
pub fn populate(conn: &Connection) -> Result<(), RegistryError> {
    create_tables(conn)?;
    conn.execute("DELETE FROM object_class", [])?;
    conn.execute("DELETE FROM attribute_class", [])?;
    conn.execute("DELETE FROM chart_metadata", [])?;

    for code in 1..=MAX_OBJECT_CODE {
        if let Some(class) = ObjectClass::from_code(code) {
            conn.execute(
                "INSERT INTO object_class (id, acronym, name) VALUES (?1, ?2, ?3)",
                rusqlite::params![code, class.to_string(), class.to_string()],
            )?;
        }
    }

    for code in 1..=MAX_ATTRIBUTE_CODE {
        if let Some(info) = AttributeInfo::from_code(code) {
            conn.execute(
                "INSERT INTO attribute_class (id, acronym, name) VALUES (?1, ?2, ?3)",
                rusqlite::params![info.code, info.acronym, info.name],
            )?;
        }
    }

    conn.execute(
        "INSERT INTO chart_metadata (key, value) VALUES ('source', 'IHO S-57 Edition 3.1 object catalogue')",
        [],
    )?;

    Ok(())
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct DictEntry {
    pub id: u16,
    pub acronym: String,
    pub name: String,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct Dictionary {
    pub object_classes: Vec<DictEntry>,
    pub attribute_classes: Vec<DictEntry>,
    pub metadata: Vec<(String, String)>,
}

/// Read the dictionary tables back out, ready to serialize as
/// `/tiles/cm93/dict.json`.
pub fn load(conn: &Connection) -> Result<Dictionary, RegistryError> {
    let object_classes = load_entries(conn, "object_class")?;
    let attribute_classes = load_entries(conn, "attribute_class")?;

    let mut stmt = conn.prepare("SELECT key, value FROM chart_metadata")?;
    let metadata = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
        .filter_map(|r| r.ok())
        .collect();

    Ok(Dictionary { object_classes, attribute_classes, metadata })
}

fn load_entries(conn: &Connection, table: &str) -> Result<Vec<DictEntry>, RegistryError> {
    let mut stmt = conn.prepare(&format!("SELECT id, acronym, name FROM {table} ORDER BY id"))?;
    let rows = stmt.query_map([], |row| {
        Ok(DictEntry { id: row.get(0)?, acronym: row.get(1)?, name: row.get(2)? })
    })?;
    Ok(rows.filter_map(|r| r.ok()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populate_then_load_round_trips() {
        let conn = Connection::open_in_memory().unwrap();
        populate(&conn).unwrap();
        let dict = load(&conn).unwrap();
        assert!(!dict.object_classes.is_empty());
        assert!(!dict.attribute_classes.is_empty());
        assert!(dict.object_classes.iter().any(|e| e.acronym == "DEPARE"));
    }

    #[test]
    fn populate_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        populate(&conn).unwrap();
        let first = load(&conn).unwrap().object_classes.len();
        populate(&conn).unwrap();
        let second = load(&conn).unwrap().object_classes.len();
        assert_eq!(first, second);
    }
}
