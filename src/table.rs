//! In-memory tabular data loaded from CSV
//!
//! A [`Table`] is the header row plus every data row as text cells, in file
//! order. Nothing is typed or parsed beyond splitting fields: the reshaping
//! step decides which columns matter.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table in memory. Every row must be as wide as the header.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != headers.len())
        {
            return Err(Error::RaggedRow {
                row,
                expected: headers.len(),
                found,
            });
        }
        Ok(Self { headers, rows })
    }

    /// Read a comma-delimited file with a header row.
    ///
    /// Fails if the file is missing or unreadable, or if any row has a
    /// different number of fields than the header.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let table = Self::from_reader(file)?;
        debug!(
            path = %path.display(),
            rows = table.len(),
            columns = table.headers.len(),
            "loaded table"
        );
        Ok(table)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(reader);

        let headers = rdr.headers()?.iter().map(String::from).collect();
        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(String::from).collect());
        }

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Like [`column_index`](Self::column_index), but a missing column is an error.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| Error::missing_column(name, &self.headers))
    }

    /// Values of one column, top to bottom.
    pub fn column<'a>(&'a self, name: &str) -> Result<impl Iterator<Item = &'a str> + 'a> {
        let idx = self.require_column(name)?;
        Ok(self.rows.iter().map(move |row| row[idx].as_str()))
    }

    /// Rename a column in place.
    ///
    /// Renaming is idempotent: if `to` already exists and `from` does not,
    /// the table is left untouched.
    pub fn rename_column(&mut self, from: &str, to: &str) -> Result<()> {
        match (self.column_index(from), self.column_index(to)) {
            (Some(_), Some(_)) if from == to => Ok(()),
            (Some(_), Some(_)) => Err(Error::ColumnConflict {
                from: from.to_string(),
                to: to.to_string(),
            }),
            (Some(idx), None) => {
                self.headers[idx] = to.to_string();
                Ok(())
            }
            (None, Some(_)) => Ok(()),
            (None, None) => Err(Error::missing_column(from, &self.headers)),
        }
    }
}
