//! Reshape a discography table into the flat chart table
//!
//! The source table has one row per song. Reshaping:
//!
//! 1. renames the track-title column to a canonical name
//! 2. counts songs per album
//! 3. broadcasts each album's count back onto every row of that album
//! 4. projects five columns: root, year, album, song, count
//!
//! ```text
//! Song Title | Album      | Release Date        root  | year | lp         | song     | count
//! -----------|------------|-------------        ------|------|------------|----------|------
//! Daylight   | Labor Days | 2001          ==>   Aesop | 2001 | Labor Days | Daylight | 2
//! Battery    | Labor Days | 2001                Aesop | 2001 | Labor Days | Battery  | 2
//! Fumes      | Skelethon  | 2012                Aesop | 2012 | Skelethon  | Fumes    | 1
//! ```
//!
//! The join is a broadcast, not a reduction: the output has exactly as many
//! rows as the input, in the same order.

use crate::error::Result;
use crate::table::Table;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Column names of the flat table, in output order
pub const FLAT_COLUMNS: [&str; 5] = ["root", "year", "lp", "song", "count"];

/// Flat-table columns usable as hierarchy levels
pub const LABEL_COLUMNS: [&str; 4] = ["root", "year", "lp", "song"];

/// Flat-table columns usable as arc sizes
pub const VALUE_COLUMNS: [&str; 1] = ["count"];

/// Which source columns hold the title, album and release date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub title: String,
    pub album: String,
    pub date: String,
    /// Name the title column is renamed to
    pub canonical_title: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            title: "Song Title".to_string(),
            album: "Album".to_string(),
            date: "Release Date".to_string(),
            canonical_title: "songTitle".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRow {
    pub root: String,
    pub year: String,
    pub lp: String,
    pub song: String,
    pub count: usize,
}

impl FlatRow {
    /// Text value of a hierarchy column, by flat-table column name.
    pub fn label(&self, column: &str) -> Option<&str> {
        match column {
            "root" => Some(&self.root),
            "year" => Some(&self.year),
            "lp" => Some(&self.lp),
            "song" => Some(&self.song),
            _ => None,
        }
    }

    /// Numeric value of a column usable as the chart's value column.
    pub fn value(&self, column: &str) -> Option<u64> {
        match column {
            "count" => Some(self.count as u64),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlatTable {
    pub rows: Vec<FlatRow>,
}

impl FlatTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> &'static [&'static str] {
        &FLAT_COLUMNS
    }
}

/// Count the rows sharing each distinct value of `album_col`.
pub fn album_counts(table: &Table, album_col: &str) -> Result<HashMap<String, usize>> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for album in table.column(album_col)? {
        *counts.entry(album.to_string()).or_insert(0) += 1;
    }
    Ok(counts)
}

#[derive(Debug, Clone)]
pub struct Reshaper {
    pub columns: ColumnMap,
    pub root_label: String,
}

impl Default for Reshaper {
    fn default() -> Self {
        Self::new()
    }
}

impl Reshaper {
    pub fn new() -> Self {
        Self {
            columns: ColumnMap::default(),
            root_label: "Aesop".to_string(),
        }
    }

    pub fn with_columns(mut self, columns: ColumnMap) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_root_label(mut self, label: impl Into<String>) -> Self {
        self.root_label = label.into();
        self
    }

    /// Load a CSV file and reshape it.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<FlatTable> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading discography");
        self.reshape(Table::from_path(path)?)
    }

    /// Rename, count, broadcast and project. Consumes the table since the
    /// rename happens in place.
    pub fn reshape(&self, mut table: Table) -> Result<FlatTable> {
        let cols = &self.columns;
        table.rename_column(&cols.title, &cols.canonical_title)?;

        let song_idx = table.require_column(&cols.canonical_title)?;
        let album_idx = table.require_column(&cols.album)?;
        let date_idx = table.require_column(&cols.date)?;

        let counts = album_counts(&table, &cols.album)?;
        for (album, count) in &counts {
            debug!(album = %album, count, "album song count");
        }

        let rows: Vec<FlatRow> = table
            .rows()
            .iter()
            .map(|row| {
                let album = &row[album_idx];
                FlatRow {
                    root: self.root_label.clone(),
                    year: row[date_idx].clone(),
                    lp: album.clone(),
                    song: row[song_idx].clone(),
                    // Every album in the table was counted above
                    count: counts.get(album).copied().unwrap_or(0),
                }
            })
            .collect();

        info!(rows = rows.len(), albums = counts.len(), "reshaped table");
        Ok(FlatTable { rows })
    }
}
