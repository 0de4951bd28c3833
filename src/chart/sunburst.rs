//! Build sunburst node arrays from the flat table
//!
//! plotly.js draws a sunburst from four parallel arrays: `ids`, `labels`,
//! `parents` and `values`. Each node is one distinct prefix of the hierarchy
//! path, so for the path `root → year → lp → song`:
//!
//! ```text
//! Aesop                              (root, parent "")
//! Aesop/2001                         (year, parent "Aesop")
//! Aesop/2001/Labor Days              (album)
//! Aesop/2001/Labor Days/Daylight     (song, leaf)
//! ```
//!
//! Labels are escaped inside ids (`\` → `\\`, `/` → `\/`), so an album
//! called `Dance/Music` or a date like `9/25/2001` never collides with a
//! deeper branch. The `labels` array keeps the raw text.
//!
//! Every row adds its value to each prefix it passes through, so a node's
//! value is the sum over all rows beneath it, and equals the sum of its
//! children (`branchvalues: "total"`). Rows with an identical full path
//! merge into a single leaf.

use crate::error::{Error, Result};
use crate::reshape::{FlatTable, FLAT_COLUMNS, LABEL_COLUMNS, VALUE_COLUMNS};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Sunburst {
    pub ids: Vec<String>,
    pub labels: Vec<String>,
    pub parents: Vec<String>,
    pub values: Vec<u64>,
}

impl Sunburst {
    /// Build the hierarchy along `path`, sizing arcs by the `values` column.
    ///
    /// Nodes appear in first-seen order.
    pub fn build(table: &FlatTable, path: &[String], values: &str) -> Result<Self> {
        validate_columns(path, values)?;

        let mut sunburst = Sunburst::default();
        let mut index: HashMap<String, usize> = HashMap::new();

        for row in &table.rows {
            let value = row.value(values).unwrap_or(0);
            let mut parent = String::new();

            for (depth, column) in path.iter().enumerate() {
                let label = row.label(column).unwrap_or("");
                let id = if depth == 0 {
                    escape_id_part(label)
                } else {
                    format!("{}/{}", parent, escape_id_part(label))
                };

                let node = match index.get(&id) {
                    Some(&i) => i,
                    None => {
                        let i = sunburst.ids.len();
                        sunburst.ids.push(id.clone());
                        sunburst.labels.push(label.to_string());
                        sunburst.parents.push(parent.clone());
                        sunburst.values.push(0);
                        index.insert(id.clone(), i);
                        i
                    }
                };
                sunburst.values[node] += value;
                parent = id;
            }
        }

        debug!(nodes = sunburst.len(), total = sunburst.total(), "built sunburst");
        Ok(sunburst)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Sum of the top-level node values
    pub fn total(&self) -> u64 {
        self.parents
            .iter()
            .zip(&self.values)
            .filter(|(p, _)| p.is_empty())
            .map(|(_, v)| v)
            .sum()
    }

    pub fn value_of(&self, id: &str) -> Option<u64> {
        self.ids.iter().position(|i| i == id).map(|i| self.values[i])
    }
}

fn escape_id_part(label: &str) -> String {
    label.replace('\\', "\\\\").replace('/', "\\/")
}

/// Every path entry must be a label column and `values` a numeric one.
pub fn validate_columns(path: &[String], values: &str) -> Result<()> {
    let available: Vec<String> = FLAT_COLUMNS.iter().map(|s| s.to_string()).collect();
    if let Some(column) = path.iter().find(|c| !LABEL_COLUMNS.contains(&c.as_str())) {
        return Err(Error::missing_column(column, &available));
    }
    if !VALUE_COLUMNS.contains(&values) {
        return Err(Error::missing_column(values, &available));
    }
    Ok(())
}
