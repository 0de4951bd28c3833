//! Chart generation for the flat discography table
//!
//! This module turns a [`FlatTable`] into an output artifact:
//!
//! - **HTML**: Interactive plotly.js sunburst page
//! - **JSON**: Flat table plus sunburst node arrays, for other front ends
//! - **CSV**: The flat table itself
//!
//! # Usage
//!
//! ```ignore
//! use discburst::chart::{self, ChartSpec};
//!
//! // Automatically picks format based on extension
//! chart::generate("songDash.html", &flat, &ChartSpec::default())?;  // HTML
//! chart::generate("songDash.json", &flat, &ChartSpec::default())?;  // JSON
//! chart::generate("songDash.csv", &flat, &ChartSpec::default())?;   // CSV
//! ```

pub mod csv;
pub mod html;
pub mod json;
pub mod palette;
pub mod sunburst;

pub use palette::Palette;
pub use sunburst::Sunburst;

use crate::error::{Error, Result};
use crate::reshape::FlatTable;
use serde::Serialize;
use std::collections::HashSet;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// What to draw: hierarchy levels, the sizing column, colors and a title
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// Flat-table columns from the center ring outwards
    pub path: Vec<String>,
    /// Flat-table column summed to size each arc
    pub values: String,
    pub palette: Palette,
    pub title: String,
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self {
            path: ["root", "year", "lp", "song"].iter().map(|s| s.to_string()).collect(),
            values: "count".to_string(),
            palette: Palette::G10,
            title: "Songs from Albums over Years".to_string(),
        }
    }
}

impl ChartSpec {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Check that the path and value columns exist in the flat table.
    pub fn validate(&self) -> Result<()> {
        sunburst::validate_columns(&self.path, &self.values)
    }
}

/// Headline counts for a flat table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub songs: usize,
    pub albums: usize,
    pub years: usize,
}

impl Summary {
    pub fn from_table(table: &FlatTable) -> Self {
        let albums: HashSet<&str> = table.rows.iter().map(|r| r.lp.as_str()).collect();
        let years: HashSet<&str> = table.rows.iter().map(|r| r.year.as_str()).collect();

        Self {
            songs: table.len(),
            albums: albums.len(),
            years: years.len(),
        }
    }
}

/// Something that can draw a flat table according to a [`ChartSpec`]
pub trait Renderer {
    fn render(&self, table: &FlatTable, spec: &ChartSpec, out: &mut dyn Write) -> Result<()>;
}

/// Pick a renderer from a file extension (case-insensitive)
pub fn renderer_for(path: &Path) -> &'static dyn Renderer {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "html" | "htm" => &html::HtmlRenderer,
        "json" => &json::JsonRenderer,
        _ => &csv::CsvRenderer,
    }
}

/// Render fully into memory.
pub fn render_to_vec(renderer: &dyn Renderer, table: &FlatTable, spec: &ChartSpec) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    renderer.render(table, spec, &mut buf)?;
    Ok(buf)
}

/// Generate an artifact in the appropriate format based on file extension.
///
/// The artifact is rendered before the file is created, so a failed render
/// never leaves a partial file behind. An existing file is overwritten.
pub fn generate<P: AsRef<Path>>(path: P, table: &FlatTable, spec: &ChartSpec) -> Result<()> {
    let path = path.as_ref();
    let bytes = render_to_vec(renderer_for(path), table, spec)?;
    std::fs::write(path, &bytes).map_err(|e| Error::io(path, e))?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote chart");
    Ok(())
}
