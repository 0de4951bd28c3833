//! discburst - Render a discography as a sunburst chart
//!
//! discburst reads a CSV file with one row per song and draws it as a
//! radial hierarchy: artist in the middle, then release years, then albums,
//! then songs on the outer ring. Arcs are sized by how many songs the album
//! has.
//!
//! # Pipeline
//!
//! 1. **Load**: [`Table::from_path`] reads the CSV with its header row.
//! 2. **Reshape**: [`Reshaper`] renames the title column, counts songs per
//!    album, broadcasts the count onto every row and projects a five-column
//!    [`FlatTable`].
//! 3. **Render**: [`chart::generate`] hands the flat table to a
//!    [`chart::Renderer`] chosen by output extension. The HTML page draws the
//!    chart with plotly.js.
//!
//! # Quick Start
//!
//! ```no_run
//! use discburst::{chart::{self, ChartSpec}, Reshaper};
//!
//! let flat = Reshaper::new().load("aesop_final_analysis.csv")?;
//! chart::generate("songDash.html", &flat, &ChartSpec::default())?;
//! # Ok::<(), discburst::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`table`]: CSV loading and column access
//! - [`reshape`]: Group count, broadcast join and projection
//! - [`chart`]: Sunburst hierarchy and output formatters (HTML, JSON, CSV)
//! - [`serve`]: Local HTTP server for the interactive view

pub mod chart;
pub mod error;
pub mod reshape;
pub mod serve;
pub mod table;

pub use chart::{ChartSpec, Palette, Renderer, Summary, Sunburst};
pub use error::{Error, Result};
pub use reshape::{ColumnMap, FlatRow, FlatTable, Reshaper};
pub use table::Table;

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // PUBLIC API TESTS
    // ==========================================================================

    #[test]
    fn test_public_exports() {
        let _ = Reshaper::new();
        let _ = ChartSpec::default();
        let _ = ColumnMap::default();
        let _: Palette = Palette::G10;
        let _ = Table::default();
    }

    // ==========================================================================
    // END-TO-END PIPELINE
    // ==========================================================================
    //
    // Load → reshape → generate, through the same calls the CLI makes.
    // ==========================================================================

    #[test]
    fn test_pipeline_writes_chart() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("aesop_final_analysis.csv");
        let output = dir.path().join("songDash.html");
        std::fs::write(
            &input,
            "Song Title,Album,Release Date,Length\n\
             Daylight,Labor Days,2001,4:33\n\
             Battery,Labor Days,2001,3:54\n\
             Fumes,Skelethon,2012,4:10\n",
        )
        .unwrap();

        let flat = Reshaper::new().load(&input).unwrap();
        chart::generate(&output, &flat, &ChartSpec::default()).unwrap();

        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.contains("Aesop/2001/Labor Days/Battery"));
        assert!(html.contains("Aesop/2012/Skelethon"));
    }

    #[test]
    fn test_missing_input_creates_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("songDash.html");

        let result = Reshaper::new()
            .load(dir.path().join("aesop_final_analysis.csv"))
            .and_then(|flat| chart::generate(&output, &flat, &ChartSpec::default()));

        assert!(matches!(result, Err(Error::Io { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_column_creates_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("songDash.html");
        std::fs::write(&input, "Track,Album,Release Date\nA,X,2001\n").unwrap();

        let result = Reshaper::new()
            .load(&input)
            .and_then(|flat| chart::generate(&output, &flat, &ChartSpec::default()));

        assert!(matches!(result, Err(Error::MissingColumn { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn test_header_only_input_renders_empty_chart() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("songDash.json");
        std::fs::write(&input, "Song Title,Album,Release Date\n").unwrap();

        let flat = Reshaper::new().load(&input).unwrap();
        assert!(flat.is_empty());
        chart::generate(&output, &flat, &ChartSpec::default()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value["summary"]["songs"], 0);
    }
}
