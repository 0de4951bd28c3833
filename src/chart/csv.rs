//! CSV output of the flat table

use crate::chart::{ChartSpec, Renderer};
use crate::error::Result;
use crate::reshape::{FlatTable, FLAT_COLUMNS};
use std::io::Write;

pub struct CsvRenderer;

impl Renderer for CsvRenderer {
    /// Writes the flat table as-is. The hierarchy path is not used, but the
    /// value column must still name a real column.
    fn render(&self, table: &FlatTable, spec: &ChartSpec, out: &mut dyn Write) -> Result<()> {
        spec.validate()?;

        let mut wtr = ::csv::Writer::from_writer(out);
        wtr.write_record(FLAT_COLUMNS)?;
        for row in &table.rows {
            let count = row.count.to_string();
            wtr.write_record([&row.root, &row.year, &row.lp, &row.song, &count])?;
        }
        wtr.flush()?;
        Ok(())
    }
}
