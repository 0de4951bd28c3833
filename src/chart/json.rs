//! JSON chart data for programmatic consumption

use crate::chart::{ChartSpec, Palette, Renderer, Summary, Sunburst};
use crate::error::Result;
use crate::reshape::{FlatRow, FlatTable};
use serde::Serialize;
use std::io::Write;

pub struct JsonRenderer;

#[derive(Serialize)]
pub struct ChartData<'a> {
    pub title: &'a str,
    pub path: &'a [String],
    pub values: &'a str,
    pub palette: Palette,
    pub colors: &'static [&'static str],
    pub summary: Summary,
    pub table: &'a [FlatRow],
    pub sunburst: Sunburst,
}

impl<'a> ChartData<'a> {
    pub fn new(table: &'a FlatTable, spec: &'a ChartSpec) -> Result<Self> {
        Ok(Self {
            title: &spec.title,
            path: &spec.path,
            values: &spec.values,
            palette: spec.palette,
            colors: spec.palette.colors(),
            summary: Summary::from_table(table),
            table: &table.rows,
            sunburst: Sunburst::build(table, &spec.path, &spec.values)?,
        })
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, table: &FlatTable, spec: &ChartSpec, out: &mut dyn Write) -> Result<()> {
        let data = ChartData::new(table, spec)?;
        serde_json::to_writer_pretty(&mut *out, &data)?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::render_to_vec;

    fn table() -> FlatTable {
        FlatTable {
            rows: vec![
                FlatRow {
                    root: "Aesop".into(),
                    year: "2007".into(),
                    lp: "None Shall Pass".into(),
                    song: "Coffee".into(),
                    count: 1,
                },
            ],
        }
    }

    #[test]
    fn test_json_structure() {
        let bytes = render_to_vec(&JsonRenderer, &table(), &ChartSpec::default()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["title"], "Songs from Albums over Years");
        assert_eq!(value["palette"], "g10");
        assert_eq!(value["path"][2], "lp");
        assert_eq!(value["summary"]["songs"], 1);
        assert_eq!(value["table"][0]["song"], "Coffee");
        assert_eq!(value["table"][0]["count"], 1);
        assert_eq!(value["sunburst"]["ids"][3], "Aesop/2007/None Shall Pass/Coffee");
        assert_eq!(value["sunburst"]["values"][0], 1);
    }

    #[test]
    fn test_json_empty_table() {
        let bytes = render_to_vec(&JsonRenderer, &FlatTable::default(), &ChartSpec::default()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(value["table"].as_array().unwrap().is_empty());
        assert!(value["sunburst"]["ids"].as_array().unwrap().is_empty());
    }
}
