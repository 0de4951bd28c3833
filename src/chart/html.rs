//! HTML sunburst page with plotly.js

use crate::chart::{ChartSpec, Renderer, Summary, Sunburst};
use crate::error::Result;
use crate::reshape::FlatTable;
use chrono::Local;
use serde_json::json;
use std::io::Write;

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, table: &FlatTable, spec: &ChartSpec, out: &mut dyn Write) -> Result<()> {
        let sunburst = Sunburst::build(table, &spec.path, &spec.values)?;
        let summary = Summary::from_table(table);
        let (trace, layout) = plot_data(&sunburst, spec);

        write!(out, r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="{plotly_js}"></script>
    <style>
        :root {{
            --bg: #0d1117;
            --card: #161b22;
            --border: #30363d;
            --text: #e6edf3;
            --dim: #7d8590;
            --accent: #58a6ff;
        }}
        * {{ box-sizing: border-box; margin: 0; padding: 0; }}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans', Helvetica, Arial, sans-serif;
            background: var(--bg);
            color: var(--text);
            line-height: 1.5;
        }}
        .container {{ max-width: 1200px; margin: 0 auto; padding: 2rem; }}

        /* Stats Row */
        .stats {{
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 1rem;
            margin-bottom: 2rem;
        }}
        .stat {{
            background: var(--card);
            border: 1px solid var(--border);
            border-radius: 12px;
            padding: 1.5rem;
            text-align: center;
        }}
        .stat-value {{ font-size: 3rem; font-weight: 700; line-height: 1; color: var(--accent); }}
        .stat-label {{ color: var(--dim); font-size: 0.875rem; text-transform: uppercase; letter-spacing: 0.05em; margin-top: 0.5rem; }}

        .chart-card {{
            background: var(--card);
            border: 1px solid var(--border);
            border-radius: 12px;
            padding: 1.5rem;
        }}
        #sunburst {{ width: 100%; height: 80vh; min-height: 600px; }}
        .empty {{ color: var(--dim); text-align: center; padding: 4rem 0; }}
        .footer {{ color: var(--dim); font-size: 0.75rem; text-align: center; margin-top: 1.5rem; }}
    </style>
</head>
<body>
    <div class="container">
        <div class="stats">
            <div class="stat"><div class="stat-value">{songs}</div><div class="stat-label">Songs</div></div>
            <div class="stat"><div class="stat-value">{albums}</div><div class="stat-label">Albums</div></div>
            <div class="stat"><div class="stat-value">{years}</div><div class="stat-label">Years</div></div>
        </div>

        <div class="chart-card">
            <div id="sunburst"></div>
        </div>

        <div class="footer">Generated {generated}</div>
    </div>

    <script>
    const trace = {trace};
    const layout = {layout};

    if (trace.ids.length === 0) {{
        document.getElementById('sunburst').innerHTML = '<div class="empty">No data</div>';
    }} else {{
        Plotly.newPlot('sunburst', [trace], layout, {{ responsive: true }});
    }}
    </script>
</body>
</html>
"#,
            title = html_escape(&spec.title),
            plotly_js = PLOTLY_JS,
            songs = summary.songs,
            albums = summary.albums,
            years = summary.years,
            generated = Local::now().format("%Y-%m-%d %H:%M:%S"),
            trace = script_json(&trace)?,
            layout = script_json(&layout)?,
        )?;

        Ok(())
    }
}

/// plotly.js trace and layout objects for the sunburst
pub fn plot_data(sunburst: &Sunburst, spec: &ChartSpec) -> (serde_json::Value, serde_json::Value) {
    let trace = json!({
        "type": "sunburst",
        "ids": sunburst.ids,
        "labels": sunburst.labels,
        "parents": sunburst.parents,
        "values": sunburst.values,
        "branchvalues": "total",
        "hovertemplate": format!(
            "labels=%{{label}}<br>{}=%{{value}}<br>parent=%{{parent}}<br>id=%{{id}}<extra></extra>",
            spec.values
        ),
    });

    let layout = json!({
        "title": { "text": spec.title, "x": 0.5 },
        "sunburstcolorway": spec.palette.colors(),
        "extendsunburstcolors": true,
        "paper_bgcolor": "rgba(0,0,0,0)",
        "font": { "color": "#e6edf3" },
        "margin": { "t": 60, "l": 0, "r": 0, "b": 0 },
    });

    (trace, layout)
}

/// JSON safe to inline inside a `<script>` element
fn script_json(value: &serde_json::Value) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{render_to_vec, Palette};
    use crate::reshape::FlatRow;

    fn row(year: &str, lp: &str, song: &str, count: usize) -> FlatRow {
        FlatRow {
            root: "Aesop".into(),
            year: year.into(),
            lp: lp.into(),
            song: song.into(),
            count,
        }
    }

    fn render(table: &FlatTable, spec: &ChartSpec) -> String {
        String::from_utf8(render_to_vec(&HtmlRenderer, table, spec).unwrap()).unwrap()
    }

    #[test]
    fn test_page_contains_trace_and_title() {
        let table = FlatTable {
            rows: vec![row("2001", "Labor Days", "Daylight", 1)],
        };
        let html = render(&table, &ChartSpec::default());

        assert!(html.contains("<title>Songs from Albums over Years</title>"));
        assert!(html.contains(PLOTLY_JS));
        assert!(html.contains(r#""type":"sunburst""#));
        assert!(html.contains(r#""branchvalues":"total""#));
        assert!(html.contains("Aesop/2001/Labor Days/Daylight"));
    }

    #[test]
    fn test_palette_and_centered_title() {
        let spec = ChartSpec::default().with_palette(Palette::D3);
        let html = render(&FlatTable::default(), &spec);

        assert!(html.contains("#1F77B4"));
        assert!(html.contains(r#""x":0.5"#));
    }

    #[test]
    fn test_title_is_escaped() {
        let spec = ChartSpec::default().with_title("<b>Bazooka Tooth</b>");
        let html = render(&FlatTable::default(), &spec);
        assert!(html.contains("<title>&lt;b&gt;Bazooka Tooth&lt;/b&gt;</title>"));
    }

    #[test]
    fn test_script_breakout_is_neutralized() {
        let table = FlatTable {
            rows: vec![row("2001", "</script><script>alert(1)</script>", "x", 1)],
        };
        let html = render(&table, &ChartSpec::default());
        assert!(!html.contains("</script><script>alert(1)"));
        assert_eq!(html.matches("</script>").count(), 2);
    }

    #[test]
    fn test_plot_data_hover_uses_value_column() {
        let (trace, layout) = plot_data(&Sunburst::default(), &ChartSpec::default());
        assert!(trace["hovertemplate"].as_str().unwrap().contains("count=%{value}"));
        assert_eq!(layout["sunburstcolorway"][0], "#3366CC");
    }
}
