use clap::Parser;
use discburst::chart::{self, ChartSpec, Palette, Summary};
use discburst::serve::{self, ChartSite};
use discburst::{ColumnMap, FlatTable, Reshaper};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "discburst")]
#[command(author, version, about = "Render an artist's discography as a sunburst chart")]
struct Args {
    /// Discography CSV (one row per song)
    #[arg(default_value = "aesop_final_analysis.csv")]
    input: PathBuf,

    /// Output file (.html, .json, .csv); overwritten on every run
    #[arg(short, long, default_value = "songDash.html")]
    output: PathBuf,

    /// Chart title
    #[arg(long, default_value = "Songs from Albums over Years")]
    title: String,

    /// Label of the center of the chart
    #[arg(long, default_value = "Aesop")]
    root_label: String,

    /// Column holding song titles
    #[arg(long, default_value = "Song Title")]
    title_column: String,

    /// Column holding album names
    #[arg(long, default_value = "Album")]
    album_column: String,

    /// Column holding release dates
    #[arg(long, default_value = "Release Date")]
    date_column: String,

    /// Color sequence: g10, plotly, d3, t10
    #[arg(long, default_value = "g10")]
    palette: Palette,

    /// Serve the chart from a local web server instead of writing a file
    #[arg(long)]
    serve: bool,

    /// Port for --serve
    #[arg(short, long, default_value_t = serve::DEFAULT_PORT)]
    port: u16,

    /// Don't open the chart (or the served page) in a browser
    #[arg(long)]
    no_open: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Only print errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args) {
        eprintln!("\x1b[31mError:\x1b[0m {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> discburst::Result<()> {
    let reshaper = Reshaper::new()
        .with_columns(ColumnMap {
            title: args.title_column.clone(),
            album: args.album_column.clone(),
            date: args.date_column.clone(),
            ..ColumnMap::default()
        })
        .with_root_label(args.root_label.clone());

    let spec = ChartSpec::default()
        .with_title(args.title.clone())
        .with_palette(args.palette);
    spec.validate()?;

    let flat = reshaper.load(&args.input)?;
    if !args.quiet {
        print_summary(&flat);
    }

    if args.serve {
        let site = ChartSite::new(flat, &spec)?;
        return serve::start(args.port, site, !args.no_open);
    }

    chart::generate(&args.output, &flat, &spec)?;
    if !args.quiet {
        eprintln!("\x1b[32mChart saved: {}\x1b[0m", args.output.display());
    }

    if !args.no_open {
        info!(path = %args.output.display(), "opening chart");
        if let Err(e) = open::that(&args.output) {
            warn!(error = %e, "could not open chart");
            eprintln!("Failed to open chart: {}", e);
        }
    }

    Ok(())
}

fn print_summary(flat: &FlatTable) {
    let summary = Summary::from_table(flat);
    eprintln!("\x1b[1mdiscburst\x1b[0m");
    eprintln!("{}", "─".repeat(40));
    eprintln!("  Songs:  {}", summary.songs);
    eprintln!("  Albums: {}", summary.albums);
    eprintln!("  Years:  {}", summary.years);
    if flat.is_empty() {
        eprintln!("  \x1b[90m(no data rows)\x1b[0m");
    }
}
