//! Sheetpage CLI - print layout for spreadsheet workbooks

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand, ValueEnum};
use sheetpage::prelude::*;
use sheetpage::{Margins, UsedRange};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sheetpage")]
#[command(author, version, about = "Lay out spreadsheet workbooks as printable pages")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a workbook JSON document into a page layout document
    Convert {
        /// Input workbook (JSON)
        input: PathBuf,

        /// Output document (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Show page setup and page counts for each sheet
    Info {
        /// Input workbook (JSON)
        input: PathBuf,
    },

    /// List all sheets in a workbook
    Sheets {
        /// Input workbook (JSON)
        input: PathBuf,
    },
}

#[derive(Args)]
struct LayoutArgs {
    /// Sheet to convert, by name or 0-based index (default: all)
    #[arg(short, long)]
    sheet: Option<String>,

    /// Paper size (letter, tabloid, legal, a3, a4, a5, b4, b5)
    #[arg(short, long)]
    paper: Option<String>,

    /// Page orientation
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Uniform page margins in millimetres
    #[arg(long)]
    margins: Option<f64>,

    /// Fallback font name
    #[arg(long)]
    font: Option<String>,

    /// Font substitution, as FROM=TO (repeatable)
    #[arg(long = "map-font", value_parser = parse_font_mapping)]
    font_map: Vec<(String, String)>,

    /// Shrink each sheet onto a single page
    #[arg(long, conflicts_with = "no_fit")]
    fit: bool,

    /// Never shrink to fit; use the sheet's own scale
    #[arg(long)]
    no_fit: bool,

    /// Fixed scale factor (overrides every fit policy)
    #[arg(long)]
    scale: Option<f64>,

    /// Cell range to print, such as B2:F40
    #[arg(short, long)]
    range: Option<String>,

    /// Ignore declared print areas
    #[arg(long)]
    ignore_print_area: bool,

    /// Keep empty rows inside the used range
    #[arg(long)]
    keep_empty_rows: bool,

    /// Keep empty columns inside the used range
    #[arg(long)]
    keep_empty_columns: bool,

    /// Show formula source instead of cached values
    #[arg(long)]
    formulas: bool,

    /// Date display format (strftime syntax)
    #[arg(long)]
    date_format: Option<String>,

    /// Output document id
    #[arg(long)]
    id: Option<String>,

    /// Output document title
    #[arg(long)]
    title: Option<String>,

    /// Print timestamp for &D / &T header codes ("now" or YYYY-MM-DDTHH:MM:SS)
    #[arg(long, value_parser = parse_timestamp)]
    timestamp: Option<NaiveDateTime>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Orientation::Portrait,
            OrientationArg::Landscape => Orientation::Landscape,
        }
    }
}

impl LayoutArgs {
    fn to_options(&self) -> Result<ConvertOptions> {
        let mut options = ConvertOptions::default()
            .with_only_print_area(!self.ignore_print_area)
            .with_skip_empty_rows(!self.keep_empty_rows)
            .with_skip_empty_columns(!self.keep_empty_columns)
            .with_preserve_formula_as_text(self.formulas);

        if let Some(sheet) = &self.sheet {
            options = options.with_sheet(parse_sheet_selector(sheet));
        }
        if let Some(paper) = &self.paper {
            let size = PaperSize::from_name(paper)
                .ok_or_else(|| anyhow!("Unknown paper size '{}'", paper))?;
            options = options.with_paper_size(size);
        }
        if let Some(orientation) = self.orientation {
            options = options.with_orientation(orientation.into());
        }
        if let Some(mm) = self.margins {
            options = options.with_margins_mm(Margins::uniform(mm));
        }
        if let Some(font) = &self.font {
            options = options.with_default_font(font.as_str());
        }
        for (from, to) in &self.font_map {
            options = options.with_font_mapping(from.as_str(), to.as_str());
        }
        if self.fit {
            options = options.with_fit_to_page(true);
        } else if self.no_fit {
            options = options.with_fit_to_page(false);
        }
        if let Some(scale) = self.scale {
            options = options.with_manual_scale(scale);
        }
        if let Some(range) = &self.range {
            options = options.with_range(range.as_str());
        }
        if let Some(format) = &self.date_format {
            options = options.with_date_format(format.as_str());
        }
        if let Some(id) = &self.id {
            options = options.with_document_id(id.as_str());
        }
        if let Some(title) = &self.title {
            options = options.with_title(title.as_str());
        }
        if let Some(timestamp) = self.timestamp {
            options = options.with_print_timestamp(timestamp);
        }
        Ok(options)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert {
            input,
            output,
            pretty,
            layout,
        } => convert_file(&input, output.as_deref(), pretty, &layout),
        Commands::Info { input } => show_info(&input),
        Commands::Sheets { input } => list_sheets(&input),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn parse_sheet_selector(s: &str) -> SheetSelector {
    match s.parse::<usize>() {
        Ok(index) => SheetSelector::Index(index),
        Err(_) => SheetSelector::Name(s.to_string()),
    }
}

fn parse_font_mapping(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((from, to)) if !from.is_empty() && !to.is_empty() => {
            Ok((from.to_string(), to.to_string()))
        }
        _ => Err(format!("expected FROM=TO, got '{}'", s)),
    }
}

fn parse_timestamp(s: &str) -> std::result::Result<NaiveDateTime, String> {
    if s.eq_ignore_ascii_case("now") {
        return Ok(chrono::Local::now().naive_local());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").map_err(|e| e.to_string())
}

fn open_workbook(input: &Path) -> Result<Workbook> {
    let file =
        File::open(input).with_context(|| format!("Failed to open '{}'", input.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to read workbook from '{}'", input.display()))
}

fn convert_file(
    input: &Path,
    output: Option<&Path>,
    pretty: bool,
    layout: &LayoutArgs,
) -> Result<()> {
    let workbook = open_workbook(input)?;
    let options = layout.to_options()?;

    let result = workbook
        .paginate_with_options(&options)
        .with_context(|| format!("Failed to lay out '{}'", input.display()))?;

    for diagnostic in &result.diagnostics {
        eprintln!("warning: {}", diagnostic);
    }

    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("Failed to create '{}'", path.display())
        })?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };
    if pretty {
        serde_json::to_writer_pretty(&mut writer, &result.document)
    } else {
        serde_json::to_writer(&mut writer, &result.document)
    }
    .context("Failed to serialize document")?;
    writeln!(writer)?;
    writer.flush().context("Failed to write output")?;

    if let Some(path) = output {
        eprintln!(
            "Wrote {} pages to '{}'",
            result.document.surfaces.len(),
            path.display()
        );
    }

    Ok(())
}

fn show_info(input: &Path) -> Result<()> {
    let workbook = open_workbook(input)?;

    println!("File: {}", input.display());
    if let Some(title) = workbook.title() {
        println!("Title: {}", title);
    }
    println!("Sheets: {}", workbook.sheet_count());

    for (i, sheet) in workbook.worksheets().enumerate() {
        let setup = sheet.page_setup();

        println!();
        println!("  Sheet {}: \"{}\"", i, sheet.name());

        match UsedRange::find(sheet) {
            Some(range) => println!(
                "    Used range: {}",
                range.to_cell_range().to_a1_string()
            ),
            None => println!("    Used range: empty"),
        }
        if let Some(area) = sheet.print_area() {
            println!("    Print area: {}", area);
        }
        println!(
            "    Orientation: {:?}",
            setup.orientation.unwrap_or_default()
        );
        if let Some(fit) = setup.fit_to_page {
            println!(
                "    Fit to page: {} wide x {} tall",
                fit.width.map_or("auto".to_string(), |n| n.to_string()),
                fit.height.map_or("auto".to_string(), |n| n.to_string())
            );
        } else if let Some(scale) = setup.scale {
            println!("    Scale: {}%", scale);
        }
        if !setup.row_breaks.is_empty() || !setup.col_breaks.is_empty() {
            println!(
                "    Manual breaks: {} row, {} column",
                setup.row_breaks.len(),
                setup.col_breaks.len()
            );
        }

        let options = ConvertOptions::default().with_sheet(i);
        let pages = workbook
            .paginate_with_options(&options)
            .with_context(|| format!("Failed to lay out sheet '{}'", sheet.name()))?
            .document
            .surfaces
            .len();
        println!("    Pages: {}", pages);
    }

    Ok(())
}

fn list_sheets(input: &Path) -> Result<()> {
    let workbook = open_workbook(input)?;

    for (i, sheet) in workbook.worksheets().enumerate() {
        println!("{}\t{}", i, sheet.name());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_selector_parsing() {
        assert_eq!(parse_sheet_selector("2"), SheetSelector::Index(2));
        assert_eq!(
            parse_sheet_selector("Summary"),
            SheetSelector::Name("Summary".to_string())
        );
    }

    #[test]
    fn test_font_mapping_parsing() {
        assert_eq!(
            parse_font_mapping("Arial=Liberation Sans"),
            Ok(("Arial".to_string(), "Liberation Sans".to_string()))
        );
        assert!(parse_font_mapping("Arial").is_err());
    }

    #[test]
    fn test_layout_args_to_options() {
        let cli = Cli::parse_from([
            "sheetpage",
            "convert",
            "book.json",
            "--paper",
            "letter",
            "--no-fit",
            "--sheet",
            "Data",
            "--keep-empty-rows",
        ]);
        let Commands::Convert { layout, .. } = cli.command else {
            panic!("expected convert");
        };
        let options = layout.to_options().unwrap();
        assert_eq!(options.paper_size, Some(PaperSize::Letter));
        assert_eq!(options.fit_to_page, Some(false));
        assert_eq!(options.sheet, Some(SheetSelector::Name("Data".to_string())));
        assert!(!options.skip_empty_rows);
        assert!(options.skip_empty_columns);
    }

    #[test]
    fn test_unknown_paper_is_rejected() {
        let cli = Cli::parse_from(["sheetpage", "convert", "book.json", "--paper", "folio"]);
        let Commands::Convert { layout, .. } = cli.command else {
            panic!("expected convert");
        };
        assert!(layout.to_options().is_err());
    }
}
