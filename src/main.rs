use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use timetable_tools::model::{
    DEFAULT_FALLBACK_TIME, DEFAULT_FIRST_ROW, DEFAULT_HOUR_OFFSET, DEFAULT_SHEET, DateOrder,
    ExportOptions,
};
use timetable_tools::{Result, ToolError, sync};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose)?;
    let options = cli.export.options();
    sync::export_to(&cli.export.input, cli.export.output.as_deref(), &options)?;
    Ok(())
}

fn init_logging(verbose: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Convert a class schedule workbook into calendar-import CSV."
)]
struct Cli {
    #[command(flatten)]
    export: ExportArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(clap::Args)]
struct ExportArgs {
    /// Schedule workbook to read.
    #[arg(long, default_value = "schedule.xlsx")]
    input: PathBuf,

    /// Sheet holding the schedule.
    #[arg(long, default_value = DEFAULT_SHEET)]
    sheet: String,

    /// Write CSV to this file instead of standard output.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Hours added to every session time (source to target timezone).
    #[arg(long, default_value_t = DEFAULT_HOUR_OFFSET, allow_negative_numbers = true)]
    hour_offset: i32,

    /// Field order of the output dates.
    #[arg(long, value_enum, default_value_t = DateOrderKind::MonthFirst)]
    date_order: DateOrderKind,

    /// Zero-based index of the first data row.
    #[arg(long, default_value_t = DEFAULT_FIRST_ROW)]
    first_row: usize,

    /// Time range used when a row's time cell is empty.
    #[arg(long, default_value = DEFAULT_FALLBACK_TIME)]
    fallback_time: String,
}

impl ExportArgs {
    fn options(&self) -> ExportOptions {
        ExportOptions {
            sheet: self.sheet.clone(),
            first_row: self.first_row,
            hour_offset: self.hour_offset,
            date_order: self.date_order.into(),
            fallback_time: self.fallback_time.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum DateOrderKind {
    MonthFirst,
    DayFirst,
}

impl From<DateOrderKind> for DateOrder {
    fn from(kind: DateOrderKind) -> Self {
        match kind {
            DateOrderKind::MonthFirst => DateOrder::MonthFirst,
            DateOrderKind::DayFirst => DateOrder::DayFirst,
        }
    }
}
