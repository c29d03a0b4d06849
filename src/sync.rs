use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{info, instrument};

use crate::error::{Result, ToolError};
use crate::io::csv_write;
use crate::io::excel_read::{self, SheetData};
use crate::model::{Couple, ExportOptions};
use crate::schedule::{extract_couples, resolve_common_spans};

/// Interprets an already loaded sheet into couples.
pub fn sheet_to_couples(sheet: &SheetData, options: &ExportOptions) -> Result<Vec<Couple>> {
    let spans = resolve_common_spans(&sheet.merges)?;
    info!(span_count = spans.len(), "resolved common couple spans");
    extract_couples(&sheet.rows, &spans, options)
}

/// Reads the schedule workbook and returns its couples in sheet order.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), sheet = %options.sheet)
)]
pub fn read_couples(input: &Path, options: &ExportOptions) -> Result<Vec<Couple>> {
    if !input.exists() {
        return Err(ToolError::MissingInput(input.to_path_buf()));
    }

    let sheet = excel_read::read_sheet(input, &options.sheet)?;
    let couples = sheet_to_couples(&sheet, options)?;
    info!(couple_count = couples.len(), "extracted couples from workbook");
    Ok(couples)
}

/// Converts the schedule workbook into CSV written to `sink`.
///
/// Nothing is written unless every row was interpreted successfully.
pub fn export_schedule<W: Write>(input: &Path, sink: W, options: &ExportOptions) -> Result<usize> {
    let couples = read_couples(input, options)?;
    csv_write::write_couples(sink, &couples)?;
    Ok(couples.len())
}

/// Converts the schedule workbook into CSV, writing to `output` or to stdout.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = ?output.map(Path::display))
)]
pub fn export_to(input: &Path, output: Option<&Path>, options: &ExportOptions) -> Result<usize> {
    let couples = read_couples(input, options)?;

    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            csv_write::write_couples(&mut writer, &couples)?;
            writer.flush()?;
        }
        None => csv_write::write_couples(io::stdout().lock(), &couples)?,
    }

    info!(couple_count = couples.len(), "CSV written");
    Ok(couples.len())
}
