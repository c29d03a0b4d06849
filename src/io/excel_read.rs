use std::path::Path;

use calamine::{Data, DataType, Dimensions, Range, Reader, Xlsx, open_workbook};
use chrono::Datelike;
use tracing::{debug, instrument};

use crate::error::{Result, ToolError};

/// Cell text and merge metadata read from a single worksheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetData {
    /// Rows indexed by absolute zero-based sheet row, trailing empty cells trimmed.
    pub rows: Vec<Vec<String>>,
    /// Merged ranges as A1-style addresses, e.g. `C5:G7`.
    pub merges: Vec<String>,
}

/// Reads the named sheet of an Excel workbook.
///
/// The workbook is closed again before this returns.
#[instrument(level = "debug", skip_all, fields(path = %path.display(), sheet = %sheet))]
pub fn read_sheet(path: &Path, sheet: &str) -> Result<SheetData> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Err(ToolError::MissingSheet(sheet.to_string()));
    }

    let range = workbook.worksheet_range(sheet)?;
    workbook.load_merged_regions()?;
    let merges: Vec<String> = workbook
        .merged_regions_by_sheet(sheet)
        .into_iter()
        .map(|(_, _, dimensions)| merge_address(dimensions))
        .collect();

    let rows = grid_rows(&range);
    debug!(
        row_count = rows.len(),
        merge_count = merges.len(),
        "sheet loaded"
    );

    Ok(SheetData { rows, merges })
}

/// Lays the used range out at its absolute sheet position.
fn grid_rows(range: &Range<Data>) -> Vec<Vec<String>> {
    let Some((first_row, first_col)) = range.start() else {
        return Vec::new();
    };

    let mut rows = vec![Vec::new(); first_row as usize];
    for cells in range.rows() {
        let mut row = vec![String::new(); first_col as usize];
        row.extend(cells.iter().map(cell_to_string));
        trim_trailing_empty(&mut row);
        rows.push(row);
    }
    rows
}

fn trim_trailing_empty(row: &mut Vec<String>) {
    while row.last().is_some_and(|cell| cell.is_empty()) {
        row.pop();
    }
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(value) => value.clone(),
        Data::Float(value) => value.to_string(),
        Data::Int(value) => value.to_string(),
        Data::Bool(value) => value.to_string(),
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_date()
            .map(|date| format!("{:02}.{:02}.{}", date.day(), date.month(), date.year()))
            .unwrap_or_else(|| cell.to_string()),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn merge_address(dimensions: &Dimensions) -> String {
    let (start_row, start_col) = dimensions.start;
    let (end_row, end_col) = dimensions.end;
    format!(
        "{}{}:{}{}",
        column_name(start_col),
        start_row + 1,
        column_name(end_col),
        end_row + 1
    )
}

/// Converts a zero-based column index into its spreadsheet letters.
fn column_name(index: u32) -> String {
    let mut letters = Vec::new();
    let mut remaining = index + 1;
    while remaining > 0 {
        let digit = ((remaining - 1) % 26) as u8;
        letters.push(char::from(b'A' + digit));
        remaining = (remaining - 1) / 26;
    }
    letters.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_names_follow_spreadsheet_lettering() {
        assert_eq!(column_name(0), "A");
        assert_eq!(column_name(2), "C");
        assert_eq!(column_name(6), "G");
        assert_eq!(column_name(25), "Z");
        assert_eq!(column_name(26), "AA");
        assert_eq!(column_name(28), "AC");
        assert_eq!(column_name(701), "ZZ");
        assert_eq!(column_name(702), "AAA");
    }

    #[test]
    fn merge_address_is_one_based() {
        let dimensions = Dimensions {
            start: (4, 2),
            end: (6, 6),
        };
        assert_eq!(merge_address(&dimensions), "C5:G7");
    }

    #[test]
    fn trailing_empty_cells_are_trimmed() {
        let mut row = vec!["a".to_string(), String::new(), "b".into(), String::new(), String::new()];
        trim_trailing_empty(&mut row);
        assert_eq!(row, vec!["a", "", "b"]);
    }

    #[test]
    fn used_range_is_placed_at_its_sheet_offset() {
        let mut range = Range::new((1, 1), (2, 3));
        range.set_value((1, 1), Data::String("x".into()));
        range.set_value((2, 3), Data::Float(9.0));

        let rows = grid_rows(&range);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].is_empty());
        assert_eq!(rows[1], vec!["", "x"]);
        assert_eq!(rows[2], vec!["", "", "", "9"]);
    }

    #[test]
    fn empty_range_has_no_rows() {
        let range: Range<Data> = Range::empty();
        assert!(grid_rows(&range).is_empty());
    }
}
