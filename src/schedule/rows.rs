use tracing::{debug, trace};

use crate::error::{Result, ToolError};
use crate::model::{Couple, ExportOptions, MergeSpan};
use crate::schedule::merges::is_common_row;
use crate::schedule::normalize::{convert_subject, format_date, parse_time_range, shifted_clock};

/// Column holding the day's date; only the first row of each day fills it.
const DATE_COLUMN: usize = 0;
/// Column holding the `H.MM-H.MM` time range.
const TIME_COLUMN: usize = 1;
/// Subject column read for couples shared by every subgroup.
const COMMON_SUBJECT_COLUMN: usize = 2;
/// Subject column read for the subgroup when the couple is not shared.
const SUBGROUP_SUBJECT_COLUMN: usize = 5;
/// Rows shorter than this carry no couple.
const MIN_ROW_WIDTH: usize = 3;

/// Walks the sheet rows in order and extracts one couple per qualifying row.
///
/// `rows` are indexed by their absolute zero-based sheet row so that they line
/// up with `spans`. Trailing empty cells are expected to be trimmed.
pub fn extract_couples(
    rows: &[Vec<String>],
    spans: &[MergeSpan],
    options: &ExportOptions,
) -> Result<Vec<Couple>> {
    let mut couples = Vec::new();
    let mut current_date = String::new();

    for (index, row) in rows.iter().enumerate().skip(options.first_row) {
        if let Some(date) = row.get(DATE_COLUMN).filter(|cell| !cell.is_empty()) {
            current_date = format_date(date, options.date_order)?;
            trace!(row = index, date = %current_date, "entered new day");
        }

        match interpret_row(index, row, &current_date, spans, options)? {
            Some(couple) => couples.push(couple),
            None => debug!(row = index, "row skipped"),
        }
    }

    Ok(couples)
}

fn interpret_row(
    index: usize,
    row: &[String],
    current_date: &str,
    spans: &[MergeSpan],
    options: &ExportOptions,
) -> Result<Option<Couple>> {
    if row.len() < MIN_ROW_WIDTH {
        return Ok(None);
    }

    let time_text = match row[TIME_COLUMN].as_str() {
        "" => options.fallback_time.as_str(),
        text => text,
    };
    let time = parse_time_range(time_text).ok_or_else(|| ToolError::InvalidTime {
        date: current_date.to_string(),
        value: time_text.to_string(),
    })?;

    let subject = if is_common_row(spans, index) {
        row[COMMON_SUBJECT_COLUMN].as_str()
    } else {
        match row.get(SUBGROUP_SUBJECT_COLUMN) {
            Some(subject) if !subject.is_empty() => subject.as_str(),
            _ => return Ok(None),
        }
    };

    Ok(Some(Couple {
        subject: convert_subject(subject),
        start_date: current_date.to_string(),
        start_time: shifted_clock(&time.start_hour, &time.start_minute, options.hour_offset)?,
        end_date: current_date.to_string(),
        end_time: shifted_clock(&time.end_hour, &time.end_minute, options.hour_offset)?,
    }))
}
