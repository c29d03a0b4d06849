use serde::Serialize;

/// Sheet name used when none is configured.
pub const DEFAULT_SHEET: &str = "Schedule";
/// Zero-based index of the first row holding schedule data.
pub const DEFAULT_FIRST_ROW: usize = 2;
/// Hour shift applied when none is configured.
pub const DEFAULT_HOUR_OFFSET: i32 = -3;
/// Time range assumed for rows whose time cell is empty (the last slot of the day).
pub const DEFAULT_FALLBACK_TIME: &str = "19.45-21.20";

/// Inclusive, zero-based row span covered by a "common couple" merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeSpan {
    pub start_row: usize,
    pub end_row: usize,
}

impl MergeSpan {
    /// Creates a span, ordering the bounds so that `start_row <= end_row`.
    pub fn new(first: usize, second: usize) -> Self {
        Self {
            start_row: first.min(second),
            end_row: first.max(second),
        }
    }

    /// Returns `true` when `row` lies within the span.
    pub fn contains(&self, row: usize) -> bool {
        (self.start_row..=self.end_row).contains(&row)
    }
}

/// One class session, serialised as a single CSV line.
///
/// Dates and times are kept as already formatted text since they are only
/// ever written out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Couple {
    #[serde(rename = "Subject")]
    pub subject: String,
    #[serde(rename = "Start Date")]
    pub start_date: String,
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Date")]
    pub end_date: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
}

/// Raw components of an `H.MM-H.MM` time cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    pub start_hour: String,
    pub start_minute: String,
    pub end_hour: String,
    pub end_minute: String,
}

/// Field order used when formatting `DD.MM.YYYY` dates for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateOrder {
    /// `MM/DD/YYYY`, the layout calendar import expects.
    #[default]
    MonthFirst,
    /// `DD/MM/YYYY`.
    DayFirst,
}

/// Settings threaded through a single export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub sheet: String,
    pub first_row: usize,
    pub hour_offset: i32,
    pub date_order: DateOrder,
    pub fallback_time: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            sheet: DEFAULT_SHEET.to_string(),
            first_row: DEFAULT_FIRST_ROW,
            hour_offset: DEFAULT_HOUR_OFFSET,
            date_order: DateOrder::default(),
            fallback_time: DEFAULT_FALLBACK_TIME.to_string(),
        }
    }
}
