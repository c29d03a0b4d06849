//! Pure string transforms applied to individual schedule cells.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, ToolError};
use crate::model::{DateOrder, TimeRange};

/// Session type codes used in subject cells and the labels they expand to.
pub const SUBJECT_TYPES: &[(&str, &str)] = &[("лек", "ЛЕКЦИЯ"), ("прак", "ПРАКТИКА")];

static SUBJECT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(.*?), (.*?), (.*)").unwrap());
static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{2})\.(\d{2})\.(\d{4})").unwrap());
static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})\.(\d{2})-(\d{1,2})\.(\d{2})").unwrap());

/// Shifts an hour between timezones by adding `offset`.
///
/// The result is not wrapped around midnight, so `"2"` shifted by `-3`
/// yields `"-1"`.
pub fn shift_hour(hour: &str, offset: i32) -> Result<String> {
    let value: i32 = hour
        .parse()
        .map_err(|_| ToolError::InvalidHour(hour.to_string()))?;
    Ok((value + offset).to_string())
}

/// Rewrites `"<name>, <detail>, <code>"` as `"<LABEL>: <name>, <detail>"`.
///
/// Unknown codes are used as the label verbatim; text without the three
/// comma-separated parts is returned unchanged.
pub fn convert_subject(text: &str) -> String {
    let Some(captures) = SUBJECT_RE.captures(text) else {
        return text.to_string();
    };

    let code = &captures[3];
    let label = SUBJECT_TYPES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, label)| *label)
        .unwrap_or(code);

    format!("{label}: {}, {}", &captures[1], &captures[2])
}

/// Parses a `DD.MM.YYYY` date and formats it with `/` separators.
pub fn format_date(text: &str, order: DateOrder) -> Result<String> {
    let captures = DATE_RE
        .captures(text)
        .ok_or_else(|| ToolError::InvalidDate(text.to_string()))?;
    let (day, month, year) = (&captures[1], &captures[2], &captures[3]);

    Ok(match order {
        DateOrder::MonthFirst => format!("{month}/{day}/{year}"),
        DateOrder::DayFirst => format!("{day}/{month}/{year}"),
    })
}

/// Splits an `H.MM-H.MM` cell into its four numeric components.
pub fn parse_time_range(text: &str) -> Option<TimeRange> {
    let captures = TIME_RE.captures(text)?;
    Some(TimeRange {
        start_hour: captures[1].to_string(),
        start_minute: captures[2].to_string(),
        end_hour: captures[3].to_string(),
        end_minute: captures[4].to_string(),
    })
}

/// Formats a clock time as `H:MM` after shifting the hour.
pub fn shifted_clock(hour: &str, minute: &str, offset: i32) -> Result<String> {
    Ok(format!("{}:{minute}", shift_hour(hour, offset)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_hour_moves_back_three_hours() {
        assert_eq!(shift_hour("22", -3).unwrap(), "19");
        assert_eq!(shift_hour("09", -3).unwrap(), "6");
    }

    #[test]
    fn shift_hour_keeps_negative_results() {
        assert_eq!(shift_hour("2", -3).unwrap(), "-1");
        assert_eq!(shift_hour("0", -3).unwrap(), "-3");
    }

    #[test]
    fn shift_hour_rejects_non_integers() {
        let error = shift_hour("nine", -3).unwrap_err();
        assert!(matches!(error, ToolError::InvalidHour(value) if value == "nine"));
    }

    #[test]
    fn subject_codes_expand_to_labels() {
        assert_eq!(convert_subject("Math, Room 5, лек"), "ЛЕКЦИЯ: Math, Room 5");
        assert_eq!(
            convert_subject("Physics, Lab 1, прак"),
            "ПРАКТИКА: Physics, Lab 1"
        );
    }

    #[test]
    fn unknown_subject_code_is_kept_as_label() {
        assert_eq!(convert_subject("Math, Room 5, сем"), "сем: Math, Room 5");
    }

    #[test]
    fn subject_without_three_parts_is_unchanged() {
        assert_eq!(convert_subject("Physical education"), "Physical education");
        assert_eq!(convert_subject("History, Hall A"), "History, Hall A");
    }

    #[test]
    fn date_fields_are_reordered() {
        assert_eq!(
            format_date("01.09.2024", DateOrder::MonthFirst).unwrap(),
            "09/01/2024"
        );
        assert_eq!(
            format_date("01.09.2024", DateOrder::DayFirst).unwrap(),
            "01/09/2024"
        );
    }

    #[test]
    fn malformed_date_is_rejected() {
        let error = format_date("1 Sept", DateOrder::MonthFirst).unwrap_err();
        assert_eq!(error.to_string(), "can't parse date: 1 Sept");
    }

    #[test]
    fn time_range_components_are_captured() {
        let range = parse_time_range("9.00-10.35").unwrap();
        assert_eq!(
            range,
            TimeRange {
                start_hour: "9".into(),
                start_minute: "00".into(),
                end_hour: "10".into(),
                end_minute: "35".into(),
            }
        );
        assert!(parse_time_range("9:00-10:35").is_none());
    }

    #[test]
    fn shifted_clock_keeps_minutes() {
        assert_eq!(shifted_clock("09", "00", -3).unwrap(), "6:00");
        assert_eq!(shifted_clock("10", "35", -3).unwrap(), "7:35");
    }
}
