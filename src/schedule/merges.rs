use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, ToolError};
use crate::model::MergeSpan;

/// Merges spanning columns C through G mark a couple shared by every subgroup.
static COMMON_MERGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^C(\d+):G(\d+)$").unwrap());

/// Converts merge addresses such as `C5:G7` into zero-based row spans.
///
/// Merges over any other columns are ignored.
pub fn resolve_common_spans<S: AsRef<str>>(merges: &[S]) -> Result<Vec<MergeSpan>> {
    let mut spans = Vec::new();

    for merge in merges {
        let address = merge.as_ref();
        let Some(captures) = COMMON_MERGE_RE.captures(address) else {
            continue;
        };

        let start_row = row_index(&captures[1], address)?;
        let end_row = row_index(&captures[2], address)?;
        spans.push(MergeSpan::new(start_row, end_row));
    }

    Ok(spans)
}

/// Returns `true` when `row` falls inside any of the spans.
pub fn is_common_row(spans: &[MergeSpan], row: usize) -> bool {
    spans.iter().any(|span| span.contains(row))
}

fn row_index(text: &str, address: &str) -> Result<usize> {
    text.parse::<usize>()
        .ok()
        .and_then(|row| row.checked_sub(1))
        .ok_or_else(|| ToolError::InvalidMergeRange(address.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_c_to_g_merges_become_spans() {
        let merges = ["A3:A8", "C5:G7", "B2:F2", "C10:G10", "AC1:AG4"];
        let spans = resolve_common_spans(&merges).unwrap();
        assert_eq!(spans, vec![MergeSpan::new(4, 6), MergeSpan::new(9, 9)]);
    }

    #[test]
    fn end_row_comes_from_the_end_of_the_address() {
        let spans = resolve_common_spans(&["C3:G12"]).unwrap();
        assert_eq!(spans[0].start_row, 2);
        assert_eq!(spans[0].end_row, 11);
    }

    #[test]
    fn row_zero_is_rejected() {
        let error = resolve_common_spans(&["C0:G2"]).unwrap_err();
        assert!(matches!(error, ToolError::InvalidMergeRange(address) if address == "C0:G2"));
    }

    #[test]
    fn oversized_row_number_is_rejected() {
        let address = format!("C1:G{}", "9".repeat(40));
        assert!(resolve_common_spans(&[address]).is_err());
    }

    #[test]
    fn membership_covers_inclusive_bounds() {
        let spans = vec![MergeSpan::new(4, 6), MergeSpan::new(9, 9)];
        for row in [4, 5, 6, 9] {
            assert!(is_common_row(&spans, row), "row {row} should be common");
        }
        for row in [0, 3, 7, 8, 10] {
            assert!(!is_common_row(&spans, row), "row {row} should not be common");
        }
    }

    #[test]
    fn no_spans_means_no_common_rows() {
        assert!(!is_common_row(&[], 0));
    }
}
