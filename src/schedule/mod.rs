//! Interpretation rules for the schedule sheet.

pub mod merges;
pub mod normalize;
pub mod rows;

pub use merges::{is_common_row, resolve_common_spans};
pub use rows::extract_couples;
