use std::io::Write;

use crate::error::Result;
use crate::model::Couple;

/// Header line written before the couples, in column order.
pub const HEADER: [&str; 5] = ["Subject", "Start Date", "Start Time", "End Date", "End Time"];

/// Writes the couples as CSV, header first, one line per couple.
///
/// The header is written even when there are no couples.
pub fn write_couples<W: Write>(sink: W, couples: &[Couple]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(sink);

    wtr.write_record(HEADER)?;
    for couple in couples {
        wtr.serialize(couple)?;
    }

    wtr.flush()?;
    Ok(())
}
