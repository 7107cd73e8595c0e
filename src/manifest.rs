use std::fs::File;
use std::io::{BufWriter, Result};

use crate::types::CollectReport;

/// Write a CSV manifest of one run: `Student,Source,Destination`, one row per
/// copied file.
pub fn write_manifest(f: File, report: &CollectReport) -> Result<()> {
    let f = BufWriter::new(f);
    let mut wtr = csv::Writer::from_writer(f);
    wtr.write_record(["Student", "Source", "Destination"])?;
    for copied in &report.copied {
        wtr.write_record(&[
            copied.student.clone(),
            copied.source.to_string_lossy().into_owned(),
            copied.dest.to_string_lossy().into_owned(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
