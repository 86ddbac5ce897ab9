use std::path::Path;

use crate::domain::interview::InterviewRecord;

/// Reads the input table: one company name per row, no header. Blank rows
/// are ignored.
pub fn read_company_names(path: &Path) -> Result<Vec<String>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut names = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(name) = record.get(0) {
            let name = name.trim();
            if !name.is_empty() {
                names.push(name.to_string());
            }
        }
    }
    Ok(names)
}

/// Writes the full output table, header row first. No file is written at all
/// when there are no records.
pub fn write_interview_records(
    path: &Path,
    records: &[InterviewRecord],
) -> Result<(), csv::Error> {
    if records.is_empty() {
        return Ok(());
    }

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the names-only output table used by the namecheck utility.
pub fn write_company_names(path: &Path, names: &[String]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Company Name"])?;
    for name in names {
        writer.write_record([name.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}
