use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tracing::warn;

use crate::errors::GenerateError;
use crate::record::PersonRecord;

/// Well-formed input lines carry exactly these fields:
/// `id;gender;firstName;lastName;birthDate`.
pub const FIELDS_PER_LINE: usize = 5;

const BIRTH_DATE_FORMAT: &str = "%d/%m/%Y";

/// Result of loading the source file.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub records: Vec<PersonRecord>,
    pub lines_read: u64,
    pub skipped: u64,
}

/// Read the source file and parse one record per well-formed line,
/// preserving input order.
///
/// Lines whose field count is not exactly five are skipped with a
/// diagnostic and do not appear in the output; an unparsable birth date
/// aborts the load.
pub fn load_records(path: &Path) -> Result<LoadOutcome, GenerateError> {
    let contents = fs::read_to_string(path)?;
    let mut records = Vec::new();
    let mut lines_read = 0;
    let mut skipped = 0;

    for (index, line) in contents.lines().enumerate() {
        lines_read += 1;
        match parse_line(line, index as u64 + 1)? {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    Ok(LoadOutcome {
        records,
        lines_read,
        skipped,
    })
}

fn parse_line(line: &str, line_number: u64) -> Result<Option<PersonRecord>, GenerateError> {
    let line = line.trim();
    let fields: Vec<&str> = line.split(';').collect();
    if fields.len() != FIELDS_PER_LINE {
        warn!(
            line = line_number,
            fields = fields.len(),
            content = line,
            "skipping malformed line"
        );
        return Ok(None);
    }

    let birth_date =
        NaiveDate::parse_from_str(fields[4], BIRTH_DATE_FORMAT).map_err(|source| {
            GenerateError::InvalidBirthDate {
                line: line_number,
                value: fields[4].to_string(),
                source,
            }
        })?;

    Ok(Some(PersonRecord {
        id: fields[0].to_string(),
        gender: fields[1].to_string(),
        first_name: fields[2].to_string(),
        last_name: fields[3].to_string(),
        birth_date,
    }))
}
