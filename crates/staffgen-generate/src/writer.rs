use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::record::EnrichedRecord;

/// Write enriched records as `;`-delimited lines, one per record, in
/// sequence order. Overwrites the destination file. Returns the number of
/// bytes written.
///
/// There is no partial-write recovery: a failure mid-run may leave the
/// destination absent or truncated.
pub fn write_records(path: &Path, records: &[EnrichedRecord]) -> Result<u64, csv::Error> {
    let writer = BufWriter::new(File::create(path).map_err(csv::Error::from)?);
    let counting = CountingWriter::new(writer);
    // Raw `;`-join, not CSV: fields go out verbatim. The loader guarantees
    // no field can contain `;` or a newline, so quoting is never needed.
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(counting);

    for record in records {
        writer.write_record(record.fields())?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use chrono::NaiveDate;

    use super::*;
    use crate::record::PersonRecord;

    fn sample_record() -> EnrichedRecord {
        EnrichedRecord {
            person: PersonRecord {
                id: "1".to_string(),
                gender: "M".to_string(),
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                birth_date: NaiveDate::from_ymd_opt(1985, 6, 15).expect("valid date"),
            },
            start_date: NaiveDate::from_ymd_opt(2010, 3, 1).expect("valid date"),
            country: "Ireland",
            office: "Dublin",
            job_title: "Support Engineer",
            department: "Support",
            salary: 42000,
        }
    }

    fn temp_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("staffgen_writer_{}.txt", uuid::Uuid::new_v4()));
        path
    }

    #[test]
    fn writes_the_fixed_field_order() {
        let path = temp_path();
        let bytes = write_records(&path, &[sample_record()]).expect("write records");
        let contents = fs::read_to_string(&path).expect("read output");
        fs::remove_file(&path).ok();

        assert_eq!(
            contents,
            "1;M;John;Doe;1985-06-15;2010-03-01;Ireland;Dublin;Support;Support Engineer;42000\n"
        );
        assert_eq!(bytes, contents.len() as u64);
    }

    #[test]
    fn quote_characters_pass_through_verbatim() {
        let mut record = sample_record();
        record.person.first_name = "Jo\"hn".to_string();
        record.person.last_name = "O'Doe".to_string();

        let path = temp_path();
        write_records(&path, &[record]).expect("write records");
        let contents = fs::read_to_string(&path).expect("read output");
        fs::remove_file(&path).ok();

        assert_eq!(
            contents,
            "1;M;Jo\"hn;O'Doe;1985-06-15;2010-03-01;Ireland;Dublin;Support;Support Engineer;42000\n"
        );
    }

    #[test]
    fn overwrites_an_existing_destination() {
        let path = temp_path();
        fs::write(&path, "stale contents that should disappear\n").expect("seed destination");

        write_records(&path, &[sample_record()]).expect("write records");
        let contents = fs::read_to_string(&path).expect("read output");
        fs::remove_file(&path).ok();

        assert_eq!(contents.lines().count(), 1);
        assert!(contents.starts_with("1;M;John;Doe;"));
    }

    #[test]
    fn empty_sequence_writes_an_empty_file() {
        let path = temp_path();
        let bytes = write_records(&path, &[]).expect("write records");
        let contents = fs::read_to_string(&path).expect("read output");
        fs::remove_file(&path).ok();

        assert_eq!(bytes, 0);
        assert!(contents.is_empty());
    }
}
