use chrono::NaiveDate;

/// A person record as loaded from the source file, before enrichment.
///
/// All string fields are copied verbatim from the input; only the birth
/// date is parsed. Ids are opaque and not checked for uniqueness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    pub id: String,
    pub gender: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
}

/// A record with its six derived employment fields filled in.
///
/// Built exactly once by the enricher, which consumes the raw record by
/// value; there is no re-enrichment or update path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedRecord {
    pub person: PersonRecord,
    pub start_date: NaiveDate,
    pub country: &'static str,
    pub office: &'static str,
    pub job_title: &'static str,
    pub department: &'static str,
    pub salary: i64,
}

impl EnrichedRecord {
    /// Output fields in the fixed wire order.
    pub fn fields(&self) -> [String; 11] {
        [
            self.person.id.clone(),
            self.person.gender.clone(),
            self.person.first_name.clone(),
            self.person.last_name.clone(),
            self.person.birth_date.format("%Y-%m-%d").to_string(),
            self.start_date.format("%Y-%m-%d").to_string(),
            self.country.to_string(),
            self.office.to_string(),
            self.department.to_string(),
            self.job_title.to_string(),
            self.salary.to_string(),
        ]
    }
}
