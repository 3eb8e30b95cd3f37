use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use rand::{Rng, RngCore};

use crate::errors::GenerateError;
use crate::record::{EnrichedRecord, PersonRecord};
use crate::reference::{JOBS, LOCATIONS};

/// Minimum employment age: a flat 23 years of 365 days, in seconds.
/// Deliberately not calendar-aware; the output distribution depends on
/// this exact offset.
const MIN_EMPLOYMENT_AGE_SECS: i64 = 23 * 365 * 24 * 3600;

/// Latest possible employment start date.
fn start_ceiling() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 30).unwrap_or_default()
}

/// Fill in the six derived employment fields for one record.
///
/// Consumes the raw record, so enrichment happens exactly once. The three
/// draws (start date, location, job) are independent; country/office and
/// title/department are each assigned together from a single table entry.
pub fn enrich(
    person: PersonRecord,
    rng: &mut dyn RngCore,
) -> Result<EnrichedRecord, GenerateError> {
    let start_date = draw_start_date(person.birth_date, rng)?;

    let location = &LOCATIONS[rng.random_range(0..LOCATIONS.len())];
    let job = &JOBS[rng.random_range(0..JOBS.len())];
    let salary = rng.random_range(job.salary_min..=job.salary_max);

    Ok(EnrichedRecord {
        person,
        start_date,
        country: location.country,
        office: location.office,
        job_title: job.title,
        department: job.department,
        salary,
    })
}

/// Draw a uniform random instant (second resolution) between the earliest
/// eligible start and the fixed ceiling, inclusive, and take its date.
///
/// Birth dates after roughly 2000-01-30 leave no eligible window; that is
/// a hard error rather than a clamp or a skip.
fn draw_start_date(birth: NaiveDate, rng: &mut dyn RngCore) -> Result<NaiveDate, GenerateError> {
    let floor = midnight_timestamp(birth) + MIN_EMPLOYMENT_AGE_SECS;
    let ceiling = midnight_timestamp(start_ceiling());
    if floor > ceiling {
        return Err(GenerateError::EmptyStartWindow {
            birth,
            floor: date_from_timestamp(floor)?,
            ceiling: start_ceiling(),
        });
    }

    let drawn = rng.random_range(floor..=ceiling);
    date_from_timestamp(drawn)
}

fn midnight_timestamp(date: NaiveDate) -> i64 {
    NaiveDateTime::new(date, NaiveTime::default())
        .and_utc()
        .timestamp()
}

fn date_from_timestamp(secs: i64) -> Result<NaiveDate, GenerateError> {
    DateTime::from_timestamp(secs, 0)
        .map(|instant| instant.date_naive())
        .ok_or(GenerateError::TimestampOutOfRange(secs))
}
