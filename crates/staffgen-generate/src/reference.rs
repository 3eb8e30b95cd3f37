//! Fixed reference tables for employment enrichment.
//!
//! Both tables are process-wide constants; the enricher picks one entry
//! from each uniformly at random per record.

/// A country/office pair. The two fields are always assigned together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub country: &'static str,
    pub office: &'static str,
}

/// A job title with its department and salary band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobProfile {
    pub title: &'static str,
    pub department: &'static str,
    pub salary_min: i64,
    pub salary_max: i64,
}

pub const LOCATIONS: &[Location] = &[
    Location { country: "Belgium", office: "Brussels" },
    Location { country: "Germany", office: "Berlin" },
    Location { country: "Germany", office: "Hamburg" },
    Location { country: "Germany", office: "Munich" },
    Location { country: "Ireland", office: "Dublin" },
    Location { country: "France", office: "Bordeaux" },
    Location { country: "France", office: "Paris" },
    Location { country: "France", office: "Lyon" },
    Location { country: "France", office: "Nice" },
    Location { country: "The Netherlands", office: "Amsterdam" },
    Location { country: "United Kingdom", office: "Edinburgh" },
    Location { country: "United Kingdom", office: "London" },
];

pub const JOBS: &[JobProfile] = &[
    JobProfile { title: "Systems Architect", department: "System", salary_min: 65000, salary_max: 80000 },
    JobProfile { title: "Systems Administrator", department: "System", salary_min: 65000, salary_max: 80000 },
    JobProfile { title: "Support Lead", department: "Support", salary_min: 50000, salary_max: 75000 },
    JobProfile { title: "Support Engineer", department: "Support", salary_min: 40000, salary_max: 50000 },
    JobProfile { title: "Support Technician", department: "Support", salary_min: 35000, salary_max: 40000 },
    JobProfile { title: "Development Team Leader", department: "Engineering", salary_min: 60000, salary_max: 75000 },
    JobProfile { title: "Senior Javascript Developer", department: "Engineering", salary_min: 50000, salary_max: 60000 },
    JobProfile { title: "Javascript Developer", department: "Engineering", salary_min: 40000, salary_max: 50000 },
    JobProfile { title: "Junior Javascript Developer", department: "Engineering", salary_min: 35000, salary_max: 45000 },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn locations_are_twelve_unique_pairs() {
        assert_eq!(LOCATIONS.len(), 12);
        let pairs: HashSet<(&str, &str)> = LOCATIONS
            .iter()
            .map(|location| (location.country, location.office))
            .collect();
        assert_eq!(pairs.len(), LOCATIONS.len());
    }

    #[test]
    fn jobs_are_nine_with_valid_salary_bands() {
        assert_eq!(JOBS.len(), 9);
        for job in JOBS {
            assert!(
                job.salary_min <= job.salary_max,
                "salary band inverted for '{}'",
                job.title
            );
        }
    }

    #[test]
    fn job_titles_are_unique() {
        let titles: HashSet<&str> = JOBS.iter().map(|job| job.title).collect();
        assert_eq!(titles.len(), JOBS.len());
    }
}
