//! Search and Filter Criteria
//!
//! `SearchCriteria` goes to the server; `FilterCriteria` is applied locally
//! against the full catalog snapshot.

use crate::models::JobListing;

/// Server-side search parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub title: String,
    pub location: String,
    pub category: String,
}

impl SearchCriteria {
    /// Query parameters with empty fields left out; values are sent as typed
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        [
            ("title", &self.title),
            ("location", &self.location),
            ("category", &self.category),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key, value.clone()))
        .collect()
    }
}

/// Salary band selected in the filter panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SalaryBand {
    /// `"N+"`: minimum salary at least N
    AtLeast(f64),
    /// `"N-M"`: minimum salary at least N and maximum salary at most M
    Between(f64, f64),
}

impl SalaryBand {
    /// Parse a band value. Empty input means no band.
    ///
    /// A bound that does not start with digits parses as NaN, which no
    /// salary compares against, so a malformed band matches nothing. That
    /// includes `"N-"`, whose missing max is NaN.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        if let Some(min) = value.strip_suffix('+') {
            let min = min.strip_suffix('-').unwrap_or(min);
            return Some(SalaryBand::AtLeast(parse_bound(min)));
        }
        let band = match value.split_once('-') {
            Some((min, max)) => SalaryBand::Between(parse_bound(min), parse_bound(max)),
            None => SalaryBand::Between(parse_bound(value), f64::NAN),
        };
        Some(band)
    }

    pub fn contains(&self, job: &JobListing) -> bool {
        match *self {
            SalaryBand::AtLeast(min) => job.min_salary >= min,
            SalaryBand::Between(min, max) => job.min_salary >= min && job.max_salary <= max,
        }
    }
}

/// Leading integer of `text` (optional sign, then digits); NaN when there is none
fn parse_bound(text: &str) -> f64 {
    let text = text.trim_start();
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'-') => (-1.0, &text[1..]),
        Some(b'+') => (1.0, &text[1..]),
        _ => (1.0, text),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    match digits.parse::<f64>() {
        Ok(value) => sign * value,
        Err(_) => f64::NAN,
    }
}

/// Client-side filters, each one optional and ANDed together
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub job_type: Option<String>,
    pub experience_level: Option<String>,
    pub salary: Option<SalaryBand>,
}

impl FilterCriteria {
    /// Build from raw select values; empty strings mean "any"
    pub fn from_inputs(job_type: &str, experience_level: &str, salary: &str) -> Self {
        let non_empty = |value: &str| (!value.is_empty()).then(|| value.to_string());
        Self {
            job_type: non_empty(job_type),
            experience_level: non_empty(experience_level),
            salary: SalaryBand::parse(salary),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.job_type.is_none() && self.experience_level.is_none() && self.salary.is_none()
    }

    /// Exact, case-sensitive comparisons; no normalization
    pub fn matches(&self, job: &JobListing) -> bool {
        if let Some(job_type) = &self.job_type {
            if job.job_type.as_deref() != Some(job_type.as_str()) {
                return false;
            }
        }
        if let Some(level) = &self.experience_level {
            if job.experience_level.as_deref() != Some(level.as_str()) {
                return false;
            }
        }
        match &self.salary {
            Some(band) => band.contains(job),
            None => true,
        }
    }

    /// The subsequence of `jobs` passing every active filter, order kept
    pub fn apply(&self, jobs: &[JobListing]) -> Vec<JobListing> {
        jobs.iter().filter(|job| self.matches(job)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::job;

    #[test]
    fn test_query_pairs_skip_empty_fields() {
        let criteria = SearchCriteria {
            title: "eng".into(),
            location: String::new(),
            category: String::new(),
        };
        assert_eq!(criteria.query_pairs(), vec![("title", "eng".to_string())]);
        assert!(SearchCriteria::default().query_pairs().is_empty());
    }

    #[test]
    fn test_query_pairs_send_values_untouched() {
        let criteria = SearchCriteria {
            title: " rust dev ".into(),
            location: "   ".into(),
            category: String::new(),
        };
        assert_eq!(
            criteria.query_pairs(),
            vec![("title", " rust dev ".to_string()), ("location", "   ".to_string())]
        );
    }

    #[test]
    fn test_parse_open_band() {
        assert_eq!(SalaryBand::parse("100000+"), Some(SalaryBand::AtLeast(100000.0)));
        assert_eq!(SalaryBand::parse("100000-+"), Some(SalaryBand::AtLeast(100000.0)));
    }

    #[test]
    fn test_parse_closed_band() {
        assert_eq!(SalaryBand::parse("50000-80000"), Some(SalaryBand::Between(50000.0, 80000.0)));
        assert_eq!(SalaryBand::parse(""), None);
    }

    #[test]
    fn test_malformed_band_matches_nothing() {
        let jobs = vec![job(1, "A", 10.0, 20.0), job(2, "B", 60000.0, 70000.0)];

        for raw in ["abc-def", "abc+", "50000-xyz", "50000"] {
            let criteria = FilterCriteria::from_inputs("", "", raw);
            assert!(criteria.apply(&jobs).is_empty(), "band {:?} should match nothing", raw);
        }
    }

    #[test]
    fn test_band_without_max_matches_nothing() {
        assert!(matches!(
            SalaryBand::parse("50000-"),
            Some(SalaryBand::Between(min, max)) if min == 50000.0 && max.is_nan()
        ));

        let jobs = vec![job(1, "A", 60000.0, 70000.0)];
        let criteria = FilterCriteria::from_inputs("", "", "50000-");
        assert!(criteria.apply(&jobs).is_empty());
    }

    #[test]
    fn test_open_band_uses_min_salary_only() {
        let jobs = vec![
            job(1, "Low", 40000.0, 200000.0),
            job(2, "Edge", 80000.0, 90000.0),
            job(3, "High", 120000.0, 150000.0),
        ];
        let criteria = FilterCriteria::from_inputs("", "", "80000+");
        let ids: Vec<u64> = criteria.apply(&jobs).iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_closed_band_is_inclusive() {
        let jobs = vec![
            job(1, "Inside", 50000.0, 80000.0),
            job(2, "Above", 50000.0, 80001.0),
            job(3, "Below", 49999.0, 60000.0),
        ];
        let criteria = FilterCriteria::from_inputs("", "", "50000-80000");
        let ids: Vec<u64> = criteria.apply(&jobs).iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_filters_are_conjunctive_and_exact() {
        let mut a = job(1, "A", 90000.0, 100000.0);
        a.experience_level = Some("SENIOR".into());
        let mut b = job(2, "B", 90000.0, 100000.0);
        b.experience_level = Some("MID".into());
        let mut c = job(3, "C", 90000.0, 100000.0);
        c.job_type = Some("full time".into());
        c.experience_level = Some("SENIOR".into());

        let criteria = FilterCriteria::from_inputs("Full Time", "SENIOR", "80000+");
        let ids: Vec<u64> = criteria.apply(&[a, b, c]).iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_empty_criteria_keep_everything_in_order() {
        let jobs = vec![job(3, "C", 1.0, 2.0), job(1, "A", 1.0, 2.0), job(2, "B", 1.0, 2.0)];
        let criteria = FilterCriteria::from_inputs("", "", "");
        assert!(criteria.is_empty());
        assert_eq!(criteria.apply(&jobs), jobs);
    }
}
