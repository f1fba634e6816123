use std::collections::HashMap;

use crate::stats::error::Error;
use crate::stats::model::{LocationRecord, StatsSummary};
use crate::stats::states;

/// Filters and sums location records for each scope. Holds the state lookup
/// table so scope operations stay free of globals.
pub struct Aggregator {
    states: &'static HashMap<&'static str, &'static str>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self {
            states: &states::ABBREV_TO_NAME,
        }
    }

    /// Sums every record. An empty payload is a valid all-zero result.
    pub fn global(&self, records: &[LocationRecord]) -> StatsSummary {
        let mut summary = StatsSummary::default();
        for record in records {
            summary.add(record);
        }
        summary
    }

    /// First record whose location equals the country name, ignoring case.
    /// Exact match only; "United States" never matches a query for
    /// "United States of America" or vice versa.
    pub fn country(
        &self,
        records: &[LocationRecord],
        country: &str,
    ) -> Result<StatsSummary, Error> {
        records
            .iter()
            .find(|record| record.location.eq_ignore_ascii_case(country))
            .map(StatsSummary::from_record)
            .ok_or_else(|| Error::NotFound(country.to_string()))
    }

    /// Sums every city row whose location names the state in full,
    /// case-sensitively. Rows carrying only the two-letter abbreviation
    /// never match; that mirrors how the upstream API writes its location
    /// strings. Zero matches still yields a zero summary.
    pub fn state(
        &self,
        records: &[LocationRecord],
        code: &str,
    ) -> Result<(String, StatsSummary), Error> {
        let full_name = self.resolve_state(code)?;
        let mut summary = StatsSummary::default();
        for record in records
            .iter()
            .filter(|record| record.location.contains(full_name))
        {
            summary.add(record);
        }
        Ok((full_name.to_string(), summary))
    }

    /// First city row whose location contains both the full state name and
    /// the county name, ignoring case.
    pub fn county(
        &self,
        records: &[LocationRecord],
        county: &str,
        code: &str,
    ) -> Result<(String, StatsSummary), Error> {
        let full_name = self.resolve_state(code)?;
        let label = format!("{county} County, {full_name}");
        let state_needle = full_name.to_lowercase();
        let county_needle = county.to_lowercase();
        records
            .iter()
            .find(|record| {
                let location = record.location.to_lowercase();
                location.contains(&state_needle) && location.contains(&county_needle)
            })
            .map(StatsSummary::from_record)
            .map(|summary| (label.clone(), summary))
            .ok_or(Error::NotFound(label))
    }

    fn resolve_state(&self, code: &str) -> Result<&'static str, Error> {
        self.states
            .get(code.to_ascii_uppercase().as_str())
            .copied()
            .ok_or_else(|| Error::UnknownState(code.to_string()))
    }
}
