use log::debug;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::stats::error::Error;
use crate::stats::model::LocationRecord;

pub const DEFAULT_BASE_URL: &str = "https://www.trackcorona.live/api/";

/// The two datasets the API serves: per-country rows and per-city rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Countries,
    Cities,
}

impl Endpoint {
    fn path(self) -> &'static str {
        match self {
            Endpoint::Countries => "countries",
            Endpoint::Cities => "cities",
        }
    }
}

/// Top-level object the API wraps every response in.
#[derive(Deserialize)]
struct Envelope {
    code: i64,
    #[serde(default)]
    data: Vec<LocationRecord>,
}

pub struct ApiClient {
    base_url: Url,
    client: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { base_url, client })
    }

    /// Fetches one dataset. A single GET, no retries, no caching.
    pub fn fetch(&self, endpoint: Endpoint) -> Result<Vec<LocationRecord>, Error> {
        let url = format!("{}{}", self.base_url, endpoint.path());
        debug!("GET {url}");
        let body = self.client.get(&url).send()?.text()?;
        let records = parse_envelope(&body)?;
        debug!("{} records from /{}", records.len(), endpoint.path());
        Ok(records)
    }
}

/// Unwraps the API envelope. The payload is only touched once the envelope
/// reports success, so an error response without a `data` field is fine.
pub fn parse_envelope(body: &str) -> Result<Vec<LocationRecord>, Error> {
    let envelope: Envelope = serde_json::from_str(body)?;
    if envelope.code != 200 {
        return Err(Error::ApiStatus(envelope.code));
    }
    Ok(envelope.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_successful_envelope() {
        let body = r#"{
            "code": 200,
            "data": [
                {"location": "United States", "confirmed": 100, "dead": 10, "recovered": 50},
                {"location": "Italy", "confirmed": 42, "dead": 7, "recovered": null}
            ]
        }"#;
        let records = parse_envelope(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].location, "United States");
        assert_eq!(records[1].recovered, None);
    }

    #[test]
    fn error_code_never_touches_data() {
        let body = r#"{"code": 500}"#;
        match parse_envelope(body) {
            Err(Error::ApiStatus(500)) => {}
            other => panic!("expected ApiStatus(500), got {other:?}"),
        }
    }

    #[test]
    fn unparseable_body_is_a_parse_error() {
        let body = "<html>upgrading, back soon</html>";
        assert!(matches!(parse_envelope(body), Err(Error::Parse(_))));
    }

    #[test]
    fn success_with_empty_data_is_an_empty_result() {
        let records = parse_envelope(r#"{"code": 200, "data": []}"#).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn missing_count_fields_deserialize_as_none() {
        let records = parse_envelope(r#"{"code": 200, "data": [{"location": "Nowhere"}]}"#).unwrap();
        assert_eq!(records[0].confirmed, None);
        assert_eq!(records[0].dead, None);
        assert_eq!(records[0].recovered, None);
    }
}
