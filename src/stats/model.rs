use serde::Deserialize;

/// One row of per-place case data in the API payload. The API omits or nulls
/// counts it has no data for; those deserialize as `None` and count as zero.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationRecord {
    pub location: String,
    #[serde(default)]
    pub confirmed: Option<u64>,
    #[serde(default)]
    pub dead: Option<u64>,
    #[serde(default)]
    pub recovered: Option<u64>,
}

/// Aggregated counts for one scope, plus the derived figures the report
/// prints. Computed per query, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSummary {
    pub confirmed: u64,
    pub dead: u64,
    pub recovered: u64,
}

impl StatsSummary {
    pub fn from_record(record: &LocationRecord) -> Self {
        Self {
            confirmed: record.confirmed.unwrap_or(0),
            dead: record.dead.unwrap_or(0),
            recovered: record.recovered.unwrap_or(0),
        }
    }

    pub fn add(&mut self, record: &LocationRecord) {
        self.confirmed += record.confirmed.unwrap_or(0);
        self.dead += record.dead.unwrap_or(0);
        self.recovered += record.recovered.unwrap_or(0);
    }

    /// Confirmed minus recovered and dead. Goes negative when the source
    /// data disagrees with itself; not clamped.
    pub fn active(&self) -> i64 {
        self.confirmed as i64 - (self.recovered + self.dead) as i64
    }

    pub fn recovery_rate(&self) -> f64 {
        if self.confirmed == 0 {
            return 0.0;
        }
        self.recovered as f64 / self.confirmed as f64 * 100.0
    }

    pub fn mortality_rate(&self) -> f64 {
        if self.confirmed == 0 {
            return 0.0;
        }
        self.dead as f64 / self.confirmed as f64 * 100.0
    }
}
