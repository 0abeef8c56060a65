use serde::Deserialize;

/// Next overhead pass, exactly as the prediction service reported it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PassPrediction {
    pub rise_time_epoch_seconds: i64,
    pub duration_seconds: i64,
}

#[derive(Debug, Deserialize)]
pub struct PassResponse {
    pub response: Option<Vec<PassEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct PassEntry {
    pub risetime: i64,
    pub duration: i64,
}

impl From<&PassEntry> for PassPrediction {
    fn from(entry: &PassEntry) -> Self {
        PassPrediction {
            rise_time_epoch_seconds: entry.risetime,
            duration_seconds: entry.duration,
        }
    }
}
