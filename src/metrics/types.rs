use serde::{Deserialize, Deserializer, Serialize};

/// One named time series with positionally aligned timestamps and values.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricRecord {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, deserialize_with = "deserialize_timestamps")]
    pub timestamps: Vec<String>,
    #[serde(default)]
    pub values: Vec<f64>,
}

impl MetricRecord {
    /// Returns true when both sequences hold samples.
    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.timestamps.is_empty() && !self.values.is_empty()
    }

    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.timestamps.len() == self.values.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricResponse {
    #[serde(default)]
    pub metric_data_results: Vec<MetricRecord>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Number(serde_json::Number),
}

// Timestamps arrive as strings or numbers; both are kept in their raw text form.
fn deserialize_timestamps<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<RawTimestamp>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|timestamp| match timestamp {
            RawTimestamp::Text(text) => text,
            RawTimestamp::Number(number) => number.to_string(),
        })
        .collect())
}
