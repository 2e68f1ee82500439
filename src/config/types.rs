use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub timeout: Option<DurationValue>,
    pub out: Option<String>,
    pub listen: Option<String>,
    pub timeframe_length: Option<u64>,
    pub timeframe_unit: Option<String>,
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,
}

/// A duration given either as whole seconds or as text such as `30s` or `2m`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}
