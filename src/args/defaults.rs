/// Metric endpoint queried when neither the CLI nor a config file names one.
pub const DEFAULT_BASE_URL: &str =
    "https://e7jk6o4svh.execute-api.us-east-1.amazonaws.com/testing/yamlcloudwatchtest";

pub const DEFAULT_OUT_PATH: &str = "metrics.html";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
