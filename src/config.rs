use std::time::Duration;

pub const DEFAULT_KEY_PARAM: &str = "appid";

/// OpenWeatherMap lookup for a city that does not exist: a valid key gets a
/// 404 "city not found", a bad one gets 401 "Invalid API key".
pub const OPENWEATHER_PROBE_URL: &str =
    "https://api.openweathermap.org/data/2.5/weather?q=NonExistentCity123";

/// Settings for the generic API tester.
#[derive(Debug, Clone)]
pub struct TesterConfig {
    pub timeout: Duration,
    /// Pre-filled into the key parameter field on startup.
    pub default_key_param: String,
    pub window_size: (f32, f32),
}

impl Default for TesterConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            default_key_param: DEFAULT_KEY_PARAM.to_string(),
            window_size: (800.0, 600.0),
        }
    }
}

/// Settings for the API key validator.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    pub timeout: Duration,
    pub probe_url: String,
    pub key_param: String,
    pub window_size: (f32, f32),
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            probe_url: OPENWEATHER_PROBE_URL.to_string(),
            key_param: DEFAULT_KEY_PARAM.to_string(),
            window_size: (600.0, 400.0),
        }
    }
}
