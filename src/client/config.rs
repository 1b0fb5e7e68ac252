/// Client configuration, fixed when the WASM bundle is built
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
}

impl Config {
    /// Read configuration captured from the build environment
    ///
    /// A bundle has no process environment at runtime, so the base URL is read with
    /// `option_env!`. When unset, requests go to the origin serving the app.
    pub fn from_env() -> Self {
        Self::new(option_env!("JOBZEE_API_URL").unwrap_or_default())
    }

    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: api_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Full URL for an API path such as `/api/v1/job/getall`
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.api_url, path)
        } else {
            format!("{}/{}", self.api_url, path)
        }
    }
}
