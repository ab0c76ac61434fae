//! Error types for the login suite

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuiteError {
    #[error("Browser kind '{0}' not supported (expected 'chrome' or 'edge')")]
    UnsupportedBrowser(String),

    #[error("WebDriver server failed to start: {0}")]
    DriverStartup(String),

    #[error("WebDriver server not ready after {0} attempts")]
    DriverUnready(usize),

    #[error("Session already closed")]
    SessionClosed,

    #[error("Timed out after {waited_ms} ms waiting for {locator} to become {condition}")]
    Timeout {
        locator: String,
        condition: &'static str,
        waited_ms: u64,
    },

    #[error("Assertion failed: expected '{expected}', but got '{actual}'")]
    AssertionFailed { expected: String, actual: String },

    #[error("Dataset error: {0}")]
    DatasetParse(String),

    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type SuiteResult<T> = Result<T, SuiteError>;
