//! Suite configuration

use std::path::PathBuf;
use std::time::Duration;

use crate::browser::Browser;
use crate::error::SuiteResult;

/// Entry point of the application under test.
pub const DEFAULT_BASE_URL: &str = "https://ndosisimplifiedautomation.vercel.app/";

/// Configuration for a suite run.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// URL the browser is pointed at when a session starts
    pub base_url: String,

    /// Browser kind to launch
    pub browser: Browser,

    /// Run the browser without a visible window
    pub headless: bool,

    /// Attach to an already-running WebDriver server instead of spawning one
    pub webdriver_url: Option<String>,

    /// Override the WebDriver server binary (default follows the browser kind)
    pub driver_binary: Option<PathBuf>,

    /// Bound for waits preceding clicks and keystrokes
    pub interaction_timeout: Duration,

    /// Bound for the post-submit confirmation wait; longer than the
    /// interaction bound since it spans a network round trip
    pub confirmation_timeout: Duration,

    /// Polling interval for explicit waits
    pub poll_interval: Duration,

    /// Bound for WebDriver server readiness after spawn
    pub driver_startup_timeout: Duration,

    /// Run reports and failure screenshots land here
    pub artifacts_dir: PathBuf,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            browser: Browser::Chrome,
            headless: true,
            webdriver_url: None,
            driver_binary: None,
            interaction_timeout: Duration::from_secs(10),
            confirmation_timeout: Duration::from_secs(20),
            poll_interval: Duration::from_millis(250),
            driver_startup_timeout: Duration::from_secs(15),
            artifacts_dir: PathBuf::from("test-results"),
        }
    }
}

impl SuiteConfig {
    /// Apply `NDOSI_E2E_*` environment overrides on top of `self`.
    pub fn overlay_env(mut self) -> SuiteResult<Self> {
        if let Ok(url) = std::env::var("NDOSI_E2E_BASE_URL") {
            self.base_url = url;
        }
        if let Ok(kind) = std::env::var("NDOSI_E2E_BROWSER") {
            self.browser = kind.parse()?;
        }
        if let Ok(url) = std::env::var("NDOSI_E2E_WEBDRIVER_URL") {
            self.webdriver_url = Some(url);
        }
        if let Ok(value) = std::env::var("NDOSI_E2E_HEADLESS") {
            self.headless = matches!(value.as_str(), "1" | "true" | "yes");
        }
        if let Ok(path) = std::env::var("NDOSI_E2E_DRIVER_BINARY") {
            self.driver_binary = Some(PathBuf::from(path));
        }
        Ok(self)
    }

    /// Path of the WebDriver server binary to spawn.
    pub fn resolved_driver_binary(&self) -> PathBuf {
        self.driver_binary
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.browser.driver_binary()))
    }
}
