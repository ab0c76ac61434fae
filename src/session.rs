//! Browser session lifecycle - one owned WebDriver handle per test case

use thirtyfour::WebDriver;
use tracing::{debug, info};

use crate::config::SuiteConfig;
use crate::error::{SuiteError, SuiteResult};

/// An owned, live browser session bound to a single browser process.
///
/// A session belongs to exactly one test case. It is created fresh before
/// the case runs, passed by reference into the page layer, and stopped
/// unconditionally afterwards. There is no process-wide driver state.
pub struct Session {
    driver: Option<WebDriver>,
    base_url: String,
}

impl Session {
    /// Launch a browser of the configured kind, maximize the window, and
    /// navigate to the base URL.
    pub async fn start(config: &SuiteConfig, webdriver_url: &str) -> SuiteResult<Self> {
        let caps = config.browser.capabilities(config.headless)?;

        info!(
            "Starting {} session via {} -> {}",
            config.browser, webdriver_url, config.base_url
        );

        let driver = WebDriver::new(webdriver_url, caps).await?;
        driver.maximize_window().await?;
        driver.goto(&config.base_url).await?;

        Ok(Session {
            driver: Some(driver),
            base_url: config.base_url.clone(),
        })
    }

    /// The live WebDriver handle, or [`SuiteError::SessionClosed`] once
    /// [`Session::stop`] has run.
    pub fn driver(&self) -> SuiteResult<&WebDriver> {
        self.driver.as_ref().ok_or(SuiteError::SessionClosed)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// True until `stop` has run.
    pub fn is_open(&self) -> bool {
        self.driver.is_some()
    }

    /// Quit the browser. Idempotent; calling it on a stopped session does
    /// nothing.
    pub async fn stop(&mut self) -> SuiteResult<()> {
        if let Some(driver) = self.driver.take() {
            debug!("Quitting browser session");
            driver.quit().await?;
        }
        Ok(())
    }
}
