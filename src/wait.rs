//! Explicit bounded polling waits
//!
//! The target application renders asynchronously after the initial page load
//! and again after form submission, so every synchronization point polls a
//! named condition at a short interval up to a bounded maximum. There are no
//! unconditional sleeps anywhere in the suite.

use std::time::{Duration, Instant};

use thirtyfour::error::WebDriverError;
use thirtyfour::{WebDriver, WebElement};
use tokio::time::sleep;
use tracing::{debug, trace};

use crate::error::{SuiteError, SuiteResult};
use crate::locator::Locator;

/// Condition a wait polls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Element is present and displayed
    Visible,
    /// Element is displayed and enabled
    Clickable,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Visible => "visible",
            Condition::Clickable => "clickable",
        }
    }
}

/// Poll until `locator` satisfies `condition`, re-resolving the element on
/// every attempt. Returns the freshly-resolved element on success, and
/// [`SuiteError::Timeout`] once `timeout` elapses.
pub async fn wait_until(
    driver: &WebDriver,
    locator: &Locator,
    condition: Condition,
    timeout: Duration,
    poll_interval: Duration,
) -> SuiteResult<WebElement> {
    let deadline = Instant::now() + timeout;
    debug!("Waiting for {} to become {}", locator, condition.as_str());

    loop {
        if let Some(element) = probe(driver, locator, condition).await? {
            return Ok(element);
        }
        trace!("{} not yet {}", locator.name(), condition.as_str());

        if Instant::now() >= deadline {
            return Err(SuiteError::Timeout {
                locator: locator.to_string(),
                condition: condition.as_str(),
                waited_ms: timeout.as_millis() as u64,
            });
        }
        sleep(poll_interval).await;
    }
}

/// One resolution attempt. `Ok(None)` means "not yet": the element is
/// missing, stale, or fails the condition.
async fn probe(
    driver: &WebDriver,
    locator: &Locator,
    condition: Condition,
) -> SuiteResult<Option<WebElement>> {
    let element = match driver.find(locator.by()).await {
        Ok(element) => element,
        Err(WebDriverError::NoSuchElement(_)) | Err(WebDriverError::StaleElementReference(_)) => {
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let satisfied = match condition {
        Condition::Visible => element.is_displayed().await,
        Condition::Clickable => element.is_clickable().await,
    };

    match satisfied {
        Ok(true) => Ok(Some(element)),
        Ok(false) => Ok(None),
        // The element can go stale between resolution and the check.
        Err(WebDriverError::NoSuchElement(_)) | Err(WebDriverError::StaleElementReference(_)) => {
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
