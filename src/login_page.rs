//! Page interaction layer for the login flow
//!
//! Translates login intents into primitive DOM operations so test scenarios
//! never touch raw element lookup. Every interaction waits on an explicit
//! named condition before acting, and nothing here caches a resolved
//! element across waits.

use std::time::Duration;

use thirtyfour::WebElement;
use tracing::{debug, info};

use crate::config::SuiteConfig;
use crate::error::{SuiteError, SuiteResult};
use crate::locator::Locator;
use crate::session::Session;
use crate::wait::{self, Condition};

/// Control that opens the login form from the landing page.
const LOGIN_OPEN: Locator = Locator::xpath(
    "login-open",
    "//*[@id='app-root']/nav/div[1]/div[3]/button/span[2]",
);

const EMAIL_INPUT: Locator = Locator::id("email-input", "login-email");
const PASSWORD_INPUT: Locator = Locator::id("password-input", "login-password");
const SUBMIT: Locator = Locator::id("submit", "login-submit");

/// Greeting region rendered after a successful login.
const CONFIRMATION: Locator = Locator::xpath(
    "confirmation",
    r#"//p[contains(text(), "Here's an overview of your learning journey")]"#,
);

/// The login page of the target application, bound to an active session.
pub struct LoginPage<'a> {
    session: &'a Session,
    interaction_timeout: Duration,
    confirmation_timeout: Duration,
    poll_interval: Duration,
}

impl<'a> LoginPage<'a> {
    pub fn new(session: &'a Session, config: &SuiteConfig) -> Self {
        Self {
            session,
            interaction_timeout: config.interaction_timeout,
            confirmation_timeout: config.confirmation_timeout,
            poll_interval: config.poll_interval,
        }
    }

    /// Click the control that opens the login form, once it is clickable.
    pub async fn open_login_form(&self) -> SuiteResult<()> {
        let control = self
            .wait_for(&LOGIN_OPEN, Condition::Clickable, self.interaction_timeout)
            .await?;
        control.click().await?;
        Ok(())
    }

    /// Type the credentials into the login form. Fields are assumed empty;
    /// prior content is not cleared.
    pub async fn enter_credentials(&self, email: &str, password: &str) -> SuiteResult<()> {
        let field = self
            .wait_for(&EMAIL_INPUT, Condition::Visible, self.interaction_timeout)
            .await?;
        field.send_keys(email).await?;

        let field = self
            .wait_for(&PASSWORD_INPUT, Condition::Visible, self.interaction_timeout)
            .await?;
        field.send_keys(password).await?;
        Ok(())
    }

    /// Submit the login form once the control is clickable.
    pub async fn submit(&self) -> SuiteResult<()> {
        let control = self
            .wait_for(&SUBMIT, Condition::Clickable, self.interaction_timeout)
            .await?;
        control.click().await?;
        Ok(())
    }

    /// Full login: open the form, enter credentials, submit.
    pub async fn login(&self, email: &str, password: &str) -> SuiteResult<()> {
        info!("Logging in as {}", email);
        self.open_login_form().await?;
        self.enter_credentials(email, password).await?;
        self.submit().await
    }

    /// Wait for the confirmation region and compare its rendered text to
    /// `expected` by exact equality. Uses the longer confirmation bound;
    /// the region appears only after the login round trip completes.
    pub async fn verify_login_success(&self, expected: &str) -> SuiteResult<()> {
        let region = self
            .wait_for(&CONFIRMATION, Condition::Visible, self.confirmation_timeout)
            .await?;
        let actual = region.text().await?;

        if actual != expected {
            return Err(SuiteError::AssertionFailed {
                expected: expected.to_string(),
                actual,
            });
        }

        debug!("Confirmation text matched");
        Ok(())
    }

    async fn wait_for(
        &self,
        locator: &Locator,
        condition: Condition,
        timeout: Duration,
    ) -> SuiteResult<WebElement> {
        wait::wait_until(
            self.session.driver()?,
            locator,
            condition,
            timeout,
            self.poll_interval,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assertion_failure_carries_both_values() {
        let err = SuiteError::AssertionFailed {
            expected: "Here's an overview of your learning journey".to_string(),
            actual: "Here's an overview of your learning journe".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("expected 'Here's an overview of your learning journey'"));
        assert!(msg.contains("got 'Here's an overview of your learning journe'"));
    }

    #[test]
    fn locators_match_the_application_markup() {
        assert_eq!(EMAIL_INPUT.selector(), "login-email");
        assert_eq!(PASSWORD_INPUT.selector(), "login-password");
        assert_eq!(SUBMIT.selector(), "login-submit");
        assert!(LOGIN_OPEN.selector().starts_with("//*[@id='app-root']"));
    }
}
