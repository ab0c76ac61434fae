//! Suite runner - per-case session lifecycle, reporting, failure artifacts

use std::path::PathBuf;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::config::SuiteConfig;
use crate::dataset::LoginCase;
use crate::driver::DriverServer;
use crate::error::SuiteResult;
use crate::login_page::LoginPage;
use crate::session::Session;

/// Outcome of one login case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseReport {
    pub name: String,
    pub passed: bool,
    pub duration_ms: u64,
    pub error: Option<String>,
    pub screenshot: Option<PathBuf>,
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub started_at: String,
    pub browser: String,
    pub base_url: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u64,
    pub cases: Vec<CaseReport>,
}

/// Orchestrates the driver server, per-case sessions, and reporting.
///
/// Each case gets a fresh session that is stopped on every exit path, so a
/// failed case never leaks a browser. The driver server (when this runner
/// spawned one) is shut down when the runner is dropped.
pub struct SuiteRunner {
    config: SuiteConfig,
    driver_server: Option<DriverServer>,
}

impl SuiteRunner {
    pub fn new(config: SuiteConfig) -> Self {
        Self {
            config,
            driver_server: None,
        }
    }

    /// URL sessions connect to, spawning the driver server on first use
    /// unless the config points at an external one.
    async fn webdriver_url(&mut self) -> SuiteResult<String> {
        if let Some(url) = &self.config.webdriver_url {
            return Ok(url.clone());
        }

        match &self.driver_server {
            Some(server) => Ok(server.url().to_string()),
            None => {
                let server = DriverServer::spawn(&self.config).await?;
                let url = server.url().to_string();
                self.driver_server = Some(server);
                Ok(url)
            }
        }
    }

    /// Run one case: fresh session, drive the scenario, tear the session
    /// down regardless of the outcome, screenshot on failure.
    ///
    /// Scenario failures (timeouts, assertion mismatches) come back as a
    /// failed [`CaseReport`]; failures to launch the session at all
    /// propagate as errors and abort the run.
    pub async fn run_case(&mut self, case: &LoginCase) -> SuiteResult<CaseReport> {
        let webdriver_url = self.webdriver_url().await?;
        let start = Instant::now();

        debug!("Running case: {}", case.name);

        let mut session = Session::start(&self.config, &webdriver_url).await?;
        let outcome = drive(&session, &self.config, case).await;

        let screenshot = if outcome.is_err() {
            match self.capture_screenshot(&session, &case.name).await {
                Ok(path) => Some(path),
                Err(e) => {
                    warn!("Failed to capture failure screenshot: {}", e);
                    None
                }
            }
        } else {
            None
        };

        // Teardown runs before the outcome is inspected, on every path.
        if let Err(e) = session.stop().await {
            warn!("Session teardown failed: {}", e);
        }

        let duration_ms = start.elapsed().as_millis() as u64;

        Ok(match outcome {
            Ok(()) => CaseReport {
                name: case.name.clone(),
                passed: true,
                duration_ms,
                error: None,
                screenshot: None,
            },
            Err(e) => CaseReport {
                name: case.name.clone(),
                passed: false,
                duration_ms,
                error: Some(e.to_string()),
                screenshot,
            },
        })
    }

    /// Run a list of cases in order.
    pub async fn run_cases(&mut self, cases: &[LoginCase]) -> SuiteResult<RunReport> {
        let started_at = chrono::Utc::now().to_rfc3339();
        let start = Instant::now();

        let mut reports = Vec::new();
        let mut passed = 0;
        let mut failed = 0;

        info!("Running {} login case(s)...", cases.len());

        for case in cases {
            let report = self.run_case(case).await?;

            if report.passed {
                passed += 1;
                info!("PASS {} ({} ms)", report.name, report.duration_ms);
            } else {
                failed += 1;
                error!(
                    "FAIL {} - {}",
                    report.name,
                    report.error.as_deref().unwrap_or("unknown error")
                );
            }
            reports.push(report);
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        info!(
            "Login suite: {} passed, {} failed ({} ms)",
            passed, failed, duration_ms
        );

        Ok(RunReport {
            started_at,
            browser: self.config.browser.to_string(),
            base_url: self.config.base_url.clone(),
            total: cases.len(),
            passed,
            failed,
            duration_ms,
            cases: reports,
        })
    }

    async fn capture_screenshot(&self, session: &Session, case_name: &str) -> SuiteResult<PathBuf> {
        let dir = self.config.artifacts_dir.join("screenshots");
        std::fs::create_dir_all(&dir)?;

        let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ");
        let path = dir.join(format!("{}-{}.png", case_name, stamp));

        let png = session.driver()?.screenshot_as_png().await?;
        std::fs::write(&path, png)?;

        info!("Failure screenshot saved to {}", path.display());
        Ok(path)
    }

    /// Write the run report as pretty JSON into the artifacts directory.
    pub fn write_report(&self, report: &RunReport) -> SuiteResult<PathBuf> {
        std::fs::create_dir_all(&self.config.artifacts_dir)?;

        let path = self.config.artifacts_dir.join("login-report.json");
        let json = serde_json::to_string_pretty(report)?;
        std::fs::write(&path, json)?;

        info!("Report written to {}", path.display());
        Ok(path)
    }

    /// Shut down the driver server if this runner spawned one. Idempotent.
    pub fn shutdown(&mut self) {
        if let Some(mut server) = self.driver_server.take() {
            server.stop();
        }
    }
}

impl Drop for SuiteRunner {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// The scenario itself: a straight-line sequence, no branching.
async fn drive(session: &Session, config: &SuiteConfig, case: &LoginCase) -> SuiteResult<()> {
    let page = LoginPage::new(session, config);
    page.login(&case.email, &case.password).await?;
    page.verify_login_success(&case.expected).await
}
