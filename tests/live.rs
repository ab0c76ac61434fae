//! Live end-to-end properties
//!
//! These tests run against a real WebDriver server and the deployed
//! application, so they are ignored by default. Opt in with:
//!   cargo test --test live -- --ignored
//!
//! The `NDOSI_E2E_*` environment overrides apply (browser kind, WebDriver
//! URL, base URL).

use std::time::{Duration, Instant};

use ndosi_e2e::locator::Locator;
use ndosi_e2e::wait::{self, Condition};
use ndosi_e2e::{
    DriverServer, LoginCase, LoginPage, Session, SuiteConfig, SuiteError, SuiteRunner,
};

fn live_config() -> SuiteConfig {
    SuiteConfig::default()
        .overlay_env()
        .expect("invalid NDOSI_E2E_* environment")
}

/// Driver server + open session on the landing page.
async fn live_session(config: &SuiteConfig) -> (DriverServer, Session) {
    let server = DriverServer::spawn(config)
        .await
        .expect("WebDriver server failed to start");
    let session = Session::start(config, server.url())
        .await
        .expect("browser session failed to start");
    (server, session)
}

#[tokio::test]
#[ignore = "requires a WebDriver server and network access"]
async fn login_succeeds_with_canonical_case() {
    let mut runner = SuiteRunner::new(live_config());

    let report = runner
        .run_cases(&[LoginCase::canonical()])
        .await
        .expect("suite run failed");

    assert_eq!(report.passed, 1, "canonical login failed: {:?}", report.cases);
    assert_eq!(report.failed, 0);
}

#[tokio::test]
#[ignore = "requires a WebDriver server and network access"]
async fn stop_is_idempotent_on_a_live_session() {
    let config = live_config();
    let (_server, mut session) = live_session(&config).await;

    assert!(session.is_open());
    session.stop().await.expect("first stop failed");
    assert!(!session.is_open());
    session.stop().await.expect("second stop must do nothing");
}

#[tokio::test]
#[ignore = "requires a WebDriver server and network access"]
async fn wait_on_absent_element_fails_within_its_bound() {
    let config = live_config();
    let (_server, mut session) = live_session(&config).await;

    const MISSING: Locator = Locator::id("missing", "no-such-element-on-this-page");
    let bound = Duration::from_secs(2);

    let started = Instant::now();
    let result = wait::wait_until(
        session.driver().unwrap(),
        &MISSING,
        Condition::Visible,
        bound,
        Duration::from_millis(100),
    )
    .await;
    let elapsed = started.elapsed();

    session.stop().await.unwrap();

    let err = result.err();
    assert!(
        matches!(&err, Some(SuiteError::Timeout { .. })),
        "expected a timeout, got {:?}",
        err
    );
    assert!(elapsed >= bound, "wait gave up early: {:?}", elapsed);
    assert!(
        elapsed < bound + Duration::from_secs(5),
        "wait did not respect its bound: {:?}",
        elapsed
    );
}

#[tokio::test]
#[ignore = "requires a WebDriver server and network access"]
async fn mismatched_expectation_reports_both_strings() {
    let config = live_config();
    let (_server, mut session) = live_session(&config).await;

    let page = LoginPage::new(&session, &config);
    let case = LoginCase::canonical();

    page.login(&case.email, &case.password)
        .await
        .expect("login interactions failed");

    // Off by one trailing character from the rendered text.
    let wrong = format!("{}!", case.expected);
    let err = page
        .verify_login_success(&wrong)
        .await
        .expect_err("a mismatched expectation must fail");

    session.stop().await.unwrap();

    match err {
        SuiteError::AssertionFailed { expected, actual } => {
            assert_eq!(expected, wrong);
            assert_eq!(actual, case.expected);
        }
        other => panic!("expected AssertionFailed, got {:?}", other),
    }
}
