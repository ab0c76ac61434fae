//! Ndosi Login E2E Suite
//!
//! Drives a real browser over the W3C WebDriver protocol against the Ndosi
//! learning platform and verifies the login flow end to end:
//! - Spawns a WebDriver server (chromedriver or msedgedriver) or attaches
//!   to a running one
//! - Owns one browser session per test case, torn down on every exit path
//! - Interacts through a page layer whose every action is preceded by an
//!   explicit bounded polling wait
//! - Asserts the rendered confirmation text by exact equality
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SuiteRunner                              │
//! │    ├── webdriver_url() -> DriverServer (spawn + /status)    │
//! │    ├── run_case(case)  -> CaseReport                        │
//! │    │     ├── Session::start(browser, base_url)              │
//! │    │     ├── LoginPage::login(email, password)              │
//! │    │     ├── LoginPage::verify_login_success(expected)      │
//! │    │     └── Session::stop()   (every exit path)            │
//! │    └── write_report() -> login-report.json                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  LoginPage                                                  │
//! │    ├── locators: login-open, email-input, password-input,   │
//! │    │             submit, confirmation                       │
//! │    └── wait::wait_until(locator, Visible | Clickable)       │
//! │          (re-resolves the element on every poll)            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  LoginCase (YAML)                                           │
//! │    └── name, email, password, expected                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod browser;
pub mod config;
pub mod dataset;
pub mod driver;
pub mod error;
pub mod locator;
pub mod login_page;
pub mod runner;
pub mod session;
pub mod wait;

pub use browser::Browser;
pub use config::SuiteConfig;
pub use dataset::LoginCase;
pub use driver::DriverServer;
pub use error::{SuiteError, SuiteResult};
pub use login_page::LoginPage;
pub use runner::{CaseReport, RunReport, SuiteRunner};
pub use session::Session;
