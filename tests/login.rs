//! Login suite entry point
//!
//! This file is the test binary that runs the login cases against the
//! deployed application. Run with:
//!   cargo test --test login -- [args]
//!
//! Requires chromedriver (or msedgedriver) on PATH, or `--webdriver-url`
//! pointing at a running server. When neither is available, or the target
//! application is unreachable, the binary skips cleanly with exit code 0.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use ndosi_e2e::{Browser, DriverServer, LoginCase, SuiteConfig, SuiteResult, SuiteRunner};

#[derive(Parser, Debug)]
#[command(name = "ndosi-e2e")]
#[command(about = "Login E2E suite for the Ndosi learning platform")]
struct Args {
    /// Directory of YAML login cases (the built-in canonical case when absent)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Run only the case with this name
    #[arg(short, long)]
    name: Option<String>,

    /// Browser kind (chrome, edge)
    #[arg(short, long, default_value = "chrome")]
    browser: String,

    /// Run the browser headless
    #[arg(long, default_value = "true")]
    headless: bool,

    /// Attach to a running WebDriver server instead of spawning one
    #[arg(long)]
    webdriver_url: Option<String>,

    /// Target application URL
    #[arg(long, default_value = ndosi_e2e::config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Directory for reports and failure screenshots
    #[arg(short, long, default_value = "test-results")]
    output: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();

    let args = Args::parse();

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let result = rt.block_on(async_main(args));

    match result {
        Ok(true) => std::process::exit(0),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}

async fn async_main(args: Args) -> SuiteResult<bool> {
    let browser: Browser = args.browser.parse()?;

    let config = SuiteConfig {
        base_url: args.base_url,
        browser,
        headless: args.headless,
        webdriver_url: args.webdriver_url,
        artifacts_dir: args.output,
        ..Default::default()
    }
    .overlay_env()?;

    if let Some(reason) = skip_reason(&config).await {
        warn!("Skipping login suite: {}", reason);
        return Ok(true);
    }

    let cases = load_cases(&args.data, &args.name)?;
    if cases.is_empty() {
        eprintln!("No login cases selected");
        return Ok(false);
    }

    let mut runner = SuiteRunner::new(config);
    let report = runner.run_cases(&cases).await?;
    runner.write_report(&report)?;
    runner.shutdown();

    Ok(report.failed == 0)
}

fn load_cases(data: &Option<PathBuf>, name: &Option<String>) -> SuiteResult<Vec<LoginCase>> {
    let cases = match data {
        Some(dir) => LoginCase::load_all(dir)?,
        None => vec![LoginCase::canonical()],
    };

    Ok(match name {
        Some(name) => cases.into_iter().filter(|c| &c.name == name).collect(),
        None => cases,
    })
}

/// Preflight: a reason to skip this run, or None when it can proceed.
async fn skip_reason(config: &SuiteConfig) -> Option<String> {
    if config.webdriver_url.is_none() && !DriverServer::available(config) {
        return Some(format!(
            "WebDriver server binary '{}' not found",
            config.resolved_driver_binary().display()
        ));
    }

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .ok()?;
    match client.get(&config.base_url).send().await {
        Ok(_) => None,
        Err(e) => Some(format!(
            "target application {} unreachable: {}",
            config.base_url, e
        )),
    }
}
