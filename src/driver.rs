//! WebDriver server management - spawning and readiness checking

use std::process::{Child, Command, Stdio};
use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

use crate::config::SuiteConfig;
use crate::error::{SuiteError, SuiteResult};

/// Handle to a running WebDriver server process (chromedriver or
/// msedgedriver).
pub struct DriverServer {
    child: Option<Child>,
    url: String,
    port: u16,
}

impl DriverServer {
    /// Spawn the WebDriver server for the configured browser kind and wait
    /// for it to report ready.
    pub async fn spawn(config: &SuiteConfig) -> SuiteResult<Self> {
        let binary = config.resolved_driver_binary();
        let port = find_free_port();
        let url = format!("http://127.0.0.1:{}", port);

        info!("Spawning {} on port {}", binary.display(), port);

        let child = Command::new(&binary)
            .arg(format!("--port={}", port))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                SuiteError::DriverStartup(format!("Failed to spawn {}: {}", binary.display(), e))
            })?;

        let server = DriverServer {
            child: Some(child),
            url: url.clone(),
            port,
        };

        server.wait_for_ready(config.driver_startup_timeout).await?;

        info!("WebDriver server ready at {}", url);
        Ok(server)
    }

    /// Whether the configured server binary can run at all. Used by entry
    /// points to skip cleanly on machines without a driver installed.
    pub fn available(config: &SuiteConfig) -> bool {
        Command::new(config.resolved_driver_binary())
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Poll the server's `/status` endpoint until it reports ready.
    async fn wait_for_ready(&self, timeout: Duration) -> SuiteResult<()> {
        let status_url = format!("{}/status", self.url);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()?;

        let start = std::time::Instant::now();
        let mut attempts = 0;

        while start.elapsed() < timeout {
            attempts += 1;

            match client.get(&status_url).send().await {
                Ok(resp) if resp.status().is_success() => {
                    let body: serde_json::Value = resp.json().await?;
                    if body["value"]["ready"].as_bool().unwrap_or(false) {
                        return Ok(());
                    }
                }
                Ok(resp) => {
                    warn!("Status check returned {}", resp.status());
                }
                Err(e) => {
                    if attempts == 1 {
                        info!("Waiting for WebDriver server to start...");
                    }
                    // Connection refused is expected while the server starts
                    if !e.is_connect() {
                        warn!("Status check error: {}", e);
                    }
                }
            }

            sleep(Duration::from_millis(100)).await;
        }

        Err(SuiteError::DriverUnready(attempts))
    }

    /// URL test sessions connect to.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Stop the server process. Idempotent.
    pub fn stop(&mut self) {
        let Some(mut child) = self.child.take() else {
            return;
        };

        info!("Stopping WebDriver server (pid: {})", child.id());

        // Graceful shutdown first
        #[cfg(unix)]
        {
            use nix::sys::signal::{kill, Signal};
            use nix::unistd::Pid;

            let pid = Pid::from_raw(child.id() as i32);
            if kill(pid, Signal::SIGTERM).is_ok() {
                std::thread::sleep(Duration::from_millis(200));
            }
        }

        // Force kill if still running
        let _ = child.kill();
        let _ = child.wait();
    }
}

impl Drop for DriverServer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Find a free port for the server to listen on.
fn find_free_port() -> u16 {
    use std::net::TcpListener;

    TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind to find free port")
        .local_addr()
        .expect("Failed to get local addr")
        .port()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_free_port() {
        let port1 = find_free_port();
        let port2 = find_free_port();

        assert!(port1 > 1024);
        assert!(port2 > 1024);
    }

    #[test]
    fn availability_is_false_for_missing_binary() {
        let config = SuiteConfig {
            driver_binary: Some("definitely-not-a-webdriver-binary".into()),
            ..Default::default()
        };
        assert!(!DriverServer::available(&config));
    }
}
