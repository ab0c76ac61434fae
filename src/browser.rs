//! Browser kind selection and WebDriver capabilities

use std::fmt;
use std::str::FromStr;

use thirtyfour::prelude::*;
use thirtyfour::Capabilities;

use crate::error::{SuiteError, SuiteResult};

/// Browser kinds the suite can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Browser {
    #[default]
    Chrome,
    Edge,
}

impl Browser {
    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Edge => "edge",
        }
    }

    /// Name of the WebDriver server binary for this kind.
    pub fn driver_binary(&self) -> &'static str {
        match self {
            Browser::Chrome => "chromedriver",
            Browser::Edge => "msedgedriver",
        }
    }

    /// Build session capabilities for this kind.
    pub fn capabilities(&self, headless: bool) -> SuiteResult<Capabilities> {
        match self {
            Browser::Chrome => {
                let mut caps = DesiredCapabilities::chrome();
                if headless {
                    caps.set_headless()?;
                }
                Ok(caps.into())
            }
            Browser::Edge => {
                let mut caps = DesiredCapabilities::edge();
                if headless {
                    caps.set_headless()?;
                }
                Ok(caps.into())
            }
        }
    }
}

impl FromStr for Browser {
    type Err = SuiteError;

    /// Parse a browser kind. Unrecognized kinds fail with
    /// [`SuiteError::UnsupportedBrowser`] rather than defaulting.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chrome" => Ok(Browser::Chrome),
            "edge" => Ok(Browser::Edge),
            other => Err(SuiteError::UnsupportedBrowser(other.to_string())),
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
