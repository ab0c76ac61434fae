//! Login scenario data - the parameterized credential rows

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SuiteError, SuiteResult};

/// Account the canonical case logs in with.
pub const CANONICAL_EMAIL: &str = "melsa@gmail.co.za";
pub const CANONICAL_PASSWORD: &str = "Pass@1234";

/// Text rendered in the greeting region after a successful login.
pub const CANONICAL_EXPECTED: &str = "Here's an overview of your learning journey";

/// One data row: credentials plus the expected confirmation text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCase {
    /// Unique name, used in logs and report entries
    pub name: String,

    pub email: String,
    pub password: String,

    /// Exact confirmation text the scenario asserts against
    pub expected: String,
}

impl LoginCase {
    /// The built-in canonical case.
    pub fn canonical() -> Self {
        Self {
            name: "valid-login".to_string(),
            email: CANONICAL_EMAIL.to_string(),
            password: CANONICAL_PASSWORD.to_string(),
            expected: CANONICAL_EXPECTED.to_string(),
        }
    }

    /// Parse a list of cases from a YAML string.
    pub fn from_yaml(yaml: &str) -> SuiteResult<Vec<Self>> {
        serde_yaml::from_str(yaml).map_err(SuiteError::from)
    }

    /// Parse a list of cases from a YAML file.
    pub fn from_file(path: &Path) -> SuiteResult<Vec<Self>> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
            .map_err(|e| SuiteError::DatasetParse(format!("{}: {}", path.display(), e)))
    }

    /// Load every case from the YAML files under `dir`.
    pub fn load_all(dir: &Path) -> SuiteResult<Vec<Self>> {
        let mut cases = Vec::new();

        for entry in walkdir::WalkDir::new(dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.path()
                    .extension()
                    .map(|ext| ext == "yaml" || ext == "yml")
                    .unwrap_or(false)
            })
        {
            cases.extend(Self::from_file(entry.path())?);
        }

        Ok(cases)
    }
}
