//! Request file loading functionality.
//!
//! This module provides the [`RequestLoader`] type for reading batches of
//! decision requests from YAML or JSON files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::request::{DecisionRequest, DecisionRequestFile};

/// Loads decision requests from a file.
///
/// Files ending in `.json` are parsed as JSON; anything else is parsed as
/// YAML.
///
/// # File Format
///
/// ```text
/// requests:
///   - id: app_001
///     payroll_category: B
///     gender: m
///     first_employment_date: 2024-04-04
/// ```
///
/// # Example
///
/// ```no_run
/// use credit_line_engine::intake::RequestLoader;
///
/// let loader = RequestLoader::load("./requests.yaml")?;
/// println!("{} requests", loader.requests().len());
/// # Ok::<(), credit_line_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RequestLoader {
    requests: Vec<DecisionRequest>,
}

impl RequestLoader {
    /// Loads requests from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `RequestLoader` on success, or an error if:
    /// - The file does not exist or cannot be read (`RequestFileNotFound`)
    /// - The file is not valid YAML/JSON of the expected shape (`RequestFileParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::RequestFileNotFound {
            path: path_str.clone(),
        })?;

        let file = if path.extension().is_some_and(|ext| ext == "json") {
            Self::parse_json(&content, &path_str)?
        } else {
            Self::parse_yaml(&content, &path_str)?
        };

        Ok(Self {
            requests: file.requests,
        })
    }

    fn parse_yaml(content: &str, path: &str) -> EngineResult<DecisionRequestFile> {
        serde_yaml::from_str(content).map_err(|e| EngineError::RequestFileParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    fn parse_json(content: &str, path: &str) -> EngineResult<DecisionRequestFile> {
        serde_json::from_str(content).map_err(|e| EngineError::RequestFileParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the loaded requests in file order.
    pub fn requests(&self) -> &[DecisionRequest] {
        &self.requests
    }

    /// Consumes the loader, returning the requests.
    pub fn into_requests(self) -> Vec<DecisionRequest> {
        self.requests
    }
}
