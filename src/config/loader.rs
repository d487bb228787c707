//! Roster loading functionality.
//!
//! This module provides the [`RosterLoader`] type for loading roster
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};
use crate::models::Employee;

use super::types::RosterConfig;

/// Loads and provides access to a roster.
///
/// # File Format
///
/// ```text
/// roster:
///   - variant: engineer
///     count: 10
///   - variant: truck_driver
///     count: 20
///   - variant: executive
///     count: 1
/// ```
///
/// Variant names are `executive`, `engineer` and `truck_driver`. Anything
/// else is rejected while loading, so a loaded roster only ever expands to
/// constructed employees.
#[derive(Debug, Clone)]
pub struct RosterLoader {
    config: RosterConfig,
}

impl RosterLoader {
    /// Loads and validates a roster from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `RosterLoader` on success, or an error if:
    /// - The file cannot be read (`ConfigNotFound`)
    /// - The file is not valid YAML or names an unknown variant (`ConfigParseError`)
    /// - The roster is empty, has a zero count, or exceeds
    ///   [`MAX_HEADCOUNT`](super::MAX_HEADCOUNT) employees (`InvalidRoster`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_visitor::config::RosterLoader;
    ///
    /// let loader = RosterLoader::load("./config/roster.yaml")?;
    /// # Ok::<(), payroll_visitor::error::PayrollError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;
        debug!(path = %path_str, headcount = config.headcount(), "Loaded roster");

        Ok(Self { config })
    }

    /// Parses and validates roster YAML. `source` names the input in errors.
    pub fn parse(content: &str, source: &str) -> PayrollResult<RosterConfig> {
        let config: RosterConfig =
            serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Returns the underlying roster configuration.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Total number of employees on the roster.
    pub fn headcount(&self) -> usize {
        self.config.headcount()
    }

    /// Expands the roster into employee instances, in file order.
    pub fn employees(&self) -> Vec<Employee> {
        self.config.employees()
    }
}
