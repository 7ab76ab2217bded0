//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a bonus scheme
//! from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::calculation::BonusEngine;
use crate::calendar::HolidayCalendar;
use crate::error::{EngineError, EngineResult};

use super::types::{BonusConfig, BonusRules, HolidayYearConfig, SchemeMetadata};

/// Loads and provides access to a bonus scheme configuration.
///
/// # Directory Structure
///
/// ```text
/// config/nrw/
/// ├── scheme.yaml      # Scheme metadata
/// ├── bonus.yaml       # Rates, threshold and deduction
/// └── holidays/
///     └── 2026.yaml    # Public holidays of one year
/// ```
///
/// The set of holiday files defines the covered year range. Dates in other
/// years classify as having no holidays.
///
/// # Example
///
/// ```no_run
/// use duty_bonus_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/nrw").unwrap();
/// println!("Loaded scheme: {}", loader.scheme().name);
/// println!("Covered years: {:?}", loader.calendar().covered_years());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: BonusConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The rules or holiday table fail validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<SchemeMetadata>(&path.join("scheme.yaml"))?;

        let rules = Self::load_yaml::<BonusRules>(&path.join("bonus.yaml"))?;
        rules.validate()?;

        let calendar = Self::load_holidays(&path.join("holidays"))?;

        info!(
            scheme = %metadata.code,
            holidays = calendar.len(),
            covered_years = ?calendar.covered_years(),
            "Loaded bonus scheme configuration"
        );

        Ok(Self {
            config: BonusConfig::new(metadata, rules, calendar),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all holiday files from the holidays directory.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<HolidayCalendar> {
        let holidays_dir_str = holidays_dir.display().to_string();

        if !holidays_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: holidays_dir_str,
            });
        }

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut years = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let year_config = Self::load_yaml::<HolidayYearConfig>(&path)?;
                debug!(
                    year = year_config.year,
                    holidays = year_config.holidays.len(),
                    "Loaded holiday file"
                );
                years.push((year_config.year, year_config.holidays));
            }
        }

        if years.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no holiday files found)", holidays_dir_str),
            });
        }

        HolidayCalendar::from_years(years)
    }

    /// Returns the underlying scheme configuration.
    pub fn config(&self) -> &BonusConfig {
        &self.config
    }

    /// Returns the scheme metadata.
    pub fn scheme(&self) -> &SchemeMetadata {
        self.config.scheme()
    }

    /// Returns the payout rules.
    pub fn rules(&self) -> &BonusRules {
        self.config.rules()
    }

    /// Returns the holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        self.config.calendar()
    }

    /// Builds a bonus engine sharing this configuration's calendar.
    pub fn engine(&self) -> BonusEngine {
        BonusEngine::new(*self.config.rules(), self.config.calendar().clone())
    }
}
