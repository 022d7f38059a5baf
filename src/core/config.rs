use crate::core::estimator::FundInput;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

/// A named household whose answers feed the estimator.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Profile {
    pub name: String,
    #[serde(flatten)]
    pub input: FundInput,
}

impl Profile {
    /// Wraps one-shot command line answers in an unnamed profile.
    pub fn adhoc(input: FundInput) -> Self {
        Profile {
            name: "Your household".to_string(),
            input,
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            name: "Household".to_string(),
            input: FundInput::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub profiles: Vec<Profile>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            profiles: vec![Profile::default()],
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "efund", "efund")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::estimator::{IncomeStability, RiskTolerance};

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
profiles:
  - name: "Primary"
    monthly_expenses: 4200
    income_stability: variable
    has_dependents: true
    risk_tolerance: low
  - name: "Partner"
    monthly_expenses: 1800
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.profiles.len(), 2);
        assert_eq!(config.profiles[0].name, "Primary");
        assert_eq!(config.profiles[0].input.monthly_expenses, 4200.0);
        assert_eq!(
            config.profiles[0].input.income_stability,
            IncomeStability::Variable
        );
        assert!(config.profiles[0].input.has_dependents);
        assert_eq!(config.profiles[0].input.risk_tolerance, RiskTolerance::Low);

        // Omitted answers fall back to the questionnaire defaults
        assert_eq!(config.profiles[1].name, "Partner");
        assert_eq!(config.profiles[1].input.monthly_expenses, 1800.0);
        assert_eq!(
            config.profiles[1].input.income_stability,
            IncomeStability::Stable
        );
        assert!(!config.profiles[1].input.has_dependents);
        assert_eq!(
            config.profiles[1].input.risk_tolerance,
            RiskTolerance::Medium
        );
    }

    #[test]
    fn test_profile_with_only_a_name_uses_all_defaults() {
        let yaml_str = r#"
profiles:
  - name: "Defaults"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.profiles[0].input, FundInput::default());
    }

    #[test]
    fn test_unknown_enum_value_is_rejected() {
        let yaml_str = r#"
profiles:
  - name: "Broken"
    risk_tolerance: reckless
"#;
        let result: std::result::Result<AppConfig, _> = serde_yaml::from_str(yaml_str);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let result = AppConfig::load_from_path("/nonexistent/efund/config.yaml");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }

    #[test]
    fn test_default_config_has_one_profile() {
        let config = AppConfig::default();
        assert_eq!(config.profiles.len(), 1);
        assert_eq!(config.profiles[0].name, "Household");
        assert_eq!(config.profiles[0].input, FundInput::default());
    }
}
