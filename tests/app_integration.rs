use efund::AppCommand;
use efund::core::estimator::{FundInput, IncomeStability, RiskTolerance};
use std::fs;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    fs::write(config_file.path(), content).expect("Failed to write config file");
    config_file
}

#[test_log::test]
fn test_estimate_with_config_file() {
    let config_file = write_config(
        r#"
profiles:
  - name: "Primary"
    monthly_expenses: 3000
    income_stability: variable
    has_dependents: true
    risk_tolerance: low
  - name: "Partner"
    monthly_expenses: 1800
"#,
    );

    let result = efund::run_command(
        AppCommand::Estimate { input: None },
        Some(config_file.path().to_str().unwrap()),
    );
    assert!(result.is_ok(), "Estimate failed with: {:?}", result.err());
}

#[test_log::test]
fn test_breakdown_with_config_file() {
    let config_file = write_config(
        r#"
profiles:
  - name: "Lean"
    monthly_expenses: 4000
    risk_tolerance: high
"#,
    );

    let result = efund::run_command(
        AppCommand::Breakdown { input: None },
        Some(config_file.path().to_str().unwrap()),
    );
    assert!(result.is_ok(), "Breakdown failed with: {:?}", result.err());
}

#[test_log::test]
fn test_estimate_with_adhoc_input_ignores_config() {
    // No config path at all; the one-shot input must be self-sufficient
    let input = FundInput {
        monthly_expenses: 2500.0,
        income_stability: IncomeStability::Variable,
        has_dependents: false,
        risk_tolerance: RiskTolerance::Medium,
    };

    let result = efund::run_command(AppCommand::Estimate { input: Some(input) }, None);
    assert!(result.is_ok(), "Estimate failed with: {:?}", result.err());

    let result = efund::run_command(AppCommand::Breakdown { input: Some(input) }, None);
    assert!(result.is_ok(), "Breakdown failed with: {:?}", result.err());
}

#[test_log::test]
fn test_explicit_config_path_must_exist() {
    let result = efund::run_command(
        AppCommand::Estimate { input: None },
        Some("/nonexistent/efund/config.yaml"),
    );
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Failed to read config file")
    );
}

#[test_log::test]
fn test_invalid_yaml_is_rejected() {
    let config_file = write_config("profiles: [not, a, profile");

    let result = efund::run_command(
        AppCommand::Estimate { input: None },
        Some(config_file.path().to_str().unwrap()),
    );
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse config file")
    );
}

#[test_log::test]
fn test_empty_profile_list_is_rejected() {
    let config_file = write_config("profiles: []\n");

    let result = efund::run_command(
        AppCommand::Estimate { input: None },
        Some(config_file.path().to_str().unwrap()),
    );
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("No profiles"));
}

#[test_log::test]
fn test_tips_needs_no_config() {
    let result = efund::run_command(AppCommand::Tips, None);
    assert!(result.is_ok());
}
