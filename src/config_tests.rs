use std::io::Write;

use super::*;

#[test]
fn empty_config_uses_defaults() {
    let config = AuditConfig::from_toml_str("").unwrap();
    assert_eq!(config.level, ComplianceLevel::AA);
    assert!(config.checks.contrast);
    assert!(config.checks.focus_order);
    assert!(config.reporting.max_issues_shown.is_none());
}

#[test]
fn level_selects_tier() {
    let config = AuditConfig::from_toml_str("level = \"AAA\"").unwrap();
    assert_eq!(config.level, ComplianceLevel::AAA);
}

#[test]
fn unknown_level_is_a_typed_error() {
    let err = AuditConfig::from_toml_str("level = \"AAAA\"").unwrap_err();
    assert!(matches!(err, AriaGuardError::TomlParse(_)));
}

#[test]
fn individual_checks_can_be_disabled() {
    let config = AuditConfig::from_toml_str(
        r#"
level = "AA"

[checks]
contrast = false
nesting = false
"#,
    )
    .unwrap();

    assert!(!config.checks.contrast);
    assert!(!config.checks.nesting);
    // Unmentioned checks keep their defaults.
    assert!(config.checks.focus_order);
    assert!(config.checks.font_size);
}

#[test]
fn reporting_cap_is_read() {
    let config = AuditConfig::from_toml_str("[reporting]\nmax_issues_shown = 25").unwrap();
    assert_eq!(config.reporting.max_issues_shown, Some(25));
}

#[test]
fn load_reads_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "level = \"A\"").unwrap();

    let config = AuditConfig::load(file.path()).unwrap();
    assert_eq!(config.level, ComplianceLevel::A);
}

#[test]
fn load_missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let err = AuditConfig::load(&path).unwrap_err();
    assert!(matches!(err, AriaGuardError::ConfigRead { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn config_round_trips_through_toml() {
    let config = AuditConfig {
        level: ComplianceLevel::AAA,
        checks: CheckConfig {
            color_only: false,
            ..CheckConfig::default()
        },
        reporting: ReportingConfig {
            max_issues_shown: Some(10),
        },
    };

    let text = toml::to_string(&config).unwrap();
    let parsed = AuditConfig::from_toml_str(&text).unwrap();
    assert_eq!(parsed, config);
}
