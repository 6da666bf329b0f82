//! Integration tests for the config and panel public API.

use lintprefs::config::{
    load_settings, split_patterns, ConfigStore, FilterField, LintConfigValidator, MemoryStore,
    PatternKind, Provider, ValidationError, YamlStore, LSP_SECTION, PROVIDER_KEY,
};
use lintprefs::panel::{visible_groups, ApplyOutcome, GroupId, LintingPanel};
use lintprefs::LintPrefsError;
use std::fs;
use tempfile::TempDir;

#[test]
fn public_api_is_accessible() {
    let _validator = LintConfigValidator::new();
    let _store = MemoryStore::new();
    let _groups = visible_groups(Provider::default());
}

#[test]
fn validator_walkthrough() {
    let mut validator = LintConfigValidator::new();
    validator.set_provider(Provider::Extended);
    validator.set_filter(FilterField::Filenames, r"test_.*\.py, ");
    validator.set_filter(FilterField::Excludes, r"(?!test_).*\.py");
    validator.set_filter(FilterField::Select, "(((");
    assert!(validator.validate().is_ok());

    validator.set_filter(FilterField::Excludes, r"build/, *invalid");
    let err = validator.validate().unwrap_err();
    assert_eq!(err.kind(), PatternKind::Excludes);
    assert!(matches!(
        err,
        ValidationError::InvalidPattern { ref pattern, .. } if pattern == "*invalid"
    ));

    validator.set_provider(Provider::None);
    assert!(validator.validate().is_ok());
}

#[test]
fn split_patterns_skips_blanks() {
    assert_eq!(split_patterns(" a ,, b ,"), vec!["a", "b"]);
    assert!(split_patterns("  ").is_empty());
}

#[test]
fn groups_follow_provider() {
    let groups = visible_groups(Provider::Extended);
    assert!(groups.contains(&GroupId::Flake8Options));
    assert!(!groups.contains(&GroupId::PyflakesNotice));

    let groups = visible_groups(Provider::None);
    assert!(groups.contains(&GroupId::DisabledNotice));
    assert!(groups.contains(&GroupId::AdditionalOptions));
}

#[test]
fn panel_round_trip_through_yaml_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("settings.yml");

    let mut store = YamlStore::open(&path).unwrap();
    let mut panel = LintingPanel::open(&store).unwrap();
    panel.set_provider(Provider::Extended);
    panel.set_filter(FilterField::Excludes, r"(?!test_).*\.py");

    let outcome = panel.apply(&mut store).unwrap();
    assert!(matches!(outcome, ApplyOutcome::Applied { ref written } if written.len() == 2));
    assert!(path.exists());

    let reopened = YamlStore::open(&path).unwrap();
    let settings = load_settings(&reopened).unwrap();
    assert_eq!(settings.provider, Provider::Extended);
    assert_eq!(settings.filters.exclude, r"(?!test_).*\.py");
    assert_eq!(
        reopened.get_text(LSP_SECTION, PROVIDER_KEY).unwrap(),
        Some("flake8".to_string())
    );
}

#[test]
fn invalid_patterns_leave_file_untouched() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.yml");
    let original = "lsp:\n  linting_provider: flake8\n";
    fs::write(&path, original).unwrap();

    let mut store = YamlStore::open(&path).unwrap();
    let mut panel = LintingPanel::open(&store).unwrap();
    panel.set_filter(FilterField::Filenames, "[");
    panel.set_filter(FilterField::Select, "E113");

    let err = panel.apply(&mut store).unwrap_err();
    assert!(matches!(err, LintPrefsError::Validation(_)));
    assert!(panel.is_modified());
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn legacy_boolean_keys_select_provider() {
    let store = MemoryStore::new()
        .with(LSP_SECTION, "pyflakes", false)
        .with(LSP_SECTION, "flake8", true);
    let settings = load_settings(&store).unwrap();
    assert_eq!(settings.provider, Provider::Extended);
}
