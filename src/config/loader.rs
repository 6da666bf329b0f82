//! Settings file discovery and loading.
//!
//! The settings file is resolved in this order:
//! 1. Explicit path (`--config` or `LINTPREFS_CONFIG`)
//! 2. User config directory (`<config_dir>/lintprefs/settings.yml`)
//! 3. Home directory fallback (`~/.lintprefs/settings.yml`)

use std::path::{Path, PathBuf};

use crate::config::schema::{
    FilterField, LintingSettings, Provider, EDITOR_SECTION, LSP_SECTION, PROVIDER_KEY,
    UNDERLINE_ERRORS_KEY,
};
use crate::config::store::ConfigStore;
use crate::error::Result;

/// File name of the settings file.
pub const SETTINGS_FILE: &str = "settings.yml";

/// Per-radio boolean keys written by older versions, in selection priority.
const LEGACY_PROVIDER_KEYS: [(&str, Provider); 3] = [
    ("flake8", Provider::Extended),
    ("pyflakes", Provider::Basic),
    ("no_linting", Provider::None),
];

/// Resolve the settings file path.
pub fn settings_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Some(dir) = dirs::config_dir() {
        return dir.join("lintprefs").join(SETTINGS_FILE);
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("~"))
        .join(".lintprefs")
        .join(SETTINGS_FILE)
}

/// Read the persisted provider.
///
/// Falls back to the legacy per-radio booleans when no provider string is
/// stored (or it is blank), then to the default provider.
///
/// # Errors
///
/// Returns `UnknownProvider` for an unrecognised provider string.
pub fn load_provider(store: &dyn ConfigStore) -> Result<Provider> {
    let stored = store
        .get_text(LSP_SECTION, PROVIDER_KEY)?
        .filter(|value| !value.trim().is_empty());
    if let Some(value) = stored {
        return value.parse();
    }

    for (key, provider) in LEGACY_PROVIDER_KEYS {
        if store.get_bool(LSP_SECTION, key)? == Some(true) {
            tracing::debug!("Using legacy provider key '{}'", key);
            return Ok(provider);
        }
    }

    Ok(Provider::default())
}

/// Read the full linting settings snapshot from a store.
///
/// Missing options fall back to their defaults.
///
/// # Errors
///
/// Returns `UnknownProvider` or `TypeMismatch` for malformed values.
pub fn load_settings(store: &dyn ConfigStore) -> Result<LintingSettings> {
    let mut settings = LintingSettings {
        provider: load_provider(store)?,
        ..Default::default()
    };

    for field in FilterField::ALL {
        if let Some(raw) = store.get_text(LSP_SECTION, field.key())? {
            settings.filters.set(field, raw);
        }
    }

    if let Some(underline) = store.get_bool(EDITOR_SECTION, UNDERLINE_ERRORS_KEY)? {
        settings.underline_errors = underline;
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::store::MemoryStore;
    use crate::error::LintPrefsError;

    #[test]
    fn explicit_path_wins() {
        let path = settings_path(Some(Path::new("/tmp/custom.yml")));
        assert_eq!(path, PathBuf::from("/tmp/custom.yml"));
    }

    #[test]
    fn default_path_ends_with_settings_file() {
        let path = settings_path(None);
        assert!(path.ends_with(Path::new("lintprefs").join(SETTINGS_FILE))
            || path.ends_with(Path::new(".lintprefs").join(SETTINGS_FILE)));
    }

    #[test]
    fn empty_store_loads_defaults() {
        let settings = load_settings(&MemoryStore::new()).unwrap();
        assert_eq!(settings, LintingSettings::default());
    }

    #[test]
    fn loads_all_keys() {
        let store = MemoryStore::new()
            .with(LSP_SECTION, PROVIDER_KEY, "flake8")
            .with(LSP_SECTION, "flake8/filename", r"test_.*\.py")
            .with(LSP_SECTION, "flake8/exclude", "build")
            .with(LSP_SECTION, "flake8/extendSelect", "E113")
            .with(LSP_SECTION, "flake8/extendIgnore", "E,W,C90")
            .with(EDITOR_SECTION, UNDERLINE_ERRORS_KEY, true);

        let settings = load_settings(&store).unwrap();
        assert_eq!(settings.provider, Provider::Extended);
        assert_eq!(settings.filters.get(FilterField::Filenames), r"test_.*\.py");
        assert_eq!(settings.filters.get(FilterField::Excludes), "build");
        assert_eq!(settings.filters.get(FilterField::Select), "E113");
        assert_eq!(settings.filters.get(FilterField::Ignore), "E,W,C90");
        assert!(settings.underline_errors);
    }

    #[test]
    fn legacy_radio_keys_select_provider() {
        let store = MemoryStore::new()
            .with(LSP_SECTION, "pyflakes", false)
            .with(LSP_SECTION, "flake8", false)
            .with(LSP_SECTION, "no_linting", true);

        assert_eq!(load_provider(&store).unwrap(), Provider::None);
    }

    #[test]
    fn provider_string_overrides_legacy_keys() {
        let store = MemoryStore::new()
            .with(LSP_SECTION, PROVIDER_KEY, "pyflakes")
            .with(LSP_SECTION, "flake8", true);

        assert_eq!(load_provider(&store).unwrap(), Provider::Basic);
    }

    #[test]
    fn blank_provider_falls_back() {
        let store = MemoryStore::new()
            .with(LSP_SECTION, PROVIDER_KEY, "")
            .with(LSP_SECTION, "no_linting", true);
        assert_eq!(load_provider(&store).unwrap(), Provider::None);

        let store = MemoryStore::new().with(LSP_SECTION, PROVIDER_KEY, "  ");
        assert_eq!(load_provider(&store).unwrap(), Provider::default());
    }

    #[test]
    fn unknown_provider_is_an_error() {
        let store = MemoryStore::new().with(LSP_SECTION, PROVIDER_KEY, "pylint");
        let err = load_settings(&store).unwrap_err();
        assert!(matches!(err, LintPrefsError::UnknownProvider { .. }));
    }

    #[test]
    fn wrong_type_is_an_error() {
        let store = MemoryStore::new().with(LSP_SECTION, "flake8/filename", true);
        let err = load_settings(&store).unwrap_err();
        assert!(matches!(err, LintPrefsError::TypeMismatch { .. }));
    }
}
