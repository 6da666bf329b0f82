//! Linting preferences session.
//!
//! A [`LintingPanel`] is opened from a store, edited in memory, and
//! written back only by [`LintingPanel::apply`]. A rejected apply leaves
//! both the store and the session untouched so the user can fix the input.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::config::{
    load_settings, ConfigStore, ConfigValue, FilterField, LintConfigValidator, LintingSettings,
    Provider, ValidationError, EDITOR_SECTION, LSP_SECTION, PROVIDER_KEY, UNDERLINE_ERRORS_KEY,
};
use crate::error::{LintPrefsError, Result};
use crate::ui::UserInterface;

use super::groups::{visible_groups, GroupId};

/// A persisted option the panel can edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PanelOption {
    /// The provider selection.
    Provider,
    /// One of the filter fields.
    Filter(FilterField),
    /// The underline toggle.
    UnderlineErrors,
}

impl PanelOption {
    /// Section the option is stored in.
    pub fn section(&self) -> &'static str {
        match self {
            PanelOption::UnderlineErrors => EDITOR_SECTION,
            _ => LSP_SECTION,
        }
    }

    /// Key within the section.
    pub fn key(&self) -> &'static str {
        match self {
            PanelOption::Provider => PROVIDER_KEY,
            PanelOption::Filter(field) => field.key(),
            PanelOption::UnderlineErrors => UNDERLINE_ERRORS_KEY,
        }
    }
}

impl std::fmt::Display for PanelOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.section(), self.key())
    }
}

/// Result of an apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Nothing was edited, the store was not touched.
    Unchanged,
    /// Changed options were written.
    Applied { written: Vec<PanelOption> },
    /// Validation failed and was reported; nothing was written.
    Rejected(ValidationError),
}

/// Editable linting preferences backed by a [`ConfigStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintingPanel {
    validator: LintConfigValidator,
    underline_errors: bool,
    changed: BTreeSet<PanelOption>,
}

impl LintingPanel {
    /// Open a session with the options currently in the store.
    ///
    /// # Errors
    ///
    /// Returns `UnknownProvider` or `TypeMismatch` for malformed stored values.
    pub fn open(store: &dyn ConfigStore) -> Result<Self> {
        let settings = load_settings(store)?;
        debug!(provider = %settings.provider, "Opened linting preferences");
        Ok(Self::from_settings(&settings))
    }

    /// Start a session from a settings snapshot.
    pub fn from_settings(settings: &LintingSettings) -> Self {
        Self {
            validator: LintConfigValidator::from_settings(settings),
            underline_errors: settings.underline_errors,
            changed: BTreeSet::new(),
        }
    }

    /// Select a provider.
    pub fn set_provider(&mut self, provider: Provider) {
        if self.validator.provider() != provider {
            self.validator.set_provider(provider);
            self.changed.insert(PanelOption::Provider);
        }
    }

    /// Replace the raw text of a filter field.
    pub fn set_filter(&mut self, field: FilterField, raw: impl Into<String>) {
        let raw = raw.into();
        if self.validator.filter(field) != raw {
            self.validator.set_filter(field, raw);
            self.changed.insert(PanelOption::Filter(field));
        }
    }

    /// Toggle underlining of errors and warnings.
    pub fn set_underline_errors(&mut self, underline: bool) {
        if self.underline_errors != underline {
            self.underline_errors = underline;
            self.changed.insert(PanelOption::UnderlineErrors);
        }
    }

    /// Current provider.
    pub fn provider(&self) -> Provider {
        self.validator.provider()
    }

    /// Raw text of a filter field.
    pub fn filter(&self, field: FilterField) -> &str {
        self.validator.filter(field)
    }

    /// Current underline toggle.
    pub fn underline_errors(&self) -> bool {
        self.underline_errors
    }

    /// Snapshot of the in-memory state.
    pub fn settings(&self) -> LintingSettings {
        LintingSettings {
            provider: self.validator.provider(),
            filters: self.validator.filters().clone(),
            underline_errors: self.underline_errors,
        }
    }

    /// Whether anything was edited since open or the last apply.
    pub fn is_modified(&self) -> bool {
        !self.changed.is_empty()
    }

    /// Options edited since open or the last apply.
    pub fn changed_options(&self) -> impl Iterator<Item = PanelOption> + '_ {
        self.changed.iter().copied()
    }

    /// Groups the view should display for the current provider.
    pub fn visible_groups(&self) -> BTreeSet<GroupId> {
        visible_groups(self.validator.provider())
    }

    /// Run the validation pass on the in-memory state.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        self.validator.validate()
    }

    fn value_of(&self, option: PanelOption) -> ConfigValue {
        match option {
            PanelOption::Provider => ConfigValue::from(self.validator.provider().key()),
            PanelOption::Filter(field) => ConfigValue::from(self.validator.filter(field)),
            PanelOption::UnderlineErrors => ConfigValue::Bool(self.underline_errors),
        }
    }

    /// Validate, then write changed options and flush the store.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if a filter pattern is invalid; nothing is
    /// written in that case. Store errors are propagated.
    pub fn apply(&mut self, store: &mut dyn ConfigStore) -> Result<ApplyOutcome> {
        if !self.is_modified() {
            debug!("No changes to apply");
            return Ok(ApplyOutcome::Unchanged);
        }

        self.validator.validate()?;

        let mut written = Vec::with_capacity(self.changed.len());
        for option in &self.changed {
            store.set(option.section(), option.key(), self.value_of(*option))?;
            written.push(*option);
        }
        store.flush()?;

        debug!("Applied {} option(s)", written.len());
        self.changed.clear();
        Ok(ApplyOutcome::Applied { written })
    }

    /// Apply, reporting a validation failure to the user.
    ///
    /// A failure is shown as an error message and returned as
    /// [`ApplyOutcome::Rejected`] so the caller can keep the session open.
    pub fn apply_with_ui(
        &mut self,
        store: &mut dyn ConfigStore,
        ui: &mut dyn UserInterface,
    ) -> Result<ApplyOutcome> {
        match self.apply(store) {
            Err(LintPrefsError::Validation(err)) => {
                warn!(field = %err.kind().field(), "Rejected invalid filter patterns");
                ui.error(&err.to_string());
                Ok(ApplyOutcome::Rejected(err))
            }
            other => other,
        }
    }
}
