//! Option group visibility.
//!
//! The view shows or hides option groups depending on the selected
//! provider. The mapping lives here as a pure function so front ends
//! never reimplement it.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::config::Provider;

/// An option group the view may display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupId {
    /// Provider radio selection.
    ProviderSelect,
    /// Flake8 filter fields.
    Flake8Options,
    /// Notice that pyflakes has no options.
    PyflakesNotice,
    /// Notice that linting is disabled.
    DisabledNotice,
    /// Display options such as underlining.
    AdditionalOptions,
}

impl GroupId {
    /// Heading or notice text for the group.
    pub fn label(&self) -> &'static str {
        match self {
            GroupId::ProviderSelect => "Provider",
            GroupId::Flake8Options => "Provider options",
            GroupId::PyflakesNotice => "There are no configuration options for Pyflakes",
            GroupId::DisabledNotice => "Linting is disabled",
            GroupId::AdditionalOptions => "Additional options",
        }
    }
}

/// Groups visible for a provider.
pub fn visible_groups(provider: Provider) -> BTreeSet<GroupId> {
    let provider_group = match provider {
        Provider::Extended => GroupId::Flake8Options,
        Provider::Basic => GroupId::PyflakesNotice,
        Provider::None => GroupId::DisabledNotice,
    };

    [
        GroupId::ProviderSelect,
        provider_group,
        GroupId::AdditionalOptions,
    ]
    .into_iter()
    .collect()
}
