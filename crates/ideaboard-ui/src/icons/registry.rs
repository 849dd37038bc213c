use std::collections::HashMap;

use tracing::debug;

use super::{IconDefinition, IconId};
use crate::error::RegistrationError;

/// Mapping from icon identifier to definition.
///
/// Built by the composition root during bootstrap and shared read-only with
/// the renderer afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IconRegistry {
    entries: HashMap<IconId, IconDefinition>,
}

impl IconRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a batch of definitions. Later registrations of an identifier replace
    /// earlier ones.
    ///
    /// The batch is validated before anything is inserted, so a failing call
    /// leaves the registry untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError`] when a definition has no resolvable identifier.
    pub fn register<I>(&mut self, icons: I) -> Result<(), RegistrationError>
    where
        I: IntoIterator<Item = IconDefinition>,
    {
        let staged = icons
            .into_iter()
            .map(|icon| icon.id().map(|id| (id, icon)))
            .collect::<Result<Vec<_>, _>>()?;
        let added = staged.len();
        self.entries.extend(staged);
        debug!(added, total = self.entries.len(), "icons registered");
        Ok(())
    }

    /// Find a definition by identifier (`plus`, `fa-plus`, `far:lightbulb`).
    #[must_use]
    pub fn lookup(&self, identifier: &str) -> Option<&IconDefinition> {
        IconId::parse(identifier).and_then(|id| self.get(&id))
    }

    /// Find a definition by parsed identifier.
    #[must_use]
    pub fn get(&self, id: &IconId) -> Option<&IconDefinition> {
        self.entries.get(id)
    }

    /// Number of distinct identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered identifiers in sorted order.
    #[must_use]
    pub fn identifiers(&self) -> Vec<IconId> {
        let mut ids: Vec<IconId> = self.entries.keys().cloned().collect();
        ids.sort();
        ids
    }
}
