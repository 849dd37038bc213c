//! Component vocabulary: aliases the component tree can use without importing
//! the capability behind them.
//!
//! The composition root binds an [`IconRenderer`] under [`ICON_ALIAS`] and
//! hands the vocabulary to the root component, which provides the renderer to
//! the tree through context.

use std::collections::BTreeMap;
use std::rc::Rc;

use tracing::warn;

use crate::error::VocabularyError;
use crate::icons::{IconDefinition, IconRegistry};

/// Reserved alias for the icon renderer.
pub const ICON_ALIAS: &str = "fa-icon";

/// Icon rendering capability backed by a shared registry.
#[derive(Clone, Debug)]
pub struct IconRenderer {
    registry: Rc<IconRegistry>,
}

impl IconRenderer {
    /// Wrap a frozen registry.
    #[must_use]
    pub const fn new(registry: Rc<IconRegistry>) -> Self {
        Self { registry }
    }

    /// Registry consulted at render time.
    #[must_use]
    pub fn registry(&self) -> &IconRegistry {
        &self.registry
    }

    /// Resolve an identifier to something drawable. Unknown icons degrade to a
    /// placeholder.
    #[must_use]
    pub fn resolve(&self, identifier: &str) -> IconGlyph {
        self.registry.lookup(identifier).map_or_else(
            || {
                warn!(icon = identifier, "icon not registered; rendering placeholder");
                IconGlyph::Placeholder
            },
            |icon| IconGlyph::Icon(*icon),
        )
    }
}

impl PartialEq for IconRenderer {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.registry, &other.registry)
    }
}

/// Result of resolving an icon identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconGlyph {
    /// Registered definition to draw.
    Icon(IconDefinition),
    /// Nothing registered under the identifier.
    Placeholder,
}

/// Presentation options accepted by the icon component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IconStyle {
    /// Size token (`lg`, `2x`, `fa-xs`).
    pub size: Option<String>,
    /// Fixed-width layout.
    pub fixed_width: bool,
    /// Continuous rotation.
    pub spin: bool,
}

impl IconGlyph {
    /// CSS classes for the rendered `<svg>`.
    #[must_use]
    pub fn css_classes(&self, style: &IconStyle) -> Vec<String> {
        let mut classes = vec!["svg-inline--fa".to_string()];
        match self {
            Self::Icon(icon) => classes.push(format!("fa-{}", icon.glyph_name())),
            Self::Placeholder => classes.push("fa-missing".to_string()),
        }
        if let Some(size) = style.size.as_deref().map(size_class) {
            classes.push(size);
        }
        if style.fixed_width {
            classes.push("fa-fw".to_string());
        }
        if style.spin {
            classes.push("fa-spin".to_string());
        }
        classes
    }
}

fn size_class(raw: &str) -> String {
    if raw.starts_with("fa-") {
        raw.to_string()
    } else {
        format!("fa-{raw}")
    }
}

/// Aliases bound for the component tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComponentVocabulary {
    bindings: BTreeMap<String, IconRenderer>,
}

impl ComponentVocabulary {
    /// Empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `renderer` under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`VocabularyError::AliasTaken`] if the alias already has a
    /// binding, or [`VocabularyError::InvalidAlias`] for empty or spaced aliases.
    pub fn bind(&mut self, alias: &str, renderer: IconRenderer) -> Result<(), VocabularyError> {
        if alias.is_empty() || alias.chars().any(char::is_whitespace) {
            return Err(VocabularyError::InvalidAlias {
                alias: alias.to_string(),
            });
        }
        if self.bindings.contains_key(alias) {
            return Err(VocabularyError::AliasTaken {
                alias: alias.to_string(),
            });
        }
        self.bindings.insert(alias.to_string(), renderer);
        Ok(())
    }

    /// Capability bound under `alias`.
    #[must_use]
    pub fn resolve(&self, alias: &str) -> Option<&IconRenderer> {
        self.bindings.get(alias)
    }

    /// Renderer bound under [`ICON_ALIAS`].
    #[must_use]
    pub fn icon_renderer(&self) -> Option<&IconRenderer> {
        self.resolve(ICON_ALIAS)
    }

    /// Bound aliases in sorted order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::IconPrefix;
    use crate::icons::assets::{PLUS, application_icons};

    fn renderer() -> IconRenderer {
        let mut registry = IconRegistry::new();
        registry
            .register(application_icons())
            .expect("bundled icons register");
        IconRenderer::new(Rc::new(registry))
    }

    #[test]
    fn resolve_returns_placeholder_for_unknown_icons() {
        let renderer = renderer();
        assert_eq!(renderer.resolve("plus"), IconGlyph::Icon(PLUS));
        assert_eq!(renderer.resolve("star"), IconGlyph::Placeholder);
    }

    #[test]
    fn css_classes_reflect_style() {
        let style = IconStyle {
            size: Some("lg".to_string()),
            fixed_width: true,
            spin: true,
        };
        assert_eq!(
            IconGlyph::Icon(PLUS).css_classes(&style),
            ["svg-inline--fa", "fa-plus", "fa-lg", "fa-fw", "fa-spin"]
        );

        let style = IconStyle {
            size: Some("fa-2x".to_string()),
            ..IconStyle::default()
        };
        let fa_named = IconDefinition::new(IconPrefix::Solid, "fa-heart", 24, 24, "M0 0");
        assert_eq!(
            IconGlyph::Icon(fa_named).css_classes(&IconStyle::default()),
            ["svg-inline--fa", "fa-heart"]
        );
        assert_eq!(
            IconGlyph::Placeholder.css_classes(&style),
            ["svg-inline--fa", "fa-missing", "fa-2x"]
        );
    }

    #[test]
    fn alias_binds_once() {
        let mut vocabulary = ComponentVocabulary::new();
        let renderer = renderer();
        assert!(vocabulary.bind(ICON_ALIAS, renderer.clone()).is_ok());
        assert_eq!(
            vocabulary.bind(ICON_ALIAS, renderer.clone()),
            Err(VocabularyError::AliasTaken {
                alias: ICON_ALIAS.to_string()
            })
        );
        assert_eq!(vocabulary.aliases().collect::<Vec<_>>(), [ICON_ALIAS]);
        assert_eq!(vocabulary.icon_renderer(), Some(&renderer));
    }

    #[test]
    fn alias_must_be_a_single_token() {
        let mut vocabulary = ComponentVocabulary::new();
        assert!(matches!(
            vocabulary.bind("", renderer()),
            Err(VocabularyError::InvalidAlias { .. })
        ));
        assert!(matches!(
            vocabulary.bind("fa icon", renderer()),
            Err(VocabularyError::InvalidAlias { .. })
        ));
        assert!(vocabulary.resolve("fa icon").is_none());
    }

    #[test]
    fn renderers_compare_by_shared_registry() {
        let first = renderer();
        let second = renderer();
        assert_eq!(first, first.clone());
        assert_ne!(first, second);
        assert_eq!(first.registry(), second.registry());
    }
}
