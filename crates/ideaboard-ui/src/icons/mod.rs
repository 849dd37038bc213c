//! Icon definitions, identifiers and the registry that stores them.
//!
//! Definitions are opaque to the rest of the crate: they are registered under a
//! `prefix:name` identifier and handed back verbatim to the renderer.

pub mod assets;
mod registry;

use std::fmt::{self, Display, Formatter};

use crate::error::RegistrationError;

pub use registry::IconRegistry;

/// Prefix assumed when an identifier omits one (`plus` == `fas:plus`).
pub const DEFAULT_PREFIX: IconPrefix = IconPrefix::Solid;

/// Style family an icon belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IconPrefix {
    /// Filled glyphs (`fas`).
    Solid,
    /// Outlined glyphs (`far`).
    Regular,
}

impl IconPrefix {
    /// Short prefix used in identifiers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "fas",
            Self::Regular => "far",
        }
    }

    /// Resolve a short prefix, returning `None` for unknown families.
    #[must_use]
    pub fn from_short(value: &str) -> Option<Self> {
        match value {
            "fas" => Some(Self::Solid),
            "far" => Some(Self::Regular),
            _ => None,
        }
    }
}

impl Display for IconPrefix {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Namespace-qualified icon identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IconId {
    prefix: IconPrefix,
    name: String,
}

impl IconId {
    /// Parse `name`, `fa-name` or `prefix:name`. Input is matched exactly;
    /// surrounding whitespace makes the identifier invalid.
    ///
    /// Returns `None` when the prefix is unknown or the name is not a valid
    /// glyph name; lookups treat that as a miss.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let (prefix, name) = match raw.split_once(':') {
            Some((prefix, name)) => (IconPrefix::from_short(prefix)?, name),
            None => (DEFAULT_PREFIX, raw),
        };
        let name = strip_fa(name);
        is_glyph_name(name).then(|| Self {
            prefix,
            name: name.to_string(),
        })
    }

    /// Style family of the icon.
    #[must_use]
    pub const fn prefix(&self) -> IconPrefix {
        self.prefix
    }

    /// Glyph name without prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for IconId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}:{}", self.prefix, self.name)
    }
}

/// An icon asset as shipped by the icon package.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconDefinition {
    prefix: IconPrefix,
    name: &'static str,
    width: u16,
    height: u16,
    path: &'static str,
}

impl IconDefinition {
    /// Build a definition from its raw parts.
    #[must_use]
    pub const fn new(
        prefix: IconPrefix,
        name: &'static str,
        width: u16,
        height: u16,
        path: &'static str,
    ) -> Self {
        Self {
            prefix,
            name,
            width,
            height,
            path,
        }
    }

    /// Style family.
    #[must_use]
    pub const fn prefix(&self) -> IconPrefix {
        self.prefix
    }

    /// Glyph name as supplied by the asset.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Glyph name with any leading `fa-` removed; the name the icon is
    /// registered and looked up under.
    #[must_use]
    pub fn glyph_name(&self) -> &'static str {
        strip_fa(self.name)
    }

    /// SVG path data.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// SVG `viewBox` attribute value.
    #[must_use]
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    /// Identifier the definition registers under.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError`] when the asset carries no usable name.
    pub fn id(&self) -> Result<IconId, RegistrationError> {
        if self.name.trim().is_empty() {
            return Err(RegistrationError::MissingName {
                prefix: self.prefix,
            });
        }
        let name = self.glyph_name();
        if !is_glyph_name(name) {
            return Err(RegistrationError::MalformedName {
                prefix: self.prefix,
                name: self.name.to_string(),
            });
        }
        Ok(IconId {
            prefix: self.prefix,
            name: name.to_string(),
        })
    }
}

fn strip_fa(name: &str) -> &str {
    name.strip_prefix("fa-").unwrap_or(name)
}

/// Lowercase alphanumeric segments joined by single dashes.
fn is_glyph_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('-').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_to_solid_prefix() {
        let id = IconId::parse("plus").expect("bare name parses");
        assert_eq!(id.prefix(), IconPrefix::Solid);
        assert_eq!(id.name(), "plus");
        assert_eq!(id.to_string(), "fas:plus");
    }

    #[test]
    fn parse_accepts_qualified_and_fa_prefixed_names() {
        let qualified = IconId::parse("far:trash-alt").expect("qualified parses");
        assert_eq!(qualified.prefix(), IconPrefix::Regular);
        assert_eq!(qualified.name(), "trash-alt");
        assert_eq!(IconId::parse("fa-plus"), IconId::parse("plus"));
        assert_eq!(IconId::parse("far:fa-lightbulb"), IconId::parse("far:lightbulb"));
    }

    #[test]
    fn parse_rejects_unknown_prefix_and_bad_names() {
        assert!(IconId::parse("fab:github").is_none());
        assert!(IconId::parse("").is_none());
        assert!(IconId::parse("Plus").is_none());
        assert!(IconId::parse("grip--lines").is_none());
        assert!(IconId::parse("fas:").is_none());
        assert!(IconId::parse(" plus").is_none());
        assert!(IconId::parse("plus\n").is_none());
    }

    #[test]
    fn definition_id_strips_fa_like_parse() {
        let icon = IconDefinition::new(IconPrefix::Solid, "fa-plus", 24, 24, "M0 0");
        assert_eq!(icon.glyph_name(), "plus");
        assert_eq!(icon.id().ok(), IconId::parse("plus"));
        assert_eq!(icon.id().ok(), IconId::parse("fas:fa-plus"));

        let bare = IconDefinition::new(IconPrefix::Regular, "fa-", 24, 24, "M0 0");
        assert!(matches!(
            bare.id(),
            Err(RegistrationError::MalformedName { .. })
        ));
    }

    #[test]
    fn definition_id_reports_malformed_assets() {
        let blank = IconDefinition::new(IconPrefix::Solid, "  ", 24, 24, "");
        assert_eq!(
            blank.id(),
            Err(RegistrationError::MissingName {
                prefix: IconPrefix::Solid
            })
        );

        let spaced = IconDefinition::new(IconPrefix::Regular, "trash alt", 24, 24, "");
        assert!(matches!(
            spaced.id(),
            Err(RegistrationError::MalformedName { .. })
        ));
    }

    #[test]
    fn view_box_uses_asset_dimensions() {
        let icon = IconDefinition::new(IconPrefix::Solid, "plus", 448, 512, "M0 0");
        assert_eq!(icon.view_box(), "0 0 448 512");
    }
}
