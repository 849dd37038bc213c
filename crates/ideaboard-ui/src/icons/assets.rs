//! Build-time icon set used by the board.

use super::{IconDefinition, IconPrefix};

/// Drag handle shown on each card.
pub const GRIP_LINES: IconDefinition =
    IconDefinition::new(IconPrefix::Solid, "grip-lines", 24, 24, "M4 9h16M4 15h16");

/// Favourite toggle.
pub const HEART: IconDefinition = IconDefinition::new(
    IconPrefix::Solid,
    "heart",
    24,
    24,
    "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2c-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
);

/// Idea marker in the board header.
pub const LIGHTBULB: IconDefinition = IconDefinition::new(
    IconPrefix::Regular,
    "lightbulb",
    24,
    24,
    "M15 14c.2-1 .7-1.7 1.5-2.5c1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5c.7.7 1.3 1.5 1.5 2.5M9 18h6m-5 4h4",
);

/// Add-card action.
pub const PLUS: IconDefinition =
    IconDefinition::new(IconPrefix::Solid, "plus", 24, 24, "M5 12h14m-7-7v14");

/// Delete-card action.
pub const TRASH_ALT: IconDefinition = IconDefinition::new(
    IconPrefix::Regular,
    "trash-alt",
    24,
    24,
    "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6M3 6h18M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2m-6 5v6m4-6v6",
);

/// Every icon the application references, registered once at startup.
#[must_use]
pub const fn application_icons() -> [IconDefinition; 5] {
    [GRIP_LINES, HEART, LIGHTBULB, PLUS, TRASH_ALT]
}

#[cfg(test)]
mod tests {
    use super::application_icons;

    #[test]
    fn application_icons_have_valid_identifiers() {
        for icon in application_icons() {
            assert!(icon.id().is_ok(), "{} should be registrable", icon.name());
            assert!(!icon.path().is_empty());
        }
    }
}
