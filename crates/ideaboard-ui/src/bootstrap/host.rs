//! Host document abstraction and the in-memory document used by headless runs.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

use crate::vocabulary::ComponentVocabulary;

/// Selector of the element the application mounts into.
pub const DEFAULT_MOUNT_SELECTOR: &str = "#app";

/// Host element selector.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MountTarget {
    selector: String,
}

impl MountTarget {
    /// Target the element matching `selector`.
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
        }
    }

    /// CSS selector.
    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }
}

impl Default for MountTarget {
    fn default() -> Self {
        Self::new(DEFAULT_MOUNT_SELECTOR)
    }
}

impl Display for MountTarget {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.selector)
    }
}

/// Document the application is attached to.
///
/// The browser implementation drives the Yew renderer; [`HeadlessDocument`]
/// records the same effects in memory.
pub trait HostDocument {
    /// Resolved host element.
    type Element;
    /// Handle returned once the root tree is attached.
    type Handle;

    /// Find the element `target` points at.
    fn resolve(&self, target: &MountTarget) -> Option<Self::Element>;

    /// Whether an application is already attached to `element`.
    fn is_mounted(&self, element: &Self::Element) -> bool;

    /// Attach the root tree, wired with `vocabulary`, to `element`.
    fn attach(
        &mut self,
        element: Self::Element,
        vocabulary: Rc<ComponentVocabulary>,
    ) -> Self::Handle;

    /// Surface the development diagnostic banner.
    fn emit_banner(&mut self, message: &str);
}

/// Root tree attached to a [`HeadlessDocument`] element.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadlessMount {
    /// Selector of the host element.
    pub selector: String,
    /// Vocabulary the tree was wired with.
    pub vocabulary: Rc<ComponentVocabulary>,
}

/// In-memory document with a fixed set of elements.
#[derive(Debug, Default)]
pub struct HeadlessDocument {
    elements: BTreeSet<String>,
    mounts: BTreeMap<String, HeadlessMount>,
    banners: Vec<String>,
}

impl HeadlessDocument {
    /// Document with no elements.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element reachable through `selector`.
    #[must_use]
    pub fn with_element(mut self, selector: impl Into<String>) -> Self {
        self.elements.insert(selector.into());
        self
    }

    /// Tree attached under `selector`, if any.
    #[must_use]
    pub fn mounted_at(&self, selector: &str) -> Option<&HeadlessMount> {
        self.mounts.get(selector)
    }

    /// Number of attached trees.
    #[must_use]
    pub fn mount_count(&self) -> usize {
        self.mounts.len()
    }

    /// Banners emitted so far.
    #[must_use]
    pub fn banners(&self) -> &[String] {
        &self.banners
    }
}

impl HostDocument for HeadlessDocument {
    type Element = String;
    type Handle = HeadlessMount;

    fn resolve(&self, target: &MountTarget) -> Option<String> {
        self.elements.get(target.selector()).cloned()
    }

    fn is_mounted(&self, element: &String) -> bool {
        self.mounts.contains_key(element)
    }

    fn attach(&mut self, element: String, vocabulary: Rc<ComponentVocabulary>) -> HeadlessMount {
        let mount = HeadlessMount {
            selector: element.clone(),
            vocabulary,
        };
        self.mounts.insert(element, mount.clone());
        mount
    }

    fn emit_banner(&mut self, message: &str) {
        self.banners.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_target_is_app_root() {
        assert_eq!(MountTarget::default().selector(), "#app");
        assert_eq!(MountTarget::new("#root").to_string(), "#root");
    }

    #[test]
    fn headless_document_tracks_mounts() {
        let mut document = HeadlessDocument::new().with_element("#app");
        assert!(document.resolve(&MountTarget::new("#missing")).is_none());

        let element = document
            .resolve(&MountTarget::default())
            .expect("element exists");
        assert!(!document.is_mounted(&element));

        let vocabulary = Rc::new(ComponentVocabulary::new());
        let handle = document.attach(element.clone(), Rc::clone(&vocabulary));
        assert!(document.is_mounted(&element));
        assert_eq!(document.mounted_at("#app"), Some(&handle));
        assert_eq!(document.mount_count(), 1);
    }

    #[test]
    fn headless_document_records_banners() {
        let mut document = HeadlessDocument::new();
        assert!(document.banners().is_empty());
        document.emit_banner("development build");
        assert_eq!(document.banners(), ["development build"]);
    }
}
