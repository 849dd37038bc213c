#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! IdeaBoard Web UI bootstrap.
//!
//! Registers the bundled icon set, binds the icon renderer into the component
//! vocabulary, applies the diagnostic flag and mounts the Yew root into `#app`.
//! Everything except the browser host is DOM-free and runs natively.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod icons;
pub mod vocabulary;

pub use bootstrap::{
    BootstrapState, BootstrapStep, HeadlessDocument, HostDocument, MountTarget, MountedApp,
    Sequencer, bootstrap,
};
pub use config::{BootstrapConfig, BootstrapFlags};
pub use error::{
    BootstrapError, ConfigError, MountError, RegistrationError, SequenceError, VocabularyError,
};
pub use icons::{IconDefinition, IconId, IconPrefix, IconRegistry};
pub use vocabulary::{ComponentVocabulary, ICON_ALIAS, IconGlyph, IconRenderer, IconStyle};

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
