//! Error types raised while bootstrapping the UI.

use thiserror::Error;

use crate::bootstrap::{BootstrapState, BootstrapStep};
use crate::icons::IconPrefix;

/// An icon asset could not be registered.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// The definition carried an empty glyph name.
    #[error("icon definition has no name")]
    MissingName {
        /// Style family of the offending asset.
        prefix: IconPrefix,
    },
    /// The glyph name cannot be used as an identifier.
    #[error("icon name is not a valid identifier")]
    MalformedName {
        /// Style family of the offending asset.
        prefix: IconPrefix,
        /// Name as supplied by the asset.
        name: String,
    },
}

/// A component vocabulary alias could not be bound.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VocabularyError {
    /// Alias was empty or contained whitespace.
    #[error("invalid component alias")]
    InvalidAlias {
        /// Alias supplied by the caller.
        alias: String,
    },
    /// Alias already has a binding.
    #[error("component alias already bound")]
    AliasTaken {
        /// Alias supplied by the caller.
        alias: String,
    },
}

/// The root tree could not be attached to the host document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MountError {
    /// Selector did not match any element.
    #[error("mount target not found")]
    TargetMissing {
        /// Selector that failed to resolve.
        selector: String,
    },
}

/// A bootstrap step was invoked at the wrong time.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SequenceError {
    /// Step is not allowed from the current state.
    #[error("bootstrap step invoked out of order")]
    OutOfOrder {
        /// Step that was attempted.
        step: BootstrapStep,
        /// State the sequencer was in.
        state: BootstrapState,
    },
    /// Host element already carries a mounted application.
    #[error("application already mounted")]
    AlreadyMounted {
        /// Selector of the occupied element.
        selector: String,
    },
}

/// Bootstrap flags could not be read.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Payload was not a valid flags document.
    #[error("invalid bootstrap flags")]
    InvalidFlags {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// Environment variable held non-unicode data.
    #[error("bootstrap flags variable is not valid unicode")]
    NotUnicode {
        /// Variable that was read.
        variable: &'static str,
    },
}

/// Any failure that stops the application from mounting.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BootstrapError {
    /// Icon registration failed.
    #[error(transparent)]
    Registration(#[from] RegistrationError),
    /// Vocabulary binding failed.
    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
    /// Mounting failed.
    #[error(transparent)]
    Mount(#[from] MountError),
    /// Steps were invoked out of order.
    #[error(transparent)]
    Sequence(#[from] SequenceError),
}
