//! Startup sequencing.
//!
//! # Design
//! - Steps run in a fixed order: register icons, bind the vocabulary, apply
//!   flags, mount. Each step checks the current state and refuses to run out
//!   of order.
//! - The sequencer owns the registry until the vocabulary is bound; from then
//!   on it is shared read-only through [`IconRenderer`].
//! - Mounting is terminal. The host refuses a second mount onto the same
//!   element, so re-running the whole sequence fails at the mount step.

mod host;

use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::config::{BootstrapConfig, BootstrapFlags, DIAGNOSTIC_BANNER};
use crate::error::{BootstrapError, MountError, SequenceError};
use crate::icons::{IconDefinition, IconRegistry};
use crate::vocabulary::{ComponentVocabulary, ICON_ALIAS, IconRenderer};

pub use host::{DEFAULT_MOUNT_SELECTOR, HeadlessDocument, HeadlessMount, HostDocument, MountTarget};

/// Progress of a [`Sequencer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum BootstrapState {
    /// Nothing has run yet.
    #[default]
    Uninitialized,
    /// Icons are registered; more batches may still be added.
    IconsRegistered,
    /// Icon renderer is bound; the registry is frozen.
    VocabularyBound,
    /// Flags are applied.
    Configured,
    /// Root tree is attached. Terminal.
    Mounted,
}

impl BootstrapState {
    /// Stable name for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::IconsRegistered => "icons_registered",
            Self::VocabularyBound => "vocabulary_bound",
            Self::Configured => "configured",
            Self::Mounted => "mounted",
        }
    }
}

impl Display for BootstrapState {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Individual bootstrap steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootstrapStep {
    /// Populate the icon registry.
    RegisterIcons,
    /// Bind the icon renderer into the vocabulary.
    BindVocabulary,
    /// Apply [`BootstrapFlags`].
    Configure,
    /// Attach the root tree to the host.
    Mount,
}

impl BootstrapStep {
    const fn accepts(self, state: BootstrapState) -> bool {
        matches!(
            (self, state),
            (
                Self::RegisterIcons,
                BootstrapState::Uninitialized | BootstrapState::IconsRegistered
            ) | (Self::BindVocabulary, BootstrapState::IconsRegistered)
                | (Self::Configure, BootstrapState::VocabularyBound)
                | (Self::Mount, BootstrapState::Configured)
        )
    }

    const fn completes(self) -> BootstrapState {
        match self {
            Self::RegisterIcons => BootstrapState::IconsRegistered,
            Self::BindVocabulary => BootstrapState::VocabularyBound,
            Self::Configure => BootstrapState::Configured,
            Self::Mount => BootstrapState::Mounted,
        }
    }
}

/// Application attached to its host element.
#[derive(Debug)]
pub struct MountedApp<Handle> {
    handle: Handle,
    target: MountTarget,
    vocabulary: Rc<ComponentVocabulary>,
    flags: BootstrapFlags,
}

impl<Handle> MountedApp<Handle> {
    /// Host-specific handle for the attached tree.
    #[must_use]
    pub const fn handle(&self) -> &Handle {
        &self.handle
    }

    /// Give up the wrapper and keep only the host handle.
    #[must_use]
    pub fn into_handle(self) -> Handle {
        self.handle
    }

    /// Element the tree was attached to.
    #[must_use]
    pub const fn target(&self) -> &MountTarget {
        &self.target
    }

    /// Vocabulary provided to the tree.
    #[must_use]
    pub const fn vocabulary(&self) -> &Rc<ComponentVocabulary> {
        &self.vocabulary
    }

    /// Flags applied during bootstrap.
    #[must_use]
    pub const fn flags(&self) -> BootstrapFlags {
        self.flags
    }
}

/// Drives the bootstrap steps one at a time.
#[derive(Debug, Default)]
pub struct Sequencer {
    state: BootstrapState,
    registry: IconRegistry,
    vocabulary: Option<Rc<ComponentVocabulary>>,
    flags: BootstrapFlags,
}

impl Sequencer {
    /// Fresh sequencer in [`BootstrapState::Uninitialized`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> BootstrapState {
        self.state
    }

    /// Step 1: register a batch of icons. May be repeated until the vocabulary
    /// is bound.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::Sequence`] once the registry is frozen and
    /// [`BootstrapError::Registration`] for malformed definitions.
    pub fn register_icons<I>(&mut self, icons: I) -> Result<(), BootstrapError>
    where
        I: IntoIterator<Item = IconDefinition>,
    {
        self.guard(BootstrapStep::RegisterIcons)?;
        self.registry.register(icons)?;
        self.advance(BootstrapStep::RegisterIcons);
        Ok(())
    }

    /// Step 2: freeze the registry and bind the icon renderer under
    /// [`ICON_ALIAS`].
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::Sequence`] unless icons were registered and
    /// nothing is bound yet.
    pub fn bind_vocabulary(&mut self) -> Result<(), BootstrapError> {
        self.guard(BootstrapStep::BindVocabulary)?;
        let renderer = IconRenderer::new(Rc::new(std::mem::take(&mut self.registry)));
        let mut vocabulary = ComponentVocabulary::new();
        vocabulary.bind(ICON_ALIAS, renderer)?;
        self.vocabulary = Some(Rc::new(vocabulary));
        self.advance(BootstrapStep::BindVocabulary);
        Ok(())
    }

    /// Step 3: apply runtime flags. Emits the diagnostic banner once when enabled.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::Sequence`] unless the vocabulary is bound.
    pub fn configure<H: HostDocument>(
        &mut self,
        flags: BootstrapFlags,
        host: &mut H,
    ) -> Result<(), BootstrapError> {
        self.guard(BootstrapStep::Configure)?;
        self.flags = flags;
        if flags.diagnostic_banner_enabled {
            host.emit_banner(DIAGNOSTIC_BANNER);
        } else {
            debug!("diagnostic banner suppressed");
        }
        self.advance(BootstrapStep::Configure);
        Ok(())
    }

    /// Step 4: attach the root tree to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::Mount`] when the target does not resolve and
    /// [`BootstrapError::Sequence`] when called out of order or when the host
    /// element already carries an application.
    pub fn mount<H: HostDocument>(
        &mut self,
        target: &MountTarget,
        host: &mut H,
    ) -> Result<MountedApp<H::Handle>, BootstrapError> {
        self.guard(BootstrapStep::Mount)?;
        let vocabulary = self
            .vocabulary
            .clone()
            .ok_or(SequenceError::OutOfOrder {
                step: BootstrapStep::Mount,
                state: self.state,
            })?;
        let Some(element) = host.resolve(target) else {
            warn!(selector = %target, "mount target not found");
            return Err(MountError::TargetMissing {
                selector: target.selector().to_string(),
            }
            .into());
        };
        if host.is_mounted(&element) {
            warn!(selector = %target, "mount target already hosts the application");
            return Err(SequenceError::AlreadyMounted {
                selector: target.selector().to_string(),
            }
            .into());
        }
        let handle = host.attach(element, Rc::clone(&vocabulary));
        self.advance(BootstrapStep::Mount);
        info!(selector = %target, "application mounted");
        Ok(MountedApp {
            handle,
            target: target.clone(),
            vocabulary,
            flags: self.flags,
        })
    }

    fn guard(&self, step: BootstrapStep) -> Result<(), SequenceError> {
        if step.accepts(self.state) {
            return Ok(());
        }
        warn!(?step, state = %self.state, "bootstrap step rejected");
        Err(SequenceError::OutOfOrder {
            step,
            state: self.state,
        })
    }

    fn advance(&mut self, step: BootstrapStep) {
        self.state = step.completes();
        debug!(?step, state = %self.state, "bootstrap step complete");
    }
}

/// Run every step against `host` and return the mounted application.
///
/// # Errors
///
/// Propagates the first failing step; see [`Sequencer`].
pub fn bootstrap<H: HostDocument>(
    config: BootstrapConfig,
    host: &mut H,
) -> Result<MountedApp<H::Handle>, BootstrapError> {
    let BootstrapConfig {
        flags,
        target,
        icons,
    } = config;
    let mut sequencer = Sequencer::new();
    sequencer.register_icons(icons)?;
    sequencer.bind_vocabulary()?;
    sequencer.configure(flags, host)?;
    sequencer.mount(&target, host)
}
