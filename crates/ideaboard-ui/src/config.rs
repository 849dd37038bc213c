//! Bootstrap configuration: the diagnostic flag plus the inputs of one run.

use std::env::{self, VarError};

use serde::{Deserialize, Serialize};

use crate::bootstrap::MountTarget;
use crate::error::ConfigError;
use crate::icons::IconDefinition;
use crate::icons::assets::application_icons;

/// Environment variable holding the flags document for native runs.
pub const FLAGS_ENV: &str = "IDEABOARD_BOOTSTRAP";

/// Local storage key holding the flags document in the browser.
pub const FLAGS_STORAGE_KEY: &str = "ideaboard.bootstrap";

/// Message surfaced when the diagnostic banner is enabled.
pub const DIAGNOSTIC_BANNER: &str = "IdeaBoard is running a development build. \
Disable the diagnostic banner with {\"diagnosticBannerEnabled\": false}.";

/// Runtime flags applied once during bootstrap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct BootstrapFlags {
    /// Surface the development diagnostic banner. Gates only the banner.
    pub diagnostic_banner_enabled: bool,
}

impl BootstrapFlags {
    /// Parse a flags document such as `{"diagnosticBannerEnabled": true}`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFlags`] for malformed JSON or unknown keys.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|source| ConfigError::InvalidFlags { source })
    }

    /// Read flags from [`FLAGS_ENV`], defaulting when it is unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the variable is set but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_value(env::var(FLAGS_ENV))
    }

    fn from_env_value(value: Result<String, VarError>) -> Result<Self, ConfigError> {
        match value {
            Ok(raw) if raw.trim().is_empty() => Ok(Self::default()),
            Ok(raw) => Self::from_json(&raw),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode {
                variable: FLAGS_ENV,
            }),
        }
    }
}

/// Inputs for a single bootstrap run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BootstrapConfig {
    /// Runtime flags.
    pub flags: BootstrapFlags,
    /// Host element to mount into.
    pub target: MountTarget,
    /// Icons registered before mount.
    pub icons: Vec<IconDefinition>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            flags: BootstrapFlags::default(),
            target: MountTarget::default(),
            icons: application_icons().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn flags_default_to_disabled_banner() -> Result<(), ConfigError> {
        assert!(!BootstrapFlags::default().diagnostic_banner_enabled);
        assert_eq!(BootstrapFlags::from_json("{}")?, BootstrapFlags::default());
        Ok(())
    }

    #[test]
    fn flags_parse_camel_case_key() -> Result<(), ConfigError> {
        let flags = BootstrapFlags::from_json(r#"{"diagnosticBannerEnabled": true}"#)?;
        assert!(flags.diagnostic_banner_enabled);
        Ok(())
    }

    #[test]
    fn flags_reject_unknown_keys() {
        assert!(matches!(
            BootstrapFlags::from_json(r#"{"productionTip": false}"#),
            Err(ConfigError::InvalidFlags { .. })
        ));
        assert!(BootstrapFlags::from_json("not json").is_err());
    }

    #[test]
    fn env_value_handling() -> Result<(), ConfigError> {
        assert_eq!(
            BootstrapFlags::from_env_value(Err(VarError::NotPresent))?,
            BootstrapFlags::default()
        );
        assert_eq!(
            BootstrapFlags::from_env_value(Ok("  ".to_string()))?,
            BootstrapFlags::default()
        );
        assert!(
            BootstrapFlags::from_env_value(Ok(r#"{"diagnosticBannerEnabled":true}"#.to_string()))?
                .diagnostic_banner_enabled
        );
        assert!(matches!(
            BootstrapFlags::from_env_value(Err(VarError::NotUnicode(OsString::new()))),
            Err(ConfigError::NotUnicode { .. })
        ));
        Ok(())
    }

    #[test]
    fn default_config_targets_app_with_bundled_icons() {
        let config = BootstrapConfig::default();
        assert_eq!(config.target.selector(), "#app");
        assert_eq!(config.icons, application_icons());
        assert!(!config.flags.diagnostic_banner_enabled);
    }
}
