//! YAML configuration describing the ACL grants to apply.
pub mod template;
pub mod validation;
pub mod yaml_loader;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// A complete ACL configuration document.
///
/// Every key is optional and unknown keys are ignored, so partially written
/// documents still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclConfig {
    /// Root of the tree the grants apply to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_directory: Option<PathBuf>,
    /// Grants applied to the whole target tree.
    #[serde(default)]
    pub permissions: Vec<PermissionEntry>,
    /// Grants applied to individual subdirectories of the target.
    #[serde(default)]
    pub per_dir_permissions: Vec<DirectoryPermissions>,
    /// Which ACL scopes the top-level grants are written to.
    #[serde(default)]
    pub apply_to: ApplyTo,
}

/// One grant: a user or group and its permission string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionEntry {
    /// User name; takes precedence over `group` when both are set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Group name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Permission string such as `rwx` or `r-x`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<String>,
}

impl PermissionEntry {
    /// Grant for a user.
    #[must_use]
    pub fn user(name: &str, permissions: &str) -> Self {
        Self {
            user: Some(name.to_string()),
            group: None,
            permissions: Some(permissions.to_string()),
        }
    }

    /// Grant for a group.
    #[must_use]
    pub fn group(name: &str, permissions: &str) -> Self {
        Self {
            user: None,
            group: Some(name.to_string()),
            permissions: Some(permissions.to_string()),
        }
    }
}

impl fmt::Display for PermissionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(user) = &self.user {
            parts.push(format!("user: {user}"));
        }
        if let Some(group) = &self.group {
            parts.push(format!("group: {group}"));
        }
        if let Some(perms) = &self.permissions {
            parts.push(format!("permissions: {perms}"));
        }
        write!(f, "{{{}}}", parts.join(", "))
    }
}

/// Grants for one subdirectory, relative to the target directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryPermissions {
    /// Subdirectory path relative to `target_directory`.
    #[serde(default)]
    pub path: PathBuf,
    /// Grants applied to the subdirectory tree.
    #[serde(default)]
    pub permissions: Vec<PermissionEntry>,
}

/// Scope flags for the top-level grants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyTo {
    /// Grant on existing directories.
    #[serde(default)]
    pub directories: bool,
    /// Grant on existing files.
    #[serde(default)]
    pub files: bool,
    /// Install as the default ACL inherited by new entries.
    #[serde(default)]
    pub default: bool,
}

impl ApplyTo {
    /// Whether any scope is selected.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.directories || self.files || self.default
    }
}

impl AclConfig {
    /// Load a configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        yaml_loader::load(path)
    }

    /// Write this configuration to a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        yaml_loader::save(path, self)
    }

    /// Return the target directory, checking that it exists.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingTarget`] when no target is configured and
    /// [`ConfigError::TargetNotFound`] when it does not exist.
    pub fn resolve_target(&self) -> Result<PathBuf, ConfigError> {
        let target = self
            .target_directory
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(ConfigError::MissingTarget)?;
        if !target.exists() {
            return Err(ConfigError::TargetNotFound(target.clone()));
        }
        Ok(target.clone())
    }
}

#[cfg(test)]
#[allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_document() {
        let config: AclConfig = serde_yaml::from_str(
            "target_directory: /srv/data
permissions:
  - user: alice
    permissions: rwx
  - group: staff
    permissions: r-x
per_dir_permissions:
  - path: reports
    permissions:
      - user: bob
        permissions: rw-
apply_to:
  directories: true
  files: false
  default: true
",
        )
        .unwrap();

        assert_eq!(config.target_directory, Some(PathBuf::from("/srv/data")));
        assert_eq!(config.permissions.len(), 2);
        assert_eq!(config.permissions[0], PermissionEntry::user("alice", "rwx"));
        assert_eq!(config.permissions[1], PermissionEntry::group("staff", "r-x"));
        assert_eq!(config.per_dir_permissions[0].path, PathBuf::from("reports"));
        assert!(config.apply_to.directories);
        assert!(!config.apply_to.files);
        assert!(config.apply_to.default);
    }

    #[test]
    fn missing_keys_default_to_empty() {
        let config: AclConfig = serde_yaml::from_str("target_directory: /srv\n").unwrap();
        assert!(config.permissions.is_empty());
        assert!(config.per_dir_permissions.is_empty());
        assert!(!config.apply_to.any());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config: AclConfig =
            serde_yaml::from_str("target_directory: /srv\nowner: root\n").unwrap();
        assert_eq!(config.target_directory, Some(PathBuf::from("/srv")));
    }

    #[test]
    fn entry_display_lists_present_fields() {
        let entry = PermissionEntry {
            user: None,
            group: None,
            permissions: Some("rwx".to_string()),
        };
        assert_eq!(entry.to_string(), "{permissions: rwx}");
        assert_eq!(
            PermissionEntry::user("alice", "r--").to_string(),
            "{user: alice, permissions: r--}"
        );
    }

    #[test]
    fn resolve_target_requires_target() {
        let config = AclConfig::default();
        assert!(matches!(
            config.resolve_target(),
            Err(ConfigError::MissingTarget)
        ));

        let empty = AclConfig {
            target_directory: Some(PathBuf::new()),
            ..AclConfig::default()
        };
        assert!(matches!(
            empty.resolve_target(),
            Err(ConfigError::MissingTarget)
        ));
    }

    #[test]
    fn resolve_target_rejects_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let config = AclConfig {
            target_directory: Some(missing.clone()),
            ..AclConfig::default()
        };
        match config.resolve_target() {
            Err(ConfigError::TargetNotFound(path)) => assert_eq!(path, missing),
            other => panic!("expected TargetNotFound, got {other:?}"),
        }
    }

    #[test]
    fn resolve_target_accepts_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = AclConfig {
            target_directory: Some(dir.path().to_path_buf()),
            ..AclConfig::default()
        };
        assert_eq!(config.resolve_target().unwrap(), dir.path());
    }
}
