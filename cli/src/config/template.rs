//! Example configuration emitted by `aclfw template`.
use std::path::{Path, PathBuf};

use super::{AclConfig, ApplyTo, DirectoryPermissions, PermissionEntry};
use crate::error::ConfigError;

/// Default file name for a generated template.
pub const DEFAULT_TEMPLATE_FILE: &str = "acl_template.yaml";

/// Build the example configuration.
///
/// Placeholder principals are upper-case so they stand out when editing.
#[must_use]
pub fn template() -> AclConfig {
    AclConfig {
        target_directory: Some(PathBuf::from("/path/to/target_dir")),
        permissions: vec![
            PermissionEntry::user("USERNAME", "rwx"),
            PermissionEntry::group("GROUPNAME", "r-x"),
        ],
        per_dir_permissions: vec![
            DirectoryPermissions {
                path: PathBuf::from("subdir1"),
                permissions: vec![PermissionEntry::user("ANOTHERUSER", "rw-")],
            },
            DirectoryPermissions {
                path: PathBuf::from("subdir2/nested_subdir"),
                permissions: vec![PermissionEntry::user("NEWUSER", "r--")],
            },
        ],
        apply_to: ApplyTo {
            directories: true,
            files: true,
            default: true,
        },
    }
}

/// Write the example configuration to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_template(path: &Path) -> Result<(), ConfigError> {
    template().save(path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn template_selects_every_scope() {
        let config = template();
        assert!(config.apply_to.directories);
        assert!(config.apply_to.files);
        assert!(config.apply_to.default);
    }

    #[test]
    fn template_has_user_and_group_grants() {
        let config = template();
        assert_eq!(config.permissions.len(), 2);
        assert_eq!(config.permissions[0].user.as_deref(), Some("USERNAME"));
        assert_eq!(config.permissions[1].group.as_deref(), Some("GROUPNAME"));
        assert_eq!(config.per_dir_permissions.len(), 2);
        assert_eq!(
            config.per_dir_permissions[1].path,
            PathBuf::from("subdir2/nested_subdir")
        );
    }

    #[test]
    fn written_template_keeps_key_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_TEMPLATE_FILE);
        write_template(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let doc: serde_yaml::Mapping = serde_yaml::from_str(&text).unwrap();
        let keys: Vec<&str> = doc.keys().filter_map(serde_yaml::Value::as_str).collect();
        assert_eq!(
            keys,
            [
                "target_directory",
                "permissions",
                "per_dir_permissions",
                "apply_to"
            ]
        );
    }

    #[test]
    fn written_template_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_TEMPLATE_FILE);
        write_template(&path).unwrap();
        assert_eq!(AclConfig::load(&path).unwrap(), template());
    }
}
