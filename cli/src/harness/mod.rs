//! End-to-end harness: build a scratch tree, apply a config to it, and
//! compare `getfacl` snapshots taken before and after.
mod environment;
mod snapshot;

pub use environment::{ENVIRONMENT_DIR, TEST_SUBDIRS, create_test_environment, resolve_base_dir};
pub use snapshot::{AclSnapshot, SnapshotDiff, capture, diff, save_snapshot};

use std::path::{Path, PathBuf};

use crate::config::{AclConfig, DirectoryPermissions, PermissionEntry};

/// Real principals the harness grants access to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestPrincipals {
    /// Granted `rwx` on the tree and `r--` on `subdir2/nested_subdir`.
    pub user: String,
    /// Granted `rw-` on the tree and on `subdir1`.
    pub other_user: String,
    /// Granted `r-x` on the tree.
    pub group: String,
}

/// Point `config` at `root` and replace every principal with a test one.
///
/// The override paths of the template are kept so both per-directory
/// overrides are exercised, but their placeholder principals are swapped
/// out: they almost never exist on a real host.
#[must_use]
pub fn test_config(mut config: AclConfig, root: &Path, principals: &TestPrincipals) -> AclConfig {
    config.target_directory = Some(root.to_path_buf());
    config.permissions = vec![
        PermissionEntry::user(&principals.user, "rwx"),
        PermissionEntry::group(&principals.group, "r-x"),
        PermissionEntry::user(&principals.other_user, "rw-"),
    ];
    config.per_dir_permissions = vec![
        DirectoryPermissions {
            path: PathBuf::from("subdir1"),
            permissions: vec![PermissionEntry::user(&principals.other_user, "rw-")],
        },
        DirectoryPermissions {
            path: PathBuf::from("subdir2/nested_subdir"),
            permissions: vec![PermissionEntry::user(&principals.user, "r--")],
        },
    ];
    config
}
