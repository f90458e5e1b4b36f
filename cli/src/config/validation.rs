//! Non-fatal configuration checks reported before any ACL is applied.
use std::path::Component;

use super::{AclConfig, PermissionEntry};

/// Longest symbolic permission string `setfacl` accepts (`rwxX`).
const SYMBOLIC_PERMS_MAX_LEN: usize = 4;

/// A validation warning detected during configuration loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// Where in the document the problem is (e.g. `permissions[1]`).
    pub source: String,
    /// The offending item, rendered for display.
    pub item: String,
    /// Human-readable warning message.
    pub message: String,
}

impl ValidationWarning {
    #[must_use]
    fn new(source: impl Into<String>, item: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            item: item.into(),
            message: message.into(),
        }
    }
}

/// Check the configuration for entries that will be skipped or misapplied.
#[must_use]
pub fn validate(config: &AclConfig) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for (i, entry) in config.permissions.iter().enumerate() {
        check_entry(&format!("permissions[{i}]"), entry, &mut warnings);
    }

    if !config.permissions.is_empty() && !config.apply_to.any() {
        warnings.push(ValidationWarning::new(
            "apply_to",
            "directories/files/default",
            "no scope selected; top-level permissions will not be applied",
        ));
    }

    for (i, dir) in config.per_dir_permissions.iter().enumerate() {
        let source = format!("per_dir_permissions[{i}]");
        let escapes = dir.path.is_absolute()
            || dir
                .path
                .components()
                .any(|c| matches!(c, Component::ParentDir));
        if escapes {
            warnings.push(ValidationWarning::new(
                &source,
                dir.path.display().to_string(),
                "path is not contained in the target directory",
            ));
        }
        for (j, entry) in dir.permissions.iter().enumerate() {
            check_entry(&format!("{source}.permissions[{j}]"), entry, &mut warnings);
        }
    }

    warnings
}

fn check_entry(source: &str, entry: &PermissionEntry, warnings: &mut Vec<ValidationWarning>) {
    let item = entry.to_string();

    match (&entry.user, &entry.group) {
        (None, None) => {
            warnings.push(ValidationWarning::new(
                source,
                &item,
                "neither user nor group is set; entry will be skipped",
            ));
        }
        (Some(_), Some(_)) => {
            warnings.push(ValidationWarning::new(
                source,
                &item,
                "both user and group are set; user takes precedence",
            ));
        }
        _ => {}
    }

    let empty_name = entry
        .user
        .as_deref()
        .or(entry.group.as_deref())
        .is_some_and(|name| name.trim().is_empty());
    if empty_name {
        warnings.push(ValidationWarning::new(
            source,
            &item,
            "principal name is empty; entry will be skipped",
        ));
    }

    match entry.permissions.as_deref() {
        None | Some("") => warnings.push(ValidationWarning::new(
            source,
            &item,
            "permissions are not set; entry will be skipped",
        )),
        Some(perms) if !is_valid_perms(perms) => warnings.push(ValidationWarning::new(
            source,
            &item,
            format!("unrecognised permission string '{perms}'"),
        )),
        Some(_) => {}
    }
}

/// Accept symbolic (`rwx`, `r-x`, `rwX`) or single-digit octal permissions.
fn is_valid_perms(perms: &str) -> bool {
    let symbolic = perms.len() <= SYMBOLIC_PERMS_MAX_LEN
        && perms.chars().all(|c| matches!(c, 'r' | 'w' | 'x' | 'X' | '-'));
    let octal = perms.len() == 1 && perms.chars().all(|c| matches!(c, '0'..='7'));
    symbolic || octal
}
